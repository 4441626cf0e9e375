use paginator_api::BoxError;
use tracing::debug;

use crate::repository::query_source::QuerySource;

/// Count the records matching `source`'s filters.
///
/// Takes the handle by value so it can run on its own task; the caller keeps
/// a separate clone for the page fetch.
pub async fn count_records<Q: QuerySource>(source: Q) -> Result<i64, BoxError> {
    let total = source.count().await?;
    debug!(total, "Counted matching records");
    Ok(total)
}
