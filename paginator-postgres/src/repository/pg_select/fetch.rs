use std::error::Error;

use sqlx::postgres::PgRow;
use sqlx::FromRow;
use tracing::debug;

use super::repo_impl::PgSelect;

impl<T> PgSelect<T>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    pub(super) async fn fetch_impl(
        repo: &PgSelect<T>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<T>, Box<dyn Error + Send + Sync>> {
        let mut query = repo.prepare_fetch(limit, offset);

        let rows = query
            .build_query_as::<T>()
            .fetch_all(&*repo.pool)
            .await?;

        debug!(table = %repo.statement.from, limit, offset, fetched = rows.len(), "Fetched page");
        Ok(rows)
    }
}
