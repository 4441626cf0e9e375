use std::error::Error;

use tracing::debug;

use super::repo_impl::PgSelect;

impl<T> PgSelect<T> {
    pub(super) async fn count_impl(
        repo: &PgSelect<T>,
    ) -> Result<i64, Box<dyn Error + Send + Sync>> {
        let mut query = repo.prepare_count();

        let total: i64 = query
            .build_query_scalar::<i64>()
            .fetch_one(&*repo.pool)
            .await?;

        debug!(table = %repo.statement.from, total, "Counted rows");
        Ok(total)
    }
}
