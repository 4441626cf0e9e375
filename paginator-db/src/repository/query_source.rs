use async_trait::async_trait;
use paginator_api::BoxError;

use crate::repository::page_container::PageContainer;

/// A prepared, filtered query that can be counted and fetched a page at a time
///
/// Implementations hold the filter state of one query. Every clone must be
/// independent of the handle it was cloned from: ordering or execution on one clone never
/// changes what another clone sees. The paginator relies on this to run the
/// count and the page fetch at the same time.
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl QuerySource for PgSelect<UserModel> {
///     type Container = Vec<UserModel>;
///
///     async fn count(&self) -> Result<i64, BoxError> {
///         // SELECT COUNT(*) FROM users WHERE ...
///     }
///
///     async fn fetch(&self, limit: i64, offset: i64) -> Result<Vec<UserModel>, BoxError> {
///         // SELECT * FROM users WHERE ... ORDER BY ... LIMIT $n OFFSET $m
///     }
/// }
/// ```
#[async_trait]
pub trait QuerySource: Clone + Send + Sync + 'static {
    /// Container the fetched page is collected into
    type Container: PageContainer + Send + 'static;

    /// Append an ordering clause after the existing ones
    ///
    /// The clause is passed to the engine uninterpreted; a malformed clause
    /// surfaces as an execution error when the query runs.
    fn order_by(&mut self, clause: &str);

    /// Log the statements this handle executes
    fn show_sql(&mut self);

    /// Count every record matching the filters
    ///
    /// # Returns
    /// * `Ok(i64)` - The number of matching records, ignoring ordering, limit and offset
    /// * `Err` - An error if the query could not be executed
    async fn count(&self) -> Result<i64, BoxError>;

    /// Fetch one window of the ordered result set
    ///
    /// # Arguments
    /// * `limit` - Maximum number of records to return
    /// * `offset` - Number of records to skip
    async fn fetch(&self, limit: i64, offset: i64) -> Result<Self::Container, BoxError>;
}
