use std::error::Error;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use paginator_db::repository::query_source::QuerySource;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::info;

use crate::repository::filter::{Filter, FilterOp, FilterValue};
use crate::repository::statement::SelectStatement;

/// A filtered SELECT over a Postgres pool, paginated into `Vec<T>`
///
/// Every execution acquires its own connection from the pool, so the count
/// and the page fetch of one pagination call never share a session.
///
/// # Example
/// ```ignore
/// let page = PgSelect::<PersonRow>::new(pool.clone(), "person")
///     .filter_eq("country", "DE")
///     .paginate(PageRequest::new(2, 50).order_by("last_name ASC"))
///     .await?;
/// ```
pub struct PgSelect<T> {
    pub(super) pool: Arc<PgPool>,
    pub(super) statement: SelectStatement,
    pub(super) show_sql: bool,
    _row: PhantomData<fn() -> T>,
}

impl<T> Clone for PgSelect<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            statement: self.statement.clone(),
            show_sql: self.show_sql,
            _row: PhantomData,
        }
    }
}

impl<T> PgSelect<T> {
    pub fn new(pool: Arc<PgPool>, from: impl Into<String>) -> Self {
        Self {
            pool,
            statement: SelectStatement::new(from),
            show_sql: false,
            _row: PhantomData,
        }
    }

    /// Replace the `*` projection; the count then runs over the same projection
    pub fn columns(mut self, columns: impl Into<String>) -> Self {
        self.statement.columns = columns.into();
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.statement.filters.push(filter);
        self
    }

    fn compare(
        self,
        column: impl Into<String>,
        op: FilterOp,
        value: impl Into<FilterValue>,
    ) -> Self {
        self.filter(Filter::Compare {
            column: column.into(),
            op,
            value: value.into(),
        })
    }

    pub fn filter_eq(self, column: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.compare(column, FilterOp::Eq, value)
    }

    pub fn filter_ne(self, column: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.compare(column, FilterOp::Ne, value)
    }

    pub fn filter_gt(self, column: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.compare(column, FilterOp::Gt, value)
    }

    pub fn filter_gte(self, column: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.compare(column, FilterOp::Gte, value)
    }

    pub fn filter_lt(self, column: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.compare(column, FilterOp::Lt, value)
    }

    pub fn filter_lte(self, column: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.compare(column, FilterOp::Lte, value)
    }

    pub fn filter_like(self, column: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.compare(column, FilterOp::Like, FilterValue::Text(pattern.into()))
    }

    pub fn filter_is_null(self, column: impl Into<String>) -> Self {
        self.filter(Filter::IsNull {
            column: column.into(),
            negated: false,
        })
    }

    pub fn filter_is_not_null(self, column: impl Into<String>) -> Self {
        self.filter(Filter::IsNull {
            column: column.into(),
            negated: true,
        })
    }

    /// Add a raw condition, written into the WHERE clause as-is
    pub fn where_sql(self, fragment: impl Into<String>) -> Self {
        self.filter(Filter::Raw(fragment.into()))
    }

    pub fn statement(&self) -> &SelectStatement {
        &self.statement
    }

    /// Build the count statement, logging it when `show_sql` is set
    pub(super) fn prepare_count(&self) -> QueryBuilder<'static, Postgres> {
        let query = self.statement.build_count();
        self.log_statement(&query);
        query
    }

    /// Build the page statement, logging it when `show_sql` is set
    pub(super) fn prepare_fetch(&self, limit: i64, offset: i64) -> QueryBuilder<'static, Postgres> {
        let query = self.statement.build_fetch(limit, offset);
        self.log_statement(&query);
        query
    }

    fn log_statement(&self, query: &QueryBuilder<'static, Postgres>) {
        if self.show_sql {
            info!(target: "paginator::sql", sql = query.sql(), "Executing statement");
        }
    }
}

#[async_trait]
impl<T> QuerySource for PgSelect<T>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static,
{
    type Container = Vec<T>;

    fn order_by(&mut self, clause: &str) {
        self.statement.order_by.push(clause.to_string());
    }

    fn show_sql(&mut self) {
        self.show_sql = true;
    }

    async fn count(&self) -> Result<i64, Box<dyn Error + Send + Sync>> {
        Self::count_impl(self).await
    }

    async fn fetch(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<T>, Box<dyn Error + Send + Sync>> {
        Self::fetch_impl(self, limit, offset).await
    }
}
