use sqlx::{Postgres, QueryBuilder};

use super::filter::Filter;

/// SQL shape of a paginated SELECT: source, projection, filters and ordering
///
/// The count statement never carries ordering, limit or offset; those belong
/// to the page fetch alone.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    /// Table name or join expression written after FROM
    pub from: String,
    /// Projection written after SELECT
    pub columns: String,
    pub filters: Vec<Filter>,
    pub order_by: Vec<String>,
}

impl SelectStatement {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            columns: "*".to_string(),
            filters: Vec::new(),
            order_by: Vec::new(),
        }
    }

    /// Build `SELECT COUNT(*) FROM .. WHERE ..`
    ///
    /// A custom projection is counted as a subquery so that projections which
    /// change the row count, such as `DISTINCT`, count the rows the fetch returns.
    pub fn build_count(&self) -> QueryBuilder<'static, Postgres> {
        if self.columns == "*" {
            let mut query = QueryBuilder::new(format!("SELECT COUNT(*) FROM {}", self.from));
            self.push_filters(&mut query);
            return query;
        }

        let mut query = QueryBuilder::new(format!(
            "SELECT COUNT(*) FROM (SELECT {} FROM {}",
            self.columns, self.from
        ));
        self.push_filters(&mut query);
        query.push(") AS counted");
        query
    }

    /// Build `SELECT .. FROM .. WHERE .. ORDER BY .. LIMIT $n OFFSET $m`
    pub fn build_fetch(&self, limit: i64, offset: i64) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new(format!("SELECT {} FROM {}", self.columns, self.from));
        self.push_filters(&mut query);

        if !self.order_by.is_empty() {
            query.push(" ORDER BY ");
            query.push(self.order_by.join(", "));
        }

        query.push(" LIMIT ");
        query.push_bind(limit);
        query.push(" OFFSET ");
        query.push_bind(offset);
        query
    }

    fn push_filters(&self, query: &mut QueryBuilder<'static, Postgres>) {
        for (i, filter) in self.filters.iter().enumerate() {
            query.push(if i == 0 { " WHERE " } else { " AND " });
            filter.push_sql(query);
        }
    }
}
