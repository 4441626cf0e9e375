//! In-memory query source for exercising the paginator without a database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use paginator_api::BoxError;

use crate::repository::page_container::Scalar;
use crate::repository::query_source::QuerySource;

/// A query as seen by the source at execution time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedQuery {
    Count {
        order_by: Vec<String>,
        show_sql: bool,
    },
    Fetch {
        order_by: Vec<String>,
        limit: i64,
        offset: i64,
        show_sql: bool,
    },
}

/// Shared log of executed queries, visible from every clone of a source
#[derive(Debug, Clone, Default)]
pub struct QueryLog(Arc<Mutex<Vec<RecordedQuery>>>);

impl QueryLog {
    fn record(&self, query: RecordedQuery) {
        self.0.lock().unwrap().push(query);
    }

    pub fn snapshot(&self) -> Vec<RecordedQuery> {
        self.0.lock().unwrap().clone()
    }

    pub fn count_queries(&self) -> Vec<RecordedQuery> {
        self.snapshot()
            .into_iter()
            .filter(|q| matches!(q, RecordedQuery::Count { .. }))
            .collect()
    }

    pub fn fetch_queries(&self) -> Vec<RecordedQuery> {
        self.snapshot()
            .into_iter()
            .filter(|q| matches!(q, RecordedQuery::Fetch { .. }))
            .collect()
    }
}

/// Rows are the integers `1..=n`
#[derive(Debug, Clone)]
pub struct InMemorySource {
    rows: Arc<Vec<i64>>,
    order_by: Vec<String>,
    show_sql: bool,
    fail_count: bool,
    fail_fetch: bool,
    panic_on_count: bool,
    log: QueryLog,
}

impl InMemorySource {
    pub fn with_rows(n: i64) -> Self {
        Self {
            rows: Arc::new((1..=n).collect()),
            order_by: Vec::new(),
            show_sql: false,
            fail_count: false,
            fail_fetch: false,
            panic_on_count: false,
            log: QueryLog::default(),
        }
    }

    pub fn failing_count(mut self) -> Self {
        self.fail_count = true;
        self
    }

    pub fn failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    pub fn panicking_count(mut self) -> Self {
        self.panic_on_count = true;
        self
    }

    pub fn log(&self) -> QueryLog {
        self.log.clone()
    }
}

#[async_trait]
impl QuerySource for InMemorySource {
    type Container = Vec<i64>;

    fn order_by(&mut self, clause: &str) {
        self.order_by.push(clause.to_string());
    }

    fn show_sql(&mut self) {
        self.show_sql = true;
    }

    async fn count(&self) -> Result<i64, BoxError> {
        self.log.record(RecordedQuery::Count {
            order_by: self.order_by.clone(),
            show_sql: self.show_sql,
        });
        if self.panic_on_count {
            panic!("count worker crashed");
        }
        if self.fail_count {
            return Err("connection reset while counting".into());
        }
        Ok(self.rows.len() as i64)
    }

    async fn fetch(&self, limit: i64, offset: i64) -> Result<Vec<i64>, BoxError> {
        self.log.record(RecordedQuery::Fetch {
            order_by: self.order_by.clone(),
            limit,
            offset,
            show_sql: self.show_sql,
        });
        if self.fail_fetch {
            return Err("connection reset while fetching".into());
        }
        if limit < 0 {
            return Err("LIMIT must not be negative".into());
        }
        Ok(self
            .rows
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .copied()
            .collect())
    }
}

/// Source whose fetch yields a single aggregate value
#[derive(Debug, Clone)]
pub struct ScalarSource {
    pub total: i64,
}

#[async_trait]
impl QuerySource for ScalarSource {
    type Container = Scalar<i64>;

    fn order_by(&mut self, _clause: &str) {}

    fn show_sql(&mut self) {}

    async fn count(&self) -> Result<i64, BoxError> {
        Ok(self.total)
    }

    async fn fetch(&self, _limit: i64, _offset: i64) -> Result<Scalar<i64>, BoxError> {
        Ok(Scalar(self.total))
    }
}
