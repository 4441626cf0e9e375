use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

/// Comparison operator of a bound filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
}

impl FilterOp {
    pub fn as_sql(&self) -> &'static str {
        match self {
            FilterOp::Eq => "=",
            FilterOp::Ne => "<>",
            FilterOp::Gt => ">",
            FilterOp::Gte => ">=",
            FilterOp::Lt => "<",
            FilterOp::Lte => "<=",
            FilterOp::Like => "LIKE",
        }
    }
}

/// A value bound as a query parameter
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    BigInt(i64),
    Int(i32),
    Text(String),
    Bool(bool),
    Uuid(Uuid),
    Timestamp(DateTime<Utc>),
    Decimal(Decimal),
}

impl FilterValue {
    pub(crate) fn push_bind(&self, query: &mut QueryBuilder<'static, Postgres>) {
        match self {
            FilterValue::BigInt(v) => query.push_bind(*v),
            FilterValue::Int(v) => query.push_bind(*v),
            FilterValue::Text(v) => query.push_bind(v.clone()),
            FilterValue::Bool(v) => query.push_bind(*v),
            FilterValue::Uuid(v) => query.push_bind(*v),
            FilterValue::Timestamp(v) => query.push_bind(*v),
            FilterValue::Decimal(v) => query.push_bind(*v),
        };
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        FilterValue::BigInt(v)
    }
}

impl From<i32> for FilterValue {
    fn from(v: i32) -> Self {
        FilterValue::Int(v)
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::Text(v)
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::Text(v.to_string())
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        FilterValue::Bool(v)
    }
}

impl From<Uuid> for FilterValue {
    fn from(v: Uuid) -> Self {
        FilterValue::Uuid(v)
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(v: DateTime<Utc>) -> Self {
        FilterValue::Timestamp(v)
    }
}

impl From<Decimal> for FilterValue {
    fn from(v: Decimal) -> Self {
        FilterValue::Decimal(v)
    }
}

/// One WHERE condition, joined to the others with AND
///
/// Column names and raw fragments are written into the statement verbatim;
/// only values are bound as parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Compare {
        column: String,
        op: FilterOp,
        value: FilterValue,
    },
    IsNull {
        column: String,
        negated: bool,
    },
    Raw(String),
}

impl Filter {
    pub(crate) fn push_sql(&self, query: &mut QueryBuilder<'static, Postgres>) {
        match self {
            Filter::Compare { column, op, value } => {
                query.push(format!("{} {} ", column, op.as_sql()));
                value.push_bind(query);
            }
            Filter::IsNull { column, negated } => {
                let test = if *negated { "IS NOT NULL" } else { "IS NULL" };
                query.push(format!("{column} {test}"));
            }
            Filter::Raw(fragment) => {
                query.push(format!("({fragment})"));
            }
        }
    }
}
