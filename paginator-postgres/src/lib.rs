pub mod repository;

pub use repository::filter::{Filter, FilterOp, FilterValue};
pub use repository::pg_select::PgSelect;
pub use repository::statement::SelectStatement;

#[cfg(test)]
pub mod test_helper;
