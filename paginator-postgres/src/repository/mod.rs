pub mod filter;
pub mod pg_select;
pub mod statement;

pub use filter::*;
pub use pg_select::PgSelect;
pub use statement::SelectStatement;
