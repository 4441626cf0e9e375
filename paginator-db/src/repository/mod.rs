pub mod count_records;
pub mod page_container;
pub mod paginate;
pub mod pagination;
pub mod query_source;

#[cfg(test)]
pub mod test_utils;

// Re-exports
pub use count_records::*;
pub use page_container::*;
pub use paginate::*;
pub use pagination::*;
pub use query_source::*;
