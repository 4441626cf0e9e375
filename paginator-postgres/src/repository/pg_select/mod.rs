pub mod count;
pub mod fetch;
pub mod repo_impl;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::PgSelect;
