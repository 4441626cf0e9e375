//! Pagination defaults applied when a request leaves a parameter unset.

/// Page size used when a request asks for a limit of zero.
pub const DEFAULT_PAGE_SIZE: i64 = 25;

/// First page; requested pages below this are normalized up to it.
pub const DEFAULT_PAGE_NUMBER: i64 = 1;
