use std::collections::VecDeque;

use serde::Serialize;

/// Result container a query handle fetches a page into
///
/// The item count drives the `from`/`to` range of a [`Page`](crate::repository::pagination::Page).
/// Sequence containers report their length; containers holding a single
/// value have no meaningful count and return `None`, which leaves the
/// range at zero.
pub trait PageContainer {
    /// Number of records held, or `None` when the container is not a sequence
    fn item_count(&self) -> Option<usize>;
}

impl<T> PageContainer for Vec<T> {
    fn item_count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> PageContainer for VecDeque<T> {
    fn item_count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> PageContainer for Box<[T]> {
    fn item_count(&self) -> Option<usize> {
        Some(self.len())
    }
}

/// Wrapper for non-sequence results such as an aggregate row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Scalar<T>(pub T);

impl<T> Scalar<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> PageContainer for Scalar<T> {
    fn item_count(&self) -> Option<usize> {
        None
    }
}
