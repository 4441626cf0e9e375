use paginator_api::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use serde::Serialize;

use crate::repository::page_container::PageContainer;

/// Pagination request parameters for page-number based pagination
///
/// # Example
/// ```
/// use paginator_db::repository::pagination::PageRequest;
///
/// let request = PageRequest::new(2, 20)
///     .order_by("age ASC")
///     .order_by("name DESC");
///
/// assert_eq!(request.offset(), 20);
/// assert_eq!(request.order_by, vec!["age ASC", "name DESC"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Requested page, 1-based
    pub page: i64,
    /// Maximum number of items to return
    pub limit: i64,
    /// Ordering clauses, applied in sequence
    pub order_by: Vec<String>,
    /// Log the generated statements while the request runs
    pub show_sql: bool,
}

impl PageRequest {
    /// Create a new page request
    ///
    /// # Arguments
    /// * `page` - Page number (1-based, values below 1 are treated as 1)
    /// * `limit` - Number of items per page (0 selects the default page size)
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page,
            limit,
            order_by: Vec::new(),
            show_sql: false,
        }
    }

    /// Create a page request for a specific page number, already normalized
    ///
    /// # Example
    /// ```
    /// use paginator_db::repository::pagination::PageRequest;
    ///
    /// let first = PageRequest::for_page(0, 0); // page 1, 25 per page
    /// assert_eq!((first.page, first.limit), (1, 25));
    /// assert_eq!(PageRequest::for_page(3, 20).offset(), 40);
    /// ```
    pub fn for_page(page: i64, limit: i64) -> Self {
        Self::new(page, limit).normalized()
    }

    /// Append one ordering clause after the ones already present
    pub fn order_by(mut self, clause: impl Into<String>) -> Self {
        self.order_by.push(clause.into());
        self
    }

    /// Replace the ordering clauses
    pub fn with_order_by<I, S>(mut self, clauses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order_by = clauses.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_show_sql(mut self, show_sql: bool) -> Self {
        self.show_sql = show_sql;
        self
    }

    /// Apply the page and limit defaults.
    ///
    /// Negative limits are left untouched and reach the query engine as-is.
    pub fn normalized(mut self) -> Self {
        if self.page < DEFAULT_PAGE_NUMBER {
            self.page = DEFAULT_PAGE_NUMBER;
        }
        if self.limit == 0 {
            self.limit = DEFAULT_PAGE_SIZE;
        }
        self
    }

    /// Number of items to skip for this request
    ///
    /// # Example
    /// ```
    /// use paginator_db::repository::pagination::PageRequest;
    ///
    /// assert_eq!(PageRequest::new(1, 20).offset(), 0);
    /// assert_eq!(PageRequest::new(3, 20).offset(), 40);
    /// assert_eq!(PageRequest::new(-4, 20).offset(), 0);
    /// ```
    pub fn offset(&self) -> i64 {
        if self.page <= DEFAULT_PAGE_NUMBER {
            0
        } else {
            (self.page - 1).saturating_mul(self.limit)
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE)
    }
}

/// One page of query results together with its position in the full result set
///
/// # Example
/// ```
/// use paginator_db::repository::pagination::Page;
///
/// let page = Page::from_parts(vec![1, 2, 3], 100, 1, 20, 0);
///
/// assert_eq!(page.has_more(), true);
/// assert_eq!(page.last_page, 5);
/// assert_eq!((page.from, page.to), (1, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Position of the first item of `data` in the full result set, 0 when empty
    pub from: i64,
    /// Position of the last item of `data` in the full result set, 0 when empty
    pub to: i64,
    /// Total number of items across all pages
    pub total: i64,
    /// The items in this page
    pub data: T,
    pub per_page: i64,
    pub current_page: i64,
    /// Number of items skipped before this page
    #[serde(skip)]
    pub offset: i64,
    pub prev_page: Option<i64>,
    pub next_page: Option<i64>,
    pub last_page: i64,
}

impl<T: PageContainer> Page<T> {
    /// Assemble a page from fetched data and a total count
    ///
    /// # Arguments
    /// * `data` - The fetched items
    /// * `total` - Total number of items matching the query
    /// * `current_page` - Normalized page number
    /// * `per_page` - Normalized page size
    /// * `offset` - Number of items skipped by the fetch
    pub fn from_parts(data: T, total: i64, current_page: i64, per_page: i64, offset: i64) -> Self {
        let last_page = last_page(total, per_page);

        let (from, to) = match data.item_count() {
            Some(count) if count > 0 => {
                let count = i64::try_from(count).unwrap_or(i64::MAX);
                (offset.saturating_add(1), offset.saturating_add(count))
            }
            _ => (0, 0),
        };

        let prev_page = (current_page > 1).then(|| current_page - 1);
        let next_page = (current_page < last_page).then(|| current_page + 1);

        Self {
            from,
            to,
            total,
            data,
            per_page,
            current_page,
            offset,
            prev_page,
            next_page,
            last_page,
        }
    }
}

impl<T> Page<T> {
    /// Check if there are more pages after this one
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }

    /// Check if this is the first page
    pub fn is_first_page(&self) -> bool {
        self.prev_page.is_none()
    }

    /// Check if this is the last page
    pub fn is_last_page(&self) -> bool {
        !self.has_more()
    }

    /// Transform the page data while keeping the metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnOnce(T) -> U,
    {
        Page {
            from: self.from,
            to: self.to,
            total: self.total,
            data: f(self.data),
            per_page: self.per_page,
            current_page: self.current_page,
            offset: self.offset,
            prev_page: self.prev_page,
            next_page: self.next_page,
            last_page: self.last_page,
        }
    }
}

/// ceil(total / per_page), 0 for an empty set or a non-positive page size
fn last_page(total: i64, per_page: i64) -> i64 {
    if total <= 0 || per_page <= 0 {
        return 0;
    }
    total / per_page + i64::from(total % per_page != 0)
}
