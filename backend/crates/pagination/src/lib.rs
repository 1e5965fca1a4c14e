//! Pagination envelope primitives shared by backend list endpoints.
//!
//! List endpoints wrap their collections in [`Page`], a fixed envelope of
//! `items`, `cursor`, `page`, `pages`, and `total`. The backend currently
//! serves every collection as a single page, so [`Page::single`] is the only
//! constructor: it reports the whole collection with `cursor = 0`,
//! `page = 1`, and `pages = 1`.

use serde::{Deserialize, Serialize};

/// Envelope wrapping one page of a listed collection.
///
/// # Examples
/// ```
/// use pagination::Page;
///
/// let page = Page::single(vec!["a", "b"]);
/// assert_eq!(page.total, 2);
/// assert_eq!(page.page, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records on this page, in collection order.
    pub items: Vec<T>,
    /// Opaque continuation cursor; `0` when there is nothing to continue.
    pub cursor: u64,
    /// 1-based index of this page.
    pub page: u32,
    /// Total number of pages in the collection.
    pub pages: u32,
    /// Total number of records across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    /// Wrap an entire collection as the one and only page.
    #[must_use]
    pub fn single(items: Vec<T>) -> Self {
        let total = u64::try_from(items.len()).unwrap_or(u64::MAX);
        Self {
            items,
            cursor: 0,
            page: 1,
            pages: 1,
            total,
        }
    }
}
