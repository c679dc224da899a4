//! Client-side list filtering and pagination.
//!
//! The list endpoints return full collections; search and paging happen on
//! the client. [`ListFilter`] captures the query, [`Searchable`] names the
//! fields it runs against, and [`ListFilter::apply`] produces the page to
//! render.

use serde::Serialize;

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Maximum number of items per page.
pub const MAX_PAGE_SIZE: usize = 100;

/// Record that can be matched against a free-text search query.
pub trait Searchable {
    /// Returns the text fields a search query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Returns whether any search field contains `needle`.
    ///
    /// `needle` must already be lowercased.
    fn matches(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Search query and page selection for a list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilter {
    /// Free-text search query.
    pub search: Option<String>,
    /// Page number, 1-based.
    pub page: usize,
    /// Number of items per page.
    pub per_page: usize,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            search: None,
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListFilter {
    /// Creates a filter with no search on the first page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search query. Blank queries count as no search.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        let trimmed = search.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_owned());
        self
    }

    /// Sets the page number, clamped to 1 or above.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Sets the page size, clamped to `1..=MAX_PAGE_SIZE`.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// Filters `items` by the search query and cuts out the selected page.
    ///
    /// `total` on the returned page counts every match, not just the ones
    /// on this page. A page past the end comes back empty.
    pub fn apply<T: Searchable>(&self, items: Vec<T>) -> Page<T> {
        let filtered: Vec<T> = match self.search.as_deref() {
            Some(query) => {
                let needle = query.to_lowercase();
                items
                    .into_iter()
                    .filter(|item| item.matches(&needle))
                    .collect()
            }
            None => items,
        };

        let total = filtered.len();
        let start = (self.page - 1) * self.per_page;
        let items = filtered
            .into_iter()
            .skip(start)
            .take(self.per_page)
            .collect();

        Page {
            items,
            total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

/// One page of a filtered list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Total number of matches across all pages.
    pub total: usize,
    /// Page number, 1-based.
    pub page: usize,
    /// Number of items per page.
    pub per_page: usize,
}

impl<T> Page<T> {
    /// Returns the total number of pages.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.per_page)
    }

    /// Returns whether pages exist after this one.
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Returns whether this page carries no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maps the items to a different type.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Label(&'static str);

    impl Searchable for Label {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.0]
        }
    }

    fn labels() -> Vec<Label> {
        ["Algebra", "Biology", "Chemistry", "algebraic topology"]
            .into_iter()
            .map(Label)
            .collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let page = ListFilter::new().with_search("ALGEBRA").apply(labels());

        assert_eq!(page.total, 2);
        assert_eq!(page.items[0].0, "Algebra");
        assert_eq!(page.items[1].0, "algebraic topology");
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let page = ListFilter::new().with_search("   ").apply(labels());
        assert_eq!(page.total, 4);
    }

    #[test]
    fn test_pagination_windows() {
        let filter = ListFilter::new().with_per_page(3);
        let page = filter.apply(labels());
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total, 4);
        assert_eq!(page.total_pages(), 2);
        assert!(page.has_more());

        let page = filter.with_page(2).apply(labels());
        assert_eq!(page.items.len(), 1);
        assert!(!page.has_more());
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let page = ListFilter::new().with_page(9).apply(labels());
        assert!(page.is_empty());
        assert_eq!(page.total, 4);
    }

    #[test]
    fn test_bounds_are_clamped() {
        let filter = ListFilter::new().with_page(0).with_per_page(0);
        assert_eq!(filter.page, 1);
        assert_eq!(filter.per_page, 1);

        let filter = ListFilter::new().with_per_page(10_000);
        assert_eq!(filter.per_page, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_search_and_paging_compose() {
        let page = ListFilter::new()
            .with_search("algebra")
            .with_per_page(1)
            .with_page(2)
            .apply(labels());

        assert_eq!(page.total, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].0, "algebraic topology");
    }
}
