//! Browsing modes and the requests they dispatch to.
//!
//! Exactly one [`Mode`] is active at a time. The mode carries its own filter
//! (category id or search term), so a page change can always be turned into
//! the right [`FetchRequest`] without any other bookkeeping.

use crate::CategoryId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// All questions, unfiltered.
    #[default]
    Default,
    /// Questions belonging to one category.
    ByCategory(CategoryId),
    /// Questions matching a search term.
    Search(String),
}

impl Mode {
    /// The read operation bound to this mode, for the given page.
    pub fn request_for_page(&self, page: u32) -> FetchRequest {
        match self {
            Mode::Default => FetchRequest::List { page },
            Mode::ByCategory(category_id) => FetchRequest::ByCategory {
                category_id: *category_id,
                page,
            },
            Mode::Search(term) => FetchRequest::Search {
                term: term.clone(),
                page,
            },
        }
    }
}

/// A read request against the question API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    List { page: u32 },
    ByCategory { category_id: CategoryId, page: u32 },
    Search { term: String, page: u32 },
}

impl FetchRequest {
    pub fn page(&self) -> u32 {
        match self {
            FetchRequest::List { page }
            | FetchRequest::ByCategory { page, .. }
            | FetchRequest::Search { page, .. } => *page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_mode_binds_its_own_request() {
        assert_eq!(Mode::Default.request_for_page(2), FetchRequest::List { page: 2 });
        assert_eq!(
            Mode::ByCategory(3).request_for_page(1),
            FetchRequest::ByCategory {
                category_id: 3,
                page: 1
            }
        );
        assert_eq!(
            Mode::Search("title".to_string()).request_for_page(4),
            FetchRequest::Search {
                term: "title".to_string(),
                page: 4
            }
        );
    }

    #[test]
    fn request_page_is_exposed_for_every_variant() {
        assert_eq!(FetchRequest::List { page: 5 }.page(), 5);
        assert_eq!(
            FetchRequest::Search {
                term: "x".to_string(),
                page: 7
            }
            .page(),
            7
        );
    }
}
