//! Paging vocabulary shared by the fetcher and the strategies

use super::strategies::{LinkHeaderPaginator, NoPaginator, PageNumberPaginator};
use reqwest::header::HeaderMap;
use std::collections::HashMap;

/// What to request once a page has been read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// Same path again, with these query parameters replaced
    Query(HashMap<String, String>),
    /// This absolute URL, which already carries its own query
    Url(String),
    /// Nothing left to fetch
    Done,
}

impl NextPage {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// How a list endpoint is paged
///
/// GitHub supports both schemes on every list endpoint; the `Link` header
/// is authoritative and is what the client uses unless told otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationConfig {
    /// One request, whatever comes back
    None,

    /// `page=1, 2, ...` until a page comes back empty
    PageNumber { per_page: Option<u32> },

    /// Follow `rel="next"` in the `Link` header until it disappears
    LinkHeader { per_page: Option<u32> },
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::LinkHeader {
            per_page: Some(100),
        }
    }
}

impl PaginationConfig {
    /// Page counter with `per_page` items requested per page
    pub fn page_number(per_page: u32) -> Self {
        Self::PageNumber {
            per_page: Some(per_page),
        }
    }

    pub(crate) fn build(&self) -> Box<dyn Paginator> {
        match *self {
            Self::None => Box::new(NoPaginator),
            Self::PageNumber { per_page } => Box::new(PageNumberPaginator::new(per_page)),
            Self::LinkHeader { per_page } => Box::new(LinkHeaderPaginator::new(per_page)),
        }
    }
}

/// Running totals for one paged query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageTally {
    /// Pages received
    pub pages: u32,
    /// Items received across all pages
    pub items: u64,
}

impl PageTally {
    pub fn record(&mut self, item_count: usize) {
        self.pages += 1;
        self.items += item_count as u64;
    }
}

/// Decides how to continue after each page
pub trait Paginator: Send + Sync {
    /// Query parameters sent with the first request
    fn first_query(&self) -> HashMap<String, String>;

    /// Called after `tally` has recorded the page just read, which held
    /// `item_count` items and came with `headers`
    fn next(&self, headers: &HeaderMap, item_count: usize, tally: &PageTally) -> NextPage;
}
