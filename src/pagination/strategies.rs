//! The two ways GitHub pages a list, plus a single-shot fallback

use super::types::{NextPage, PageTally, Paginator};
use reqwest::header::{HeaderMap, LINK};
use std::collections::HashMap;

const PAGE: &str = "page";
const PER_PAGE: &str = "per_page";

fn per_page_query(per_page: Option<u32>) -> HashMap<String, String> {
    per_page
        .map(|size| (PER_PAGE.to_string(), size.to_string()))
        .into_iter()
        .collect()
}

/// `?page=N&per_page=M`, counting from 1
///
/// A short page is not treated as the last one; only an empty page stops.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageNumberPaginator {
    per_page: Option<u32>,
}

impl PageNumberPaginator {
    pub fn new(per_page: Option<u32>) -> Self {
        Self { per_page }
    }

    fn query_for(&self, page: u32) -> HashMap<String, String> {
        let mut query = per_page_query(self.per_page);
        query.insert(PAGE.to_string(), page.to_string());
        query
    }
}

impl Paginator for PageNumberPaginator {
    fn first_query(&self) -> HashMap<String, String> {
        self.query_for(1)
    }

    fn next(&self, _headers: &HeaderMap, item_count: usize, tally: &PageTally) -> NextPage {
        if item_count == 0 {
            NextPage::Done
        } else {
            NextPage::Query(self.query_for(tally.pages + 1))
        }
    }
}

/// Follows the `rel="next"` target of the `Link` header (RFC 8288)
///
/// `per_page` only goes on the first request; GitHub copies it into every
/// link it hands back.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkHeaderPaginator {
    per_page: Option<u32>,
}

impl LinkHeaderPaginator {
    pub fn new(per_page: Option<u32>) -> Self {
        Self { per_page }
    }
}

impl Paginator for LinkHeaderPaginator {
    fn first_query(&self) -> HashMap<String, String> {
        per_page_query(self.per_page)
    }

    fn next(&self, headers: &HeaderMap, _item_count: usize, _tally: &PageTally) -> NextPage {
        headers
            .get_all(LINK)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(|value| parse_link_header(value, "next"))
            .map_or(NextPage::Done, NextPage::Url)
    }
}

/// Find the target of the link whose `rel` includes `wanted`
///
/// `<https://api.github.com/x?page=2>; rel="next", <...?page=9>; rel="last"`
pub fn parse_link_header(header: &str, wanted: &str) -> Option<String> {
    header.split(',').find_map(|link| {
        let mut params = link.split(';').map(str::trim);
        let target = params.next()?.strip_prefix('<')?.strip_suffix('>')?;
        let matches = params
            .filter_map(|param| param.strip_prefix("rel="))
            .flat_map(|rels| rels.trim_matches(|c| c == '"' || c == '\'').split_whitespace())
            .any(|rel| rel == wanted);
        matches.then(|| target.to_string())
    })
}

/// Exactly one request
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPaginator;

impl Paginator for NoPaginator {
    fn first_query(&self) -> HashMap<String, String> {
        HashMap::new()
    }

    fn next(&self, _headers: &HeaderMap, _item_count: usize, _tally: &PageTally) -> NextPage {
        NextPage::Done
    }
}
