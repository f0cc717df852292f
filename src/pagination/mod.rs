//! Pagination module
//!
//! Supports: Page Number, Link Header, single request
//!
//! # Overview
//!
//! A [`Paginator`] inspects each page and decides whether another request
//! is needed. The [`PaginatedFetcher`] drives the request loop and
//! concatenates every page's items, in fetch order, into one aggregate.

mod fetcher;
mod strategies;
mod types;

pub use fetcher::{PaginatedFetcher, DEFAULT_MAX_PAGES};
pub use strategies::{parse_link_header, LinkHeaderPaginator, NoPaginator, PageNumberPaginator};
pub use types::{NextPage, PageTally, PaginationConfig, Paginator};

#[cfg(test)]
mod tests;
