//! Tests for pagination module

use super::*;
use crate::error::Error;
use crate::http::{HttpClient, HttpClientConfig};
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::json;
use std::collections::HashMap;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher_for(server: &MockServer) -> PaginatedFetcher {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    PaginatedFetcher::new(HttpClient::with_config(config).unwrap())
}

fn link_headers(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("link", HeaderValue::from_str(value).unwrap());
    headers
}

// ============================================================================
// Strategy Tests
// ============================================================================

fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn tally_after(pages: u32) -> PageTally {
    let mut tally = PageTally::default();
    for _ in 0..pages {
        tally.record(1);
    }
    tally
}

#[test]
fn test_page_tally_records() {
    let mut tally = PageTally::default();
    tally.record(100);
    tally.record(20);
    assert_eq!(tally, PageTally { pages: 2, items: 120 });
}

#[test]
fn test_page_number_first_query() {
    assert_eq!(
        PageNumberPaginator::new(Some(100)).first_query(),
        query(&[("page", "1"), ("per_page", "100")])
    );
    assert_eq!(PageNumberPaginator::new(None).first_query(), query(&[("page", "1")]));
}

#[test]
fn test_page_number_counts_up_until_empty() {
    let paginator = PageNumberPaginator::new(Some(2));
    let headers = HeaderMap::new();

    assert_eq!(
        paginator.next(&headers, 2, &tally_after(1)),
        NextPage::Query(query(&[("page", "2"), ("per_page", "2")]))
    );
    // A short page keeps going
    assert_eq!(
        paginator.next(&headers, 1, &tally_after(2)),
        NextPage::Query(query(&[("page", "3"), ("per_page", "2")]))
    );
    assert!(paginator.next(&headers, 0, &tally_after(3)).is_done());
}

#[test]
fn test_parse_link_header() {
    let header = r#"<https://api.github.com/orgs/acme/repos?page=2>; rel="next", <https://api.github.com/orgs/acme/repos?page=5>; rel="last""#;

    assert_eq!(
        parse_link_header(header, "next"),
        Some("https://api.github.com/orgs/acme/repos?page=2".to_string())
    );
    assert_eq!(
        parse_link_header(header, "last"),
        Some("https://api.github.com/orgs/acme/repos?page=5".to_string())
    );
    assert_eq!(parse_link_header(header, "prev"), None);
}

#[test]
fn test_parse_link_header_multiple_rels() {
    let header = r#"<https://x.test/a?page=2>; rel="next last""#;
    assert_eq!(
        parse_link_header(header, "next"),
        Some("https://x.test/a?page=2".to_string())
    );
}

#[test]
fn test_parse_link_header_garbage() {
    assert_eq!(parse_link_header("", "next"), None);
    assert_eq!(parse_link_header("not a link header", "next"), None);
    assert_eq!(parse_link_header(r#"rel="next""#, "next"), None);
}

#[test]
fn test_link_header_paginator() {
    let paginator = LinkHeaderPaginator::new(None);
    let tally = tally_after(1);

    let headers = link_headers(r#"<https://x.test/items?page=2>; rel="next""#);
    assert_eq!(
        paginator.next(&headers, 1, &tally),
        NextPage::Url("https://x.test/items?page=2".to_string())
    );

    let headers = link_headers(r#"<https://x.test/items?page=1>; rel="prev""#);
    assert!(paginator.next(&headers, 1, &tally).is_done());
    assert!(paginator.next(&HeaderMap::new(), 0, &tally).is_done());
}

#[test]
fn test_link_header_first_query() {
    assert_eq!(
        LinkHeaderPaginator::new(Some(50)).first_query(),
        query(&[("per_page", "50")])
    );
    assert!(LinkHeaderPaginator::new(None).first_query().is_empty());
}

#[test]
fn test_no_paginator() {
    assert!(NoPaginator.first_query().is_empty());
    assert!(NoPaginator.next(&HeaderMap::new(), 1, &tally_after(1)).is_done());
}

#[test]
fn test_pagination_config_default_is_link_header() {
    assert_eq!(
        PaginationConfig::default(),
        PaginationConfig::LinkHeader {
            per_page: Some(100)
        }
    );
    assert_eq!(
        PaginationConfig::page_number(30),
        PaginationConfig::PageNumber { per_page: Some(30) }
    );
}

// ============================================================================
// Fetcher Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_page_number_concatenates_in_order() {
    let mock_server = MockServer::start().await;

    for (page, body) in [
        ("1", json!([{"id": 1}, {"id": 2}])),
        ("2", json!([{"id": 3}])),
        ("3", json!([{"id": 4}, {"id": 5}])),
        ("4", json!([])),
    ] {
        Mock::given(method("GET"))
            .and(path("/orgs/acme/repos"))
            .and(query_param("page", page))
            .and(query_param("per_page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let fetcher = fetcher_for(&mock_server).with_pagination(PaginationConfig::page_number(2));
    let result = fetcher
        .fetch_all("/orgs/acme/repos", &HashMap::new())
        .await
        .unwrap();

    assert_eq!(result.pluck("id").into_value(), json!([1, 2, 3, 4, 5]));
}

#[tokio::test]
async fn test_fetch_empty_first_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&mock_server).with_pagination(PaginationConfig::page_number(100));
    let result = fetcher
        .fetch_all("/orgs/acme/teams", &HashMap::new())
        .await
        .unwrap();

    assert_eq!(result.into_value(), json!([]));
}

#[tokio::test]
async fn test_fetch_link_header_follows_next() {
    let mock_server = MockServer::start().await;
    let next = format!("<{}/teams/core/members?page=2&per_page=100>; rel=\"next\"", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/teams/core/members"))
        .and(query_param_is_missing("page"))
        .and(query_param("per_page", "100"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", next.as_str())
                .set_body_json(json!([{"login": "alice"}, {"login": "bob"}])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/teams/core/members"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"login": "carol"}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = fetcher_for(&mock_server)
        .fetch_all("/teams/core/members", &HashMap::new())
        .await
        .unwrap();

    assert_eq!(
        result.pluck("login").into_value(),
        json!(["alice", "bob", "carol"])
    );
}

#[tokio::test]
async fn test_fetch_passes_initial_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/api/pulls"))
        .and(query_param("state", "closed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"number": 1}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut query = HashMap::new();
    query.insert("state".to_string(), "closed".to_string());

    let result = fetcher_for(&mock_server)
        .fetch_all("/repos/acme/api/pulls", &query)
        .await
        .unwrap();
    assert_eq!(result.len(), 1);
}

#[tokio::test]
async fn test_fetch_object_response_returned_as_is() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/api"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"full_name": "acme/api"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&mock_server).with_pagination(PaginationConfig::page_number(100));
    let result = fetcher
        .fetch_all("/repos/acme/api", &HashMap::new())
        .await
        .unwrap();

    assert_eq!(result.into_value(), json!({"full_name": "acme/api"}));
}

#[tokio::test]
async fn test_fetch_error_mid_pagination_discards_pages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&mock_server).with_pagination(PaginationConfig::page_number(1));
    let err = fetcher
        .fetch_all("/orgs/acme/repos", &HashMap::new())
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_respects_max_pages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .expect(3)
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&mock_server)
        .with_pagination(PaginationConfig::page_number(1))
        .with_max_pages(3);
    let result = fetcher.fetch_all("/events", &HashMap::new()).await.unwrap();

    assert_eq!(result.len(), 3);
}

#[tokio::test]
async fn test_fetch_without_pagination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/teams"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", "<http://ignored.test/?page=2>; rel=\"next\"")
                .set_body_json(json!([{"slug": "core"}])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&mock_server).with_pagination(PaginationConfig::None);
    let result = fetcher
        .fetch_all("/orgs/acme/teams", &HashMap::new())
        .await
        .unwrap();
    assert_eq!(result.pluck("slug").into_value(), json!(["core"]));
}
