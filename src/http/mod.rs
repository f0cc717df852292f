//! HTTP transport
//!
//! Provides the shared HTTP client used for every GitHub call.
//!
//! # Features
//!
//! - **Fixed timeout**: every request is bounded by the client timeout
//! - **Default headers**: JSON content negotiation and API version pinning
//! - **Authentication**: bearer token from the auth module
//! - **Status mapping**: non-2xx responses become `Error::HttpStatus`

mod client;

pub use client::{decode_body, HttpClient, HttpClientConfig, RequestConfig, DEFAULT_BASE_URL};
