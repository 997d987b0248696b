//! HTTP client module
//!
//! A thin wrapper over reqwest scoped to one API endpoint: base-URL
//! joining, bearer-token auth, JSON parsing, and status-code checks.
//! Retries, backoff, and rate limiting are deliberately absent; each
//! invocation issues exactly one request.

mod client;

pub use client::{HttpClient, HttpClientConfig};
