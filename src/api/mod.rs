//! HTTP client adapter for the REST backend

mod http;

pub use http::HttpClient;
