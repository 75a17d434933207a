// Fetcher module: HTTP retrieval of catalog pages.

pub mod http;
pub mod traits;

pub use http::HttpFetcher;
pub use traits::Fetcher;
