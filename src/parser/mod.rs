// Parser module: flattens fetched catalog pages to plain text.

pub mod catalog_page;

pub use catalog_page::{CatalogPageParser, Parser};
