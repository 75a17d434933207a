// Catalog page flattening: markup is discarded, only line boundaries survive.
use scraper::Html;

pub trait Parser {
    fn flatten(&self, html: &str) -> String;
}

pub struct CatalogPageParser;

impl CatalogPageParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for CatalogPageParser {
    /// Collects every text node of the document into newline-separated lines.
    /// Catalog structure (tables, headings, links) is deliberately ignored;
    /// the locator only needs lines to search through.
    fn flatten(&self, html: &str) -> String {
        let document = Html::parse_document(html);

        let mut lines = Vec::new();
        for chunk in document.root_element().text() {
            for line in chunk.split('\n') {
                let line = line.trim();
                if !line.is_empty() {
                    lines.push(line.to_string());
                }
            }
        }

        lines.join("\n")
    }
}
