mod config;
mod fetcher;
mod locator;
mod model;
mod normalizer;
mod parser;
mod report;
mod scorer;

use config::{load_config, AppConfig};
use fetcher::{Fetcher, HttpFetcher};
use model::{ComparisonResult, CourseQuery};
use parser::{CatalogPageParser, Parser};
use report::{PdfReport, ReportSink};
use scorer::{Scorer, TfIdfScorer};
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration from file
    let config: Arc<AppConfig> = match load_config("config.json") {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let fetcher = match HttpFetcher::new(config.fetch_timeout_seconds) {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return;
        }
    };
    let parser = CatalogPageParser::new();
    let scorer = TfIdfScorer::new();
    let sink = PdfReport::new();

    let query1 = config.first.to_query();
    let query2 = config.second.to_query();

    info!("Fetching catalog pages...");
    // The two lookups are independent, so run them concurrently
    let (description1, description2) = tokio::join!(
        resolve_description(&fetcher, &parser, &query1),
        resolve_description(&fetcher, &parser, &query2),
    );

    info!("Scoring similarity...");
    let score = scorer.score(&description1, &description2);

    info!("{} description: {}", query1.course_code, description1);
    info!("{} description: {}", query2.course_code, description2);
    info!("Similarity score: {}%", score);

    let result = ComparisonResult {
        code1: query1.course_code,
        description1,
        code2: query2.course_code,
        description2,
        score,
    };

    info!("Rendering report...");
    match sink.render(&result) {
        Ok(bytes) => {
            if let Err(e) = report::write_artifact(&config.report_path, &bytes) {
                warn!("Report write failed: {}", e);
            } else {
                info!("Report saved: {}", config.report_path);
            }
        }
        Err(e) => warn!("Report generation failed: {}", e),
    }
}

/// Resolves one institution's course description: fetch the catalog page,
/// flatten it to text, locate the course code. A fetch failure is folded into
/// the returned description so the comparison still runs for the other side.
async fn resolve_description(
    fetcher: &impl Fetcher,
    parser: &CatalogPageParser,
    query: &CourseQuery,
) -> String {
    match fetcher.fetch(&query.catalog_url).await {
        Ok(html) => {
            let text = parser.flatten(&html);
            let snippet = locator::locate(&text, &query.course_code);
            if snippet == locator::NOT_FOUND {
                warn!("{} not found in {}", query.course_code, query.catalog_url);
            }
            snippet
        }
        Err(e) => {
            warn!("Fetch failed for {}: {}", query.catalog_url, e);
            format!("Error fetching course: {}", e)
        }
    }
}
