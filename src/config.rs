use serde::Deserialize;
use std::fs;

use crate::model::CourseQuery;

#[derive(Debug, Deserialize)]
pub struct CourseEntry {
    pub catalog_url: String,
    pub course_code: String,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub first: CourseEntry,
    pub second: CourseEntry,
    #[serde(default = "default_fetch_timeout_seconds")]
    pub fetch_timeout_seconds: u64,
    #[serde(default = "default_report_path")]
    pub report_path: String,
}

fn default_fetch_timeout_seconds() -> u64 {
    10
}

fn default_report_path() -> String {
    "course_equivalency_report.pdf".to_string()
}

impl CourseEntry {
    pub fn to_query(&self) -> CourseQuery {
        CourseQuery {
            catalog_url: self.catalog_url.clone(),
            course_code: self.course_code.clone(),
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// All four input fields must be filled in before the pipeline may run.
fn validate(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    for (name, value) in [
        ("first.catalog_url", &config.first.catalog_url),
        ("first.course_code", &config.first.course_code),
        ("second.catalog_url", &config.second.catalog_url),
        ("second.course_code", &config.second.course_code),
    ] {
        if value.trim().is_empty() {
            return Err(format!("missing required field: {}", name).into());
        }
    }
    Ok(())
}
