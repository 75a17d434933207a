// Scorer module: lexical similarity between two course descriptions.

pub mod tfidf;

pub use tfidf::{Scorer, TfIdfScorer};
