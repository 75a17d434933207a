// TF-IDF + cosine similarity over the two-document corpus {desc1, desc2}.
use std::collections::{BTreeSet, HashMap};

/// Trait defining the interface for a description similarity scorer.
pub trait Scorer {
    /// Returns a similarity in [0, 100], rounded to 2 decimal places.
    fn score(&self, desc1: &str, desc2: &str) -> f64;
}

pub struct TfIdfScorer;

impl TfIdfScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for TfIdfScorer {
    /// Pure function of the two inputs. Degenerate input (empty text, empty
    /// vocabulary, zero vectors) yields 0.0 rather than an error.
    fn score(&self, desc1: &str, desc2: &str) -> f64 {
        let tokens1 = tokenize(desc1);
        let tokens2 = tokenize(desc2);
        if tokens1.is_empty() || tokens2.is_empty() {
            return 0.0;
        }

        let vocab: BTreeSet<&str> = tokens1
            .iter()
            .chain(tokens2.iter())
            .map(String::as_str)
            .collect();

        let counts1 = term_counts(&tokens1);
        let counts2 = term_counts(&tokens2);

        let mut v1 = Vec::with_capacity(vocab.len());
        let mut v2 = Vec::with_capacity(vocab.len());
        for term in &vocab {
            let tf1 = counts1.get(term).copied().unwrap_or(0) as f64;
            let tf2 = counts2.get(term).copied().unwrap_or(0) as f64;
            let idf = smoothed_idf(tf1 > 0.0, tf2 > 0.0);
            v1.push(tf1 * idf);
            v2.push(tf2 * idf);
        }

        let similarity = cosine(&v1, &v2).clamp(0.0, 1.0);
        (similarity * 100.0 * 100.0).round() / 100.0
    }
}

/// Splits on every non-alphanumeric character and lowercases. No stop-word
/// filtering: the vocabulary is every distinct token of either document.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

fn term_counts(tokens: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Smoothed inverse document frequency over the fixed 2-document corpus:
/// ln((1 + N) / (1 + df)) + 1 with N = 2.
fn smoothed_idf(in_doc1: bool, in_doc2: bool) -> f64 {
    let df = in_doc1 as u32 + in_doc2 as u32;
    (3.0 / (1.0 + df as f64)).ln() + 1.0
}

/// Cosine of the angle between two equal-length vectors. A zero vector on
/// either side is defined as similarity 0, not NaN.
fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(a: &str, b: &str) -> f64 {
        TfIdfScorer::new().score(a, b)
    }

    #[test]
    fn identical_text_scores_near_maximal() {
        let text = "Introduction to data structures and algorithms with weekly labs";
        assert!(score(text, text) > 90.0);
    }

    #[test]
    fn empty_inputs_score_exactly_zero() {
        assert_eq!(score("", ""), 0.0);
        assert_eq!(score("abc", ""), 0.0);
        assert_eq!(score("", "abc"), 0.0);
    }

    #[test]
    fn score_is_symmetric() {
        let a = "Calculus of a single variable with applications";
        let b = "Multivariable calculus and vector analysis";
        assert_eq!(score(a, b), score(b, a));
    }

    #[test]
    fn reordered_bag_of_words_scores_high() {
        let a = "Introduction to data structures and algorithms";
        let b = "Introduction to algorithms and data structures";
        assert!(score(a, b) > 80.0);
    }

    #[test]
    fn disjoint_vocabularies_score_low() {
        let a = "Calculus and limits";
        let b = "Organic chemistry lab safety";
        assert!(score(a, b) < 20.0);
    }

    #[test]
    fn punctuation_only_input_is_degenerate() {
        assert_eq!(score("...!!!", "words here"), 0.0);
    }

    #[test]
    fn result_stays_in_range() {
        let s = score("shared words here", "shared words there");
        assert!((0.0..=100.0).contains(&s));
    }
}
