// Windowed line search for a course description inside flattened catalog text.
use crate::normalizer::normalize_code;

/// Returned verbatim when no catalog line contains the course code.
pub const NOT_FOUND: &str = "Course code not found in catalog.";

/// A match pulls in the matching line plus the following lines, since catalog
/// descriptions usually continue for a few lines below the course heading.
const WINDOW_LINES: usize = 5;

/// Finds the best-effort description snippet for `identifier` in
/// `catalog_text`. The first line whose normalized form contains the
/// normalized identifier wins; the literal lines `[i, i+5)` are joined with
/// single spaces and trimmed. Never fails: absence is reported through the
/// [`NOT_FOUND`] sentinel.
pub fn locate(catalog_text: &str, identifier: &str) -> String {
    let code = normalize_code(identifier);
    let lines: Vec<&str> = catalog_text.lines().collect();

    for (i, line) in lines.iter().enumerate() {
        if normalize_code(line).contains(&code) {
            let end = (i + WINDOW_LINES).min(lines.len());
            return lines[i..end].join(" ").trim().to_string();
        }
    }

    NOT_FOUND.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = "Intro line\n\
        CSE110 Introduction to Programming covers variables loops functions\n\
        More text\n\
        End";

    #[test]
    fn match_returns_window_of_remaining_lines() {
        let snippet = locate(CATALOG, "CSE 110");
        assert_eq!(
            snippet,
            "CSE110 Introduction to Programming covers variables loops functions More text End"
        );
    }

    #[test]
    fn missing_code_returns_sentinel() {
        assert_eq!(locate(CATALOG, "MATH999"), NOT_FOUND);
    }

    #[test]
    fn identifier_case_and_spacing_are_ignored() {
        let snippet = locate(CATALOG, "cse 110");
        assert!(snippet.contains("CSE110 Introduction to Programming"));
    }

    #[test]
    fn line_case_is_ignored_too() {
        let text = "filler\ncse110 programming fundamentals\ntrailer";
        let snippet = locate(text, "CSE110");
        assert!(snippet.starts_with("cse110 programming fundamentals"));
    }

    #[test]
    fn window_is_capped_at_five_lines() {
        let text = "X1 target\nl1\nl2\nl3\nl4\nl5\nl6";
        assert_eq!(locate(text, "X1"), "X1 target l1 l2 l3 l4");
    }

    #[test]
    fn first_matching_line_wins() {
        let text = "CS50 first occurrence\nmiddle\nCS50 second occurrence";
        let snippet = locate(text, "CS50");
        assert!(snippet.starts_with("CS50 first occurrence"));
    }

    #[test]
    fn spacing_inside_the_line_is_ignored() {
        let text = "header\nC S E 1 1 0 Programming\nfooter";
        assert_eq!(locate(text, "CSE110"), "C S E 1 1 0 Programming footer");
    }

    #[test]
    fn empty_catalog_yields_sentinel() {
        assert_eq!(locate("", "CSE110"), NOT_FOUND);
    }
}
