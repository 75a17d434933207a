/// Canonical form used when matching course codes against catalog lines:
/// every whitespace character removed, letters uppercased. Both the
/// identifier and the candidate line go through this, so matching is
/// insensitive to case and internal spacing on either side.
pub fn normalize_code(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}
