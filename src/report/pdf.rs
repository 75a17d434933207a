use crate::model::{ComparisonResult, ReportError};
use crate::report::ReportSink;

use chrono::Utc;
use printpdf::*;

const A4_WIDTH_MM: f32 = 210.0;
const A4_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const FONT_SIZE: f32 = 11.0;
const LINE_HEIGHT_MM: f32 = 6.0;

/// Characters per rendered line at 11pt Helvetica on A4 with margins.
const WRAP_WIDTH: usize = 90;

pub struct PdfReport;

impl PdfReport {
    pub fn new() -> Self {
        Self
    }
}

impl ReportSink for PdfReport {
    fn render(&self, result: &ComparisonResult) -> Result<Vec<u8>, ReportError> {
        let (doc, page1, layer1) = PdfDocument::new(
            "Course Equivalency Report",
            Mm(A4_WIDTH_MM),
            Mm(A4_HEIGHT_MM),
            "Layer 1",
        );

        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ReportError::Pdf(format!("font load: {:?}", e)))?;

        let mut layer = doc.get_page(page1).get_layer(layer1);
        let mut y = A4_HEIGHT_MM - MARGIN_MM;

        for line in report_lines(result) {
            if y < MARGIN_MM {
                let (page, layer_idx) =
                    doc.add_page(Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "Layer 1");
                layer = doc.get_page(page).get_layer(layer_idx);
                y = A4_HEIGHT_MM - MARGIN_MM;
            }
            layer.use_text(line, FONT_SIZE, Mm(MARGIN_MM), Mm(y), &font);
            y -= LINE_HEIGHT_MM;
        }

        doc.save_to_bytes()
            .map_err(|e| ReportError::Pdf(format!("save: {:?}", e)))
    }
}

fn report_lines(result: &ComparisonResult) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("Course 1: {}", result.code1));
    lines.push(String::new());
    lines.push("Description:".to_string());
    lines.extend(wrap(&result.description1, WRAP_WIDTH));
    lines.push(String::new());

    lines.push(format!("Course 2: {}", result.code2));
    lines.push(String::new());
    lines.push("Description:".to_string());
    lines.extend(wrap(&result.description2, WRAP_WIDTH));
    lines.push(String::new());

    lines.push(format!("Similarity Score: {}%", result.score));
    lines.push(String::new());
    lines.push(format!(
        "Generated: {}",
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    ));

    lines
}

/// Greedy word wrap. A single word longer than `width` gets its own line
/// rather than being split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let text = "one two three four five six seven eight nine ten";
        for line in wrap(text, 15) {
            assert!(line.chars().count() <= 15, "line too long: {:?}", line);
        }
    }

    #[test]
    fn wrap_keeps_all_words_in_order() {
        let text = "alpha beta gamma delta";
        let joined = wrap(text, 11).join(" ");
        assert_eq!(joined, text);
    }

    #[test]
    fn render_produces_a_pdf_header() {
        let result = ComparisonResult {
            code1: "CSE110".to_string(),
            description1: "Introduction to programming.".to_string(),
            code2: "ICS31".to_string(),
            description2: "Programming fundamentals.".to_string(),
            score: 42.5,
        };
        let bytes = PdfReport::new().render(&result).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
