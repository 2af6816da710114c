//! JSON form of the document model.

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
///
/// The output reads back with [`Document::from_json`].
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Json(format!("serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, Header, Paragraph, Section};

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.add_section(
            Section::with_elements([
                Element::from(Header::new(1, "Test").unwrap()),
                Element::from(Paragraph::with_text("Hello").unwrap()),
            ])
            .unwrap(),
        );
        doc
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"type\": \"header\""));
        assert!(json.contains("Test"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"type\":\"paragraph\""));
    }

    #[test]
    fn test_locked_flag_only_when_set() {
        let mut doc = sample();
        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(!json.contains("locked"));

        doc.lock();
        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(json.contains("\"locked\":true"));
    }
}
