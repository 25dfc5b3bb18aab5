//! Human-readable report rendering for structured documents.

use crate::models::document::StructuredDocument;

/// Marker line opening the header section.
pub const HEADER_MARKER: &str = "=== HEADER ===";

/// Marker line opening the transactions section.
pub const TRANSACTIONS_MARKER: &str = "=== TRANSACTIONS ===";

/// Render a structured document as a marker-framed text report.
///
/// The header section is omitted when the header is empty, the transactions
/// section when there are no blocks. Blocks are numbered from 1 in flush
/// order and separated by blank lines. An empty document renders as the
/// empty string.
pub fn render(doc: &StructuredDocument) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !doc.header.is_empty() {
        parts.push(HEADER_MARKER.to_string());
        parts.push(doc.header.join("\n"));
        parts.push(String::new());
    }

    if !doc.transactions.is_empty() {
        parts.push(TRANSACTIONS_MARKER.to_string());
        parts.push(String::new());

        for (i, block) in doc.transactions.iter().enumerate() {
            parts.push(format!("--- Transaction {} ---", i + 1));
            parts.push(block.lines.join("\n"));
            parts.push(String::new());
        }
    }

    parts.join("\n")
}
