//! Structured document models produced by segmentation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logical transaction entry: a contiguous run of source lines opened by
/// a date-bearing line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionBlock {
    /// Lines of the entry, in source order. The first line contains the
    /// boundary date token.
    pub lines: Vec<String>,

    /// The boundary token parsed as a day/month/year date, when it forms a
    /// valid calendar date and date parsing is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl TransactionBlock {
    /// The line that opened this block.
    pub fn opening_line(&self) -> &str {
        // Blocks are only ever created from a date-bearing line, so the
        // lines vector is never empty.
        self.lines.first().map(String::as_str).unwrap_or("")
    }
}

/// Header block plus ordered transaction blocks for one OCR document.
///
/// Re-derived from the input on every call, never mutated across calls.
/// Concatenating the header lines and the block lines in flush order
/// reproduces every non-blank input line exactly once, in original order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredDocument {
    /// Lines seen before the first date-bearing line. May be empty.
    pub header: Vec<String>,

    /// Transaction blocks in the order they appear in the source.
    pub transactions: Vec<TransactionBlock>,
}

impl StructuredDocument {
    /// True when the input had no non-blank lines at all.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.transactions.is_empty()
    }

    /// Total number of lines captured across the header and all blocks.
    pub fn line_count(&self) -> usize {
        self.header.len() + self.transactions.iter().map(|t| t.lines.len()).sum::<usize>()
    }

    /// All captured lines in block-flush order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.header.iter().map(String::as_str).chain(
            self.transactions
                .iter()
                .flat_map(|t| t.lines.iter().map(String::as_str)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count_spans_all_blocks() {
        let doc = StructuredDocument {
            header: vec!["Statement".to_string()],
            transactions: vec![TransactionBlock {
                lines: vec!["01/02/23 Rent".to_string(), "1200.00".to_string()],
                date: NaiveDate::from_ymd_opt(2023, 2, 1),
            }],
        };

        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.transactions[0].opening_line(), "01/02/23 Rent");
        assert_eq!(
            doc.lines().collect::<Vec<_>>(),
            vec!["Statement", "01/02/23 Rent", "1200.00"]
        );
    }

    #[test]
    fn test_empty_document() {
        let doc = StructuredDocument::default();
        assert!(doc.is_empty());
        assert_eq!(doc.line_count(), 0);
    }

    #[test]
    fn test_json_round_trip() {
        let doc = StructuredDocument {
            header: vec!["Account 12345678".to_string()],
            transactions: vec![TransactionBlock {
                lines: vec!["31/13/23 Bad date".to_string()],
                date: None,
            }],
        };

        let json = serde_json::to_string(&doc).unwrap();
        let back: StructuredDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
