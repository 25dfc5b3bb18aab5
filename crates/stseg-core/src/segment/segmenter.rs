//! Line-oriented transaction segmentation for raw OCR statement text.

use tracing::debug;

use crate::models::document::{StructuredDocument, TransactionBlock};

use super::dates::parse_boundary_date;
use super::patterns::DATE_TOKEN;

/// Segmenter state. Monotonic: once a date-bearing line has been seen the
/// segmenter never returns to `AwaitingFirstTransaction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmenterState {
    AwaitingFirstTransaction,
    InTransactions,
}

/// Splits raw OCR text into a header block and date-delimited transaction
/// blocks.
///
/// The segmenter is deliberately permissive: after the first date sighting,
/// every non-date line is treated as a continuation of the current
/// transaction, whatever its content. OCR line-wrapping makes finer
/// classification unreliable. A date-bearing line always opens a new block,
/// even when it could read as a continuation of the previous one.
pub struct TransactionSegmenter {
    parse_dates: bool,
}

impl TransactionSegmenter {
    /// Create a segmenter with default settings.
    pub fn new() -> Self {
        Self { parse_dates: true }
    }

    /// Set whether boundary tokens are parsed into calendar dates.
    pub fn with_date_parsing(mut self, parse_dates: bool) -> Self {
        self.parse_dates = parse_dates;
        self
    }

    /// Segment raw OCR text into a structured document.
    ///
    /// Total over any input. Lines are trimmed, blank lines are dropped, and
    /// every remaining line lands in exactly one block, in input order. An
    /// input with no date-bearing line yields all lines in the header and no
    /// transaction blocks.
    pub fn segment(&self, raw_text: &str) -> StructuredDocument {
        let mut header: Vec<String> = Vec::new();
        let mut transactions: Vec<TransactionBlock> = Vec::new();
        let mut current: Vec<String> = Vec::new();
        let mut state = SegmenterState::AwaitingFirstTransaction;

        for line in raw_text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if DATE_TOKEN.is_match(line) {
                state = SegmenterState::InTransactions;

                // Date wins: flush the previous entry and open a new one.
                if !current.is_empty() {
                    transactions.push(self.finish_block(current));
                    current = Vec::new();
                }
                current.push(line.to_string());
            } else if state == SegmenterState::InTransactions && !current.is_empty() {
                // Continuation: amount lines, wrapped descriptions, trailing
                // detail. No finer classification is attempted.
                current.push(line.to_string());
            } else {
                // Pre-transaction preamble: statement title, account number,
                // period.
                header.push(line.to_string());
            }
        }

        if !current.is_empty() {
            transactions.push(self.finish_block(current));
        }

        debug!(
            header_lines = header.len(),
            transactions = transactions.len(),
            "segmented document"
        );

        StructuredDocument {
            header,
            transactions,
        }
    }

    fn finish_block(&self, lines: Vec<String>) -> TransactionBlock {
        let date = if self.parse_dates {
            lines.first().and_then(|l| parse_boundary_date(l))
        } else {
            None
        };

        TransactionBlock { lines, date }
    }
}

impl Default for TransactionSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Segment raw OCR text with default settings.
pub fn segment(raw_text: &str) -> StructuredDocument {
    TransactionSegmenter::new().segment(raw_text)
}
