//! Regex patterns for statement segmentation.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Date-like token: 1-2 digits, separator, 1-2 digits, separator, 2- or
    // 4-digit year. Separators are `/`, `-` or `.`, each optionally followed
    // by whitespace (handwriting OCR often splits "12/ 04/ 23" at the slash).
    // Matches anywhere in the line, not anchored to the start.
    pub static ref DATE_TOKEN: Regex = Regex::new(
        r"\b(\d{1,2})[/.\-]\s*(\d{1,2})[/.\-]\s*(\d{2,4})\b"
    ).unwrap();
}
