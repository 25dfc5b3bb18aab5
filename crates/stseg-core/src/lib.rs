//! Core library for OCR statement segmentation.
//!
//! This crate provides:
//! - Line-oriented segmentation of raw OCR text into a header block and
//!   date-delimited transaction blocks
//! - Boundary date token parsing (DD/MM/YY and variants)
//! - Structured report rendering
//! - Pipeline configuration models

pub mod error;
pub mod models;
pub mod report;
pub mod segment;

pub use error::{Result, StsegError};
pub use models::config::{BatchConfig, SegmenterConfig, StsegConfig};
pub use models::document::{StructuredDocument, TransactionBlock};
pub use segment::{TransactionSegmenter, segment};
