//! Statement segmentation module.

mod segmenter;
pub mod dates;
pub mod patterns;

pub use segmenter::{TransactionSegmenter, segment};
