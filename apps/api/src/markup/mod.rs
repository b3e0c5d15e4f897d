// Markdown-lite text formatting for ad copy.
// Supports `**text**` emphasis and `**~text~**` tilted highlights; anything else is literal.

pub mod segments;

pub use segments::{format_text, strip_markers, Emphasis, Segment};

#[cfg(test)]
pub use segments::SegmentStyle;
