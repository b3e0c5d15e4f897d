//! Segment parser for the markdown-lite ad copy syntax.
//!
//! `**text**` marks a styled span; the caller picks whether it renders as a
//! gradient (headlines) or a highlight (body copy). A span whose whole content is
//! wrapped in `~` (`**~text~**`) renders as a tilted highlight.
//!
//! Only fully closed `**` pairs are consumed. An unterminated `**`, a lone `~`,
//! or deeper nesting stays in the output as literal text. Parsing never fails.

use once_cell::sync::Lazy;
use regex::{CaptureMatches, Regex};
use serde::{Deserialize, Serialize};

/// Matches one closed `**…**` pair, non-greedy, within a single line.
static MARKER_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("marker pattern is valid"));

const TILT: char = '~';

// ────────────────────────────────────────────────────────────────────────────
// Segment types
// ────────────────────────────────────────────────────────────────────────────

/// Rendering style of a single segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentStyle {
    Plain,
    Gradient,
    Highlight,
    HighlightTilted,
}

/// Style applied to `**…**` spans that are not tilted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    /// Headline contexts.
    Gradient,
    /// Body copy contexts.
    #[default]
    Highlight,
}

impl From<Emphasis> for SegmentStyle {
    fn from(emphasis: Emphasis) -> Self {
        match emphasis {
            Emphasis::Gradient => SegmentStyle::Gradient,
            Emphasis::Highlight => SegmentStyle::Highlight,
        }
    }
}

/// One contiguous run of text sharing a single style. Borrows from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub style: SegmentStyle,
}

impl<'a> Segment<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            style: SegmentStyle::Plain,
        }
    }

    pub fn is_styled(&self) -> bool {
        self.style != SegmentStyle::Plain
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Lazy segment iterator
// ────────────────────────────────────────────────────────────────────────────

/// Lazy iterator over the segments of a string, in input order.
///
/// Empty plain runs (between adjacent spans, or at either end) are skipped.
/// Empty styled spans (`****`) are kept.
pub struct Segments<'a> {
    input: &'a str,
    pairs: CaptureMatches<'static, 'a>,
    emphasis: Emphasis,
    cursor: usize,
    pending: Option<Segment<'a>>,
}

/// Splits `input` into plain and styled segments.
pub fn format_text(input: &str, emphasis: Emphasis) -> Segments<'_> {
    Segments {
        input,
        pairs: MARKER_PAIR.captures_iter(input),
        emphasis,
        cursor: 0,
        pending: None,
    }
}

/// Returns the input with every consumed marker removed.
pub fn strip_markers(input: &str) -> String {
    format_text(input, Emphasis::default())
        .map(|segment| segment.text)
        .collect()
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(styled) = self.pending.take() {
            return Some(styled);
        }

        match self.pairs.next() {
            Some(caps) => {
                let whole = caps.get(0)?;
                let inner = caps.get(1).map_or("", |m| m.as_str());
                let styled = styled_span(inner, self.emphasis);

                let before = &self.input[self.cursor..whole.start()];
                self.cursor = whole.end();

                if before.is_empty() {
                    Some(styled)
                } else {
                    self.pending = Some(styled);
                    Some(Segment::plain(before))
                }
            }
            None if self.cursor < self.input.len() => {
                let rest = &self.input[self.cursor..];
                self.cursor = self.input.len();
                Some(Segment::plain(rest))
            }
            None => None,
        }
    }
}

/// Classifies the content of one `**…**` span.
fn styled_span(inner: &str, emphasis: Emphasis) -> Segment<'_> {
    let tilted = inner.len() >= 2 && inner.starts_with(TILT) && inner.ends_with(TILT);
    if tilted {
        Segment {
            text: &inner[TILT.len_utf8()..inner.len() - TILT.len_utf8()],
            style: SegmentStyle::HighlightTilted,
        }
    } else {
        Segment {
            text: inner,
            style: emphasis.into(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str, emphasis: Emphasis) -> Vec<Segment<'_>> {
        format_text(input, emphasis).collect()
    }

    /// Removes `**` pairs and tilt markers from a balanced input, the slow way.
    fn naive_strip(input: &str) -> String {
        input.replace("**", "").replace('~', "")
    }

    #[test]
    fn test_plain_text_is_one_segment() {
        let segs = collect("Networking doesn't have to suck.", Emphasis::Highlight);
        assert_eq!(segs, vec![Segment::plain("Networking doesn't have to suck.")]);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(collect("", Emphasis::Gradient).is_empty());
    }

    #[test]
    fn test_headline_span_uses_gradient() {
        let segs = collect("Networking **doesn't have to suck.**", Emphasis::Gradient);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0], Segment::plain("Networking "));
        assert_eq!(segs[1].text, "doesn't have to suck.");
        assert_eq!(segs[1].style, SegmentStyle::Gradient);
    }

    #[test]
    fn test_body_span_uses_highlight() {
        let segs = collect("and **forgotten follow-ups.** today", Emphasis::Highlight);
        assert_eq!(
            segs,
            vec![
                Segment::plain("and "),
                Segment {
                    text: "forgotten follow-ups.",
                    style: SegmentStyle::Highlight
                },
                Segment::plain(" today"),
            ]
        );
    }

    #[test]
    fn test_tilted_span() {
        let segs = collect("**~x~**", Emphasis::Highlight);
        assert_eq!(
            segs,
            vec![Segment {
                text: "x",
                style: SegmentStyle::HighlightTilted
            }]
        );
    }

    #[test]
    fn test_tilt_wins_over_gradient_emphasis() {
        let segs = collect("**~meaningful relationships.~**", Emphasis::Gradient);
        assert_eq!(segs[0].style, SegmentStyle::HighlightTilted);
        assert_eq!(segs[0].text, "meaningful relationships.");
    }

    #[test]
    fn test_partial_tilt_is_literal() {
        let segs = collect("**~half tilted**", Emphasis::Highlight);
        assert_eq!(segs[0].text, "~half tilted");
        assert_eq!(segs[0].style, SegmentStyle::Highlight);
    }

    #[test]
    fn test_lone_tilde_span_is_not_tilted() {
        let segs = collect("**~**", Emphasis::Highlight);
        assert_eq!(segs[0].text, "~");
        assert_eq!(segs[0].style, SegmentStyle::Highlight);
    }

    #[test]
    fn test_unterminated_marker_is_literal() {
        let segs = collect("a **b", Emphasis::Highlight);
        assert_eq!(segs, vec![Segment::plain("a **b")]);
    }

    #[test]
    fn test_trailing_unterminated_after_closed_pair() {
        let segs = collect("**one** and **two", Emphasis::Highlight);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].text, "one");
        assert_eq!(segs[1], Segment::plain(" and **two"));
    }

    #[test]
    fn test_empty_span_keeps_one_styled_segment() {
        let segs = collect("****", Emphasis::Gradient);
        assert_eq!(
            segs,
            vec![Segment {
                text: "",
                style: SegmentStyle::Gradient
            }]
        );
    }

    #[test]
    fn test_adjacent_spans_have_no_empty_plain_between() {
        let segs = collect("**a****b**", Emphasis::Highlight);
        assert_eq!(segs.len(), 2);
        assert!(segs.iter().all(Segment::is_styled));
        assert_eq!(segs[0].text, "a");
        assert_eq!(segs[1].text, "b");
    }

    #[test]
    fn test_span_does_not_cross_newline() {
        let segs = collect("**first\nsecond**", Emphasis::Highlight);
        assert_eq!(segs, vec![Segment::plain("**first\nsecond**")]);
    }

    #[test]
    fn test_non_ascii_text_slices_cleanly() {
        let segs = collect("Réseau **très ~fort~** ✓", Emphasis::Highlight);
        assert_eq!(segs[1].text, "très ~fort~");
        assert_eq!(segs[2], Segment::plain(" ✓"));
    }

    #[test]
    fn test_round_trip_on_balanced_inputs() {
        let inputs = [
            "Networking **doesn't have to suck.**",
            "Chumzee helps you **build momentum** and nurture **~meaningful relationships.~**",
            "**lead** middle **tail**",
            "****",
            "no markers at all",
        ];
        for input in inputs {
            let joined: String = format_text(input, Emphasis::Highlight)
                .map(|s| s.text)
                .collect();
            assert_eq!(joined, naive_strip(input), "round trip failed for {input:?}");
        }
    }

    #[test]
    fn test_stripped_text_reparses_as_plain() {
        let inputs = [
            "Just applying to jobs **is a dead end.**",
            "**~tilted~** and **bold** and plain",
            "x **y** z",
        ];
        for input in inputs {
            let stripped = strip_markers(input);
            assert!(!stripped.contains("**"));
            assert!(
                format_text(&stripped, Emphasis::Gradient).all(|s| !s.is_styled()),
                "restyled after strip: {stripped:?}"
            );
        }
    }

    #[test]
    fn test_triple_nesting_is_preserved_literally() {
        let segs = collect("***x***", Emphasis::Highlight);
        let joined: String = segs.iter().map(|s| s.text).collect();
        assert_eq!(joined, "*x*");
    }

    #[test]
    fn test_style_serializes_kebab_case() {
        let json = serde_json::to_string(&SegmentStyle::HighlightTilted).unwrap();
        assert_eq!(json, "\"highlight-tilted\"");
    }
}
