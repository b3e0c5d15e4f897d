//! Ad composer: turns a section, an ad format, font tiers and edited copy into
//! a render-ready layout description.
//!
//! Every section shares one preset resolver; only the visibility rules differ
//! per section. Paragraphs hidden for a format are dropped from the output.

use serde::Serialize;

use crate::builder::sections::{AdCopy, Section};
use crate::layout::{find_ad_size, resolve_preset, AdSize, FontSizes, FormatGroup, SizePreset};
use crate::markup::{format_text, strip_markers, Emphasis, Segment};

/// Which parts of the section are drawn for the chosen format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Visibility {
    /// Maximum number of body paragraphs shown, in order. `None` shows all.
    pub max_paragraphs: Option<usize>,
    pub show_cta: bool,
    /// Section decorations: hero background dots, problem underline, solution feature icons.
    pub show_decorations: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdLayout<'a> {
    pub section: Section,
    pub size: &'static AdSize,
    pub preset: SizePreset,
    pub visibility: Visibility,
    pub headline: Vec<Segment<'a>>,
    pub paragraphs: Vec<Vec<Segment<'a>>>,
    pub cta: Option<String>,
}

pub fn visibility_for(section: Section, group: FormatGroup, has_cta: bool) -> Visibility {
    match section {
        Section::Hero => Visibility {
            max_paragraphs: (group == FormatGroup::Banner).then_some(0),
            show_cta: has_cta,
            show_decorations: true,
        },
        Section::Problem => Visibility {
            // Banner keeps the subtitle and highlight, drops the transitional text.
            max_paragraphs: (group == FormatGroup::Banner).then_some(2),
            show_cta: has_cta,
            show_decorations: group == FormatGroup::Square,
        },
        Section::Solution => Visibility {
            max_paragraphs: matches!(group, FormatGroup::Banner | FormatGroup::Portrait)
                .then_some(1),
            show_cta: has_cta,
            show_decorations: !matches!(group, FormatGroup::Banner | FormatGroup::Landscape),
        },
    }
}

/// Builds the layout for one ad. Unknown formats fall back to square.
pub fn compose_ad<'a>(
    section: Section,
    format_id: &str,
    sizes: &FontSizes,
    copy: &'a AdCopy,
) -> AdLayout<'a> {
    let size = find_ad_size(format_id);
    let preset = resolve_preset(size.id, sizes);
    let cta = copy
        .cta
        .as_deref()
        .map(strip_markers)
        .filter(|text| !text.trim().is_empty());
    let visibility = visibility_for(section, size.group(), cta.is_some());

    let headline: Vec<Segment<'a>> = format_text(&copy.headline, Emphasis::Gradient).collect();
    let paragraphs: Vec<Vec<Segment<'a>>> = copy
        .paragraphs
        .iter()
        .take(visibility.max_paragraphs.unwrap_or(usize::MAX))
        .map(|p| format_text(p, Emphasis::Highlight).collect::<Vec<_>>())
        .collect();

    AdLayout {
        section,
        size,
        preset,
        visibility,
        headline,
        paragraphs,
        cta: if visibility.show_cta { cta } else { None },
    }
}
