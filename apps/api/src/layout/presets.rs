//! Size presets: maps an ad format plus per-role font tiers to layout tokens.
//!
//! Tokens are opaque class-like strings consumed by the renderer. Each format
//! group has one base preset. A known tier for a role replaces that role's base
//! token; an unknown tier keeps the base. Unknown formats resolve as `square`.
//! Nothing here can fail.

use serde::{Deserialize, Serialize};

use crate::layout::ad_size::{find_ad_size, FormatGroup};

// ────────────────────────────────────────────────────────────────────────────
// Tiers
// ────────────────────────────────────────────────────────────────────────────

/// User-selected size step for a text role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeTier {
    Small,
    Normal,
    Large,
    /// Headline only.
    Xl,
}

impl SizeTier {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "small" => Some(SizeTier::Small),
            "normal" => Some(SizeTier::Normal),
            "large" => Some(SizeTier::Large),
            "xl" => Some(SizeTier::Xl),
            _ => None,
        }
    }
}

/// Text roles that carry a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Headline,
    Subtext,
    Cta,
}

/// Requested tier per text role, as raw strings from the UI.
/// A missing value means `normal`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSizes {
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub subtext: Option<String>,
    #[serde(default)]
    pub cta: Option<String>,
}

impl FontSizes {
    /// Same tier for every role.
    #[cfg(test)]
    pub fn uniform(tier: &str) -> Self {
        Self {
            headline: Some(tier.to_string()),
            subtext: Some(tier.to_string()),
            cta: Some(tier.to_string()),
        }
    }

    fn raw(&self, role: TextRole) -> &str {
        let value = match role {
            TextRole::Headline => &self.headline,
            TextRole::Subtext => &self.subtext,
            TextRole::Cta => &self.cta,
        };
        value.as_deref().unwrap_or("normal")
    }
}

/// Tier token for a role, or `None` when the tier is not offered for that role.
fn tier_token(role: TextRole, tier: SizeTier) -> Option<&'static str> {
    match (role, tier) {
        (TextRole::Headline, SizeTier::Small) => Some("text-2xl sm:text-3xl md:text-4xl"),
        (TextRole::Headline, SizeTier::Normal) => Some("text-3xl sm:text-4xl md:text-5xl"),
        (TextRole::Headline, SizeTier::Large) => Some("text-4xl sm:text-5xl md:text-6xl"),
        (TextRole::Headline, SizeTier::Xl) => Some("text-5xl sm:text-6xl md:text-7xl"),
        (TextRole::Subtext, SizeTier::Small) => Some("text-sm sm:text-base"),
        (TextRole::Subtext, SizeTier::Normal) => Some("text-base sm:text-lg md:text-xl"),
        (TextRole::Subtext, SizeTier::Large) => Some("text-lg sm:text-xl md:text-2xl"),
        (TextRole::Cta, SizeTier::Small) => Some("px-3 py-1.5 text-sm"),
        (TextRole::Cta, SizeTier::Normal) => Some("px-5 py-2.5 text-base"),
        (TextRole::Cta, SizeTier::Large) => Some("px-6 py-3 text-lg"),
        (TextRole::Subtext | TextRole::Cta, SizeTier::Xl) => None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Presets
// ────────────────────────────────────────────────────────────────────────────

/// Layout tokens for one ad format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizePreset {
    /// Format id the preset was resolved for (after fallback).
    pub id: &'static str,
    pub container_padding: &'static str,
    pub heading_scale: &'static str,
    pub subtext_scale: &'static str,
    pub button_scale: &'static str,
    pub spacing: &'static str,
}

const BANNER_BASE: SizePreset = SizePreset {
    id: "banner",
    container_padding: "p-2",
    heading_scale: "text-lg leading-tight",
    subtext_scale: "text-xs leading-tight",
    button_scale: "px-2 py-1 text-xs",
    spacing: "mb-1",
};

const PORTRAIT_BASE: SizePreset = SizePreset {
    id: "portrait",
    container_padding: "p-4",
    heading_scale: "text-2xl sm:text-3xl leading-tight",
    subtext_scale: "text-sm sm:text-base leading-relaxed",
    button_scale: "px-4 py-2 text-sm",
    spacing: "mb-3",
};

const LANDSCAPE_BASE: SizePreset = SizePreset {
    id: "landscape",
    container_padding: "p-4",
    heading_scale: "text-3xl sm:text-4xl md:text-5xl leading-tight",
    subtext_scale: "text-base sm:text-lg leading-relaxed",
    button_scale: "px-4 py-2 text-base",
    spacing: "mb-4",
};

const SQUARE_BASE: SizePreset = SizePreset {
    id: "square",
    container_padding: "p-6",
    heading_scale: "text-3xl sm:text-4xl md:text-5xl lg:text-6xl leading-tight",
    subtext_scale: "text-base sm:text-lg md:text-xl leading-relaxed",
    button_scale: "px-6 py-3 text-lg",
    spacing: "mb-6",
};

/// Base preset for a format group, before any tier is applied.
pub fn base_preset(group: FormatGroup) -> SizePreset {
    match group {
        FormatGroup::Banner => BANNER_BASE,
        FormatGroup::Portrait => PORTRAIT_BASE,
        FormatGroup::Landscape => LANDSCAPE_BASE,
        FormatGroup::Square => SQUARE_BASE,
    }
}

/// Resolves the layout tokens for `format_id` with the requested tiers applied.
pub fn resolve_preset(format_id: &str, sizes: &FontSizes) -> SizePreset {
    let size = find_ad_size(format_id);
    let base = base_preset(size.group());

    let pick = |role: TextRole, fallback: &'static str| {
        SizeTier::parse(sizes.raw(role))
            .and_then(|tier| tier_token(role, tier))
            .unwrap_or(fallback)
    };

    SizePreset {
        id: size.id,
        heading_scale: pick(TextRole::Headline, base.heading_scale),
        subtext_scale: pick(TextRole::Subtext, base.subtext_scale),
        button_scale: pick(TextRole::Cta, base.button_scale),
        ..base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ad_size::ad_sizes;

    #[test]
    fn test_unknown_format_matches_square() {
        let normal = FontSizes::uniform("normal");
        assert_eq!(
            resolve_preset("unknown-format", &normal),
            resolve_preset("square", &normal)
        );
    }

    #[test]
    fn test_unknown_tier_keeps_square_base() {
        let preset = resolve_preset("square", &FontSizes::uniform("unknown-tier"));
        assert_eq!(preset, SQUARE_BASE);
    }

    #[test]
    fn test_normal_tier_overrides_base() {
        let preset = resolve_preset("banner", &FontSizes::default());
        assert_eq!(preset.heading_scale, "text-3xl sm:text-4xl md:text-5xl");
        assert_eq!(preset.subtext_scale, "text-base sm:text-lg md:text-xl");
        assert_eq!(preset.button_scale, "px-5 py-2.5 text-base");
        // Padding and spacing always come from the format group.
        assert_eq!(preset.container_padding, "p-2");
        assert_eq!(preset.spacing, "mb-1");
    }

    #[test]
    fn test_xl_applies_to_headline_only() {
        let preset = resolve_preset("portrait", &FontSizes::uniform("xl"));
        assert_eq!(preset.heading_scale, "text-5xl sm:text-6xl md:text-7xl");
        assert_eq!(preset.subtext_scale, PORTRAIT_BASE.subtext_scale);
        assert_eq!(preset.button_scale, PORTRAIT_BASE.button_scale);
    }

    #[test]
    fn test_mixed_tiers_per_role() {
        let sizes = FontSizes {
            headline: Some("large".into()),
            subtext: Some("small".into()),
            cta: Some("bogus".into()),
        };
        let preset = resolve_preset("landscape", &sizes);
        assert_eq!(preset.heading_scale, "text-4xl sm:text-5xl md:text-6xl");
        assert_eq!(preset.subtext_scale, "text-sm sm:text-base");
        assert_eq!(preset.button_scale, LANDSCAPE_BASE.button_scale);
    }

    #[test]
    fn test_tier_parse_is_case_insensitive() {
        assert_eq!(SizeTier::parse(" Large "), Some(SizeTier::Large));
        assert_eq!(SizeTier::parse("XL"), Some(SizeTier::Xl));
        assert_eq!(SizeTier::parse("huge"), None);
    }

    #[test]
    fn test_resolved_id_follows_format_not_group() {
        let preset = resolve_preset("linkedin-sponsored", &FontSizes::default());
        assert_eq!(preset.id, "linkedin-sponsored");
        assert_eq!(preset.container_padding, LANDSCAPE_BASE.container_padding);
    }

    #[test]
    fn test_every_format_resolves() {
        for size in ad_sizes() {
            let preset = resolve_preset(size.id, &FontSizes::uniform("???"));
            assert_eq!(preset.id, size.id);
            assert!(!preset.heading_scale.is_empty());
        }
    }

    #[test]
    fn test_font_sizes_deserialize_partial() {
        let sizes: FontSizes = serde_json::from_str(r#"{"headline":"xl"}"#).unwrap();
        assert_eq!(sizes.headline.as_deref(), Some("xl"));
        assert!(sizes.subtext.is_none());
    }
}
