//! Static catalog of supported ad formats.
//!
//! Pixel dimensions are the export size; preview dimensions are the scaled-down
//! canvas the builder UI draws the ad into.

use serde::Serialize;

/// One supported ad format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdSize {
    pub id: &'static str,
    pub name: &'static str,
    pub width_px: u32,
    pub height_px: u32,
    pub preview_width_px: u32,
    pub preview_height_px: u32,
    pub description: &'static str,
}

/// Layout family an ad format belongs to. Formats in one group share a base preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatGroup {
    Square,
    Landscape,
    Portrait,
    Banner,
}

impl AdSize {
    pub fn group(&self) -> FormatGroup {
        format_group(self.id)
    }
}

// The first entry is the fallback for unknown ids.
static AD_SIZES: [AdSize; 8] = [
    AdSize {
        id: "square",
        name: "Square (1080x1080)",
        width_px: 1080,
        height_px: 1080,
        preview_width_px: 500,
        preview_height_px: 500,
        description: "Instagram posts, Facebook posts",
    },
    AdSize {
        id: "square-large",
        name: "Large Square (1200x1200)",
        width_px: 1200,
        height_px: 1200,
        preview_width_px: 550,
        preview_height_px: 550,
        description: "High-res Instagram, premium social posts",
    },
    AdSize {
        id: "landscape",
        name: "Landscape (1200x630)",
        width_px: 1200,
        height_px: 630,
        preview_width_px: 600,
        preview_height_px: 315,
        description: "Facebook cover, LinkedIn posts",
    },
    AdSize {
        id: "linkedin-sponsored",
        name: "LinkedIn Sponsored (1200x627)",
        width_px: 1200,
        height_px: 627,
        preview_width_px: 600,
        preview_height_px: 313,
        description: "LinkedIn sponsored content",
    },
    AdSize {
        id: "large-landscape",
        name: "Large Landscape (1920x1080)",
        width_px: 1920,
        height_px: 1080,
        preview_width_px: 640,
        preview_height_px: 360,
        description: "YouTube thumbnails, display placements, presentations",
    },
    AdSize {
        id: "portrait",
        name: "Portrait (1080x1920)",
        width_px: 1080,
        height_px: 1920,
        preview_width_px: 300,
        preview_height_px: 533,
        description: "Instagram Stories, TikTok",
    },
    AdSize {
        id: "mobile",
        name: "Mobile (720x900)",
        width_px: 720,
        height_px: 900,
        preview_width_px: 360,
        preview_height_px: 450,
        description: "Mobile-optimized ads, app banners",
    },
    AdSize {
        id: "banner",
        name: "Banner (728x90)",
        width_px: 728,
        height_px: 90,
        preview_width_px: 728,
        preview_height_px: 90,
        description: "Web banners, headers",
    },
];

/// All supported ad formats, in display order.
pub fn ad_sizes() -> &'static [AdSize] {
    &AD_SIZES
}

/// Looks up an ad format by id. Unknown ids resolve to the first format (square).
pub fn find_ad_size(id: &str) -> &'static AdSize {
    AD_SIZES
        .iter()
        .find(|size| size.id == id)
        .unwrap_or(&AD_SIZES[0])
}

/// Returns the layout group for a format id. Unknown ids belong to the square group.
pub fn format_group(id: &str) -> FormatGroup {
    match id {
        "banner" => FormatGroup::Banner,
        "portrait" => FormatGroup::Portrait,
        "landscape" | "linkedin-sponsored" | "large-landscape" => FormatGroup::Landscape,
        _ => FormatGroup::Square,
    }
}
