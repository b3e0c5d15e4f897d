//! Axum route handlers for the Ad Builder API.

use axum::{
    extract::Path,
    extract::Query,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::composer::compose_ad;
use crate::builder::sections::{default_copy, AdCopy, Section, SectionInfo};
use crate::errors::AppError;
use crate::layout::{ad_sizes, resolve_preset, AdSize, FontSizes, SizePreset};
use crate::markup::{format_text, strip_markers, Emphasis, Segment};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FormatRequest {
    pub text: String,
    #[serde(default)]
    pub emphasis: Emphasis,
}

#[derive(Debug, Serialize)]
pub struct FormatResponse<'a> {
    pub segments: Vec<Segment<'a>>,
    pub plain_text: String,
}

#[derive(Debug, Deserialize)]
pub struct ComposeRequest {
    pub section: String,
    pub format_id: String,
    #[serde(default)]
    pub font_sizes: FontSizes,
    /// Edited copy. Missing means the section's default copy.
    #[serde(default)]
    pub copy: Option<AdCopy>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/format
///
/// Splits marked-up text into styled segments. Never rejects input.
pub async fn handle_format(Json(request): Json<FormatRequest>) -> Response {
    let segments: Vec<Segment<'_>> = format_text(&request.text, request.emphasis).collect();
    let plain_text = strip_markers(&request.text);
    debug!(
        segments = segments.len(),
        styled = segments.iter().filter(|s| s.is_styled()).count(),
        "Formatted text"
    );
    Json(FormatResponse {
        segments,
        plain_text,
    })
    .into_response()
}

/// GET /api/v1/ad-sizes
pub async fn handle_list_ad_sizes() -> Json<&'static [AdSize]> {
    Json(ad_sizes())
}

/// GET /api/v1/presets/:format_id
///
/// Query parameters `headline`, `subtext` and `cta` select tiers per role.
pub async fn handle_get_preset(
    Path(format_id): Path<String>,
    Query(sizes): Query<FontSizes>,
) -> Json<SizePreset> {
    Json(resolve_preset(&format_id, &sizes))
}

/// GET /api/v1/sections
pub async fn handle_list_sections() -> Json<Vec<SectionInfo>> {
    Json(Section::all().iter().map(Section::info).collect())
}

/// POST /api/v1/ads/compose
///
/// Returns the layout for one ad. An unknown section is the only rejected input;
/// unknown formats and tiers fall back to defaults.
pub async fn handle_compose(Json(request): Json<ComposeRequest>) -> Result<Response, AppError> {
    let section = Section::parse(&request.section).ok_or_else(|| {
        AppError::Validation(format!("Unknown section '{}'", request.section))
    })?;

    let copy = request.copy.unwrap_or_else(|| default_copy(section));
    let layout = compose_ad(section, &request.format_id, &request.font_sizes, &copy);
    debug!(
        section = section.as_str(),
        format = layout.size.id,
        paragraphs = layout.paragraphs.len(),
        "Composed ad layout"
    );

    Ok(Json(&layout).into_response())
}
