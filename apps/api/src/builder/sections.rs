//! Landing-page sections the ad builder can repurpose, with their default copy.
//!
//! Copy is stored in the markdown-lite syntax: `**…**` becomes a gradient in
//! headlines and a highlight in body paragraphs, `**~…~**` a tilted highlight.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hero,
    Problem,
    Solution,
}

/// Editable copy for one ad. All fields are raw marked-up strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdCopy {
    pub headline: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub cta: Option<String>,
}

/// Catalog entry returned to the builder UI.
#[derive(Debug, Clone, Serialize)]
pub struct SectionInfo {
    pub id: Section,
    pub name: &'static str,
    pub description: &'static str,
    pub default_copy: AdCopy,
}

impl Section {
    pub fn all() -> [Section; 3] {
        [Section::Hero, Section::Problem, Section::Solution]
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "hero" => Some(Section::Hero),
            "problem" => Some(Section::Problem),
            "solution" => Some(Section::Solution),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Problem => "problem",
            Section::Solution => "solution",
        }
    }

    pub fn info(&self) -> SectionInfo {
        let (name, description) = match self {
            Section::Hero => ("Hero Section", "Main headline with call-to-action"),
            Section::Problem => ("Problem Section", "Pain points and challenges"),
            Section::Solution => ("Solution Section", "Features and benefits"),
        };
        SectionInfo {
            id: *self,
            name,
            description,
            default_copy: default_copy(*self),
        }
    }
}

/// The landing-page copy each section starts from.
pub fn default_copy(section: Section) -> AdCopy {
    match section {
        Section::Hero => AdCopy {
            headline: "Networking **doesn't have to suck.**".to_string(),
            paragraphs: vec![
                "Stop juggling messages, spreadsheets, post-it notes and **forgotten follow-ups.**"
                    .to_string(),
                "Chumzee helps you **build momentum** and nurture".to_string(),
                "**~meaningful relationships.~**".to_string(),
            ],
            cta: Some("Start building momentum".to_string()),
        },
        Section::Problem => AdCopy {
            headline: "Just applying to jobs **is a dead end.**".to_string(),
            paragraphs: vec![
                "You know you should be networking more.".to_string(),
                "Building meaningful relationships shouldn't feel so **~overwhelming and draining.~**"
                    .to_string(),
                "Without structure and a plan, it's all just busywork.".to_string(),
            ],
            cta: None,
        },
        Section::Solution => AdCopy {
            headline: "From networking chaos to career momentum.".to_string(),
            paragraphs: vec![
                "One organized system. Every interaction, note, and meeting **syncs automatically.**"
                    .to_string(),
                "**AI suggestions** and visual progress tracking turn networking from a daunting task into **simple daily wins** you can see and feel."
                    .to_string(),
            ],
            cta: None,
        },
    }
}
