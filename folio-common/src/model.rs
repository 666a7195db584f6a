//! Catalog data models
//!
//! Field names serialize camelCase to match the JSON surface consumed by
//! the gallery pages; optional EXIF fields are omitted entirely when
//! absent, never emitted as null.

use serde::{Deserialize, Deserializer, Serialize};

/// A single portfolio photo with its display metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Stable identifier, assigned once at catalog load
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub date: String,
    pub location: String,
    pub camera: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lens: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aperture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shutter_speed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focal_length: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    #[serde(default)]
    pub featured: bool,
}

/// Display ratio for a gallery tile.
///
/// Unrecognized input values fail closed to `Square` rather than
/// rejecting the catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    #[default]
    Square,
    Portrait,
    Landscape,
    Wide,
    Tall,
}

impl AspectRatio {
    /// CSS `aspect-ratio` value for the gallery tile.
    pub fn css_ratio(self) -> &'static str {
        match self {
            AspectRatio::Square => "1 / 1",
            AspectRatio::Portrait => "4 / 5",
            AspectRatio::Landscape => "5 / 4",
            AspectRatio::Wide => "16 / 9",
            AspectRatio::Tall => "3 / 5",
        }
    }
}

impl<'de> Deserialize<'de> for AspectRatio {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "square" => AspectRatio::Square,
            "portrait" => AspectRatio::Portrait,
            "landscape" => AspectRatio::Landscape,
            "wide" => AspectRatio::Wide,
            "tall" => AspectRatio::Tall,
            // Unknown ratios fall back to square
            _ => AspectRatio::Square,
        })
    }
}

/// The photographer behind the portfolio. Singleton, loaded with the
/// catalog and read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotographerInfo {
    pub name: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
}
