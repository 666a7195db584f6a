//! Static photo catalog: loading, validation, and read accessors
//!
//! The catalog is authored as TOML (a `[photographer]` table plus a
//! `[[photos]]` array) and compiled into the binary; an alternate file
//! can be loaded at startup. Entries are authored without ids - each
//! photo gets a stable slug id derived from its title at load time.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{AspectRatio, Photo, PhotographerInfo};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

/// The full ordered collection of photos plus the photographer record.
/// Built once at startup, read-only thereafter.
#[derive(Debug, Clone)]
pub struct Catalog {
    photos: Vec<Photo>,
    photographer: PhotographerInfo,
}

/// On-disk catalog shape
#[derive(Debug, Deserialize)]
struct CatalogFile {
    photographer: PhotographerInfo,
    #[serde(default)]
    photos: Vec<PhotoEntry>,
}

/// A catalog entry as authored: a Photo without its id
#[derive(Debug, Deserialize)]
struct PhotoEntry {
    title: String,
    description: String,
    category: String,
    #[serde(default)]
    tags: Vec<String>,
    date: String,
    location: String,
    camera: String,
    lens: Option<String>,
    iso: Option<String>,
    aperture: Option<String>,
    shutter_speed: Option<String>,
    focal_length: Option<String>,
    image_url: String,
    #[serde(default)]
    aspect_ratio: AspectRatio,
    #[serde(default)]
    featured: bool,
}

impl PhotoEntry {
    fn into_photo(self, id: String) -> Photo {
        Photo {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            tags: self.tags,
            date: self.date,
            location: self.location,
            camera: self.camera,
            lens: self.lens,
            iso: self.iso,
            aperture: self.aperture,
            shutter_speed: self.shutter_speed,
            focal_length: self.focal_length,
            image_url: self.image_url,
            aspect_ratio: self.aspect_ratio,
            featured: self.featured,
        }
    }
}

impl Catalog {
    /// Parse a catalog from TOML, assigning ids and validating that they
    /// are pairwise distinct.
    pub fn from_toml(input: &str) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(input).map_err(|e| Error::Config(format!("Malformed catalog: {e}")))?;

        let mut photos = Vec::with_capacity(file.photos.len());
        let mut seen = HashSet::new();
        for entry in file.photos {
            let id = slug(&entry.title);
            if id.is_empty() {
                return Err(Error::Config(format!(
                    "Photo title {:?} produces an empty id",
                    entry.title
                )));
            }
            if !seen.insert(id.clone()) {
                return Err(Error::Config(format!("Duplicate photo id: {id}")));
            }
            debug!("Catalog photo: {} ({})", entry.title, id);
            photos.push(entry.into_photo(id));
        }

        Ok(Catalog {
            photos,
            photographer: file.photographer,
        })
    }

    /// Load a catalog from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let input = std::fs::read_to_string(path)?;
        Self::from_toml(&input)
    }

    /// Parse the catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Full catalog in authoring order.
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Lookup by id. `None` is the normal "no such photo" outcome, not
    /// an error.
    pub fn photo(&self, id: &str) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == id)
    }

    /// The photographer record. Always present.
    pub fn photographer(&self) -> &PhotographerInfo {
        &self.photographer
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

/// Derive a stable id from a photo title: lowercase alphanumeric runs
/// joined by single dashes ("City Shadows" -> "city-shadows").
fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}
