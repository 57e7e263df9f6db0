use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::assets::AssetResolver;
use crate::plugins::classes::catalog::{DanceClass, Level};

/// Resolved cover image. Either URL is `None` when the storage provider could
/// not produce it; clients fall back to their own placeholder.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClassImage {
    pub url: Option<String>,
    pub placeholder_url: Option<String>,
}

impl ClassImage {
    pub fn resolve(resolver: &AssetResolver, path: &str) -> Self {
        let url = resolver
            .url(path, None)
            .map_err(|e| warn!("cover image {} unavailable: {}", path, e))
            .ok();
        let placeholder_url = resolver
            .placeholder_url(path)
            .map_err(|e| warn!("placeholder for {} unavailable: {}", path, e))
            .ok();
        Self { url, placeholder_url }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClassSummary {
    pub slug: String,
    pub title: String,
    pub style: String,
    pub level: Level,
    pub instructor: String,
    pub schedule: String,
    pub duration_minutes: u32,
    pub image: ClassImage,
}

impl ClassSummary {
    pub fn from_class(class: &DanceClass, resolver: &AssetResolver) -> Self {
        Self {
            slug: class.slug.to_string(),
            title: class.title.to_string(),
            style: class.style.to_string(),
            level: class.level,
            instructor: class.instructor.to_string(),
            schedule: class.schedule.to_string(),
            duration_minutes: class.duration_minutes,
            image: ClassImage::resolve(resolver, class.image_path),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClassDetail {
    #[serde(flatten)]
    pub summary: ClassSummary,
    pub description: String,
}

impl ClassDetail {
    pub fn from_class(class: &DanceClass, resolver: &AssetResolver) -> Self {
        Self {
            summary: ClassSummary::from_class(class, resolver),
            description: class.description.to_string(),
        }
    }
}
