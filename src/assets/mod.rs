//! Public URLs for static site assets (hero images, class photos, carousel
//! media) stored in an object-storage bucket.

mod provider;
mod transform;


pub use provider::{ObjectStorage, StorageError, StorageProvider};
pub use transform::{AssetTransform, ImageFormat, ResizeMode, TransformError};

use std::sync::Arc;

/// Bucket holding every site asset.
pub const ASSET_BUCKET: &str = "studio-assets";

/// Resolves bucket-relative asset paths to absolute URLs.
///
/// Resolution is delegated to the [`StorageProvider`] as-is: no caching, no
/// retries, and provider errors are returned unchanged. Falling back to a
/// placeholder is up to the caller.
#[derive(Clone)]
pub struct AssetResolver {
    provider: Arc<dyn StorageProvider>,
}

impl AssetResolver {
    pub fn new(provider: Arc<dyn StorageProvider>) -> Self {
        Self { provider }
    }

    pub fn url(&self, path: &str, transform: Option<&AssetTransform>) -> Result<String, StorageError> {
        self.provider.public_url(ASSET_BUCKET, path, transform)
    }

    /// URL of the low-quality placeholder for `path`.
    pub fn placeholder_url(&self, path: &str) -> Result<String, StorageError> {
        self.url(path, Some(&AssetTransform::placeholder()))
    }
}
