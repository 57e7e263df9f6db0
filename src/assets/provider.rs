use thiserror::Error;
use url::Url;

use super::transform::AssetTransform;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage url is not configured")]
    NotConfigured,
    #[error("invalid storage url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("invalid asset path {0:?}")]
    InvalidPath(String),
    #[error("storage provider error: {0}")]
    Provider(String),
}

/// URL construction capability of an object storage service.
///
/// Implementations treat `options` as opaque provider parameters; callers
/// get back whatever URL the provider considers authoritative.
pub trait StorageProvider: Send + Sync {
    fn public_url(
        &self,
        bucket: &str,
        path: &str,
        options: Option<&AssetTransform>,
    ) -> Result<String, StorageError>;
}

/// Public-bucket URLs in the Supabase storage layout:
///
/// - `{base}/storage/v1/object/public/{bucket}/{path}`
/// - `{base}/storage/v1/render/image/public/{bucket}/{path}?width=..` when a
///   non-empty transform is requested
pub struct ObjectStorage {
    base_url: Option<String>,
}

impl ObjectStorage {
    pub fn new(base_url: Option<String>) -> Self {
        Self { base_url }
    }

    fn base(&self) -> Result<Url, StorageError> {
        let raw = self.base_url.as_deref().ok_or(StorageError::NotConfigured)?;
        Ok(Url::parse(raw)?)
    }
}

/// Bucket-relative segments of `path`. Leading slashes are ignored; any other
/// empty, `.` or `..` segment is rejected rather than normalized.
fn path_segments(path: &str) -> Result<Vec<&str>, StorageError> {
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    if segments.iter().any(|s| s.is_empty() || *s == "." || *s == "..") {
        return Err(StorageError::InvalidPath(path.to_string()));
    }
    Ok(segments)
}

impl StorageProvider for ObjectStorage {
    fn public_url(
        &self,
        bucket: &str,
        path: &str,
        options: Option<&AssetTransform>,
    ) -> Result<String, StorageError> {
        let segments = path_segments(path)?;
        let mut url = self.base()?;
        let pairs = options.map(AssetTransform::query_pairs).unwrap_or_default();

        let endpoint: &[&str] = if pairs.is_empty() {
            &["storage", "v1", "object", "public"]
        } else {
            &["storage", "v1", "render", "image", "public"]
        };

        url.path_segments_mut()
            .map_err(|_| StorageError::Provider("storage url cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(endpoint)
            .push(bucket)
            .extend(segments);

        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url.into())
    }
}
