use axum::extract::Query;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::assets::{AssetResolver, AssetTransform, ImageFormat, ResizeMode};
use crate::http_error::AppError;

#[derive(Debug, Deserialize)]
pub struct UrlQuery {
    pub path: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub resize: Option<ResizeMode>,
    pub quality: Option<u32>,
    pub format: Option<ImageFormat>,
}

impl UrlQuery {
    fn transform(&self) -> Option<AssetTransform> {
        let t = AssetTransform {
            width: self.width,
            height: self.height,
            resize: self.resize,
            quality: self.quality,
            format: self.format,
        };
        (!t.is_empty()).then_some(t)
    }
}

#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub path: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UrlResponse {
    pub url: String,
}

pub async fn asset_url(Extension(resolver): Extension<AssetResolver>, Query(q): Query<UrlQuery>) -> Result<Json<UrlResponse>, AppError> {
    let transform = q.transform();
    if let Some(t) = transform.as_ref() {
        t.validate()?;
    }
    let url = resolver.url(&q.path, transform.as_ref())?;
    Ok(Json(UrlResponse { url }))
}

pub async fn placeholder_url(Extension(resolver): Extension<AssetResolver>, Query(q): Query<PathQuery>) -> Result<Json<UrlResponse>, AppError> {
    let url = resolver.placeholder_url(&q.path)?;
    Ok(Json(UrlResponse { url }))
}
