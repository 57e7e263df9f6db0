use axum::{Router, routing::get, Extension};
use crate::assets::AssetResolver;
use crate::kernel::Plugin;
use crate::plugins::assets::handlers::*;

pub struct AssetsPlugin { resolver: AssetResolver }

impl AssetsPlugin {
    pub fn new(resolver: AssetResolver) -> Self { Self { resolver } }
}

#[async_trait::async_trait]
impl Plugin for AssetsPlugin {
    async fn router(&self) -> Router {
        Router::new()
            .route("/url", get(asset_url))
            .route("/placeholder", get(placeholder_url))
            .layer(Extension(self.resolver.clone()))
    }

    fn name(&self) -> &'static str { "assets" }
}
