use axum::{Router, routing::get, Extension};
use crate::assets::AssetResolver;
use crate::config::PaginationConfig;
use crate::kernel::Plugin;
use crate::plugins::classes::handlers::*;

pub struct ClassesPlugin { ctx: ClassesCtx }

impl ClassesPlugin {
    pub fn new(resolver: AssetResolver, pagination: PaginationConfig) -> Self {
        Self { ctx: ClassesCtx { resolver, pagination } }
    }
}

#[async_trait::async_trait]
impl Plugin for ClassesPlugin {
    async fn router(&self) -> Router {
        Router::new()
            .route("/", get(list_classes))
            .route("/:slug", get(get_class))
            .layer(Extension(self.ctx.clone()))
    }

    fn name(&self) -> &'static str { "classes" }
}
