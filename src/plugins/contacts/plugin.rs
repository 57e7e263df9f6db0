use axum::{Router, routing::get, routing::put, Extension};
use crate::config::PaginationConfig;
use crate::events::EventBus;
use crate::kernel::Plugin;
use crate::plugins::contacts::handlers::*;
use crate::plugins::contacts::repo::ContactRepo;

pub struct ContactsPlugin { ctx: ContactsCtx }

impl ContactsPlugin {
    pub fn new(repo: ContactRepo, events: EventBus, pagination: PaginationConfig) -> Self {
        Self { ctx: ContactsCtx { repo, events, pagination } }
    }
}

#[async_trait::async_trait]
impl Plugin for ContactsPlugin {
    async fn router(&self) -> Router {
        Router::new()
            .route("/", get(list_contacts).post(create_contact))
            .route("/:id", get(get_contact).delete(delete_contact))
            .route("/:id/status", put(update_contact_status))
            .layer(Extension(self.ctx.clone()))
    }

    fn name(&self) -> &'static str { "contacts" }

    async fn on_shutdown(&self) {
        tracing::info!("contacts plugin stopping with {} messages", self.ctx.repo.count());
    }
}
