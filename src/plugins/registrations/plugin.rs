use axum::{Router, routing::get, routing::put, Extension};
use crate::config::PaginationConfig;
use crate::events::EventBus;
use crate::kernel::Plugin;
use crate::plugins::registrations::handlers::*;
use crate::plugins::registrations::repo::RegistrationRepo;

pub struct RegistrationsPlugin { ctx: RegistrationsCtx }

impl RegistrationsPlugin {
    pub fn new(repo: RegistrationRepo, events: EventBus, pagination: PaginationConfig) -> Self {
        Self { ctx: RegistrationsCtx { repo, events, pagination } }
    }
}

#[async_trait::async_trait]
impl Plugin for RegistrationsPlugin {
    async fn router(&self) -> Router {
        Router::new()
            .route("/", get(list_registrations).post(create_registration))
            .route("/:id", get(get_registration).delete(delete_registration))
            .route("/:id/status", put(update_registration_status))
            .layer(Extension(self.ctx.clone()))
    }

    fn name(&self) -> &'static str { "registrations" }

    async fn on_shutdown(&self) {
        tracing::info!("registrations plugin stopping with {} registrations", self.ctx.repo.count());
    }
}
