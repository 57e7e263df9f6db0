use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::{Extension, Json};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::PaginationConfig;
use crate::events::{EventBus, StudioEvent};
use crate::http_error::AppError;
use crate::pagination::{ListResponse, PageParams, PageQuery};
use crate::plugins::classes::catalog;
use crate::plugins::form::{self, MAX_LONG_FIELD, MAX_SHORT_FIELD};
use crate::plugins::registrations::models::{Registration, RegistrationCreate, RegistrationStatus, RegistrationStatusUpdate};
use crate::plugins::registrations::repo::{NewRegistration, RegistrationFilter, RegistrationRepo};

#[derive(Clone)]
pub struct RegistrationsCtx {
    pub repo: RegistrationRepo,
    pub events: EventBus,
    pub pagination: PaginationConfig,
}

#[derive(Debug, serde::Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub status: Option<RegistrationStatus>,
    pub class_slug: Option<String>,
}

pub async fn create_registration(Extension(ctx): Extension<RegistrationsCtx>, Json(payload): Json<RegistrationCreate>) -> Result<(StatusCode, Json<Registration>), AppError> {
    let class = catalog::find(payload.class_slug.trim()).ok_or_else(|| {
        warn!("registration for unknown class {:?}", payload.class_slug);
        AppError::bad_request("unknown_class", "unknown class")
    })?;

    let new = NewRegistration {
        class_slug: class.slug.to_string(),
        student_name: form::required("student_name", &payload.student_name, MAX_SHORT_FIELD)?,
        email: form::email(&payload.email)?,
        phone: form::optional("phone", payload.phone.as_deref(), 40)?,
        experience_level: payload.experience_level,
        notes: form::optional("notes", payload.notes.as_deref(), MAX_LONG_FIELD)?,
    };

    let registration = ctx.repo.insert_registration(new);
    info!("registration {} for {}", registration.id, registration.class_slug);
    ctx.events.publish(StudioEvent::RegistrationSubmitted {
        id: registration.id,
        class_slug: registration.class_slug.clone(),
    });
    Ok((StatusCode::CREATED, Json(registration)))
}

pub async fn list_registrations(Extension(ctx): Extension<RegistrationsCtx>, Query(q): Query<ListQuery>) -> Result<Json<ListResponse<Registration>>, AppError> {
    let params = PageParams::from_query(PageQuery { page: q.page, per_page: q.per_page }, &ctx.pagination);
    let filter = RegistrationFilter { status: q.status, class_slug: q.class_slug };
    let rows = ctx.repo.list_registrations(&filter);
    Ok(Json(ListResponse::paginate(rows, params)))
}

pub async fn get_registration(Extension(ctx): Extension<RegistrationsCtx>, Path(id): Path<Uuid>) -> Result<Json<Registration>, AppError> {
    Ok(Json(ctx.repo.get_registration(id)?))
}

pub async fn update_registration_status(Extension(ctx): Extension<RegistrationsCtx>, Path(id): Path<Uuid>, Json(payload): Json<RegistrationStatusUpdate>) -> Result<Json<Registration>, AppError> {
    let (from, registration) = ctx.repo.set_status(id, payload.status)?;
    if from != registration.status {
        info!("registration {} status {} -> {}", id, from, registration.status);
        ctx.events.publish(StudioEvent::RegistrationStatusChanged { id, from, to: registration.status });
    }
    Ok(Json(registration))
}

pub async fn delete_registration(Extension(ctx): Extension<RegistrationsCtx>, Path(id): Path<Uuid>) -> Result<StatusCode, AppError> {
    ctx.repo.delete_registration(id)?;
    ctx.events.publish(StudioEvent::RegistrationDeleted { id });
    Ok(StatusCode::NO_CONTENT)
}
