use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::{Extension, Json};
use tracing::info;
use uuid::Uuid;

use crate::config::PaginationConfig;
use crate::events::{EventBus, StudioEvent};
use crate::http_error::AppError;
use crate::pagination::{ListResponse, PageParams, PageQuery};
use crate::plugins::contacts::models::{ContactCreate, ContactMessage, ContactStatus, ContactStatusUpdate};
use crate::plugins::contacts::repo::{ContactRepo, NewContact};
use crate::plugins::form::{self, MAX_LONG_FIELD, MAX_SHORT_FIELD};

#[derive(Clone)]
pub struct ContactsCtx {
    pub repo: ContactRepo,
    pub events: EventBus,
    pub pagination: PaginationConfig,
}

#[derive(Debug, serde::Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub status: Option<ContactStatus>,
}

pub async fn create_contact(Extension(ctx): Extension<ContactsCtx>, Json(payload): Json<ContactCreate>) -> Result<(StatusCode, Json<ContactMessage>), AppError> {
    let new = NewContact {
        name: form::required("name", &payload.name, MAX_SHORT_FIELD)?,
        email: form::email(&payload.email)?,
        phone: form::optional("phone", payload.phone.as_deref(), 40)?,
        subject: form::optional("subject", payload.subject.as_deref(), MAX_SHORT_FIELD)?,
        message: form::required("message", &payload.message, MAX_LONG_FIELD)?,
    };

    let contact = ctx.repo.insert_contact(new);
    info!("contact message {} received", contact.id);
    ctx.events.publish(StudioEvent::ContactSubmitted { id: contact.id });
    Ok((StatusCode::CREATED, Json(contact)))
}

pub async fn list_contacts(Extension(ctx): Extension<ContactsCtx>, Query(q): Query<ListQuery>) -> Result<Json<ListResponse<ContactMessage>>, AppError> {
    let params = PageParams::from_query(PageQuery { page: q.page, per_page: q.per_page }, &ctx.pagination);
    let rows = ctx.repo.list_contacts(q.status);
    Ok(Json(ListResponse::paginate(rows, params)))
}

/// Read-only; viewing a message never changes its status.
pub async fn get_contact(Extension(ctx): Extension<ContactsCtx>, Path(id): Path<Uuid>) -> Result<Json<ContactMessage>, AppError> {
    Ok(Json(ctx.repo.get_contact(id)?))
}

pub async fn update_contact_status(Extension(ctx): Extension<ContactsCtx>, Path(id): Path<Uuid>, Json(payload): Json<ContactStatusUpdate>) -> Result<Json<ContactMessage>, AppError> {
    let (from, contact) = ctx.repo.set_status(id, payload.status)?;
    if from != contact.status {
        info!("contact {} status {} -> {}", id, from, contact.status);
        ctx.events.publish(StudioEvent::ContactStatusChanged { id, from, to: contact.status });
    }
    Ok(Json(contact))
}

pub async fn delete_contact(Extension(ctx): Extension<ContactsCtx>, Path(id): Path<Uuid>) -> Result<StatusCode, AppError> {
    ctx.repo.delete_contact(id)?;
    ctx.events.publish(StudioEvent::ContactDeleted { id });
    Ok(StatusCode::NO_CONTENT)
}
