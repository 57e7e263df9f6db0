use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::{Extension, Json};

use crate::assets::AssetResolver;
use crate::config::PaginationConfig;
use crate::http_error::AppError;
use crate::pagination::{ListResponse, PageParams, PageQuery};
use crate::plugins::classes::catalog::{self, Level};
use crate::plugins::classes::models::{ClassDetail, ClassSummary};

#[derive(Clone)]
pub struct ClassesCtx {
    pub resolver: AssetResolver,
    pub pagination: PaginationConfig,
}

#[derive(Debug, serde::Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub style: Option<String>,
    pub level: Option<Level>,
}

pub async fn list_classes(Extension(ctx): Extension<ClassesCtx>, Query(q): Query<ListQuery>) -> Json<ListResponse<ClassSummary>> {
    let params = PageParams::from_query(PageQuery { page: q.page, per_page: q.per_page }, &ctx.pagination);
    let matching: Vec<_> = catalog::catalog()
        .iter()
        .filter(|c| q.style.as_deref().map_or(true, |s| c.style.eq_ignore_ascii_case(s)))
        .filter(|c| q.level.map_or(true, |l| c.level == l))
        .collect();

    // only the visible page pays for URL resolution
    let page = ListResponse::paginate(matching, params);
    Json(page.map(|c| ClassSummary::from_class(c, &ctx.resolver)))
}

pub async fn get_class(Extension(ctx): Extension<ClassesCtx>, Path(slug): Path<String>) -> Result<Json<ClassDetail>, AppError> {
    let class = catalog::find(&slug)
        .ok_or_else(|| AppError::new(StatusCode::NOT_FOUND, "notFound").with_code("not_found"))?;
    Ok(Json(ClassDetail::from_class(class, &ctx.resolver)))
}
