//! Subcategory handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::{PageQuery, Paginated, Subcategory, SubcategoryPage, SubcategoryRequest};

use crate::extractors::JsonBody;
use crate::state::AppState;

/// Create subcategory routes
pub fn subcategory_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_subcategories).post(create_subcategory))
        .route(
            "/:id",
            get(get_subcategory)
                .put(update_subcategory)
                .delete(delete_subcategory),
        )
}

/// List subcategories
#[utoipa::path(
    get,
    path = "/api/subcategories",
    tag = "Subcategories",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of subcategories", body = SubcategoryPage)
    )
)]
pub async fn list_subcategories(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<Paginated<Subcategory>>> {
    Ok(Json(state.subcategories.list(query).await?))
}

/// Get subcategory by ID
#[utoipa::path(
    get,
    path = "/api/subcategories/{id}",
    tag = "Subcategories",
    params(("id" = i32, Path, description = "Subcategory ID")),
    responses(
        (status = 200, description = "Subcategory", body = Subcategory),
        (status = 404, description = "Subcategory not found")
    )
)]
pub async fn get_subcategory(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Subcategory>> {
    Ok(Json(state.subcategories.get(id).await?))
}

/// Create subcategory
#[utoipa::path(
    post,
    path = "/api/subcategories",
    tag = "Subcategories",
    request_body = SubcategoryRequest,
    responses(
        (status = 201, description = "Subcategory created", body = Subcategory),
        (status = 400, description = "Invalid name or unknown category")
    )
)]
pub async fn create_subcategory(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SubcategoryRequest>,
) -> AppResult<(StatusCode, Json<Subcategory>)> {
    let subcategory = state.subcategories.create(payload).await?;
    Ok((StatusCode::CREATED, Json(subcategory)))
}

/// Update subcategory
#[utoipa::path(
    put,
    path = "/api/subcategories/{id}",
    tag = "Subcategories",
    params(("id" = i32, Path, description = "Subcategory ID")),
    request_body = SubcategoryRequest,
    responses(
        (status = 200, description = "Subcategory updated", body = Subcategory),
        (status = 400, description = "Invalid name or unknown category"),
        (status = 404, description = "Subcategory not found")
    )
)]
pub async fn update_subcategory(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<SubcategoryRequest>,
) -> AppResult<Json<Subcategory>> {
    Ok(Json(state.subcategories.update(id, payload).await?))
}

/// Delete subcategory
#[utoipa::path(
    delete,
    path = "/api/subcategories/{id}",
    tag = "Subcategories",
    params(("id" = i32, Path, description = "Subcategory ID")),
    responses(
        (status = 204, description = "Subcategory deleted"),
        (status = 404, description = "Subcategory not found"),
        (status = 409, description = "Subcategory is used by contacts")
    )
)]
pub async fn delete_subcategory(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.subcategories.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
