//! Contact handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::{ContactPage, ContactRequest, ContactResponse, PageQuery, Paginated};

use crate::extractors::JsonBody;
use crate::state::AppState;

/// Create contact routes
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_contacts).post(create_contact))
        .route(
            "/:id",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
}

/// List contacts with their category and subcategory
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "Contacts",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of contacts", body = ContactPage)
    )
)]
pub async fn list_contacts(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<Paginated<ContactResponse>>> {
    let page = state.contacts.list(query).await?;
    Ok(Json(page.map(ContactResponse::from)))
}

/// Get contact by ID
#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    tag = "Contacts",
    params(("id" = i32, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "Contact", body = ContactResponse),
        (status = 404, description = "Contact not found")
    )
)]
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ContactResponse>> {
    let contact = state.contacts.get(id).await?;
    Ok(Json(ContactResponse::from(contact)))
}

/// Create contact
///
/// `work` contacts need an existing work subcategory; `other` contacts reuse
/// or create the named subcategory.
#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "Contacts",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Contact created", body = ContactResponse),
        (status = 400, description = "Validation failed or email/phone already used")
    )
)]
pub async fn create_contact(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ContactRequest>,
) -> AppResult<(StatusCode, Json<ContactResponse>)> {
    let contact = state.contacts.create(payload).await?;
    Ok((StatusCode::CREATED, Json(ContactResponse::from(contact))))
}

/// Update contact
#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    tag = "Contacts",
    params(("id" = i32, Path, description = "Contact ID")),
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Contact updated", body = ContactResponse),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Contact not found")
    )
)]
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<ContactRequest>,
) -> AppResult<Json<ContactResponse>> {
    let contact = state.contacts.update(id, payload).await?;
    Ok(Json(ContactResponse::from(contact)))
}

/// Delete contact
#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    tag = "Contacts",
    params(("id" = i32, Path, description = "Contact ID")),
    responses(
        (status = 204, description = "Contact deleted"),
        (status = 404, description = "Contact not found")
    )
)]
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.contacts.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
