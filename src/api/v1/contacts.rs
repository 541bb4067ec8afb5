//! Contact management handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::AppState;
use crate::api::error::{ApiError, MessageResponse};
use crate::db::{Contact, ContactRepository, Database};
use crate::validation::validate_contact;

pub const CONTACT_DELETED_MESSAGE: &str = "contact deleted";

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Contact response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    /// Unique identifier (UUID v4)
    #[schema(example = "0b6f7d1c-6a8e-4c59-9a43-3f2f1d9b7e21")]
    pub id: String,
    #[schema(example = "Jordan")]
    pub name: String,
    #[schema(example = "jordan@example.com")]
    pub email: String,
    #[schema(example = "5551234567")]
    pub phone: String,
}

impl From<Contact> for ContactResponse {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            phone: c.phone,
        }
    }
}

/// Create/replace contact request DTO.
///
/// Documentation only: bodies arrive as raw JSON and go through
/// [`validate_contact`], which also accepts a numeric `phone`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    /// 3 to 30 characters
    #[schema(example = "Jordan", min_length = 3, max_length = 30)]
    pub name: String,
    /// Address with at least two domain segments
    #[schema(example = "jordan@example.com")]
    pub email: String,
    /// 10 to 20 characters
    #[schema(example = "5551234567", min_length = 10, max_length = 20)]
    pub phone: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// List all contacts
#[utoipa::path(
    get,
    path = "/api/contacts/",
    tag = "contacts",
    responses(
        (status = 200, description = "All contacts", body = [ContactResponse]),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_contacts<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<ContactResponse>>, ApiError> {
    let contacts = state.db().contacts().list_all().await?;

    Ok(Json(
        contacts.into_iter().map(ContactResponse::from).collect(),
    ))
}

/// Get a contact by ID
#[utoipa::path(
    get,
    path = "/api/contacts/{contactId}",
    tag = "contacts",
    params(
        ("contactId" = String, Path, description = "Contact ID")
    ),
    responses(
        (status = 200, description = "Contact found", body = ContactResponse),
        (status = 404, description = "Contact not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_contact<D: Database>(
    State(state): State<AppState<D>>,
    Path(contact_id): Path<String>,
) -> Result<Json<ContactResponse>, ApiError> {
    let contact = state
        .db()
        .contacts()
        .get_by_id(&contact_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(ContactResponse::from(contact)))
}

/// Create a new contact
///
/// The ID is generated by the server; a client-supplied `id` is rejected.
#[utoipa::path(
    post,
    path = "/api/contacts/",
    tag = "contacts",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Contact created", body = ContactResponse),
        (status = 400, description = "Validation failed", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_contact<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactResponse>), ApiError> {
    let Json(payload) = payload?;
    let fields = validate_contact(&payload)?;

    let contact = Contact::new(Uuid::new_v4().to_string(), fields);
    let created = state.db().contacts().insert(&contact).await?;
    info!(id = %created.id, "contact created");

    Ok((StatusCode::CREATED, Json(ContactResponse::from(created))))
}

/// Replace a contact
///
/// Validation runs before the store is consulted.
#[utoipa::path(
    put,
    path = "/api/contacts/{contactId}",
    tag = "contacts",
    params(
        ("contactId" = String, Path, description = "Contact ID")
    ),
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Contact updated", body = ContactResponse),
        (status = 400, description = "Validation failed", body = MessageResponse),
        (status = 404, description = "Contact not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn update_contact<D: Database>(
    State(state): State<AppState<D>>,
    Path(contact_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let Json(payload) = payload?;
    let fields = validate_contact(&payload)?;

    let updated = state
        .db()
        .contacts()
        .replace_by_id(&contact_id, &fields)
        .await?
        .ok_or(ApiError::NotFound)?;
    info!(id = %updated.id, "contact updated");

    Ok(Json(ContactResponse::from(updated)))
}

/// Delete a contact
#[utoipa::path(
    delete,
    path = "/api/contacts/{contactId}",
    tag = "contacts",
    params(
        ("contactId" = String, Path, description = "Contact ID")
    ),
    responses(
        (status = 200, description = "Contact deleted", body = MessageResponse),
        (status = 404, description = "Contact not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_contact<D: Database>(
    State(state): State<AppState<D>>,
    Path(contact_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .db()
        .contacts()
        .delete_by_id(&contact_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    info!(id = %contact_id, "contact deleted");

    Ok(Json(MessageResponse::new(CONTACT_DELETED_MESSAGE)))
}
