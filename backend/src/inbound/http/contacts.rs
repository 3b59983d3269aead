//! Phonebook API handlers.
//!
//! ```text
//! GET    /api/persons
//! GET    /api/persons/{id}
//! POST   /api/persons
//! PUT    /api/persons/{id}
//! DELETE /api/persons/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Contact, ContactDraft, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{map_contact_validation_error, parse_contact_id};

/// Contact as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    pub id: String,
    #[schema(example = "Arto Hellas")]
    pub name: String,
    #[schema(example = "040-123456")]
    pub number: String,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id.to_string(),
            name: contact.name,
            number: contact.number,
        }
    }
}

/// Body accepted by create and replace.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub number: Option<String>,
}

impl TryFrom<ContactRequest> for ContactDraft {
    type Error = Error;

    fn try_from(value: ContactRequest) -> Result<Self, Self::Error> {
        ContactDraft::try_new(value.name, value.number).map_err(map_contact_validation_error)
    }
}

/// List every contact in insertion order.
#[utoipa::path(
    get,
    path = "/api/persons",
    responses((status = 200, description = "Contacts", body = [ContactResponse])),
    tags = ["contacts"],
    operation_id = "listContacts",
    security([])
)]
#[get("/persons")]
pub async fn list_contacts(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ContactResponse>>> {
    let contacts = state.contacts_query.list_contacts().await?;
    Ok(web::Json(
        contacts.into_iter().map(ContactResponse::from).collect(),
    ))
}

/// Fetch one contact.
#[utoipa::path(
    get,
    path = "/api/persons/{id}",
    params(("id" = String, Path, description = "Contact id")),
    responses(
        (status = 200, description = "Contact", body = ContactResponse),
        (status = 400, description = "Malformed id", body = Error),
        (status = 404, description = "No such contact", body = Error)
    ),
    tags = ["contacts"],
    operation_id = "getContact",
    security([])
)]
#[get("/persons/{id}")]
pub async fn get_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ContactResponse>> {
    let id = parse_contact_id(&path)?;
    let contact = state.contacts_query.get_contact(&id).await?;
    Ok(web::Json(contact.into()))
}

/// Add a contact.
#[utoipa::path(
    post,
    path = "/api/persons",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Created", body = ContactResponse),
        (status = 400, description = "Name or number missing", body = Error),
        (status = 409, description = "Name already in the phonebook", body = Error)
    ),
    tags = ["contacts"],
    operation_id = "createContact",
    security([])
)]
#[post("/persons")]
pub async fn create_contact(
    state: web::Data<HttpState>,
    payload: web::Json<ContactRequest>,
) -> ApiResult<HttpResponse> {
    let draft = ContactDraft::try_from(payload.into_inner())?;
    let contact = state.contacts.create_contact(draft).await?;
    Ok(HttpResponse::Created().json(ContactResponse::from(contact)))
}

/// Replace a contact's name and number.
#[utoipa::path(
    put,
    path = "/api/persons/{id}",
    params(("id" = String, Path, description = "Contact id")),
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Replaced", body = ContactResponse),
        (status = 400, description = "Malformed id or missing field", body = Error),
        (status = 404, description = "Contact already removed", body = Error)
    ),
    tags = ["contacts"],
    operation_id = "updateContact",
    security([])
)]
#[put("/persons/{id}")]
pub async fn update_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ContactRequest>,
) -> ApiResult<web::Json<ContactResponse>> {
    let id = parse_contact_id(&path)?;
    let draft = ContactDraft::try_from(payload.into_inner())?;
    let contact = state.contacts.update_contact(&id, draft).await?;
    Ok(web::Json(contact.into()))
}

/// Remove a contact.
#[utoipa::path(
    delete,
    path = "/api/persons/{id}",
    params(("id" = String, Path, description = "Contact id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Malformed id", body = Error),
        (status = 404, description = "No such contact", body = Error)
    ),
    tags = ["contacts"],
    operation_id = "deleteContact",
    security([])
)]
#[delete("/persons/{id}")]
pub async fn delete_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_contact_id(&path)?;
    state.contacts.delete_contact(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
