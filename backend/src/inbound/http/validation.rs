//! Shared validation helpers for inbound HTTP adapters.
//!
//! Domain constructors report what is wrong; these helpers turn that into
//! the `invalid_request` payloads clients see, with a stable `details.code`.

use serde::{Deserialize, Serialize};
use serde_json::{Number, json};

use crate::domain::{
    BlogId, BlogValidationError, ContactId, ContactValidationError, CredentialsValidationError,
    Error, UserValidationError,
};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidLikes,
    InvalidId,
    TooShort,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidLikes => "invalid_likes",
            ErrorCode::InvalidId => "invalid_id",
            ErrorCode::TooShort => "too_short",
        }
    }
}

/// Like count as it arrives on the wire.
///
/// Clients send either a JSON number or a numeric string such as `"8999"`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum LikesInput {
    /// `"likes": 5`
    #[schema(value_type = i64)]
    Number(Number),
    /// `"likes": "5"`
    Text(String),
}

fn invalid_likes(value: impl Into<String>) -> Error {
    Error::invalid_request("likes must be a non-negative integer").with_details(json!({
        "field": "likes",
        "value": value.into(),
        "code": ErrorCode::InvalidLikes.as_str(),
    }))
}

/// Normalise an optional wire like count into an integer.
pub(crate) fn parse_likes(input: Option<LikesInput>) -> Result<Option<i64>, Error> {
    let Some(input) = input else {
        return Ok(None);
    };
    let parsed = match &input {
        LikesInput::Number(number) => number.as_i64(),
        LikesInput::Text(text) => text.trim().parse::<i64>().ok(),
    };
    match parsed {
        Some(likes) if likes >= 0 => Ok(Some(likes)),
        _ => Err(invalid_likes(match input {
            LikesInput::Number(number) => number.to_string(),
            LikesInput::Text(text) => text,
        })),
    }
}

pub(crate) fn map_blog_validation_error(err: BlogValidationError) -> Error {
    match &err {
        BlogValidationError::MissingFields(fields) => {
            let names: Vec<&str> = fields.iter().map(|field| field.as_str()).collect();
            Error::invalid_request(err.to_string()).with_details(json!({
                "fields": names,
                "code": ErrorCode::MissingField.as_str(),
            }))
        }
        BlogValidationError::NegativeLikes(value) => invalid_likes(value.to_string()),
    }
}

pub(crate) fn map_contact_validation_error(err: ContactValidationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": err.field(),
        "code": ErrorCode::MissingField.as_str(),
    }))
}

pub(crate) fn map_credentials_validation_error(err: CredentialsValidationError) -> Error {
    let (field, code) = match &err {
        CredentialsValidationError::Username(UserValidationError::UsernameTooShort { .. }) => {
            ("username", ErrorCode::TooShort)
        }
        CredentialsValidationError::Username(_) => ("username", ErrorCode::MissingField),
        CredentialsValidationError::EmptyPassword => ("password", ErrorCode::MissingField),
        CredentialsValidationError::PasswordTooShort { .. } => ("password", ErrorCode::TooShort),
    };
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": field,
        "code": code.as_str(),
    }))
}

fn malformatted_id(raw: &str) -> Error {
    Error::invalid_request("malformatted id").with_details(json!({
        "field": "id",
        "value": raw,
        "code": ErrorCode::InvalidId.as_str(),
    }))
}

pub(crate) fn parse_blog_id(raw: &str) -> Result<BlogId, Error> {
    BlogId::parse(raw).ok_or_else(|| malformatted_id(raw))
}

pub(crate) fn parse_contact_id(raw: &str) -> Result<ContactId, Error> {
    ContactId::parse(raw).ok_or_else(|| malformatted_id(raw))
}
