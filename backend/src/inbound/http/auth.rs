//! Bearer token extraction for handlers that require a signed-in user.
//!
//! Keep the HTTP modules focused on request/response mapping by concentrating
//! header parsing and token verification here.

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, web};
use tracing::debug;

use crate::domain::ports::TokenError;
use crate::domain::{AuthenticatedUser, Error};

use super::state::HttpState;

const BEARER_SCHEME: &str = "bearer";

/// Identity of the caller, resolved from `Authorization: Bearer <token>`.
///
/// Any failure (missing header, wrong scheme, bad signature, expiry) rejects
/// the request with 401 before the handler runs.
#[derive(Debug, Clone)]
pub struct BearerUser(pub AuthenticatedUser);

impl BearerUser {
    /// Unwrap the resolved identity.
    pub fn into_inner(self) -> AuthenticatedUser {
        self.0
    }
}

fn unauthorized(message: &str) -> Error {
    Error::unauthorized(message.to_owned())
}

/// Extract the token from an `Authorization` header value.
///
/// The scheme is matched case-insensitively.
pub(crate) fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

fn map_token_error(err: TokenError) -> Error {
    debug!(error = %err, "bearer token rejected");
    match err {
        TokenError::Expired => unauthorized("token expired"),
        TokenError::Signing { .. } => Error::internal(err.to_string()),
        TokenError::InvalidSignature | TokenError::Malformed { .. } => {
            unauthorized("token invalid")
        }
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, Error> {
    let state = req
        .app_data::<web::Data<HttpState>>()
        .ok_or_else(|| Error::internal("HTTP state not configured"))?;
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| unauthorized("token missing"))?
        .to_str()
        .map_err(|_| unauthorized("token missing or invalid"))?;
    let token = bearer_token(header).ok_or_else(|| unauthorized("token missing or invalid"))?;
    state.tokens.verify(token).map_err(map_token_error)
}

impl FromRequest for BearerUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map(BearerUser))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("Bearer abc", Some("abc"))]
    #[case("bearer abc", Some("abc"))]
    #[case("BEARER   abc  ", Some("abc"))]
    #[case("Basic abc", None)]
    #[case("Bearer ", None)]
    #[case("Bearer", None)]
    #[case("", None)]
    fn parses_bearer_scheme(#[case] header: &str, #[case] expected: Option<&str>) {
        assert_eq!(bearer_token(header), expected);
    }

    #[rstest]
    #[case(TokenError::expired(), ErrorCode::Unauthorized)]
    #[case(TokenError::invalid_signature(), ErrorCode::Unauthorized)]
    #[case(TokenError::malformed("bad base64"), ErrorCode::Unauthorized)]
    #[case(TokenError::signing("no key"), ErrorCode::InternalError)]
    fn token_errors_map_to_api_errors(#[case] err: TokenError, #[case] expected: ErrorCode) {
        assert_eq!(map_token_error(err).code(), expected);
    }
}
