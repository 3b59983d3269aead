//! Login handler exchanging credentials for a bearer token.
//!
//! ```text
//! POST /api/login {"username":"root","password":"sekret"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, IssuedToken, LoginCredentials};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::map_credentials_validation_error;

/// Login request body for `POST /api/login`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = Error;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
            .map_err(map_credentials_validation_error)
    }
}

/// Token and identity returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Value for `Authorization: bearer <token>`.
    pub token: String,
    pub username: String,
    pub name: String,
}

impl From<IssuedToken> for LoginResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            token: issued.token,
            username: issued.username,
            name: issued.name,
        }
    }
}

/// Authenticate a user and sign a token.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    let credentials = LoginCredentials::try_from(payload.into_inner())?;
    let issued = state.login.login(&credentials).await?;
    Ok(web::Json(issued.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Registration;
    use crate::domain::ports::TokenCodec;
    use crate::inbound::http::test_utils::TestContext;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn register(ctx: &TestContext) {
        let registration =
            Registration::try_from_parts("root", "Superuser", "sekret").expect("valid registration");
        ctx.state
            .users
            .register(registration)
            .await
            .expect("register root");
    }

    #[rstest]
    #[actix_web::test]
    async fn login_issues_verifiable_token() {
        let ctx = TestContext::new();
        register(&ctx).await;
        let app = test::init_service(ctx.app()).await;

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({"username": "root", "password": "sekret"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: LoginResponse = test::read_body_json(res).await;
        assert_eq!(body.username, "root");
        assert_eq!(body.name, "Superuser");
        let claims = ctx.tokens.verify(&body.token).expect("token verifies");
        assert_eq!(claims.username, "root");
    }

    #[rstest]
    #[case("root", "wrong-password")]
    #[case("nobody", "sekret")]
    #[actix_web::test]
    async fn bad_credentials_are_unauthorized(#[case] username: &str, #[case] password: &str) {
        let ctx = TestContext::new();
        register(&ctx).await;
        let app = test::init_service(ctx.app()).await;

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({"username": username, "password": password}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let payload: Value = test::read_body_json(res).await;
        assert_eq!(payload["message"], "invalid username or password");
    }

    #[rstest]
    #[actix_web::test]
    async fn blank_username_is_bad_request() {
        let ctx = TestContext::new();
        let app = test::init_service(ctx.app()).await;

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({"username": "   ", "password": "sekret"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
