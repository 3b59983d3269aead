//! Users API handlers.
//!
//! ```text
//! GET  /api/users
//! POST /api/users {"username":"root","name":"Superuser","password":"sekret"}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Registration, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::map_credentials_validation_error;

/// Public view of an account. The password hash never leaves the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    #[schema(example = "mluukkai")]
    pub username: String,
    #[schema(example = "Matti Luukkainen")]
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            name: user.name().to_owned(),
        }
    }
}

/// Registration request body for `POST /api/users`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct RegisterRequest {
    pub username: String,
    pub name: String,
    pub password: String,
}

impl TryFrom<RegisterRequest> for Registration {
    type Error = Error;

    fn try_from(value: RegisterRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.name, &value.password)
            .map_err(map_credentials_validation_error)
    }
}

/// List registered users.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use bloglist::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers",
    security([])
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Create an account.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registered", body = UserResponse),
        (status = 400, description = "Invalid or taken username, or short password", body = Error)
    ),
    tags = ["users"],
    operation_id = "registerUser",
    security([])
)]
#[post("/users")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let registration = Registration::try_from(payload.into_inner())?;
    let user = state.users.register(registration).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use crate::inbound::http::test_utils::TestContext;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[derive(Debug)]
    struct ValidationExpectation<'a> {
        field: &'a str,
        code: &'a str,
    }

    #[rstest]
    #[case(
        json!({"username": "ro", "password": "sekret"}),
        ValidationExpectation { field: "username", code: "too_short" }
    )]
    #[case(
        json!({"username": "root", "password": "pw"}),
        ValidationExpectation { field: "password", code: "too_short" }
    )]
    #[case(
        json!({"username": "root"}),
        ValidationExpectation { field: "password", code: "missing_field" }
    )]
    #[actix_web::test]
    async fn register_rejects_invalid_input(
        #[case] body: Value,
        #[case] expected: ValidationExpectation<'_>,
    ) {
        let ctx = TestContext::new();
        let app = test::init_service(ctx.app()).await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(body)
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let payload: Value = test::read_body_json(res).await;
        assert_eq!(payload["code"], "invalid_request");
        assert_eq!(payload["details"]["field"], expected.field);
        assert_eq!(payload["details"]["code"], expected.code);
    }

    #[rstest]
    #[actix_web::test]
    async fn registered_users_are_listed_without_hash() {
        let ctx = TestContext::new();
        let app = test::init_service(ctx.app()).await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"username": "root", "name": "Superuser", "password": "sekret"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let req = test::TestRequest::get().uri("/api/users").to_request();
        let listed: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["username"], "root");
        assert!(listed[0].get("passwordHash").is_none());
        assert!(listed[0].get("password_hash").is_none());
    }

    #[rstest]
    #[actix_web::test]
    async fn taken_username_is_bad_request() {
        let ctx = TestContext::new();
        ctx.seed_user("root").await;
        let app = test::init_service(ctx.app()).await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"username": "root", "password": "sekret"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let payload: Value = test::read_body_json(res).await;
        assert_eq!(payload["details"]["code"], "username_taken");
    }
}
