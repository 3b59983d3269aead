//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every REST endpoint from the inbound layer along with
//! the request and response bodies it uses. Token-guarded operations refer to
//! the `bearer` security scheme registered by [`SecurityAddon`].
//!
//! The generated specification is served by Swagger UI in debug builds.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::blogs::{BlogRequest, BlogResponse};
use crate::inbound::http::contacts::{ContactRequest, ContactResponse};
use crate::inbound::http::login::{LoginRequest, LoginResponse};
use crate::inbound::http::users::{RegisterRequest, UserResponse};
use crate::inbound::http::validation::LikesInput;

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Token issued by POST /api/login."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Bloglist API",
        description = "Blog list with bearer-token authentication, phonebook contacts, and health probes.",
        license(name = "ISC", url = "https://opensource.org/license/isc-license-txt")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::blogs::list_blogs,
        crate::inbound::http::blogs::create_blog,
        crate::inbound::http::blogs::update_blog,
        crate::inbound::http::blogs::delete_blog,
        crate::inbound::http::contacts::list_contacts,
        crate::inbound::http::contacts::get_contact,
        crate::inbound::http::contacts::create_contact,
        crate::inbound::http::contacts::update_contact,
        crate::inbound::http::contacts::delete_contact,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::register,
        crate::inbound::http::login::login,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        BlogRequest,
        BlogResponse,
        LikesInput,
        ContactRequest,
        ContactResponse,
        RegisterRequest,
        UserResponse,
        LoginRequest,
        LoginResponse
    )),
    tags(
        (name = "blogs", description = "Blog list entries"),
        (name = "contacts", description = "Phonebook contacts"),
        (name = "users", description = "Accounts and login"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
