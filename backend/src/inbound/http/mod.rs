//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod auth;
pub mod blogs;
pub mod contacts;
pub mod error;
pub mod health;
pub mod login;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Register every `/api` route.
///
/// Handlers expect `web::Data<HttpState>` in app data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use bloglist::inbound::http::configure_api;
///
/// let app = App::new().configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(blogs::list_blogs)
            .service(blogs::create_blog)
            .service(blogs::update_blog)
            .service(blogs::delete_blog)
            .service(contacts::list_contacts)
            .service(contacts::get_contact)
            .service(contacts::create_contact)
            .service(contacts::update_contact)
            .service(contacts::delete_contact)
            .service(users::list_users)
            .service(users::register)
            .service(login::login),
    );
}
