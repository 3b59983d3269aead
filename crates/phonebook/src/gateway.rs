//! Server access for the phonebook view.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{Contact, NewContact};

const PERSONS_PATH: &str = "api/persons";

/// Failures reported by a [`ContactsGateway`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The contact no longer exists on the server.
    #[error("contact not found")]
    NotFound,
    /// The server refused the request.
    #[error("{message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Server-supplied error message.
        message: String,
    },
    /// The request never produced a response.
    #[error("request failed: {message}")]
    Transport {
        /// Underlying client error.
        message: String,
    },
}

/// Contact operations the view needs from the server.
#[async_trait]
pub trait ContactsGateway: Send + Sync {
    /// Every stored contact.
    async fn list(&self) -> Result<Vec<Contact>, GatewayError>;

    /// Store a new contact.
    async fn create(&self, contact: &NewContact) -> Result<Contact, GatewayError>;

    /// Replace the contact stored under `id`.
    async fn update(&self, id: &str, contact: &NewContact) -> Result<Contact, GatewayError>;

    /// Remove the contact stored under `id`.
    async fn delete(&self, id: &str) -> Result<(), GatewayError>;
}

/// [`ContactsGateway`] over the `/api/persons` REST endpoints.
pub struct HttpContactsGateway {
    client: Client,
    base: Url,
}

impl HttpContactsGateway {
    /// Build a gateway for the server at `base` (scheme, host, and port).
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }

    fn collection(&self) -> Result<Url, GatewayError> {
        self.base.join(PERSONS_PATH).map_err(map_url_error)
    }

    fn member(&self, id: &str) -> Result<Url, GatewayError> {
        self.base
            .join(&format!("{PERSONS_PATH}/{id}"))
            .map_err(map_url_error)
    }
}

#[async_trait]
impl ContactsGateway for HttpContactsGateway {
    async fn list(&self) -> Result<Vec<Contact>, GatewayError> {
        let response = self
            .client
            .get(self.collection()?)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode(response).await
    }

    async fn create(&self, contact: &NewContact) -> Result<Contact, GatewayError> {
        debug!(name = %contact.name, "creating contact");
        let response = self
            .client
            .post(self.collection()?)
            .json(contact)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode(response).await
    }

    async fn update(&self, id: &str, contact: &NewContact) -> Result<Contact, GatewayError> {
        debug!(id, name = %contact.name, "replacing contact");
        let response = self
            .client
            .put(self.member(id)?)
            .json(contact)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode(response).await
    }

    async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        debug!(id, "deleting contact");
        let response = self
            .client
            .delete(self.member(id)?)
            .send()
            .await
            .map_err(map_transport_error)?;
        check_status(response).await.map(drop)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    check_status(response)
        .await?
        .json()
        .await
        .map_err(map_transport_error)
}

async fn check_status(response: Response) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.bytes().await.map_err(map_transport_error)?;
    Err(map_status_error(status, body.as_ref()))
}

fn map_status_error(status: StatusCode, body: &[u8]) -> GatewayError {
    if status == StatusCode::NOT_FOUND {
        return GatewayError::NotFound;
    }
    let message = serde_json::from_slice::<ErrorBody>(body)
        .map(|parsed| parsed.message)
        .unwrap_or_else(|_| format!("status {}", status.as_u16()));
    GatewayError::Rejected {
        status: status.as_u16(),
        message,
    }
}

fn map_transport_error(error: reqwest::Error) -> GatewayError {
    GatewayError::Transport {
        message: error.to_string(),
    }
}

fn map_url_error(error: url::ParseError) -> GatewayError {
    GatewayError::Transport {
        message: format!("invalid contact url: {error}"),
    }
}
