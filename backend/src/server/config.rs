//! Server settings loaded via OrthoConfig and the resolved server
//! configuration.

use std::net::{IpAddr, SocketAddr};

use argon2::Params;
use chrono::TimeDelta;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::warn;

use crate::outbound::persistence::DbPool;
use crate::outbound::security::TokenSecret;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3003;
const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Problems turning settings into a runnable configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `host` is not an IP address.
    #[error("invalid host `{value}`")]
    InvalidHost { value: String },
    /// `token_ttl_secs` is zero or negative.
    #[error("token lifetime must be positive, got {value}")]
    InvalidTokenTtl { value: i64 },
    /// No signing secret in a release build without the ephemeral opt-in.
    #[error("BLOGLIST_TOKEN_SECRET must be set (or BLOGLIST_ALLOW_EPHEMERAL_SECRET=true)")]
    MissingTokenSecret,
}

/// Runtime settings, read from CLI flags, `BLOGLIST_*` variables, or a
/// config file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BLOGLIST")]
pub struct ServerSettings {
    /// Address to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// PostgreSQL URL. Without it the service keeps data in memory.
    pub database_url: Option<String>,
    /// HS256 signing secret for bearer tokens.
    pub token_secret: Option<String>,
    /// Token lifetime in seconds.
    pub token_ttl_secs: Option<i64>,
    /// Generate a random secret when none is configured.
    #[ortho_config(default = false)]
    pub allow_ephemeral_secret: bool,
}

impl ServerSettings {
    /// Socket address from `host` and `port`.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let ip: IpAddr = host.parse().map_err(|_| ConfigError::InvalidHost {
            value: host.to_owned(),
        })?;
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Token lifetime, defaulting to one hour.
    pub fn token_ttl(&self) -> Result<TimeDelta, ConfigError> {
        let secs = self.token_ttl_secs.unwrap_or(DEFAULT_TOKEN_TTL_SECS);
        if secs <= 0 {
            return Err(ConfigError::InvalidTokenTtl { value: secs });
        }
        Ok(TimeDelta::seconds(secs))
    }

    /// Resolve the signing secret for this build.
    pub fn token_secret(&self) -> Result<TokenSecret, ConfigError> {
        self.resolve_token_secret(cfg!(debug_assertions))
    }

    fn resolve_token_secret(&self, debug_build: bool) -> Result<TokenSecret, ConfigError> {
        match self.token_secret.as_deref().filter(|raw| !raw.is_empty()) {
            Some(secret) => Ok(TokenSecret::new(secret)),
            None if debug_build || self.allow_ephemeral_secret => {
                warn!("using ephemeral token secret; tokens will not survive a restart");
                Ok(TokenSecret::generate())
            }
            None => Err(ConfigError::MissingTokenSecret),
        }
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) token_secret: TokenSecret,
    pub(crate) token_ttl: TimeDelta,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) hasher_params: Option<Params>,
}

impl ServerConfig {
    /// Construct a configuration backed by the in-memory store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, token_secret: TokenSecret, token_ttl: TimeDelta) -> Self {
        Self {
            bind_addr,
            token_secret,
            token_ttl,
            db_pool: None,
            hasher_params: None,
        }
    }

    /// Resolve everything [`ServerSettings`] describes except the pool.
    pub fn from_settings(settings: &ServerSettings) -> Result<Self, ConfigError> {
        Ok(Self::new(
            settings.bind_addr()?,
            settings.token_secret()?,
            settings.token_ttl()?,
        ))
    }

    /// Attach a database connection pool; repositories switch to PostgreSQL.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Override the Argon2 cost parameters.
    #[must_use]
    pub fn with_hasher_params(mut self, params: Params) -> Self {
        self.hasher_params = Some(params);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
