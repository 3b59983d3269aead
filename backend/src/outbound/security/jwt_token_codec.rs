//! HS256 JWT implementation of the [`TokenCodec`] port.
//!
//! Claims are `{ id, username, iat, exp }`. Expiry is checked against the
//! injected clock rather than the system time so tests can move time.

use std::fmt;
use std::sync::Arc;

use chrono::TimeDelta;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mockable::Clock;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::domain::ports::{TokenCodec, TokenError};
use crate::domain::{AuthenticatedUser, UserId};

const GENERATED_SECRET_LEN: usize = 32;

/// Symmetric signing secret. Never printed.
#[derive(Clone)]
pub struct TokenSecret(Zeroizing<Vec<u8>>);

impl TokenSecret {
    /// Wrap configured secret bytes.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self(Zeroizing::new(secret.into()))
    }

    /// Draw a random secret for processes that have none configured.
    pub fn generate() -> Self {
        let mut bytes = vec![0_u8; GENERATED_SECRET_LEN];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(Zeroizing::new(bytes))
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl fmt::Debug for TokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenSecret(..)")
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: UserId,
    username: String,
    iat: i64,
    exp: i64,
}

/// Signs and verifies HS256 bearer tokens.
pub struct JwtTokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: TimeDelta,
    clock: Arc<dyn Clock>,
}

impl JwtTokenCodec {
    /// Build a codec for `secret` issuing tokens valid for `ttl`.
    pub fn new(secret: &TokenSecret, ttl: TimeDelta, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
            clock,
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation
    }
}

fn map_decode_error(err: jsonwebtoken::errors::Error) -> TokenError {
    match err.kind() {
        ErrorKind::InvalidSignature => TokenError::invalid_signature(),
        ErrorKind::ExpiredSignature => TokenError::expired(),
        _ => TokenError::malformed(err.to_string()),
    }
}

impl TokenCodec for JwtTokenCodec {
    fn issue(&self, user: &AuthenticatedUser) -> Result<String, TokenError> {
        let now = self.clock.utc();
        let claims = Claims {
            id: user.id,
            username: user.username.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| TokenError::signing(err.to_string()))
    }

    fn verify(&self, token: &str) -> Result<AuthenticatedUser, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &Self::validation())
            .map_err(map_decode_error)?;
        if data.claims.exp <= self.clock.utc().timestamp() {
            return Err(TokenError::expired());
        }
        Ok(AuthenticatedUser {
            id: data.claims.id,
            username: data.claims.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone, Utc};
    use rstest::{fixture, rstest};
    use std::sync::Mutex;

    struct StepClock(Mutex<DateTime<Utc>>);

    impl StepClock {
        fn advance(&self, delta: TimeDelta) {
            if let Ok(mut now) = self.0.lock() {
                *now += delta;
            }
        }
    }

    impl Clock for StepClock {
        fn local(&self) -> DateTime<Local> {
            self.utc().with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            *self.0.lock().expect("clock mutex")
        }
    }

    #[fixture]
    fn clock() -> Arc<StepClock> {
        let start = Utc
            .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        Arc::new(StepClock(Mutex::new(start)))
    }

    #[fixture]
    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            id: UserId::random(),
            username: "mluukkai".into(),
        }
    }

    fn codec(secret: &str, clock: Arc<StepClock>) -> JwtTokenCodec {
        JwtTokenCodec::new(&TokenSecret::new(secret), TimeDelta::seconds(3600), clock)
    }

    #[rstest]
    fn issued_tokens_verify(clock: Arc<StepClock>, user: AuthenticatedUser) {
        let codec = codec("sekret", clock);
        let token = codec.issue(&user).expect("issue");
        assert_eq!(codec.verify(&token).expect("verify"), user);
    }

    #[rstest]
    fn foreign_secret_is_rejected(clock: Arc<StepClock>, user: AuthenticatedUser) {
        let token = codec("other", clock.clone()).issue(&user).expect("issue");
        let err = codec("sekret", clock).verify(&token).expect_err("bad sig");
        assert_eq!(err, TokenError::InvalidSignature);
    }

    #[rstest]
    fn tokens_expire_after_ttl(clock: Arc<StepClock>, user: AuthenticatedUser) {
        let codec = codec("sekret", clock.clone());
        let token = codec.issue(&user).expect("issue");
        clock.advance(TimeDelta::seconds(3599));
        assert!(codec.verify(&token).is_ok());
        clock.advance(TimeDelta::seconds(1));
        assert_eq!(codec.verify(&token), Err(TokenError::Expired));
    }

    #[rstest]
    #[case("")]
    #[case("not.a.jwt")]
    fn garbage_is_malformed(clock: Arc<StepClock>, #[case] token: &str) {
        let err = codec("sekret", clock).verify(token).expect_err("garbage");
        assert!(matches!(err, TokenError::Malformed { .. }));
    }
}
