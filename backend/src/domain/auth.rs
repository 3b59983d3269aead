//! Authentication primitives: login credentials, registrations, and the
//! identity resolved from a bearer token.
//!
//! Constructors validate raw string input so handlers never pass unchecked
//! values to a port or service.

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::user::{CREDENTIAL_MIN, UserId, UserValidationError, Username};

/// Errors raised when login or registration input is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsValidationError {
    /// Username failed validation.
    #[error(transparent)]
    Username(#[from] UserValidationError),
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
    /// Password shorter than the minimum accepted length.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted length.
        min: usize,
    },
}

/// Validated login credentials.
///
/// ## Invariants
/// - `username` is trimmed and non-empty.
/// - `password` is non-empty; whitespace is kept as supplied.
///
/// # Examples
/// ```
/// use bloglist::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("root", "sekret").unwrap();
/// assert_eq!(creds.username(), "root");
/// assert_eq!(creds.password(), "sekret");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(
        username: &str,
        password: &str,
    ) -> Result<Self, CredentialsValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(UserValidationError::EmptyUsername.into());
        }
        if password.is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }
        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username used for the lookup.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Plain-text password supplied by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated request to create a user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    username: Username,
    name: String,
    password: Zeroizing<String>,
}

impl Registration {
    /// Validate registration input.
    ///
    /// # Examples
    /// ```
    /// use bloglist::domain::Registration;
    ///
    /// assert!(Registration::try_from_parts("root", "Superuser", "sekret").is_ok());
    /// assert!(Registration::try_from_parts("root", "Superuser", "pw").is_err());
    /// ```
    pub fn try_from_parts(
        username: &str,
        name: &str,
        password: &str,
    ) -> Result<Self, CredentialsValidationError> {
        let username = Username::new(username)?;
        if password.is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }
        if password.chars().count() < CREDENTIAL_MIN {
            return Err(CredentialsValidationError::PasswordTooShort {
                min: CREDENTIAL_MIN,
            });
        }
        Ok(Self {
            username,
            name: name.trim().to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Requested username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Plain-text password to hash.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Identity resolved from a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Subject user id.
    pub id: UserId,
    /// Username at the time the token was issued.
    pub username: String,
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Signed bearer token.
    pub token: String,
    /// Username of the authenticated user.
    pub username: String,
    /// Display name of the authenticated user.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", CredentialsValidationError::Username(UserValidationError::EmptyUsername))]
    #[case("   ", "pw", CredentialsValidationError::Username(UserValidationError::EmptyUsername))]
    #[case("root", "", CredentialsValidationError::EmptyPassword)]
    fn invalid_login_credentials(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: CredentialsValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(username, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn login_trims_username() {
        let creds = LoginCredentials::try_from_parts("  root  ", " pw ").expect("valid");
        assert_eq!(creds.username(), "root");
        assert_eq!(creds.password(), " pw ");
    }

    #[rstest]
    #[case("ro", "sekret", CredentialsValidationError::Username(UserValidationError::UsernameTooShort { min: 3 }))]
    #[case("root", "", CredentialsValidationError::EmptyPassword)]
    #[case("root", "pw", CredentialsValidationError::PasswordTooShort { min: 3 })]
    fn invalid_registrations(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: CredentialsValidationError,
    ) {
        let err = Registration::try_from_parts(username, "Root", password)
            .expect_err("invalid registration must fail");
        assert_eq!(err, expected);
    }
}
