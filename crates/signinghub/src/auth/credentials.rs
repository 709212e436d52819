//! Client credentials and authentication grants.

use std::fmt;

/// The API client identity registered with SigningHub.
///
/// # Security
///
/// The secret is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use signinghub::ClientCredentials;
///
/// let client = ClientCredentials::new("my-integration", "client-secret");
/// assert_eq!(client.client_id(), "my-integration");
/// ```
#[derive(Clone)]
pub struct ClientCredentials {
    client_id: String,
    client_secret: String,
}

impl ClientCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Returns the client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the client secret.
    ///
    /// Use this only when constructing authentication requests.
    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// How the session proves its identity to the `authenticate` endpoint.
#[derive(Clone, Default)]
pub enum Grant {
    /// The client acts on its own behalf.
    #[default]
    ClientCredentials,
    /// The client acts for a user with that user's password.
    Password { username: String, password: String },
    /// Exchange a refresh token for a new access token.
    RefreshToken(String),
}

impl Grant {
    pub fn password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Grant::Password {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The `grant_type` form value.
    pub fn grant_type(&self) -> &'static str {
        match self {
            Grant::ClientCredentials => "client_credentials",
            Grant::Password { .. } => "password",
            Grant::RefreshToken(_) => "refresh_token",
        }
    }

    /// Grant-specific form fields, besides `grant_type`.
    pub(crate) fn fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            Grant::ClientCredentials => Vec::new(),
            Grant::Password { username, password } => {
                vec![("username", username.as_str()), ("password", password.as_str())]
            }
            Grant::RefreshToken(token) => vec![("refresh_token", token.as_str())],
        }
    }
}

impl fmt::Debug for Grant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grant::ClientCredentials => f.write_str("ClientCredentials"),
            Grant::Password { username, .. } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            Grant::RefreshToken(_) => f.debug_tuple("RefreshToken").field(&"[REDACTED]").finish(),
        }
    }
}
