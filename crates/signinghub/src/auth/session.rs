//! Session management for authenticated SigningHub operations.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue};
use tracing::{debug, info, instrument, warn};

use crate::api::endpoints::{
    AUTHENTICATE, AUTHENTICATE_SCOPE, AUTHENTICATE_SSO, AuthenticationResponse, LOGOUT,
    ScopeRequest, SsoRequest,
};
use crate::config::ClientConfig;
use crate::error::{AuthenticationError, Error};
use crate::http::{ApiRequest, ApiResponse, HttpTransport, RawResponse, Transport, dispatch};
use crate::types::BaseUrl;

use super::credentials::{ClientCredentials, Grant};
use super::tokens::{
    AccessToken, IssuedToken, RefreshToken, SessionSnapshot, lifetime_from_secs,
};

/// A connection to a SigningHub instance and its bearer-token state.
///
/// Every endpoint wrapper is a method on this type. Token state changes
/// only through `&mut self` methods; callers sharing a session across tasks
/// must serialize access themselves.
///
/// The session never refreshes on its own. Check
/// [`Session::is_token_expired`] and call [`Session::refresh`] or
/// [`Session::authenticate`] when needed.
///
/// # Example
///
/// ```no_run
/// use signinghub::{BaseUrl, ClientCredentials, Grant, Session};
///
/// # async fn example() -> Result<(), signinghub::Error> {
/// let base = BaseUrl::new("https://api.signinghub.be")?;
/// let mut session = Session::new(base)?;
///
/// let client = ClientCredentials::new("my-integration", "client-secret");
/// session
///     .authenticate(&client, Grant::password("alice@example.com", "pw"), None)
///     .await?;
///
/// let profile = session.get_general_profile_information().await?;
/// println!("{:?}", profile.as_json());
/// # Ok(())
/// # }
/// ```
pub struct Session {
    transport: Arc<dyn Transport>,
    access: Option<IssuedToken>,
    refresh_token: Option<RefreshToken>,
}

impl Session {
    /// Create an unauthenticated session using the default HTTP transport.
    pub fn new(base_url: BaseUrl) -> Result<Self, Error> {
        Self::with_config(base_url, &ClientConfig::default())
    }

    /// Create an unauthenticated session with custom client settings.
    pub fn with_config(base_url: BaseUrl, config: &ClientConfig) -> Result<Self, Error> {
        let transport = HttpTransport::new(base_url, config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create an unauthenticated session over any transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            access: None,
            refresh_token: None,
        }
    }

    /// Returns the base URL all request paths are relative to.
    pub fn base_url(&self) -> &BaseUrl {
        self.transport.base_url()
    }

    // ========================================================================
    // Token State
    // ========================================================================

    /// The current access token, if any.
    pub fn access_token(&self) -> Option<&AccessToken> {
        self.access.as_ref().map(IssuedToken::token)
    }

    /// The current access token with its issue time and lifetime.
    pub fn issued_token(&self) -> Option<&IssuedToken> {
        self.access.as_ref()
    }

    /// The current refresh token, if the server handed one out.
    pub fn refresh_token(&self) -> Option<&RefreshToken> {
        self.refresh_token.as_ref()
    }

    /// The instant the access token expires, if one is held.
    pub fn token_expires_at(&self) -> Option<DateTime<Utc>> {
        self.access.as_ref().map(IssuedToken::expires_at)
    }

    /// Whether the access token has expired. A session without a token
    /// counts as expired.
    pub fn is_token_expired(&self) -> bool {
        self.is_token_expired_at(Utc::now())
    }

    /// Whether the access token is expired at the given instant.
    pub fn is_token_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.access
            .as_ref()
            .is_none_or(|issued| issued.is_expired_at(now))
    }

    /// Install an access token obtained elsewhere.
    pub fn set_access_token(
        &mut self,
        token: AccessToken,
        issued_at: DateTime<Utc>,
        lifetime: TimeDelta,
    ) {
        self.access = Some(IssuedToken::new(token, issued_at, lifetime));
    }

    /// Forget the access token, its expiry and the refresh token.
    pub fn clear_tokens(&mut self) {
        self.access = None;
        self.refresh_token = None;
    }

    /// Export the token state for persistence.
    ///
    /// # Security
    ///
    /// The snapshot contains live credentials. Store it securely.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            access_token: self.access.as_ref().map(Into::into),
            refresh_token: self
                .refresh_token
                .as_ref()
                .map(|t| t.as_str().to_string()),
        }
    }

    /// Replace the token state with a persisted snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] when the stored lifetime cannot be
    /// represented. The session is left unchanged in that case.
    pub fn restore(&mut self, snapshot: SessionSnapshot) -> Result<(), Error> {
        let access = snapshot.access_token.map(IssuedToken::try_from).transpose()?;
        self.access = access;
        self.refresh_token = snapshot.refresh_token.map(RefreshToken::new);
        Ok(())
    }

    // ========================================================================
    // Authentication
    // ========================================================================

    /// Authenticate against the `authenticate` endpoint.
    ///
    /// When `scope` is given, the session is then scoped to that user's
    /// e-mail address with a second call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] when the server rejects either call.
    #[instrument(
        skip_all,
        fields(
            base_url = %self.base_url(),
            client_id = client.client_id(),
            grant_type = grant.grant_type(),
        )
    )]
    pub async fn authenticate(
        &mut self,
        client: &ClientCredentials,
        grant: Grant,
        scope: Option<&str>,
    ) -> Result<(), Error> {
        info!("Authenticating");

        let mut fields = vec![
            ("client_id", client.client_id()),
            ("client_secret", client.client_secret()),
            ("grant_type", grant.grant_type()),
        ];
        fields.extend(grant.fields());

        let request = ApiRequest::post(AUTHENTICATE).form(&fields);
        self.authenticate_with(request).await?;

        if let Some(scope) = scope {
            debug!(scope, "Scoping session to user");
            let request =
                ApiRequest::post(AUTHENTICATE_SCOPE).json(&ScopeRequest { user_email: scope })?;
            self.authenticate_with(request).await?;
        }

        debug!("Authenticated successfully");
        Ok(())
    }

    /// Authenticate with a single sign-on token.
    #[instrument(skip(self, token), fields(base_url = %self.base_url()))]
    pub async fn authenticate_sso(&mut self, token: &str, method: &str) -> Result<(), Error> {
        info!("Authenticating with SSO token");

        let request = ApiRequest::post(AUTHENTICATE_SSO).json(&SsoRequest { token, method })?;
        self.authenticate_with(request).await?;

        debug!("Authenticated successfully");
        Ok(())
    }

    /// Obtain a new access token with the stored refresh token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRefreshToken`] without contacting the server
    /// when no refresh token is held.
    #[instrument(skip_all, fields(base_url = %self.base_url(), client_id = client.client_id()))]
    pub async fn refresh(&mut self, client: &ClientCredentials) -> Result<(), Error> {
        info!("Refreshing access token");

        let refresh_token = self
            .refresh_token
            .as_ref()
            .map(|t| t.as_str().to_string())
            .ok_or(Error::MissingRefreshToken)?;

        self.authenticate(client, Grant::RefreshToken(refresh_token), None)
            .await
    }

    /// End the session on the server and forget all tokens.
    ///
    /// Tokens are cleared even when the server call fails; the server's
    /// result is returned afterwards.
    #[instrument(skip(self), fields(base_url = %self.base_url()))]
    pub async fn logout(&mut self) -> Result<ApiResponse, Error> {
        info!("Logging out");

        let result = self.request(ApiRequest::post(LOGOUT)).await;
        self.clear_tokens();

        if let Err(ref e) = result {
            warn!(error = %e, "Logout call failed; local tokens cleared anyway");
        }
        result
    }

    async fn authenticate_with(&mut self, request: ApiRequest) -> Result<(), Error> {
        let request = self.prepare(request)?;
        let response = self.transport.execute(request).await?;
        self.process_authentication_response(&response)
    }

    /// Shared handling of every authentication reply.
    ///
    /// The refresh token is dropped first, so a failed call never leaves a
    /// stale one behind.
    fn process_authentication_response(&mut self, response: &RawResponse) -> Result<(), Error> {
        self.refresh_token = None;

        if response.status() != StatusCode::OK {
            let error = AuthenticationError::from_response(response);
            debug!(status = error.status, error = ?error.error, "Authentication rejected");
            return Err(error.into());
        }

        let body: AuthenticationResponse = response.json().map_err(|e| Error::Decode {
            message: format!("invalid authentication response: {}", e),
        })?;

        let issued = IssuedToken::new(
            AccessToken::new(body.access_token),
            Utc::now(),
            lifetime_from_secs(body.expires_in)?,
        );
        debug!(
            expires_at = %issued.expires_at(),
            has_refresh_token = body.refresh_token.is_some(),
            "Access token stored"
        );

        self.access = Some(issued);
        self.refresh_token = body.refresh_token.map(RefreshToken::new);
        Ok(())
    }

    // ========================================================================
    // Request Execution
    // ========================================================================

    /// Send a request and classify the response.
    ///
    /// This is the primitive every endpoint wrapper uses; it is public for
    /// endpoints this crate does not wrap.
    #[instrument(skip(self, request), fields(method = %request.method(), path = request.path()))]
    pub async fn request(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        debug!(base_url = %self.base_url(), "Performing call");

        let request = self.prepare(request)?;
        let response = self.transport.execute(request).await?;
        dispatch(response)
    }

    /// Attach the default `Accept` header and the bearer token.
    fn prepare(&self, mut request: ApiRequest) -> Result<ApiRequest, Error> {
        let headers = request.headers_mut();

        if !headers.contains_key(ACCEPT) {
            headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        }

        match self.access_token() {
            Some(token) => {
                headers.insert(AUTHORIZATION, token.bearer_header()?);
            }
            None => {
                headers.remove(AUTHORIZATION);
            }
        }

        Ok(request)
    }
}

// Custom Debug impl that hides sensitive data
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", self.base_url())
            .field("expires_at", &self.token_expires_at())
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}
