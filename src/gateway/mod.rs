//! Authentication service boundary.
//!
//! ARCHITECTURE
//! ============
//! [`AuthGateway`] is the only way the core talks to the network. The native
//! build ships a reqwest implementation ([`http::HttpGateway`]); the browser
//! client supplies its own over `fetch`. Both share [`interpret_response`] so
//! a given status/body pair classifies identically everywhere.
//!
//! WIRE FORMAT
//! ===========
//! Every response is an envelope `{ "status", "message", "body" }`. The
//! server may answer HTTP 200 with an error status inside the envelope, so
//! both layers are checked.

#[cfg(feature = "http")]
pub mod http;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::profile::Profile;
use crate::session::Credential;

// =============================================================================
// ERROR
// =============================================================================

/// Failures crossing the authentication boundary.
///
/// `Display` is written for end users; the pipeline forwards it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// Network unreachable or an unexplained non-2xx status.
    #[error("Unable to reach the server ({0}).")]
    Transport(String),

    /// The server rejected the email/password or the bearer token.
    #[error("{0}")]
    InvalidCredentials(String),

    /// A success response did not carry the expected fields.
    #[error("Unexpected response from the server ({0}).")]
    MalformedResponse(String),
}

// =============================================================================
// GATEWAY TRAIT
// =============================================================================

/// Remote authentication and profile endpoints.
///
/// Futures are not required to be `Send`: browser fetch futures never are.
#[async_trait::async_trait(?Send)]
pub trait AuthGateway {
    /// Exchange email/password for a credential.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] describing why no credential was issued.
    async fn login(&self, email: &str, password: &str) -> Result<Credential, GatewayError>;

    /// Best-effort logout notification.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the notification could not be delivered.
    async fn logout(&self, token: Option<&Credential>) -> Result<(), GatewayError>;

    /// Fetch the signed-in user's profile.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the request fails or the token is rejected.
    async fn fetch_profile(&self, token: &Credential) -> Result<Profile, GatewayError>;

    /// Replace the signed-in user's first and last name.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the request fails or the token is rejected.
    async fn update_profile(&self, token: &Credential, profile: &Profile) -> Result<Profile, GatewayError>;
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// `POST /user/login` request body.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    status: Option<u16>,
    message: Option<String>,
    #[serde(default)]
    body: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct LoginBody {
    token: String,
}

#[must_use]
pub fn login_url(base: &str) -> String {
    format!("{base}/user/login")
}

#[must_use]
pub fn profile_url(base: &str) -> String {
    format!("{base}/user/profile")
}

#[must_use]
pub fn bearer(token: &Credential) -> String {
    format!("Bearer {}", token.as_str())
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Classify an HTTP response and decode its envelope `body` as `T`.
///
/// # Errors
///
/// - non-2xx with an envelope message and a 4xx status: [`GatewayError::InvalidCredentials`]
/// - any other non-2xx: [`GatewayError::Transport`]
/// - 2xx whose envelope status is 400 or above: [`GatewayError::InvalidCredentials`]
/// - 2xx with an unparseable envelope or body: [`GatewayError::MalformedResponse`]
pub fn interpret_response<T: DeserializeOwned>(http_status: u16, raw: &str) -> Result<T, GatewayError> {
    let envelope = serde_json::from_str::<Envelope>(raw);

    if !is_success(http_status) {
        return Err(match envelope {
            Ok(Envelope { message: Some(message), .. }) if (400..500).contains(&http_status) => {
                GatewayError::InvalidCredentials(message)
            }
            _ => GatewayError::Transport(format!("status {http_status}")),
        });
    }

    let envelope = envelope.map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;
    if envelope.status.is_some_and(|s| s >= 400) {
        let message = envelope
            .message
            .unwrap_or_else(|| "The server rejected the request.".to_owned());
        return Err(GatewayError::InvalidCredentials(message));
    }
    if envelope.body.is_null() {
        return Err(GatewayError::MalformedResponse("missing body".to_owned()));
    }
    serde_json::from_value(envelope.body).map_err(|e| GatewayError::MalformedResponse(e.to_string()))
}

/// Decode a login response into a credential.
///
/// # Errors
///
/// Same as [`interpret_response`]; an empty token is also malformed.
pub fn interpret_login(http_status: u16, raw: &str) -> Result<Credential, GatewayError> {
    let body: LoginBody = interpret_response(http_status, raw)?;
    if body.token.is_empty() {
        return Err(GatewayError::MalformedResponse("empty token".to_owned()));
    }
    Ok(Credential::new(body.token))
}
