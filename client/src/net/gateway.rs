//! `fetch`-backed [`AuthGateway`] for the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requests go out through `gloo-net`; every response is classified by the
//! core's `interpret_response`, so messages match the native frontend. The
//! API root is fixed at build time (`ARGENT_API_URL`, `ARGENT_LOGOUT_PATH`).
//! `fetch` has no timeout knob, so configured timeouts are ignored here.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use argent::config::{ClientConfig, GatewayConfig};
use argent::gateway::{AuthGateway, GatewayError};
use argent::profile::Profile;
use argent::session::Credential;

pub struct FetchGateway {
    config: GatewayConfig,
}

impl FetchGateway {
    #[must_use]
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    /// Gateway pointed at the API root baked in at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(build_config())
    }

    #[must_use]
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

fn build_time_var(key: &str) -> Option<String> {
    let value = match key {
        "ARGENT_API_URL" => option_env!("ARGENT_API_URL"),
        "ARGENT_LOGOUT_PATH" => option_env!("ARGENT_LOGOUT_PATH"),
        _ => None,
    };
    value.map(str::to_owned)
}

/// Gateway config from compile-time variables, defaulting when unusable.
#[must_use]
pub fn build_config() -> GatewayConfig {
    match ClientConfig::from_lookup(build_time_var) {
        Ok(config) => config.gateway,
        Err(e) => {
            tracing::warn!(error = %e, "invalid build-time config; using defaults");
            GatewayConfig::default()
        }
    }
}

#[cfg(feature = "csr")]
mod fetch {
    use gloo_net::http::{Request, RequestBuilder, Response};

    use argent::gateway::GatewayError;

    pub(super) async fn send(request: Result<Request, gloo_net::Error>) -> Result<(u16, String), GatewayError> {
        let request = request.map_err(|e| GatewayError::Transport(e.to_string()))?;
        read(request.send().await).await
    }

    pub(super) async fn send_builder(request: RequestBuilder) -> Result<(u16, String), GatewayError> {
        read(request.send().await).await
    }

    async fn read(response: Result<Response, gloo_net::Error>) -> Result<(u16, String), GatewayError> {
        let response = response.map_err(|e| GatewayError::Transport(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        Ok((status, text))
    }
}

#[cfg(feature = "csr")]
#[async_trait::async_trait(?Send)]
impl AuthGateway for FetchGateway {
    async fn login(&self, email: &str, password: &str) -> Result<Credential, GatewayError> {
        use argent::gateway::{LoginRequest, interpret_login, login_url};
        use gloo_net::http::Request;

        let url = login_url(&self.config.api_url);
        let (status, text) = fetch::send(Request::post(&url).json(&LoginRequest { email, password })).await?;
        interpret_login(status, &text)
    }

    async fn logout(&self, token: Option<&Credential>) -> Result<(), GatewayError> {
        use argent::gateway::bearer;
        use gloo_net::http::Request;

        let Some(url) = self.config.logout_url() else {
            tracing::debug!("no logout endpoint configured; skipping notification");
            return Ok(());
        };
        let mut request = Request::post(&url);
        if let Some(token) = token {
            request = request.header("Authorization", &bearer(token));
        }
        let (status, _text) = fetch::send_builder(request).await?;
        if !(200..300).contains(&status) {
            return Err(GatewayError::Transport(format!("status {status}")));
        }
        Ok(())
    }

    async fn fetch_profile(&self, token: &Credential) -> Result<Profile, GatewayError> {
        use argent::gateway::{bearer, interpret_response, profile_url};
        use gloo_net::http::Request;

        let url = profile_url(&self.config.api_url);
        let request = Request::post(&url).header("Authorization", &bearer(token));
        let (status, text) = fetch::send_builder(request).await?;
        interpret_response(status, &text)
    }

    async fn update_profile(&self, token: &Credential, profile: &Profile) -> Result<Profile, GatewayError> {
        use argent::gateway::{bearer, interpret_response, profile_url};
        use gloo_net::http::Request;

        let url = profile_url(&self.config.api_url);
        let request = Request::put(&url).header("Authorization", &bearer(token)).json(profile);
        let (status, text) = fetch::send(request).await?;
        interpret_response(status, &text)
    }
}

/// Native stand-in so the crate type-checks and tests without a browser.
#[cfg(not(feature = "csr"))]
#[async_trait::async_trait(?Send)]
impl AuthGateway for FetchGateway {
    async fn login(&self, _email: &str, _password: &str) -> Result<Credential, GatewayError> {
        Err(unavailable())
    }

    async fn logout(&self, _token: Option<&Credential>) -> Result<(), GatewayError> {
        Ok(())
    }

    async fn fetch_profile(&self, _token: &Credential) -> Result<Profile, GatewayError> {
        Err(unavailable())
    }

    async fn update_profile(&self, _token: &Credential, _profile: &Profile) -> Result<Profile, GatewayError> {
        Err(unavailable())
    }
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> GatewayError {
    GatewayError::Transport("not available outside the browser".to_owned())
}
