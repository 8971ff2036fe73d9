//! reqwest-backed [`AuthGateway`] for native builds.
//!
//! Thin HTTP wrapper; classification lives in [`interpret_response`] so it
//! can be tested without a server.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use super::{AuthGateway, GatewayError, LoginRequest, bearer, interpret_login, interpret_response, login_url, profile_url};
use crate::config::GatewayConfig;
use crate::profile::Profile;
use crate::session::Credential;

pub struct HttpGateway {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl HttpGateway {
    /// Build a client honoring the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] if the HTTP client cannot be constructed.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.timeouts.connect_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| GatewayError::Transport(format!("client build failed: {e}")))?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<(u16, String), GatewayError> {
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Transport(transport_detail(&e)))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(transport_detail(&e)))?;
        Ok((status, text))
    }
}

fn transport_detail(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timed out".to_owned()
    } else if e.is_connect() {
        "connection failed".to_owned()
    } else {
        e.to_string()
    }
}

#[async_trait::async_trait(?Send)]
impl AuthGateway for HttpGateway {
    async fn login(&self, email: &str, password: &str) -> Result<Credential, GatewayError> {
        let url = login_url(&self.config.api_url);
        let (status, text) = self
            .send(self.http.post(&url).json(&LoginRequest { email, password }))
            .await?;
        interpret_login(status, &text)
    }

    async fn logout(&self, token: Option<&Credential>) -> Result<(), GatewayError> {
        let Some(url) = self.config.logout_url() else {
            tracing::debug!("no logout endpoint configured; skipping notification");
            return Ok(());
        };
        let mut request = self.http.post(&url);
        if let Some(token) = token {
            request = request.header(reqwest::header::AUTHORIZATION, bearer(token));
        }
        let (status, _text) = self.send(request).await?;
        if !(200..300).contains(&status) {
            return Err(GatewayError::Transport(format!("status {status}")));
        }
        Ok(())
    }

    async fn fetch_profile(&self, token: &Credential) -> Result<Profile, GatewayError> {
        let url = profile_url(&self.config.api_url);
        let request = self.http.post(&url).header(reqwest::header::AUTHORIZATION, bearer(token));
        let (status, text) = self.send(request).await?;
        interpret_response(status, &text)
    }

    async fn update_profile(&self, token: &Credential, profile: &Profile) -> Result<Profile, GatewayError> {
        let url = profile_url(&self.config.api_url);
        let request = self
            .http
            .put(&url)
            .header(reqwest::header::AUTHORIZATION, bearer(token))
            .json(profile);
        let (status, text) = self.send(request).await?;
        interpret_response(status, &text)
    }
}
