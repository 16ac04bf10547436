use anyhow::{Context, Result};
use url::Url;

use super::User;
use crate::config::UsersConfig;

/// HTTP client for the user-lookup service.
#[derive(Debug, Clone)]
pub struct UsersClient {
    base_url: Url,
    http: reqwest::Client,
}

impl UsersClient {
    /// Creates a client from config, resolving the base URL from the
    /// environment first.
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be built.
    pub fn from_config(config: &UsersConfig) -> Result<Self> {
        Self::new(&config.effective_base_url(), config)
    }

    /// Creates a client for an explicit base URL.
    ///
    /// # Panics
    /// In test builds (`#[cfg(test)]`), panics if `base_url` is the public
    /// lookup service. Point tests at a mock server (e.g., wiremock).
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, config: &UsersConfig) -> Result<Self> {
        let trimmed = base_url.trim_end_matches('/');

        #[cfg(test)]
        assert_ne!(
            trimmed,
            UsersConfig::DEFAULT_BASE_URL,
            "Tests must not use the public user-lookup service"
        );

        // Trailing slash keeps `join` from dropping the last path segment.
        let base_url = Url::parse(&format!("{trimmed}/"))
            .with_context(|| format!("Invalid users base URL: {base_url}"))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { base_url, http })
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Fetches a single user by id.
    ///
    /// # Errors
    /// Returns an error on transport failure, timeout, non-2xx status, or a
    /// body that is not a user record.
    pub async fn fetch_user(&self, id: u64) -> Result<User> {
        let url = self
            .base_url
            .join(&format!("users/{id}"))
            .context("Failed to build user URL")?;

        tracing::debug!(%url, "fetching user");

        let response = self
            .http
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .with_context(|| format!("Request to {url} failed"))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("User lookup returned {status} for id {id}");
        }

        let user = response
            .json::<User>()
            .await
            .context("Failed to decode user response")?;

        tracing::info!(id = user.id, name = %user.name, "user fetched");
        Ok(user)
    }
}
