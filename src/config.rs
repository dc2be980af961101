//! Configuration options for the CRM client

use std::time::Duration;
use url::Url;

use crate::error::{Error, Result};

/// Environment variable holding the backend base URL
pub const BACKEND_URL_ENV: &str = "NGO_CRM_BACKEND_URL";

/// Configuration options for the CRM client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// The request timeout
    pub request_timeout: Option<Duration>,

    /// Path prefix every endpoint lives under
    pub api_prefix: String,

    /// The User-Agent sent with each request
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: Some(Duration::from_secs(30)),
            api_prefix: "/api/v1".to_string(),
            user_agent: format!("ngo-crm-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientOptions {
    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the API prefix
    pub fn with_api_prefix(mut self, value: &str) -> Self {
        self.api_prefix = value.trim_end_matches('/').to_string();
        self
    }

    /// Set the User-Agent
    pub fn with_user_agent(mut self, value: &str) -> Self {
        self.user_agent = value.to_string();
        self
    }
}

/// Where the backend lives and how to talk to it
#[derive(Debug, Clone)]
pub struct CrmConfig {
    pub base_url: Url,
    pub options: ClientOptions,
}

impl CrmConfig {
    /// Creates a new configuration, validating the URL.
    pub fn new(url_str: &str) -> Result<Self> {
        Self::new_with_options(url_str, ClientOptions::default())
    }

    /// Creates a new configuration with custom options.
    pub fn new_with_options(url_str: &str, options: ClientOptions) -> Result<Self> {
        let base_url = Url::parse(url_str)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!("{} cannot be used as a base URL", url_str)));
        }
        Ok(Self { base_url, options })
    }

    /// Reads the backend URL from the environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        let url_str = std::env::var(BACKEND_URL_ENV).map_err(|_| {
            Error::config(format!("{} environment variable not found", BACKEND_URL_ENV))
        })?;
        Self::new(&url_str)
    }

    /// Full URL of an endpoint, e.g. `endpoint("/events")`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            self.options.api_prefix,
            path
        )
    }
}
