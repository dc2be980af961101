//! HTTP client abstraction for making requests to the CRM backend

use log::{debug, warn};
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    multipart::{Form, Part},
    Client, Method, RequestBuilder, StatusCode,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::Arc;
use url::Url;

use crate::config::CrmConfig;
use crate::error::{Error, Result};

/// The `{ success, data, message }` wrapper every backend response uses
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Turn a decoded envelope into its payload, or the backend's complaint
    pub fn into_data(self, status: StatusCode) -> Result<T> {
        if !self.success {
            return Err(Error::from_envelope(Some(status.as_u16()), self.message));
        }
        match self.data {
            Some(data) => Ok(data),
            None => {
                warn!("{} response carried no data", status);
                Err(Error::from_envelope(Some(status.as_u16()), self.message))
            }
        }
    }
}

/// A file forwarded in a multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            bytes,
        }
    }

    /// Convert into a multipart part
    pub fn into_part(self) -> Result<Part> {
        let part = Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.content_type)?;
        Ok(part)
    }
}

enum Body {
    Json(Vec<u8>),
    Multipart(Form),
}

/// Helper for building and executing HTTP requests
pub struct FetchBuilder<'a> {
    client: &'a Client,
    url: String,
    method: Method,
    headers: HeaderMap,
    query_params: Vec<(String, String)>,
    body: Option<Body>,
}

impl<'a> FetchBuilder<'a> {
    /// Create a new FetchBuilder
    pub fn new(client: &'a Client, url: &str, method: Method) -> Self {
        Self {
            client,
            url: url.to_string(),
            method,
            headers: HeaderMap::new(),
            query_params: Vec::new(),
            body: None,
        }
    }

    /// Add a header to the request
    pub fn header(mut self, name: &'static str, value: &str) -> Self {
        if let Ok(value) = HeaderValue::from_str(value) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Add a query parameter to the request
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query_params.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a JSON body to the request
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        let json = serde_json::to_vec(body)?;
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Some(Body::Json(json));
        Ok(self)
    }

    /// Add a multipart body to the request
    pub fn multipart(mut self, form: Form) -> Self {
        self.body = Some(Body::Multipart(form));
        self
    }

    /// Build the request
    fn build(self) -> Result<RequestBuilder> {
        let mut url = Url::parse(&self.url)?;

        if !self.query_params.is_empty() {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in &self.query_params {
                query_pairs.append_pair(key, value);
            }
        }

        debug!("{} {}", self.method, url.path());

        let mut req = self.client.request(self.method, url.as_str());
        req = req.headers(self.headers);

        match self.body {
            Some(Body::Json(bytes)) => req = req.body(bytes),
            Some(Body::Multipart(form)) => req = req.multipart(form),
            None => {}
        }

        Ok(req)
    }

    /// Execute the request and unwrap the envelope's `data`
    pub async fn execute<T: DeserializeOwned>(self) -> Result<T> {
        let (status, text) = self.send().await?;
        let envelope: Envelope<T> = serde_json::from_str(&text)?;
        envelope.into_data(status)
    }

    /// Execute a mutation whose payload is not needed
    pub async fn execute_unit(self) -> Result<()> {
        let (status, text) = self.send().await?;
        if text.trim().is_empty() {
            return Ok(());
        }
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(&text)?;
        if !envelope.success {
            return Err(Error::from_envelope(Some(status.as_u16()), envelope.message));
        }
        Ok(())
    }

    async fn send(self) -> Result<(StatusCode, String)> {
        let method = self.method.clone();
        let path = self.url.clone();
        let response = self.build()?.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!("{} {} failed with {}: {}", method, path, status, text);
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&text)
                .ok()
                .and_then(|envelope| envelope.message);
            return Err(Error::from_envelope(Some(status.as_u16()), message));
        }

        Ok((status, text))
    }
}

/// Helper for creating HTTP requests
pub struct Fetch;

impl Fetch {
    /// Create a GET request
    pub fn get<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::GET)
    }

    /// Create a POST request
    pub fn post<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::POST)
    }

    /// Create a PUT request
    pub fn put<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::PUT)
    }

    /// Create a DELETE request
    pub fn delete<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::DELETE)
    }
}

/// Shared connection to the backend: one cookie-carrying client plus its config.
///
/// Cheap to clone; every resource client holds one.
#[derive(Debug, Clone)]
pub struct Backend {
    client: Client,
    config: Arc<CrmConfig>,
}

impl Backend {
    pub fn new(config: CrmConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .user_agent(config.options.user_agent.clone());
        if let Some(timeout) = config.options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &CrmConfig {
        &self.config
    }

    pub fn get(&self, path: &str) -> FetchBuilder<'_> {
        Fetch::get(&self.client, &self.config.endpoint(path))
    }

    pub fn post(&self, path: &str) -> FetchBuilder<'_> {
        Fetch::post(&self.client, &self.config.endpoint(path))
    }

    pub fn put(&self, path: &str) -> FetchBuilder<'_> {
        Fetch::put(&self.client, &self.config.endpoint(path))
    }

    pub fn delete(&self, path: &str) -> FetchBuilder<'_> {
        Fetch::delete(&self.client, &self.config.endpoint(path))
    }
}
