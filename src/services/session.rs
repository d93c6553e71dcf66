//! HTTP session bound to the backend's `/api/` base URL.
//!
//! Paths are joined onto the base as relative references, and an
//! `Authorization: Bearer` header is attached when the session holds a token.
//! Responses come back untouched: a 401 or 404 is a normal return value for
//! the caller to assert on, never an error.

use reqwest::blocking::{Client, Request, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Url};

use crate::error::HarnessError;
use crate::models::{AccessToken, HarnessConfig};

/// Optional per-request settings
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Caller headers; session defaults replace any with the same name
    pub headers: HeaderMap,
    /// JSON body, sent with `Content-Type: application/json`
    pub json: Option<serde_json::Value>,
    /// Query string parameters
    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            json: Some(body),
            ..Default::default()
        }
    }

    /// Add a caller header
    pub fn header(mut self, name: &str, value: &str) -> Result<Self, HarnessError> {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| HarnessError::InvalidHeader {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| HarnessError::InvalidHeader {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }
}

/// HTTP client that resolves relative paths and injects the bearer token
pub struct AuthenticatedSession {
    client: Client,
    base_url: Url,
    default_headers: HeaderMap,
}

impl AuthenticatedSession {
    /// Session against the configured backend
    pub fn new(token: Option<&AccessToken>) -> Result<Self, HarnessError> {
        Self::with_base_url(&HarnessConfig::global().backend_base_url(), token)
    }

    /// Session against an explicit base URL
    pub fn with_base_url(base_url: &str, token: Option<&AccessToken>) -> Result<Self, HarnessError> {
        let base_url = parse_base_url(base_url)?;

        // An empty token counts as no token.
        let mut default_headers = HeaderMap::new();
        if let Some(token) = token.filter(|t| !t.as_str().is_empty()) {
            let mut value =
                HeaderValue::from_str(&token.bearer()).map_err(|e| HarnessError::InvalidHeader {
                    name: AUTHORIZATION.to_string(),
                    reason: e.to_string(),
                })?;
            value.set_sensitive(true);
            default_headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder().cookie_store(true).build()?;

        Ok(Self {
            client,
            base_url,
            default_headers,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.default_headers.contains_key(AUTHORIZATION)
    }

    /// Resolve a backend path against the base URL.
    ///
    /// Leading slashes are stripped first, so `/foo` and `foo` both land
    /// under `/api/` instead of `/foo` replacing the base path.
    pub fn resolve(&self, path: &str) -> Result<Url, HarnessError> {
        let relative = path.trim_start_matches('/');
        self.base_url
            .join(relative)
            .map_err(|e| HarnessError::InvalidUrl {
                url: path.to_string(),
                reason: e.to_string(),
            })
    }

    /// Build a request without sending it
    pub fn prepare(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<Request, HarnessError> {
        let url = self.resolve(path)?;

        let mut headers = options.headers;
        for (name, value) in &self.default_headers {
            headers.insert(name.clone(), value.clone());
        }

        let mut builder = self.client.request(method, url);
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(json) = options.json {
            if !headers.contains_key(CONTENT_TYPE) {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            builder = builder.body(serde_json::to_string(&json)?);
        }

        Ok(builder.headers(headers).build()?)
    }

    /// Send a request and return the backend's response as-is
    pub fn request(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<Response, HarnessError> {
        let request = self.prepare(method, path, options)?;
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.client.execute(request)?;
        tracing::debug!(%method, %url, status = %response.status(), "Backend request");
        Ok(response)
    }

    pub fn get(&self, path: &str) -> Result<Response, HarnessError> {
        self.request(Method::GET, path, RequestOptions::default())
    }

    pub fn post_json(&self, path: &str, body: serde_json::Value) -> Result<Response, HarnessError> {
        self.request(Method::POST, path, RequestOptions::json(body))
    }

    pub fn put_json(&self, path: &str, body: serde_json::Value) -> Result<Response, HarnessError> {
        self.request(Method::PUT, path, RequestOptions::json(body))
    }

    pub fn delete(&self, path: &str) -> Result<Response, HarnessError> {
        self.request(Method::DELETE, path, RequestOptions::default())
    }
}

/// Parse a base URL, forcing a trailing slash so joins append to its path
fn parse_base_url(raw: &str) -> Result<Url, HarnessError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized).map_err(|e| HarnessError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}
