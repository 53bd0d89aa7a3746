use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::Error;
use crate::transport::{HttpRequest, HttpTransport, ReqwestTransport};

/// Base URL for the ISO New England web services API.
pub const DEFAULT_BASE_URL: &str = "https://webservices.iso-ne.com/api/v1.1";

const USERNAME_VAR: &str = "API_USERNAME";
const PASSWORD_VAR: &str = "API_PASSWORD";

/// Basic-auth credential pair for the web services API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Builds the pair, rejecting missing or empty values. Absent credentials
    /// are fatal for the whole client, there is no anonymous access.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, Error> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() || password.is_empty() {
            return Err(Error::MissingCredentials);
        }
        Ok(Self { username, password })
    }

    /// Resolves the pair from `API_USERNAME` / `API_PASSWORD`, loading a
    /// `.env` file from the working directory first if one exists.
    pub fn from_env() -> Result<Self, Error> {
        dotenvy::dotenv().ok();
        let username = std::env::var(USERNAME_VAR).unwrap_or_default();
        let password = std::env::var(PASSWORD_VAR).unwrap_or_default();
        Self::new(username, password)
    }

    /// Resolves the pair from an explicit dotenv file. The file is read
    /// directly; the process environment is left untouched.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let mut username = String::new();
        let mut password = String::new();
        let entries = dotenvy::from_path_iter(path).map_err(|_| Error::MissingCredentials)?;
        for entry in entries {
            let (key, value) = entry.map_err(|_| Error::MissingCredentials)?;
            match key.as_str() {
                USERNAME_VAR => username = value,
                PASSWORD_VAR => password = value,
                _ => {}
            }
        }
        Self::new(username, password)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Response format requested from the API, reflected in the URL suffix and
/// the `Accept` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

impl ResponseFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }

    pub fn accept_header(self) -> String {
        format!("application/{}", self.as_str())
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw per-call response payload: parsed when JSON was requested, verbatim
/// text otherwise. Transient, not retained by any component.
#[derive(Debug, Clone, PartialEq)]
pub enum RawDocument {
    Json(Value),
    Text(String),
}

impl RawDocument {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }
}

/// Blocking client for the web services API.
///
/// Holds only immutable configuration after construction, so shared use from
/// multiple callers is safe. One outbound GET per fetch call; no caching, no
/// retries.
pub struct Client {
    base_url: String,
    credentials: Credentials,
    transport: Arc<dyn HttpTransport>,
}

impl Client {
    /// Builds a client with credentials resolved from the environment.
    pub fn new() -> Result<Self, Error> {
        Self::with_credentials(Credentials::from_env()?)
    }

    /// Builds a client around an explicitly resolved credential pair.
    pub fn with_credentials(credentials: Credentials) -> Result<Self, Error> {
        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            credentials,
            transport: Arc::new(ReqwestTransport::new()?),
        })
    }

    /// Builds a client over a caller-supplied transport.
    pub fn with_transport(credentials: Credentials, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            credentials,
            transport,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// One GET against `{base}/{path}.{format}`. Returns a parsed document
    /// for [`ResponseFormat::Json`] and raw text for any other format.
    pub fn fetch(
        &self,
        path: &str,
        query: &[(&str, &str)],
        format: ResponseFormat,
    ) -> Result<RawDocument, Error> {
        match format {
            ResponseFormat::Json => Ok(RawDocument::Json(self.fetch_json(path, query)?)),
            ResponseFormat::Xml => Ok(RawDocument::Text(self.fetch_text(path, query, format)?)),
        }
    }

    /// Fetches and parses a JSON document.
    pub fn fetch_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, Error> {
        let body = self.execute(path, query, ResponseFormat::Json)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches the raw response body in the requested format.
    pub fn fetch_text(
        &self,
        path: &str,
        query: &[(&str, &str)],
        format: ResponseFormat,
    ) -> Result<String, Error> {
        self.execute(path, query, format)
    }

    fn execute(
        &self,
        path: &str,
        query: &[(&str, &str)],
        format: ResponseFormat,
    ) -> Result<String, Error> {
        let url = format!("{}/{}.{}", self.base_url, path, format.as_str());
        debug!(%url, %format, "GET");

        let request = HttpRequest {
            url,
            accept: format.accept_header(),
            query: query
                .iter()
                .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
                .collect(),
            basic_auth: (
                self.credentials.username.clone(),
                self.credentials.password.clone(),
            ),
        };

        let response = self.transport.get(&request)?;
        if !response.is_success() {
            return Err(Error::RequestFailed {
                status: response.status,
                body: response.body,
            });
        }
        Ok(response.body)
    }
}
