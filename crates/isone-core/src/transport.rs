use std::time::Duration;

use crate::error::Error;

/// Outgoing request envelope handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub accept: String,
    pub query: Vec<(String, String)>,
    /// Username/password pair sent as HTTP basic authentication.
    pub basic_auth: (String, String),
}

/// Response envelope returned by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Blocking HTTP seam, so retrieval logic can be exercised without a network.
///
/// Implementations issue exactly one GET per call and perform no retries.
pub trait HttpTransport: Send + Sync {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, Error>;
}

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// `reqwest::blocking` transport used outside of tests.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(transport_error)?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        let (username, password) = &request.basic_auth;
        let response = self
            .client
            .get(&request.url)
            .query(&request.query)
            .header(reqwest::header::ACCEPT, &request.accept)
            .basic_auth(username, Some(password))
            .send()
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().map_err(transport_error)?;
        Ok(HttpResponse { status, body })
    }
}

fn transport_error(error: reqwest::Error) -> Error {
    Error::Transport {
        message: error.to_string(),
    }
}
