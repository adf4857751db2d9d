//! The request forwarder.
//!
//! It sends the request described by the client to the origin server and
//! turns the result into a [`ProxyOutcome`]:
//!
//! - [`ProxyOutcome::Forwarded`] when the origin answered, whatever the status
//!   code. A `4xx` or `5xx` from the origin is passed through.
//! - [`ProxyOutcome::BadGateway`] when the request could not be sent or its
//!   response could not be read: invalid URL, method or header, DNS,
//!   connection, TLS, timeout or body errors.
//!
//! The forwarder never fails. The only request it does not try to send is one
//! without URL, see [`ProxyRequest::target_url`].
use std::collections::BTreeMap;
use std::error::Error as _;
use std::panic::Location;
use std::sync::Arc;
use std::time::{Duration, Instant};

use api_hub_configuration::Playground as PlaygroundConfig;
use async_trait::async_trait;
use derive_more::Display;
#[cfg(test)]
use mockall::automock;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::api::ApiId;
use super::error::Error;

/// The request as sent by the playground client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProxyRequest {
    /// Free form HTTP method. `GET` when absent or blank.
    pub method: Option<String>,
    /// Absolute `http` or `https` URL of the origin.
    pub url: Option<String>,
    pub headers: BTreeMap<String, String>,
    /// Ignored for `GET` requests.
    pub body: Option<Value>,
    /// The listed API the request is made for, if any.
    pub api_id: Option<ApiId>,
}

impl ProxyRequest {
    /// The trimmed target URL.
    ///
    /// # Errors
    ///
    /// Will return `MissingUrl` if the URL is absent or blank.
    pub fn target_url(&self) -> Result<&str, Error> {
        match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(Error::MissingUrl {
                location: Location::caller(),
            }),
        }
    }
}

/// A validated request ready to be sent to the origin.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl TryFrom<&ProxyRequest> for OutboundRequest {
    type Error = TransportFailure;

    fn try_from(request: &ProxyRequest) -> Result<Self, Self::Error> {
        let url = parse_url(request.url.as_deref().map(str::trim).unwrap_or_default())?;
        let method = parse_method(request.method.as_deref())?;
        let headers = parse_headers(&request.headers)?;

        let body = if method == Method::GET {
            None
        } else {
            request.body.clone()
        };

        Ok(Self {
            method,
            url,
            headers,
            body,
        })
    }
}

fn parse_url(url: &str) -> Result<Url, TransportFailure> {
    let parsed = Url::parse(url).map_err(|err| TransportFailure {
        kind: TransportErrorKind::InvalidUrl,
        message: format!("invalid url {url:?}: {err}"),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(TransportFailure {
            kind: TransportErrorKind::InvalidUrl,
            message: format!("unsupported url scheme {scheme:?}, use http or https"),
        }),
    }
}

fn parse_method(method: Option<&str>) -> Result<Method, TransportFailure> {
    let method = method.map(str::trim).unwrap_or_default();

    if method.is_empty() {
        return Ok(Method::GET);
    }

    Method::from_bytes(method.to_ascii_uppercase().as_bytes()).map_err(|_| TransportFailure {
        kind: TransportErrorKind::InvalidMethod,
        message: format!("invalid http method {method:?}"),
    })
}

fn parse_headers(headers: &BTreeMap<String, String>) -> Result<HeaderMap, TransportFailure> {
    let invalid_header = |name: &str, reason: String| TransportFailure {
        kind: TransportErrorKind::InvalidHeader,
        message: format!("invalid header {name:?}: {reason}"),
    };

    let mut header_map = HeaderMap::with_capacity(headers.len());

    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.trim().as_bytes()).map_err(|err| invalid_header(name, err.to_string()))?;
        let header_value = HeaderValue::from_str(value).map_err(|err| invalid_header(name, err.to_string()))?;

        header_map.append(header_name, header_value);
    }

    Ok(header_map)
}

/// What the origin answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TransportErrorKind {
    #[display("TIMEOUT")]
    Timeout,
    #[display("CONNECTION_FAILED")]
    Connect,
    #[display("TOO_MANY_REDIRECTS")]
    Redirect,
    #[display("BODY_READ_FAILED")]
    Body,
    #[display("REQUEST_FAILED")]
    Request,
    #[display("TRANSPORT_ERROR")]
    Other,
    #[display("INVALID_URL")]
    InvalidUrl,
    #[display("INVALID_METHOD")]
    InvalidMethod,
    #[display("INVALID_HEADER")]
    InvalidHeader,
}

/// The request could not be sent, the origin could not be reached or its
/// response could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl From<reqwest::Error> for TransportFailure {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportErrorKind::Timeout
        } else if err.is_connect() {
            TransportErrorKind::Connect
        } else if err.is_redirect() {
            TransportErrorKind::Redirect
        } else if err.is_body() || err.is_decode() {
            TransportErrorKind::Body
        } else if err.is_request() {
            TransportErrorKind::Request
        } else {
            TransportErrorKind::Other
        };

        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }

        Self { kind, message }
    }
}

/// The HTTP client used to reach the origins.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpClient: Sync + Send {
    async fn send(&self, request: OutboundRequest) -> Result<OriginResponse, TransportFailure>;
}

/// [`HttpClient`] backed by a `reqwest` client with a bounded timeout.
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// # Errors
    ///
    /// Will return `Err` if the TLS backend cannot be initialized.
    pub fn new(config: &PlaygroundConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: OutboundRequest) -> Result<OriginResponse, TransportFailure> {
        let OutboundRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let builder = self.client.request(method, url).headers(headers);

        let builder = match body {
            None => builder,
            Some(Value::String(text)) => builder.body(text),
            Some(value) => builder.json(&value),
        };

        let response = builder.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(OriginResponse { status, headers, body })
    }
}

/// The origin answered.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardedResponse {
    pub status: u16,
    pub status_text: String,
    /// The body parsed as JSON, or the body text when it is not JSON.
    pub data: Value,
    /// Response headers with lowercase names. Repeated headers are joined
    /// with `, `.
    pub headers: BTreeMap<String, String>,
    /// Milliseconds.
    pub duration: u64,
    /// Length in bytes of `data` serialized as JSON.
    pub size: usize,
}

/// The request was not answered by the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadGateway {
    pub message: String,
    pub code: String,
    /// Milliseconds.
    pub duration: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProxyOutcome {
    Forwarded(ForwardedResponse),
    BadGateway(BadGateway),
}

impl ProxyOutcome {
    /// Counted as an error in the API usage: transport failure or an origin
    /// status `>= 400`.
    #[must_use]
    pub fn is_error(&self) -> bool {
        match self {
            ProxyOutcome::Forwarded(response) => response.status >= 400,
            ProxyOutcome::BadGateway(_) => true,
        }
    }

    #[must_use]
    pub fn duration(&self) -> u64 {
        match self {
            ProxyOutcome::Forwarded(response) => response.duration,
            ProxyOutcome::BadGateway(bad_gateway) => bad_gateway.duration,
        }
    }
}

pub struct Forwarder {
    client: Arc<dyn HttpClient>,
}

impl Forwarder {
    #[must_use]
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    /// It sends the request to the origin and measures the elapsed time.
    pub async fn forward(&self, request: &ProxyRequest) -> ProxyOutcome {
        let start = Instant::now();

        let result = match OutboundRequest::try_from(request) {
            Ok(outbound) => {
                debug!(method = %outbound.method, url = %outbound.url, "forwarding playground request");
                self.client.send(outbound).await
            }
            Err(failure) => Err(failure),
        };

        let duration = as_millis(start.elapsed());

        match result {
            Ok(response) => ProxyOutcome::Forwarded(shape_response(response, duration)),
            Err(failure) => ProxyOutcome::BadGateway(BadGateway {
                message: failure.message,
                code: failure.kind.to_string(),
                duration,
            }),
        }
    }
}

fn as_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

fn shape_response(response: OriginResponse, duration: u64) -> ForwardedResponse {
    let data = parse_body(&response.body);

    let size = serde_json::to_string(&data).map(|json| json.len()).unwrap_or_default();

    let mut headers: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in &response.headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        headers
            .entry(name.as_str().to_owned())
            .and_modify(|joined| {
                joined.push_str(", ");
                joined.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }

    ForwardedResponse {
        status: response.status.as_u16(),
        status_text: response.status.canonical_reason().unwrap_or_default().to_owned(),
        data,
        headers,
        duration,
        size,
    }
}

fn parse_body(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::String(String::new());
    }

    serde_json::from_slice(body).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}
