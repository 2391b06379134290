//! Transport core for the Emergency Reporting API.
//!
//! Every API call goes through [`HttpClient::execute`]: it resolves the target against the
//! configured host, attaches the credentials, sends the request, and turns non-2xx
//! responses into an [`ApiError`] by reading the vendor's error envelope.

use crate::configuration::Configuration;
use crate::logger::{default_logger, RequestLogger};
use crate::model::{ErrorDetail, ErrorResponse, SingleErrorResponse};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::trace;
use url::Url;

pub const DEFAULT_HOST: &str = "data.emergencyreporting.com";
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Duplicate")]
    Duplicate,
    #[error("NotFound")]
    NotFound,
    #[error("error type: {error_type} ({message}); status code: {status}")]
    Generic {
        error_type: String,
        message: String,
        status: u16,
    },
    #[error("bad status code: {0}")]
    BadStatus(u16),
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid header '{name}'")]
    InvalidHeader { name: String },
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("could not parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("could not create JSON: {0}")]
    EncodeError(#[source] serde_json::Error),
    #[error("could not {operation}: {source}")]
    Operation {
        operation: &'static str,
        #[source]
        source: Box<ApiError>,
    },
}

impl ApiError {
    /// Wraps the error with the name of the operation that failed.
    pub fn context(self, operation: &'static str) -> ApiError {
        ApiError::Operation {
            operation,
            source: Box::new(self),
        }
    }

    /// The innermost error, looking through operation wrappers.
    pub fn root(&self) -> &ApiError {
        let mut current = self;
        while let ApiError::Operation { source, .. } = current {
            current = source;
        }
        current
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.root(), ApiError::NotFound)
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self.root(), ApiError::Duplicate)
    }

    /// The HTTP status behind the error, when one is known.
    pub fn status(&self) -> Option<u16> {
        match self.root() {
            ApiError::Generic { status, .. } => Some(*status),
            ApiError::BadStatus(status) => Some(*status),
            ApiError::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Reads the first error out of either envelope shape the API uses.
///
/// The list form is tried first; the single-object form only when the list form fails to
/// parse or carries no type.
pub fn parse_error_detail(body: &[u8]) -> Option<ErrorDetail> {
    if let Ok(response) = serde_json::from_slice::<ErrorResponse>(body) {
        if let Some(detail) = response.errors.into_iter().next() {
            if !detail.error_type.is_empty() {
                return Some(detail);
            }
        }
    }

    match serde_json::from_slice::<SingleErrorResponse>(body) {
        Ok(response) if !response.errors.error_type.is_empty() => Some(response.errors),
        _ => None,
    }
}

/// Maps a non-2xx status and its body to an [`ApiError`].
pub fn normalize_error(status: u16, body: &[u8]) -> ApiError {
    match parse_error_detail(body) {
        None if status == 404 => ApiError::NotFound,
        None => ApiError::BadStatus(status),
        Some(detail) => match detail.error_type.as_str() {
            "Duplicate" => ApiError::Duplicate,
            _ => ApiError::Generic {
                error_type: detail.error_type,
                message: detail.message,
                status,
            },
        },
    }
}

/// One outbound API call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    /// A path relative to the configured host, or an absolute `http(s)://` URL.
    pub target: String,
    /// Query parameters, encoded in key order.
    pub options: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Vec<u8>>,
    pub timeout: Option<Duration>,
}

impl RequestSpec {
    pub fn new(method: Method, target: impl Into<String>) -> Self {
        Self {
            method,
            target: target.into(),
            options: BTreeMap::new(),
            headers: BTreeMap::new(),
            body: None,
            timeout: None,
        }
    }

    pub fn get(target: impl Into<String>) -> Self {
        Self::new(Method::GET, target)
    }

    pub fn post(target: impl Into<String>) -> Self {
        Self::new(Method::POST, target)
    }

    pub fn put(target: impl Into<String>) -> Self {
        Self::new(Method::PUT, target)
    }

    pub fn patch(target: impl Into<String>) -> Self {
        Self::new(Method::PATCH, target)
    }

    pub fn delete(target: impl Into<String>) -> Self {
        Self::new(Method::DELETE, target)
    }

    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn options(mut self, options: &BTreeMap<String, String>) -> Self {
        self.options
            .extend(options.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Encodes `value` as the request body and marks it as JSON.
    pub fn json<B: Serialize + ?Sized>(self, value: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_vec(value).map_err(ApiError::EncodeError)?;
        Ok(self
            .header(CONTENT_TYPE.as_str(), mime::APPLICATION_JSON.as_ref())
            .body(body))
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Settings shared by every request of an [`HttpClient`].
#[derive(Debug, Clone)]
pub struct HttpRequestConfig {
    /// Host the relative targets are joined to; `https://` is assumed without a scheme.
    pub host: String,
    /// Absolute timeout for each request, connection and body included.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for HttpRequestConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            timeout: None,
            user_agent: concat!("ercli/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpRequestConfig {
    pub fn from_configuration(configuration: &Configuration) -> Self {
        let host = if configuration.host.is_empty() {
            DEFAULT_HOST.to_string()
        } else {
            configuration.host.clone()
        };

        Self {
            host,
            timeout: configuration.timeout_seconds.map(Duration::from_secs),
            ..Self::default()
        }
    }

    /// The host with a scheme, without a trailing slash.
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        }
    }
}

/// Authenticated HTTP client for the data API.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpRequestConfig,
    token: String,
    subscription_key: String,
    logger: Arc<dyn RequestLogger>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    pub fn new(
        config: HttpRequestConfig,
        token: impl Into<String>,
        subscription_key: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config,
            token: token.into(),
            subscription_key: subscription_key.into(),
            logger: default_logger(),
        })
    }

    pub fn with_logger(mut self, logger: Arc<dyn RequestLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &HttpRequestConfig {
        &self.config
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Resolves a target and its query parameters into the final URL.
    pub fn resolve_url(
        &self,
        target: &str,
        options: &BTreeMap<String, String>,
    ) -> Result<Url, ApiError> {
        let raw = if target.starts_with("http://") || target.starts_with("https://") {
            target.to_string()
        } else {
            format!(
                "{}/{}",
                self.config.base_url(),
                target.trim_start_matches('/')
            )
        };

        let mut url = Url::parse(&raw).map_err(|source| ApiError::InvalidUrl {
            url: raw.clone(),
            source,
        })?;

        if !options.is_empty() {
            url.query_pairs_mut().extend_pairs(options.iter());
        }

        Ok(url)
    }

    fn build_headers(&self, spec: &RequestSpec) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, header_value(AUTHORIZATION.as_str(), &self.token)?);
        headers.insert(
            HeaderName::from_static("ocp-apim-subscription-key"),
            header_value(SUBSCRIPTION_KEY_HEADER, &self.subscription_key)?,
        );

        for (name, value) in &spec.headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|_| ApiError::InvalidHeader {
                    name: name.clone(),
                })?;
            headers.insert(header_name, header_value(name, value)?);
        }

        Ok(headers)
    }

    /// Sends the request and returns the raw body of a 2xx response.
    pub async fn execute(&self, spec: RequestSpec) -> Result<Vec<u8>, ApiError> {
        let url = self.resolve_url(&spec.target, &spec.options)?;
        let headers = self.build_headers(&spec)?;

        let mut request = self
            .client
            .request(spec.method.clone(), url.clone())
            .headers(headers);
        if let Some(timeout) = spec.timeout {
            request = request.timeout(timeout);
        }
        if let Some(body) = spec.body {
            request = request.body(body);
        }

        self.logger.log(format_args!("{} {}", spec.method, url));

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        self.logger.log(format_args!(
            "{} {} {} {}",
            spec.method,
            url,
            status.as_u16(),
            body.len()
        ));

        if status.is_success() {
            return Ok(body);
        }

        let error = normalize_error(status.as_u16(), &body);
        if matches!(error, ApiError::BadStatus(_)) {
            self.logger
                .log(format_args!("Error: {}", String::from_utf8_lossy(&body)));
        }
        Err(error)
    }

    /// Sends the request and decodes the 2xx body as `T`.
    pub async fn execute_json<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T, ApiError> {
        let body = self.execute(spec).await?;
        trace!("Raw response text for deserialization: {}", String::from_utf8_lossy(&body));
        Ok(serde_json::from_slice::<T>(&body)?)
    }

    /// Sends the request and ignores the 2xx body.
    pub async fn execute_discard(&self, spec: RequestSpec) -> Result<(), ApiError> {
        self.execute(spec).await.map(|_| ())
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(value).map_err(|_| ApiError::InvalidHeader {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::testing::RecordingLogger;
    use serde_json::json;
    use wiremock::matchers::{body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HttpClient {
        let config = HttpRequestConfig {
            host: server.uri(),
            ..HttpRequestConfig::default()
        };
        HttpClient::new(config, "tok", "sub").unwrap()
    }

    #[test]
    fn test_normalize_duplicate_from_list_envelope() {
        let body = br#"{"errors":[{"type":"Duplicate","message":"already exists"}]}"#;
        assert!(matches!(normalize_error(409, body), ApiError::Duplicate));
        assert!(matches!(normalize_error(500, body), ApiError::Duplicate));
    }

    #[test]
    fn test_normalize_single_object_envelope() {
        let body = br#"{"errors":{"type":"Validation","message":"bad zip"}}"#;
        match normalize_error(400, body) {
            ApiError::Generic {
                error_type,
                message,
                status,
            } => {
                assert_eq!(error_type, "Validation");
                assert_eq!(message, "bad zip");
                assert_eq!(status, 400);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_normalize_without_type() {
        assert!(matches!(normalize_error(404, b""), ApiError::NotFound));
        assert!(matches!(normalize_error(404, b"<html>"), ApiError::NotFound));
        assert!(matches!(normalize_error(500, b"<html>"), ApiError::BadStatus(500)));
        assert!(matches!(
            normalize_error(502, br#"{"errors":[]}"#),
            ApiError::BadStatus(502)
        ));
    }

    #[test]
    fn test_normalize_not_found_type_is_generic() {
        let body = br#"{"errors":[{"type":"NotFound","message":"no such incident"}]}"#;
        match normalize_error(400, body) {
            ApiError::Generic {
                error_type, status, ..
            } => {
                assert_eq!(error_type, "NotFound");
                assert_eq!(status, 400);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(matches!(
            normalize_error(404, body),
            ApiError::Generic { status: 404, .. }
        ));
    }

    #[test]
    fn test_normalize_null_message_keeps_type() {
        let body = br#"{"errors":[{"type":"Validation","message":null}]}"#;
        match normalize_error(422, body) {
            ApiError::Generic {
                error_type,
                message,
                status,
            } => {
                assert_eq!(error_type, "Validation");
                assert_eq!(message, "");
                assert_eq!(status, 422);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_generic_error_message() {
        let error = normalize_error(
            422,
            br#"{"errors":[{"type":"Validation","message":"bad"}]}"#,
        );
        assert_eq!(
            error.to_string(),
            "error type: Validation (bad); status code: 422"
        );
        assert_eq!(error.status(), Some(422));
    }

    #[test]
    fn test_operation_context_looks_through() {
        let error = ApiError::NotFound.context("get the incident");
        assert_eq!(error.to_string(), "could not get the incident: NotFound");
        assert!(error.is_not_found());
        assert!(!error.is_duplicate());
    }

    #[test]
    fn test_base_url_adds_scheme() {
        let config = HttpRequestConfig {
            host: "data.example.com/".to_string(),
            ..HttpRequestConfig::default()
        };
        assert_eq!(config.base_url(), "https://data.example.com");

        let config = HttpRequestConfig {
            host: "http://localhost:8080".to_string(),
            ..HttpRequestConfig::default()
        };
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_resolve_url_encodes_options() {
        let client = HttpClient::new(HttpRequestConfig::default(), "tok", "sub").unwrap();
        let mut options = BTreeMap::new();
        options.insert("limit".to_string(), "10".to_string());
        options.insert("filter".to_string(), "dispatchRunNumber eq 1234".to_string());

        let url = client
            .resolve_url("/agencyincidents/incidents", &options)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://data.emergencyreporting.com/agencyincidents/incidents?filter=dispatchRunNumber+eq+1234&limit=10"
        );
    }

    #[test]
    fn test_resolve_url_keeps_absolute_targets() {
        let client = HttpClient::new(HttpRequestConfig::default(), "tok", "sub").unwrap();
        let url = client
            .resolve_url("https://other.example.com/x", &BTreeMap::new())
            .unwrap();
        assert_eq!(url.as_str(), "https://other.example.com/x");
    }

    #[tokio::test]
    async fn test_execute_sends_credentials_and_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/agencyincidents/incidents"))
            .and(header("Authorization", "tok"))
            .and(header("Ocp-Apim-Subscription-Key", "sub"))
            .and(query_param("filter", "dispatchRunNumber eq 1234"))
            .and(query_param("limit", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"incidents": []})))
            .expect(1)
            .mount(&server)
            .await;

        let spec = RequestSpec::get("/agencyincidents/incidents")
            .option("filter", "dispatchRunNumber eq 1234")
            .option("limit", "10");
        let body = client_for(&server).execute(spec).await.unwrap();
        assert_eq!(body, br#"{"incidents":[]}"#.to_vec());
    }

    #[tokio::test]
    async fn test_caller_header_overrides_authorization() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/x"))
            .and(header("Authorization", "other"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let spec = RequestSpec::get("x").header("Authorization", "other");
        client_for(&server).execute_discard(spec).await.unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_on_any_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/agencyincidents/incidents"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "errors": [{"type": "Duplicate", "message": "exists"}]
            })))
            .mount(&server)
            .await;

        let error = client_for(&server)
            .execute(RequestSpec::post("/agencyincidents/incidents"))
            .await
            .unwrap_err();
        assert!(matches!(error, ApiError::Duplicate));
    }

    #[tokio::test]
    async fn test_only_bad_status_bodies_are_logged() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let logger = Arc::new(RecordingLogger::default());
        let client = client_for(&server).with_logger(logger.clone());

        let error = client.execute(RequestSpec::get("/missing")).await.unwrap_err();
        assert!(matches!(error, ApiError::NotFound));
        assert_eq!(logger.lines().len(), 2);
        assert!(!logger.lines().iter().any(|line| line.starts_with("Error:")));

        let error = client.execute(RequestSpec::get("/broken")).await.unwrap_err();
        assert!(matches!(error, ApiError::BadStatus(500)));
        assert_eq!(logger.lines().last().map(String::as_str), Some("Error: boom"));
    }

    #[tokio::test]
    async fn test_decode_failure_is_json_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/agencystations/stations"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result: Result<serde_json::Value, ApiError> = client_for(&server)
            .execute_json(RequestSpec::get("/agencystations/stations"))
            .await;
        assert!(matches!(result, Err(ApiError::JsonError(_))));
    }

    #[tokio::test]
    async fn test_logger_sees_request_and_completion() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/agencystations/stations"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        let logger = Arc::new(RecordingLogger::default());
        let client = client_for(&server).with_logger(logger.clone());
        client
            .execute(RequestSpec::get("/agencystations/stations"))
            .await
            .unwrap();

        let url = format!("{}/agencystations/stations", server.uri());
        assert_eq!(
            logger.lines(),
            vec![format!("GET {}", url), format!("GET {} 200 2", url)]
        );
    }

    #[tokio::test]
    async fn test_json_body_sets_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/things"))
            .and(header("Content-Type", "application/json"))
            .and(body_string(r#"{"a":1}"#))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let spec = RequestSpec::post("/things").json(&json!({"a": 1})).unwrap();
        client_for(&server).execute_discard(spec).await.unwrap();
    }
}
