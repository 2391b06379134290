//! Token acquisition.
//!
//! Two password-grant flows exist: the legacy `Token.php` endpoint, and the 2020 tenant
//! endpoint which needs the account and user ids. Which ones run is decided by
//! [`plan_token_flows`] from the current time and the configuration.

use crate::configuration::Configuration;
use crate::er_api::ErApiClient;
use crate::http_utils::ApiError;
use crate::logger::{default_logger, RequestLogger};
use crate::model::{LegacyTokenResponse, TenantTokenResponse};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

pub const LEGACY_TOKEN_URL: &str = "https://auth.emergencyreporting.com/Token.php";
pub const DEFAULT_TENANT_HOST: &str = "login.emergencyreporting.com";
pub const DEFAULT_TENANT_SEGMENT: &str = "login.emergencyreporting.com";

/// 2020-12-06T00:00:00Z. Up to and including this instant the legacy flow is tried.
pub const LEGACY_CUTOVER_TIMESTAMP: i64 = 1_607_212_800;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("bad status code: {0}")]
    BadStatus(u16),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("could not create client: {0}")]
    Client(#[from] ApiError),
}

/// A token from either flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl From<LegacyTokenResponse> for TokenResponse {
    fn from(response: LegacyTokenResponse) -> Self {
        Self {
            access_token: response.access_token,
            token_type: response.token_type,
            expires_in: response.expires_in,
        }
    }
}

impl From<TenantTokenResponse> for TokenResponse {
    fn from(response: TenantTokenResponse) -> Self {
        Self {
            access_token: response.access_token,
            token_type: response.token_type,
            // The tenant endpoint sends a string; garbage degrades to 0.
            expires_in: response.expires_in.trim().parse().unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPlan {
    LegacyOnly,
    LegacyThenTenant,
    TenantOnly,
}

pub fn plan_token_flows(now: DateTime<Utc>, configuration: &Configuration) -> TokenPlan {
    let past_cutover = DateTime::from_timestamp(LEGACY_CUTOVER_TIMESTAMP, 0)
        .map_or(true, |cutover| now > cutover);
    if configuration.force_tenant_flow || past_cutover {
        return TokenPlan::TenantOnly;
    }

    if !configuration.account_id.is_empty() && !configuration.user_id.is_empty() {
        TokenPlan::LegacyThenTenant
    } else {
        TokenPlan::LegacyOnly
    }
}

/// Runs the token flows.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    legacy_url: String,
    logger: Arc<dyn RequestLogger>,
}

impl AuthClient {
    pub fn new() -> Result<Self, AuthError> {
        let client = Client::builder()
            .user_agent(concat!("ercli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            legacy_url: LEGACY_TOKEN_URL.to_string(),
            logger: default_logger(),
        })
    }

    pub fn with_legacy_url(mut self, url: impl Into<String>) -> Self {
        self.legacy_url = url.into();
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn RequestLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn tenant_token_url(configuration: &Configuration) -> String {
        let host = non_empty_or(&configuration.tenant_host, DEFAULT_TENANT_HOST);
        let segment = non_empty_or(&configuration.tenant_segment, DEFAULT_TENANT_SEGMENT);
        let host = host.trim_end_matches('/');
        let base = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        };
        format!("{}/{}/B2C_1A_PasswordGrant/oauth2/v2.0/token", base, segment)
    }

    pub async fn legacy_token(&self, configuration: &Configuration) -> Result<TokenResponse, AuthError> {
        let params = [
            ("grant_type", "password"),
            ("username", configuration.username.as_str()),
            ("password", configuration.password.as_str()),
            ("client_id", configuration.client_id.as_str()),
            ("client_secret", configuration.client_secret.as_str()),
        ];

        let response: LegacyTokenResponse = self.request_token(&self.legacy_url, &params).await?;
        Ok(response.into())
    }

    pub async fn tenant_token(&self, configuration: &Configuration) -> Result<TokenResponse, AuthError> {
        let url = Self::tenant_token_url(configuration);
        let segment = non_empty_or(&configuration.tenant_segment, DEFAULT_TENANT_SEGMENT);
        let scope = format!("https://{}/secure/full_access", segment);
        let params = [
            ("grant_type", "password"),
            ("username", configuration.username.as_str()),
            ("password", configuration.password.as_str()),
            ("client_id", configuration.client_id.as_str()),
            ("client_secret", configuration.client_secret.as_str()),
            ("scope", scope.as_str()),
            ("response_type", "token"),
            ("er_aid", configuration.account_id.as_str()),
            ("er_uid", configuration.user_id.as_str()),
        ];

        let response: TenantTokenResponse = self.request_token(&url, &params).await?;
        Ok(response.into())
    }

    /// Obtains a token following the plan for `now`.
    pub async fn generate_token(
        &self,
        configuration: &Configuration,
        now: DateTime<Utc>,
    ) -> Result<TokenResponse, AuthError> {
        let plan = plan_token_flows(now, configuration);
        debug!("Token plan: {:?}", plan);

        match plan {
            TokenPlan::LegacyOnly => self.legacy_token(configuration).await,
            TokenPlan::TenantOnly => self.tenant_token(configuration).await,
            TokenPlan::LegacyThenTenant => match self.legacy_token(configuration).await {
                Ok(token) => Ok(token),
                Err(e) => {
                    warn!("Legacy token flow failed ({}), trying the tenant flow", e);
                    self.tenant_token(configuration).await
                }
            },
        }
    }

    async fn request_token<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T, AuthError> {
        self.logger.log(format_args!("POST {}", url));

        let response = self.client.post(url).form(params).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        self.logger
            .log(format_args!("POST {} {} {}", url, status.as_u16(), body.len()));

        if !status.is_success() {
            self.logger
                .log(format_args!("Body: {}", String::from_utf8_lossy(&body)));
            return Err(AuthError::BadStatus(status.as_u16()));
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

/// Produces an authenticated client.
///
/// A token already present in the configuration is used as is; otherwise one is generated.
pub async fn login(configuration: &Configuration, now: DateTime<Utc>) -> Result<ErApiClient, AuthError> {
    login_with(&AuthClient::new()?, configuration, now).await
}

pub async fn login_with(
    auth: &AuthClient,
    configuration: &Configuration,
    now: DateTime<Utc>,
) -> Result<ErApiClient, AuthError> {
    let token = if configuration.token.is_empty() {
        auth.generate_token(configuration, now).await?.access_token
    } else {
        debug!("Using the configured token");
        configuration.token.clone()
    };

    Ok(ErApiClient::new(configuration, token)?.with_logger(auth.logger.clone()))
}
