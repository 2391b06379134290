//! Resource operations of the Emergency Reporting data API.
//!
//! Every operation is a thin wrapper over [`HttpClient::execute`]: a fixed method and path
//! template, an optional JSON body, and the `ETag` row version for updates. Failures are
//! wrapped with the operation name so that callers see e.g.
//! `could not get the incident: NotFound`.

use crate::configuration::Configuration;
use crate::http_utils::{ApiError, HttpClient, HttpRequestConfig, RequestSpec};
use crate::logger::RequestLogger;
use crate::model::*;
use reqwest::header::ETAG;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Query options such as `filter`, `limit`, `offset`, `orderby`.
pub type Options = BTreeMap<String, String>;

fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Authenticated client. Obtained from [`crate::auth::login`].
#[derive(Debug, Clone)]
pub struct ErApiClient {
    http: HttpClient,
}

impl ErApiClient {
    pub fn new(configuration: &Configuration, token: impl Into<String>) -> Result<Self, ApiError> {
        let http = HttpClient::new(
            HttpRequestConfig::from_configuration(configuration),
            token,
            configuration.subscription_key.clone(),
        )?;
        Ok(Self { http })
    }

    pub fn with_logger(mut self, logger: Arc<dyn RequestLogger>) -> Self {
        self.http = self.http.with_logger(logger);
        self
    }

    pub fn token(&self) -> &str {
        self.http.token()
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        spec: RequestSpec,
        operation: &'static str,
    ) -> Result<T, ApiError> {
        self.http
            .execute_json(spec)
            .await
            .map_err(|e| e.context(operation))
    }

    async fn send(&self, spec: RequestSpec, operation: &'static str) -> Result<(), ApiError> {
        self.http
            .execute_discard(spec)
            .await
            .map_err(|e| e.context(operation))
    }

    fn json_spec<B: serde::Serialize + ?Sized>(
        spec: RequestSpec,
        body: &B,
        operation: &'static str,
    ) -> Result<RequestSpec, ApiError> {
        spec.json(body).map_err(|e| e.context(operation))
    }

    // Stations

    pub async fn get_stations(&self, options: &Options) -> Result<GetStationsResponse, ApiError> {
        let spec = RequestSpec::get("/agencystations/stations").options(options);
        self.fetch(spec, "get stations").await
    }

    // Incidents

    pub async fn get_incident(&self, incident_id: &str) -> Result<GetIncidentResponse, ApiError> {
        let spec = RequestSpec::get(format!(
            "/agencyincidents/incidents/{}",
            segment(incident_id)
        ));
        self.fetch(spec, "get the incident").await
    }

    pub async fn get_incidents(&self, options: &Options) -> Result<GetIncidentsResponse, ApiError> {
        let spec = RequestSpec::get("/agencyincidents/incidents").options(options);
        self.fetch(spec, "get incidents").await
    }

    pub async fn post_incident(&self, incident: &Incident) -> Result<PostIncidentResponse, ApiError> {
        const OPERATION: &str = "create the incident";
        let spec = Self::json_spec(
            RequestSpec::post("/agencyincidents/incidents"),
            incident,
            OPERATION,
        )?;
        self.fetch(spec, OPERATION).await
    }

    pub async fn delete_incident(&self, incident_id: &str) -> Result<(), ApiError> {
        let spec = RequestSpec::delete(format!(
            "/agencyincidents/incidents/{}",
            segment(incident_id)
        ))
        .header("Content-Type", mime::APPLICATION_JSON.as_ref());
        self.send(spec, "delete the incident").await
    }

    // Incident exposures

    pub async fn get_incident_exposures(
        &self,
        incident_id: &str,
        options: &Options,
    ) -> Result<GetExposuresResponse, ApiError> {
        let spec = RequestSpec::get(format!(
            "/agencyincidents/incidents/{}/exposures",
            segment(incident_id)
        ))
        .options(options);
        self.fetch(spec, "get incident exposures").await
    }

    pub async fn get_incident_exposure(
        &self,
        incident_id: &str,
        exposure_id: &str,
    ) -> Result<GetExposureResponse, ApiError> {
        let spec = RequestSpec::get(format!(
            "/agencyincidents/incidents/{}/exposures/{}",
            segment(incident_id),
            segment(exposure_id)
        ));
        self.fetch(spec, "get the incident exposure").await
    }

    pub async fn post_incident_exposure(
        &self,
        incident_id: &str,
        exposure: &Exposure,
    ) -> Result<PostExposureResponse, ApiError> {
        const OPERATION: &str = "create the incident exposure";
        let spec = Self::json_spec(
            RequestSpec::post(format!(
                "/agencyincidents/incidents/{}/exposures",
                segment(incident_id)
            )),
            exposure,
            OPERATION,
        )?;
        self.fetch(spec, OPERATION).await
    }

    pub async fn delete_incident_exposure(
        &self,
        incident_id: &str,
        exposure_id: &str,
    ) -> Result<(), ApiError> {
        let spec = RequestSpec::delete(format!(
            "/agencyincidents/incidents/{}/exposures/{}",
            segment(incident_id),
            segment(exposure_id)
        ))
        .header("Content-Type", mime::APPLICATION_JSON.as_ref());
        self.send(spec, "delete the incident exposure").await
    }

    pub async fn patch_incident_exposure(
        &self,
        incident_id: &str,
        exposure_id: &str,
        row_version: &str,
        patch: &PatchExposureRequest,
    ) -> Result<PatchExposureResponse, ApiError> {
        const OPERATION: &str = "patch the incident exposure";
        let spec = Self::json_spec(
            RequestSpec::patch(format!(
                "/agencyincidents/incidents/{}/exposures/{}",
                segment(incident_id),
                segment(exposure_id)
            ))
            .header(ETAG.as_str(), row_version),
            patch,
            OPERATION,
        )?;
        self.fetch(spec, OPERATION).await
    }

    pub async fn get_exposures(&self, options: &Options) -> Result<GetExposuresResponse, ApiError> {
        let spec = RequestSpec::get("/agencyincidents/incidents/exposures").options(options);
        self.fetch(spec, "get exposures").await
    }

    // Exposure details

    pub async fn get_exposure_location(
        &self,
        exposure_id: &str,
    ) -> Result<GetExposureLocationResponse, ApiError> {
        let spec = RequestSpec::get(format!(
            "/agencyincidents/exposures/{}/location",
            segment(exposure_id)
        ));
        self.fetch(spec, "get the exposure location").await
    }

    pub async fn put_exposure_location(
        &self,
        exposure_id: &str,
        location: &ExposureLocation,
    ) -> Result<PutExposureLocationResponse, ApiError> {
        const OPERATION: &str = "put the exposure location";
        let spec = Self::json_spec(
            RequestSpec::put(format!(
                "/agencyincidents/exposures/{}/location",
                segment(exposure_id)
            ))
            .header(ETAG.as_str(), location.row_version.as_str()),
            location,
            OPERATION,
        )?;
        self.fetch(spec, OPERATION).await
    }

    pub async fn get_exposure_fire(
        &self,
        exposure_id: &str,
    ) -> Result<GetExposureFireResponse, ApiError> {
        let spec = RequestSpec::get(format!(
            "/agencyincidents/exposures/{}/fire",
            segment(exposure_id)
        ));
        self.fetch(spec, "get the exposure fire").await
    }

    pub async fn get_exposure_apparatuses(
        &self,
        exposure_id: &str,
    ) -> Result<GetExposureApparatusesResponse, ApiError> {
        let spec = RequestSpec::get(format!(
            "/agencyincidents/exposures/{}/apparatuses",
            segment(exposure_id)
        ));
        self.fetch(spec, "get exposure apparatuses").await
    }

    /// Adds an apparatus to the exposure, identified by its agency apparatus id.
    pub async fn post_exposure_apparatus(
        &self,
        exposure_id: &str,
        apparatus: &ExposureApparatus,
    ) -> Result<PostExposureApparatusResponse, ApiError> {
        const OPERATION: &str = "create the exposure apparatus";
        let spec = Self::json_spec(
            RequestSpec::post(format!(
                "/agencyincidents/exposures/{}/apparatuses",
                segment(exposure_id)
            ))
            .option("useAssociatedAgencyApparatusID", "1"),
            apparatus,
            OPERATION,
        )?;
        self.fetch(spec, OPERATION).await
    }

    pub async fn get_exposure_narratives(
        &self,
        exposure_id: &str,
    ) -> Result<GetExposureNarrativesResponse, ApiError> {
        let spec = RequestSpec::get(format!(
            "/agencyincidents/exposures/{}/narratives",
            segment(exposure_id)
        ));
        self.fetch(spec, "get exposure narratives").await
    }

    // Crew members

    pub async fn get_exposure_member(
        &self,
        exposure_id: &str,
        exposure_user_id: &str,
    ) -> Result<GetExposureMemberResponse, ApiError> {
        let spec = RequestSpec::get(format!(
            "/agencyincidents/exposures/{}/crewmembers/{}",
            segment(exposure_id),
            segment(exposure_user_id)
        ));
        self.fetch(spec, "get the exposure member").await
    }

    pub async fn get_exposure_members(
        &self,
        exposure_id: &str,
        options: &Options,
    ) -> Result<GetExposureMembersResponse, ApiError> {
        let spec = RequestSpec::get(format!(
            "/agencyincidents/exposures/{}/crewmembers",
            segment(exposure_id)
        ))
        .options(options);
        self.fetch(spec, "get exposure members").await
    }

    pub async fn get_exposure_member_roles(
        &self,
        exposure_user_id: &str,
        options: &Options,
    ) -> Result<GetExposureMemberRolesResponse, ApiError> {
        let spec = RequestSpec::get(format!(
            "/agencyincidents/crewmembers/{}/roles",
            segment(exposure_user_id)
        ))
        .options(options);
        self.fetch(spec, "get exposure member roles").await
    }

    // Users

    pub async fn get_users(&self, options: &Options) -> Result<GetUsersResponse, ApiError> {
        let spec = RequestSpec::get("/agencyusers/users").options(options);
        self.fetch(spec, "get users").await
    }

    pub async fn get_user(&self, user_id: &str) -> Result<GetUserResponse, ApiError> {
        let spec = RequestSpec::get(format!("/agencyusers/users/{}", segment(user_id)));
        self.fetch(spec, "get the user").await
    }

    pub async fn get_current_user(&self) -> Result<GetCurrentUserResponse, ApiError> {
        self.fetch(RequestSpec::get("/agencyusers/users/me"), "get the current user")
            .await
    }

    pub async fn get_user_contact_info(
        &self,
        user_id: &str,
    ) -> Result<GetUserContactInfoResponse, ApiError> {
        let spec = RequestSpec::get(format!(
            "/agencyusers/users/{}/contactinfo",
            segment(user_id)
        ));
        self.fetch(spec, "get the user contact info").await
    }

    pub async fn patch_user(
        &self,
        user_id: &str,
        row_version: &str,
        patch: &[PatchOperation],
    ) -> Result<PatchUserResponse, ApiError> {
        const OPERATION: &str = "patch the user";
        let spec = Self::json_spec(
            RequestSpec::patch(format!("/agencyusers/users/{}", segment(user_id)))
                .header(ETAG.as_str(), row_version),
            patch,
            OPERATION,
        )?;
        self.fetch(spec, OPERATION).await
    }

    // Apparatus

    pub async fn get_apparatus(
        &self,
        department_apparatus_id: &str,
    ) -> Result<GetApparatusResponse, ApiError> {
        let spec = RequestSpec::get(format!(
            "/agencyapparatus/apparatus/{}",
            segment(department_apparatus_id)
        ));
        self.fetch(spec, "get the apparatus").await
    }

    pub async fn get_apparatuses(&self, options: &Options) -> Result<GetApparatusesResponse, ApiError> {
        let spec = RequestSpec::get("/agencyapparatus/apparatus").options(options);
        self.fetch(spec, "get apparatuses").await
    }

    // Passthrough

    /// Sends an arbitrary request and returns the response as a JSON document.
    ///
    /// An empty response body yields `Value::Null`.
    pub async fn raw_operation(
        &self,
        method: Method,
        target: &str,
        options: &Options,
        headers: &BTreeMap<String, String>,
        body: Option<Vec<u8>>,
    ) -> Result<Value, ApiError> {
        const OPERATION: &str = "perform the raw operation";
        let mut spec = RequestSpec::new(method, target).options(options);
        for (name, value) in headers {
            spec = spec.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            spec = spec.body(body);
        }

        let body = self
            .http
            .execute(spec)
            .await
            .map_err(|e| e.context(OPERATION))?;
        if body.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&body).map_err(|e| ApiError::from(e).context(OPERATION))
    }

    // Aggregates

    /// Fetches an incident with its exposures, and each exposure's location and apparatuses.
    ///
    /// An exposure without a location gets `None`; any other failure aborts the fetch.
    pub async fn get_incident_details(&self, incident_id: &str) -> Result<IncidentDetails, ApiError> {
        const OPERATION: &str = "get the incident details";

        let incident = self
            .get_incident(incident_id)
            .await?
            .incident
            .ok_or_else(|| ApiError::NotFound.context(OPERATION))?;
        let exposures = self
            .get_incident_exposures(incident_id, &Options::new())
            .await?
            .exposures;

        let mut details = Vec::with_capacity(exposures.len());
        for exposure in exposures {
            debug!("Fetching details of exposure {}", exposure.exposure_id);
            let location = match self.get_exposure_location(&exposure.exposure_id).await {
                Ok(response) => response.location,
                Err(e) if e.is_not_found() || e.status() == Some(404) => None,
                Err(e) => return Err(e),
            };
            let apparatuses = self
                .get_exposure_apparatuses(&exposure.exposure_id)
                .await?
                .apparatuses;

            details.push(ExposureDetails {
                exposure,
                location,
                apparatuses,
            });
        }

        Ok(IncidentDetails {
            incident,
            exposures: details,
        })
    }
}
