//! Wire types for the Emergency Reporting API.
//!
//! Field names follow the vendor's JSON exactly. Nullable vendor fields are `Option`s that
//! serialize as `null`; identifiers that the vendor assigns on creation are skipped when
//! empty so that the same struct can be posted back.
//!
//! A few payloads are not modelled yet and are carried as [`JsonDocument`]s. Those are
//! deliberately partial: only what the API has been observed to return is typed.

use crate::format::CsvRecordProducer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A loosely-typed JSON object for payloads without a known schema.
pub type JsonDocument = serde_json::Map<String, Value>;

fn is_empty(value: &str) -> bool {
    value.is_empty()
}

/// Reads an explicit `null` as the field's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------------------
// Errors and tokens
// ---------------------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorDetail {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub error_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
}

/// The documented error envelope: `{"errors": [{"type": ..., "message": ...}]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<ErrorDetail>,
}

/// The envelope some endpoints send instead: `{"errors": {"type": ..., "message": ...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SingleErrorResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: ErrorDetail,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyTokenResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub access_token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub expires_in: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub token_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub scope: String,
    #[serde(deserialize_with = "null_as_default")]
    pub refresh_token: String,
}

/// Token response of the 2020 tenant flow, where `expires_in` is a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenantTokenResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub access_token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub expires_in: String,
    #[serde(deserialize_with = "null_as_default")]
    pub token_type: String,
}

// ---------------------------------------------------------------------------------------
// Stations
// ---------------------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Station {
    #[serde(rename = "rowNum")]
    pub row_num: String,
    #[serde(rename = "stationID")]
    pub station_id: String,
    #[serde(rename = "stationNumber")]
    pub station_number: String,
    #[serde(rename = "stationName")]
    pub station_name: String,
    #[serde(rename = "createDate")]
    pub create_date: String,
    #[serde(rename = "streetNumber")]
    pub street_number: String,
    #[serde(rename = "streetPrefix")]
    pub street_prefix: Option<String>,
    pub address: String,
    #[serde(rename = "streetType")]
    pub street_type: String,
    #[serde(rename = "streetSuffix")]
    pub street_suffix: Option<String>,
    pub city: String,
    pub state: String,
    #[serde(rename = "zip")]
    pub zip_code: String,
    pub latitude: String,
    pub longitude: String,
    pub manned: String,
    pub phone: String,
    #[serde(rename = "phoneType")]
    pub phone_type: Option<String>,
    #[serde(rename = "secondaryPhone")]
    pub secondary_phone: Option<String>,
    #[serde(rename = "secondaryPhoneType")]
    pub secondary_phone_type: Option<String>,
    #[serde(rename = "zoneID")]
    pub zone_id: Option<String>,
    #[serde(rename = "zoneCode")]
    pub zone_code: Option<String>,
    #[serde(rename = "rowVersion")]
    pub row_version: String,
    #[serde(rename = "nemsis3LocationType")]
    pub nemsis3_location_type: Option<String>,
    #[serde(rename = "nationalGridCoordinates")]
    pub national_grid_coordinates: Option<String>,
    pub country: String,
    #[serde(rename = "freeFormAddress")]
    pub free_form_address: Option<String>,
    #[serde(rename = "addressEntryFormat")]
    pub address_entry_format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetStationsResponse {
    #[serde(rename = "totalRows")]
    pub total_rows: String,
    pub stations: Vec<Station>,
}

impl CsvRecordProducer for Station {
    fn csv_header() -> Vec<String> {
        ["STATION_ID", "STATION_NUMBER", "STATION_NAME", "ADDRESS", "CITY", "STATE", "ZIP"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn as_csv_records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.station_id.clone(),
            self.station_number.clone(),
            self.station_name.clone(),
            format!("{} {}", self.street_number, self.address).trim().to_string(),
            self.city.clone(),
            self.state.clone(),
            self.zip_code.clone(),
        ]]
    }
}

// ---------------------------------------------------------------------------------------
// Incidents
// ---------------------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Incident {
    #[serde(rename = "stationID")]
    pub station_id: String,
    pub state: String,
    #[serde(rename = "incidentDateTime")]
    pub incident_date_time: String,
    pub fdid: String,
    #[serde(rename = "incidentNumber")]
    pub incident_number: String,
    #[serde(rename = "partnerIncidentNumber")]
    pub partner_incident_number: String,
    #[serde(rename = "dispatchRunNumber")]
    pub dispatch_run_number: String,
    #[serde(rename = "isComplete")]
    pub is_complete: String,
    #[serde(rename = "isReviewed")]
    pub is_reviewed: String,
    /// Assigned by the vendor; left empty when creating.
    #[serde(rename = "incidentID", skip_serializing_if = "is_empty")]
    pub incident_id: String,
    /// Assigned by the vendor; left empty when creating.
    #[serde(rename = "rowVersion", skip_serializing_if = "is_empty")]
    pub row_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetIncidentsResponse {
    pub incidents: Vec<Incident>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetIncidentResponse {
    pub incident: Option<Incident>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostIncidentResponse {
    #[serde(rename = "incidentID")]
    pub incident_id: String,
}

impl CsvRecordProducer for Incident {
    fn csv_header() -> Vec<String> {
        [
            "INCIDENT_ID",
            "INCIDENT_NUMBER",
            "DISPATCH_RUN_NUMBER",
            "INCIDENT_DATE_TIME",
            "STATION_ID",
            "IS_COMPLETE",
            "IS_REVIEWED",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn as_csv_records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.incident_id.clone(),
            self.incident_number.clone(),
            self.dispatch_run_number.clone(),
            self.incident_date_time.clone(),
            self.station_id.clone(),
            self.is_complete.clone(),
            self.is_reviewed.clone(),
        ]]
    }
}

// ---------------------------------------------------------------------------------------
// Exposures
// ---------------------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exposure {
    #[serde(rename = "shiftsOrPlatoon")]
    pub shifts_or_platoon: String,
    #[serde(rename = "incidentType")]
    pub incident_type: String,
    #[serde(rename = "assignedToUserID")]
    pub assigned_to_user_id: String,
    #[serde(rename = "aidGivenOrReceived")]
    pub aid_given_or_received: String,
    #[serde(rename = "hazmatReleased")]
    pub hazmat_released: String,
    #[serde(rename = "primaryActionTaken")]
    pub primary_action_taken: String,
    #[serde(rename = "secondaryActionTaken")]
    pub secondary_action_taken: String,
    #[serde(rename = "thirdActionTaken")]
    pub third_action_taken: String,
    #[serde(rename = "completedByUserID")]
    pub completed_by_user_id: String,
    #[serde(rename = "reviewedByUserID")]
    pub reviewed_by_user_id: String,
    #[serde(rename = "completedDateTime")]
    pub completed_date_time: String,
    #[serde(rename = "reviewedDateTime")]
    pub reviewed_date_time: String,
    #[serde(rename = "psapDateTime")]
    pub psap_date_time: String,
    #[serde(rename = "dispatchNotifiedDateTime")]
    pub dispatch_notified_date_time: String,
    #[serde(rename = "initialResponderDateTime")]
    pub initial_responder_date_time: String,
    #[serde(rename = "hasPropertyLoss")]
    pub has_property_loss: String,
    #[serde(rename = "propertyLossAmount")]
    pub property_loss_amount: String,
    #[serde(rename = "hasContentLoss")]
    pub has_content_loss: String,
    #[serde(rename = "contentLossAmount")]
    pub content_loss_amount: String,
    #[serde(rename = "hasPreIncidentPropertyValue")]
    pub has_pre_incident_property_value: String,
    #[serde(rename = "preIncidentPropertyValueAmount")]
    pub pre_incident_property_value_amount: String,
    #[serde(rename = "hasPreIncidentContentsValue")]
    pub has_pre_incident_contents_value: String,
    #[serde(rename = "preIncidentContentsValueAmount")]
    pub pre_incident_contents_value_amount: String,
    #[serde(rename = "complaintReportedByDispatch")]
    pub complaint_reported_by_dispatch: String,
    #[serde(rename = "exposureID", skip_serializing_if = "is_empty")]
    pub exposure_id: String,
    #[serde(rename = "incidentID", skip_serializing_if = "is_empty")]
    pub incident_id: String,
    #[serde(rename = "rowVersion", skip_serializing_if = "is_empty")]
    pub row_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetExposuresResponse {
    pub exposures: Vec<Exposure>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetExposureResponse {
    pub exposure: Option<Exposure>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostExposureResponse {
    #[serde(rename = "exposureID")]
    pub exposure_id: String,
}

/// Partial update of an exposure; only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchExposureRequest {
    #[serde(rename = "shiftsOrPlatoon", skip_serializing_if = "Option::is_none")]
    pub shifts_or_platoon: Option<String>,
    #[serde(rename = "incidentType", skip_serializing_if = "Option::is_none")]
    pub incident_type: Option<String>,
    #[serde(rename = "assignedToUserID", skip_serializing_if = "Option::is_none")]
    pub assigned_to_user_id: Option<String>,
    #[serde(rename = "aidGivenOrReceived", skip_serializing_if = "Option::is_none")]
    pub aid_given_or_received: Option<String>,
    #[serde(rename = "hazmatReleased", skip_serializing_if = "Option::is_none")]
    pub hazmat_released: Option<String>,
    #[serde(rename = "primaryActionTaken", skip_serializing_if = "Option::is_none")]
    pub primary_action_taken: Option<String>,
    #[serde(rename = "secondaryActionTaken", skip_serializing_if = "Option::is_none")]
    pub secondary_action_taken: Option<String>,
    #[serde(rename = "thirdActionTaken", skip_serializing_if = "Option::is_none")]
    pub third_action_taken: Option<String>,
    #[serde(rename = "completedByUserID", skip_serializing_if = "Option::is_none")]
    pub completed_by_user_id: Option<String>,
    #[serde(rename = "reviewedByUserID", skip_serializing_if = "Option::is_none")]
    pub reviewed_by_user_id: Option<String>,
    #[serde(rename = "completedDateTime", skip_serializing_if = "Option::is_none")]
    pub completed_date_time: Option<String>,
    #[serde(rename = "reviewedDateTime", skip_serializing_if = "Option::is_none")]
    pub reviewed_date_time: Option<String>,
    #[serde(rename = "psapDateTime", skip_serializing_if = "Option::is_none")]
    pub psap_date_time: Option<String>,
    #[serde(rename = "dispatchNotifiedDateTime", skip_serializing_if = "Option::is_none")]
    pub dispatch_notified_date_time: Option<String>,
    #[serde(rename = "initialResponderDateTime", skip_serializing_if = "Option::is_none")]
    pub initial_responder_date_time: Option<String>,
    #[serde(rename = "hasPropertyLoss", skip_serializing_if = "Option::is_none")]
    pub has_property_loss: Option<String>,
    #[serde(rename = "propertyLossAmount", skip_serializing_if = "Option::is_none")]
    pub property_loss_amount: Option<String>,
    #[serde(rename = "hasContentLoss", skip_serializing_if = "Option::is_none")]
    pub has_content_loss: Option<String>,
    #[serde(rename = "contentLossAmount", skip_serializing_if = "Option::is_none")]
    pub content_loss_amount: Option<String>,
    #[serde(rename = "hasPreIncidentPropertyValue", skip_serializing_if = "Option::is_none")]
    pub has_pre_incident_property_value: Option<String>,
    #[serde(rename = "preIncidentPropertyValueAmount", skip_serializing_if = "Option::is_none")]
    pub pre_incident_property_value_amount: Option<String>,
    #[serde(rename = "hasPreIncidentContentsValue", skip_serializing_if = "Option::is_none")]
    pub has_pre_incident_contents_value: Option<String>,
    #[serde(rename = "preIncidentContentsValueAmount", skip_serializing_if = "Option::is_none")]
    pub pre_incident_contents_value_amount: Option<String>,
    #[serde(rename = "complaintReportedByDispatch", skip_serializing_if = "Option::is_none")]
    pub complaint_reported_by_dispatch: Option<String>,
}

/// Response of every PATCH/PUT: the entity's new row version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowVersionResponse {
    #[serde(rename = "rowVersion")]
    pub row_version: String,
}

pub type PatchExposureResponse = RowVersionResponse;
pub type PutExposureLocationResponse = RowVersionResponse;
pub type PatchUserResponse = RowVersionResponse;

impl CsvRecordProducer for Exposure {
    fn csv_header() -> Vec<String> {
        [
            "EXPOSURE_ID",
            "INCIDENT_ID",
            "INCIDENT_TYPE",
            "SHIFTS_OR_PLATOON",
            "PRIMARY_ACTION_TAKEN",
            "ASSIGNED_TO_USER_ID",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn as_csv_records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.exposure_id.clone(),
            self.incident_id.clone(),
            self.incident_type.clone(),
            self.shifts_or_platoon.clone(),
            self.primary_action_taken.clone(),
            self.assigned_to_user_id.clone(),
        ]]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposureLocation {
    /// "1" is a street address.
    #[serde(rename = "locationType")]
    pub location_type: String,
    #[serde(rename = "milePostNumber")]
    pub mile_post_number: String,
    #[serde(rename = "streetPrefix")]
    pub street_prefix: String,
    #[serde(rename = "streetName")]
    pub street_name: String,
    #[serde(rename = "streetType")]
    pub street_type: String,
    #[serde(rename = "streetSuffix")]
    pub street_suffix: String,
    #[serde(rename = "aptOrSuiteNumber")]
    pub apt_or_suite_number: String,
    pub city: String,
    #[serde(rename = "cityCode")]
    pub city_code: String,
    pub state: String,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    #[serde(rename = "countyCode")]
    pub county_code: String,
    pub latitude: String,
    pub longitude: String,
    #[serde(rename = "crossStreetOrDirections")]
    pub cross_street_or_directions: String,
    #[serde(rename = "zoneID")]
    pub zone_id: Option<String>,
    #[serde(rename = "populationDensity")]
    pub population_density: String,
    /// Three-digit NFIRS property use code.
    #[serde(rename = "propertyUse")]
    pub property_use: String,
    #[serde(rename = "nemsisPropertyClassification")]
    pub nemsis_property_classification: String,
    #[serde(rename = "exposureID", skip_serializing_if = "is_empty")]
    pub exposure_id: String,
    #[serde(rename = "rowVersion", skip_serializing_if = "is_empty")]
    pub row_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetExposureLocationResponse {
    #[serde(rename = "exposureLocation")]
    pub location: Option<ExposureLocation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposureFire {
    #[serde(rename = "causeOfIgnition")]
    pub cause_of_ignition: Option<String>,
    #[serde(rename = "numberOfResidentialUnits")]
    pub number_of_residential_units: Option<String>,
    #[serde(rename = "numberOfBuildingsInvolved")]
    pub number_of_buildings_involved: Option<String>,
    #[serde(rename = "acresBurned")]
    pub acres_burned: Option<String>,
    #[serde(rename = "residentialUnitsPresent")]
    pub residential_units_present: String,
    #[serde(rename = "buildingsInvolved")]
    pub buildings_involved: String,
    #[serde(rename = "lessThanOneAcreBurned")]
    pub less_than_one_acre_burned: Option<String>,
    #[serde(rename = "onSiteMaterialsPresent")]
    pub on_site_materials_present: String,
    #[serde(rename = "primaryOnSiteMaterial")]
    pub primary_on_site_material: Option<String>,
    #[serde(rename = "primaryOnSiteMaterialStorageType")]
    pub primary_on_site_material_storage_type: Option<String>,
    #[serde(rename = "secondaryOnSiteMaterial")]
    pub secondary_on_site_material: Option<String>,
    #[serde(rename = "secondaryOnSiteMaterialStorageType")]
    pub secondary_on_site_material_storage_type: Option<String>,
    #[serde(rename = "thirdOnSiteMaterial")]
    pub third_on_site_material: Option<String>,
    #[serde(rename = "thirdOnSiteMaterialStorageType")]
    pub third_on_site_material_storage_type: Option<String>,
    #[serde(rename = "areaOfFireOrigin")]
    pub area_of_fire_origin: Option<String>,
    #[serde(rename = "heatSource")]
    pub heat_source: Option<String>,
    #[serde(rename = "itemFirstIgnited")]
    pub item_first_ignited: Option<String>,
    #[serde(rename = "confinedToObjectOfOrigin")]
    pub confined_to_object_of_origin: Option<String>,
    #[serde(rename = "primaryContributingFactor")]
    pub primary_contributing_factor: Option<String>,
    #[serde(rename = "secondaryContributingFactor")]
    pub secondary_contributing_factor: Option<String>,
    #[serde(rename = "noContributingHumanFactors")]
    pub no_contributing_human_factors: Option<String>,
    #[serde(rename = "possibleAlcoholOrDrugImpairment")]
    pub possible_alcohol_or_drug_impairment: Option<String>,
    #[serde(rename = "mentalDisabilityPresent")]
    pub mental_disability_present: Option<String>,
    #[serde(rename = "ageWasAFactor")]
    pub age_was_a_factor: Option<String>,
    #[serde(rename = "estimatedAgeOfPersonInvolved")]
    pub estimated_age_of_person_involved: Option<String>,
    #[serde(rename = "genderOfPersonInvolved")]
    pub gender_of_person_involved: Option<String>,
    #[serde(rename = "personInvolvedWasAsleep")]
    pub person_involved_was_asleep: Option<String>,
    #[serde(rename = "unattendedPerson")]
    pub unattended_person: Option<String>,
    #[serde(rename = "physicalDisabilityPresent")]
    pub physical_disability_present: Option<String>,
    #[serde(rename = "multiplePersonsInvolved")]
    pub multiple_persons_involved: Option<String>,
    #[serde(rename = "exposureID")]
    pub exposure_id: String,
    #[serde(rename = "rowVersion")]
    pub row_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetExposureFireResponse {
    #[serde(rename = "exposureFire")]
    pub exposure_fire: ExposureFire,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposureApparatus {
    #[serde(rename = "apparatusID")]
    pub apparatus_id: String,
    #[serde(rename = "alarmDateTime")]
    pub alarm_date_time: String,
    #[serde(rename = "enrouteDateTime")]
    pub enroute_date_time: Option<String>,
    #[serde(rename = "arrivedDateTime")]
    pub arrived_date_time: Option<String>,
    #[serde(rename = "injuryOrOnsetDateTime")]
    pub injury_or_onset_date_time: Option<String>,
    #[serde(rename = "inQuartersDateTime")]
    pub in_quarters_date_time: Option<String>,
    #[serde(rename = "callCompletedDateTime")]
    pub call_completed_date_time: Option<String>,
    #[serde(rename = "dispatchToSceneMileage")]
    pub dispatch_to_scene_mileage: Option<String>,
    #[serde(rename = "responseModeToScene")]
    pub response_mode_to_scene: String,
    #[serde(rename = "dispatchDepartmentLocationID")]
    pub dispatch_department_location_id: Option<String>,
    #[serde(rename = "incidentID")]
    pub incident_id: String,
    #[serde(rename = "exposureID")]
    pub exposure_id: String,
    #[serde(rename = "transferOfPatientCareDateTime")]
    pub transfer_of_patient_care_date_time: Option<String>,
    #[serde(rename = "dispatchNationalGridCoordinates")]
    pub dispatch_national_grid_coordinates: String,
    #[serde(rename = "wasCancelled")]
    pub was_cancelled: String,
    #[serde(rename = "responseModeNemsis3")]
    pub response_mode_nemsis3: String,
    #[serde(rename = "dispatchAcknowledgedDateTime")]
    pub dispatch_acknowledged_date_time: Option<String>,
    #[serde(rename = "atDestinationDateTime")]
    pub at_destination_date_time: Option<String>,
    #[serde(rename = "cancelledDateTime")]
    pub cancelled_date_time: Option<String>,
    #[serde(rename = "clearedSceneDateTime")]
    pub cleared_scene_date_time: Option<String>,
    #[serde(rename = "arrivedAtLandingZoneDateTime")]
    pub arrived_at_landing_zone_date_time: Option<String>,
    #[serde(rename = "clearedDestinationDateTime")]
    pub cleared_destination_date_time: Option<String>,
    #[serde(rename = "agencyApparatusID")]
    pub agency_apparatus_id: String,
    #[serde(rename = "departmentApparatusID")]
    pub department_apparatus_id: String,
    #[serde(rename = "dispatchDateTime")]
    pub dispatch_date_time: String,
    #[serde(rename = "arrivedAtPatientDateTime")]
    pub arrived_at_patient_date_time: Option<String>,
    #[serde(rename = "dispatchLatitude")]
    pub dispatch_latitude: Option<String>,
    #[serde(rename = "rowVersion")]
    pub row_version: String,
    #[serde(rename = "apparatusTypeID")]
    pub apparatus_type_id: String,
    #[serde(rename = "apparatusUseID")]
    pub apparatus_use_id: String,
    #[serde(rename = "inServiceDateTime")]
    pub in_service_date_time: Option<String>,
    #[serde(rename = "dispatchLongitude")]
    pub dispatch_longitude: Option<String>,
    #[serde(rename = "dispatchZoneID")]
    pub dispatch_zone_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetExposureApparatusesResponse {
    #[serde(rename = "exposureApparatuses")]
    pub apparatuses: Vec<ExposureApparatus>,
}

/// The shape of this response has not been pinned down.
pub type PostExposureApparatusResponse = JsonDocument;

/// Narratives are carried untyped.
pub type ExposureNarrative = JsonDocument;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetExposureNarrativesResponse {
    #[serde(rename = "exposureNarrative")]
    pub narratives: Vec<ExposureNarrative>,
}

// ---------------------------------------------------------------------------------------
// Crew members
// ---------------------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrewMember {
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "apparatusID")]
    pub apparatus_id: String,
    #[serde(rename = "exposureID")]
    pub exposure_id: String,
    #[serde(rename = "exposureUserID")]
    pub exposure_user_id: String,
    #[serde(rename = "rowVersion")]
    pub row_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetExposureMembersResponse {
    #[serde(rename = "crewMembers")]
    pub crew_members: Vec<CrewMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetExposureMemberResponse {
    #[serde(rename = "crewMember")]
    pub crew_member: Option<CrewMember>,
}

impl CsvRecordProducer for CrewMember {
    fn csv_header() -> Vec<String> {
        ["EXPOSURE_USER_ID", "USER_ID", "APPARATUS_ID", "EXPOSURE_ID"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn as_csv_records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.exposure_user_id.clone(),
            self.user_id.clone(),
            self.apparatus_id.clone(),
            self.exposure_id.clone(),
        ]]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrewMemberRole {
    #[serde(rename = "exposureUserRoleID")]
    pub exposure_user_role_id: String,
    #[serde(rename = "exposureID")]
    pub exposure_id: String,
    #[serde(rename = "nfirsCode")]
    pub nfirs_code: String,
    #[serde(rename = "rowVersion")]
    pub row_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetExposureMemberRolesResponse {
    pub roles: Vec<CrewMemberRole>,
}

impl CsvRecordProducer for CrewMemberRole {
    fn csv_header() -> Vec<String> {
        ["EXPOSURE_USER_ROLE_ID", "EXPOSURE_ID", "NFIRS_CODE"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn as_csv_records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.exposure_user_role_id.clone(),
            self.exposure_id.clone(),
            self.nfirs_code.clone(),
        ]]
    }
}

// ---------------------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// 1-based position of the entry in a list response.
    #[serde(rename = "rowNum", skip_serializing_if = "is_empty")]
    pub row_num: String,
    #[serde(rename = "agencyPersonnelID")]
    pub agency_personnel_id: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "roleName")]
    pub role_name: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    pub title: Option<String>,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub login: String,
    #[serde(rename = "Archive")]
    pub archive: String,
    #[serde(rename = "primaryEmail")]
    pub primary_email: String,
    #[serde(rename = "certificationStatus")]
    pub certification_status: String,
    #[serde(rename = "roleID")]
    pub role_id: String,
    #[serde(rename = "defaultEventPaygradeName")]
    pub default_event_paygrade_name: Option<String>,
    #[serde(rename = "defaultEventPaygradeRate")]
    pub default_event_paygrade_rate: Option<String>,
    pub station: Option<String>,
    pub shift: Option<String>,
    #[serde(rename = "rowVersion")]
    pub row_version: String,
    /// Untyped until the vendor documents the license shape.
    pub licenses: Vec<Value>,
}

/// The special user `me`: a [`User`] plus account and access-level details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentUser {
    #[serde(flatten)]
    pub user: User,
    #[serde(rename = "accountID")]
    pub account_id: String,
    #[serde(rename = "myProfileAccessLevel")]
    pub my_profile_access_level: String,
    #[serde(rename = "cacRequired")]
    pub cac_required: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "fireMarshalAccessLevel")]
    pub fire_marshal_access_level: String,
    pub permissions: BTreeMap<String, String>,
    #[serde(rename = "adminAccessLevel")]
    pub admin_access_level: String,
    #[serde(rename = "analyticsAccessLevel")]
    pub analytics_access_level: String,
    #[serde(rename = "calendarAccessLevel")]
    pub calendar_access_level: String,
    #[serde(rename = "daybookAccessLevel")]
    pub daybook_access_level: String,
    #[serde(rename = "demographicsAccessLevel")]
    pub demographics_access_level: String,
    #[serde(rename = "eventsAccessLevel")]
    pub events_access_level: String,
    #[serde(rename = "hydrantsAccessLevel")]
    pub hydrants_access_level: String,
    #[serde(rename = "inventoryAccessLevel")]
    pub inventory_access_level: String,
    #[serde(rename = "invoicingAccessLevel")]
    pub invoicing_access_level: String,
    #[serde(rename = "libraryAccessLevel")]
    pub library_access_level: String,
    #[serde(rename = "maintenanceAccessLevel")]
    pub maintenance_access_level: String,
    #[serde(rename = "messageAccessLevel")]
    pub message_access_level: String,
    #[serde(rename = "nfirsAccessLevel")]
    pub nfirs_access_level: String,
    #[serde(rename = "nhtsaAccessLevel")]
    pub nhtsa_access_level: String,
    #[serde(rename = "occupancyAccessLevel")]
    pub occupancy_access_level: String,
    #[serde(rename = "payrollAccessLevel")]
    pub payroll_access_level: String,
    #[serde(rename = "reportsAccessLevel")]
    pub reports_access_level: String,
    #[serde(rename = "rosterAccessLevel")]
    pub roster_access_level: String,
    #[serde(rename = "shiftAccessLevel")]
    pub shift_access_level: String,
    #[serde(rename = "trainingAccessLevel")]
    pub training_access_level: String,
    pub client_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetUsersResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetUserResponse {
    pub user: Option<User>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetCurrentUserResponse {
    pub user: Option<CurrentUser>,
}

/// Contact info is carried untyped.
pub type UserContactInfo = JsonDocument;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetUserContactInfoResponse {
    #[serde(rename = "contactInfo")]
    pub contact_info: UserContactInfo,
}

/// One JSON-Patch style operation, e.g. `{"op":"replace","path":"/primaryEmail","value":"x"}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchOperation {
    #[serde(rename = "op")]
    pub operation: String,
    pub path: String,
    pub value: String,
}

impl PatchOperation {
    pub fn new(operation: &str, path: &str, value: &str) -> Self {
        Self {
            operation: operation.to_string(),
            path: path.to_string(),
            value: value.to_string(),
        }
    }
}

pub type PatchUserRequest = Vec<PatchOperation>;

impl CsvRecordProducer for User {
    fn csv_header() -> Vec<String> {
        ["USER_ID", "LOGIN", "FULL_NAME", "PRIMARY_EMAIL", "ROLE_NAME", "ARCHIVE"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn as_csv_records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.user_id.clone(),
            self.login.clone(),
            self.full_name.clone(),
            self.primary_email.clone(),
            self.role_name.clone(),
            self.archive.clone(),
        ]]
    }
}

// ---------------------------------------------------------------------------------------
// Apparatus
// ---------------------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Apparatus {
    #[serde(rename = "departmentApparatusID")]
    pub department_apparatus_id: String,
    #[serde(rename = "apparatusID")]
    pub apparatus_id: String,
    #[serde(rename = "yearOfManufacture")]
    pub year_of_manufacture: String,
    pub model: String,
    pub engine: String,
    #[serde(rename = "tankVolume")]
    pub tank_volume: String,
    #[serde(rename = "pumpManufacturer")]
    pub pump_manufacturer: String,
    pub notes: String,
    #[serde(rename = "apparatusStationID")]
    pub apparatus_station_id: String,
    #[serde(rename = "dateInService")]
    pub date_in_service: String,
    #[serde(rename = "apparatusType")]
    pub apparatus_type: String,
    #[serde(rename = "replaceDate")]
    pub replace_date: String,
    #[serde(rename = "primaryUse")]
    pub primary_use: String,
    #[serde(rename = "primaryUseName")]
    pub primary_use_name: String,
    #[serde(rename = "stationNumber")]
    pub station_number: String,
    #[serde(rename = "stationName")]
    pub station_name: String,
    #[serde(rename = "vehicleNumber")]
    pub vehicle_number: String,
    #[serde(rename = "vinNumber")]
    pub vin: String,
    #[serde(rename = "licensePlateNumber")]
    pub license_plate_number: String,
    #[serde(rename = "defaultPrimaryRoleOfUnit")]
    pub default_primary_role_of_unit: String,
    #[serde(rename = "defaultPrimaryRoleOfUnitName")]
    pub default_primary_role_of_unit_name: String,
    #[serde(rename = "defaultServiceLevelOfUnit")]
    pub default_service_level_of_unit: String,
    #[serde(rename = "defaultServiceLevelOfUnitName")]
    pub default_service_level_of_unit_name: String,
    #[serde(rename = "departmentApparatusName")]
    pub department_apparatus_name: String,
    #[serde(rename = "vehicleInitialCost")]
    pub vehicle_initial_cost: String,
    #[serde(rename = "nemsisVehicleType")]
    pub nemsis_vehicle_type: String,
    #[serde(rename = "nemsisVehicleTypeName")]
    pub nemsis_vehicle_type_name: Option<String>,
    pub archive: String,
    #[serde(rename = "emsUnitCallSign")]
    pub ems_unit_call_sign: String,
    #[serde(rename = "nemsis3VehicleType")]
    pub nemsis3_vehicle_type: String,
    #[serde(rename = "nemsis3VehicleTypeName")]
    pub nemsis3_vehicle_type_name: Option<String>,
    #[serde(rename = "apparatusOwnership")]
    pub apparatus_ownership: String,
    #[serde(rename = "nemsis3TransportMethod")]
    pub nemsis3_transport_method: String,
    #[serde(rename = "nemsis3TransportMethodName")]
    pub nemsis3_transport_method_name: String,
    #[serde(rename = "inService")]
    pub in_service: String,
    #[serde(rename = "nfpaCompliance")]
    pub nfpa_compliance: String,
    #[serde(rename = "recurrenceTypeID")]
    pub recurrence_type_id: String,
    #[serde(rename = "rowVersion")]
    pub row_version: String,
    #[serde(rename = "apparatusTypeName")]
    pub apparatus_type_name: String,
    pub manufacturer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetApparatusesResponse {
    #[serde(rename = "apparatus")]
    pub apparatuses: Vec<Apparatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetApparatusResponse {
    pub apparatus: Option<Apparatus>,
}

impl CsvRecordProducer for Apparatus {
    fn csv_header() -> Vec<String> {
        [
            "DEPARTMENT_APPARATUS_ID",
            "APPARATUS_ID",
            "NAME",
            "TYPE",
            "STATION_NUMBER",
            "IN_SERVICE",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn as_csv_records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.department_apparatus_id.clone(),
            self.apparatus_id.clone(),
            self.department_apparatus_name.clone(),
            self.apparatus_type_name.clone(),
            self.station_number.clone(),
            self.in_service.clone(),
        ]]
    }
}

// ---------------------------------------------------------------------------------------
// Aggregates assembled by the client
// ---------------------------------------------------------------------------------------

/// An exposure together with the records hanging off it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExposureDetails {
    #[serde(flatten)]
    pub exposure: Exposure,
    /// `None` when the exposure has no location record.
    pub location: Option<ExposureLocation>,
    pub apparatuses: Vec<ExposureApparatus>,
}

/// An incident with all of its exposures fetched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentDetails {
    #[serde(flatten)]
    pub incident: Incident,
    pub exposures: Vec<ExposureDetails>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_fields_read_as_defaults() {
        let detail: ErrorDetail =
            serde_json::from_str(r#"{"type":"Validation","message":null}"#).unwrap();
        assert_eq!(detail.error_type, "Validation");
        assert_eq!(detail.message, "");

        let single: SingleErrorResponse = serde_json::from_str(r#"{"errors":null}"#).unwrap();
        assert_eq!(single.errors, ErrorDetail::default());

        let token: LegacyTokenResponse = serde_json::from_str(
            r#"{"access_token":"abc","expires_in":3600,"token_type":"bearer","scope":null,"refresh_token":null}"#,
        )
        .unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.expires_in, 3600);
        assert_eq!(token.scope, "");
        assert_eq!(token.refresh_token, "");

        let tenant: TenantTokenResponse =
            serde_json::from_str(r#"{"access_token":"t","expires_in":null}"#).unwrap();
        assert_eq!(tenant.expires_in, "");
    }

    #[test]
    fn test_incident_create_omits_vendor_assigned_fields() {
        let incident = Incident {
            station_id: "7".to_string(),
            dispatch_run_number: "1234".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&incident).unwrap();
        assert_eq!(value["stationID"], "7");
        assert_eq!(value["dispatchRunNumber"], "1234");
        assert!(value.get("incidentID").is_none());
        assert!(value.get("rowVersion").is_none());
    }

    #[test]
    fn test_incident_fetch_preserves_created_fields() {
        let created = Incident {
            station_id: "7".to_string(),
            state: "OH".to_string(),
            incident_date_time: "2021-01-02 03:04:05".to_string(),
            fdid: "12345".to_string(),
            incident_number: "21-0001".to_string(),
            partner_incident_number: "P-1".to_string(),
            dispatch_run_number: "1234".to_string(),
            is_complete: "0".to_string(),
            is_reviewed: "0".to_string(),
            ..Default::default()
        };
        let mut returned = serde_json::to_value(&created).unwrap();
        returned["incidentID"] = json!("99");
        returned["rowVersion"] = json!("5");

        let fetched: Incident = serde_json::from_value(returned).unwrap();
        assert_eq!(fetched.incident_id, "99");
        assert_eq!(fetched.row_version, "5");
        assert_eq!(
            Incident {
                incident_id: String::new(),
                row_version: String::new(),
                ..fetched
            },
            created
        );
    }

    #[test]
    fn test_station_nullable_fields_serialize_as_null() {
        let station = Station::default();
        let value = serde_json::to_value(&station).unwrap();
        assert!(value["streetPrefix"].is_null());
        assert_eq!(value["zip"], "");
    }

    #[test]
    fn test_patch_exposure_request_only_sends_set_fields() {
        let request = PatchExposureRequest {
            incident_type: Some("111".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"incidentType": "111"})
        );
    }

    #[test]
    fn test_patch_user_request_shape() {
        let request: PatchUserRequest =
            vec![PatchOperation::new("replace", "/primaryEmail", "x@example.com")];
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!([{"op": "replace", "path": "/primaryEmail", "value": "x@example.com"}])
        );
    }

    #[test]
    fn test_current_user_flattens_user_fields() {
        let current: CurrentUser = serde_json::from_value(json!({
            "userID": "42",
            "fullName": "Pat Smith",
            "accountID": "1001",
            "permissions": {"incidents": "write"},
            "client_id": "abc"
        }))
        .unwrap();
        assert_eq!(current.user.user_id, "42");
        assert_eq!(current.user.full_name, "Pat Smith");
        assert_eq!(current.account_id, "1001");
        assert_eq!(current.permissions.get("incidents").map(String::as_str), Some("write"));
        assert_eq!(current.client_id, "abc");
    }

    #[test]
    fn test_contact_info_is_untyped() {
        let response: GetUserContactInfoResponse = serde_json::from_value(json!({
            "contactInfo": {"homePhone": "555-0100", "extra": {"nested": true}}
        }))
        .unwrap();
        assert_eq!(response.contact_info["homePhone"], "555-0100");
        assert_eq!(response.contact_info["extra"]["nested"], true);
    }
}
