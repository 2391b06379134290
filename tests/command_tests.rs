//! End-to-end tests of the `ercli` binary against a mock Emergency Reporting API.
//!
//! Every test writes a configuration with a preset token, so no login flow runs, and
//! points the data host at a wiremock server.

#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use wiremock::matchers::{
        body_json, header, method, path, query_param, query_param_is_missing,
    };
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn write_configuration(dir: &TempDir, server: &MockServer) -> PathBuf {
        let path = dir.path().join("config.json");
        let configuration = json!({
            "username": "pat",
            "password": "secret",
            "client_id": "cid",
            "client_secret": "csecret",
            "token": "preset-token",
            "host": server.uri(),
            "subscription_key": "sub"
        });
        std::fs::write(&path, configuration.to_string()).unwrap();
        path
    }

    fn ercli(config: &PathBuf) -> Command {
        let mut cmd = Command::cargo_bin("ercli").unwrap();
        cmd.env_remove("ERCLI_CONFIG")
            .env_remove("ERCLI_FORMAT")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(config);
        cmd
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_station_list_prints_stations() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/agencystations/stations"))
            .and(header("Authorization", "preset-token"))
            .and(header("Ocp-Apim-Subscription-Key", "sub"))
            .and(query_param("filter", "stationNumber eq 2"))
            .and(query_param("limit", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "totalRows": "1",
                "stations": [{"stationID": "10", "stationName": "Central"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = write_configuration(&dir, &server);

        ercli(&config)
            .args(["station", "list", "stationNumber eq 2"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"stationID\":\"10\""))
            .stdout(predicate::str::contains("Central"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_station_get_without_match() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/agencystations/stations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"stations": []})))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = write_configuration(&dir, &server);

        ercli(&config)
            .args(["station", "get", "stationNumber eq 99"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Station not found."));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_exposure_member_list_sends_only_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/agencyincidents/exposures/7/crewmembers"))
            .and(query_param("limit", "100"))
            .and(query_param_is_missing("filter"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "crewMembers": [{"exposureUserID": "3", "userID": "42"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = write_configuration(&dir, &server);

        ercli(&config)
            .args(["exposure-member", "list", "7"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"exposureUserID\":\"3\""));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_user_list_as_csv() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/agencyusers/users"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "users": [{"userID": "42", "login": "pat", "fullName": "Pat Smith"}]
            })))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = write_configuration(&dir, &server);

        ercli(&config)
            .args(["user", "list", "--limit", "5", "-f", "csv", "--headers"])
            .assert()
            .success()
            .stdout(predicate::str::contains("USER_ID,LOGIN,FULL_NAME"))
            .stdout(predicate::str::contains("42,pat,Pat Smith"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_missing_incident_exits_with_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/agencyincidents/incidents/404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = write_configuration(&dir, &server);

        ercli(&config)
            .args(["incident", "get", "404"])
            .assert()
            .code(67)
            .stderr(predicate::str::contains("could not get the incident: not found"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_duplicate_incident_exits_with_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/agencyincidents/incidents"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "errors": [{"type": "Duplicate", "message": "incident exists"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = write_configuration(&dir, &server);

        ercli(&config)
            .args(["incident", "create", r#"{"stationID":"7","dispatchRunNumber":"1234"}"#])
            .assert()
            .code(102)
            .stderr(predicate::str::contains("Duplicate"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_user_patch_uses_current_row_version() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/agencyusers/users/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": {"userID": "42", "rowVersion": "5"}
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/agencyusers/users/42"))
            .and(header("ETag", "5"))
            .and(body_json(json!([
                {"op": "replace", "path": "/primaryEmail", "value": "x@example.com"}
            ])))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rowVersion": "6"})))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = write_configuration(&dir, &server);

        ercli(&config)
            .args(["user", "patch", "42", "replace", "/primaryEmail", "x@example.com"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"rowVersion\":\"6\""));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_raw_get_passes_parameters_and_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/agencyapparatus/apparatus"))
            .and(query_param("filter", "archive eq 0"))
            .and(header("X-Trace", "abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"apparatus": []})))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = write_configuration(&dir, &server);

        ercli(&config)
            .args([
                "raw",
                "get",
                "/agencyapparatus/apparatus",
                "--parameter",
                "filter=archive eq 0",
                "--header",
                "X-Trace: abc",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("{\"apparatus\":[]}"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_login_prints_preset_token() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let config = write_configuration(&dir, &server);

        ercli(&config)
            .arg("login")
            .assert()
            .success()
            .stdout(predicate::str::diff("preset-token\n"));
        ercli(&config)
            .args(["login", "--token", "other-token"])
            .assert()
            .success()
            .stdout(predicate::str::diff("other-token\n"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_config_show_masks_secrets() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let config = write_configuration(&dir, &server);

        ercli(&config)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"username\":\"pat\""))
            .stdout(predicate::str::contains("\"secret\"").not())
            .stdout(predicate::str::contains("csecret").not())
            .stdout(predicate::str::contains("preset-token").not());
    }

    #[test]
    fn test_missing_configuration_exits_with_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("absent.json");

        ercli(&config)
            .args(["station", "list"])
            .assert()
            .code(78)
            .stderr(predicate::str::contains("Configuration error"));
    }

    #[test]
    fn test_configuration_without_subscription_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.yml");
        std::fs::write(&config, "username: pat\ntoken: t\n").unwrap();

        ercli(&config)
            .args(["user", "me"])
            .assert()
            .code(78)
            .stderr(predicate::str::contains("subscription_key"));
    }
}
