//! Endpoint catalog tests against a wiremock server.
//!
//! Each test verifies the resource path, query parameters, and payload
//! extraction for one facade operation.

use dayforce_api::{Api, Client};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn session(server: &MockServer) -> Api {
    Client::new(server.uri(), "acme")
        .api("user", "pass")
        .expect("session should build")
}

#[tokio::test]
async fn get_employees_maps_xrefcodes_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Api/acme/v1/Employees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Data": [
                {"XRefCode": "A", "Name": "Alice"},
                {"XRefCode": "B", "Name": "Bob"},
                {"XRefCode": "C", "Name": "Carol"}
            ]
        })))
        .mount(&server)
        .await;

    let employees = session(&server).await.get_employees(&[]).await.unwrap();
    assert_eq!(employees, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn get_employees_forwards_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Api/acme/v1/Employees"))
        .and(query_param("employmentStatusXrefCode", "ACTIVE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let employees = session(&server)
        .await
        .get_employees(&[("employmentStatusXrefCode", "ACTIVE")])
        .await
        .unwrap();
    assert!(employees.is_empty());
}

#[tokio::test]
async fn requests_carry_basic_auth() {
    let server = MockServer::start().await;

    // base64("user:pass")
    Mock::given(method("GET"))
        .and(path("/Api/acme/v1/Employees/123"))
        .and(header("Authorization", "Basic dXNlcjpwYXNz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Data": {"XRefCode": "123"}})))
        .expect(1)
        .mount(&server)
        .await;

    let details = session(&server)
        .await
        .get_employee_details("123")
        .await
        .unwrap();
    assert_eq!(details["XRefCode"], "123");
}

#[tokio::test]
async fn get_employee_details_returns_data_unmodified() {
    let server = MockServer::start().await;

    let payload = json!({
        "XRefCode": "EMP-1",
        "FirstName": "Ada",
        "LastName": "Lovelace",
        "EmploymentStatuses": {"Items": []}
    });

    Mock::given(method("GET"))
        .and(path("/Api/acme/v1/Employees/EMP-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"Data": payload.clone(), "Paging": {}})),
        )
        .mount(&server)
        .await;

    let details = session(&server)
        .await
        .get_employee_details("EMP-1")
        .await
        .unwrap();
    assert_eq!(details, payload);
}

#[tokio::test]
async fn employee_subresource_paths() {
    let server = MockServer::start().await;
    let api = session(&server).await;

    for subpath in [
        "Addresses",
        "Contacts",
        "Availability",
        "CompensationSummary",
        "TimeAwayFromWork",
    ] {
        Mock::given(method("GET"))
            .and(path(format!("/Api/acme/v1/Employees/EMP-1/{subpath}")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"Data": [subpath]})),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    assert_eq!(
        api.get_employee_addresses("EMP-1").await.unwrap(),
        json!(["Addresses"])
    );
    assert_eq!(
        api.get_employee_contacts("EMP-1").await.unwrap(),
        json!(["Contacts"])
    );
    assert_eq!(
        api.get_employee_availability("EMP-1").await.unwrap(),
        json!(["Availability"])
    );
    assert_eq!(
        api.get_employee_compensation("EMP-1").await.unwrap(),
        json!(["CompensationSummary"])
    );
    assert_eq!(
        api.get_employee_time_away("EMP-1").await.unwrap(),
        json!(["TimeAwayFromWork"])
    );
}

#[tokio::test]
async fn schedule_dates_use_fixed_format() {
    use chrono::{FixedOffset, TimeZone};

    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Api/acme/v1/Employees/EMP-1/Schedules"))
        .and(query_param("filterScheduleStartDate", "2024-03-01T00:00:00"))
        .and(query_param("filterScheduleEndDate", "2024-03-31T23:59:59"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Data": []})))
        .expect(1)
        .mount(&server)
        .await;

    // An offset timezone must still format as plain wall-clock time.
    let tz = FixedOffset::west_opt(7 * 3600).unwrap();
    let start = tz.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let end = tz.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap();

    let schedules = session(&server)
        .await
        .get_employee_schedules("EMP-1", &start, &end)
        .await
        .unwrap();
    assert_eq!(schedules, json!([]));
}

#[tokio::test]
async fn report_metadata_selects_collection_path_without_identifier() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Api/acme/v1/ReportMetadata"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"Data": [{"XRefCode": "R1"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let reports = session(&server)
        .await
        .get_report_metadata(None)
        .await
        .unwrap();
    assert_eq!(reports[0]["XRefCode"], "R1");
}

#[tokio::test]
async fn report_metadata_selects_resource_path_with_identifier() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Api/acme/v1/ReportMetadata/R1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"Data": {"XRefCode": "R1"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let report = session(&server)
        .await
        .get_report_metadata(Some("R1"))
        .await
        .unwrap();
    assert_eq!(report["XRefCode"], "R1");
}

#[tokio::test]
async fn malformed_identifier_passes_through_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Api/acme/v1/Employees/definitely-not-real"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"processResults": []})))
        .mount(&server)
        .await;

    let err = session(&server)
        .await
        .get_employee_details("definitely-not-real")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn post_returns_full_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Api/acme/v1/Employees/EMP-1/TimeAwayFromWork"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ProcessMessages": [],
            "WasSuccessful": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = session(&server).await;
    let envelope = api
        .http()
        .post(
            "Employees/EMP-1/TimeAwayFromWork",
            &json!({"TAFWXRefCode": "VAC"}),
        )
        .await
        .unwrap();

    // The whole envelope comes back; POST responses carry no Data wrapper.
    assert_eq!(envelope["WasSuccessful"], true);
    assert!(envelope["ProcessMessages"].as_array().unwrap().is_empty());
}
