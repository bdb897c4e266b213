use edudex_api_client::{ClientConfig, EduDexClient, Error};
use httpmock::prelude::*;
use serde_json::json;

/// Build a client pointed at a mock server.
fn test_client(server: &MockServer) -> EduDexClient {
    let config = ClientConfig::default()
        .with_bearer_token("test-token")
        .with_base_url(server.base_url());
    EduDexClient::with_config(config).unwrap()
}

#[tokio::test]
async fn list_organizations_sends_default_headers() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/organizations")
            .header("Authorization", "Bearer test-token")
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header_exists("X-Request-ID");
        then.status(200).json_body(json!({
            "organizations": [
                {
                    "id": "edu:acme",
                    "name": {"nl": "Acme Opleidingen", "en": "Acme Training"},
                    "roles": ["supplier"],
                    "vatExempt": false
                },
                {
                    "id": "edu:beta",
                    "name": {"en": "Beta Institute"},
                    "roles": ["client", "accreditor"]
                }
            ]
        }));
    });

    let client = test_client(&server);
    let organizations = client.organizations().list().await.unwrap();

    assert_eq!(organizations.len(), 2);
    assert!(organizations[0].is_supplier());
    assert_eq!(
        organizations[1].localized_name(Some("nl")),
        Some("Beta Institute")
    );

    mock.assert();
}

#[tokio::test]
async fn get_organization_hydrates_unknown_keys_away() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/organizations/edu:acme");
        then.status(200).json_body(json!({
            "id": "edu:acme",
            "name": {"nl": "Acme"},
            "roles": ["supplier"],
            "futureField": {"nested": true}
        }));
    });

    let client = test_client(&server);
    let org = client.organizations().get("edu:acme").await.unwrap();

    assert_eq!(org.id.as_deref(), Some("edu:acme"));
    assert!(edudex_core::Model::to_value(&org).get("futureField").is_none());
}

#[tokio::test]
async fn not_found_maps_to_typed_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/organizations/edu:ghost");
        then.status(404).json_body(json!({"error": "Not found"}));
    });

    let client = test_client(&server);
    let err = client.organizations().get("edu:ghost").await.unwrap_err();

    match &err {
        Error::NotFound { message } => assert_eq!(message, "Not found"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.status_code(), 404);
    assert!(err.is_client_error());
}

#[tokio::test]
async fn validation_messages_map_to_validation_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/validations/programs");
        then.status(400).json_body(json!({
            "error": "Validation failed",
            "messages": [
                {"message": "title is required", "severity": "error", "contextPath": "/title"}
            ]
        }));
    });

    let client = test_client(&server);
    let err = client
        .validations()
        .validate_program(json!({"programId": "p"}))
        .await
        .unwrap_err();

    match &err {
        Error::Validation(failure) => {
            assert_eq!(failure.error_messages(), vec!["title is required"]);
            assert!(failure.warnings().is_empty());
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn plain_400_maps_to_client_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/suppliers/edu:acme");
        then.status(400).json_body(json!({"message": "bad request"}));
    });

    let client = test_client(&server);
    let err = client.suppliers().get("edu:acme").await.unwrap_err();

    assert!(matches!(err, Error::Client { status: 400, .. }));
}

#[tokio::test]
async fn unauthorized_maps_to_authentication_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/organizations");
        then.status(401).json_body(json!({"error": "Invalid token"}));
    });

    let client = test_client(&server);
    let err = client.organizations().list().await.unwrap_err();

    assert!(matches!(err, Error::Authentication { status: 401, .. }));
}

#[tokio::test]
async fn server_error_is_transient() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/organizations");
        then.status(503).body("Service Unavailable");
    });

    let client = test_client(&server);
    let err = client.organizations().list().await.unwrap_err();

    assert!(matches!(err, Error::Server { status: 503, .. }));
    assert!(err.is_transient());
    assert!(err.is_server_error());
}

#[tokio::test]
async fn empty_delete_response_is_ok() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(DELETE)
            .path("/organizations/edu:acme/webhooks/wh-1");
        then.status(204);
    });

    let client = test_client(&server);
    client
        .organizations()
        .delete_webhook("edu:acme", "wh-1")
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn malformed_success_body_is_reported() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/organizations");
        then.status(200).body("<html>definitely not json</html>");
    });

    let client = test_client(&server);
    let err = client.organizations().list().await.unwrap_err();

    match err {
        Error::MalformedResponse { status, body } => {
            assert_eq!(status, 200);
            assert!(body.contains("not json"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn connection_refused_maps_to_network_error() {
    let config = ClientConfig::default()
        .with_bearer_token("test-token")
        .with_base_url("http://127.0.0.1:1");
    let client = EduDexClient::with_config(config).unwrap();

    let err = client.organizations().list().await.unwrap_err();

    assert!(matches!(err, Error::Network { .. }));
    assert_eq!(err.status_code(), 0);
    assert!(err.is_transient());
}

#[tokio::test]
async fn missing_parameter_fails_before_any_request() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.any_request();
        then.status(200).json_body(json!({}));
    });

    let client = test_client(&server);
    let err = client.organizations().get("").await.unwrap_err();

    assert!(matches!(err, Error::MissingParameter { ref name } if name == "orgUnitId"));
    mock.assert_hits(0);
}

#[tokio::test]
async fn query_parameters_drop_absent_values() {
    let server = MockServer::start();

    // First-match-wins: a request carrying clientId hits the specific
    // mock, a request without it falls through to the plain one.
    let with_param = server.mock(|when, then| {
        when.method(GET)
            .path("/suppliers/edu:acme/programs")
            .query_param_exists("clientId");
        then.status(200)
            .json_body(json!({"programs": [{"programId": "p"}]}));
    });
    let without_param = server.mock(|when, then| {
        when.method(GET).path("/suppliers/edu:acme/programs");
        then.status(200).json_body(json!({"programs": []}));
    });

    let client = test_client(&server);

    let programs = client
        .suppliers()
        .list_programs("edu:acme", None)
        .await
        .unwrap();
    assert!(programs.is_empty());
    with_param.assert_hits(0);
    without_param.assert_hits(1);

    let programs = client
        .suppliers()
        .list_programs("edu:acme", Some("client-a"))
        .await
        .unwrap();
    assert_eq!(programs.len(), 1);
    with_param.assert_hits(1);
}

#[tokio::test]
async fn bulk_programs_posts_refs_and_query() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/programs/bulk")
            .query_param("viewerOrgUnitId", "edu:viewer")
            .json_body(json!({
                "programs": [
                    {"orgUnitId": "edu:acme", "programId": "course-101", "clientId": "client-a"}
                ]
            }));
        then.status(200).json_body(json!({
            "successful": [{"orgUnitId": "edu:acme", "programId": "course-101"}],
            "failed": []
        }));
    });

    let client = test_client(&server);
    let response = client
        .programs()
        .bulk(
            &[edudex_api_client::endpoints::ProgramRef::new(
                "edu:acme",
                "course-101",
                "client-a",
            )],
            Some("edu:viewer"),
            None,
        )
        .await
        .unwrap();

    assert!(response.is_complete());
    assert_eq!(
        response.successful_programs()[0].program_id.as_deref(),
        Some("course-101")
    );
    mock.assert();
}

#[tokio::test]
async fn validation_payload_is_wrapped_in_data_key() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/validations/programs")
            .json_body(json!({"data": {"programId": "p"}}));
        then.status(200).json_body(json!({
            "messages": [
                {"message": "style hint", "severity": "warning"}
            ]
        }));
    });

    let client = test_client(&server);
    let result = client
        .validations()
        .validate_program(json!({"programId": "p"}))
        .await
        .unwrap();

    assert!(result.is_valid());
    assert_eq!(result.warning_count(), 1);
    mock.assert();
}

#[tokio::test]
async fn create_static_catalog_round_trip() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/organizations/edu:acme/staticcatalogs")
            .json_body(json!({"title": "Spring offering", "clientId": "client-a"}));
        then.status(200).json_body(json!({
            "catalogId": "b1f6",
            "clientId": "client-a",
            "title": "Spring offering",
            "countActive": 0,
            "countTotal": 0
        }));
    });

    let client = test_client(&server);
    let catalog = client
        .organizations()
        .create_static_catalog("edu:acme", "Spring offering", "client-a")
        .await
        .unwrap();

    assert_eq!(catalog.catalog_id.as_deref(), Some("b1f6"));
    assert!(catalog.is_empty());
    mock.assert();
}
