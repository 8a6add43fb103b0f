use crate::{
    api::{endpoints, ApiCall, ApiVersion, AuthleteApi, AuthleteConfiguration},
    dto::{AuthorizationRequest, Client, IntOrString},
    enums::AuthorizationAction,
    tests::test_http_client::{TestHttpClient, TestHttpReqRes},
    types::{AuthleteError, HttpMethod},
};

const API_KEY: &str = "21653835348762";
const API_SECRET: &str = "uE4NgqeIpuSV_XejQ7Ds3jsgA1yXhjR1MXJ1LbPuyls";
const BASIC: &str =
    "Basic MjE2NTM4MzUzNDg3NjI6dUU0TmdxZUlwdVNWX1hlalE3RHMzanNnQTF5WGhqUjFNWEoxTGJQdXlscw==";

fn v2_api() -> AuthleteApi {
    AuthleteApi::new(AuthleteConfiguration::new().set_service_credentials(API_KEY, API_SECRET))
}

fn v3_api() -> AuthleteApi {
    AuthleteApi::new(
        AuthleteConfiguration::new()
            .set_api_version(ApiVersion::V3)
            .set_service_id("715948317")
            .set_service_access_token("service-token"),
    )
}

#[tokio::test]
async fn posts_the_request_dto_with_basic_credentials() {
    let http_client = TestHttpReqRes::new("https://api.authlete.com/api/auth/authorization")
        .assert_request_method(HttpMethod::POST)
        .assert_request_header("accept", vec!["application/json".to_string()])
        .assert_request_header("authorization", vec![BASIC.to_string()])
        .assert_request_header("content-type", vec!["application/json".to_string()])
        .assert_request_body(r#"{"parameters":"response_type=code&client_id=57297408867"}"#)
        .set_response_body(
            r#"{"resultCode":"A004001","resultMessage":"[A004001] Authlete has successfully issued a ticket to the service.","action":"INTERACTION","ticket":"hXoY87t_t23enrVHWxpXNP5FfVDhDypD3T6H6lt4IPA"}"#,
        )
        .build();

    let mut request = AuthorizationRequest::new();
    request.set_parameters("response_type=code&client_id=57297408867".to_string());

    let response = v2_api()
        .call(&http_client, &endpoints::AUTHORIZATION, &request)
        .await
        .unwrap();

    assert_eq!(Some(AuthorizationAction::Interaction), response.action());
    assert_eq!(Some("A004001"), response.result_code());
    assert_eq!(
        Some("hXoY87t_t23enrVHWxpXNP5FfVDhDypD3T6H6lt4IPA"),
        response.ticket()
    );

    http_client.assert();
}

#[tokio::test]
async fn substitutes_path_parameters() {
    let http_client = TestHttpReqRes::new("https://api.authlete.com/api/client/get/1140735077")
        .assert_request_method(HttpMethod::GET)
        .assert_request_header("authorization", vec![BASIC.to_string()])
        .set_response_body(r#"{"clientId":1140735077,"clientName":"My Client"}"#)
        .build();

    let client = v2_api()
        .execute(
            &http_client,
            &endpoints::CLIENT_GET,
            ApiCall::new().path_param("clientId", 1140735077),
        )
        .await
        .unwrap();

    assert_eq!(Some(&IntOrString::Int(1140735077)), client.client_id());
    assert_eq!(Some("My Client"), client.client_name());

    http_client.assert();
}

#[tokio::test]
async fn percent_encodes_path_parameters() {
    let http_client = TestHttpReqRes::new("https://api.authlete.com/api/client/delete/my%20client")
        .assert_request_method(HttpMethod::DELETE)
        .set_response_status_code(204)
        .build();

    v2_api()
        .execute(
            &http_client,
            &endpoints::CLIENT_DELETE,
            ApiCall::new().path_param("clientId", "my client"),
        )
        .await
        .unwrap();

    http_client.assert();
}

#[tokio::test]
async fn missing_path_parameter_is_a_configuration_error() {
    let http_client = TestHttpClient::new();

    let error = v2_api()
        .execute(&http_client, &endpoints::CLIENT_GET, ApiCall::new())
        .await
        .unwrap_err();

    assert!(matches!(error, AuthleteError::Configuration(_)));

    http_client.assert();
}

#[tokio::test]
async fn v3_uses_bearer_tokens_and_service_scoped_paths() {
    let http_client =
        TestHttpReqRes::new("https://api.authlete.com/api/715948317/auth/token/delete/at-123")
            .assert_request_method(HttpMethod::DELETE)
            .assert_request_header("authorization", vec!["Bearer service-token".to_string()])
            .set_response_status_code(204)
            .build();

    v3_api()
        .execute(
            &http_client,
            &endpoints::TOKEN_DELETE,
            ApiCall::new().path_param("accessTokenIdentifier", "at-123"),
        )
        .await
        .unwrap();

    http_client.assert();
}

#[tokio::test]
async fn v3_without_a_service_id_is_a_configuration_error() {
    let http_client = TestHttpClient::new();

    let api = AuthleteApi::new(
        AuthleteConfiguration::new()
            .set_api_version(ApiVersion::V3)
            .set_service_access_token("service-token"),
    );

    let error = api
        .get_service_configuration(&http_client, false)
        .await
        .unwrap_err();

    assert!(matches!(error, AuthleteError::Configuration(_)));

    http_client.assert();
}

#[tokio::test]
async fn missing_credentials_is_a_configuration_error() {
    let http_client = TestHttpClient::new();

    let api = AuthleteApi::new(AuthleteConfiguration::new());

    let error = api
        .get_service_configuration(&http_client, false)
        .await
        .unwrap_err();

    match error {
        AuthleteError::Configuration(message) => {
            assert_eq!("no V2 credentials configured for Service", message)
        }
        other => panic!("expected a configuration error, got {other:?}"),
    }

    http_client.assert();
}

#[tokio::test]
async fn non_2xx_responses_become_api_errors() {
    let body = r#"{"resultCode":"A001202","resultMessage":"[A001202] /auth/authorization, Authorization header is missing."}"#;

    let http_client = TestHttpReqRes::new("https://api.authlete.com/api/auth/authorization")
        .assert_request_method(HttpMethod::POST)
        .set_response_status_code(401)
        .set_response_header("content-type", "application/json")
        .set_response_body(body)
        .build();

    let error = v2_api()
        .call(&http_client, &endpoints::AUTHORIZATION, &AuthorizationRequest::new())
        .await
        .unwrap_err();

    let api_error = error.api_error().unwrap();

    assert_eq!(401, api_error.status_code);
    assert_eq!(
        Some("[A001202] /auth/authorization, Authorization header is missing."),
        api_error.result_message.as_deref()
    );
    assert_eq!(Some(body), api_error.body.as_deref());
    assert_eq!(
        Some(&vec!["application/json".to_string()]),
        api_error.headers.get("content-type")
    );
    assert_eq!(
        "Authlete API returned 401: [A001202] /auth/authorization, Authorization header is missing.",
        error.to_string()
    );

    http_client.assert();
}

#[tokio::test]
async fn non_json_error_bodies_are_kept_raw() {
    let http_client = TestHttpReqRes::new("https://api.authlete.com/api/client/get/1")
        .set_response_status_code(502)
        .set_response_body("<html>Bad Gateway</html>")
        .build();

    let error = v2_api()
        .execute(
            &http_client,
            &endpoints::CLIENT_GET,
            ApiCall::new().path_param("clientId", 1),
        )
        .await
        .unwrap_err();

    let api_error = error.api_error().unwrap();

    assert_eq!(502, api_error.status_code);
    assert_eq!(None, api_error.result_message);
    assert_eq!(Some("<html>Bad Gateway</html>"), api_error.body.as_deref());
    assert_eq!("Authlete API returned 502", api_error.message);

    http_client.assert();
}

#[tokio::test]
async fn transport_failures_have_status_zero() {
    let http_client = TestHttpReqRes::new("https://api.authlete.com/api/client/get/1")
        .set_transport_error("connection refused")
        .build();

    let error = v2_api()
        .execute(
            &http_client,
            &endpoints::CLIENT_GET,
            ApiCall::new().path_param("clientId", 1),
        )
        .await
        .unwrap_err();

    let api_error = error.api_error().unwrap();

    assert_eq!(0, api_error.status_code);
    assert_eq!("connection refused", api_error.message);
    assert!(api_error.body.is_none());

    http_client.assert();
}

#[tokio::test]
async fn empty_body_for_a_dto_response_is_a_parse_error() {
    let http_client = TestHttpReqRes::new("https://api.authlete.com/api/client/get/1").build();

    let error = v2_api()
        .execute(
            &http_client,
            &endpoints::CLIENT_GET,
            ApiCall::new().path_param("clientId", 1),
        )
        .await
        .unwrap_err();

    assert!(matches!(error, AuthleteError::Parse(_)));

    http_client.assert();
}

#[tokio::test]
async fn update_sends_the_client_as_the_body() {
    let mut client = Client::new();
    client
        .set_client_id(IntOrString::Int(42))
        .set_client_name("Renamed".to_string());

    let expected_body = serde_json::to_string(&client).unwrap();

    let http_client = TestHttpReqRes::new("https://api.authlete.com/api/client/update/42")
        .assert_request_method(HttpMethod::POST)
        .assert_request_header("content-type", vec!["application/json".to_string()])
        .assert_request_body(expected_body.clone())
        .set_response_body(expected_body)
        .build();

    let updated = v2_api()
        .execute(
            &http_client,
            &endpoints::CLIENT_UPDATE,
            ApiCall::new().path_param("clientId", 42).body(&client),
        )
        .await
        .unwrap();

    assert_eq!(client, updated);

    http_client.assert();
}

#[tokio::test]
async fn service_configuration_is_returned_raw() {
    let discovery = r#"{"issuer":"https://as.example.com","jwks_uri":"https://as.example.com/jwks"}"#;

    let http_client =
        TestHttpReqRes::new("https://api.authlete.com/api/service/configuration?pretty=true")
            .assert_request_method(HttpMethod::GET)
            .assert_request_header("authorization", vec![BASIC.to_string()])
            .set_response_body(discovery)
            .build();

    let configuration = v2_api()
        .get_service_configuration(&http_client, true)
        .await
        .unwrap();

    assert_eq!(discovery, configuration);

    http_client.assert();
}

#[tokio::test]
async fn service_jwks_passes_both_flags() {
    let http_client = TestHttpReqRes::new(
        "https://api.authlete.com/api/715948317/service/jwks/get?pretty=false&includePrivateKeys=true",
    )
    .assert_request_header("authorization", vec!["Bearer service-token".to_string()])
    .set_response_body(r#"{"keys":[]}"#)
    .build();

    let jwks = v3_api()
        .get_service_jwks(&http_client, false, true)
        .await
        .unwrap();

    assert_eq!(r#"{"keys":[]}"#, jwks);

    http_client.assert();
}

#[tokio::test]
async fn custom_base_url_drops_the_trailing_slash() {
    let http_client = TestHttpReqRes::new("https://jp.authlete.com/api/auth/token/delete/abc")
        .assert_request_method(HttpMethod::DELETE)
        .assert_request_header("authorization", vec![BASIC.to_string()])
        .build();

    let api = AuthleteApi::new(
        AuthleteConfiguration::new()
            .set_base_url("https://jp.authlete.com/")
            .set_service_credentials(API_KEY, API_SECRET),
    );

    api.execute(
        &http_client,
        &endpoints::TOKEN_DELETE,
        ApiCall::new().path_param("accessTokenIdentifier", "abc"),
    )
    .await
    .unwrap();

    http_client.assert();
}
