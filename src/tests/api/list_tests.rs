use crate::{
    api::{AuthleteApi, AuthleteConfiguration},
    tests::test_http_client::{TestHttpClient, TestHttpReqRes},
    types::{AuthleteError, HttpMethod},
};

fn api() -> AuthleteApi {
    AuthleteApi::new(
        AuthleteConfiguration::new()
            .set_service_credentials("service-key", "service-secret")
            .set_service_owner_credentials("owner-key", "owner-secret"),
    )
}

#[tokio::test]
async fn client_list_sends_the_range_as_query() {
    let http_client = TestHttpReqRes::new(
        "https://api.authlete.com/api/client/get/list?developer=john&start=5&end=7",
    )
    .assert_request_method(HttpMethod::GET)
    .assert_request_header("accept", vec!["application/json".to_string()])
    .set_response_body(
        r#"{"developer":"john","start":5,"end":7,"totalCount":6,"clients":[{"clientId":57297408867,"clientName":"A"}]}"#,
    )
    .build();

    let list = api()
        .get_client_list(&http_client, Some("john"), Some(5), Some(7))
        .await
        .unwrap();

    assert_eq!(Some("john"), list.developer());
    assert_eq!(5, list.start());
    assert_eq!(7, list.end());
    assert_eq!(6, list.total_count());
    assert_eq!(1, list.clients().map_or(0, |c| c.len()));

    http_client.assert();
}

#[tokio::test]
async fn client_list_without_arguments_has_no_query() {
    let http_client = TestHttpReqRes::new("https://api.authlete.com/api/client/get/list")
        .set_response_body(r#"{"start":0,"end":5,"totalCount":0,"clients":[]}"#)
        .build();

    let list = api()
        .get_client_list(&http_client, None, None, None)
        .await
        .unwrap();

    assert_eq!(0, list.total_count());
    assert_eq!(Some(0), list.clients().map(|c| c.len()));

    http_client.assert();
}

#[tokio::test]
async fn empty_range_still_reports_the_total_count() {
    let http_client =
        TestHttpReqRes::new("https://api.authlete.com/api/client/get/list?start=3&end=3")
            .set_response_body(r#"{"start":3,"end":3,"totalCount":12,"clients":[]}"#)
            .build();

    let list = api()
        .get_client_list(&http_client, None, Some(3), Some(3))
        .await
        .unwrap();

    assert_eq!(12, list.total_count());
    assert!(list.clients().is_some_and(|c| c.is_empty()));

    http_client.assert();
}

#[tokio::test]
async fn negative_offsets_are_rejected_before_sending() {
    let http_client = TestHttpClient::new();

    let error = api()
        .get_client_list(&http_client, None, Some(-1), Some(3))
        .await
        .unwrap_err();

    match error {
        AuthleteError::Validation { field, .. } => assert_eq!("start", field),
        other => panic!("expected a validation error, got {other:?}"),
    }

    let error = api()
        .get_token_list(&http_client, None, None, Some(0), Some(-5))
        .await
        .unwrap_err();

    assert!(error.is_validation_error());

    http_client.assert();
}

#[tokio::test]
async fn service_list_uses_the_service_owner_credentials() {
    let http_client =
        TestHttpReqRes::new("https://api.authlete.com/api/service/get/list?start=0&end=2")
            .assert_request_header(
                "authorization",
                vec!["Basic b3duZXIta2V5Om93bmVyLXNlY3JldA==".to_string()],
            )
            .set_response_body(
                r#"{"start":0,"end":2,"totalCount":2,"services":[{"serviceName":"A"},{"serviceName":"B"}]}"#,
            )
            .build();

    let list = api()
        .get_service_list(&http_client, Some(0), Some(2))
        .await
        .unwrap();

    let names: Vec<Option<&str>> = list
        .services()
        .unwrap()
        .iter()
        .map(|s| s.service_name())
        .collect();

    assert_eq!(vec![Some("A"), Some("B")], names);
    assert_eq!(2, list.total_count());

    http_client.assert();
}

#[tokio::test]
async fn token_list_filters_by_client_and_subject() {
    let http_client = TestHttpReqRes::new(
        "https://api.authlete.com/api/auth/token/get/list?clientIdentifier=my-client&subject=alice&start=0&end=10",
    )
    .set_response_body(
        r#"{"start":0,"end":10,"client":null,"subject":"alice","totalCount":1,"accessTokens":[{"accessTokenHash":"h","subject":"alice"}]}"#,
    )
    .build();

    let list = api()
        .get_token_list(&http_client, Some("my-client"), Some("alice"), Some(0), Some(10))
        .await
        .unwrap();

    assert_eq!(Some("alice"), list.subject());
    assert_eq!(1, list.total_count());
    assert_eq!(
        Some("h"),
        list.access_tokens().unwrap()[0].access_token_hash()
    );

    http_client.assert();
}
