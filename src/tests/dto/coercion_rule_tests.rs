use assert_json_diff::assert_json_eq;
use serde_json::{json, Value};

use crate::{
    dto::{
        AuthorizationResponse, Client, ClientAuthorizationGetListRequest, ClientExtension,
        ClientListResponse, Dto, HskCreateRequest, IntOrString, Service, TokenResponse,
    },
    enums::{GrantType, TokenAction},
    types::AuthleteError,
};

#[test]
fn flag_reads_lenient_booleans() {
    let mut extension = ClientExtension::new();

    for (wire, expected) in [
        (json!(true), true),
        (json!(false), false),
        (json!("true"), true),
        (json!("TRUE"), true),
        (json!("false"), false),
        (json!("yes"), false),
        (Value::Null, false),
    ] {
        extension
            .set_wire_value("requestableScopesEnabled", &wire)
            .unwrap();
        assert_eq!(expected, extension.requestable_scopes_enabled(), "{wire}");
    }
}

#[test]
fn flag_rejects_arrays_and_numbers() {
    let mut extension = ClientExtension::new();

    let error = extension
        .set_wire_value("requestableScopesEnabled", &json!([true]))
        .unwrap_err();
    assert!(error.is_validation_error());

    assert!(extension
        .set_wire_value("requestableScopesEnabled", &json!(1))
        .is_err());
}

#[test]
fn flag_defaults_to_false() {
    let client = Client::from_json("{}").unwrap();

    assert!(!client.pkce_required());
    assert_eq!(json!(false), client.to_array()["pkceRequired"]);
}

#[test]
fn tri_bool_keeps_unset_apart_from_false() {
    let client = Client::from_json(r#"{"parRequired":false}"#).unwrap();

    assert_eq!(Some(false), client.par_required());
    assert_eq!(None, client.request_object_required());
    assert_eq!(Value::Null, client.to_array()["requestObjectRequired"]);
}

#[test]
fn tri_bool_only_accepts_booleans() {
    let error = Client::from_json(r#"{"parRequired":"true"}"#).unwrap_err();

    assert!(error.is_validation_error());
}

#[test]
fn int_or_string_keeps_the_supplied_representation() {
    let from_number = TokenResponse::from_json(r#"{"clientId":1}"#).unwrap();
    let from_string = TokenResponse::from_json(r#"{"clientId":"1"}"#).unwrap();

    assert_eq!(Some(&IntOrString::Int(1)), from_number.client_id());
    assert_eq!(Some(&IntOrString::Str("1".to_string())), from_string.client_id());

    assert_eq!(json!(1), from_number.to_array()["clientId"]);
    assert_eq!(json!("1"), from_string.to_array()["clientId"]);
}

#[test]
fn int_or_string_accepts_any_string() {
    let response = TokenResponse::from_json(r#"{"clientId":"my-client"}"#).unwrap();

    let client_id = response.client_id().unwrap();

    assert!(!client_id.is_numeric());
    assert_eq!(None, client_id.as_i64());
    assert_eq!("my-client", client_id.to_string());
}

#[test]
fn int_or_string_rejects_fractions_and_booleans() {
    assert!(TokenResponse::from_json(r#"{"clientId":1.5}"#)
        .unwrap_err()
        .is_validation_error());
    assert!(TokenResponse::from_json(r#"{"clientId":true}"#)
        .unwrap_err()
        .is_validation_error());
}

#[test]
fn big_numbers_keep_their_digits() {
    let json = r#"{"clientId":123456789012345678901234567890}"#;

    let response = TokenResponse::from_json(json).unwrap();

    assert_eq!(
        Some(&IntOrString::Str("123456789012345678901234567890".to_string())),
        response.client_id()
    );

    let rendered = response.to_json(false);
    assert!(rendered.contains("123456789012345678901234567890"));
}

#[test]
fn integer_reads_numeric_strings_and_null() {
    let list = ClientListResponse::from_json(r#"{"start":"5","end":7,"totalCount":null}"#)
        .unwrap();

    assert_eq!(5, list.start());
    assert_eq!(7, list.end());
    assert_eq!(0, list.total_count());

    assert!(ClientListResponse::from_json(r#"{"start":"five"}"#)
        .unwrap_err()
        .is_validation_error());
}

#[test]
fn optional_integer_leaves_an_unset_range_as_null() {
    let mut request = ClientAuthorizationGetListRequest::new();
    request.set_subject("alice".to_string());

    assert_eq!(None, request.start());
    assert_json_eq!(
        json!({"subject": "alice", "developer": null, "start": null, "end": null}),
        serde_json::from_str::<Value>(&request.to_json(false)).unwrap()
    );

    request.set_start(5).set_end(10);
    assert_json_eq!(
        json!({"subject": "alice", "developer": null, "start": 5, "end": 10}),
        serde_json::from_str::<Value>(&request.to_json(false)).unwrap()
    );
}

#[test]
fn optional_integer_reads_numeric_strings_and_null() {
    let request =
        ClientAuthorizationGetListRequest::from_json(r#"{"start":"3","end":null}"#).unwrap();

    assert_eq!(Some(3), request.start());
    assert_eq!(None, request.end());

    assert!(
        ClientAuthorizationGetListRequest::from_json(r#"{"end":true}"#)
            .unwrap_err()
            .is_validation_error()
    );
}

#[test]
fn hsk_alg_accepts_encryption_algorithms() {
    let service = Service::from_json(
        r#"{"hsks":[{"kty":"RSA","use":"enc","alg":"RSA-OAEP-256","kid":"k1"},{"kty":"EC","use":"sig","alg":"ES256","kid":"k2"}]}"#,
    )
    .unwrap();

    let hsks = service.hsks().unwrap();
    assert_eq!(Some("enc"), hsks[0].key_use());
    assert_eq!(Some("RSA-OAEP-256"), hsks[0].alg());
    assert_eq!(Some("ES256"), hsks[1].alg());

    let mut request = HskCreateRequest::new();
    request.set_alg("ECDH-ES".to_string());
    assert!(request.to_json(false).contains(r#""alg":"ECDH-ES""#));
}

#[test]
fn enum_fields_need_exact_names() {
    let response = TokenResponse::from_json(r#"{"action":"OK","grantType":"PASSWORD"}"#).unwrap();

    assert_eq!(Some(TokenAction::Ok), response.action());
    assert_eq!(Some(GrantType::Password), response.grant_type());

    assert!(matches!(
        TokenResponse::from_json(r#"{"action":"ok"}"#),
        Err(AuthleteError::EnumParse { .. })
    ));
    assert!(TokenResponse::from_json(r#"{"action":123}"#)
        .unwrap_err()
        .is_type_error());
}

#[test]
fn enum_lists_keep_order() {
    let client =
        Client::from_json(r#"{"grantTypes":["REFRESH_TOKEN","AUTHORIZATION_CODE"]}"#).unwrap();

    assert_eq!(
        Some(&[GrantType::RefreshToken, GrantType::AuthorizationCode][..]),
        client.grant_types()
    );
    assert_eq!(
        json!(["REFRESH_TOKEN", "AUTHORIZATION_CODE"]),
        client.to_array()["grantTypes"]
    );
}

#[test]
fn enum_list_must_be_an_array() {
    let error = Client::from_json(r#"{"grantTypes":"PASSWORD"}"#).unwrap_err();

    assert!(error.is_validation_error());

    let error = Client::from_json(r#"{"grantTypes":["PASSWORD",1]}"#).unwrap_err();

    assert!(error.is_type_error());
}

#[test]
fn text_lists_reject_non_strings() {
    let error = Client::from_json(r#"{"redirectUris":["https://a.example",2]}"#).unwrap_err();

    assert!(error.is_validation_error());
}

#[test]
fn nested_lists_build_each_element() {
    let response =
        AuthorizationResponse::from_json(r#"{"scopes":[{"name":"a"},{"name":"b"}]}"#).unwrap();

    let names: Vec<Option<&str>> = response
        .scopes()
        .unwrap()
        .iter()
        .map(|s| s.name())
        .collect();

    assert_eq!(vec![Some("a"), Some("b")], names);
}

#[test]
fn nested_list_elements_must_be_objects() {
    let error = AuthorizationResponse::from_json(r#"{"scopes":[{"name":"a"},"b"]}"#).unwrap_err();

    assert!(error.is_validation_error());
}

#[test]
fn nested_null_is_none_and_other_scalars_are_type_errors() {
    let response = AuthorizationResponse::from_json(r#"{"client":null}"#).unwrap();
    assert!(response.client().is_none());

    let error = AuthorizationResponse::from_json(r#"{"client":true}"#).unwrap_err();

    match error {
        AuthleteError::Type {
            field,
            expected,
            found,
        } => {
            assert_eq!("client", field);
            assert_eq!("object", expected);
            assert_eq!("boolean", found);
        }
        other => panic!("expected a type error, got {other:?}"),
    }
}

#[test]
fn errors_inside_nested_objects_propagate() {
    let error =
        AuthorizationResponse::from_json(r#"{"client":{"grantTypes":["NOPE"]}}"#).unwrap_err();

    assert!(matches!(error, AuthleteError::EnumParse { .. }));
}

#[test]
fn failed_assignment_leaves_the_field_untouched() {
    let mut response = TokenResponse::new();
    response.set_subject("alice".to_string());

    assert!(response.set_wire_value("subject", &json!(5)).is_err());
    assert_eq!(Some("alice"), response.subject());
}
