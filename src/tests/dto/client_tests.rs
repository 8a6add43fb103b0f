use assert_json_diff::assert_json_eq;
use serde_json::{json, Value};

use crate::{
    dto::{Client, ClientExtension, ClientListResponse, Dto, IntOrString, TaggedValue},
    enums::{ClientAuthMethod, ClientType, GrantType, JwsAlg, ResponseType},
};

fn sample_client() -> Client {
    let mut extension = ClientExtension::new();
    extension
        .set_requestable_scopes(vec!["openid".to_string(), "email".to_string()])
        .set_requestable_scopes_enabled(true)
        .set_access_token_duration(IntOrString::Int(3600));

    let mut client = Client::new();
    client
        .set_client_id(IntOrString::Int(1140735077))
        .set_client_secret("gXz97ISgLs4HuXwOZWch8GEmgL4YMvUJwu3er_kDVVGcA0UOhA9avLPbEmoeZdagi9yC_-tEiT2BdRyH9dbrQQ".to_string())
        .set_client_type(ClientType::Confidential)
        .set_client_name("My Client".to_string())
        .set_client_names(vec![
            TaggedValue::of("ja", "マイクライアント"),
            TaggedValue::of("fr", "Mon Client"),
        ])
        .set_redirect_uris(vec!["https://client.example.com/cb".to_string()])
        .set_response_types(vec![ResponseType::Code])
        .set_grant_types(vec![GrantType::AuthorizationCode, GrantType::RefreshToken])
        .set_token_auth_method(ClientAuthMethod::ClientSecretBasic)
        .set_id_token_sign_alg(JwsAlg::Rs256)
        .set_par_required(true)
        .set_extension(extension);
    client
}

#[test]
fn getters_return_what_the_setters_stored() {
    let client = sample_client();

    assert_eq!(Some(1140735077), client.client_id().and_then(IntOrString::as_i64));
    assert_eq!(Some(ClientType::Confidential), client.client_type());
    assert_eq!(Some("My Client"), client.client_name());
    assert_eq!(Some(true), client.par_required());
    assert_eq!(None, client.request_object_required());
    assert!(!client.pkce_required());
    assert_eq!(
        Some(&["openid".to_string(), "email".to_string()][..]),
        client.extension().and_then(ClientExtension::requestable_scopes)
    );
}

#[test]
fn tagged_values_keep_their_order() {
    let client = sample_client();

    let names = client.client_names().unwrap();

    assert_eq!(2, names.len());
    assert_eq!(Some("ja"), names[0].tag());
    assert_eq!(Some("マイクライアント"), names[0].value());
    assert_eq!(Some("fr"), names[1].tag());
    assert_eq!(Some("Mon Client"), names[1].value());
}

#[test]
fn renders_authlete_wire_format() {
    let client = sample_client();

    let array = client.to_array();

    assert_eq!(json!(1140735077), array["clientId"]);
    assert_eq!(json!("CONFIDENTIAL"), array["clientType"]);
    assert_eq!(json!(["AUTHORIZATION_CODE", "REFRESH_TOKEN"]), array["grantTypes"]);
    assert_eq!(json!("CLIENT_SECRET_BASIC"), array["tokenAuthMethod"]);
    assert_eq!(json!(true), array["parRequired"]);
    assert_eq!(Value::Null, array["requestObjectRequired"]);
    assert_json_eq!(
        json!([
            {"tag": "ja", "value": "マイクライアント"},
            {"tag": "fr", "value": "Mon Client"}
        ]),
        array["clientNames"].clone()
    );
    assert_json_eq!(
        json!({
            "requestableScopes": ["openid", "email"],
            "requestableScopesEnabled": true,
            "accessTokenDuration": 3600,
            "refreshTokenDuration": null,
            "tokenExchangePermitted": false
        }),
        array["extension"].clone()
    );
}

#[test]
fn survives_a_json_round_trip() {
    let client = sample_client();

    let parsed = Client::from_json(&client.to_json(true)).unwrap();

    assert_eq!(client, parsed);
}

#[test]
fn reads_a_client_as_authlete_returns_it() {
    let json = r#"{
        "number": 1140,
        "serviceNumber": 715948317,
        "developer": "john",
        "clientId": 1140735077,
        "clientIdAlias": "my-client",
        "clientIdAliasEnabled": "true",
        "clientType": "PUBLIC",
        "redirectUris": ["https://client.example.com/cb"],
        "responseTypes": ["CODE", "CODE_ID_TOKEN"],
        "grantTypes": ["AUTHORIZATION_CODE"],
        "applicationType": "WEB",
        "clientName": "My Client",
        "clientNames": [{"tag": "ja", "value": "マイクライアント"}],
        "subjectType": "PUBLIC",
        "idTokenSignAlg": "RS256",
        "tokenAuthMethod": "NONE",
        "defaultMaxAge": 0,
        "authTimeRequired": false,
        "createdAt": 1639373421000,
        "modifiedAt": 1639373421000,
        "bcUserCodeRequired": false,
        "pkceRequired": "TRUE",
        "parRequired": null,
        "someFutureField": {"nested": true}
    }"#;

    let client = Client::from_json(json).unwrap();

    assert_eq!(Some(&IntOrString::Int(1140)), client.number());
    assert_eq!(Some("john"), client.developer());
    assert!(client.client_id_alias_enabled());
    assert_eq!(Some(ClientType::Public), client.client_type());
    assert_eq!(
        Some(&[ResponseType::Code, ResponseType::CodeIdToken][..]),
        client.response_types()
    );
    assert_eq!(Some(ClientAuthMethod::None), client.token_auth_method());
    assert_eq!(Some(&IntOrString::Int(1639373421000)), client.created_at());
    assert!(client.pkce_required());
    assert_eq!(None, client.par_required());
    assert_eq!(1, client.client_names().map_or(0, <[TaggedValue]>::len));
}

#[test]
fn client_list_with_an_empty_range() {
    let list = ClientListResponse::from_json(
        r#"{"developer":null,"start":3,"end":3,"totalCount":12,"clients":[]}"#,
    )
    .unwrap();

    assert_eq!(3, list.start());
    assert_eq!(3, list.end());
    assert_eq!(12, list.total_count());
    assert_eq!(Some(&[][..]), list.clients());
}
