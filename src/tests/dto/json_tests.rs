use assert_json_diff::assert_json_eq;
use serde_json::{json, Value};

use crate::{
    dto::{self, ApiResponse, Dto, Pair, Scope, TaggedValue, TokenRequest},
    types::AuthleteError,
};

#[test]
fn to_array_lists_every_field_in_declaration_order() {
    let mut response = ApiResponse::new();
    response.set_result_code("A001001".to_string());

    let array = response.to_array();
    let keys: Vec<&str> = array.keys().map(String::as_str).collect();

    assert_eq!(vec!["resultCode", "resultMessage"], keys);
    assert_json_eq!(
        json!({"resultCode": "A001001", "resultMessage": null}),
        Value::Object(array)
    );
}

#[test]
fn from_json_ignores_unknown_keys() {
    let response =
        ApiResponse::from_json(r#"{"resultCode":"A1","somethingNew":{"x":[1,2]}}"#).unwrap();

    assert_eq!(Some("A1"), response.result_code());
    assert_eq!(None, response.result_message());
}

#[test]
fn from_json_rejects_malformed_text() {
    assert!(matches!(
        ApiResponse::from_json(r#"{"resultCode":"#),
        Err(AuthleteError::Parse(_))
    ));
}

#[test]
fn from_json_rejects_non_objects() {
    for json in ["[]", "\"text\"", "1", "null"] {
        assert!(
            matches!(ApiResponse::from_json(json), Err(AuthleteError::Parse(_))),
            "{json}"
        );
    }
}

#[test]
fn pretty_json_is_indented() {
    let mut pair = Pair::new();
    pair.set_key("k".to_string()).set_value("v".to_string());

    assert_eq!(r#"{"key":"k","value":"v"}"#, pair.to_json(false));
    assert_eq!("{\n  \"key\": \"k\",\n  \"value\": \"v\"\n}", pair.to_json(true));
}

#[test]
fn absent_dto_serializes_to_none() {
    assert_eq!(None, dto::to_json::<Pair>(None, false));

    let pair = Pair::new();
    assert_eq!(
        Some(r#"{"key":null,"value":null}"#.to_string()),
        dto::to_json(Some(&pair), false)
    );
}

#[test]
fn apply_array_only_touches_present_keys() {
    let mut pair = Pair::new();
    pair.set_key("k".to_string()).set_value("v".to_string());

    let update = json!({"value": "w"});
    pair.apply_array(update.as_object().unwrap()).unwrap();

    assert_eq!(Some("k"), pair.key());
    assert_eq!(Some("w"), pair.value());
}

#[test]
fn set_wire_value_rejects_unknown_keys() {
    let mut pair = Pair::new();

    let error = pair.set_wire_value("nope", &json!("x")).unwrap_err();

    assert!(error.is_validation_error());
}

#[test]
fn field_table_describes_each_field() {
    let field = Scope::field("defaultEntry").unwrap();

    assert_eq!("default_entry", field.name);
    assert_eq!(dto::FieldKind::Flag, field.kind);
    assert!(Scope::field("default_entry").is_none());
    assert_eq!(5, Scope::fields().len());
}

#[test]
fn serde_goes_through_the_field_table() {
    let scope: Scope = serde_json::from_value(json!({
        "name": "openid",
        "defaultEntry": "true",
        "descriptions": [{"tag": "ja", "value": "説明"}]
    }))
    .unwrap();

    assert_eq!(Some("openid"), scope.name());
    assert!(scope.default_entry());
    assert_eq!(
        Some(&[TaggedValue::of("ja", "説明")][..]),
        scope.descriptions()
    );

    let value = serde_json::to_value(&scope).unwrap();

    assert_json_eq!(
        json!({
            "name": "openid",
            "defaultEntry": true,
            "description": null,
            "descriptions": [{"tag": "ja", "value": "説明"}],
            "attributes": null
        }),
        value
    );
}

#[test]
fn serde_reports_coercion_errors() {
    let result = serde_json::from_value::<Scope>(json!({"defaultEntry": [true]}));

    assert!(result.is_err());
}

#[test]
fn request_dto_round_trips_through_json() {
    let mut request = TokenRequest::new();
    request
        .set_parameters("grant_type=authorization_code&code=abc".to_string())
        .set_client_id("client".to_string())
        .set_client_secret("secret".to_string());

    let parsed = TokenRequest::from_json(&request.to_json(false)).unwrap();

    assert_eq!(request, parsed);
}
