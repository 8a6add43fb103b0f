use std::collections::HashSet;

use serde_json::Value;

use crate::dto::{sample_array, *};

fn populated<D: Dto>() -> D {
    let mut dto = D::default();

    for (wire_key, value) in sample_array::<D>() {
        dto.set_wire_value(&wire_key, &value)
            .unwrap_or_else(|e| panic!("{wire_key}: {e}"));
    }

    dto
}

/// Nested objects must come back with their own fields filled in
fn assert_filled(value: &Value, path: &str) {
    match value {
        Value::Object(map) => {
            assert!(!map.is_empty(), "{path} is an empty object");
            for (key, inner) in map {
                assert!(!inner.is_null(), "{path}.{key} is null");
                assert_filled(inner, &format!("{path}.{key}"));
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                assert_filled(item, &format!("{path}[{i}]"));
            }
        }
        _ => {}
    }
}

fn check<D: Dto>() {
    let fields = D::fields();
    let type_name = std::any::type_name::<D>();

    assert!(!fields.is_empty(), "{type_name} has no fields");

    let wire_keys: HashSet<&str> = fields.iter().map(|f| f.wire_key).collect();
    assert_eq!(fields.len(), wire_keys.len(), "{type_name} repeats a wire key");

    let names: HashSet<&str> = fields.iter().map(|f| f.name).collect();
    assert_eq!(fields.len(), names.len(), "{type_name} repeats a field name");

    let dto = populated::<D>();
    let array = dto.to_array();

    assert_eq!(fields.len(), array.len());
    assert_eq!(sample_array::<D>(), array, "{type_name}");
    assert_filled(&Value::Object(array), type_name);

    let parsed = D::from_json(&dto.to_json(false)).unwrap();
    assert_eq!(dto, parsed, "{type_name}");

    let empty = D::from_json(&D::default().to_json(false)).unwrap();
    assert_eq!(D::default(), empty, "{type_name}");
}

#[test]
fn samples_fill_nested_dtos() {
    let array = sample_array::<AuthorizationResponse>();

    let client = array["client"].as_object().unwrap();
    assert_eq!(Client::fields().len(), client.len());
    assert!(client["extension"].as_object().is_some_and(|e| !e.is_empty()));

    let hsks = sample_array::<Service>()["hsks"].clone();
    assert_eq!(2, hsks.as_array().unwrap().len());
    assert_eq!(Hsk::fields().len(), hsks[0].as_object().unwrap().len());
}

macro_rules! check_all {
    ($($dto:ty),+ $(,)?) => {
        $(check::<$dto>();)+
    };
}

#[test]
fn authorization_dtos() {
    check_all!(
        AuthorizationRequest,
        AuthorizationResponse,
        AuthorizationFailRequest,
        AuthorizationFailResponse,
        AuthorizationIssueRequest,
        AuthorizationIssueResponse,
        PushedAuthReqRequest,
        PushedAuthReqResponse,
        GmRequest,
        GmResponse,
    );
}

#[test]
fn token_dtos() {
    check_all!(
        TokenRequest,
        TokenResponse,
        TokenFailRequest,
        TokenFailResponse,
        TokenIssueRequest,
        TokenIssueResponse,
        TokenCreateRequest,
        TokenCreateResponse,
        TokenUpdateRequest,
        TokenUpdateResponse,
        TokenListResponse,
        TokenRevokeRequest,
        TokenRevokeResponse,
        IntrospectionRequest,
        IntrospectionResponse,
        StandardIntrospectionRequest,
        StandardIntrospectionResponse,
        RevocationRequest,
        RevocationResponse,
        UserInfoRequest,
        UserInfoResponse,
        UserInfoIssueRequest,
        UserInfoIssueResponse,
    );
}

#[test]
fn backchannel_and_device_dtos() {
    check_all!(
        BackchannelAuthenticationRequest,
        BackchannelAuthenticationResponse,
        BackchannelAuthenticationIssueRequest,
        BackchannelAuthenticationIssueResponse,
        BackchannelAuthenticationFailRequest,
        BackchannelAuthenticationFailResponse,
        BackchannelAuthenticationCompleteRequest,
        BackchannelAuthenticationCompleteResponse,
        DeviceAuthorizationRequest,
        DeviceAuthorizationResponse,
        DeviceVerificationRequest,
        DeviceVerificationResponse,
        DeviceCompleteRequest,
        DeviceCompleteResponse,
    );
}

#[test]
fn client_and_service_dtos() {
    check_all!(
        Client,
        ClientListResponse,
        ClientSecretUpdateRequest,
        ClientSecretUpdateResponse,
        ClientSecretRefreshResponse,
        ClientAuthorizationGetListRequest,
        ClientAuthorizationUpdateRequest,
        ClientAuthorizationDeleteRequest,
        AuthorizedClientListResponse,
        GrantedScopesRequest,
        GrantedScopesGetResponse,
        RequestableScopes,
        ClientRegistrationRequest,
        ClientRegistrationResponse,
        Service,
        ServiceListResponse,
    );
}

#[test]
fn shared_and_key_dtos() {
    check_all!(
        ApiResponse,
        Pair,
        Property,
        NamedUri,
        Scope,
        SnsCredentials,
        DynamicScope,
        AuthzDetailsElement,
        AuthzDetails,
        AccessToken,
        ClientExtension,
        Hsk,
        TaggedValue,
        JoseVerifyRequest,
        JoseVerifyResponse,
        HskCreateRequest,
        HskResponse,
        HskListResponse,
    );
}
