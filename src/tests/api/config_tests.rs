use std::{collections::HashMap, time::Duration};

use crate::{
    api::{ApiVersion, AuthleteConfiguration, DEFAULT_BASE_URL, DEFAULT_CONNECTION_TIMEOUT},
    types::AuthleteError,
};

#[test]
fn defaults() {
    let config = AuthleteConfiguration::new();

    assert_eq!(DEFAULT_BASE_URL, config.base_url());
    assert_eq!(ApiVersion::V2, config.api_version());
    assert_eq!(DEFAULT_CONNECTION_TIMEOUT, config.connection_timeout());
    assert_eq!(None, config.service_api_key());
    assert_eq!(None, config.proxy());
}

#[test]
fn api_version_parsing() {
    assert_eq!(ApiVersion::V2, "V2".parse().unwrap());
    assert_eq!(ApiVersion::V3, "v3".parse().unwrap());
    assert_eq!(ApiVersion::V3, " 3 ".parse().unwrap());
    assert!(matches!(
        "V4".parse::<ApiVersion>(),
        Err(AuthleteError::Configuration(_))
    ));
    assert_eq!("V3", ApiVersion::V3.to_string());
}

#[test]
fn reads_variables_through_a_lookup() {
    let variables: HashMap<&str, &str> = HashMap::from([
        ("AUTHLETE_BASE_URL", "https://us.authlete.com"),
        ("AUTHLETE_SERVICE_APIKEY", "715948317"),
        ("AUTHLETE_SERVICE_APISECRET", "secret"),
        ("AUTHLETE_SERVICE_ACCESSTOKEN", "token"),
        ("AUTHLETE_SERVICE_ID", "  sid  "),
        ("AUTHLETE_API_VERSION", "V3"),
        ("AUTHLETE_CONNECTION_TIMEOUT", "12"),
        ("AUTHLETE_PROXY", ""),
    ]);

    let config =
        AuthleteConfiguration::from_lookup(|name| variables.get(name).map(|v| v.to_string()))
            .unwrap();

    assert_eq!("https://us.authlete.com", config.base_url());
    assert_eq!(Some("715948317"), config.service_api_key());
    assert_eq!(Some("secret"), config.service_api_secret());
    assert_eq!(Some("token"), config.service_access_token());
    assert_eq!(Some("sid"), config.service_id());
    assert_eq!(ApiVersion::V3, config.api_version());
    assert_eq!(Duration::from_secs(12), config.connection_timeout());
    assert_eq!(None, config.proxy());
    assert_eq!(None, config.service_owner_api_key());
}

#[test]
fn reads_an_ini_text() {
    let ini = r#"
# Authlete settings
base_url = https://jp.authlete.com
api_version = "V2"

[service_owner]
api_key = 1234
api_secret = owner-secret

; the service itself
[service]
api_key = "5678"
api_secret = service secret with spaces
id = 5678
unknown = ignored
"#;

    let config = AuthleteConfiguration::from_ini(ini).unwrap();

    assert_eq!("https://jp.authlete.com", config.base_url());
    assert_eq!(ApiVersion::V2, config.api_version());
    assert_eq!(Some("1234"), config.service_owner_api_key());
    assert_eq!(Some("owner-secret"), config.service_owner_api_secret());
    assert_eq!(Some("5678"), config.service_api_key());
    assert_eq!(Some("service secret with spaces"), config.service_api_secret());
    assert_eq!(Some("5678"), config.service_id());
}

#[test]
fn malformed_ini_is_a_configuration_error() {
    let ini = "base_url = https://a.example\n[service\napi_key = 1\n";

    let error = AuthleteConfiguration::from_ini(ini).unwrap_err();

    assert!(matches!(error, AuthleteError::Configuration(_)));
}

#[test]
fn ini_without_known_keys_keeps_defaults() {
    let config = AuthleteConfiguration::from_ini("[other]\nname = value\n").unwrap();

    assert_eq!(DEFAULT_BASE_URL, config.base_url());
    assert_eq!(None, config.service_id());
}

#[test]
fn lookup_ignores_variables_outside_the_settings() {
    let config = AuthleteConfiguration::from_lookup(|name| match name {
        "AUTHLETE_SERVICEOWNER_ACCESSTOKEN" => Some("owner-token".to_string()),
        "AUTHLETE_CONNECTION_TIMEOUT" => Some("   ".to_string()),
        _ => None,
    })
    .unwrap();

    assert_eq!(Some("owner-token"), config.service_owner_access_token());
    assert_eq!(DEFAULT_CONNECTION_TIMEOUT, config.connection_timeout());
    assert_eq!(None, config.service_access_token());
}

#[test]
fn lookup_reports_bad_values() {
    let result = AuthleteConfiguration::from_lookup(|name| {
        (name == "AUTHLETE_API_VERSION").then(|| "V9".to_string())
    });

    assert!(matches!(result, Err(AuthleteError::Configuration(_))));
}

#[test]
fn bad_values_are_configuration_errors() {
    assert!(matches!(
        AuthleteConfiguration::from_ini("connection_timeout = soon"),
        Err(AuthleteError::Configuration(_))
    ));
    assert!(matches!(
        AuthleteConfiguration::from_ini("api_version = 1"),
        Err(AuthleteError::Configuration(_))
    ));
}

#[test]
fn setters_chain() {
    let config = AuthleteConfiguration::new()
        .set_base_url("https://br.authlete.com")
        .set_service_owner_access_token("owner-token")
        .set_service_access_token("service-token")
        .set_service_id("42")
        .set_api_version(ApiVersion::V3)
        .set_connection_timeout(Duration::from_millis(1500))
        .set_proxy("http://proxy.example.com:3128");

    assert_eq!("https://br.authlete.com", config.base_url());
    assert_eq!(Some("owner-token"), config.service_owner_access_token());
    assert_eq!(Some("service-token"), config.service_access_token());
    assert_eq!(Some("42"), config.service_id());
    assert_eq!(Duration::from_millis(1500), config.connection_timeout());
    assert_eq!(
        "http://proxy.example.com:3128/",
        config.proxy_url().unwrap().unwrap().as_str()
    );
}

#[test]
fn invalid_urls_are_reported() {
    let config = AuthleteConfiguration::new()
        .set_base_url("not a url")
        .set_proxy("::");

    assert!(matches!(
        config.url_for("/api/auth/token"),
        Err(AuthleteError::Configuration(_))
    ));
    assert!(matches!(
        config.proxy_url(),
        Err(AuthleteError::Configuration(_))
    ));
}
