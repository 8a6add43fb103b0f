//! # Configuration
//! Where the Authlete API lives and which credentials to present to it

use std::{fmt, str::FromStr, time::Duration};

use config::{Config, ConfigError, Environment, File, FileFormat, Map};
use url::Url;

use crate::types::{AuthleteError, AuthleteResult};

/// Base URL of the shared Authlete cloud
pub const DEFAULT_BASE_URL: &str = "https://api.authlete.com";

/// Connection timeout used when none is configured
pub const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

const ENV_PREFIX: &str = "AUTHLETE";

/// Environment variable and dotted setting key of every setting
const SETTINGS: &[(&str, &str)] = &[
    ("AUTHLETE_BASE_URL", "base_url"),
    ("AUTHLETE_SERVICEOWNER_APIKEY", "service_owner.api_key"),
    ("AUTHLETE_SERVICEOWNER_APISECRET", "service_owner.api_secret"),
    ("AUTHLETE_SERVICEOWNER_ACCESSTOKEN", "service_owner.access_token"),
    ("AUTHLETE_SERVICE_APIKEY", "service.api_key"),
    ("AUTHLETE_SERVICE_APISECRET", "service.api_secret"),
    ("AUTHLETE_SERVICE_ACCESSTOKEN", "service.access_token"),
    ("AUTHLETE_SERVICE_ID", "service.id"),
    ("AUTHLETE_API_VERSION", "api_version"),
    ("AUTHLETE_CONNECTION_TIMEOUT", "connection_timeout"),
    ("AUTHLETE_PROXY", "proxy"),
];

fn configuration_error(error: ConfigError) -> AuthleteError {
    AuthleteError::Configuration(error.to_string())
}

/// Generation of the Authlete API to talk to
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    /// Legacy paths (`/api/auth/token`), HTTP Basic authentication with API
    /// key and secret pairs
    #[default]
    V2,
    /// Service-scoped paths (`/api/{serviceId}/auth/token`), bearer access tokens
    V3,
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiVersion::V2 => f.write_str("V2"),
            ApiVersion::V3 => f.write_str("V3"),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = AuthleteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "V2" | "2" => Ok(ApiVersion::V2),
            "V3" | "3" => Ok(ApiVersion::V3),
            _ => Err(AuthleteError::Configuration(format!(
                "unsupported API version '{s}'"
            ))),
        }
    }
}

/// # AuthleteConfiguration
/// Settings of an [AuthleteApi](crate::api::AuthleteApi).
///
/// Built with the chaining `set_*` methods, read from the environment with
/// [AuthleteConfiguration::from_env] or read from an INI style properties
/// file with [AuthleteConfiguration::from_ini].
///
/// V2 calls authenticate with the service owner or service API key and
/// secret, V3 calls with the service owner or service access token.
#[derive(Debug, Clone)]
pub struct AuthleteConfiguration {
    base_url: String,
    service_owner_api_key: Option<String>,
    service_owner_api_secret: Option<String>,
    service_owner_access_token: Option<String>,
    service_api_key: Option<String>,
    service_api_secret: Option<String>,
    service_access_token: Option<String>,
    service_id: Option<String>,
    api_version: ApiVersion,
    connection_timeout: Duration,
    proxy: Option<String>,
}

impl Default for AuthleteConfiguration {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            service_owner_api_key: None,
            service_owner_api_secret: None,
            service_owner_access_token: None,
            service_api_key: None,
            service_api_secret: None,
            service_access_token: None,
            service_id: None,
            api_version: ApiVersion::default(),
            connection_timeout: DEFAULT_CONNECTION_TIMEOUT,
            proxy: None,
        }
    }
}

impl AuthleteConfiguration {
    /// Configuration with the default base URL, V2 and a 5 second timeout
    pub fn new() -> Self {
        Self::default()
    }

    /// # From Env
    /// Reads the configuration from the process environment.
    ///
    /// | variable | setting |
    /// |---|---|
    /// | `AUTHLETE_BASE_URL` | base URL |
    /// | `AUTHLETE_SERVICEOWNER_APIKEY` | service owner API key |
    /// | `AUTHLETE_SERVICEOWNER_APISECRET` | service owner API secret |
    /// | `AUTHLETE_SERVICEOWNER_ACCESSTOKEN` | service owner access token |
    /// | `AUTHLETE_SERVICE_APIKEY` | service API key |
    /// | `AUTHLETE_SERVICE_APISECRET` | service API secret |
    /// | `AUTHLETE_SERVICE_ACCESSTOKEN` | service access token |
    /// | `AUTHLETE_SERVICE_ID` | service ID |
    /// | `AUTHLETE_API_VERSION` | `V2` or `V3` |
    /// | `AUTHLETE_CONNECTION_TIMEOUT` | connection timeout in seconds |
    /// | `AUTHLETE_PROXY` | proxy URL |
    ///
    /// Empty variables are ignored.
    pub fn from_env() -> AuthleteResult<Self> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    /// Like [AuthleteConfiguration::from_env], reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> AuthleteResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let variables: Map<String, String> = SETTINGS
            .iter()
            .filter_map(|(variable, _)| lookup(variable).map(|v| (variable.to_string(), v)))
            .collect();

        Self::from_environment(Environment::with_prefix(ENV_PREFIX).source(Some(variables)))
    }

    fn from_environment(environment: Environment) -> AuthleteResult<Self> {
        let settings = Config::builder()
            .add_source(environment.ignore_empty(true))
            .build()
            .map_err(configuration_error)?;

        // the environment source strips the prefix and lowercases the rest
        Self::from_settings(
            &settings,
            SETTINGS.iter().map(|(variable, key)| {
                let name = variable[ENV_PREFIX.len() + 1..].to_ascii_lowercase();
                (name, *key)
            }),
        )
    }

    /// # From Ini
    /// Reads an INI style properties text.
    ///
    /// Keys are `base_url`, `service_owner.api_key`, `service_owner.api_secret`,
    /// `service_owner.access_token`, `service.api_key`, `service.api_secret`,
    /// `service.access_token`, `service.id`, `api_version`,
    /// `connection_timeout` (seconds) and `proxy`. A `[section]` header
    /// prefixes the keys below it, so `[service]` followed by `api_key = ...`
    /// sets `service.api_key`. Lines starting with `#` or `;` are comments,
    /// values may be wrapped in double quotes and unknown keys are ignored.
    pub fn from_ini(text: &str) -> AuthleteResult<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(text, FileFormat::Ini))
            .build()
            .map_err(configuration_error)?;

        Self::from_settings(
            &settings,
            SETTINGS.iter().map(|(_, key)| (key.to_string(), *key)),
        )
    }

    /// Applies every `(source key, setting key)` pair present in `settings`
    fn from_settings(
        settings: &Config,
        keys: impl IntoIterator<Item = (String, &'static str)>,
    ) -> AuthleteResult<Self> {
        let mut config = Self::default();

        for (source_key, key) in keys {
            match settings.get_string(&source_key) {
                Ok(value) if value.trim().is_empty() => {}
                Ok(value) => config.apply(key, value.trim())?,
                Err(ConfigError::NotFound(_)) => {}
                Err(e) => return Err(configuration_error(e)),
            }
        }

        Ok(config)
    }

    fn apply(&mut self, key: &str, value: &str) -> AuthleteResult<()> {
        let owned = Some(value.to_string());

        match key {
            "base_url" => self.base_url = value.to_string(),
            "service_owner.api_key" => self.service_owner_api_key = owned,
            "service_owner.api_secret" => self.service_owner_api_secret = owned,
            "service_owner.access_token" => self.service_owner_access_token = owned,
            "service.api_key" => self.service_api_key = owned,
            "service.api_secret" => self.service_api_secret = owned,
            "service.access_token" => self.service_access_token = owned,
            "service.id" => self.service_id = owned,
            "api_version" => self.api_version = value.parse()?,
            "connection_timeout" => {
                let seconds = value.parse::<u64>().map_err(|_| {
                    AuthleteError::Configuration(format!(
                        "connection_timeout must be a number of seconds, got '{value}'"
                    ))
                })?;
                self.connection_timeout = Duration::from_secs(seconds);
            }
            "proxy" => self.proxy = owned,
            _ => {}
        }

        Ok(())
    }

    /// Sets the base URL, e.g. `https://us.authlete.com`
    pub fn set_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the service owner API key and secret (V2)
    pub fn set_service_owner_credentials(
        mut self,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        self.service_owner_api_key = Some(api_key.into());
        self.service_owner_api_secret = Some(api_secret.into());
        self
    }

    /// Sets the service owner access token (V3)
    pub fn set_service_owner_access_token(mut self, token: impl Into<String>) -> Self {
        self.service_owner_access_token = Some(token.into());
        self
    }

    /// Sets the service API key and secret (V2)
    pub fn set_service_credentials(
        mut self,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        self.service_api_key = Some(api_key.into());
        self.service_api_secret = Some(api_secret.into());
        self
    }

    /// Sets the service access token (V3)
    pub fn set_service_access_token(mut self, token: impl Into<String>) -> Self {
        self.service_access_token = Some(token.into());
        self
    }

    /// Sets the service ID substituted into `{serviceId}` path placeholders
    pub fn set_service_id(mut self, service_id: impl Into<String>) -> Self {
        self.service_id = Some(service_id.into());
        self
    }

    /// Sets the API version
    pub fn set_api_version(mut self, api_version: ApiVersion) -> Self {
        self.api_version = api_version;
        self
    }

    /// Sets the connection timeout
    pub fn set_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Routes every call through the proxy at `proxy`
    pub fn set_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Service owner API key
    pub fn service_owner_api_key(&self) -> Option<&str> {
        self.service_owner_api_key.as_deref()
    }

    /// Service owner API secret
    pub fn service_owner_api_secret(&self) -> Option<&str> {
        self.service_owner_api_secret.as_deref()
    }

    /// Service owner access token
    pub fn service_owner_access_token(&self) -> Option<&str> {
        self.service_owner_access_token.as_deref()
    }

    /// Service API key
    pub fn service_api_key(&self) -> Option<&str> {
        self.service_api_key.as_deref()
    }

    /// Service API secret
    pub fn service_api_secret(&self) -> Option<&str> {
        self.service_api_secret.as_deref()
    }

    /// Service access token
    pub fn service_access_token(&self) -> Option<&str> {
        self.service_access_token.as_deref()
    }

    /// Service ID
    pub fn service_id(&self) -> Option<&str> {
        self.service_id.as_deref()
    }

    /// API version
    pub fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Connection timeout
    pub fn connection_timeout(&self) -> Duration {
        self.connection_timeout
    }

    /// Proxy URL
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    pub(crate) fn url_for(&self, path: &str) -> AuthleteResult<Url> {
        Url::parse(&format!("{}{path}", self.base_url.trim_end_matches('/'))).map_err(|e| {
            AuthleteError::Configuration(format!("invalid base url '{}': {e}", self.base_url))
        })
    }

    pub(crate) fn proxy_url(&self) -> AuthleteResult<Option<Url>> {
        self.proxy
            .as_deref()
            .map(|p| {
                Url::parse(p).map_err(|e| {
                    AuthleteError::Configuration(format!("invalid proxy url '{p}': {e}"))
                })
            })
            .transpose()
    }
}
