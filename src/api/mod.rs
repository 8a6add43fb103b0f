//! # Authlete API
//! Authenticated calls to the Authlete API.
//!
//! An [AuthleteApi] holds an [AuthleteConfiguration]. Calls take the
//! [AuthleteHttpClient] to send them with, and an [Endpoint] from the static
//! [endpoints] table that fixes the request and response types.
//!
//! ```ignore
//! let api = AuthleteApi::new(AuthleteConfiguration::from_env()?);
//!
//! let mut request = TokenRequest::new();
//! request.set_parameters("grant_type=authorization_code&code=...".to_string());
//!
//! let response = api.call(&http_client, &endpoints::TOKEN, &request).await?;
//! ```

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::{
    dto::{ClientListResponse, ServiceListResponse, TokenListResponse},
    helpers::validation,
    types::{ApiError, AuthleteError, AuthleteHttpClient, AuthleteResult, HttpRequest},
    web::BasicCredentials,
};

mod body;
mod config;
mod endpoint;

pub use body::{RequestBody, ResponseBody};
pub use config::{
    ApiVersion, AuthleteConfiguration, DEFAULT_BASE_URL, DEFAULT_CONNECTION_TIMEOUT,
};
pub use endpoint::{endpoints, CredentialScope, Endpoint};

/// Path parameters, query parameters and body of one call
pub struct ApiCall<'a, Req> {
    body: Option<&'a Req>,
    path_params: HashMap<&'static str, String>,
    query: Vec<(String, String)>,
}

impl<'a, Req> ApiCall<'a, Req> {
    /// A call with no parameters and no body
    pub fn new() -> Self {
        Self {
            body: None,
            path_params: HashMap::new(),
            query: vec![],
        }
    }

    /// Sends `body` as JSON
    pub fn body(mut self, body: &'a Req) -> Self {
        self.body = Some(body);
        self
    }

    /// Substitutes `value` into the `{name}` placeholder of the path
    pub fn path_param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.path_params.insert(name, value.to_string());
        self
    }

    /// Appends a query parameter
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Appends a query parameter when `value` is `Some`
    pub fn query_opt(self, name: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.query(name, v),
            None => self,
        }
    }
}

impl<Req> Default for ApiCall<'_, Req> {
    fn default() -> Self {
        Self::new()
    }
}

/// # AuthleteApi
/// Client of the Authlete API
#[derive(Debug, Clone)]
pub struct AuthleteApi {
    config: AuthleteConfiguration,
}

impl AuthleteApi {
    /// Creates a client from its configuration
    pub fn new(config: AuthleteConfiguration) -> Self {
        Self { config }
    }

    /// The configuration this client was created with
    pub fn config(&self) -> &AuthleteConfiguration {
        &self.config
    }

    /// # Execute
    /// Calls `endpoint` and decodes the response body into `Res`.
    ///
    /// Non-2xx responses and transport failures are returned as
    /// [AuthleteError::Api].
    ///
    /// - `http_client` : The http client to make the request
    /// - `endpoint` : The endpoint to call, see [endpoints]
    /// - `call` : Path parameters, query parameters and body
    pub async fn execute<T, Req, Res>(
        &self,
        http_client: &T,
        endpoint: &Endpoint<Req, Res>,
        call: ApiCall<'_, Req>,
    ) -> AuthleteResult<Res>
    where
        T: AuthleteHttpClient,
        Req: RequestBody,
        Res: ResponseBody,
    {
        let path = self.resolve_path(endpoint.path(self.config.api_version()), &call.path_params)?;

        let mut url = self.config.url_for(&path)?;

        if !call.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&call.query);
        }

        let mut req = HttpRequest::new(url)
            .method(endpoint.method)
            .header("accept", "application/json")
            .header("authorization", self.authorization(endpoint.scope)?)
            .connection_timeout(self.config.connection_timeout())
            .proxy(self.config.proxy_url()?);

        if let Some(body) = call.body.and_then(RequestBody::to_body) {
            req = req.json(body);
        }

        debug!(
            endpoint = endpoint.name,
            method = endpoint.method.as_str(),
            path = path.as_str(),
            "calling Authlete API"
        );

        let response = http_client.request(req).await.map_err(|e| {
            warn!(endpoint = endpoint.name, error = e.as_str(), "Authlete API unreachable");
            ApiError::from_transport(e)
        })?;

        if !response.is_success() {
            warn!(
                endpoint = endpoint.name,
                status = response.status_code,
                "Authlete API returned an error"
            );
            return Err(
                ApiError::from_response(response.status_code, response.headers, response.body)
                    .into(),
            );
        }

        Res::from_body(response.body.as_deref())
    }

    /// # Call
    /// Sends `request` to an endpoint without path parameters
    ///
    /// - `http_client` : The http client to make the request
    /// - `endpoint` : The endpoint to call, see [endpoints]
    /// - `request` : The request body
    pub async fn call<T, Req, Res>(
        &self,
        http_client: &T,
        endpoint: &Endpoint<Req, Res>,
        request: &Req,
    ) -> AuthleteResult<Res>
    where
        T: AuthleteHttpClient,
        Req: RequestBody,
        Res: ResponseBody,
    {
        self.execute(http_client, endpoint, ApiCall::new().body(request))
            .await
    }

    /// # Client List
    /// Lists the clients of the service, `/client/get/list`.
    ///
    /// The range is `[start, end)`; Authlete answers with an empty list for an
    /// empty range and still reports the total count.
    ///
    /// - `http_client` : The http client to make the request
    /// - `developer` : Only list the clients of this developer
    /// - `start` : Index of the first client
    /// - `end` : Index after the last client
    pub async fn get_client_list<T>(
        &self,
        http_client: &T,
        developer: Option<&str>,
        start: Option<i64>,
        end: Option<i64>,
    ) -> AuthleteResult<ClientListResponse>
    where
        T: AuthleteHttpClient,
    {
        let call = Self::range(ApiCall::new().query_opt("developer", developer), start, end)?;

        self.execute(http_client, &endpoints::CLIENT_GET_LIST, call)
            .await
    }

    /// # Service List
    /// Lists the services of the service owner, `/service/get/list`
    ///
    /// - `http_client` : The http client to make the request
    /// - `start` : Index of the first service
    /// - `end` : Index after the last service
    pub async fn get_service_list<T>(
        &self,
        http_client: &T,
        start: Option<i64>,
        end: Option<i64>,
    ) -> AuthleteResult<ServiceListResponse>
    where
        T: AuthleteHttpClient,
    {
        let call = Self::range(ApiCall::new(), start, end)?;

        self.execute(http_client, &endpoints::SERVICE_GET_LIST, call)
            .await
    }

    /// # Token List
    /// Lists access tokens, `/auth/token/get/list`
    ///
    /// - `http_client` : The http client to make the request
    /// - `client_identifier` : Only list tokens of this client (ID or alias)
    /// - `subject` : Only list tokens of this end-user
    /// - `start` : Index of the first token
    /// - `end` : Index after the last token
    pub async fn get_token_list<T>(
        &self,
        http_client: &T,
        client_identifier: Option<&str>,
        subject: Option<&str>,
        start: Option<i64>,
        end: Option<i64>,
    ) -> AuthleteResult<TokenListResponse>
    where
        T: AuthleteHttpClient,
    {
        let call = ApiCall::new()
            .query_opt("clientIdentifier", client_identifier)
            .query_opt("subject", subject);
        let call = Self::range(call, start, end)?;

        self.execute(http_client, &endpoints::TOKEN_GET_LIST, call)
            .await
    }

    /// # Service Configuration
    /// Fetches the OpenID Provider metadata of the service as JSON text
    ///
    /// - `http_client` : The http client to make the request
    /// - `pretty` : Ask Authlete to pretty-print the JSON
    pub async fn get_service_configuration<T>(
        &self,
        http_client: &T,
        pretty: bool,
    ) -> AuthleteResult<String>
    where
        T: AuthleteHttpClient,
    {
        let call = ApiCall::new().query("pretty", pretty);

        self.execute(http_client, &endpoints::SERVICE_CONFIGURATION, call)
            .await
    }

    /// # Service JWKS
    /// Fetches the JWK Set of the service as JSON text
    ///
    /// - `http_client` : The http client to make the request
    /// - `pretty` : Ask Authlete to pretty-print the JSON
    /// - `include_private_keys` : Include private keys in the set
    pub async fn get_service_jwks<T>(
        &self,
        http_client: &T,
        pretty: bool,
        include_private_keys: bool,
    ) -> AuthleteResult<String>
    where
        T: AuthleteHttpClient,
    {
        let call = ApiCall::new()
            .query("pretty", pretty)
            .query("includePrivateKeys", include_private_keys);

        self.execute(http_client, &endpoints::SERVICE_JWKS_GET, call)
            .await
    }

    fn range(
        call: ApiCall<'_, ()>,
        start: Option<i64>,
        end: Option<i64>,
    ) -> AuthleteResult<ApiCall<'_, ()>> {
        if let Some(start) = start {
            validation::ensure_not_negative("start", start)?;
        }

        if let Some(end) = end {
            validation::ensure_not_negative("end", end)?;
        }

        Ok(call.query_opt("start", start).query_opt("end", end))
    }

    fn resolve_path(
        &self,
        template: &str,
        params: &HashMap<&'static str, String>,
    ) -> AuthleteResult<String> {
        let mut path = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let close = rest[open..].find('}').map(|i| open + i).ok_or_else(|| {
                AuthleteError::Configuration(format!("unterminated placeholder in '{template}'"))
            })?;

            let name = &rest[open + 1..close];

            let value = params
                .get(name)
                .cloned()
                .or_else(|| self.default_path_param(name))
                .ok_or_else(|| {
                    AuthleteError::Configuration(format!("missing path parameter '{name}'"))
                })?;

            path.push_str(&rest[..open]);
            path.push_str(&urlencoding::encode(&value));
            rest = &rest[close + 1..];
        }

        path.push_str(rest);

        Ok(path)
    }

    fn default_path_param(&self, name: &str) -> Option<String> {
        match name {
            "serviceId" => self
                .config
                .service_id()
                .or(self.config.service_api_key())
                .map(str::to_string),
            _ => None,
        }
    }

    fn authorization(&self, scope: CredentialScope) -> AuthleteResult<String> {
        let config = &self.config;

        let header = match (config.api_version(), scope) {
            (ApiVersion::V2, CredentialScope::ServiceOwner) => config
                .service_owner_api_key()
                .zip(config.service_owner_api_secret())
                .map(|(key, secret)| BasicCredentials::new(key, secret).format()),
            (ApiVersion::V2, CredentialScope::Service) => config
                .service_api_key()
                .zip(config.service_api_secret())
                .map(|(key, secret)| BasicCredentials::new(key, secret).format()),
            (ApiVersion::V3, CredentialScope::ServiceOwner) => config
                .service_owner_access_token()
                .map(|token| format!("Bearer {token}")),
            (ApiVersion::V3, CredentialScope::Service) => config
                .service_access_token()
                .map(|token| format!("Bearer {token}")),
        };

        header.ok_or_else(|| {
            AuthleteError::Configuration(format!(
                "no {} credentials configured for {:?}",
                config.api_version(),
                scope
            ))
        })
    }
}

#[cfg(test)]
#[path = "../tests/api/mod.rs"]
mod api_tests;
