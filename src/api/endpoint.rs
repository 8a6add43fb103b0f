//! # Endpoints
//! The static table of Authlete API endpoints.
//!
//! Every endpoint is a typed constant in [endpoints]: its request and
//! response types, HTTP method, path templates and the credentials it is
//! called with. [AuthleteApi::execute](super::AuthleteApi::execute) is the
//! single routine that calls any of them.

use std::{fmt, marker::PhantomData};

use crate::types::HttpMethod;

use super::config::ApiVersion;

/// Whose credentials an endpoint is called with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialScope {
    /// The service owner, for managing services
    ServiceOwner,
    /// A service, for everything else
    Service,
}

/// One endpoint of the Authlete API.
///
/// `Req` is the body sent (`()` for none) and `Res` the type the response
/// body is decoded into (`()` to discard it, `String` to keep it raw).
pub struct Endpoint<Req, Res> {
    /// Short identifier used in logs
    pub name: &'static str,
    /// HTTP method
    pub method: HttpMethod,
    /// Path template of the V2 API
    pub v2_path: &'static str,
    /// Path template of the V3 API
    pub v3_path: &'static str,
    /// Credentials to present
    pub scope: CredentialScope,
    marker: PhantomData<fn(&Req) -> Res>,
}

impl<Req, Res> Endpoint<Req, Res> {
    /// Declares an endpoint. Path templates hold `{name}` placeholders.
    pub const fn new(
        name: &'static str,
        method: HttpMethod,
        v2_path: &'static str,
        v3_path: &'static str,
        scope: CredentialScope,
    ) -> Self {
        Self {
            name,
            method,
            v2_path,
            v3_path,
            scope,
            marker: PhantomData,
        }
    }

    /// Path template for `version`
    pub fn path(&self, version: ApiVersion) -> &'static str {
        match version {
            ApiVersion::V2 => self.v2_path,
            ApiVersion::V3 => self.v3_path,
        }
    }
}

impl<Req, Res> Clone for Endpoint<Req, Res> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Req, Res> Copy for Endpoint<Req, Res> {}

impl<Req, Res> fmt::Debug for Endpoint<Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("name", &self.name)
            .field("method", &self.method)
            .field("v2_path", &self.v2_path)
            .field("v3_path", &self.v3_path)
            .field("scope", &self.scope)
            .finish()
    }
}

/// Every endpoint of the Authlete API
pub mod endpoints {
    use crate::dto::*;
    use crate::types::HttpMethod;

    use super::{CredentialScope, Endpoint};

    /// `POST /api/auth/authorization`
    pub const AUTHORIZATION: Endpoint<AuthorizationRequest, AuthorizationResponse> = Endpoint::new(
        "authorization",
        HttpMethod::POST,
        "/api/auth/authorization",
        "/api/{serviceId}/auth/authorization",
        CredentialScope::Service,
    );

    /// `POST /api/auth/authorization/fail`
    pub const AUTHORIZATION_FAIL: Endpoint<AuthorizationFailRequest, AuthorizationFailResponse> = Endpoint::new(
        "authorization_fail",
        HttpMethod::POST,
        "/api/auth/authorization/fail",
        "/api/{serviceId}/auth/authorization/fail",
        CredentialScope::Service,
    );

    /// `POST /api/auth/authorization/issue`
    pub const AUTHORIZATION_ISSUE: Endpoint<AuthorizationIssueRequest, AuthorizationIssueResponse> = Endpoint::new(
        "authorization_issue",
        HttpMethod::POST,
        "/api/auth/authorization/issue",
        "/api/{serviceId}/auth/authorization/issue",
        CredentialScope::Service,
    );

    /// `POST /api/auth/token`
    pub const TOKEN: Endpoint<TokenRequest, TokenResponse> = Endpoint::new(
        "token",
        HttpMethod::POST,
        "/api/auth/token",
        "/api/{serviceId}/auth/token",
        CredentialScope::Service,
    );

    /// `POST /api/auth/token/fail`
    pub const TOKEN_FAIL: Endpoint<TokenFailRequest, TokenFailResponse> = Endpoint::new(
        "token_fail",
        HttpMethod::POST,
        "/api/auth/token/fail",
        "/api/{serviceId}/auth/token/fail",
        CredentialScope::Service,
    );

    /// `POST /api/auth/token/issue`
    pub const TOKEN_ISSUE: Endpoint<TokenIssueRequest, TokenIssueResponse> = Endpoint::new(
        "token_issue",
        HttpMethod::POST,
        "/api/auth/token/issue",
        "/api/{serviceId}/auth/token/issue",
        CredentialScope::Service,
    );

    /// `POST /api/auth/token/create`
    pub const TOKEN_CREATE: Endpoint<TokenCreateRequest, TokenCreateResponse> = Endpoint::new(
        "token_create",
        HttpMethod::POST,
        "/api/auth/token/create",
        "/api/{serviceId}/auth/token/create",
        CredentialScope::Service,
    );

    /// `POST /api/auth/token/update`
    pub const TOKEN_UPDATE: Endpoint<TokenUpdateRequest, TokenUpdateResponse> = Endpoint::new(
        "token_update",
        HttpMethod::POST,
        "/api/auth/token/update",
        "/api/{serviceId}/auth/token/update",
        CredentialScope::Service,
    );

    /// `GET /api/auth/token/get/list`
    pub const TOKEN_GET_LIST: Endpoint<(), TokenListResponse> = Endpoint::new(
        "token_get_list",
        HttpMethod::GET,
        "/api/auth/token/get/list",
        "/api/{serviceId}/auth/token/get/list",
        CredentialScope::Service,
    );

    /// `POST /api/auth/token/revoke`
    pub const TOKEN_REVOKE: Endpoint<TokenRevokeRequest, TokenRevokeResponse> = Endpoint::new(
        "token_revoke",
        HttpMethod::POST,
        "/api/auth/token/revoke",
        "/api/{serviceId}/auth/token/revoke",
        CredentialScope::Service,
    );

    /// `DELETE /api/auth/token/delete/{accessTokenIdentifier}`
    pub const TOKEN_DELETE: Endpoint<(), ()> = Endpoint::new(
        "token_delete",
        HttpMethod::DELETE,
        "/api/auth/token/delete/{accessTokenIdentifier}",
        "/api/{serviceId}/auth/token/delete/{accessTokenIdentifier}",
        CredentialScope::Service,
    );

    /// `POST /api/auth/revocation`
    pub const REVOCATION: Endpoint<RevocationRequest, RevocationResponse> = Endpoint::new(
        "revocation",
        HttpMethod::POST,
        "/api/auth/revocation",
        "/api/{serviceId}/auth/revocation",
        CredentialScope::Service,
    );

    /// `POST /api/auth/userinfo`
    pub const USER_INFO: Endpoint<UserInfoRequest, UserInfoResponse> = Endpoint::new(
        "user_info",
        HttpMethod::POST,
        "/api/auth/userinfo",
        "/api/{serviceId}/auth/userinfo",
        CredentialScope::Service,
    );

    /// `POST /api/auth/userinfo/issue`
    pub const USER_INFO_ISSUE: Endpoint<UserInfoIssueRequest, UserInfoIssueResponse> = Endpoint::new(
        "user_info_issue",
        HttpMethod::POST,
        "/api/auth/userinfo/issue",
        "/api/{serviceId}/auth/userinfo/issue",
        CredentialScope::Service,
    );

    /// `POST /api/auth/introspection`
    pub const INTROSPECTION: Endpoint<IntrospectionRequest, IntrospectionResponse> = Endpoint::new(
        "introspection",
        HttpMethod::POST,
        "/api/auth/introspection",
        "/api/{serviceId}/auth/introspection",
        CredentialScope::Service,
    );

    /// `POST /api/auth/introspection/standard`
    pub const STANDARD_INTROSPECTION: Endpoint<StandardIntrospectionRequest, StandardIntrospectionResponse> = Endpoint::new(
        "standard_introspection",
        HttpMethod::POST,
        "/api/auth/introspection/standard",
        "/api/{serviceId}/auth/introspection/standard",
        CredentialScope::Service,
    );

    /// `GET /api/service/get/{serviceId}`
    pub const SERVICE_GET: Endpoint<(), Service> = Endpoint::new(
        "service_get",
        HttpMethod::GET,
        "/api/service/get/{serviceId}",
        "/api/{serviceId}/service/get",
        CredentialScope::ServiceOwner,
    );

    /// `GET /api/service/get/list`
    pub const SERVICE_GET_LIST: Endpoint<(), ServiceListResponse> = Endpoint::new(
        "service_get_list",
        HttpMethod::GET,
        "/api/service/get/list",
        "/api/service/get/list",
        CredentialScope::ServiceOwner,
    );

    /// `POST /api/service/create`
    pub const SERVICE_CREATE: Endpoint<Service, Service> = Endpoint::new(
        "service_create",
        HttpMethod::POST,
        "/api/service/create",
        "/api/service/create",
        CredentialScope::ServiceOwner,
    );

    /// `POST /api/service/update/{serviceId}`
    pub const SERVICE_UPDATE: Endpoint<Service, Service> = Endpoint::new(
        "service_update",
        HttpMethod::POST,
        "/api/service/update/{serviceId}",
        "/api/{serviceId}/service/update",
        CredentialScope::ServiceOwner,
    );

    /// `DELETE /api/service/delete/{serviceId}`
    pub const SERVICE_DELETE: Endpoint<(), ()> = Endpoint::new(
        "service_delete",
        HttpMethod::DELETE,
        "/api/service/delete/{serviceId}",
        "/api/{serviceId}/service/delete",
        CredentialScope::ServiceOwner,
    );

    /// `GET /api/service/configuration`
    pub const SERVICE_CONFIGURATION: Endpoint<(), String> = Endpoint::new(
        "service_configuration",
        HttpMethod::GET,
        "/api/service/configuration",
        "/api/{serviceId}/service/configuration",
        CredentialScope::Service,
    );

    /// `GET /api/service/jwks/get`
    pub const SERVICE_JWKS_GET: Endpoint<(), String> = Endpoint::new(
        "service_jwks_get",
        HttpMethod::GET,
        "/api/service/jwks/get",
        "/api/{serviceId}/service/jwks/get",
        CredentialScope::Service,
    );

    /// `GET /api/client/get/{clientId}`
    pub const CLIENT_GET: Endpoint<(), Client> = Endpoint::new(
        "client_get",
        HttpMethod::GET,
        "/api/client/get/{clientId}",
        "/api/{serviceId}/client/get/{clientId}",
        CredentialScope::Service,
    );

    /// `GET /api/client/get/list`
    pub const CLIENT_GET_LIST: Endpoint<(), ClientListResponse> = Endpoint::new(
        "client_get_list",
        HttpMethod::GET,
        "/api/client/get/list",
        "/api/{serviceId}/client/get/list",
        CredentialScope::Service,
    );

    /// `POST /api/client/create`
    pub const CLIENT_CREATE: Endpoint<Client, Client> = Endpoint::new(
        "client_create",
        HttpMethod::POST,
        "/api/client/create",
        "/api/{serviceId}/client/create",
        CredentialScope::Service,
    );

    /// `POST /api/client/update/{clientId}`
    pub const CLIENT_UPDATE: Endpoint<Client, Client> = Endpoint::new(
        "client_update",
        HttpMethod::POST,
        "/api/client/update/{clientId}",
        "/api/{serviceId}/client/update/{clientId}",
        CredentialScope::Service,
    );

    /// `DELETE /api/client/delete/{clientId}`
    pub const CLIENT_DELETE: Endpoint<(), ()> = Endpoint::new(
        "client_delete",
        HttpMethod::DELETE,
        "/api/client/delete/{clientId}",
        "/api/{serviceId}/client/delete/{clientId}",
        CredentialScope::Service,
    );

    /// `GET /api/client/secret/refresh/{clientId}`
    pub const CLIENT_SECRET_REFRESH: Endpoint<(), ClientSecretRefreshResponse> = Endpoint::new(
        "client_secret_refresh",
        HttpMethod::GET,
        "/api/client/secret/refresh/{clientId}",
        "/api/{serviceId}/client/secret/refresh/{clientId}",
        CredentialScope::Service,
    );

    /// `POST /api/client/secret/update/{clientId}`
    pub const CLIENT_SECRET_UPDATE: Endpoint<ClientSecretUpdateRequest, ClientSecretUpdateResponse> = Endpoint::new(
        "client_secret_update",
        HttpMethod::POST,
        "/api/client/secret/update/{clientId}",
        "/api/{serviceId}/client/secret/update/{clientId}",
        CredentialScope::Service,
    );

    /// `POST /api/client/authorization/get/list`
    pub const CLIENT_AUTHORIZATION_GET_LIST: Endpoint<ClientAuthorizationGetListRequest, AuthorizedClientListResponse> = Endpoint::new(
        "client_authorization_get_list",
        HttpMethod::POST,
        "/api/client/authorization/get/list",
        "/api/{serviceId}/client/authorization/get/list",
        CredentialScope::Service,
    );

    /// `POST /api/client/authorization/update/{clientId}`
    pub const CLIENT_AUTHORIZATION_UPDATE: Endpoint<ClientAuthorizationUpdateRequest, ApiResponse> = Endpoint::new(
        "client_authorization_update",
        HttpMethod::POST,
        "/api/client/authorization/update/{clientId}",
        "/api/{serviceId}/client/authorization/update/{clientId}",
        CredentialScope::Service,
    );

    /// `POST /api/client/authorization/delete/{clientId}`
    pub const CLIENT_AUTHORIZATION_DELETE: Endpoint<ClientAuthorizationDeleteRequest, ApiResponse> = Endpoint::new(
        "client_authorization_delete",
        HttpMethod::POST,
        "/api/client/authorization/delete/{clientId}",
        "/api/{serviceId}/client/authorization/delete/{clientId}",
        CredentialScope::Service,
    );

    /// `POST /api/client/granted_scopes/get/{clientId}`
    pub const GRANTED_SCOPES_GET: Endpoint<GrantedScopesRequest, GrantedScopesGetResponse> = Endpoint::new(
        "granted_scopes_get",
        HttpMethod::POST,
        "/api/client/granted_scopes/get/{clientId}",
        "/api/{serviceId}/client/granted_scopes/get/{clientId}",
        CredentialScope::Service,
    );

    /// `POST /api/client/granted_scopes/delete/{clientId}`
    pub const GRANTED_SCOPES_DELETE: Endpoint<GrantedScopesRequest, ApiResponse> = Endpoint::new(
        "granted_scopes_delete",
        HttpMethod::POST,
        "/api/client/granted_scopes/delete/{clientId}",
        "/api/{serviceId}/client/granted_scopes/delete/{clientId}",
        CredentialScope::Service,
    );

    /// `GET /api/client/extension/requestable_scopes/get/{clientId}`
    pub const REQUESTABLE_SCOPES_GET: Endpoint<(), RequestableScopes> = Endpoint::new(
        "requestable_scopes_get",
        HttpMethod::GET,
        "/api/client/extension/requestable_scopes/get/{clientId}",
        "/api/{serviceId}/client/extension/requestable_scopes/get/{clientId}",
        CredentialScope::Service,
    );

    /// `PUT /api/client/extension/requestable_scopes/update/{clientId}`
    pub const REQUESTABLE_SCOPES_UPDATE: Endpoint<RequestableScopes, RequestableScopes> = Endpoint::new(
        "requestable_scopes_update",
        HttpMethod::PUT,
        "/api/client/extension/requestable_scopes/update/{clientId}",
        "/api/{serviceId}/client/extension/requestable_scopes/update/{clientId}",
        CredentialScope::Service,
    );

    /// `DELETE /api/client/extension/requestable_scopes/delete/{clientId}`
    pub const REQUESTABLE_SCOPES_DELETE: Endpoint<(), ()> = Endpoint::new(
        "requestable_scopes_delete",
        HttpMethod::DELETE,
        "/api/client/extension/requestable_scopes/delete/{clientId}",
        "/api/{serviceId}/client/extension/requestable_scopes/delete/{clientId}",
        CredentialScope::Service,
    );

    /// `POST /api/client/registration`
    pub const CLIENT_REGISTRATION: Endpoint<ClientRegistrationRequest, ClientRegistrationResponse> = Endpoint::new(
        "client_registration",
        HttpMethod::POST,
        "/api/client/registration",
        "/api/{serviceId}/client/registration",
        CredentialScope::Service,
    );

    /// `POST /api/client/registration/get`
    pub const CLIENT_REGISTRATION_GET: Endpoint<ClientRegistrationRequest, ClientRegistrationResponse> = Endpoint::new(
        "client_registration_get",
        HttpMethod::POST,
        "/api/client/registration/get",
        "/api/{serviceId}/client/registration/get",
        CredentialScope::Service,
    );

    /// `POST /api/client/registration/update`
    pub const CLIENT_REGISTRATION_UPDATE: Endpoint<ClientRegistrationRequest, ClientRegistrationResponse> = Endpoint::new(
        "client_registration_update",
        HttpMethod::POST,
        "/api/client/registration/update",
        "/api/{serviceId}/client/registration/update",
        CredentialScope::Service,
    );

    /// `POST /api/client/registration/delete`
    pub const CLIENT_REGISTRATION_DELETE: Endpoint<ClientRegistrationRequest, ClientRegistrationResponse> = Endpoint::new(
        "client_registration_delete",
        HttpMethod::POST,
        "/api/client/registration/delete",
        "/api/{serviceId}/client/registration/delete",
        CredentialScope::Service,
    );

    /// `POST /api/backchannel/authentication`
    pub const BACKCHANNEL_AUTHENTICATION: Endpoint<BackchannelAuthenticationRequest, BackchannelAuthenticationResponse> = Endpoint::new(
        "backchannel_authentication",
        HttpMethod::POST,
        "/api/backchannel/authentication",
        "/api/{serviceId}/backchannel/authentication",
        CredentialScope::Service,
    );

    /// `POST /api/backchannel/authentication/issue`
    pub const BACKCHANNEL_AUTHENTICATION_ISSUE: Endpoint<BackchannelAuthenticationIssueRequest, BackchannelAuthenticationIssueResponse> = Endpoint::new(
        "backchannel_authentication_issue",
        HttpMethod::POST,
        "/api/backchannel/authentication/issue",
        "/api/{serviceId}/backchannel/authentication/issue",
        CredentialScope::Service,
    );

    /// `POST /api/backchannel/authentication/fail`
    pub const BACKCHANNEL_AUTHENTICATION_FAIL: Endpoint<BackchannelAuthenticationFailRequest, BackchannelAuthenticationFailResponse> = Endpoint::new(
        "backchannel_authentication_fail",
        HttpMethod::POST,
        "/api/backchannel/authentication/fail",
        "/api/{serviceId}/backchannel/authentication/fail",
        CredentialScope::Service,
    );

    /// `POST /api/backchannel/authentication/complete`
    pub const BACKCHANNEL_AUTHENTICATION_COMPLETE: Endpoint<BackchannelAuthenticationCompleteRequest, BackchannelAuthenticationCompleteResponse> = Endpoint::new(
        "backchannel_authentication_complete",
        HttpMethod::POST,
        "/api/backchannel/authentication/complete",
        "/api/{serviceId}/backchannel/authentication/complete",
        CredentialScope::Service,
    );

    /// `POST /api/device/authorization`
    pub const DEVICE_AUTHORIZATION: Endpoint<DeviceAuthorizationRequest, DeviceAuthorizationResponse> = Endpoint::new(
        "device_authorization",
        HttpMethod::POST,
        "/api/device/authorization",
        "/api/{serviceId}/device/authorization",
        CredentialScope::Service,
    );

    /// `POST /api/device/verification`
    pub const DEVICE_VERIFICATION: Endpoint<DeviceVerificationRequest, DeviceVerificationResponse> = Endpoint::new(
        "device_verification",
        HttpMethod::POST,
        "/api/device/verification",
        "/api/{serviceId}/device/verification",
        CredentialScope::Service,
    );

    /// `POST /api/device/complete`
    pub const DEVICE_COMPLETE: Endpoint<DeviceCompleteRequest, DeviceCompleteResponse> = Endpoint::new(
        "device_complete",
        HttpMethod::POST,
        "/api/device/complete",
        "/api/{serviceId}/device/complete",
        CredentialScope::Service,
    );

    /// `POST /api/pushed_auth_req`
    pub const PUSHED_AUTH_REQ: Endpoint<PushedAuthReqRequest, PushedAuthReqResponse> = Endpoint::new(
        "pushed_auth_req",
        HttpMethod::POST,
        "/api/pushed_auth_req",
        "/api/{serviceId}/pushed_auth_req",
        CredentialScope::Service,
    );

    /// `POST /api/gm`
    pub const GM: Endpoint<GmRequest, GmResponse> = Endpoint::new(
        "gm",
        HttpMethod::POST,
        "/api/gm",
        "/api/{serviceId}/gm",
        CredentialScope::Service,
    );

    /// `POST /api/jose/verify`
    pub const JOSE_VERIFY: Endpoint<JoseVerifyRequest, JoseVerifyResponse> = Endpoint::new(
        "jose_verify",
        HttpMethod::POST,
        "/api/jose/verify",
        "/api/{serviceId}/jose/verify",
        CredentialScope::Service,
    );

    /// `POST /api/hsk/create`
    pub const HSK_CREATE: Endpoint<HskCreateRequest, HskResponse> = Endpoint::new(
        "hsk_create",
        HttpMethod::POST,
        "/api/hsk/create",
        "/api/{serviceId}/hsk/create",
        CredentialScope::Service,
    );

    /// `DELETE /api/hsk/delete/{handle}`
    pub const HSK_DELETE: Endpoint<(), HskResponse> = Endpoint::new(
        "hsk_delete",
        HttpMethod::DELETE,
        "/api/hsk/delete/{handle}",
        "/api/{serviceId}/hsk/delete/{handle}",
        CredentialScope::Service,
    );

    /// `GET /api/hsk/get/{handle}`
    pub const HSK_GET: Endpoint<(), HskResponse> = Endpoint::new(
        "hsk_get",
        HttpMethod::GET,
        "/api/hsk/get/{handle}",
        "/api/{serviceId}/hsk/get/{handle}",
        CredentialScope::Service,
    );

    /// `GET /api/hsk/get/list`
    pub const HSK_GET_LIST: Endpoint<(), HskListResponse> = Endpoint::new(
        "hsk_get_list",
        HttpMethod::GET,
        "/api/hsk/get/list",
        "/api/{serviceId}/hsk/get/list",
        CredentialScope::Service,
    );
}
