//! Token endpoint (`/auth/token*`) and token management

use crate::enums::{
    GrantType, TokenAction, TokenCreateAction, TokenFailAction, TokenFailReason,
    TokenIssueAction, TokenUpdateAction,
};

use super::client::Client;
use super::common::{AccessToken, AuthzDetails, Pair, Property};
use super::field::{EnumOf, Flag, IntOrStr, Integer, Nested, NestedList, Text, TextList};

dto! {
    /// Request of `/auth/token`
    pub struct TokenRequest {
        /// Request parameters of the token endpoint, form-encoded
        parameters, set_parameters: Text => "parameters";
        client_id, set_client_id: Text => "clientId";
        client_secret, set_client_secret: Text => "clientSecret";
        client_certificate, set_client_certificate: Text => "clientCertificate";
        client_certificate_path, set_client_certificate_path: TextList => "clientCertificatePath";
        properties, set_properties: NestedList<Property> => "properties";
        dpop, set_dpop: Text => "dpop";
        htm, set_htm: Text => "htm";
        htu, set_htu: Text => "htu";
        jwt_at_claims, set_jwt_at_claims: Text => "jwtAtClaims";
    }
}

dto! {
    /// Response of `/auth/token`
    pub struct TokenResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<TokenAction> => "action";
        response_content, set_response_content: Text => "responseContent";
        username, set_username: Text => "username";
        password, set_password: Text => "password";
        ticket, set_ticket: Text => "ticket";
        access_token, set_access_token: Text => "accessToken";
        access_token_expires_at, set_access_token_expires_at: IntOrStr => "accessTokenExpiresAt";
        access_token_duration, set_access_token_duration: IntOrStr => "accessTokenDuration";
        refresh_token, set_refresh_token: Text => "refreshToken";
        refresh_token_expires_at, set_refresh_token_expires_at: IntOrStr => "refreshTokenExpiresAt";
        refresh_token_duration, set_refresh_token_duration: IntOrStr => "refreshTokenDuration";
        id_token, set_id_token: Text => "idToken";
        grant_type, set_grant_type: EnumOf<GrantType> => "grantType";
        client_id, set_client_id: IntOrStr => "clientId";
        client_id_alias, set_client_id_alias: Text => "clientIdAlias";
        client_id_alias_used, set_client_id_alias_used: Flag => "clientIdAliasUsed";
        subject, set_subject: Text => "subject";
        scopes, set_scopes: TextList => "scopes";
        properties, set_properties: NestedList<Property> => "properties";
        jwt_access_token, set_jwt_access_token: Text => "jwtAccessToken";
        resources, set_resources: TextList => "resources";
        access_token_resources, set_access_token_resources: TextList => "accessTokenResources";
        authorization_details, set_authorization_details: Nested<AuthzDetails> => "authorizationDetails";
        grant_id, set_grant_id: Text => "grantId";
        service_attributes, set_service_attributes: NestedList<Pair> => "serviceAttributes";
        client_attributes, set_client_attributes: NestedList<Pair> => "clientAttributes";
        refresh_token_scopes, set_refresh_token_scopes: TextList => "refreshTokenScopes";
        dpop_nonce, set_dpop_nonce: Text => "dpopNonce";
    }
}

dto! {
    /// Request of `/auth/token/fail`
    pub struct TokenFailRequest {
        ticket, set_ticket: Text => "ticket";
        reason, set_reason: EnumOf<TokenFailReason> => "reason";
    }
}

dto! {
    /// Response of `/auth/token/fail`
    pub struct TokenFailResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<TokenFailAction> => "action";
        response_content, set_response_content: Text => "responseContent";
    }
}

dto! {
    /// Request of `/auth/token/issue`
    pub struct TokenIssueRequest {
        ticket, set_ticket: Text => "ticket";
        subject, set_subject: Text => "subject";
        properties, set_properties: NestedList<Property> => "properties";
        jwt_at_claims, set_jwt_at_claims: Text => "jwtAtClaims";
        access_token, set_access_token: Text => "accessToken";
    }
}

dto! {
    /// Response of `/auth/token/issue`
    pub struct TokenIssueResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<TokenIssueAction> => "action";
        response_content, set_response_content: Text => "responseContent";
        access_token, set_access_token: Text => "accessToken";
        access_token_expires_at, set_access_token_expires_at: IntOrStr => "accessTokenExpiresAt";
        access_token_duration, set_access_token_duration: IntOrStr => "accessTokenDuration";
        refresh_token, set_refresh_token: Text => "refreshToken";
        refresh_token_expires_at, set_refresh_token_expires_at: IntOrStr => "refreshTokenExpiresAt";
        refresh_token_duration, set_refresh_token_duration: IntOrStr => "refreshTokenDuration";
        client_id, set_client_id: IntOrStr => "clientId";
        client_id_alias, set_client_id_alias: Text => "clientIdAlias";
        client_id_alias_used, set_client_id_alias_used: Flag => "clientIdAliasUsed";
        subject, set_subject: Text => "subject";
        scopes, set_scopes: TextList => "scopes";
        properties, set_properties: NestedList<Property> => "properties";
        jwt_access_token, set_jwt_access_token: Text => "jwtAccessToken";
        authorization_details, set_authorization_details: Nested<AuthzDetails> => "authorizationDetails";
    }
}

dto! {
    /// Request of `/auth/token/create`
    pub struct TokenCreateRequest {
        grant_type, set_grant_type: EnumOf<GrantType> => "grantType";
        client_id, set_client_id: IntOrStr => "clientId";
        subject, set_subject: Text => "subject";
        scopes, set_scopes: TextList => "scopes";
        /// Lifetime of the access token in seconds, `0` for the service default
        access_token_duration, set_access_token_duration: IntOrStr => "accessTokenDuration";
        refresh_token_duration, set_refresh_token_duration: IntOrStr => "refreshTokenDuration";
        properties, set_properties: NestedList<Property> => "properties";
        client_id_alias_used, set_client_id_alias_used: Flag => "clientIdAliasUsed";
        access_token, set_access_token: Text => "accessToken";
        refresh_token, set_refresh_token: Text => "refreshToken";
        access_token_persistent, set_access_token_persistent: Flag => "accessTokenPersistent";
        certificate_thumbprint, set_certificate_thumbprint: Text => "certificateThumbprint";
        dpop_key_thumbprint, set_dpop_key_thumbprint: Text => "dpopKeyThumbprint";
        authorization_details, set_authorization_details: Nested<AuthzDetails> => "authorizationDetails";
        resources, set_resources: TextList => "resources";
        for_external_attachment, set_for_external_attachment: Flag => "forExternalAttachment";
        jwt_at_claims, set_jwt_at_claims: Text => "jwtAtClaims";
        acr, set_acr: Text => "acr";
        auth_time, set_auth_time: IntOrStr => "authTime";
    }
}

dto! {
    /// Response of `/auth/token/create`
    pub struct TokenCreateResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<TokenCreateAction> => "action";
        access_token, set_access_token: Text => "accessToken";
        client_id, set_client_id: IntOrStr => "clientId";
        expires_at, set_expires_at: IntOrStr => "expiresAt";
        expires_in, set_expires_in: IntOrStr => "expiresIn";
        grant_type, set_grant_type: EnumOf<GrantType> => "grantType";
        properties, set_properties: NestedList<Property> => "properties";
        refresh_token, set_refresh_token: Text => "refreshToken";
        scopes, set_scopes: TextList => "scopes";
        subject, set_subject: Text => "subject";
        token_type, set_token_type: Text => "tokenType";
        jwt_access_token, set_jwt_access_token: Text => "jwtAccessToken";
        authorization_details, set_authorization_details: Nested<AuthzDetails> => "authorizationDetails";
        token_id, set_token_id: Text => "tokenId";
        refresh_token_scopes, set_refresh_token_scopes: TextList => "refreshTokenScopes";
    }
}

dto! {
    /// Request of `/auth/token/update`
    pub struct TokenUpdateRequest {
        access_token, set_access_token: Text => "accessToken";
        access_token_expires_at, set_access_token_expires_at: IntOrStr => "accessTokenExpiresAt";
        scopes, set_scopes: TextList => "scopes";
        properties, set_properties: NestedList<Property> => "properties";
        access_token_expires_at_updated_on_scope_update, set_access_token_expires_at_updated_on_scope_update: Flag => "accessTokenExpiresAtUpdatedOnScopeUpdate";
        access_token_persistent, set_access_token_persistent: Flag => "accessTokenPersistent";
        access_token_hash, set_access_token_hash: Text => "accessTokenHash";
        access_token_value_updated, set_access_token_value_updated: Flag => "accessTokenValueUpdated";
        certificate_thumbprint, set_certificate_thumbprint: Text => "certificateThumbprint";
        dpop_key_thumbprint, set_dpop_key_thumbprint: Text => "dpopKeyThumbprint";
        authorization_details, set_authorization_details: Nested<AuthzDetails> => "authorizationDetails";
        for_external_attachment, set_for_external_attachment: Flag => "forExternalAttachment";
        refresh_token_expires_at, set_refresh_token_expires_at: IntOrStr => "refreshTokenExpiresAt";
        refresh_token_expires_at_updated_on_scope_update, set_refresh_token_expires_at_updated_on_scope_update: Flag => "refreshTokenExpiresAtUpdatedOnScopeUpdate";
    }
}

dto! {
    /// Response of `/auth/token/update`
    pub struct TokenUpdateResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<TokenUpdateAction> => "action";
        access_token, set_access_token: Text => "accessToken";
        access_token_expires_at, set_access_token_expires_at: IntOrStr => "accessTokenExpiresAt";
        properties, set_properties: NestedList<Property> => "properties";
        scopes, set_scopes: TextList => "scopes";
        authorization_details, set_authorization_details: Nested<AuthzDetails> => "authorizationDetails";
        token_type, set_token_type: Text => "tokenType";
        for_external_attachment, set_for_external_attachment: Flag => "forExternalAttachment";
        token_id, set_token_id: Text => "tokenId";
        refresh_token_expires_at, set_refresh_token_expires_at: IntOrStr => "refreshTokenExpiresAt";
    }
}

dto! {
    /// Response of `/auth/token/get/list`
    pub struct TokenListResponse {
        start, set_start: Integer => "start";
        end, set_end: Integer => "end";
        /// The client the list was filtered by
        client, set_client: Nested<Client> => "client";
        subject, set_subject: Text => "subject";
        total_count, set_total_count: Integer => "totalCount";
        access_tokens, set_access_tokens: NestedList<AccessToken> => "accessTokens";
    }
}

dto! {
    /// Request of `/auth/token/revoke`
    pub struct TokenRevokeRequest {
        access_token_identifier, set_access_token_identifier: Text => "accessTokenIdentifier";
        refresh_token_identifier, set_refresh_token_identifier: Text => "refreshTokenIdentifier";
        client_identifier, set_client_identifier: Text => "clientIdentifier";
        subject, set_subject: Text => "subject";
    }
}

dto! {
    /// Response of `/auth/token/revoke`
    pub struct TokenRevokeResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        /// Number of tokens revoked
        count, set_count: Integer => "count";
    }
}
