//! Authorization endpoint (`/auth/authorization*`)

use crate::enums::{
    AuthorizationAction, AuthorizationFailAction, AuthorizationFailReason,
    AuthorizationIssueAction, Display, GmAction, Prompt,
};

use super::client::Client;
use super::common::{AuthzDetails, DynamicScope, Property, Scope};
use super::field::{EnumList, EnumOf, Flag, IntOrStr, Nested, NestedList, Text, TextList};
use super::service::Service;

dto! {
    /// Request of `/auth/authorization`
    pub struct AuthorizationRequest {
        /// Request parameters of the authorization endpoint, form-encoded
        parameters, set_parameters: Text => "parameters";
    }
}

dto! {
    /// Response of `/auth/authorization`
    pub struct AuthorizationResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<AuthorizationAction> => "action";
        client, set_client: Nested<Client> => "client";
        display, set_display: EnumOf<Display> => "display";
        max_age, set_max_age: IntOrStr => "maxAge";
        service, set_service: Nested<Service> => "service";
        scopes, set_scopes: NestedList<Scope> => "scopes";
        dynamic_scopes, set_dynamic_scopes: NestedList<DynamicScope> => "dynamicScopes";
        ui_locales, set_ui_locales: TextList => "uiLocales";
        claims_locales, set_claims_locales: TextList => "claimsLocales";
        claims, set_claims: TextList => "claims";
        acr_essential, set_acr_essential: Flag => "acrEssential";
        client_id_alias_used, set_client_id_alias_used: Flag => "clientIdAliasUsed";
        acrs, set_acrs: TextList => "acrs";
        subject, set_subject: Text => "subject";
        login_hint, set_login_hint: Text => "loginHint";
        prompts, set_prompts: EnumList<Prompt> => "prompts";
        request_object_payload, set_request_object_payload: Text => "requestObjectPayload";
        id_token_claims, set_id_token_claims: Text => "idTokenClaims";
        user_info_claims, set_user_info_claims: Text => "userInfoClaims";
        resources, set_resources: TextList => "resources";
        authorization_details, set_authorization_details: Nested<AuthzDetails> => "authorizationDetails";
        purpose, set_purpose: Text => "purpose";
        grant_id, set_grant_id: Text => "grantId";
        grant_subject, set_grant_subject: Text => "grantSubject";
        gm_action, set_gm_action: EnumOf<GmAction> => "gmAction";
        response_content, set_response_content: Text => "responseContent";
        /// Ticket to pass to `/auth/authorization/issue` or `/auth/authorization/fail`
        ticket, set_ticket: Text => "ticket";
    }
}

dto! {
    /// Request of `/auth/authorization/fail`
    pub struct AuthorizationFailRequest {
        ticket, set_ticket: Text => "ticket";
        reason, set_reason: EnumOf<AuthorizationFailReason> => "reason";
        description, set_description: Text => "description";
    }
}

dto! {
    /// Response of `/auth/authorization/fail`
    pub struct AuthorizationFailResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<AuthorizationFailAction> => "action";
        response_content, set_response_content: Text => "responseContent";
    }
}

dto! {
    /// Request of `/auth/authorization/issue`
    pub struct AuthorizationIssueRequest {
        ticket, set_ticket: Text => "ticket";
        subject, set_subject: Text => "subject";
        sub, set_sub: Text => "sub";
        /// Time of end-user authentication, seconds since the Unix epoch
        auth_time, set_auth_time: IntOrStr => "authTime";
        acr, set_acr: Text => "acr";
        /// Claims as a JSON object text
        claims, set_claims: Text => "claims";
        properties, set_properties: NestedList<Property> => "properties";
        scopes, set_scopes: TextList => "scopes";
        id_token_claims, set_id_token_claims: Text => "idTokenClaims";
        authorization_details, set_authorization_details: Nested<AuthzDetails> => "authorizationDetails";
        consented_claims, set_consented_claims: TextList => "consentedClaims";
        jwt_at_claims, set_jwt_at_claims: Text => "jwtAtClaims";
        access_token, set_access_token: Text => "accessToken";
    }
}

dto! {
    /// Response of `/auth/authorization/issue`
    pub struct AuthorizationIssueResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<AuthorizationIssueAction> => "action";
        response_content, set_response_content: Text => "responseContent";
        access_token, set_access_token: Text => "accessToken";
        access_token_expires_at, set_access_token_expires_at: IntOrStr => "accessTokenExpiresAt";
        access_token_duration, set_access_token_duration: IntOrStr => "accessTokenDuration";
        id_token, set_id_token: Text => "idToken";
        authorization_code, set_authorization_code: Text => "authorizationCode";
        jwt_access_token, set_jwt_access_token: Text => "jwtAccessToken";
    }
}
