//! Client Initiated Backchannel Authentication (`/backchannel/authentication*`)

use crate::enums::{
    BackchannelAuthenticationAction, BackchannelAuthenticationCompleteAction,
    BackchannelAuthenticationCompleteResult, BackchannelAuthenticationFailAction,
    BackchannelAuthenticationFailReason, BackchannelAuthenticationIssueAction, DeliveryMode,
    UserIdentificationHintType,
};

use super::common::{AuthzDetails, Pair, Property, Scope};
use super::field::{EnumOf, Flag, IntOrStr, Nested, NestedList, Text, TextList};

dto! {
    /// Request of `/backchannel/authentication`
    pub struct BackchannelAuthenticationRequest {
        /// Request parameters of the backchannel authentication endpoint, form-encoded
        parameters, set_parameters: Text => "parameters";
        client_id, set_client_id: Text => "clientId";
        client_secret, set_client_secret: Text => "clientSecret";
        client_certificate, set_client_certificate: Text => "clientCertificate";
        client_certificate_path, set_client_certificate_path: TextList => "clientCertificatePath";
    }
}

dto! {
    /// Response of `/backchannel/authentication`
    pub struct BackchannelAuthenticationResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<BackchannelAuthenticationAction> => "action";
        response_content, set_response_content: Text => "responseContent";
        client_id, set_client_id: IntOrStr => "clientId";
        client_id_alias, set_client_id_alias: Text => "clientIdAlias";
        client_id_alias_used, set_client_id_alias_used: Flag => "clientIdAliasUsed";
        client_name, set_client_name: Text => "clientName";
        delivery_mode, set_delivery_mode: EnumOf<DeliveryMode> => "deliveryMode";
        scopes, set_scopes: NestedList<Scope> => "scopes";
        claim_names, set_claim_names: TextList => "claimNames";
        client_notification_token, set_client_notification_token: Text => "clientNotificationToken";
        acrs, set_acrs: TextList => "acrs";
        hint_type, set_hint_type: EnumOf<UserIdentificationHintType> => "hintType";
        hint, set_hint: Text => "hint";
        sub, set_sub: Text => "sub";
        binding_message, set_binding_message: Text => "bindingMessage";
        user_code, set_user_code: Text => "userCode";
        user_code_required, set_user_code_required: Flag => "userCodeRequired";
        requested_expiry, set_requested_expiry: IntOrStr => "requestedExpiry";
        request_context, set_request_context: Text => "requestContext";
        resources, set_resources: TextList => "resources";
        authorization_details, set_authorization_details: Nested<AuthzDetails> => "authorizationDetails";
        service_attributes, set_service_attributes: NestedList<Pair> => "serviceAttributes";
        client_attributes, set_client_attributes: NestedList<Pair> => "clientAttributes";
        warnings, set_warnings: TextList => "warnings";
        /// Ticket to pass to `/backchannel/authentication/issue` or `/backchannel/authentication/fail`
        ticket, set_ticket: Text => "ticket";
    }
}

dto! {
    /// Request of `/backchannel/authentication/issue`
    pub struct BackchannelAuthenticationIssueRequest {
        ticket, set_ticket: Text => "ticket";
    }
}

dto! {
    /// Response of `/backchannel/authentication/issue`
    pub struct BackchannelAuthenticationIssueResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<BackchannelAuthenticationIssueAction> => "action";
        response_content, set_response_content: Text => "responseContent";
        auth_req_id, set_auth_req_id: Text => "authReqId";
        expires_in, set_expires_in: IntOrStr => "expiresIn";
        interval, set_interval: IntOrStr => "interval";
    }
}

dto! {
    /// Request of `/backchannel/authentication/fail`
    pub struct BackchannelAuthenticationFailRequest {
        ticket, set_ticket: Text => "ticket";
        reason, set_reason: EnumOf<BackchannelAuthenticationFailReason> => "reason";
        error_description, set_error_description: Text => "errorDescription";
        error_uri, set_error_uri: Text => "errorUri";
    }
}

dto! {
    /// Response of `/backchannel/authentication/fail`
    pub struct BackchannelAuthenticationFailResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<BackchannelAuthenticationFailAction> => "action";
        response_content, set_response_content: Text => "responseContent";
    }
}

dto! {
    /// Request of `/backchannel/authentication/complete`
    pub struct BackchannelAuthenticationCompleteRequest {
        ticket, set_ticket: Text => "ticket";
        result, set_result: EnumOf<BackchannelAuthenticationCompleteResult> => "result";
        subject, set_subject: Text => "subject";
        sub, set_sub: Text => "sub";
        auth_time, set_auth_time: IntOrStr => "authTime";
        acr, set_acr: Text => "acr";
        /// Claims as a JSON object text
        claims, set_claims: Text => "claims";
        properties, set_properties: NestedList<Property> => "properties";
        scopes, set_scopes: TextList => "scopes";
        id_token_claims, set_id_token_claims: Text => "idTokenClaims";
        error_description, set_error_description: Text => "errorDescription";
        error_uri, set_error_uri: Text => "errorUri";
        consented_claims, set_consented_claims: TextList => "consentedClaims";
        jwt_at_claims, set_jwt_at_claims: Text => "jwtAtClaims";
        access_token, set_access_token: Text => "accessToken";
    }
}

dto! {
    /// Response of `/backchannel/authentication/complete`
    pub struct BackchannelAuthenticationCompleteResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<BackchannelAuthenticationCompleteAction> => "action";
        response_content, set_response_content: Text => "responseContent";
        client_id, set_client_id: IntOrStr => "clientId";
        client_id_alias, set_client_id_alias: Text => "clientIdAlias";
        client_id_alias_used, set_client_id_alias_used: Flag => "clientIdAliasUsed";
        client_name, set_client_name: Text => "clientName";
        delivery_mode, set_delivery_mode: EnumOf<DeliveryMode> => "deliveryMode";
        client_notification_endpoint, set_client_notification_endpoint: Text => "clientNotificationEndpoint";
        client_notification_token, set_client_notification_token: Text => "clientNotificationToken";
        auth_req_id, set_auth_req_id: Text => "authReqId";
        access_token, set_access_token: Text => "accessToken";
        refresh_token, set_refresh_token: Text => "refreshToken";
        id_token, set_id_token: Text => "idToken";
        access_token_duration, set_access_token_duration: IntOrStr => "accessTokenDuration";
        refresh_token_duration, set_refresh_token_duration: IntOrStr => "refreshTokenDuration";
        id_token_duration, set_id_token_duration: IntOrStr => "idTokenDuration";
        jwt_access_token, set_jwt_access_token: Text => "jwtAccessToken";
        resources, set_resources: TextList => "resources";
        authorization_details, set_authorization_details: Nested<AuthzDetails> => "authorizationDetails";
        service_attributes, set_service_attributes: NestedList<Pair> => "serviceAttributes";
        client_attributes, set_client_attributes: NestedList<Pair> => "clientAttributes";
    }
}
