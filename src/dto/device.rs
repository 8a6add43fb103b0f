//! OAuth 2.0 Device Authorization Grant (`/device/*`, RFC 8628)

use crate::enums::{
    DeviceAuthorizationAction, DeviceCompleteAction, DeviceCompleteResult,
    DeviceVerificationAction,
};

use super::common::{AuthzDetails, Pair, Property, Scope};
use super::field::{EnumOf, Flag, IntOrStr, Nested, NestedList, Text, TextList};

dto! {
    /// Request of `/device/authorization`
    pub struct DeviceAuthorizationRequest {
        /// Request parameters of the device authorization endpoint, form-encoded
        parameters, set_parameters: Text => "parameters";
        client_id, set_client_id: Text => "clientId";
        client_secret, set_client_secret: Text => "clientSecret";
        client_certificate, set_client_certificate: Text => "clientCertificate";
        client_certificate_path, set_client_certificate_path: TextList => "clientCertificatePath";
    }
}

dto! {
    /// Response of `/device/authorization`
    pub struct DeviceAuthorizationResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<DeviceAuthorizationAction> => "action";
        response_content, set_response_content: Text => "responseContent";
        client_id, set_client_id: IntOrStr => "clientId";
        client_id_alias, set_client_id_alias: Text => "clientIdAlias";
        client_id_alias_used, set_client_id_alias_used: Flag => "clientIdAliasUsed";
        client_name, set_client_name: Text => "clientName";
        scopes, set_scopes: NestedList<Scope> => "scopes";
        claim_names, set_claim_names: TextList => "claimNames";
        acrs, set_acrs: TextList => "acrs";
        device_code, set_device_code: Text => "deviceCode";
        user_code, set_user_code: Text => "userCode";
        verification_uri, set_verification_uri: Text => "verificationUri";
        verification_uri_complete, set_verification_uri_complete: Text => "verificationUriComplete";
        /// Lifetime of the device code in seconds
        expires_in, set_expires_in: IntOrStr => "expiresIn";
        /// Minimum polling interval in seconds
        interval, set_interval: IntOrStr => "interval";
        resources, set_resources: TextList => "resources";
        authorization_details, set_authorization_details: Nested<AuthzDetails> => "authorizationDetails";
        service_attributes, set_service_attributes: NestedList<Pair> => "serviceAttributes";
        client_attributes, set_client_attributes: NestedList<Pair> => "clientAttributes";
        warnings, set_warnings: TextList => "warnings";
    }
}

dto! {
    /// Request of `/device/verification`
    pub struct DeviceVerificationRequest {
        user_code, set_user_code: Text => "userCode";
    }
}

dto! {
    /// Response of `/device/verification`
    pub struct DeviceVerificationResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<DeviceVerificationAction> => "action";
        client_id, set_client_id: IntOrStr => "clientId";
        client_id_alias, set_client_id_alias: Text => "clientIdAlias";
        client_id_alias_used, set_client_id_alias_used: Flag => "clientIdAliasUsed";
        client_name, set_client_name: Text => "clientName";
        scopes, set_scopes: NestedList<Scope> => "scopes";
        claim_names, set_claim_names: TextList => "claimNames";
        acrs, set_acrs: TextList => "acrs";
        expires_at, set_expires_at: IntOrStr => "expiresAt";
        resources, set_resources: TextList => "resources";
        authorization_details, set_authorization_details: Nested<AuthzDetails> => "authorizationDetails";
        service_attributes, set_service_attributes: NestedList<Pair> => "serviceAttributes";
        client_attributes, set_client_attributes: NestedList<Pair> => "clientAttributes";
    }
}

dto! {
    /// Request of `/device/complete`
    pub struct DeviceCompleteRequest {
        user_code, set_user_code: Text => "userCode";
        result, set_result: EnumOf<DeviceCompleteResult> => "result";
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
    /// Response of `/device/complete`
    pub struct DeviceCompleteResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<DeviceCompleteAction> => "action";
    }
}
