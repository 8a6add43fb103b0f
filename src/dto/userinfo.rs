//! UserInfo endpoint (`/auth/userinfo*`)

use crate::enums::{UserInfoAction, UserInfoIssueAction};

use super::common::{Pair, Property};
use super::field::{EnumOf, IntOrStr, NestedList, Text, TextList};

dto! {
    /// Request of `/auth/userinfo`
    pub struct UserInfoRequest {
        token, set_token: Text => "token";
        client_certificate, set_client_certificate: Text => "clientCertificate";
        dpop, set_dpop: Text => "dpop";
        htm, set_htm: Text => "htm";
        htu, set_htu: Text => "htu";
        uri, set_uri: Text => "uri";
        message, set_message: Text => "message";
        target_uri, set_target_uri: Text => "targetUri";
    }
}

dto! {
    /// Response of `/auth/userinfo`
    pub struct UserInfoResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<UserInfoAction> => "action";
        client_id, set_client_id: IntOrStr => "clientId";
        subject, set_subject: Text => "subject";
        scopes, set_scopes: TextList => "scopes";
        /// Claims the client requested
        claims, set_claims: TextList => "claims";
        token, set_token: Text => "token";
        response_content, set_response_content: Text => "responseContent";
        properties, set_properties: NestedList<Property> => "properties";
        client_id_alias, set_client_id_alias: Text => "clientIdAlias";
        user_info_claims, set_user_info_claims: Text => "userInfoClaims";
        service_attributes, set_service_attributes: NestedList<Pair> => "serviceAttributes";
        client_attributes, set_client_attributes: NestedList<Pair> => "clientAttributes";
        consented_claims, set_consented_claims: TextList => "consentedClaims";
        dpop_nonce, set_dpop_nonce: Text => "dpopNonce";
    }
}

dto! {
    /// Request of `/auth/userinfo/issue`
    pub struct UserInfoIssueRequest {
        token, set_token: Text => "token";
        /// Claim values as a JSON object text
        claims, set_claims: Text => "claims";
        sub, set_sub: Text => "sub";
        claims_for_tx, set_claims_for_tx: Text => "claimsForTx";
        dpop, set_dpop: Text => "dpop";
        htm, set_htm: Text => "htm";
        htu, set_htu: Text => "htu";
    }
}

dto! {
    /// Response of `/auth/userinfo/issue`
    pub struct UserInfoIssueResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<UserInfoIssueAction> => "action";
        response_content, set_response_content: Text => "responseContent";
        dpop_nonce, set_dpop_nonce: Text => "dpopNonce";
    }
}
