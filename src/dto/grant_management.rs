//! Grant Management for OAuth 2.0 (`/gm`)

use crate::enums::{GmAction, GmResponseAction};

use super::field::{EnumOf, IntOrStr, Text, TextList};

dto! {
    /// Request of `/gm`
    pub struct GmRequest {
        gm_action, set_gm_action: EnumOf<GmAction> => "gmAction";
        grant_id, set_grant_id: Text => "grantId";
        /// Access token presented to the grant management endpoint
        access_token, set_access_token: Text => "accessToken";
        client_certificate, set_client_certificate: Text => "clientCertificate";
        dpop, set_dpop: Text => "dpop";
        htm, set_htm: Text => "htm";
        htu, set_htu: Text => "htu";
    }
}

dto! {
    /// Response of `/gm`
    pub struct GmResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<GmResponseAction> => "action";
        response_content, set_response_content: Text => "responseContent";
        client_id, set_client_id: IntOrStr => "clientId";
        subject, set_subject: Text => "subject";
        scopes, set_scopes: TextList => "scopes";
        dpop_nonce, set_dpop_nonce: Text => "dpopNonce";
    }
}
