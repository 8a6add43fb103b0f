//! Pushed authorization requests (`/pushed_auth_req`, RFC 9126)

use crate::enums::PushedAuthReqAction;

use super::field::{EnumOf, Text, TextList};

dto! {
    /// Request of `/pushed_auth_req`
    pub struct PushedAuthReqRequest {
        /// Request parameters of the pushed authorization request endpoint, form-encoded
        parameters, set_parameters: Text => "parameters";
        client_id, set_client_id: Text => "clientId";
        client_secret, set_client_secret: Text => "clientSecret";
        client_certificate, set_client_certificate: Text => "clientCertificate";
        client_certificate_path, set_client_certificate_path: TextList => "clientCertificatePath";
        dpop, set_dpop: Text => "dpop";
        htm, set_htm: Text => "htm";
        htu, set_htu: Text => "htu";
    }
}

dto! {
    /// Response of `/pushed_auth_req`
    pub struct PushedAuthReqResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<PushedAuthReqAction> => "action";
        response_content, set_response_content: Text => "responseContent";
        /// `urn:ietf:params:oauth:request_uri:...` to hand to the client
        request_uri, set_request_uri: Text => "requestUri";
    }
}
