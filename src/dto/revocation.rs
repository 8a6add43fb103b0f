//! Token revocation (`/auth/revocation`, RFC 7009)

use crate::enums::RevocationAction;

use super::field::{EnumOf, Text, TextList};

dto! {
    /// Request of `/auth/revocation`
    pub struct RevocationRequest {
        /// Request parameters of the revocation endpoint, form-encoded
        parameters, set_parameters: Text => "parameters";
        client_id, set_client_id: Text => "clientId";
        client_secret, set_client_secret: Text => "clientSecret";
        client_certificate, set_client_certificate: Text => "clientCertificate";
        client_certificate_path, set_client_certificate_path: TextList => "clientCertificatePath";
    }
}

dto! {
    /// Response of `/auth/revocation`
    pub struct RevocationResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<RevocationAction> => "action";
        response_content, set_response_content: Text => "responseContent";
    }
}
