//! JOSE verification (`/jose/verify`)

use super::field::{Flag, IntOrStr, Text, TextList};

dto! {
    /// Request of `/jose/verify`
    pub struct JoseVerifyRequest {
        /// The JOSE object (JWS) to verify
        jose, set_jose: Text => "jose";
        mandatory_claims, set_mandatory_claims: TextList => "mandatoryClaims";
        /// Allowed clock skew in seconds
        clock_skew, set_clock_skew: IntOrStr => "clockSkew";
        client_identifier, set_client_identifier: Text => "clientIdentifier";
        signed_by_client, set_signed_by_client: Flag => "signedByClient";
    }
}

dto! {
    /// Response of `/jose/verify`
    pub struct JoseVerifyResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        valid, set_valid: Flag => "valid";
        signature_valid, set_signature_valid: Flag => "signatureValid";
        missing_claims, set_missing_claims: TextList => "missingClaims";
        invalid_claims, set_invalid_claims: TextList => "invalidClaims";
        error_descriptions, set_error_descriptions: TextList => "errorDescriptions";
    }
}
