//! Keys in hardware security modules (`/hsk/*`)

use crate::enums::HskAction;

use super::common::Hsk;
use super::field::{EnumOf, Nested, NestedList, Text};

dto! {
    /// Request of `/hsk/create`
    pub struct HskCreateRequest {
        /// Key type, `EC` or `RSA`
        kty, set_kty: Text => "kty";
        /// Key usage, `sig` or `enc`
        key_use, set_key_use: Text => "use";
        /// JWS or JWE algorithm name, depending on `use`
        alg, set_alg: Text => "alg";
        kid, set_kid: Text => "kid";
        hsm_name, set_hsm_name: Text => "hsmName";
    }
}

dto! {
    /// Response of `/hsk/create`, `/hsk/delete/{handle}` and `/hsk/get/{handle}`
    pub struct HskResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<HskAction> => "action";
        hsk, set_hsk: Nested<Hsk> => "hsk";
    }
}

dto! {
    /// Response of `/hsk/get/list`
    pub struct HskListResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<HskAction> => "action";
        hsks, set_hsks: NestedList<Hsk> => "hsks";
    }
}
