//! Token introspection (`/auth/introspection*`)

use crate::enums::{IntrospectionAction, StandardIntrospectionAction};

use super::common::{AuthzDetails, Pair, Property};
use super::field::{EnumOf, Flag, IntOrStr, Nested, NestedList, Text, TextList};

dto! {
    /// Request of `/auth/introspection`, used by resource servers
    pub struct IntrospectionRequest {
        token, set_token: Text => "token";
        /// Scopes the protected resource requires
        scopes, set_scopes: TextList => "scopes";
        subject, set_subject: Text => "subject";
        client_certificate, set_client_certificate: Text => "clientCertificate";
        dpop, set_dpop: Text => "dpop";
        htm, set_htm: Text => "htm";
        htu, set_htu: Text => "htu";
        resources, set_resources: TextList => "resources";
        acr_values, set_acr_values: TextList => "acrValues";
        max_age, set_max_age: IntOrStr => "maxAge";
        required_components, set_required_components: TextList => "requiredComponents";
        uri, set_uri: Text => "uri";
        message, set_message: Text => "message";
        target_uri, set_target_uri: Text => "targetUri";
    }
}

dto! {
    /// Response of `/auth/introspection`
    pub struct IntrospectionResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<IntrospectionAction> => "action";
        response_content, set_response_content: Text => "responseContent";
        client_id, set_client_id: IntOrStr => "clientId";
        client_id_alias, set_client_id_alias: Text => "clientIdAlias";
        client_id_alias_used, set_client_id_alias_used: Flag => "clientIdAliasUsed";
        subject, set_subject: Text => "subject";
        scopes, set_scopes: TextList => "scopes";
        /// Expiration of the token, milliseconds since the Unix epoch
        expires_at, set_expires_at: IntOrStr => "expiresAt";
        existent, set_existent: Flag => "existent";
        usable, set_usable: Flag => "usable";
        sufficient, set_sufficient: Flag => "sufficient";
        refreshable, set_refreshable: Flag => "refreshable";
        properties, set_properties: NestedList<Property> => "properties";
        certificate_thumbprint, set_certificate_thumbprint: Text => "certificateThumbprint";
        resources, set_resources: TextList => "resources";
        access_token_resources, set_access_token_resources: TextList => "accessTokenResources";
        authorization_details, set_authorization_details: Nested<AuthzDetails> => "authorizationDetails";
        service_attributes, set_service_attributes: NestedList<Pair> => "serviceAttributes";
        client_attributes, set_client_attributes: NestedList<Pair> => "clientAttributes";
        scope_details, set_scope_details: TextList => "scopeDetails";
        grant_id, set_grant_id: Text => "grantId";
        for_external_attachment, set_for_external_attachment: Flag => "forExternalAttachment";
        acr, set_acr: Text => "acr";
        auth_time, set_auth_time: IntOrStr => "authTime";
        dpop_nonce, set_dpop_nonce: Text => "dpopNonce";
        response_signing_required, set_response_signing_required: Flag => "responseSigningRequired";
    }
}

dto! {
    /// Request of `/auth/introspection/standard` (RFC 7662)
    pub struct StandardIntrospectionRequest {
        /// Request parameters of the introspection endpoint, form-encoded
        parameters, set_parameters: Text => "parameters";
        with_hidden_properties, set_with_hidden_properties: Flag => "withHiddenProperties";
        rs_uri, set_rs_uri: Text => "rsUri";
        http_accept_header, set_http_accept_header: Text => "httpAcceptHeader";
        introspection_sign_alg, set_introspection_sign_alg: Text => "introspectionSignAlg";
        introspection_encryption_alg, set_introspection_encryption_alg: Text => "introspectionEncryptionAlg";
        introspection_encryption_enc, set_introspection_encryption_enc: Text => "introspectionEncryptionEnc";
        shared_key_for_sign, set_shared_key_for_sign: Text => "sharedKeyForSign";
        shared_key_for_encryption, set_shared_key_for_encryption: Text => "sharedKeyForEncryption";
        public_key_for_encryption, set_public_key_for_encryption: Text => "publicKeyForEncryption";
    }
}

dto! {
    /// Response of `/auth/introspection/standard`
    pub struct StandardIntrospectionResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<StandardIntrospectionAction> => "action";
        response_content, set_response_content: Text => "responseContent";
    }
}
