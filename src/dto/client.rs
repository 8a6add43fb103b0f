//! Client management and dynamic client registration

use crate::enums::{
    ApplicationType, ClientAuthMethod, ClientRegistrationAction, ClientType, DeliveryMode,
    GrantType, JweAlg, JweEnc, JwsAlg, ResponseType, SubjectType,
};

use super::common::ClientExtension;
use super::field::{
    EnumList, EnumOf, Flag, IntOrStr, Integer, Nested, NestedList, OptionalInteger, Text, TextList,
    TriBool,
};
use super::TaggedValue;

dto! {
    /// A client application registered to a service.
    ///
    /// Localizable metadata such as `client_name` comes as a default value
    /// plus a list of [TaggedValue]s, one per language tag.
    pub struct Client {
        /// Sequential number of the client
        number, set_number: IntOrStr => "number";
        /// Number of the service the client belongs to
        service_number, set_service_number: IntOrStr => "serviceNumber";
        developer, set_developer: Text => "developer";
        client_id, set_client_id: IntOrStr => "clientId";
        client_id_alias, set_client_id_alias: Text => "clientIdAlias";
        client_id_alias_enabled, set_client_id_alias_enabled: Flag => "clientIdAliasEnabled";
        client_secret, set_client_secret: Text => "clientSecret";
        client_type, set_client_type: EnumOf<ClientType> => "clientType";
        redirect_uris, set_redirect_uris: TextList => "redirectUris";
        response_types, set_response_types: EnumList<ResponseType> => "responseTypes";
        grant_types, set_grant_types: EnumList<GrantType> => "grantTypes";
        application_type, set_application_type: EnumOf<ApplicationType> => "applicationType";
        contacts, set_contacts: TextList => "contacts";
        client_name, set_client_name: Text => "clientName";
        client_names, set_client_names: NestedList<TaggedValue> => "clientNames";
        logo_uri, set_logo_uri: Text => "logoUri";
        logo_uris, set_logo_uris: NestedList<TaggedValue> => "logoUris";
        client_uri, set_client_uri: Text => "clientUri";
        client_uris, set_client_uris: NestedList<TaggedValue> => "clientUris";
        policy_uri, set_policy_uri: Text => "policyUri";
        policy_uris, set_policy_uris: NestedList<TaggedValue> => "policyUris";
        tos_uri, set_tos_uri: Text => "tosUri";
        tos_uris, set_tos_uris: NestedList<TaggedValue> => "tosUris";
        jwks_uri, set_jwks_uri: Text => "jwksUri";
        /// JWK Set as JSON text
        jwks, set_jwks: Text => "jwks";
        derived_sector_identifier, set_derived_sector_identifier: Text => "derivedSectorIdentifier";
        sector_identifier_uri, set_sector_identifier_uri: Text => "sectorIdentifierUri";
        subject_type, set_subject_type: EnumOf<SubjectType> => "subjectType";
        id_token_sign_alg, set_id_token_sign_alg: EnumOf<JwsAlg> => "idTokenSignAlg";
        id_token_encryption_alg, set_id_token_encryption_alg: EnumOf<JweAlg> => "idTokenEncryptionAlg";
        id_token_encryption_enc, set_id_token_encryption_enc: EnumOf<JweEnc> => "idTokenEncryptionEnc";
        user_info_sign_alg, set_user_info_sign_alg: EnumOf<JwsAlg> => "userInfoSignAlg";
        user_info_encryption_alg, set_user_info_encryption_alg: EnumOf<JweAlg> => "userInfoEncryptionAlg";
        user_info_encryption_enc, set_user_info_encryption_enc: EnumOf<JweEnc> => "userInfoEncryptionEnc";
        request_sign_alg, set_request_sign_alg: EnumOf<JwsAlg> => "requestSignAlg";
        request_encryption_alg, set_request_encryption_alg: EnumOf<JweAlg> => "requestEncryptionAlg";
        request_encryption_enc, set_request_encryption_enc: EnumOf<JweEnc> => "requestEncryptionEnc";
        token_auth_method, set_token_auth_method: EnumOf<ClientAuthMethod> => "tokenAuthMethod";
        token_auth_sign_alg, set_token_auth_sign_alg: EnumOf<JwsAlg> => "tokenAuthSignAlg";
        /// Default maximum authentication age in seconds
        default_max_age, set_default_max_age: IntOrStr => "defaultMaxAge";
        default_acrs, set_default_acrs: TextList => "defaultAcrs";
        auth_time_required, set_auth_time_required: Flag => "authTimeRequired";
        login_uri, set_login_uri: Text => "loginUri";
        request_uris, set_request_uris: TextList => "requestUris";
        description, set_description: Text => "description";
        descriptions, set_descriptions: NestedList<TaggedValue> => "descriptions";
        /// Creation time, milliseconds since the Unix epoch
        created_at, set_created_at: IntOrStr => "createdAt";
        modified_at, set_modified_at: IntOrStr => "modifiedAt";
        extension, set_extension: Nested<ClientExtension> => "extension";
        tls_client_auth_subject_dn, set_tls_client_auth_subject_dn: Text => "tlsClientAuthSubjectDn";
        tls_client_auth_san_dns, set_tls_client_auth_san_dns: Text => "tlsClientAuthSanDns";
        tls_client_auth_san_uri, set_tls_client_auth_san_uri: Text => "tlsClientAuthSanUri";
        tls_client_auth_san_ip, set_tls_client_auth_san_ip: Text => "tlsClientAuthSanIp";
        tls_client_auth_san_email, set_tls_client_auth_san_email: Text => "tlsClientAuthSanEmail";
        tls_client_certificate_bound_access_tokens, set_tls_client_certificate_bound_access_tokens: Flag => "tlsClientCertificateBoundAccessTokens";
        self_signed_certificate_key_id, set_self_signed_certificate_key_id: Text => "selfSignedCertificateKeyId";
        software_id, set_software_id: Text => "softwareId";
        software_version, set_software_version: Text => "softwareVersion";
        authorization_sign_alg, set_authorization_sign_alg: EnumOf<JwsAlg> => "authorizationSignAlg";
        authorization_encryption_alg, set_authorization_encryption_alg: EnumOf<JweAlg> => "authorizationEncryptionAlg";
        authorization_encryption_enc, set_authorization_encryption_enc: EnumOf<JweEnc> => "authorizationEncryptionEnc";
        bc_delivery_mode, set_bc_delivery_mode: EnumOf<DeliveryMode> => "bcDeliveryMode";
        bc_notification_endpoint, set_bc_notification_endpoint: Text => "bcNotificationEndpoint";
        bc_request_sign_alg, set_bc_request_sign_alg: EnumOf<JwsAlg> => "bcRequestSignAlg";
        bc_user_code_required, set_bc_user_code_required: Flag => "bcUserCodeRequired";
        dynamically_registered, set_dynamically_registered: Flag => "dynamicallyRegistered";
        registration_access_token_hash, set_registration_access_token_hash: Text => "registrationAccessTokenHash";
        authorization_details_types, set_authorization_details_types: TextList => "authorizationDetailsTypes";
        /// `None` defers to the service setting
        par_required, set_par_required: TriBool => "parRequired";
        /// `None` defers to the service setting
        request_object_required, set_request_object_required: TriBool => "requestObjectRequired";
        front_channel_request_object_encryption_required, set_front_channel_request_object_encryption_required: Flag => "frontChannelRequestObjectEncryptionRequired";
        request_object_encryption_alg_match_required, set_request_object_encryption_alg_match_required: Flag => "requestObjectEncryptionAlgMatchRequired";
        request_object_encryption_enc_match_required, set_request_object_encryption_enc_match_required: Flag => "requestObjectEncryptionEncMatchRequired";
        digest_algorithm, set_digest_algorithm: Text => "digestAlgorithm";
        single_access_token_per_subject, set_single_access_token_per_subject: Flag => "singleAccessTokenPerSubject";
        pkce_required, set_pkce_required: Flag => "pkceRequired";
        pkce_s256_required, set_pkce_s256_required: Flag => "pkceS256Required";
        dpop_required, set_dpop_required: Flag => "dpopRequired";
    }
}

dto! {
    /// Response of `/client/get/list`
    pub struct ClientListResponse {
        developer, set_developer: Text => "developer";
        /// Index of the first client, inclusive
        start, set_start: Integer => "start";
        /// Index of the last client, exclusive
        end, set_end: Integer => "end";
        /// Number of clients, regardless of the requested range
        total_count, set_total_count: Integer => "totalCount";
        clients, set_clients: NestedList<Client> => "clients";
    }
}

dto! {
    /// Request of `/client/secret/update`
    pub struct ClientSecretUpdateRequest {
        client_secret, set_client_secret: Text => "clientSecret";
    }
}

dto! {
    /// Response of `/client/secret/update`
    pub struct ClientSecretUpdateResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        new_client_secret, set_new_client_secret: Text => "newClientSecret";
        old_client_secret, set_old_client_secret: Text => "oldClientSecret";
    }
}

dto! {
    /// Response of `/client/secret/refresh`
    pub struct ClientSecretRefreshResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        new_client_secret, set_new_client_secret: Text => "newClientSecret";
        old_client_secret, set_old_client_secret: Text => "oldClientSecret";
    }
}

dto! {
    /// Request of `/client/authorization/get/list`
    pub struct ClientAuthorizationGetListRequest {
        subject, set_subject: Text => "subject";
        developer, set_developer: Text => "developer";
        /// Unset lets the server pick the start of the range
        start, set_start: OptionalInteger => "start";
        end, set_end: OptionalInteger => "end";
    }
}

dto! {
    /// Request of `/client/authorization/update`
    pub struct ClientAuthorizationUpdateRequest {
        subject, set_subject: Text => "subject";
        scopes, set_scopes: TextList => "scopes";
    }
}

dto! {
    /// Request of `/client/authorization/delete`
    pub struct ClientAuthorizationDeleteRequest {
        subject, set_subject: Text => "subject";
    }
}

dto! {
    /// Response of `/client/authorization/get/list`
    pub struct AuthorizedClientListResponse {
        subject, set_subject: Text => "subject";
        developer, set_developer: Text => "developer";
        start, set_start: Integer => "start";
        end, set_end: Integer => "end";
        total_count, set_total_count: Integer => "totalCount";
        clients, set_clients: NestedList<Client> => "clients";
    }
}

dto! {
    /// Request of `/client/granted_scopes/get` and `/client/granted_scopes/delete`
    pub struct GrantedScopesRequest {
        subject, set_subject: Text => "subject";
    }
}

dto! {
    /// Response of `/client/granted_scopes/get`
    pub struct GrantedScopesGetResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        service_api_key, set_service_api_key: IntOrStr => "serviceApiKey";
        client_id, set_client_id: IntOrStr => "clientId";
        subject, set_subject: Text => "subject";
        latest_granted_scopes, set_latest_granted_scopes: TextList => "latestGrantedScopes";
        merged_granted_scopes, set_merged_granted_scopes: TextList => "mergedGrantedScopes";
        modified_at, set_modified_at: IntOrStr => "modifiedAt";
    }
}

dto! {
    /// Requestable scopes of a client, see `/client/extension/requestable_scopes/*`
    pub struct RequestableScopes {
        requestable_scopes, set_requestable_scopes: TextList => "requestableScopes";
    }
}

dto! {
    /// Request of the dynamic client registration endpoints (RFC 7591, RFC 7592)
    pub struct ClientRegistrationRequest {
        /// Client metadata as JSON text
        json, set_json: Text => "json";
        /// Registration access token presented by the client
        token, set_token: Text => "token";
        client_id, set_client_id: IntOrStr => "clientId";
    }
}

dto! {
    /// Response of the dynamic client registration endpoints
    pub struct ClientRegistrationResponse {
        result_code, set_result_code: Text => "resultCode";
        result_message, set_result_message: Text => "resultMessage";
        action, set_action: EnumOf<ClientRegistrationAction> => "action";
        response_content, set_response_content: Text => "responseContent";
        client, set_client: Nested<Client> => "client";
    }
}
