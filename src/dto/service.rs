//! Service (authorization server instance) management

use crate::enums::{
    ClaimType, ClientAuthMethod, DeliveryMode, Display, GrantType, JwsAlg, Prompt, ResponseType,
    ServiceProfile, Sns, UserCodeCharset,
};

use super::common::{Hsk, NamedUri, Pair, Scope, SnsCredentials};
use super::field::{EnumList, EnumOf, Flag, IntOrStr, Integer, NestedList, Text, TextList};

dto! {
    /// Configuration of a service
    pub struct Service {
        /// Sequential number of the service
        number, set_number: IntOrStr => "number";
        service_owner_number, set_service_owner_number: IntOrStr => "serviceOwnerNumber";
        service_name, set_service_name: Text => "serviceName";
        issuer, set_issuer: Text => "issuer";
        description, set_description: Text => "description";
        api_key, set_api_key: IntOrStr => "apiKey";
        api_secret, set_api_secret: Text => "apiSecret";
        supported_snses, set_supported_snses: EnumList<Sns> => "supportedSnses";
        sns_credentials, set_sns_credentials: NestedList<SnsCredentials> => "snsCredentials";
        created_at, set_created_at: IntOrStr => "createdAt";
        modified_at, set_modified_at: IntOrStr => "modifiedAt";
        metadata, set_metadata: NestedList<Pair> => "metadata";
        clients_per_developer, set_clients_per_developer: IntOrStr => "clientsPerDeveloper";
        client_id_alias_enabled, set_client_id_alias_enabled: Flag => "clientIdAliasEnabled";
        authentication_callback_endpoint, set_authentication_callback_endpoint: Text => "authenticationCallbackEndpoint";
        authentication_callback_api_key, set_authentication_callback_api_key: Text => "authenticationCallbackApiKey";
        authentication_callback_api_secret, set_authentication_callback_api_secret: Text => "authenticationCallbackApiSecret";
        supported_acrs, set_supported_acrs: TextList => "supportedAcrs";
        developer_authentication_callback_endpoint, set_developer_authentication_callback_endpoint: Text => "developerAuthenticationCallbackEndpoint";
        developer_authentication_callback_api_key, set_developer_authentication_callback_api_key: Text => "developerAuthenticationCallbackApiKey";
        developer_authentication_callback_api_secret, set_developer_authentication_callback_api_secret: Text => "developerAuthenticationCallbackApiSecret";
        supported_developer_snses, set_supported_developer_snses: EnumList<Sns> => "supportedDeveloperSnses";
        developer_sns_credentials, set_developer_sns_credentials: NestedList<SnsCredentials> => "developerSnsCredentials";
        supported_grant_types, set_supported_grant_types: EnumList<GrantType> => "supportedGrantTypes";
        supported_response_types, set_supported_response_types: EnumList<ResponseType> => "supportedResponseTypes";
        supported_authorization_detail_types, set_supported_authorization_detail_types: TextList => "supportedAuthorizationDetailTypes";
        supported_service_profiles, set_supported_service_profiles: EnumList<ServiceProfile> => "supportedServiceProfiles";
        error_description_omitted, set_error_description_omitted: Flag => "errorDescriptionOmitted";
        error_uri_omitted, set_error_uri_omitted: Flag => "errorUriOmitted";
        authorization_endpoint, set_authorization_endpoint: Text => "authorizationEndpoint";
        direct_authorization_endpoint_enabled, set_direct_authorization_endpoint_enabled: Flag => "directAuthorizationEndpointEnabled";
        supported_ui_locales, set_supported_ui_locales: TextList => "supportedUiLocales";
        supported_displays, set_supported_displays: EnumList<Display> => "supportedDisplays";
        supported_prompt_values, set_supported_prompt_values: EnumList<Prompt> => "supportedPromptValues";
        pkce_required, set_pkce_required: Flag => "pkceRequired";
        pkce_s256_required, set_pkce_s256_required: Flag => "pkceS256Required";
        authorization_response_duration, set_authorization_response_duration: IntOrStr => "authorizationResponseDuration";
        token_endpoint, set_token_endpoint: Text => "tokenEndpoint";
        direct_token_endpoint_enabled, set_direct_token_endpoint_enabled: Flag => "directTokenEndpointEnabled";
        supported_token_auth_methods, set_supported_token_auth_methods: EnumList<ClientAuthMethod> => "supportedTokenAuthMethods";
        mutual_tls_validate_pki_cert_chain, set_mutual_tls_validate_pki_cert_chain: Flag => "mutualTlsValidatePkiCertChain";
        trusted_root_certificates, set_trusted_root_certificates: TextList => "trustedRootCertificates";
        missing_client_id_allowed, set_missing_client_id_allowed: Flag => "missingClientIdAllowed";
        revocation_endpoint, set_revocation_endpoint: Text => "revocationEndpoint";
        direct_revocation_endpoint_enabled, set_direct_revocation_endpoint_enabled: Flag => "directRevocationEndpointEnabled";
        supported_revocation_auth_methods, set_supported_revocation_auth_methods: EnumList<ClientAuthMethod> => "supportedRevocationAuthMethods";
        introspection_endpoint, set_introspection_endpoint: Text => "introspectionEndpoint";
        supported_introspection_auth_methods, set_supported_introspection_auth_methods: EnumList<ClientAuthMethod> => "supportedIntrospectionAuthMethods";
        pushed_auth_req_endpoint, set_pushed_auth_req_endpoint: Text => "pushedAuthReqEndpoint";
        pushed_auth_req_duration, set_pushed_auth_req_duration: IntOrStr => "pushedAuthReqDuration";
        par_required, set_par_required: Flag => "parRequired";
        request_object_required, set_request_object_required: Flag => "requestObjectRequired";
        traditional_request_object_processing_applied, set_traditional_request_object_processing_applied: Flag => "traditionalRequestObjectProcessingApplied";
        mutual_tls_sender_constrained_access_tokens, set_mutual_tls_sender_constrained_access_tokens: Flag => "mutualTlsSenderConstrainedAccessTokens";
        access_token_type, set_access_token_type: Text => "accessTokenType";
        tls_client_certificate_bound_access_tokens, set_tls_client_certificate_bound_access_tokens: Flag => "tlsClientCertificateBoundAccessTokens";
        access_token_duration, set_access_token_duration: IntOrStr => "accessTokenDuration";
        single_access_token_per_subject, set_single_access_token_per_subject: Flag => "singleAccessTokenPerSubject";
        access_token_sign_alg, set_access_token_sign_alg: EnumOf<JwsAlg> => "accessTokenSignAlg";
        access_token_signature_key_id, set_access_token_signature_key_id: Text => "accessTokenSignatureKeyId";
        refresh_token_duration, set_refresh_token_duration: IntOrStr => "refreshTokenDuration";
        refresh_token_duration_kept, set_refresh_token_duration_kept: Flag => "refreshTokenDurationKept";
        refresh_token_kept, set_refresh_token_kept: Flag => "refreshTokenKept";
        supported_scopes, set_supported_scopes: NestedList<Scope> => "supportedScopes";
        scope_required, set_scope_required: Flag => "scopeRequired";
        id_token_duration, set_id_token_duration: IntOrStr => "idTokenDuration";
        allowable_clock_skew, set_allowable_clock_skew: IntOrStr => "allowableClockSkew";
        supported_claim_types, set_supported_claim_types: EnumList<ClaimType> => "supportedClaimTypes";
        supported_claim_locales, set_supported_claim_locales: TextList => "supportedClaimLocales";
        supported_claims, set_supported_claims: TextList => "supportedClaims";
        claim_shortcut_restrictive, set_claim_shortcut_restrictive: Flag => "claimShortcutRestrictive";
        jwks_uri, set_jwks_uri: Text => "jwksUri";
        direct_jwks_endpoint_enabled, set_direct_jwks_endpoint_enabled: Flag => "directJwksEndpointEnabled";
        /// JWK Set as JSON text
        jwks, set_jwks: Text => "jwks";
        id_token_signature_key_id, set_id_token_signature_key_id: Text => "idTokenSignatureKeyId";
        user_info_signature_key_id, set_user_info_signature_key_id: Text => "userInfoSignatureKeyId";
        authorization_signature_key_id, set_authorization_signature_key_id: Text => "authorizationSignatureKeyId";
        user_info_endpoint, set_user_info_endpoint: Text => "userInfoEndpoint";
        direct_user_info_endpoint_enabled, set_direct_user_info_endpoint_enabled: Flag => "directUserInfoEndpointEnabled";
        dynamic_registration_supported, set_dynamic_registration_supported: Flag => "dynamicRegistrationSupported";
        registration_endpoint, set_registration_endpoint: Text => "registrationEndpoint";
        registration_management_endpoint, set_registration_management_endpoint: Text => "registrationManagementEndpoint";
        policy_uri, set_policy_uri: Text => "policyUri";
        tos_uri, set_tos_uri: Text => "tosUri";
        service_documentation, set_service_documentation: Text => "serviceDocumentation";
        backchannel_authentication_endpoint, set_backchannel_authentication_endpoint: Text => "backchannelAuthenticationEndpoint";
        supported_backchannel_token_delivery_modes, set_supported_backchannel_token_delivery_modes: EnumList<DeliveryMode> => "supportedBackchannelTokenDeliveryModes";
        backchannel_auth_req_id_duration, set_backchannel_auth_req_id_duration: IntOrStr => "backchannelAuthReqIdDuration";
        backchannel_polling_interval, set_backchannel_polling_interval: IntOrStr => "backchannelPollingInterval";
        backchannel_user_code_parameter_supported, set_backchannel_user_code_parameter_supported: Flag => "backchannelUserCodeParameterSupported";
        backchannel_binding_message_required_in_fapi, set_backchannel_binding_message_required_in_fapi: Flag => "backchannelBindingMessageRequiredInFapi";
        device_authorization_endpoint, set_device_authorization_endpoint: Text => "deviceAuthorizationEndpoint";
        device_verification_uri, set_device_verification_uri: Text => "deviceVerificationUri";
        device_verification_uri_complete, set_device_verification_uri_complete: Text => "deviceVerificationUriComplete";
        device_flow_code_duration, set_device_flow_code_duration: IntOrStr => "deviceFlowCodeDuration";
        device_flow_polling_interval, set_device_flow_polling_interval: IntOrStr => "deviceFlowPollingInterval";
        user_code_charset, set_user_code_charset: EnumOf<UserCodeCharset> => "userCodeCharset";
        user_code_length, set_user_code_length: IntOrStr => "userCodeLength";
        mtls_endpoint_aliases, set_mtls_endpoint_aliases: NestedList<NamedUri> => "mtlsEndpointAliases";
        supported_trust_frameworks, set_supported_trust_frameworks: TextList => "supportedTrustFrameworks";
        supported_evidence, set_supported_evidence: TextList => "supportedEvidence";
        supported_identity_documents, set_supported_identity_documents: TextList => "supportedIdentityDocuments";
        supported_verification_methods, set_supported_verification_methods: TextList => "supportedVerificationMethods";
        supported_verified_claims, set_supported_verified_claims: TextList => "supportedVerifiedClaims";
        hsm_enabled, set_hsm_enabled: Flag => "hsmEnabled";
        hsks, set_hsks: NestedList<Hsk> => "hsks";
        grant_management_endpoint, set_grant_management_endpoint: Text => "grantManagementEndpoint";
        grant_management_action_required, set_grant_management_action_required: Flag => "grantManagementActionRequired";
        unauthorized_on_client_config_supported, set_unauthorized_on_client_config_supported: Flag => "unauthorizedOnClientConfigSupported";
        dcr_scope_used_as_requestable, set_dcr_scope_used_as_requestable: Flag => "dcrScopeUsedAsRequestable";
        end_session_endpoint, set_end_session_endpoint: Text => "endSessionEndpoint";
        loopback_redirection_uri_variable, set_loopback_redirection_uri_variable: Flag => "loopbackRedirectionUriVariable";
        request_object_audience_checked, set_request_object_audience_checked: Flag => "requestObjectAudienceChecked";
        access_token_for_external_attachment_embedded, set_access_token_for_external_attachment_embedded: Flag => "accessTokenForExternalAttachmentEmbedded";
        token_expiration_linked, set_token_expiration_linked: Flag => "tokenExpirationLinked";
        front_channel_request_object_encryption_required, set_front_channel_request_object_encryption_required: Flag => "frontChannelRequestObjectEncryptionRequired";
        request_object_encryption_alg_match_required, set_request_object_encryption_alg_match_required: Flag => "requestObjectEncryptionAlgMatchRequired";
        request_object_encryption_enc_match_required, set_request_object_encryption_enc_match_required: Flag => "requestObjectEncryptionEncMatchRequired";
        dpop_nonce_required, set_dpop_nonce_required: Flag => "dpopNonceRequired";
    }
}

dto! {
    /// Response of `/service/get/list`
    pub struct ServiceListResponse {
        /// Index of the first service, inclusive
        start, set_start: Integer => "start";
        /// Index of the last service, exclusive
        end, set_end: Integer => "end";
        /// Number of services, regardless of the requested range
        total_count, set_total_count: Integer => "totalCount";
        services, set_services: NestedList<Service> => "services";
    }
}
