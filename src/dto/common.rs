//! Building blocks shared by several endpoints

use crate::enums::{GrantType, Sns};

use super::field::{EnumOf, Flag, IntOrStr, NestedList, Text, TextList};
use super::TaggedValue;

dto! {
    /// Fields common to every Authlete API response
    pub struct ApiResponse {
        /// Result code such as `A001001`
        result_code, set_result_code: Text => "resultCode";
        /// Human readable result description
        result_message, set_result_message: Text => "resultMessage";
    }
}

dto! {
    /// Key/value pair of strings
    pub struct Pair {
        key, set_key: Text => "key";
        value, set_value: Text => "value";
    }
}

dto! {
    /// Arbitrary property attached to an access token or an authorization code
    pub struct Property {
        key, set_key: Text => "key";
        value, set_value: Text => "value";
        /// Hidden properties are not returned by introspection
        hidden, set_hidden: Flag => "hidden";
    }
}

dto! {
    /// A URI with a name
    pub struct NamedUri {
        name, set_name: Text => "name";
        uri, set_uri: Text => "uri";
    }
}

dto! {
    /// Scope supported by a service
    pub struct Scope {
        name, set_name: Text => "name";
        default_entry, set_default_entry: Flag => "defaultEntry";
        description, set_description: Text => "description";
        descriptions, set_descriptions: NestedList<TaggedValue> => "descriptions";
        attributes, set_attributes: NestedList<Pair> => "attributes";
    }
}

dto! {
    /// Credentials of a service at a social networking service
    pub struct SnsCredentials {
        sns, set_sns: EnumOf<Sns> => "sns";
        api_key, set_api_key: Text => "apiKey";
        api_secret, set_api_secret: Text => "apiSecret";
    }
}

dto! {
    /// Scope with a dynamic value, e.g. `payment:123`
    pub struct DynamicScope {
        name, set_name: Text => "name";
        value, set_value: Text => "value";
    }
}

dto! {
    /// One element of `authorization_details` (RFC 9396)
    pub struct AuthzDetailsElement {
        /// The `type` of the element
        element_type, set_element_type: Text => "type";
        locations, set_locations: TextList => "locations";
        actions, set_actions: TextList => "actions";
        data_types, set_data_types: TextList => "dataTypes";
        identifier, set_identifier: Text => "identifier";
        privileges, set_privileges: TextList => "privileges";
        /// Remaining members of the element as JSON text
        other_fields, set_other_fields: Text => "otherFields";
    }
}

dto! {
    /// The `authorization_details` request parameter (RFC 9396)
    pub struct AuthzDetails {
        elements, set_elements: NestedList<AuthzDetailsElement> => "elements";
    }
}

dto! {
    /// Summary of an access token, as listed by `/auth/token/get/list`
    pub struct AccessToken {
        access_token_hash, set_access_token_hash: Text => "accessTokenHash";
        access_token_expires_at, set_access_token_expires_at: IntOrStr => "accessTokenExpiresAt";
        refresh_token_hash, set_refresh_token_hash: Text => "refreshTokenHash";
        refresh_token_expires_at, set_refresh_token_expires_at: IntOrStr => "refreshTokenExpiresAt";
        created_at, set_created_at: IntOrStr => "createdAt";
        last_refreshed_at, set_last_refreshed_at: IntOrStr => "lastRefreshedAt";
        client_id, set_client_id: IntOrStr => "clientId";
        subject, set_subject: Text => "subject";
        grant_type, set_grant_type: EnumOf<GrantType> => "grantType";
        scopes, set_scopes: TextList => "scopes";
        properties, set_properties: NestedList<Property> => "properties";
        refresh_token_scopes, set_refresh_token_scopes: TextList => "refreshTokenScopes";
    }
}

dto! {
    /// Client settings only an administrator may change
    pub struct ClientExtension {
        requestable_scopes, set_requestable_scopes: TextList => "requestableScopes";
        requestable_scopes_enabled, set_requestable_scopes_enabled: Flag => "requestableScopesEnabled";
        access_token_duration, set_access_token_duration: IntOrStr => "accessTokenDuration";
        refresh_token_duration, set_refresh_token_duration: IntOrStr => "refreshTokenDuration";
        token_exchange_permitted, set_token_exchange_permitted: Flag => "tokenExchangePermitted";
    }
}

dto! {
    /// A key stored in a hardware security key module
    pub struct Hsk {
        kty, set_kty: Text => "kty";
        /// Key usage, `sig` or `enc`
        key_use, set_key_use: Text => "use";
        kid, set_kid: Text => "kid";
        hsm_name, set_hsm_name: Text => "hsmName";
        handle, set_handle: Text => "handle";
        public_key, set_public_key: Text => "publicKey";
        /// JWS algorithm of a `sig` key, JWE algorithm of an `enc` key
        alg, set_alg: Text => "alg";
    }
}
