//! OAuth 2.0 / OpenID Connect vocabulary

authlete_enum! {
    /// Grant types (RFC 6749, CIBA, RFC 8628)
    pub enum GrantType {
        /// `authorization_code`
        AuthorizationCode => "AUTHORIZATION_CODE",
        /// `implicit`
        Implicit => "IMPLICIT",
        /// `password`
        Password => "PASSWORD",
        /// `client_credentials`
        ClientCredentials => "CLIENT_CREDENTIALS",
        /// `refresh_token`
        RefreshToken => "REFRESH_TOKEN",
        /// `urn:openid:params:grant-type:ciba`
        Ciba => "CIBA",
        /// `urn:ietf:params:oauth:grant-type:device_code`
        DeviceCode => "DEVICE_CODE",
    }
}

authlete_enum! {
    /// Combinations of the `response_type` request parameter
    pub enum ResponseType {
        /// `none`
        None => "NONE",
        /// `code`
        Code => "CODE",
        /// `token`
        Token => "TOKEN",
        /// `id_token`
        IdToken => "ID_TOKEN",
        /// `code token`
        CodeToken => "CODE_TOKEN",
        /// `code id_token`
        CodeIdToken => "CODE_ID_TOKEN",
        /// `id_token token`
        IdTokenToken => "ID_TOKEN_TOKEN",
        /// `code id_token token`
        CodeIdTokenToken => "CODE_ID_TOKEN_TOKEN",
    }
}

authlete_enum! {
    /// Client authentication methods at the token endpoint
    pub enum ClientAuthMethod {
        /// No client authentication (public clients)
        None => "NONE",
        /// `client_secret_basic`
        ClientSecretBasic => "CLIENT_SECRET_BASIC",
        /// `client_secret_post`
        ClientSecretPost => "CLIENT_SECRET_POST",
        /// `client_secret_jwt`
        ClientSecretJwt => "CLIENT_SECRET_JWT",
        /// `private_key_jwt`
        PrivateKeyJwt => "PRIVATE_KEY_JWT",
        /// `tls_client_auth` (RFC 8705)
        TlsClientAuth => "TLS_CLIENT_AUTH",
        /// `self_signed_tls_client_auth` (RFC 8705)
        SelfSignedTlsClientAuth => "SELF_SIGNED_TLS_CLIENT_AUTH",
    }
}

authlete_enum! {
    /// Values of the `display` request parameter
    pub enum Display {
        /// `page`
        Page => "PAGE",
        /// `popup`
        Popup => "POPUP",
        /// `touch`
        Touch => "TOUCH",
        /// `wap`
        Wap => "WAP",
    }
}

authlete_enum! {
    /// Values of the `prompt` request parameter
    pub enum Prompt {
        /// `none`
        None => "NONE",
        /// `login`
        Login => "LOGIN",
        /// `consent`
        Consent => "CONSENT",
        /// `select_account`
        SelectAccount => "SELECT_ACCOUNT",
        /// `create`
        Create => "CREATE",
    }
}

authlete_enum! {
    /// Subject identifier types
    pub enum SubjectType {
        /// `public`
        Public => "PUBLIC",
        /// `pairwise`
        Pairwise => "PAIRWISE",
    }
}

authlete_enum! {
    /// `application_type` client metadata
    pub enum ApplicationType {
        /// `web`
        Web => "WEB",
        /// `native`
        Native => "NATIVE",
    }
}

authlete_enum! {
    /// Client types (RFC 6749 section 2.1)
    pub enum ClientType {
        /// Clients incapable of keeping a secret
        Public => "PUBLIC",
        /// Clients capable of keeping a secret
        Confidential => "CONFIDENTIAL",
    }
}

authlete_enum! {
    /// CIBA token delivery modes
    pub enum DeliveryMode {
        /// The client polls the token endpoint
        Poll => "POLL",
        /// The server notifies the client which then calls the token endpoint
        Ping => "PING",
        /// The server pushes the tokens to the client
        Push => "PUSH",
    }
}

authlete_enum! {
    /// Claim types (OpenID Connect Core section 5.6)
    pub enum ClaimType {
        Normal => "NORMAL",
        Aggregated => "AGGREGATED",
        Distributed => "DISTRIBUTED",
    }
}

authlete_enum! {
    /// Character sets of device flow user codes
    pub enum UserCodeCharset {
        /// `BCDFGHJKLMNPQRSTVWXZ`
        Base20 => "BASE20",
        /// `0123456789`
        Numeric => "NUMERIC",
    }
}

authlete_enum! {
    /// Social networking services
    pub enum Sns {
        Facebook => "FACEBOOK",
    }
}

authlete_enum! {
    /// Profiles a service may declare support for
    pub enum ServiceProfile {
        Fapi => "FAPI",
        OpenBanking => "OPEN_BANKING",
    }
}

authlete_enum! {
    /// How the end-user is identified in a backchannel authentication request
    pub enum UserIdentificationHintType {
        /// `id_token_hint`
        IdTokenHint => "ID_TOKEN_HINT",
        /// `login_hint_token`
        LoginHintToken => "LOGIN_HINT_TOKEN",
        /// `login_hint`
        LoginHint => "LOGIN_HINT",
    }
}
