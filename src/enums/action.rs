//! Next-step instructions returned by the Authlete API, and the reasons and
//! results a caller reports back to it.
//!
//! Each endpoint response carries an `action` telling the caller what to
//! do next (e.g. return `400 Bad Request` with the `responseContent`).

authlete_enum! {
    /// `action` of `/auth/authorization`
    pub enum AuthorizationAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        /// Redirect to the client with the `responseContent` as location
        Location => "LOCATION",
        /// Return an HTML form auto-posting to the client
        Form => "FORM",
        /// Call `/auth/authorization/issue` or `/auth/authorization/fail` without user interaction
        NoInteraction => "NO_INTERACTION",
        /// Authenticate the user and obtain consent
        Interaction => "INTERACTION",
    }
}

authlete_enum! {
    /// `action` of `/auth/authorization/fail`
    pub enum AuthorizationFailAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        Location => "LOCATION",
        Form => "FORM",
    }
}

authlete_enum! {
    /// Why an authorization request is being rejected
    pub enum AuthorizationFailReason {
        Unknown => "UNKNOWN",
        NotLoggedIn => "NOT_LOGGED_IN",
        MaxAgeNotSupported => "MAX_AGE_NOT_SUPPORTED",
        ExceedsMaxAge => "EXCEEDS_MAX_AGE",
        DifferentSubject => "DIFFERENT_SUBJECT",
        AcrNotSatisfied => "ACR_NOT_SATISFIED",
        Denied => "DENIED",
        ServerError => "SERVER_ERROR",
        NotAuthenticated => "NOT_AUTHENTICATED",
        AccountSelectionRequired => "ACCOUNT_SELECTION_REQUIRED",
        ConsentRequired => "CONSENT_REQUIRED",
        InteractionRequired => "INTERACTION_REQUIRED",
        InvalidTarget => "INVALID_TARGET",
    }
}

authlete_enum! {
    /// `action` of `/auth/authorization/issue`
    pub enum AuthorizationIssueAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        Location => "LOCATION",
        Form => "FORM",
    }
}

authlete_enum! {
    /// `action` of `/auth/token`
    pub enum TokenAction {
        InvalidClient => "INVALID_CLIENT",
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        /// Validate the resource owner credentials, then call `/auth/token/issue` or `/auth/token/fail`
        Password => "PASSWORD",
        Ok => "OK",
    }
}

authlete_enum! {
    /// `action` of `/auth/token/fail`
    pub enum TokenFailAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
    }
}

authlete_enum! {
    /// Why a token request is being rejected
    pub enum TokenFailReason {
        Unknown => "UNKNOWN",
        InvalidResourceOwnerCredentials => "INVALID_RESOURCE_OWNER_CREDENTIALS",
        InvalidTarget => "INVALID_TARGET",
    }
}

authlete_enum! {
    /// `action` of `/auth/token/issue`
    pub enum TokenIssueAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        Ok => "OK",
    }
}

authlete_enum! {
    /// `action` of `/auth/token/create`
    pub enum TokenCreateAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        Forbidden => "FORBIDDEN",
        Ok => "OK",
    }
}

authlete_enum! {
    /// `action` of `/auth/token/update`
    pub enum TokenUpdateAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        Forbidden => "FORBIDDEN",
        NotFound => "NOT_FOUND",
        Ok => "OK",
    }
}

authlete_enum! {
    /// `action` of `/auth/introspection`
    pub enum IntrospectionAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        Unauthorized => "UNAUTHORIZED",
        Forbidden => "FORBIDDEN",
        Ok => "OK",
    }
}

authlete_enum! {
    /// `action` of `/auth/introspection/standard`
    pub enum StandardIntrospectionAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        Ok => "OK",
        /// The `responseContent` is a JWT (RFC 9701)
        Jwt => "JWT",
    }
}

authlete_enum! {
    /// `action` of `/auth/revocation`
    pub enum RevocationAction {
        InvalidClient => "INVALID_CLIENT",
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        Ok => "OK",
    }
}

authlete_enum! {
    /// `action` of `/auth/userinfo`
    pub enum UserInfoAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        Unauthorized => "UNAUTHORIZED",
        Forbidden => "FORBIDDEN",
        Ok => "OK",
    }
}

authlete_enum! {
    /// `action` of `/auth/userinfo/issue`
    pub enum UserInfoIssueAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        Unauthorized => "UNAUTHORIZED",
        Forbidden => "FORBIDDEN",
        Json => "JSON",
        Jwt => "JWT",
    }
}

authlete_enum! {
    /// `action` of `/backchannel/authentication`
    pub enum BackchannelAuthenticationAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        Unauthorized => "UNAUTHORIZED",
        BadRequest => "BAD_REQUEST",
        /// Identify the user from the hint, then call issue or fail
        UserIdentification => "USER_IDENTIFICATION",
    }
}

authlete_enum! {
    /// `action` of `/backchannel/authentication/issue`
    pub enum BackchannelAuthenticationIssueAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        InvalidTicket => "INVALID_TICKET",
        Ok => "OK",
    }
}

authlete_enum! {
    /// `action` of `/backchannel/authentication/fail`
    pub enum BackchannelAuthenticationFailAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        Forbidden => "FORBIDDEN",
        BadRequest => "BAD_REQUEST",
    }
}

authlete_enum! {
    /// Why a backchannel authentication request is being rejected
    pub enum BackchannelAuthenticationFailReason {
        AccessDenied => "ACCESS_DENIED",
        ExpiredLoginHintToken => "EXPIRED_LOGIN_HINT_TOKEN",
        InvalidBindingMessage => "INVALID_BINDING_MESSAGE",
        InvalidTarget => "INVALID_TARGET",
        InvalidUserCode => "INVALID_USER_CODE",
        MissingUserCode => "MISSING_USER_CODE",
        ServerError => "SERVER_ERROR",
        UnauthorizedClient => "UNAUTHORIZED_CLIENT",
        UnknownUserId => "UNKNOWN_USER_ID",
    }
}

authlete_enum! {
    /// `action` of `/backchannel/authentication/complete`
    pub enum BackchannelAuthenticationCompleteAction {
        ServerError => "SERVER_ERROR",
        /// Poll mode, nothing to do
        NoAction => "NO_ACTION",
        /// Send the `responseContent` to the client notification endpoint
        Notification => "NOTIFICATION",
    }
}

authlete_enum! {
    /// Outcome of end-user authentication reported to `/backchannel/authentication/complete`
    pub enum BackchannelAuthenticationCompleteResult {
        Authorized => "AUTHORIZED",
        AccessDenied => "ACCESS_DENIED",
        TransactionFailed => "TRANSACTION_FAILED",
    }
}

authlete_enum! {
    /// `action` of `/device/authorization`
    pub enum DeviceAuthorizationAction {
        Ok => "OK",
        BadRequest => "BAD_REQUEST",
        Unauthorized => "UNAUTHORIZED",
        InternalServerError => "INTERNAL_SERVER_ERROR",
    }
}

authlete_enum! {
    /// `action` of `/device/verification`
    pub enum DeviceVerificationAction {
        Valid => "VALID",
        Expired => "EXPIRED",
        NotExist => "NOT_EXIST",
        ServerError => "SERVER_ERROR",
    }
}

authlete_enum! {
    /// `action` of `/device/complete`
    pub enum DeviceCompleteAction {
        Success => "SUCCESS",
        InvalidRequest => "INVALID_REQUEST",
        UserCodeExpired => "USER_CODE_EXPIRED",
        UserCodeNotExist => "USER_CODE_NOT_EXIST",
        ServerError => "SERVER_ERROR",
    }
}

authlete_enum! {
    /// Outcome of end-user authorization reported to `/device/complete`
    pub enum DeviceCompleteResult {
        Authorized => "AUTHORIZED",
        AccessDenied => "ACCESS_DENIED",
        TransactionFailed => "TRANSACTION_FAILED",
    }
}

authlete_enum! {
    /// `action` of the dynamic client registration endpoints
    pub enum ClientRegistrationAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        Created => "CREATED",
        Unauthorized => "UNAUTHORIZED",
        Deleted => "DELETED",
        Updated => "UPDATED",
        Ok => "OK",
    }
}

authlete_enum! {
    /// `action` of `/pushed_auth_req`
    pub enum PushedAuthReqAction {
        Created => "CREATED",
        BadRequest => "BAD_REQUEST",
        Unauthorized => "UNAUTHORIZED",
        Forbidden => "FORBIDDEN",
        PayloadTooLarge => "PAYLOAD_TOO_LARGE",
        InternalServerError => "INTERNAL_SERVER_ERROR",
    }
}

authlete_enum! {
    /// Grant management action (`grant_management_action`)
    pub enum GmAction {
        Query => "QUERY",
        Revoke => "REVOKE",
        Create => "CREATE",
        Merge => "MERGE",
        Replace => "REPLACE",
    }
}

authlete_enum! {
    /// `action` of `/gm`
    pub enum GmResponseAction {
        Ok => "OK",
        NoContent => "NO_CONTENT",
        Unauthorized => "UNAUTHORIZED",
        Forbidden => "FORBIDDEN",
        NotFound => "NOT_FOUND",
        CallerError => "CALLER_ERROR",
        AuthleteError => "AUTHLETE_ERROR",
    }
}

authlete_enum! {
    /// `action` of the `/hsk` endpoints
    pub enum HskAction {
        Success => "SUCCESS",
        InvalidRequest => "INVALID_REQUEST",
        NotFound => "NOT_FOUND",
        ServerError => "SERVER_ERROR",
    }
}
