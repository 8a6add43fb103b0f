//! # Authlete
//!
//! Client library for the [Authlete](https://www.authlete.com) API, the
//! OAuth 2.0 / OpenID Connect backend that authorization servers and
//! resource servers delegate protocol processing to.
//!
//! ## DTOs
//!
//! Every request and response body is a typed DTO in [dto]. DTOs convert
//! to and from JSON through the [dto::Dto] trait, reading Authlete's lenient
//! wire format (numbers as strings, `"true"` for `true`, ...) with a fixed
//! coercion rule per field:
//!
//! - [dto::Dto::to_json] / [dto::Dto::from_json]
//! - [dto::Dto::to_array] / [dto::Dto::from_array]
//!
//! Closed sets of names (grant types, algorithms, response actions) are the
//! enums in [enums].
//!
//! ## API
//!
//! - [api::AuthleteConfiguration] : base URL, credentials, API version
//! - [api::AuthleteApi::execute] : calls any endpoint of [api::endpoints]
//! - [api::AuthleteApi::call] : sends a request DTO
//! - [api::AuthleteApi::get_client_list], [api::AuthleteApi::get_service_list],
//!   [api::AuthleteApi::get_token_list] : paginated lists
//! - [api::AuthleteApi::get_service_configuration], [api::AuthleteApi::get_service_jwks]
//!
//! Calls are sent through an [types::AuthleteHttpClient]. The `http_client`
//! feature (on by default) provides one backed by reqwest.

pub mod api;
pub mod dto;
pub mod enums;
pub mod helpers;
#[cfg(feature = "http_client")]
pub mod http_client;
pub mod types;
pub mod web;

/// Re exports from the crate
pub mod re_exports {
    pub use serde_json::{self, json, Value};
    pub use url;
}
