//! # Types Module
//! Error and HTTP collaborator types

mod errors;
pub mod http_client;

pub use errors::{json_type_name, ApiError, AuthleteError, AuthleteResult};
pub use http_client::{AuthleteHttpClient, HttpMethod, HttpRequest, HttpResponse};
