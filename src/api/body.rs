use crate::types::AuthleteResult;

/// What can be sent as the body of an API call
pub trait RequestBody {
    /// JSON text of the body, `None` to send no body
    fn to_body(&self) -> Option<String>;
}

/// What the body of a successful API response can be decoded into
pub trait ResponseBody: Sized {
    /// Decodes the response body, `None` when the response had none
    fn from_body(body: Option<&str>) -> AuthleteResult<Self>;
}

impl RequestBody for () {
    fn to_body(&self) -> Option<String> {
        None
    }
}

/// Discards the body
impl ResponseBody for () {
    fn from_body(_: Option<&str>) -> AuthleteResult<Self> {
        Ok(())
    }
}

/// Keeps the raw body, empty when there is none
impl ResponseBody for String {
    fn from_body(body: Option<&str>) -> AuthleteResult<Self> {
        Ok(body.unwrap_or_default().to_string())
    }
}
