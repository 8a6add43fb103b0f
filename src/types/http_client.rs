//! # Http Client Interface for Custom Http Clients

use std::collections::HashMap;
use std::time::Duration;

use url::Url;

/// The Http methods used by the Authlete API
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// The GET method is used to retrieve data from a server.
    #[default]
    GET,
    /// The POST method is used to submit data to a server.
    POST,
    /// The PUT method is used to replace all existing data on a server with the provided data.
    PUT,
    /// The DELETE method is used to delete a resource from a server.
    DELETE,
}

impl HttpMethod {
    /// Upper case name of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
        }
    }
}

/// # Request
/// A single call to the Authlete API, ready to be sent.
#[derive(Debug)]
pub struct HttpRequest {
    /// Url of the request including query params
    pub url: Url,
    /// Http method of the request
    pub method: HttpMethod,
    /// Headers that are sent in the request
    pub headers: HashMap<String, Vec<String>>,
    /// The request body to be sent
    pub body: Option<String>,
    /// Connection timeout requested by the configuration
    pub connection_timeout: Option<Duration>,
    /// Proxy the request should be routed through
    pub proxy: Option<Url>,
}

impl HttpRequest {
    pub(crate) fn new(url: Url) -> Self {
        Self {
            url,
            headers: HashMap::new(),
            method: HttpMethod::GET,
            body: None,
            connection_timeout: None,
            proxy: None,
        }
    }

    pub(crate) fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub(crate) fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();

        if let Some(values) = self.headers.get_mut(&name) {
            values.push(value);
        } else {
            let values = vec![value];
            self.headers.insert(name, values);
        }
        self
    }

    pub(crate) fn json(mut self, json: String) -> Self {
        self.headers.insert(
            "content-type".to_string(),
            vec!["application/json".to_string()],
        );
        self.body(json)
    }

    pub(crate) fn body(mut self, body: String) -> Self {
        self.headers.insert(
            "content-length".to_string(),
            vec![body.len().to_string()],
        );
        self.body = Some(body);
        self
    }

    pub(crate) fn connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = Some(timeout);
        self
    }

    pub(crate) fn proxy(mut self, proxy: Option<Url>) -> Self {
        self.proxy = proxy;
        self
    }
}

/// Represents an HTTP response received from the Authlete API.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    /// The HTTP status code of the response (e.g., 200 for success, 404 for Not Found).
    pub status_code: u16,
    /// Response headers, names in lower case
    pub headers: HashMap<String, Vec<String>>,
    /// The optional body content of the response. None if there is no body content (String).
    pub body: Option<String>,
}

impl HttpResponse {
    /// Whether the status code is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// This trait defines the interface for making HTTP requests used by the Authlete API client.
/// Users who need custom HTTP clients need to implement this trait.
pub trait AuthleteHttpClient {
    /// Makes an HTTP request using the provided HttpRequest object.
    ///
    /// The future resolves to either a `Result<HttpResponse, String>`.
    ///  * On success, the result is `Ok(HttpResponse)` containing the HTTP response, whatever its status code.
    ///  * On error, the result is `Err(String)` with an error message describing the failure
    ///    (connection refused, timeout, ...).
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, String>> + Send;
}
