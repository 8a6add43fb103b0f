//! Default Http Client

use std::collections::HashMap;

use reqwest::{ClientBuilder, Method, Proxy, Response};
use tracing::trace;

use crate::api::DEFAULT_CONNECTION_TIMEOUT;
use crate::types::http_client::{AuthleteHttpClient, HttpMethod, HttpRequest, HttpResponse};

/// The default HttpClient, backed by reqwest
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultHttpClient;

impl DefaultHttpClient {
    async fn to_response(response: Response) -> HttpResponse {
        let status_code = response.status().as_u16();

        let mut headers: HashMap<String, Vec<String>> = HashMap::new();

        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers
                    .entry(name.as_str().to_string())
                    .or_default()
                    .push(value.to_string());
            }
        }

        let body = match response.text().await {
            Ok(body) if !body.is_empty() => Some(body),
            _ => None,
        };

        HttpResponse {
            status_code,
            headers,
            body,
        }
    }
}

impl AuthleteHttpClient for DefaultHttpClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, String> {
        let mut builder = ClientBuilder::new()
            .connect_timeout(req.connection_timeout.unwrap_or(DEFAULT_CONNECTION_TIMEOUT));

        if let Some(proxy) = &req.proxy {
            builder = builder.proxy(Proxy::all(proxy.as_str()).map_err(|e| format!("{e}"))?);
        }

        let client = builder.build().map_err(|e| format!("{e}"))?;

        let method = match req.method {
            HttpMethod::GET => Method::GET,
            HttpMethod::POST => Method::POST,
            HttpMethod::PUT => Method::PUT,
            HttpMethod::DELETE => Method::DELETE,
        };

        trace!(method = req.method.as_str(), url = req.url.as_str(), "sending request");

        let mut req_builder = client.request(method, req.url);

        if let Some(body) = req.body {
            req_builder = req_builder.body(body);
        }

        for (name, values) in req.headers {
            for value in values {
                req_builder = req_builder.header(name.clone(), value);
            }
        }

        req_builder = req_builder.header(
            "User-Agent",
            concat!("authlete-rust/", env!("CARGO_PKG_VERSION")),
        );

        match req_builder.send().await {
            Ok(res) => {
                trace!(status = res.status().as_u16(), "received response");
                Ok(Self::to_response(res).await)
            }
            Err(e) => Err(format!("{e}")),
        }
    }
}
