//! # Transport: how a unary call reaches the remote service
//!
//! [`Transport`] is the seam between [`crate::Client`] and the network: it takes
//! a method name, call metadata and an encoded request message, and returns the
//! encoded response message. The client never retries and never sets a
//! deadline; a transport makes exactly one attempt per call.
//!
//! [`GrpcWebTransport`] is the browser-compatible implementation. It speaks
//! gRPC-web over plain HTTP POSTs with `reqwest` (the `fetch` API on WASM), so
//! it works wherever the pages run.
//!
//! | Request part | Value |
//! |--------------|-------|
//! | URL | `{endpoint}/studymap.Studymap/{method}` |
//! | `content-type` / `accept` | `application/grpc-web+proto` |
//! | `x-grpc-web` | `1` |
//! | Metadata | one header per [`Metadata`] entry (`token`, `device`) |
//! | Body | request message in a single data frame ([`codec::encode_frame`]) |

use std::future::Future;

use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;

use crate::codec;
use crate::error::{ClientError, Result};
use crate::proto::SERVICE;

const GRPC_WEB_PROTO: &str = "application/grpc-web+proto";

/// Call metadata sent alongside a request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    entries: Vec<(&'static str, String)>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, replacing any previous value.
    pub fn insert(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

}

/// Async unary call to the remote service.
pub trait Transport {
    fn unary(
        &self,
        method: &'static str,
        metadata: &Metadata,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<u8>>>;
}

/// gRPC-web over HTTP.
#[derive(Clone, Debug)]
pub struct GrpcWebTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl GrpcWebTransport {
    /// Create a transport bound to a base endpoint such as `https://api.studymap.app`.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "endpoint must start with http:// or https://, got {endpoint:?}"
            )));
        }
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Full URL of a method.
    pub fn url(&self, method: &str) -> String {
        format!("{}/{}/{}", self.endpoint, SERVICE, method)
    }
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

impl Transport for GrpcWebTransport {
    async fn unary(
        &self,
        method: &'static str,
        metadata: &Metadata,
        body: Vec<u8>,
    ) -> Result<Vec<u8>> {
        let mut request = self
            .http
            .post(self.url(method))
            .header(CONTENT_TYPE, GRPC_WEB_PROTO)
            .header(ACCEPT, GRPC_WEB_PROTO)
            .header("x-grpc-web", "1")
            .body(codec::encode_frame(&body));
        for (key, value) in metadata.iter() {
            request = request.header(key, value);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;
        read_response(method, status, &headers, &bytes)
    }
}

/// Turn an HTTP response into the encoded reply message.
///
/// A `grpc-status` header wins over the HTTP status, so a rejection sent with
/// a 4xx/5xx still surfaces the server's `grpc-message`.
fn read_response(
    method: &str,
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<Vec<u8>> {
    // Trailers-only responses carry the status in the headers.
    codec::check_status(header(headers, "grpc-status"), header(headers, "grpc-message"))?;
    if !status.is_success() {
        return Err(ClientError::Transport(format!("HTTP {status} from {method}")));
    }

    let frames = codec::decode_frames(body)?;
    frames.trailers.check()?;
    Ok(frames.message.unwrap_or_default())
}
