//! Send GraphQL operations to the endpoint under test

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

use crate::errors::SmokeError;

/// The body of a GraphQL request
#[derive(Debug, Clone, Serialize)]
pub struct Request<'a> {
    pub query: &'a str,
    pub variables: Map<String, Value>,
}

/// The outcome of a single GraphQL round trip
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,

    /// The decoded body, or `None` if it was not a JSON object
    pub body: Option<Map<String, Value>>,
}

impl Response {
    /// The status code followed by its canonical reason, e.g. `200 OK`
    pub fn status_line(&self) -> String {
        self.status.to_string()
    }

    /// The body as two-space indented JSON
    pub fn pretty_body(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.body)
    }
}

/// Build the headers sent with every request.
///
/// `Content-Type` and `Authorization` always win over entries of the same name in `extra`.
pub fn default_headers(auth_token: &str, extra: &HeaderMap) -> Result<HeaderMap, SmokeError> {
    let mut headers = extra.clone();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(AUTHORIZATION, HeaderValue::from_str(auth_token)?);
    Ok(headers)
}

/// A client bound to a single GraphQL endpoint
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: Url,
    headers: HeaderMap,
}

impl Client {
    pub fn new(
        endpoint: Url,
        headers: HeaderMap,
        timeout: Option<Duration>,
    ) -> Result<Self, SmokeError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build().map_err(SmokeError::ClientBuild)?,
            endpoint,
            headers,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST the request and wait for the complete response.
    ///
    /// Only transport failures, including a timeout while reading the body, are
    /// errors. A body that cannot otherwise be read or decoded is reported as `None`.
    pub async fn send(&self, request: &Request<'_>) -> Result<Response, SmokeError> {
        let body = serde_json::to_vec(request)?;
        debug!(endpoint = %self.endpoint, bytes = body.len(), "Sending GraphQL request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .headers(self.headers.clone())
            .body(body)
            .send()
            .await
            .map_err(SmokeError::Transport)?;

        let status = response.status();
        let body = match response.bytes().await {
            Ok(bytes) => decode_body(&bytes),
            Err(error) if error.is_timeout() => return Err(SmokeError::Transport(error)),
            Err(error) => {
                warn!("Failed to read GraphQL response body: {error}");
                None
            }
        };

        Ok(Response { status, body })
    }
}

/// Decode the first JSON value of the body, ignoring anything after it
fn decode_body(bytes: &[u8]) -> Option<Map<String, Value>> {
    serde_json::Deserializer::from_slice(bytes)
        .into_iter::<Map<String, Value>>()
        .next()?
        .inspect_err(|error| debug!("Response body is not a JSON object: {error}"))
        .ok()
}
