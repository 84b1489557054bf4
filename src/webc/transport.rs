use crate::webc::{Error, Result};
use bytes::Bytes;
use futures::future::BoxFuture;
use reqwest::{Method, StatusCode};
use serde_json::Value;

/// The HTTP capability the `Client` is built on.
///
/// Implementations send one request and resolve once the full response body has been received.
/// A non-2xx status is NOT an error at this level; the `Client` decides what a failed status means.
/// Transport level failures (connection refused, DNS, TLS, ...) resolve to `Err`.
pub trait WebTransport: Send + Sync {
	fn send(&self, request: WebRequest) -> BoxFuture<'_, Result<WebResponse>>;
}

// region:    --- WebRequest

#[derive(Debug, Clone)]
pub struct WebRequest {
	pub method: Method,
	pub url: String,
	pub headers: Vec<(String, String)>,
	pub body: WebBody,
}

#[derive(Debug, Clone)]
pub enum WebBody {
	Json(Value),
	Bytes(Bytes),
}

impl WebRequest {
	pub fn post_json(url: impl Into<String>, headers: Vec<(String, String)>, payload: Value) -> Self {
		Self {
			method: Method::POST,
			url: url.into(),
			headers,
			body: WebBody::Json(payload),
		}
	}

	pub fn put_bytes(url: impl Into<String>, headers: Vec<(String, String)>, content: impl Into<Bytes>) -> Self {
		Self {
			method: Method::PUT,
			url: url.into(),
			headers,
			body: WebBody::Bytes(content.into()),
		}
	}

	/// First header value matching `name` (case insensitive).
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(k, _)| k.eq_ignore_ascii_case(name))
			.map(|(_, v)| v.as_str())
	}
}

// endregion: --- WebRequest

// region:    --- WebResponse

#[derive(Debug, Clone)]
pub struct WebResponse {
	pub status: StatusCode,
	/// The JSON body, or a JSON string holding the raw text when the service did not answer JSON.
	pub body: Value,
}

impl WebResponse {
	pub fn new(status: StatusCode, body: Value) -> Self {
		Self { status, body }
	}

	/// Turn a non-2xx response into `Error::ResponseFailedStatus`.
	pub fn into_success(self) -> Result<Self> {
		if self.status.is_success() {
			Ok(self)
		} else {
			let body = match self.body {
				Value::String(text) => text,
				other => other.to_string(),
			};
			Err(Error::ResponseFailedStatus {
				status: self.status,
				body,
			})
		}
	}
}

// endregion: --- WebResponse

// region:    --- Tests


// endregion: --- Tests
