//! Some support utilities for the tests
//! Note: Must be imported in each test file

#![allow(unused)] // For test support

use futures::future::BoxFuture;
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use zwift::Client;
use zwift::resolver::Credentials;
use zwift::webc::{self, WebRequest, WebResponse, WebTransport};

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

// region:    --- Constants

pub const AUTH_URL: &str = "http://keystone.test:5000/v2.0";
pub const TENANT: &str = "demo";
pub const USERNAME: &str = "alice";
pub const PASSWORD: &str = "s3cret";

// endregion: --- Constants

// region:    --- FakeTransport

/// A `WebTransport` that records every request and answers with scripted responses, in order.
/// When the script runs out, it answers with a transport error.
#[derive(Clone, Default)]
pub struct FakeTransport {
	requests: Arc<Mutex<Vec<WebRequest>>>,
	responses: Arc<Mutex<VecDeque<webc::Result<WebResponse>>>>,
}

impl FakeTransport {
	pub fn respond_json(&self, status: StatusCode, body: Value) -> &Self {
		self.push(Ok(WebResponse::new(status, body)))
	}

	pub fn respond_error(&self, cause: &str) -> &Self {
		self.push(Err(webc::Error::Transport {
			cause: cause.to_string(),
		}))
	}

	pub fn requests(&self) -> Vec<WebRequest> {
		self.requests.lock().unwrap().clone()
	}

	fn push(&self, response: webc::Result<WebResponse>) -> &Self {
		self.responses.lock().unwrap().push_back(response);
		self
	}
}

impl WebTransport for FakeTransport {
	fn send(&self, request: WebRequest) -> BoxFuture<'_, webc::Result<WebResponse>> {
		self.requests.lock().unwrap().push(request);
		let response = self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
			Err(webc::Error::Transport {
				cause: "no scripted response".to_string(),
			})
		});
		Box::pin(async move { response })
	}
}

// endregion: --- FakeTransport

// region:    --- Seeders

pub fn new_client(transport: &FakeTransport) -> Client {
	Client::builder()
		.with_credentials(Credentials::new(AUTH_URL, TENANT, USERNAME, PASSWORD))
		.with_transport(transport.clone())
		.build()
}

/// A Keystone v2 token response with the given catalog entries as `(name, publicURL)`.
pub fn token_response(token: &str, catalog: &[(&str, &str)]) -> Value {
	let catalog: Vec<Value> = catalog
		.iter()
		.map(|(name, url)| {
			json!({
				"name": name,
				"type": "object-store",
				"endpoints": [{"publicURL": url, "region": "RegionOne"}]
			})
		})
		.collect();

	json!({
		"access": {
			"token": {"id": token, "expires": "2014-06-01T00:00:00Z"},
			"serviceCatalog": catalog,
			"user": {"name": USERNAME}
		}
	})
}

/// Script a successful authentication and run it.
pub async fn authenticated_client(transport: &FakeTransport, token: &str, swift_url: &str) -> Result<Client> {
	transport.respond_json(StatusCode::OK, token_response(token, &[("swift", swift_url)]));
	let client = new_client(transport);
	client.authenticate().await?;
	Ok(client)
}

// endregion: --- Seeders

// region:    --- Tracing

/// Opt-in logs for a test run, e.g., `RUST_LOG=zwift=trace`.
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

// endregion: --- Tracing
