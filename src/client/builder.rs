use crate::client::client_types::ClientInner;
use crate::client::{Client, Session};
use crate::resolver::Credentials;
use crate::webc::{WebClient, WebTransport};
use std::sync::{Arc, RwLock};

/// The builder for the `Client` structure.
///
/// - `ClientBuilder::default()`
/// - `Client::builder()`
#[derive(Default)]
pub struct ClientBuilder {
	credentials: Option<Credentials>,
	transport: Option<Arc<dyn WebTransport>>,
}

/// Builder methods
impl ClientBuilder {
	/// Set the identity service URL and the credentials to authenticate with.
	/// Defaults to empty credentials, which will only fail at `authenticate` time.
	pub fn with_credentials(mut self, credentials: Credentials) -> Self {
		self.credentials = Some(credentials);
		self
	}

	/// Use a custom `WebTransport` (any HTTP stack, or a test double).
	pub fn with_transport(mut self, transport: impl WebTransport + 'static) -> Self {
		self.transport = Some(Arc::new(transport));
		self
	}

	/// Use the default `WebClient` transport over a preconfigured `reqwest::Client` (proxy, TLS, timeouts, ...).
	pub fn with_reqwest(self, reqwest_client: reqwest::Client) -> Self {
		self.with_transport(WebClient::from_reqwest_client(reqwest_client))
	}

	pub fn build(self) -> Client {
		let credentials = self.credentials.unwrap_or_else(|| Credentials::new("", "", "", ""));
		let transport: Arc<dyn WebTransport> = match self.transport {
			Some(transport) => transport,
			None => Arc::new(WebClient::default()),
		};

		let inner = ClientInner {
			credentials,
			transport,
			session: RwLock::new(Session::default()),
		};
		Client { inner: Arc::new(inner) }
	}
}
