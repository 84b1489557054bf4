use crate::client::{ClientBuilder, Session};
use crate::resolver::{Credentials, Endpoint};
use crate::webc::WebTransport;
use std::sync::{Arc, RwLock};

/// ZeroVM on Swift client.
///
/// Cheap to clone; clones share credentials, transport and session.
#[derive(Clone)]
pub struct Client {
	pub(super) inner: Arc<ClientInner>,
}

/// Constructors
impl Client {
	/// A client using the default reqwest transport. No I/O happens here.
	pub fn new(
		auth_url: impl Into<String>,
		tenant: impl Into<String>,
		username: impl Into<String>,
		password: impl Into<String>,
	) -> Self {
		Self::builder()
			.with_credentials(Credentials::new(auth_url, tenant, username, password))
			.build()
	}

	pub fn builder() -> ClientBuilder {
		ClientBuilder::default()
	}
}

/// Getters
impl Client {
	pub fn credentials(&self) -> &Credentials {
		&self.inner.credentials
	}

	/// Clone of the current session (token and discovered endpoint).
	pub fn session(&self) -> Session {
		self.inner.session_snapshot()
	}

	pub fn token(&self) -> Option<String> {
		self.session().token
	}

	pub fn service_endpoint(&self) -> Option<Endpoint> {
		self.session().service_endpoint
	}
}

impl std::fmt::Debug for Client {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let session = self.session();
		f.debug_struct("Client")
			.field("credentials", &self.inner.credentials)
			.field("authenticated", &session.is_authenticated())
			.field("service_endpoint", &session.service_endpoint)
			.finish()
	}
}

// region:    --- ClientInner

pub(super) struct ClientInner {
	pub(super) credentials: Credentials,
	pub(super) transport: Arc<dyn WebTransport>,
	pub(super) session: RwLock<Session>,
}

impl ClientInner {
	/// The lock is never held across an `.await`, and a poisoned lock still holds a consistent `Session`.
	pub(super) fn session_snapshot(&self) -> Session {
		match self.session.read() {
			Ok(session) => session.clone(),
			Err(poisoned) => poisoned.into_inner().clone(),
		}
	}

	pub(super) fn update_session(&self, f: impl FnOnce(&mut Session)) {
		match self.session.write() {
			Ok(mut session) => f(&mut session),
			Err(poisoned) => f(&mut poisoned.into_inner()),
		}
	}
}

// endregion: --- ClientInner
