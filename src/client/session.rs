use crate::resolver::Endpoint;

/// Snapshot of what `Client::authenticate` established.
///
/// Both fields start as `None`. They are only written by a successful `authenticate`;
/// there is no transition back to unauthenticated.
#[derive(Debug, Clone, Default)]
pub struct Session {
	pub token: Option<String>,
	pub service_endpoint: Option<Endpoint>,
}

impl Session {
	pub fn is_authenticated(&self) -> bool {
		self.token.is_some()
	}
}
