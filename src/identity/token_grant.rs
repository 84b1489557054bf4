use crate::identity::{SWIFT_SERVICE_NAME, find_public_endpoint};
use crate::resolver::{Credentials, Endpoint};
use crate::{Error, Result};
use serde_json::{Value, json};
use value_ext::JsonValueExt;

/// The Keystone v2 password authentication payload.
///
/// `{"auth": {"tenantName": .., "passwordCredentials": {"username": .., "password": ..}}}`
pub fn auth_payload(credentials: &Credentials) -> Value {
	json!({
		"auth": {
			"tenantName": credentials.tenant(),
			"passwordCredentials": {
				"username": credentials.username(),
				"password": credentials.password(),
			}
		}
	})
}

/// What a successful token request gives back.
#[derive(Debug, Clone)]
pub struct TokenGrant {
	/// `access.token.id`
	pub token: String,
	/// The first `swift` endpoint of `access.serviceCatalog`, if any.
	pub service_endpoint: Option<Endpoint>,
}

impl TokenGrant {
	pub fn from_response_body(mut body: Value) -> Result<Self> {
		let token: String = body.x_get("/access/token/id").map_err(|err| Error::IdentityResponseInvalid {
			cause: format!("no token id: {err:?}"),
		})?;

		// The catalog never fails the grant. A missing or non-list catalog is scanned as empty.
		let catalog = match body.pointer_mut("/access/serviceCatalog").map(Value::take) {
			Some(Value::Array(entries)) => entries,
			None => Vec::new(),
			Some(other) => {
				tracing::warn!("service catalog is not a list, ignoring it: {other}");
				Vec::new()
			}
		};

		let service_endpoint = find_public_endpoint(&catalog, SWIFT_SERVICE_NAME);

		Ok(TokenGrant {
			token,
			service_endpoint,
		})
	}
}

// region:    --- Tests


// endregion: --- Tests
