use crate::resolver::Endpoint;
use serde_json::Value;
use value_ext::JsonValueExt;

/// Name of the object storage service in the Keystone service catalog.
pub const SWIFT_SERVICE_NAME: &str = "swift";

/// Returns `endpoints[0].publicURL` of the FIRST `access.serviceCatalog` entry named `service_name`.
///
/// Entries are read one by one (`{ "name": .., "endpoints": [{ "publicURL": .. }] }`).
/// An entry without a string `name` is skipped. Scanning stops at the first entry with a
/// matching name, even when that entry has no usable endpoint.
pub fn find_public_endpoint(catalog: &[Value], service_name: &str) -> Option<Endpoint> {
	let entry = catalog
		.iter()
		.find(|entry| entry.x_get::<String>("name").is_ok_and(|name| name == service_name))?;

	match entry.x_get::<String>("/endpoints/0/publicURL") {
		Ok(url) => Some(Endpoint::from_owned(url)),
		Err(_) => {
			tracing::warn!("service catalog entry '{service_name}' has no endpoint with a publicURL");
			None
		}
	}
}

// region:    --- Tests


// endregion: --- Tests
