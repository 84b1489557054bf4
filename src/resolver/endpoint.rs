use crate::{Error, Result};
use std::sync::Arc;

/// A construct to store the endpoint of a service.
/// It is designed to be efficiently clonable, as it is snapshotted for every request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Endpoint {
	inner: Arc<str>,
}

/// Constructors
impl Endpoint {
	#[must_use]
	pub fn from_static(url: &'static str) -> Self {
		Self { inner: Arc::from(url) }
	}

	pub fn from_owned(url: impl Into<Arc<str>>) -> Self {
		Self { inner: url.into() }
	}
}

/// Getters
impl Endpoint {
	#[must_use]
	pub fn url(&self) -> &str {
		&self.inner
	}

	/// The URL of the object `path` under this endpoint (`<url>/<path>`).
	#[must_use]
	pub fn object_url(&self, path: &str) -> String {
		let base = self.inner.trim_end_matches('/');
		let path = path.trim_start_matches('/');
		format!("{base}/{path}")
	}

	/// The `swift://<account>/<path>` URL used by job descriptions to reference objects.
	///
	/// The account is the endpoint URL path without its `/v1/` API version prefix,
	/// so `http://host/v1/AUTH_abc` gives `swift://AUTH_abc/<path>`.
	pub fn swift_url(&self, path: &str) -> Result<String> {
		let parsed = url::Url::parse(&self.inner).map_err(|err| Error::InvalidEndpointUrl {
			url: self.inner.to_string(),
			cause: err.to_string(),
		})?;

		let url_path = parsed.path();
		let account = url_path
			.strip_prefix("/v1/")
			.unwrap_or_else(|| url_path.trim_start_matches('/'))
			.trim_end_matches('/');

		Ok(format!("swift://{account}/{path}"))
	}
}

impl std::fmt::Display for Endpoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.inner)
	}
}

// region:    --- Tests


// endregion: --- Tests
