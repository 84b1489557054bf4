use crate::webc;
use derive_more::{Display, From};
use value_ext::JsonValueExtError;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
#[display("{self:?}")]
pub enum Error {
	// -- Session
	/// No successful `authenticate` happened yet, so there is no token.
	NotAuthenticated,
	/// Authenticated, but the service catalog had no `swift` entry.
	NoServiceEndpoint,

	// -- Resolver
	EnvVarMissing {
		name: &'static str,
	},
	InvalidEndpointUrl {
		url: String,
		cause: String,
	},

	// -- Identity
	IdentityResponseInvalid {
		cause: String,
	},

	// -- Web Call
	WebCall {
		url: String,
		webc_error: webc::Error,
	},

	// -- Externals
	#[from]
	JobSerialization(serde_json::Error),
	#[from]
	JsonValueExt(JsonValueExtError),
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
