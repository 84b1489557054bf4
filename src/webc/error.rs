use derive_more::{Display, From};
use reqwest::StatusCode;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
#[display("{self:?}")]
pub enum Error {
	ResponseFailedNotJson {
		body: String,
		cause: String,
	},
	ResponseFailedStatus {
		status: StatusCode,
		body: String,
	},

	/// For transports other than the reqwest based `WebClient` (e.g., test doubles).
	Transport {
		cause: String,
	},

	#[from]
	Reqwest(reqwest::Error),
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
