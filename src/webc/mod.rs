//! Web client layer. The `WebTransport` seam, its request/response types,
//! and the reqwest based `WebClient` used by default.

// region:    --- Modules

mod error;
mod transport;
mod web_client;

pub use error::{Error, Result};
pub use transport::*;
pub use web_client::*;

// endregion: --- Modules
