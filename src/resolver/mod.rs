//! Resolver types: where to authenticate, with what, and where the service lives.

// region:    --- Modules

mod credentials;
mod endpoint;

pub use credentials::*;
pub use endpoint::*;

// endregion: --- Modules
