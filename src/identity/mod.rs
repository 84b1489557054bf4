//! Keystone (v2) identity protocol: the token request payload and
//! the parsing of the token grant with its service catalog.

// region:    --- Modules

mod service_catalog;
mod token_grant;

pub use service_catalog::*;
pub use token_grant::*;

// endregion: --- Modules
