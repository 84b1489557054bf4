//! The client module: the `Client`, its builder, and the session it keeps between calls.

// region:    --- Modules

mod builder;
mod client_impl;
mod client_types;
mod session;

pub use builder::*;
pub use client_types::*;
pub use session::*;

// endregion: --- Modules
