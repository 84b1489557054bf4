//! Minimal client for ZeroVM on Swift (Zwift).
//!
//! Authenticates against a Keystone (v2) identity service, discovers the Swift
//! endpoint from the service catalog, and submits ZeroVM job descriptions to it.
//!
//! ```no_run
//! # async fn run() -> zwift::Result<()> {
//! use serde_json::json;
//! use zwift::Client;
//!
//! let client = Client::new("http://keystone:5000/v2.0", "demo", "demo", "secret");
//! client.authenticate().await?;
//!
//! let job = json!([{ "name": "hello", "exec": { "path": "file://python2.7:python", "args": zwift::job::join_args(&["-c", "print 'hi'"]) } }]);
//! let stdout = client.execute(&job).await?;
//! # Ok(())
//! # }
//! ```

// region:    --- Modules

mod client;
mod error;

pub mod identity;
pub mod job;
pub mod resolver;
pub mod webc;

// -- Flatten
pub use client::*;
pub use error::{Error, Result};

// endregion: --- Modules
