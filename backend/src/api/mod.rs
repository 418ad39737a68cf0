//! HTTP API module.
//!
//! API types and the log broadcaster are always available (the browser
//! frontend logs through the broadcaster too); the server itself is only
//! built with the `cli` feature.

pub mod logs;
#[cfg(feature = "cli")]
pub mod server;
pub mod types;

pub use logs::*;
#[cfg(feature = "cli")]
pub use server::{router, start_server};
pub use types::*;
