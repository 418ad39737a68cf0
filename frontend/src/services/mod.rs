//! Browser services.
//!
//! # Services
//!
//! - [`host`] - File read/save through browser APIs
//! - [`notify`] - Blocking alerts for failed operations

pub mod host;
pub mod notify;

pub use host::*;
pub use notify::*;
