//! Kernel utilities shared across `MessengerHub` crates.
//! Keep this crate lightweight: it holds the payload sanitizer that runs
//! before anything reaches the external widget, and the leveled diagnostics
//! used by every other crate in the workspace.
//!
//! ## Sanitizing a payload
//! ```rust
//! # use msgr_kernel::sanitize;
//! # use serde_json::json;
//! let mut payload = json!({ "name": "Ann", "phone": null });
//! sanitize(&mut payload);
//! assert_eq!(payload, json!({ "name": "Ann" }));
//! ```

pub mod diag;
mod sanitize;

pub use diag::{Fault, FaultKind, LogLevel};
pub use sanitize::{is_empty_object, sanitize};
