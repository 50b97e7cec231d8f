//! Attribute catalogue for the Messenger widget.
//! Mirrors the vendor's documented configuration and identification fields as
//! plain serde records; documented constraints (minimum paddings, required
//! identifiers) are structural or doc-level only — values are forwarded to the
//! widget as-is, whose own validation governs behavior.

mod identity;
mod messenger;
mod payload;

pub use identity::{AvatarAttributes, CompanyAttributes, UserAttributes};
pub use messenger::MessengerAttributes;
pub use payload::{BootArgs, MessengerSettings};
