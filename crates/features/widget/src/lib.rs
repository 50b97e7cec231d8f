//! Capability set for the Messenger widget.
//!
//! The [`Messenger`] trait enumerates every operation the widget exposes.
//! [`UnboundMessenger`] is the default, diagnostic-only implementation that
//! is live until a provider installs a real binding; [`WidgetClient`] is that
//! real binding, forwarding operations through an injected
//! [`WidgetTransport`] so platforms (and tests) choose how the vendor call is
//! actually made.

mod capability;
mod client;
mod method;

pub use capability::{Messenger, UnboundMessenger};
pub use client::{WidgetClient, WidgetTransport};
pub use method::WidgetMethod;
