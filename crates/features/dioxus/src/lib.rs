//! Dioxus bindings for the Messenger widget.
//!
//! [`MessengerProvider`] injects the vendor loader, installs a shared
//! [`MessengerContext`] for its subtree, and bridges widget events back into
//! the app. Consumers grab the context with [`use_messenger`]; without a
//! provider above them they get the unbound capability set, which raises a
//! structured fault naming the operation on first use.

mod context;
mod hooks;
mod loader;
mod provider;
mod transport;

pub use context::MessengerContext;
pub use hooks::{use_messenger, use_visitor_id};
pub use provider::{MessengerProvider, MessengerProviderProps};
pub use transport::EvalTransport;
