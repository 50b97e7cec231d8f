//! Facade crate for `MessengerHub`.
//! Re-exports the attribute schema, the capability set, and (behind the `ui`
//! feature) the Dioxus provider and hooks. Keep this crate thin: it composes
//! other crates, not behavior.
//!
//! ## Usage
//! - Add `msgr` with the `ui` feature and wrap your app in
//!   `MessengerProvider`.
//! - Call `use_messenger()` anywhere below it to drive the widget.

pub use msgr_kernel as kernel;
pub use msgr_schema as schema;
pub use msgr_widget as widget;

#[cfg(feature = "ui")]
pub use msgr_dioxus as ui;

/// The handful of names almost every integration touches.
pub mod prelude {
    pub use msgr_kernel::{is_empty_object, sanitize, Fault, FaultKind, LogLevel};
    pub use msgr_schema::{
        AvatarAttributes, BootArgs, CompanyAttributes, MessengerAttributes, MessengerSettings,
        UserAttributes,
    };
    pub use msgr_widget::{Messenger, UnboundMessenger, WidgetClient, WidgetMethod, WidgetTransport};

    #[cfg(feature = "ui")]
    pub use msgr_dioxus::{use_messenger, use_visitor_id, MessengerContext, MessengerProvider};
}
