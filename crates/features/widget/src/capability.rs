use msgr_kernel::{diag, FaultKind};
use msgr_schema::{BootArgs, MessengerSettings};
use serde_json::Value;

/// The set of operations every consumer can call to drive the widget.
///
/// Exactly one implementation is live per provider scope: either a bound
/// client forwarding to the external widget, or [`UnboundMessenger`] when no
/// provider has been installed.
pub trait Messenger {
    /// Loads the widget session with the given boot payload.
    fn boot(&self, args: BootArgs);

    /// Clears the widget session and conversation state.
    fn shutdown(&self);

    /// [`Messenger::shutdown`] plus tearing down the vendor globals, so a
    /// later boot starts from a clean slate.
    fn hard_shutdown(&self);

    /// Pushes new attributes into the running session.
    fn update(&self, settings: MessengerSettings);

    /// Hides the messenger panel.
    fn hide(&self);

    /// Opens the messenger panel.
    fn show(&self);

    /// Opens the messenger on the conversation list.
    fn show_messages(&self);

    /// Opens the composer, optionally pre-filled with `prefill`.
    fn show_new_message(&self, prefill: Option<String>);

    /// Looks up the vendor-assigned visitor id, empty when unavailable.
    fn visitor_id(&self) -> String;

    /// Starts the product tour with the given id.
    fn start_tour(&self, tour_id: u64);

    /// Submits a named event, with optional structured metadata.
    fn track_event(&self, event: &str, metadata: Option<Value>);
}

/// The capability set that is live when no provider has been installed.
///
/// Every operation escalates a critical diagnostic naming the operation and
/// performs no external side effects. This is a valid, specified state: it
/// turns a missing `MessengerProvider` into a loud setup error instead of a
/// silent no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnboundMessenger;

fn unbound(operation: &str) -> ! {
    diag::raise(
        FaultKind::MissingProvider,
        format!("`{operation}` invoked with no messenger provider installed; wrap your app in `MessengerProvider`"),
    )
}

impl Messenger for UnboundMessenger {
    fn boot(&self, _args: BootArgs) {
        unbound("boot")
    }

    fn shutdown(&self) {
        unbound("shutdown")
    }

    fn hard_shutdown(&self) {
        unbound("hardShutdown")
    }

    fn update(&self, _settings: MessengerSettings) {
        unbound("update")
    }

    fn hide(&self) {
        unbound("hide")
    }

    fn show(&self) {
        unbound("show")
    }

    fn show_messages(&self) {
        unbound("showMessages")
    }

    fn show_new_message(&self, _prefill: Option<String>) {
        unbound("showNewMessage")
    }

    // The raise happens first, so there is no value to return here; the
    // empty-string fallback for an unresolved visitor id lives in the bound
    // client instead.
    fn visitor_id(&self) -> String {
        unbound("getVisitorId")
    }

    fn start_tour(&self, _tour_id: u64) {
        unbound("startTour")
    }

    fn track_event(&self, _event: &str, _metadata: Option<Value>) {
        unbound("trackEvent")
    }
}
