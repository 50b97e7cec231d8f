use crate::capability::Messenger;
use crate::method::WidgetMethod;
use msgr_kernel::diag::{self, LogLevel};
use msgr_kernel::{is_empty_object, sanitize};
use msgr_schema::{BootArgs, MessengerSettings};
use serde::Serialize;
use serde_json::Value;

/// The seam between the capability set and the external widget.
///
/// Implementations construct the vendor call `externalWidgetFn(method,
/// ...args)` however their platform requires. The client hands them already
/// sanitized arguments; transports never clean payloads themselves.
pub trait WidgetTransport {
    /// Invokes the widget's global entry point and returns its result, if
    /// the platform can observe one.
    fn invoke(&self, method: WidgetMethod, args: Vec<Value>) -> Option<Value>;

    /// Tears down the vendor globals installed by the loader. Called by
    /// [`Messenger::hard_shutdown`] after the shutdown invocation.
    fn deactivate(&self);
}

/// The bound capability set: serializes attribute payloads, sanitizes them,
/// and forwards each operation through the injected transport.
#[derive(Debug, Clone)]
pub struct WidgetClient<T> {
    transport: T,
}

impl<T: WidgetTransport> WidgetClient<T> {
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Serializes `payload` for the wire, reporting (not raising) on the
    /// edge case that serialization fails; the operation is then skipped.
    fn serialized<P: Serialize>(method: WidgetMethod, payload: &P) -> Option<Value> {
        match serde_json::to_value(payload) {
            Ok(value) => Some(value),
            Err(err) => {
                diag::log(
                    LogLevel::Error,
                    &format!("dropping `{method}` call, payload failed to serialize: {err}"),
                );
                None
            },
        }
    }
}

impl<T: WidgetTransport> Messenger for WidgetClient<T> {
    fn boot(&self, args: BootArgs) {
        if let Some(mut payload) = Self::serialized(WidgetMethod::Boot, &args) {
            sanitize(&mut payload);
            self.transport.invoke(WidgetMethod::Boot, vec![payload]);
        }
    }

    fn shutdown(&self) {
        self.transport.invoke(WidgetMethod::Shutdown, Vec::new());
    }

    fn hard_shutdown(&self) {
        self.transport.invoke(WidgetMethod::Shutdown, Vec::new());
        self.transport.deactivate();
    }

    fn update(&self, settings: MessengerSettings) {
        let Some(mut payload) = Self::serialized(WidgetMethod::Update, &settings) else {
            return;
        };
        // Emptiness is judged on the raw mapping (key count), before pruning.
        if is_empty_object(&payload) {
            self.transport.invoke(WidgetMethod::Update, Vec::new());
        } else {
            sanitize(&mut payload);
            self.transport.invoke(WidgetMethod::Update, vec![payload]);
        }
    }

    fn hide(&self) {
        self.transport.invoke(WidgetMethod::Hide, Vec::new());
    }

    fn show(&self) {
        self.transport.invoke(WidgetMethod::Show, Vec::new());
    }

    fn show_messages(&self) {
        self.transport.invoke(WidgetMethod::ShowMessages, Vec::new());
    }

    fn show_new_message(&self, prefill: Option<String>) {
        let args = prefill.map(Value::String).into_iter().collect();
        self.transport.invoke(WidgetMethod::ShowNewMessage, args);
    }

    fn visitor_id(&self) -> String {
        self.transport
            .invoke(WidgetMethod::GetVisitorId, Vec::new())
            .and_then(|value| value.as_str().map(str::to_owned))
            .unwrap_or_default()
    }

    fn start_tour(&self, tour_id: u64) {
        self.transport.invoke(WidgetMethod::StartTour, vec![Value::from(tour_id)]);
    }

    fn track_event(&self, event: &str, metadata: Option<Value>) {
        let mut args = vec![Value::String(event.to_owned())];
        if let Some(mut extra) = metadata {
            sanitize(&mut extra);
            args.push(extra);
        }
        self.transport.invoke(WidgetMethod::TrackEvent, args);
    }
}
