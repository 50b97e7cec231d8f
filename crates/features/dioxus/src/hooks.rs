use crate::context::MessengerContext;
use crate::transport::return_snippet;
use dioxus::document;
use dioxus::prelude::*;
use msgr_widget::WidgetMethod;

/// Returns the capability set installed by the nearest [`crate::MessengerProvider`].
///
/// Without a provider above the calling component this returns the unbound
/// set — a valid state whose capabilities raise a fault naming the operation
/// as soon as one is invoked.
#[must_use]
pub fn use_messenger() -> MessengerContext {
    use_hook(|| try_consume_context::<MessengerContext>().unwrap_or_else(MessengerContext::unbound))
}

/// Resolves the vendor-assigned visitor id through the async eval bridge.
///
/// The value-returning vendor call cannot be observed synchronously from the
/// page, so this is a [`Resource`]: `None` while pending, then the id, or an
/// empty string when the widget has not assigned one yet. Call
/// [`Resource::restart`] to look it up again after a boot.
#[must_use]
pub fn use_visitor_id() -> Resource<String> {
    use_resource(|| async {
        document::eval(&return_snippet(WidgetMethod::GetVisitorId))
            .await
            .ok()
            .and_then(|value| value.as_str().map(str::to_owned))
            .unwrap_or_default()
    })
}
