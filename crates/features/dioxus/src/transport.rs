use dioxus::document;
use dioxus::prelude::spawn;
use msgr_widget::{WidgetMethod, WidgetTransport};
use serde_json::Value;
use std::fmt::Write;

/// Name of the global entry point the vendor loader installs on `window`.
pub(crate) const WIDGET_GLOBAL: &str = "Messenger";

/// Drives the widget by evaluating vendor calls in the page.
///
/// Commands are fire-and-forget: the page-side call returns nothing useful
/// synchronously, so `invoke` always answers `None`. Value-returning lookups
/// go through the async eval bridge instead (see `use_visitor_id`).
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalTransport;

impl WidgetTransport for EvalTransport {
    fn invoke(&self, method: WidgetMethod, args: Vec<Value>) -> Option<Value> {
        dispatch(call_snippet(method, &args));
        None
    }

    fn deactivate(&self) {
        dispatch(deactivate_snippet());
    }
}

/// Evaluates `snippet` in the page, logging (never raising) on bridge errors.
pub(crate) fn dispatch(snippet: String) {
    spawn(async move {
        if let Err(err) = document::eval(&snippet).await {
            tracing::warn!("widget call failed to evaluate: {err}");
        }
    });
}

/// Renders `window.Messenger('<method>', ...args)` guarded by a presence
/// check, with every argument serialized as a JSON literal.
pub(crate) fn call_snippet(method: WidgetMethod, args: &[Value]) -> String {
    let mut call = format!("window.{WIDGET_GLOBAL}('{}'", method.as_ref());
    for arg in args {
        // `Value`'s Display is compact JSON, which is also a JS literal.
        let _ = write!(call, ", {arg}");
    }
    call.push_str(");");
    format!("if (window.{WIDGET_GLOBAL}) {{ {call} }}")
}

/// Expression form used by async lookups: resolves with the vendor call's
/// return value, or `null` when the loader has not installed the global yet.
pub(crate) fn return_snippet(method: WidgetMethod) -> String {
    format!(
        "if (window.{WIDGET_GLOBAL}) {{ return window.{WIDGET_GLOBAL}('{}'); }} return null;",
        method.as_ref()
    )
}

/// Removes the vendor globals so a later boot starts from a clean slate.
pub(crate) fn deactivate_snippet() -> String {
    format!("delete window.{WIDGET_GLOBAL}; delete window.messengerSettings;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_calls_without_arguments() {
        assert_eq!(
            call_snippet(WidgetMethod::Show, &[]),
            "if (window.Messenger) { window.Messenger('show'); }"
        );
    }

    #[test]
    fn renders_arguments_as_json_literals() {
        let snippet = call_snippet(
            WidgetMethod::TrackEvent,
            &[json!("invited-teammate"), json!({ "count": 2 })],
        );
        assert_eq!(
            snippet,
            "if (window.Messenger) { window.Messenger('trackEvent', \"invited-teammate\", {\"count\":2}); }"
        );
    }

    #[test]
    fn return_snippet_falls_back_to_null() {
        assert_eq!(
            return_snippet(WidgetMethod::GetVisitorId),
            "if (window.Messenger) { return window.Messenger('getVisitorId'); } return null;"
        );
    }
}
