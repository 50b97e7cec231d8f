use crate::transport::WIDGET_GLOBAL;
use msgr_widget::WidgetMethod;
use serde::Deserialize;

/// Default base URL of the vendor loader; the provider appends the app id.
pub(crate) const DEFAULT_SCRIPT_URL: &str = "https://widget.messenger-cdn.example/widget";

/// Installs a queueing stub for the widget global and injects the vendor
/// script tag. Calls made before the script arrives are queued by the stub
/// and replayed by the vendor loader, so the binding never has to track a
/// pending state. Injecting twice is a no-op.
pub(crate) fn loader_snippet(app_id: &str, script_url: &str) -> String {
    format!(
        r"(function() {{
  if (typeof window.{WIDGET_GLOBAL} === 'function') {{ return; }}
  var stub = function() {{ stub.q.push(arguments); }};
  stub.q = [];
  window.{WIDGET_GLOBAL} = stub;
  var script = document.createElement('script');
  script.type = 'text/javascript';
  script.async = true;
  script.src = '{script_url}/{app_id}';
  var anchor = document.getElementsByTagName('script')[0];
  if (anchor && anchor.parentNode) {{
    anchor.parentNode.insertBefore(script, anchor);
  }} else {{
    document.head.appendChild(script);
  }}
}})();"
    )
}

/// Registers the widget's documented callbacks and streams them back over
/// the eval channel.
pub(crate) fn bridge_snippet() -> String {
    let on_hide = WidgetMethod::OnHide.as_ref();
    let on_show = WidgetMethod::OnShow.as_ref();
    let on_unread = WidgetMethod::OnUnreadCountChange.as_ref();
    format!(
        r"if (window.{WIDGET_GLOBAL}) {{
  window.{WIDGET_GLOBAL}('{on_hide}', function() {{ dioxus.send({{ kind: 'hide' }}); }});
  window.{WIDGET_GLOBAL}('{on_show}', function() {{ dioxus.send({{ kind: 'show' }}); }});
  window.{WIDGET_GLOBAL}('{on_unread}', function(count) {{
    dioxus.send({{ kind: 'unread', count: count }});
  }});
}}"
    )
}

/// A widget event crossing the JS bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub(crate) enum BridgeEvent {
    Hide,
    Show,
    Unread { count: u32 },
}
