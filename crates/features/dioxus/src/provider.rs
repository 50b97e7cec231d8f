use crate::context::MessengerContext;
use crate::loader::{bridge_snippet, loader_snippet, BridgeEvent, DEFAULT_SCRIPT_URL};
use crate::transport::{dispatch, EvalTransport};
use dioxus::document;
use dioxus::prelude::*;
use msgr_schema::{BootArgs, MessengerSettings};
use msgr_widget::{Messenger, WidgetClient};

/// Installs the Messenger capability set for its subtree.
///
/// On mount it injects the vendor loader (a queueing stub plus an async
/// script tag), optionally boots the widget, and registers the widget's
/// documented callbacks so `on_hide`/`on_show`/`on_unread_count_change`
/// reach the app. Everything below the provider reads the same live
/// [`MessengerContext`] through [`crate::use_messenger`].
#[component]
pub fn MessengerProvider(
    /// Workspace/application id of the widget installation.
    app_id: String,
    /// Base URL the loader script is fetched from; the app id is appended.
    #[props(default = DEFAULT_SCRIPT_URL.to_owned())]
    script_url: String,
    /// Boot immediately after the loader is injected.
    #[props(default = false)]
    auto_boot: bool,
    /// Attribute payload for the auto-boot call.
    #[props(default)]
    initial_settings: MessengerSettings,
    /// Called when the messenger panel is hidden.
    #[props(optional)]
    on_hide: Option<EventHandler<()>>,
    /// Called when the messenger panel is shown.
    #[props(optional)]
    on_show: Option<EventHandler<()>>,
    /// Called with the new count when unread messages change.
    #[props(optional)]
    on_unread_count_change: Option<EventHandler<u32>>,
    children: Element,
) -> Element {
    let context = use_context_provider(|| MessengerContext::new(WidgetClient::new(EvalTransport)));

    // Loader injection and optional boot, once per provider mount.
    {
        let context = context.clone();
        let app_id = app_id.clone();
        let script_url = script_url.clone();
        let initial_settings = initial_settings.clone();
        use_effect(move || {
            dispatch(loader_snippet(&app_id, &script_url));
            if auto_boot {
                context.boot(BootArgs::new(app_id.clone()).with_settings(initial_settings.clone()));
            }
        });
    }

    // Widget events stream back over the eval channel; the registration call
    // queues on the loader stub until the vendor script takes over.
    use_future(move || async move {
        let mut bridge = document::eval(&bridge_snippet());
        loop {
            match bridge.recv::<BridgeEvent>().await {
                Ok(BridgeEvent::Hide) => {
                    if let Some(handler) = on_hide {
                        handler.call(());
                    }
                },
                Ok(BridgeEvent::Show) => {
                    if let Some(handler) = on_show {
                        handler.call(());
                    }
                },
                Ok(BridgeEvent::Unread { count }) => {
                    if let Some(handler) = on_unread_count_change {
                        handler.call(count);
                    }
                },
                Err(err) => {
                    tracing::debug!("widget event bridge closed: {err}");
                    break;
                },
            }
        }
    });

    rsx! {
        {children}
    }
}
