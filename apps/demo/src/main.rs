//! Minimal demo wiring `MessengerProvider` into a Dioxus app.

use dioxus::prelude::*;
use msgr::prelude::*;
use msgr_logger::Logger;
use serde_json::json;

const DEMO_APP_ID: &str = "demo-app";

fn main() -> anyhow::Result<()> {
    let _logger = Logger::builder(env!("CARGO_PKG_NAME")).console(true).init()?;

    dioxus::launch(app);

    Ok(())
}

fn app() -> Element {
    rsx! {
        MessengerProvider {
            app_id: "{DEMO_APP_ID}",
            auto_boot: true,
            on_show: move |()| tracing::info!("messenger opened"),
            on_hide: move |()| tracing::info!("messenger closed"),
            on_unread_count_change: move |count: u32| tracing::info!("unread messages: {count}"),
            Controls {}
        }
    }
}

#[component]
fn Controls() -> Element {
    let messenger = use_messenger();
    let visitor_id = use_visitor_id();
    let current_visitor = visitor_id().unwrap_or_default();

    let show = {
        let messenger = messenger.clone();
        move |_| messenger.show()
    };
    let hide = {
        let messenger = messenger.clone();
        move |_| messenger.hide()
    };
    let compose = {
        let messenger = messenger.clone();
        move |_| messenger.show_new_message(Some("Hi there!".to_owned()))
    };
    let track = {
        let messenger = messenger.clone();
        move |_| messenger.track_event("demo-click", Some(json!({ "source": "controls" })))
    };

    rsx! {
        div {
            h1 { "Messenger demo" }
            p { "visitor id: {current_visitor}" }
            button { onclick: show, "Show" }
            button { onclick: hide, "Hide" }
            button { onclick: compose, "New message" }
            button { onclick: track, "Track event" }
        }
    }
}
