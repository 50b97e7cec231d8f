use msgr_schema::{BootArgs, CompanyAttributes, MessengerSettings, UserAttributes};
use msgr_widget::{Messenger, WidgetClient, WidgetMethod, WidgetTransport};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// What the transport observed, in call order.
#[derive(Debug, Clone, PartialEq)]
enum Observed {
    Invoke(WidgetMethod, Vec<Value>),
    Deactivate,
}

/// A transport that records every call and answers `getVisitorId` with a
/// canned value.
#[derive(Debug, Clone, Default)]
struct RecordingTransport {
    observed: Rc<RefCell<Vec<Observed>>>,
    visitor_id: Option<&'static str>,
}

impl RecordingTransport {
    fn with_visitor_id(visitor_id: &'static str) -> Self {
        Self { visitor_id: Some(visitor_id), ..Default::default() }
    }

    fn observed(&self) -> Vec<Observed> {
        self.observed.borrow().clone()
    }
}

impl WidgetTransport for RecordingTransport {
    fn invoke(&self, method: WidgetMethod, args: Vec<Value>) -> Option<Value> {
        self.observed.borrow_mut().push(Observed::Invoke(method, args));
        match method {
            WidgetMethod::GetVisitorId => self.visitor_id.map(Value::from),
            _ => None,
        }
    }

    fn deactivate(&self) {
        self.observed.borrow_mut().push(Observed::Deactivate);
    }
}

fn settings_for(name: &str) -> MessengerSettings {
    MessengerSettings {
        user: UserAttributes { name: Some(name.to_owned()), ..Default::default() },
        ..Default::default()
    }
}

#[test]
fn boot_forwards_the_sanitized_payload_with_the_app_id() {
    let transport = RecordingTransport::default();
    let client = WidgetClient::new(transport.clone());

    let mut settings = settings_for("Ann");
    settings.user.company = Some(CompanyAttributes::new("42"));
    settings.user.custom_attributes.insert("seat".to_owned(), Value::Null);
    client.boot(BootArgs::new("abc123").with_settings(settings));

    assert_eq!(
        transport.observed(),
        vec![Observed::Invoke(
            WidgetMethod::Boot,
            vec![json!({
                "app_id": "abc123",
                "name": "Ann",
                "company": { "company_id": "42" }
            })],
        )]
    );
}

#[test]
fn update_with_an_empty_raw_mapping_sends_no_payload() {
    let transport = RecordingTransport::default();
    let client = WidgetClient::new(transport.clone());

    client.update(MessengerSettings::default());

    assert_eq!(transport.observed(), vec![Observed::Invoke(WidgetMethod::Update, vec![])]);
}

#[test]
fn update_prunes_absent_custom_attributes() {
    let transport = RecordingTransport::default();
    let client = WidgetClient::new(transport.clone());

    let mut settings = settings_for("Ann");
    settings.user.custom_attributes.insert("team".to_owned(), Value::Null);
    client.update(settings);

    assert_eq!(
        transport.observed(),
        vec![Observed::Invoke(WidgetMethod::Update, vec![json!({ "name": "Ann" })])]
    );
}

#[test]
fn hard_shutdown_shuts_down_then_deactivates() {
    let transport = RecordingTransport::default();
    let client = WidgetClient::new(transport.clone());

    client.hard_shutdown();

    assert_eq!(
        transport.observed(),
        vec![Observed::Invoke(WidgetMethod::Shutdown, vec![]), Observed::Deactivate]
    );
}

#[test]
fn visitor_id_returns_the_transport_answer_or_empty() {
    let answering = RecordingTransport::with_visitor_id("visitor-7");
    assert_eq!(WidgetClient::new(answering).visitor_id(), "visitor-7");

    let silent = RecordingTransport::default();
    assert_eq!(WidgetClient::new(silent).visitor_id(), "");
}

#[test]
fn track_event_forwards_name_and_sanitized_metadata() {
    let transport = RecordingTransport::default();
    let client = WidgetClient::new(transport.clone());

    client.track_event("invited-teammate", Some(json!({ "count": 2, "seat": null })));

    assert_eq!(
        transport.observed(),
        vec![Observed::Invoke(
            WidgetMethod::TrackEvent,
            vec![json!("invited-teammate"), json!({ "count": 2 })],
        )]
    );
}

#[test]
fn show_new_message_passes_the_prefill_only_when_present() {
    let transport = RecordingTransport::default();
    let client = WidgetClient::new(transport.clone());

    client.show_new_message(None);
    client.show_new_message(Some("hello".to_owned()));

    assert_eq!(
        transport.observed(),
        vec![
            Observed::Invoke(WidgetMethod::ShowNewMessage, vec![]),
            Observed::Invoke(WidgetMethod::ShowNewMessage, vec![json!("hello")]),
        ]
    );
}

#[test]
fn start_tour_passes_the_tour_id() {
    let transport = RecordingTransport::default();
    let client = WidgetClient::new(transport.clone());

    client.start_tour(458);

    assert_eq!(
        transport.observed(),
        vec![Observed::Invoke(WidgetMethod::StartTour, vec![json!(458)])]
    );
}
