use strum_macros::{AsRefStr, Display};

/// The operations understood by the widget's global entry point, spelled the
/// way the vendor script expects them on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum WidgetMethod {
    Boot,
    Shutdown,
    Update,
    Hide,
    Show,
    ShowMessages,
    ShowNewMessage,
    OnHide,
    OnShow,
    OnUnreadCountChange,
    TrackEvent,
    GetVisitorId,
    StartTour,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_use_the_vendor_spelling() {
        assert_eq!(WidgetMethod::Boot.as_ref(), "boot");
        assert_eq!(WidgetMethod::ShowNewMessage.as_ref(), "showNewMessage");
        assert_eq!(WidgetMethod::OnUnreadCountChange.as_ref(), "onUnreadCountChange");
        assert_eq!(WidgetMethod::GetVisitorId.as_ref(), "getVisitorId");
    }
}
