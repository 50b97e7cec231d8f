use serde::{Deserialize, Serialize};

/// Display and launcher configuration for the Messenger widget.
///
/// Every field is optional; fields left as `None` are omitted from the
/// serialized payload entirely.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessengerAttributes {
    /// CSS selector of an element that activates the messenger when clicked.
    ///
    /// Target an element by id (`"#launcher"`) or by class (`".launchers"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_launcher_selector: Option<String>,

    /// Alignment of the default launcher icon, `"left"` or `"right"`.
    ///
    /// Any other value is treated as `"right"` by the widget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,

    /// Padding between the launcher and the bottom of the screen, in pixels.
    ///
    /// Minimum value 20. Has no effect on mobile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_padding: Option<u32>,

    /// Padding between the launcher and the right edge of the screen, in pixels.
    ///
    /// Minimum value 20. Has no effect on mobile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_padding: Option<u32>,

    /// Hide the default launcher icon; `false` forcefully shows it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_default_launcher: Option<bool>,

    /// Time in milliseconds for a widget session to be considered active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_duration: Option<u64>,

    /// Accent color used in button links and highlights; any valid CSS color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_color: Option<String>,

    /// Color shown behind the team profile header; any valid CSS color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}
