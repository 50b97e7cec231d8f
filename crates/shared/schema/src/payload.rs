use crate::identity::UserAttributes;
use crate::messenger::MessengerAttributes;
use serde::{Deserialize, Serialize};

/// The full attribute payload accepted by `update`: display configuration and
/// identification fields flattened into a single mapping.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessengerSettings {
    #[serde(flatten)]
    pub messenger: MessengerAttributes,
    #[serde(flatten)]
    pub user: UserAttributes,
}

/// The payload for `boot`: everything `update` accepts plus the application
/// identifier that tells the widget where to store data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootArgs {
    /// Workspace/application id of the widget installation.
    pub app_id: String,
    #[serde(flatten)]
    pub settings: MessengerSettings,
}

impl BootArgs {
    /// Creates boot arguments carrying only the application id.
    #[must_use]
    pub fn new(app_id: impl Into<String>) -> Self {
        Self { app_id: app_id.into(), settings: MessengerSettings::default() }
    }

    /// Attaches an initial settings payload.
    #[must_use]
    pub fn with_settings(mut self, settings: MessengerSettings) -> Self {
        self.settings = settings;
        self
    }
}
