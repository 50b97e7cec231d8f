use msgr_widget::{Messenger, UnboundMessenger};
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// The shared capability set exposed through Dioxus context.
///
/// Cloning is cheap; every consumer in a provider subtree sees the same live
/// set. Derefs to [`Messenger`], so capabilities are called directly:
/// `messenger.show()`.
#[derive(Clone)]
pub struct MessengerContext {
    inner: Rc<dyn Messenger>,
}

impl MessengerContext {
    /// Wraps a live capability set.
    pub fn new(messenger: impl Messenger + 'static) -> Self {
        Self { inner: Rc::new(messenger) }
    }

    /// The diagnostic-only set that is live when no provider is installed.
    #[must_use]
    pub fn unbound() -> Self {
        Self::new(UnboundMessenger)
    }
}

impl Deref for MessengerContext {
    type Target = dyn Messenger;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl fmt::Debug for MessengerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessengerContext").finish_non_exhaustive()
    }
}
