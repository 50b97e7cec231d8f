//! Leveled diagnostics with a hard escalation path.
//! `info`/`warn`/`error` write to the matching `tracing` channel; `critical`
//! signals a programming error and raises a structured [`Fault`] that unwinds
//! the caller instead of writing anything.

use std::borrow::Cow;
use std::panic::panic_any;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumString};

/// Fixed tag prefixed to every diagnostic message.
pub const PKG_TAG: &str = "[msgr]";

/// Urgency of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    /// Escalated: never written, always raised as a [`Fault`].
    Critical,
}

impl LogLevel {
    /// Parses a level label, falling back to [`LogLevel::Info`] for
    /// unrecognized input.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self::from_str(label).unwrap_or(Self::Info)
    }
}

/// What a raised [`Fault`] signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FaultKind {
    /// A capability was invoked with no provider installed.
    #[strum(serialize = "missing provider")]
    MissingProvider,
    /// A critical-level diagnostic was escalated.
    #[strum(serialize = "critical log")]
    CriticalLog,
}

/// The structured payload carried by an escalated diagnostic.
///
/// A `Fault` aborts the current call stack; it marks a setup mistake in the
/// integrating application, not a runtime condition to recover from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct Fault {
    pub kind: FaultKind,
    pub message: Cow<'static, str>,
}

impl Fault {
    #[must_use]
    pub fn new(kind: FaultKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self { kind, message: message.into() }
    }
}

/// Raises a [`Fault`], unwinding the caller.
pub fn raise(kind: FaultKind, message: impl Into<Cow<'static, str>>) -> ! {
    panic_any(Fault::new(kind, message))
}

/// Writes `message` to the channel matching `level`, prefixed with
/// [`PKG_TAG`]. [`LogLevel::Critical`] raises instead of writing.
pub fn log(level: LogLevel, message: &str) {
    match level {
        LogLevel::Info => tracing::info!("{PKG_TAG} {message}"),
        LogLevel::Warn => tracing::warn!("{PKG_TAG} {message}"),
        LogLevel::Error => tracing::error!("{PKG_TAG} {message}"),
        LogLevel::Critical => raise(FaultKind::CriticalLog, message.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::catch_unwind;

    fn unwound_fault(result: std::thread::Result<()>) -> Fault {
        let payload = result.expect_err("diagnostic should have raised");
        payload.downcast_ref::<Fault>().expect("payload should be a Fault").clone()
    }

    #[test]
    fn critical_raises_a_fault_carrying_the_message() {
        let fault = unwound_fault(catch_unwind(|| log(LogLevel::Critical, "x")));
        assert_eq!(fault.kind, FaultKind::CriticalLog);
        assert_eq!(fault.message, "x");
    }

    #[test]
    fn non_critical_levels_return_normally() {
        log(LogLevel::Info, "x");
        log(LogLevel::Warn, "x");
        log(LogLevel::Error, "x");
    }

    #[test]
    fn level_labels_parse_case_sensitively_with_info_fallback() {
        assert_eq!(LogLevel::from_label("info"), LogLevel::Info);
        assert_eq!(LogLevel::from_label("warn"), LogLevel::Warn);
        assert_eq!(LogLevel::from_label("error"), LogLevel::Error);
        assert_eq!(LogLevel::from_label("critical"), LogLevel::Critical);
        assert_eq!(LogLevel::from_label("bogus"), LogLevel::Info);
    }

    #[test]
    fn fault_displays_kind_and_message() {
        let fault = Fault::new(FaultKind::MissingProvider, "boot called unbound");
        assert_eq!(fault.to_string(), "missing provider: boot called unbound");
    }
}
