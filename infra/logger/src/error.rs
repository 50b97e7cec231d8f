use std::borrow::Cow;

/// Errors that can occur during logger initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Invalid settings supplied to the builder.
    #[error("invalid logger configuration: {0}")]
    InvalidConfiguration(Cow<'static, str>),

    /// Failure configuring the rolling file appender (e.g. a bad path).
    #[error("rolling file appender error: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    /// A global tracing subscriber is already installed in this process.
    #[error("tracing subscriber error: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),

    /// Filesystem failure preparing the log directory.
    #[error("log directory error: {0}")]
    Io(#[from] std::io::Error),
}
