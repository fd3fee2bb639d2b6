use thiserror::Error;

/// Every failure the explorer client can report.
///
/// Everything below the menu hands one of these back as a value instead of
/// panicking, so callers only ever deal with `Result<T, ExplorerError>`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExplorerError {
    /// Base URL or API key missing or unusable. Fatal at startup.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Connection failure, timeout or non-2xx HTTP status.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Body is not JSON, or an expected field is absent or malformed.
    #[error("{0}")]
    Parse(String),

    /// The service answered, but reported a failure in its `status` field.
    #[error("{0}")]
    Business(String),
}

impl ExplorerError {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Normalized outcome of one API call: `Ok` is the success payload, `Err`
/// carries a human-readable message.
pub type ApiResult<T> = Result<T, ExplorerError>;

/// Renders an error together with its `source()` chain, `outer: inner: ...`.
pub(crate) fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = inner.source();
    }
    message
}
