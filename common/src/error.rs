use thiserror::Error;

/// Fallback text for anything that is not a transport-level failure.
pub const FETCH_FAILED: &str = "Failed to fetch data";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// DNS, connect, TLS or body-read failure. Carries the client's message.
    #[error("{0}")]
    Transport(String),

    /// Non-2xx status or a body that does not parse.
    #[error("{}", FETCH_FAILED)]
    Response,
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            return Self::Transport(FETCH_FAILED.to_string());
        }
        Self::Transport(message)
    }

    /// Text shown to the user as-is.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
