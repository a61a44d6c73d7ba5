/// Errors surfaced by hint sources and report runners.
///
/// These never reach the reducer; callers decide how to show them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// The request could not be sent or the server answered with an error status.
    #[error("request to {url} failed: {message}")]
    Http { url: String, message: String },

    /// The response body was not the expected JSON shape.
    #[error("could not decode response: {message}")]
    Decode { message: String },

    /// The blocking request task panicked or was cancelled.
    #[error("request task failed: {message}")]
    Join { message: String },

    /// Missing or unusable endpoint configuration.
    #[error("remote config error: {message}")]
    Config { message: String },
}
