/// Errors raised while loading filter documents.
///
/// The reducer and the blender are infallible; only parsing can fail.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A document did not parse as the expected JSON shape.
    #[error("invalid {what}: {message}")]
    InvalidJson { what: &'static str, message: String },

    /// An action carried a known tag but a malformed payload.
    #[error("invalid {kind} action at position {position}: {message}")]
    InvalidAction {
        position: usize,
        kind: String,
        message: String,
    },
}
