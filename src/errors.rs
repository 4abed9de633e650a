use std::path::PathBuf;
use thiserror::Error;

/// Structured error types for the stone classifier.
///
/// Each variant names the operation that failed and keeps the underlying error
/// as its source, so [`render_chain`] can print the whole cause chain on one line.
#[derive(Error, Debug)]
pub enum StoneClassifierError {
    #[error("Filesystem error: {operation} failed for {path:?}")]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Image processing error: {operation} failed (file: {path})")]
    ImageProcessing {
        path: String,
        operation: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Model error: {operation} failed")]
    Model {
        operation: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Validation error: {field} {reason}")]
    Validation { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, StoneClassifierError>;

impl StoneClassifierError {
    pub(crate) fn model(
        operation: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Model {
            operation: operation.into(),
            source: source.into(),
        }
    }
}

/// `?` on ONNX Runtime calls during inference lands here; loading wraps its
/// errors with the failed step instead.
impl From<ort::Error> for StoneClassifierError {
    fn from(err: ort::Error) -> Self {
        Self::model("ort operation", err)
    }
}

/// Render an error and all of its sources as `outer: inner: ...`.
pub fn render_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
