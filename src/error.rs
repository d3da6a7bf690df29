use thiserror::Error;

/// Failures the export front-ends can hit.
///
/// None of these are fatal to the chat session: the front-end boundary turns
/// them into an error notification and the user can re-trigger the export.
/// A structured message without a usable text field is not an error at all;
/// it falls back to a placeholder string before the pipeline runs.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The pagination configuration cannot hold any content.
    #[error("page geometry is unusable: {0}")]
    InvalidGeometry(String),

    /// The PDF serializer or the clipboard rejected the content.
    #[error("rendering failed: {0}")]
    Rendering(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
