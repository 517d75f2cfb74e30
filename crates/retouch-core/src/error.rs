//! Error type shared by every fallible operation in the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the user as notifications.
///
/// None of these are fatal: the editor state is left exactly as it was before
/// the failing call.
#[derive(Debug, Error)]
pub enum EditError {
    /// The file could not be read or decoded.
    #[error("Could not open or find the image {path}: {reason}")]
    LoadFailure { path: PathBuf, reason: String },

    /// Crop input is non-numeric or not strictly positive.
    #[error("Invalid crop dimensions: {0}")]
    InvalidDimensions(String),

    /// Crop region is larger than the source image.
    #[error("Crop dimensions ({width}x{height}) exceed image size ({image_width}x{image_height})!")]
    DimensionsExceedBounds {
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },

    /// Only the base entry is left on the undo stack.
    #[error("No more steps to undo.")]
    EmptyHistory,

    /// The redo stack is empty.
    #[error("No more steps to redo.")]
    EmptyRedo,

    /// Encoding or writing the output file failed.
    #[error("Failed to save image to {path}: {reason}")]
    SaveFailure { path: PathBuf, reason: String },

    /// An edit, undo or save was requested before any image was loaded.
    #[error("No image loaded")]
    NoImage,

    /// An edit description could not be parsed.
    #[error("Invalid edit '{0}'")]
    InvalidEdit(String),
}

impl EditError {
    /// Whether this error is an informational notice rather than a failure.
    ///
    /// Exhausted undo/redo is reported to the user but is not an error in the
    /// usual sense.
    pub fn is_informational(&self) -> bool {
        matches!(self, EditError::EmptyHistory | EditError::EmptyRedo)
    }
}
