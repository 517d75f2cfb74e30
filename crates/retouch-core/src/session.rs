//! Editing session: the glue a front-end drives.
//!
//! An [`Editor`] owns at most one [`EditHistory`] plus the path it was loaded
//! from. Front-ends call `open`, `apply`, `undo`, `redo` and `save`, then
//! redisplay [`Editor::current`]. Every error is recoverable and leaves the
//! session as it was.

use std::path::{Path, PathBuf};

use crate::decode::{load_image, ImageInfo};
use crate::edit::Edit;
use crate::encode::{default_save_path, save_image};
use crate::history::EditHistory;
use crate::raster::Image;
use crate::EditError;

/// One editing session.
#[derive(Debug, Default)]
pub struct Editor {
    history: Option<EditHistory>,
    source: Option<PathBuf>,
}

impl Editor {
    /// Create a session with no image loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an image from disk, replacing the current session.
    ///
    /// On failure the previous image and history are kept.
    pub fn open(&mut self, path: &Path) -> Result<&Image, EditError> {
        let image = load_image(path)?;
        self.load(image);
        self.source = Some(path.to_path_buf());
        Ok(self.history_ref()?.current())
    }

    /// Start a session from an image already in memory.
    pub fn load(&mut self, image: Image) {
        match self.history.as_mut() {
            Some(history) => history.load_new(image),
            None => self.history = Some(EditHistory::new(image)),
        }
        self.source = None;
    }

    /// Apply one edit.
    ///
    /// Returns `NoImage` before looking at the parameters when nothing is
    /// loaded.
    ///
    /// Grayscale and flips toggle against the original; every other edit is
    /// recomputed from the original with the given parameters.
    pub fn apply(&mut self, edit: &Edit) -> Result<&Image, EditError> {
        let history = self.history_mut()?;
        edit.validate()?;

        let result = match edit.toggle_op() {
            Some((toggle, op)) => Ok(history.toggle_binary_state(toggle, op).0),
            None => history.apply_edit(|img| edit.render(img)),
        };

        if result.is_ok() {
            tracing::debug!(%edit, "applied edit");
        }
        result
    }

    /// Step back one entry.
    pub fn undo(&mut self) -> Result<&Image, EditError> {
        self.history_mut()?.undo()
    }

    /// Re-apply the last undone entry.
    pub fn redo(&mut self) -> Result<&Image, EditError> {
        self.history_mut()?.redo()
    }

    /// Save the current image, inferring the format from the extension.
    pub fn save(&self, path: &Path) -> Result<(), EditError> {
        save_image(self.history_ref()?.current(), path)
    }

    /// Save to the default timestamped path in the home directory.
    pub fn save_default(&self) -> Result<PathBuf, EditError> {
        let path = default_save_path();
        self.save(&path)?;
        Ok(path)
    }

    /// The image currently displayed, if any.
    pub fn current(&self) -> Option<&Image> {
        self.history.as_ref().map(EditHistory::current)
    }

    /// The undo/redo history, if an image is loaded.
    pub fn history(&self) -> Option<&EditHistory> {
        self.history.as_ref()
    }

    /// Path of the file the session was opened from.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// File information for the opened file.
    ///
    /// Returns `None` for in-memory sessions.
    pub fn info(&self) -> Option<ImageInfo> {
        let source = self.source.as_deref()?;
        let history = self.history.as_ref()?;
        Some(ImageInfo::collect(source, history.original()))
    }

    fn history_ref(&self) -> Result<&EditHistory, EditError> {
        self.history.as_ref().ok_or(EditError::NoImage)
    }

    fn history_mut(&mut self) -> Result<&mut EditHistory, EditError> {
        self.history.as_mut().ok_or(EditError::NoImage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::test_support::{position_image, solid_image};

    fn editor_with(image: Image) -> Editor {
        let mut editor = Editor::new();
        editor.load(image);
        editor
    }

    #[test]
    fn test_operations_without_image() {
        let mut editor = Editor::new();

        assert!(matches!(
            editor.apply(&Edit::Grayscale),
            Err(EditError::NoImage)
        ));
        assert!(matches!(
            editor.apply(&Edit::Crop {
                width: 0,
                height: 1
            }),
            Err(EditError::NoImage)
        ));
        assert!(matches!(editor.undo(), Err(EditError::NoImage)));
        assert!(matches!(editor.redo(), Err(EditError::NoImage)));
        assert!(editor.current().is_none());
        assert!(editor.info().is_none());
    }

    #[test]
    fn test_scenario_from_fresh_load() {
        let original = solid_image(100, 100, [40, 80, 120]);
        let mut editor = editor_with(original.clone());

        editor.apply(&Edit::Brightness { offset: 50 }).unwrap();
        assert_eq!(editor.current().unwrap().pixels[0], 90);

        editor.undo().unwrap();
        let history = editor.history().unwrap();
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.current(), &original);

        editor.apply(&Edit::Grayscale).unwrap();
        editor.apply(&Edit::Grayscale).unwrap();
        assert_eq!(editor.current().unwrap(), &original);
    }

    #[test]
    fn test_crop_rejection_leaves_state() {
        let mut editor = editor_with(position_image(20, 10));
        editor.apply(&Edit::Blur { size: 3 }).unwrap();
        let before = editor.current().unwrap().clone();

        let result = editor.apply(&Edit::Crop {
            width: 21,
            height: 5,
        });
        assert!(matches!(
            result,
            Err(EditError::DimensionsExceedBounds { .. })
        ));

        let result = editor.apply(&Edit::Crop {
            width: -3,
            height: 5,
        });
        assert!(matches!(result, Err(EditError::InvalidDimensions(_))));

        let history = editor.history().unwrap();
        assert_eq!(history.current(), &before);
        assert_eq!(history.undo_depth(), 2);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_crop_uses_original_geometry() {
        let mut editor = editor_with(position_image(20, 10));
        editor
            .apply(&Edit::Crop {
                width: 10,
                height: 5,
            })
            .unwrap();

        // A second crop larger than the first result still fits the original
        let current = editor
            .apply(&Edit::Crop {
                width: 16,
                height: 8,
            })
            .unwrap();
        assert_eq!((current.width, current.height), (16, 8));
    }

    #[test]
    fn test_hue_wraps_through_editor() {
        // Pure red has hue 0; -60 wraps to 120 (blue)
        let mut editor = editor_with(solid_image(2, 2, [255, 0, 0]));
        let current = editor.apply(&Edit::Hue { shift: -60 }).unwrap();
        assert_eq!(&current.pixels[0..3], &[0, 0, 255]);
    }

    #[test]
    fn test_undo_redo_exhaustion_is_informational() {
        let mut editor = editor_with(position_image(4, 4));

        let err = editor.undo().unwrap_err();
        assert!(err.is_informational());
        let err = editor.redo().unwrap_err();
        assert!(err.is_informational());
    }

    #[test]
    fn test_open_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.png");
        let output = dir.path().join("output.png");
        image::RgbImage::from_pixel(8, 6, image::Rgb([10, 20, 30]))
            .save(&input)
            .unwrap();

        let mut editor = Editor::new();
        editor.open(&input).unwrap();
        assert_eq!(editor.source(), Some(input.as_path()));
        editor.apply(&Edit::FlipVertical).unwrap();
        editor.apply(&Edit::Brightness { offset: 10 }).unwrap();
        editor.save(&output).unwrap();

        let saved = image::open(&output).unwrap().into_rgb8();
        assert_eq!(saved.dimensions(), (8, 6));
        assert_eq!(saved.get_pixel(0, 0).0, [20, 30, 40]);

        let info = editor.info().unwrap();
        assert_eq!(info.file_name, "input.png");
        assert_eq!((info.width, info.height), (8, 6));
    }

    #[test]
    fn test_failed_open_keeps_previous_image() {
        let dir = tempfile::tempdir().unwrap();
        let original = position_image(3, 3);
        let mut editor = editor_with(original.clone());
        editor.apply(&Edit::Grayscale).unwrap();

        let result = editor.open(&dir.path().join("missing.jpg"));
        assert!(matches!(result, Err(EditError::LoadFailure { .. })));

        let history = editor.history().unwrap();
        assert_eq!(history.original(), &original);
        assert_eq!(history.undo_depth(), 2);
        assert!(history.is_grayscale_active());
    }

    #[test]
    fn test_save_without_image() {
        let dir = tempfile::tempdir().unwrap();
        let editor = Editor::new();
        assert!(matches!(
            editor.save(&dir.path().join("x.png")),
            Err(EditError::NoImage)
        ));
    }
}
