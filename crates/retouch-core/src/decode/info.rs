//! File information shown alongside the loaded image.

use std::path::Path;

use chrono::{DateTime, Local};

use crate::raster::Image;

/// Summary of a loaded file.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInfo {
    /// File name without the directory part.
    pub file_name: String,
    /// File size in kilobytes.
    pub size_kb: f64,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// "Grayscale" or "Color (RGB)".
    pub color_depth: &'static str,
    /// Last modification time, `yyyy-MM-dd hh:mm:ss`, if the platform reports one.
    pub last_modified: Option<String>,
}

impl ImageInfo {
    /// Collect information about `path` and the image decoded from it.
    ///
    /// Missing filesystem metadata is reported as zero size and no timestamp
    /// rather than as an error.
    pub fn collect(path: &Path, image: &Image) -> Self {
        let metadata = std::fs::metadata(path).ok();
        let size_kb = metadata
            .as_ref()
            .map(|m| m.len() as f64 / 1024.0)
            .unwrap_or(0.0);
        let last_modified = metadata
            .and_then(|m| m.modified().ok())
            .map(|t| DateTime::<Local>::from(t).format("%Y-%m-%d %H:%M:%S").to_string());

        Self {
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            size_kb,
            width: image.width,
            height: image.height,
            color_depth: image.layout.label(),
            last_modified,
        }
    }
}

impl std::fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "File Name: {}", self.file_name)?;
        writeln!(f, "File Size: {:.2} KB", self.size_kb)?;
        writeln!(f, "Dimensions: {} x {} pixels", self.width, self.height)?;
        write!(f, "Color Depth: {}", self.color_depth)?;
        if let Some(modified) = &self.last_modified {
            write!(f, "\nLast Modified: {}", modified)?;
        }
        Ok(())
    }
}
