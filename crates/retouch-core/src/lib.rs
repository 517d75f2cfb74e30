//! Retouch Core - Image editing with undo/redo
//!
//! This crate provides the core of the Retouch photo editor: loading and
//! saving images, stateless image operations (blur, crop, grayscale, flips,
//! hue, saturation, brightness, gradient fade) and the snapshot-based edit
//! history that front-ends drive through [`Editor`].

pub mod color;
pub mod decode;
pub mod edit;
pub mod encode;
mod error;
pub mod history;
pub mod luminance;
pub mod ops;
pub mod raster;
pub mod session;

pub use decode::{load_image, ImageInfo};
pub use edit::{Edit, SliderRange, Toggle};
pub use encode::{default_save_path, save_image};
pub use error::EditError;
pub use history::EditHistory;
pub use raster::{ChannelLayout, Image};
pub use session::Editor;
