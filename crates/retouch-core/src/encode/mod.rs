//! Writing images to disk.
//!
//! The output format is inferred from the file extension. When the user does
//! not pick a name, a timestamped PNG in the home directory is proposed.

mod save;

pub use save::{default_file_name, default_save_path, encode_image, save_image, JPEG_QUALITY};
