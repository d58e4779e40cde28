//! Image decoding and encoding at the filesystem boundary

use crate::io::error::{BinpixError, Result};
use image::RgbImage;
use std::path::Path;

/// Load an image and flatten it to 8-bit RGB
///
/// Alpha and palette information are dropped during conversion; the core
/// transform only ever sees RGB triples.
///
/// # Errors
///
/// Returns `ImageLoad` when the path does not exist, cannot be read, or is
/// not a decodable image format.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| BinpixError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}

/// Encode and write an image in the format implied by the path extension
///
/// Creates the parent directory when it does not exist yet.
///
/// # Errors
///
/// Returns `FileSystem` when the parent directory cannot be created, and
/// `ImageSave` when the destination is unwritable or the extension names an
/// unsupported format.
pub fn save_image<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| BinpixError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(path).map_err(|e| BinpixError::ImageSave {
        path: path.to_path_buf(),
        source: e,
    })
}
