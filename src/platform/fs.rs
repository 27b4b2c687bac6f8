// CalcIcon - platform/fs.rs
//
// Output path resolution and PNG persistence.

use crate::util::constants;
use crate::util::error::{IconError, Result};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// `<repo-root>/assets/icon.png`, where the repository root is the
/// directory holding this crate's manifest.
///
/// The root is fixed at compile time, so the tool is meant to be run with
/// `cargo run` from a checkout; a binary copied to another machine still
/// writes under the build machine's checkout path.
pub fn default_output_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join(constants::ASSETS_DIR_NAME)
        .join(constants::ICON_FILE_NAME)
}

/// Encode `image` as an RGB8 PNG and write it to `path`.
///
/// The parent directory is created if missing. Any failure is fatal for the
/// run and is returned with the path and the failing step attached.
pub fn write_png(path: &Path, image: &RgbImage) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| IconError::Io {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }

    let file = File::create(path).map_err(|source| IconError::Io {
        path: path.to_path_buf(),
        operation: "create file",
        source,
    })?;
    let mut writer = BufWriter::new(file);

    PngEncoder::new(&mut writer)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|source| IconError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    writer.flush().map_err(|source| IconError::Io {
        path: path.to_path_buf(),
        operation: "flush",
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "PNG written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_default_output_path_is_assets_icon_png() {
        let path = default_output_path();
        assert!(path.ends_with("assets/icon.png"), "{}", path.display());
        assert!(path.starts_with(env!("CARGO_MANIFEST_DIR")));
    }

    #[test]
    fn test_write_png_creates_parent_and_round_trips_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("icon.png");
        let mut image = RgbImage::from_pixel(8, 8, Rgb([245, 245, 245]));
        image.put_pixel(3, 5, Rgb([107, 68, 35]));

        write_png(&path, &image).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
        assert_eq!(decoded.to_rgb8(), image);
    }

    #[test]
    fn test_write_png_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where a directory is expected.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();
        let path = blocker.join("icon.png");

        let err = write_png(&path, &RgbImage::new(1, 1)).unwrap_err();
        assert!(
            matches!(err, IconError::Io { .. }),
            "expected Io error, got {err:?}"
        );
    }
}
