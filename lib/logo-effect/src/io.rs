use crate::{apply_all, EffectReport, LogoEffect, Result};
use image::{ImageFormat, ImageReader, RgbaImage};
use std::{io::Cursor, path::Path};

pub fn open_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();
    let img = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?
        .to_rgba8();

    log::info!(
        "Loaded {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );

    Ok(img)
}

/// Encode `image` as PNG and write it to `path`.
///
/// The whole file is encoded in memory first, so a failed encode never
/// truncates an existing file at `path`.
pub fn save_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();

    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    std::fs::write(path, buf.into_inner())?;

    log::info!("Saved {}", path.display());
    Ok(())
}

/// Load `input`, apply `effects` in order and save the result to `output`.
///
/// `input` and `output` may be the same path.
pub fn process_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    effects: &[LogoEffect],
) -> Result<Vec<EffectReport>> {
    let mut img = open_rgba(input)?;
    let reports = apply_all(effects, &mut img)?;
    save_png(&img, output)?;

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use image::Rgba;

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_rgba(dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_open_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, [1u8, 2, 3, 4]).unwrap();

        assert!(open_rgba(&path).is_err());
    }

    #[test]
    fn test_save_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 4]));

        let err = save_png(&img, dir.path().join("nope").join("out.png")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
