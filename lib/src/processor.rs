use crate::artifact::AsciiArt;
use crate::config::ConvertConfig;
use crate::error::{ConvertError, Result};
use crate::layout::assemble_lines;
use crate::luminance::to_luminance;
use crate::mapper::map_pixels;
use crate::ramp::CharRamp;
use crate::resample::resample;
use image::{DynamicImage, ImageReader};
use std::borrow::Cow;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Where the pipeline gets its pixels from
#[derive(Debug, Clone, Copy)]
pub enum ImageSource<'a> {
    /// A file in any format the `image` crate can sniff (PNG, JPEG, BMP, GIF, ...)
    Path(&'a Path),
    /// Encoded image bytes held in memory
    Bytes(&'a [u8]),
    /// An image the caller already decoded
    Image(&'a DynamicImage),
}

impl<'a> From<&'a Path> for ImageSource<'a> {
    fn from(path: &'a Path) -> Self {
        ImageSource::Path(path)
    }
}

impl<'a> From<&'a PathBuf> for ImageSource<'a> {
    fn from(path: &'a PathBuf) -> Self {
        ImageSource::Path(path.as_path())
    }
}

impl<'a> From<&'a [u8]> for ImageSource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ImageSource::Bytes(bytes)
    }
}

impl<'a> From<&'a DynamicImage> for ImageSource<'a> {
    fn from(img: &'a DynamicImage) -> Self {
        ImageSource::Image(img)
    }
}

impl<'a> ImageSource<'a> {
    fn decode(self) -> Result<Cow<'a, DynamicImage>> {
        match self {
            ImageSource::Path(path) => load_image(path).map(Cow::Owned),
            ImageSource::Bytes(bytes) => Ok(Cow::Owned(image::load_from_memory(bytes)?)),
            ImageSource::Image(img) => Ok(Cow::Borrowed(img)),
        }
    }
}

/// Decode an image file, detecting the format from its contents
///
/// The extension is only a hint; a PNG saved as `.jpg` still decodes.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .map_err(image::ImageError::IoError)?
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?;
    let img = reader.decode()?;
    log::debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img)
}

/// Converts an image to ASCII art
///
/// This runs the full pipeline:
/// 1. Validate width and ramp
/// 2. Decode the source (if it is not already decoded)
/// 3. Resample to `config.width` columns with vertically compressed aspect ratio
/// 4. Reduce to single-channel luminance
/// 5. Quantize each pixel onto the character ramp
/// 6. Reflow the characters into newline-terminated rows
///
/// # Arguments
/// * `source` - A path, encoded bytes, or a decoded image
/// * `config` - Width, ramp and resampling filter
///
/// # Returns
/// The rendered [`AsciiArt`], or the first error encountered. No partial
/// result is ever produced.
pub fn convert<'a>(
    source: impl Into<ImageSource<'a>>,
    config: &ConvertConfig,
) -> Result<AsciiArt> {
    config.validate()?;

    let img = source.into().decode()?;
    if img.width() == 0 || img.height() == 0 {
        return Err(ConvertError::InvalidParameter(format!(
            "source image has no pixels ({}x{})",
            img.width(),
            img.height()
        )));
    }

    // Step 1: Resample to the character grid
    let resized = resample(&img, config.width, config.filter)?;
    let (columns, rows) = (resized.width(), resized.height());

    // Step 2: Luminance
    let lum = to_luminance(&resized);

    // Step 3: Ramp lookup
    let chars = map_pixels(&lum, &config.ramp);

    // Step 4: Line assembly
    let line_width = NonZeroUsize::new(columns as usize).ok_or_else(|| {
        ConvertError::InvalidParameter(format!("width must be at least 1, got {columns}"))
    })?;
    let text = assemble_lines(&chars, line_width);

    log::debug!(
        "converted {}x{} image to {}x{} characters with a {} character ramp",
        img.width(),
        img.height(),
        columns,
        rows,
        config.ramp.len()
    );

    Ok(AsciiArt::new(text, columns, rows))
}

/// Converts with an explicit width and ramp and the default resampling filter
pub fn convert_with<'a>(
    source: impl Into<ImageSource<'a>>,
    width: u32,
    ramp: &CharRamp,
) -> Result<AsciiArt> {
    let config = ConvertConfig::default()
        .with_width(width)
        .with_ramp(ramp.clone());
    convert(source, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::ramp::RampPreset;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn solid(width: u32, height: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([value, value, value])))
    }

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            let v = ((x * 7 + y * 3) % 256) as u8;
            Rgb([v, 255 - v, v / 2])
        }))
    }

    #[test]
    fn test_solid_white_default_ramp() {
        let img = solid(100, 50, 255);
        let art = convert(&img, &ConvertConfig::default().with_width(10)).unwrap();

        assert_eq!((art.columns(), art.rows()), (10, 3));
        assert_eq!(art.as_str(), "          \n          \n          \n");
    }

    #[test]
    fn test_solid_black_default_ramp() {
        let img = solid(100, 50, 0);
        let art = convert(&img, &ConvertConfig::default().with_width(10)).unwrap();

        let lines: Vec<&str> = art.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| *l == "$$$$$$$$$$"));
    }

    #[test]
    fn test_mid_gray_standard_ramp() {
        let img = solid(40, 40, 128);
        let config = ConvertConfig::default()
            .with_width(8)
            .with_preset(RampPreset::Standard);
        let art = convert(&img, &config).unwrap();

        assert!(art.lines().all(|l| l == "++++++++"));
    }

    #[test]
    fn test_two_char_ramp_extremes() {
        let ramp = CharRamp::new(vec!['#', '.']).unwrap();
        assert_eq!(convert_with(&solid(4, 4, 0), 2, &ramp).unwrap().as_str(), "##\n");
        assert_eq!(convert_with(&solid(4, 4, 255), 2, &ramp).unwrap().as_str(), "..\n");
    }

    #[test]
    fn test_width_one() {
        let art = convert(&gradient(64, 48), &ConvertConfig::default().with_width(1)).unwrap();
        assert_eq!(art.columns(), 1);
        assert!(art.rows() >= 1);
        assert!(art.lines().all(|l| l.chars().count() == 1));
    }

    #[test]
    fn test_line_count_matches_rows() {
        let img = gradient(300, 170);
        for width in [1, 20, 57, 100, 200] {
            let art = convert(&img, &ConvertConfig::default().with_width(width)).unwrap();
            assert_eq!(art.lines().count(), art.rows() as usize);
            assert!(art.lines().all(|l| l.chars().count() == width as usize));
        }
    }

    #[test]
    fn test_deterministic() {
        let img = gradient(123, 77);
        let config = ConvertConfig::default().with_width(60);
        let first = convert(&img, &config).unwrap();
        let second = convert(&img, &config).unwrap();
        assert_eq!(first.as_str().as_bytes(), second.as_str().as_bytes());
    }

    #[test]
    fn test_missing_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.png");

        let err = convert(&path, &ConvertConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_corrupt_bytes_is_decode_error() {
        let bytes: &[u8] = b"definitely not an image";
        let err = convert(bytes, &ConvertConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_invalid_width_checked_before_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.png");

        let err = convert(&path, &ConvertConfig::default().with_width(0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn test_convert_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let img = DynamicImage::ImageRgba8(gradient(90, 60).to_rgba8());

        for (name, format) in [
            ("input.png", ImageFormat::Png),
            ("input.bmp", ImageFormat::Bmp),
            ("input.gif", ImageFormat::Gif),
        ] {
            let path = dir.path().join(name);
            img.save_with_format(&path, format).unwrap();

            let art = convert(&path, &ConvertConfig::default().with_width(30)).unwrap();
            assert_eq!((art.columns(), art.rows()), (30, 10));
        }

        // JPEG has no alpha channel
        let path = dir.path().join("input.jpg");
        DynamicImage::ImageRgb8(img.to_rgb8())
            .save_with_format(&path, ImageFormat::Jpeg)
            .unwrap();

        let art = convert(&path, &ConvertConfig::default().with_width(30)).unwrap();
        assert_eq!((art.columns(), art.rows()), (30, 10));
        assert_eq!(art.lines().count(), 10);
    }

    #[test]
    fn test_format_detected_from_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actually-a-png.jpg");
        solid(20, 20, 0).save_with_format(&path, ImageFormat::Png).unwrap();

        let art = convert(&path, &ConvertConfig::default().with_width(4)).unwrap();
        assert_eq!(art.as_str(), "$$$$\n$$$$\n");
    }

    #[test]
    fn test_convert_from_bytes_matches_decoded() {
        let img = gradient(64, 64);
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();

        let config = ConvertConfig::default().with_width(32);
        let from_bytes = convert(bytes.as_slice(), &config).unwrap();
        let from_image = convert(&img, &config).unwrap();
        assert_eq!(from_bytes, from_image);
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let img = solid(1, 1, 255);
        let err = convert(&img, &ConvertConfig::default().with_width(u32::MAX)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn test_empty_image_rejected() {
        let img = DynamicImage::new_rgb8(0, 0);
        let err = convert(&img, &ConvertConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }
}
