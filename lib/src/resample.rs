use crate::config::VERTICAL_SCALE;
use crate::error::{ConvertError, Result};
use image::DynamicImage;
use image::imageops::FilterType;

/// Compute the character-grid dimensions for a source image
///
/// The width is taken as-is; the height follows the source aspect ratio,
/// compressed by [`VERTICAL_SCALE`] and never less than one row.
///
/// # Arguments
/// * `src_width` - Source image width in pixels
/// * `src_height` - Source image height in pixels
/// * `width` - Requested output columns
///
/// # Returns
/// A tuple of (columns, rows), or `InvalidParameter` when the grid's
/// RGBA buffer would not be addressable with 32-bit sizes
pub fn target_dimensions(src_width: u32, src_height: u32, width: u32) -> Result<(u32, u32)> {
    let aspect = src_height as f64 / src_width as f64;
    let rows = (width as f64 * aspect * VERTICAL_SCALE).round().max(1.0);

    let too_large = || {
        ConvertError::InvalidParameter(format!(
            "a {width}x{rows} character grid is too large for a {src_width}x{src_height} image"
        ))
    };
    if rows > u32::MAX as f64 {
        return Err(too_large());
    }
    let rows = rows as u32;

    // 4 bytes per RGBA sample during resampling
    width
        .checked_mul(rows)
        .and_then(|cells| cells.checked_mul(4))
        .ok_or_else(too_large)?;

    Ok((width, rows))
}

/// Resize an image to exactly `width` pixels wide, keeping the compressed aspect ratio
pub fn resample(img: &DynamicImage, width: u32, filter: FilterType) -> Result<DynamicImage> {
    let (columns, rows) = target_dimensions(img.width(), img.height(), width)?;
    Ok(img.resize_exact(columns, rows, filter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_target_dimensions_landscape() {
        // 10 * 0.5 * 0.5 = 2.5, rounds to 3
        assert_eq!(target_dimensions(100, 50, 10).unwrap(), (10, 3));
    }

    #[test]
    fn test_target_dimensions_square() {
        assert_eq!(target_dimensions(640, 640, 100).unwrap(), (100, 50));
    }

    #[test]
    fn test_target_dimensions_min_one_row() {
        assert_eq!(target_dimensions(1000, 10, 20).unwrap(), (20, 1));
        assert_eq!(target_dimensions(100, 100, 1).unwrap(), (1, 1));
    }

    #[test]
    fn test_target_dimensions_tall() {
        assert_eq!(target_dimensions(50, 400, 10).unwrap(), (10, 40));
    }

    #[test]
    fn test_target_dimensions_overflow() {
        let err = target_dimensions(1, 1, u32::MAX).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);

        assert!(target_dimensions(1, u32::MAX, 2).is_err());
        assert!(target_dimensions(1, 1, 40_000).is_ok());
    }

    #[test]
    fn test_resample_width_is_exact() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(127, 85, Rgb([10, 20, 30])));
        for width in [1, 7, 20, 127, 200, 513] {
            let resized = resample(&img, width, FilterType::CatmullRom).unwrap();
            assert_eq!(resized.width(), width);
            assert!(resized.height() >= 1);
        }
    }

    #[test]
    fn test_resample_solid_stays_solid() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(100, 50, Rgb([255, 255, 255])));
        let resized = resample(&img, 10, FilterType::Lanczos3).unwrap().to_rgb8();
        assert_eq!(resized.dimensions(), (10, 3));
        assert!(resized.pixels().all(|p| *p == Rgb([255, 255, 255])));
    }
}
