use image::{DynamicImage, GrayImage, Luma};

/// Calculate luminance from an image of any color layout
///
/// Formula: L = (299*R + 587*G + 114*B) / 1000, rounded to nearest
/// This is the ITU-R 601-2 luma transform, evaluated in integer arithmetic.
/// Alpha is ignored; indexed, 16-bit and float images go through 8-bit RGB first.
///
/// # Arguments
/// * `img` - Input image
///
/// # Returns
/// Grayscale image with luminance values, same dimensions as the input
pub fn to_luminance(img: &DynamicImage) -> GrayImage {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let mut output = GrayImage::new(width, height);

    for (x, y, pixel) in rgb.enumerate_pixels() {
        output.put_pixel(x, y, Luma([luma(pixel[0], pixel[1], pixel[2])]));
    }

    output
}

/// Weighted luma of a single RGB sample
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
    // Weights sum to 1000, so the result never exceeds 255
    ((weighted + 500) / 1000) as u8
}
