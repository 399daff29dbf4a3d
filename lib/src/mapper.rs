use crate::ramp::CharRamp;
use image::GrayImage;

/// Map every brightness sample to its ramp character
///
/// # Arguments
/// * `lum` - Single-channel brightness image
/// * `ramp` - Character ramp, darkest first
///
/// # Returns
/// One character per pixel in row-major order
pub fn map_pixels(lum: &GrayImage, ramp: &CharRamp) -> Vec<char> {
    lum.pixels().map(|p| ramp.char_for(p[0])).collect()
}
