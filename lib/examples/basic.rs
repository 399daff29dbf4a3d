/// Basic example: Convert a simple test image to ASCII art
///
/// This draws a shaded circle and prints it once per built-in ramp.
/// Pass an image path as the first argument to convert that instead.
use ascii_ramp::{ConvertConfig, RampPreset, convert};
use image::{DynamicImage, Rgb, RgbImage};
use std::path::PathBuf;

fn main() -> Result<(), ascii_ramp::ConvertError> {
    println!("ASCII Ramp - Basic Example");
    println!("==========================\n");

    let width = 160;
    let height = 120;
    let mut img = RgbImage::from_pixel(width, height, Rgb([30, 30, 30]));

    // Radial gradient: bright center fading out to the background
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 50.0;

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as f32 - center_x;
        let dy = y as f32 - center_y;
        let dist = (dx * dx + dy * dy).sqrt();

        if dist < radius {
            let shade = 255.0 * (1.0 - dist / radius);
            *pixel = Rgb([shade as u8, shade as u8, 255]);
        }
    }

    let img = DynamicImage::ImageRgb8(img);
    let path = std::env::args().nth(1).map(PathBuf::from);

    for &preset in RampPreset::all() {
        let config = ConvertConfig::default().with_width(60).with_preset(preset);
        let art = match &path {
            Some(path) => convert(path, &config)?,
            None => convert(&img, &config)?,
        };

        println!("{} - {}x{}", preset.label(), art.columns(), art.rows());
        print!("{art}");
        println!();
    }

    Ok(())
}
