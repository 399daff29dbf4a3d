mod app;

use app::AsciiApp;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    // Configure logging
    env_logger::init();

    // Configure viewport/window
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("ASCII Ramp")
            .with_icon(load_icon()),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "ASCII Ramp",
        options,
        Box::new(|cc| Ok(Box::new(AsciiApp::new(cc)))),
    )
}

/// Build the window icon: a left-to-right shade ramp in four bands
fn load_icon() -> egui::IconData {
    let icon_size = 32;
    let mut pixels = vec![0u8; icon_size * icon_size * 4];

    for y in 0..icon_size {
        for x in 0..icon_size {
            let idx = (y * icon_size + x) * 4;

            // Four bands, darkest on the left, with a one pixel gap between rows of "glyphs"
            let band = (x / 8) as u8;
            let shade = if y % 8 == 7 { 0 } else { 40 + band * 70 };

            pixels[idx] = shade; // R
            pixels[idx + 1] = shade; // G
            pixels[idx + 2] = shade; // B
            pixels[idx + 3] = 255; // A
        }
    }

    egui::IconData {
        rgba: pixels,
        width: icon_size as u32,
        height: icon_size as u32,
    }
}
