use ascii_ramp::resample::target_dimensions;

fn main() -> Result<(), ascii_ramp::ConvertError> {
    println!("ASCII Ramp - Character Grid Sizes");
    println!("=================================\n");

    let test_cases = vec![
        (100, 50, "100x50 (2:1 landscape)"),
        (640, 480, "640x480 (4:3)"),
        (1920, 1080, "1920x1080 (Full HD)"),
        (400, 1200, "400x1200 (tall portrait)"),
        (2000, 10, "2000x10 (panorama strip)"),
    ];

    for (width, height, description) in test_cases {
        println!("Source: {}", description);
        for columns in [1, 20, 100, 200] {
            let (cols, rows) = target_dimensions(width, height, columns)?;
            println!("  width {:>3} -> {}x{}", columns, cols, rows);
        }
        println!();
    }

    println!("Rows are halved relative to the source aspect ratio because");
    println!("monospace glyphs are roughly twice as tall as they are wide.");

    Ok(())
}
