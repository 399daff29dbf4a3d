//! ASCII Ramp - image to ASCII art by luminance
//!
//! The conversion is a stateless pipeline: resample the image to the requested
//! number of columns, reduce it to luminance, and quantize every pixel onto a
//! character ramp ordered from darkest to lightest.
//!
//! # Example
//! ```no_run
//! use ascii_ramp::{convert, ConvertConfig, RampPreset};
//! use std::path::Path;
//!
//! let config = ConvertConfig::default()
//!     .with_width(80)
//!     .with_preset(RampPreset::Standard);
//! let art = convert(Path::new("photo.jpg"), &config).unwrap();
//! print!("{art}");
//! art.save("photo.txt").unwrap();
//! ```

pub mod artifact;
pub mod config;
pub mod error;
pub mod layout;
pub mod luminance;
pub mod mapper;
pub mod processor;
pub mod ramp;
pub mod resample;

// Re-export main types for convenience
pub use artifact::AsciiArt;
pub use config::ConvertConfig;
pub use error::{ConvertError, ErrorKind, Result};
pub use processor::{ImageSource, convert, convert_with, load_image};
pub use ramp::{CharRamp, RampPreset};
