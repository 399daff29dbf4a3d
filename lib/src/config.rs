use crate::error::{ConvertError, Result};
use crate::ramp::{CharRamp, RampPreset};
use image::imageops::FilterType;

/// Output width used when nothing else is requested
pub const DEFAULT_WIDTH: u32 = 100;

/// Width range offered by the desktop shell; the pipeline itself accepts any width >= 1
pub const MIN_UI_WIDTH: u32 = 20;
pub const MAX_UI_WIDTH: u32 = 200;

/// Vertical compression applied when resampling, since glyphs are taller than wide
pub const VERTICAL_SCALE: f64 = 0.5;

/// Configuration for ASCII art conversion
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub width: u32,          // output columns, >= 1, default 100
    pub ramp: CharRamp,      // darkest first, default 70 characters
    pub filter: FilterType,  // resampling filter, default Catmull-Rom
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            ramp: CharRamp::default(),
            filter: FilterType::CatmullRom,
        }
    }
}

impl ConvertConfig {
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_ramp(mut self, ramp: CharRamp) -> Self {
        self.ramp = ramp;
        self
    }

    pub fn with_preset(self, preset: RampPreset) -> Self {
        self.with_ramp(preset.ramp())
    }

    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    /// Validates the configuration parameters
    ///
    /// The ramp is already validated by [`CharRamp::new`].
    pub fn validate(&self) -> Result<()> {
        if self.width < 1 {
            return Err(ConvertError::InvalidParameter(format!(
                "width must be at least 1, got {}",
                self.width
            )));
        }
        Ok(())
    }
}
