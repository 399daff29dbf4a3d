//! Character ramps
//!
//! A ramp orders characters from darkest (index 0) to lightest (last index).
//! Brightness values are quantized onto the ramp by [`CharRamp::index_for`].

use crate::error::{ConvertError, Result};
use std::fmt;
use std::str::FromStr;

/// Full 70 character ramp, densest glyph first
pub const DEFAULT_RAMP: [char; 70] = [
    '$', '@', 'B', '%', '8', '&', 'W', 'M', '#', '*', 'o', 'a', 'h', 'k', 'b', 'd', //
    'p', 'q', 'w', 'm', 'Z', 'O', '0', 'Q', 'L', 'C', 'J', 'U', 'Y', 'X', 'z', 'c', //
    'v', 'u', 'n', 'x', 'r', 'j', 'f', 't', '/', '\\', '|', '(', ')', '1', '{', '}', //
    '[', ']', '?', '-', '_', '+', '~', '<', '>', 'i', '!', 'l', 'I', ';', ':', ',', //
    '"', '^', '`', '\'', '.', ' ',
];

/// Classic 10 level ramp
pub const STANDARD_RAMP: [char; 10] = ['@', '%', '#', '*', '+', '=', '-', ':', '.', ' '];

/// Unicode shade blocks
pub const BLOCK_RAMP: [char; 4] = ['▓', '▒', '░', ' '];

/// An ordered, validated sequence of at least two characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharRamp {
    chars: Vec<char>,
}

impl CharRamp {
    /// Build a ramp, rejecting anything shorter than two characters
    ///
    /// Characters need not be unique; only their position matters. Control
    /// characters (line terminators, tabs, ...) are rejected since they would
    /// break the row structure of the output.
    pub fn new(chars: Vec<char>) -> Result<Self> {
        if chars.len() < 2 {
            return Err(ConvertError::InvalidParameter(format!(
                "character ramp must contain at least 2 characters, got {}",
                chars.len()
            )));
        }
        if let Some(pos) = chars.iter().position(|c| c.is_control()) {
            return Err(ConvertError::InvalidParameter(format!(
                "character ramp contains control character {:?} at index {pos}",
                chars[pos]
            )));
        }
        Ok(Self { chars })
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Never true for a constructed ramp
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Ramp index for an 8-bit brightness value
    ///
    /// Equivalent to `floor(value / (255 / (len - 1)))`, evaluated in integer
    /// arithmetic so that 255 lands exactly on the last index. The result is
    /// clamped to the ramp bounds regardless.
    pub fn index_for(&self, value: u8) -> usize {
        let last = self.chars.len().saturating_sub(1);
        let index = value as usize * last / 255;
        index.min(last)
    }

    /// Character for an 8-bit brightness value
    pub fn char_for(&self, value: u8) -> char {
        self.chars[self.index_for(value)]
    }
}

impl Default for CharRamp {
    fn default() -> Self {
        Self {
            chars: DEFAULT_RAMP.to_vec(),
        }
    }
}

impl FromStr for CharRamp {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.chars().collect())
    }
}

impl fmt::Display for CharRamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Built-in ramps offered by the desktop shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RampPreset {
    /// [`DEFAULT_RAMP`]
    #[default]
    Full,
    /// [`STANDARD_RAMP`]
    Standard,
    /// [`BLOCK_RAMP`]
    Blocks,
}

impl RampPreset {
    pub fn all() -> &'static [RampPreset] {
        &[RampPreset::Full, RampPreset::Standard, RampPreset::Blocks]
    }

    /// Display name for UI
    pub fn label(&self) -> &'static str {
        match self {
            RampPreset::Full => "Full (70 characters)",
            RampPreset::Standard => "Standard (@%#*+=-:. )",
            RampPreset::Blocks => "Blocks (▓▒░ )",
        }
    }

    pub fn chars(&self) -> &'static [char] {
        match self {
            RampPreset::Full => &DEFAULT_RAMP,
            RampPreset::Standard => &STANDARD_RAMP,
            RampPreset::Blocks => &BLOCK_RAMP,
        }
    }

    pub fn ramp(&self) -> CharRamp {
        CharRamp {
            chars: self.chars().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_default_ramp_endpoints() {
        let ramp = CharRamp::default();
        assert_eq!(ramp.len(), 70);
        assert_eq!(ramp.char_for(0), '$');
        assert_eq!(ramp.char_for(255), ' ');
    }

    #[test]
    fn test_standard_ramp_mid_gray() {
        // step = 255 / 9 ≈ 28.3, floor(128 / 28.3) = 4
        let ramp: CharRamp = "@%#*+=-:. ".parse().unwrap();
        assert_eq!(ramp.index_for(128), 4);
        assert_eq!(ramp.char_for(128), '+');
    }

    #[test]
    fn test_two_char_ramp() {
        let ramp = CharRamp::new(vec!['#', ' ']).unwrap();
        assert_eq!(ramp.char_for(0), '#');
        assert_eq!(ramp.char_for(254), '#');
        assert_eq!(ramp.char_for(255), ' ');
    }

    #[test]
    fn test_short_ramp_rejected() {
        let err = CharRamp::new(vec!['x']).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert!("".parse::<CharRamp>().is_err());
    }

    #[test]
    fn test_control_chars_rejected() {
        let err = "#\n".parse::<CharRamp>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);

        for ramp in ["\r ", "@\t.", "# \u{7f}"] {
            assert!(ramp.parse::<CharRamp>().is_err(), "{ramp:?} accepted");
        }
    }

    #[test]
    fn test_duplicate_chars_allowed() {
        let ramp = CharRamp::new(vec!['#', '#', ' ']).unwrap();
        assert_eq!(ramp.char_for(0), '#');
        assert_eq!(ramp.char_for(255), ' ');
    }

    #[test]
    fn test_index_is_monotonic() {
        for preset in RampPreset::all() {
            let ramp = preset.ramp();
            let mut previous = 0;
            for value in 0..=255u8 {
                let index = ramp.index_for(value);
                assert!(index >= previous, "{preset:?} decreased at {value}");
                assert!(index < ramp.len());
                previous = index;
            }
            assert_eq!(previous, ramp.len() - 1);
        }
    }

    #[test]
    fn test_block_ramp_multibyte() {
        let ramp = RampPreset::Blocks.ramp();
        assert_eq!(ramp.char_for(0), '▓');
        assert_eq!(ramp.char_for(255), ' ');
        assert_eq!(ramp.to_string(), "▓▒░ ");
    }

    #[test]
    fn test_preset_default_is_full() {
        assert_eq!(RampPreset::default().ramp(), CharRamp::default());
    }
}
