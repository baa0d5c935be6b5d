//! Render settings and the fixed defaults restored by "reset options".

use std::fmt;
use std::str::FromStr;

use egui::Color32;
use thiserror::Error;

use crate::filename::DEFAULT_FILENAME;

/// Sizes offered in the size picker, in pixels.
pub const SIZE_CHOICES: [u32; 6] = [128, 192, 256, 320, 384, 512];

pub const MIN_SIZE: u32 = 64;
pub const MAX_SIZE: u32 = 1024;

pub fn clamp_size(size: u32) -> u32 {
    size.clamp(MIN_SIZE, MAX_SIZE)
}

/// QR redundancy setting, trading data capacity for damage tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ErrorCorrectionLevel {
    /// Recovers ~7% of the symbol.
    Low,
    /// Recovers ~15% of the symbol.
    #[default]
    Medium,
    /// Recovers ~25% of the symbol.
    Quartile,
    /// Recovers ~30% of the symbol.
    High,
}

impl ErrorCorrectionLevel {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::Quartile, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "L",
            Self::Medium => "M",
            Self::Quartile => "Q",
            Self::High => "H",
        }
    }

    /// Label shown in the level picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "L (7%)",
            Self::Medium => "M (15%)",
            Self::Quartile => "Q (25%)",
            Self::High => "H (30%)",
        }
    }
}

impl fmt::Display for ErrorCorrectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown error correction level `{0}`, expected one of L, M, Q, H")]
pub struct ParseLevelError(pub String);

impl FromStr for ErrorCorrectionLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::Low),
            "M" => Ok(Self::Medium),
            "Q" => Ok(Self::Quartile),
            "H" => Ok(Self::High),
            _ => Err(ParseLevelError(s.to_owned())),
        }
    }
}

/// Everything the encoder needs for one render. Rebuilt on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub text: String,
    pub size: u32,
    pub level: ErrorCorrectionLevel,
    pub foreground: Color32,
    pub background: Color32,
}

/// Values restored by "reset options".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultSettings {
    pub size: u32,
    pub level: ErrorCorrectionLevel,
    pub filename: String,
    pub auto_generate: bool,
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self {
            size: 256,
            level: ErrorCorrectionLevel::Medium,
            filename: DEFAULT_FILENAME.to_owned(),
            auto_generate: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse_is_case_insensitive() {
        assert_eq!("q".parse::<ErrorCorrectionLevel>(), Ok(ErrorCorrectionLevel::Quartile));
        assert_eq!(" H ".parse::<ErrorCorrectionLevel>(), Ok(ErrorCorrectionLevel::High));
        assert!("X".parse::<ErrorCorrectionLevel>().is_err());
    }

    #[test]
    fn test_clamp_size() {
        assert_eq!(clamp_size(0), MIN_SIZE);
        assert_eq!(clamp_size(256), 256);
        assert_eq!(clamp_size(10_000), MAX_SIZE);
    }

    #[test]
    fn test_default_settings() {
        let defaults = DefaultSettings::default();
        assert_eq!(defaults.size, 256);
        assert_eq!(defaults.level, ErrorCorrectionLevel::Medium);
        assert_eq!(defaults.filename, "simpleqr");
        assert!(!defaults.auto_generate);
        assert!(SIZE_CHOICES.contains(&defaults.size));
    }
}
