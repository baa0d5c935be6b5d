//! Light/dark theme and the default code colors each theme implies.

use egui::Color32;

/// Key under which the theme choice is persisted.
pub const THEME_STORAGE_KEY: &str = "simpleqr-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Default module colors for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Color32,
    pub background: Color32,
}

const LIGHT_PALETTE: Palette = Palette {
    foreground: Color32::from_rgb(0x11, 0x18, 0x27),
    background: Color32::WHITE,
};

const DARK_PALETTE: Palette = Palette {
    foreground: Color32::from_rgb(0xf9, 0xfa, 0xfb),
    background: Color32::from_rgb(0x1f, 0x29, 0x37),
};

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a persisted value. Unknown values are treated as absent.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Picks the stored preference, then the system preference, then light.
    pub fn resolve(stored: Option<&str>, system: Option<Self>) -> Self {
        stored
            .and_then(Self::parse)
            .or(system)
            .unwrap_or_default()
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Light => LIGHT_PALETTE,
            Self::Dark => DARK_PALETTE,
        }
    }

    /// Label of the toggle button, naming the theme it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark mode",
            Self::Dark => "Light mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_known_values() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse(" light\n"), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
    }

    #[test]
    fn test_resolve_prefers_stored_value() {
        assert_eq!(Theme::resolve(Some("dark"), Some(Theme::Light)), Theme::Dark);
        assert_eq!(Theme::resolve(Some("light"), Some(Theme::Dark)), Theme::Light);
    }

    #[test]
    fn test_resolve_falls_back_to_system_then_light() {
        assert_eq!(Theme::resolve(None, Some(Theme::Dark)), Theme::Dark);
        assert_eq!(Theme::resolve(Some("garbage"), Some(Theme::Dark)), Theme::Dark);
        assert_eq!(Theme::resolve(None, None), Theme::Light);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
        assert_eq!(Theme::Light.toggle_label(), "Dark mode");
        assert_eq!(Theme::Dark.toggle_label(), "Light mode");
    }
}
