//! Shared color constants for the UI.

use egui::Color32;

/// Red color for error status.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Forest green color for success status.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);
