//! Shared colors.

use egui::Color32;

pub const POSITIVE: Color32 = Color32::from_rgb(34, 197, 94);
pub const NEGATIVE: Color32 = Color32::from_rgb(239, 68, 68);
pub const DIM: Color32 = Color32::from_rgb(148, 163, 184);

/// Color for a 24h change value.
pub fn change_color(percent: f64) -> Color32 {
    if percent < 0.0 {
        NEGATIVE
    } else {
        POSITIVE
    }
}
