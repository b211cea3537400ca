use serde::{Deserialize, Serialize};

use super::color::Color;

/// Parameters controlling the map layout and the visual style of drawables.
/// Mirrors the reference renderer's `RenderSettings` one field at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    pub bus_label_font_size: u32,
    pub bus_label_offset: (f64, f64),
    pub stop_label_font_size: u32,
    pub stop_label_offset: (f64, f64),
    pub underlayer_color: Color,
    pub underlayer_width: f64,
    pub color_palette: Vec<Color>,
}
