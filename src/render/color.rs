use serde::{Deserialize, Serialize};
use std::fmt;

/// An SVG paint value. Mirrors the reference renderer's `std::variant<
/// monostate, string, Rgb, Rgba>` as a tagged enum. Externally tagged on
/// purpose (not `#[serde(untagged)]`): this type round-trips through
/// `bincode`, which cannot sniff untagged content the way a self-describing
/// format like JSON can. The JSON input boundary's string-or-array shape is
/// handled separately by `io::ColorDto`, which converts into this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Color {
    None,
    Named(String),
    Rgb { red: u8, green: u8, blue: u8 },
    Rgba { red: u8, green: u8, blue: u8, opacity: f64 },
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => write!(f, "none"),
            Color::Named(name) => write!(f, "{name}"),
            Color::Rgb { red, green, blue } => write!(f, "rgb({red},{green},{blue})"),
            Color::Rgba { red, green, blue, opacity } => {
                write!(f, "rgba({red},{green},{blue},{opacity})")
            }
        }
    }
}
