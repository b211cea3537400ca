//! JSON-facing color shape: a bare string, a 3-element `[r,g,b]` array, or a
//! 4-element `[r,g,b,o]` array. `render::Color` itself stays a plain
//! externally-tagged enum so it can round-trip through `bincode`; this type
//! exists only to bridge the self-describing JSON input into that shape.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::render::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct ColorDto(pub Color);

impl From<ColorDto> for Color {
    fn from(dto: ColorDto) -> Self {
        dto.0
    }
}

impl<'de> Deserialize<'de> for ColorDto {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ColorVisitor;

        impl<'de> Visitor<'de> for ColorVisitor {
            type Value = ColorDto;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a color name or an array of 3 or 4 numbers")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ColorDto(Color::Named(v.to_string())))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let red: u8 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &"3 or 4 elements"))?;
                let green: u8 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &"3 or 4 elements"))?;
                let blue: u8 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(2, &"3 or 4 elements"))?;
                let opacity: Option<f64> = seq.next_element()?;
                Ok(ColorDto(match opacity {
                    Some(opacity) => Color::Rgba { red, green, blue, opacity },
                    None => Color::Rgb { red, green, blue },
                }))
            }
        }

        deserializer.deserialize_any(ColorVisitor)
    }
}

impl Serialize for ColorDto {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeSeq;
        match &self.0 {
            Color::None => serializer.serialize_str("none"),
            Color::Named(name) => serializer.serialize_str(name),
            Color::Rgb { red, green, blue } => {
                let mut seq = serializer.serialize_seq(Some(3))?;
                seq.serialize_element(red)?;
                seq.serialize_element(green)?;
                seq.serialize_element(blue)?;
                seq.end()
            }
            Color::Rgba { red, green, blue, opacity } => {
                let mut seq = serializer.serialize_seq(Some(4))?;
                seq.serialize_element(red)?;
                seq.serialize_element(green)?;
                seq.serialize_element(blue)?;
                seq.serialize_element(opacity)?;
                seq.end()
            }
        }
    }
}
