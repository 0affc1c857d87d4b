//! Serde support for colors written as `"#RRGGBB"` strings or plain integers

pub type HexColor = u32;

/// Parse `#RRGGBB`, `RRGGBB` or `0xRRGGBB`.
pub fn parse_hex_color(text: &str) -> Option<HexColor> {
    let digits = text
        .strip_prefix('#')
        .or_else(|| text.strip_prefix("0x"))
        .unwrap_or(text);
    if digits.len() != 6 {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Split a color into its red, green and blue channels.
pub fn rgb_channels(color: HexColor) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xff) as u8,
        ((color >> 8) & 0xff) as u8,
        (color & 0xff) as u8,
    )
}

pub mod hex_color_serde {
    use super::{parse_hex_color, HexColor};
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(color: &HexColor, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("#{:06x}", color))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<HexColor, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HexColorVisitor;

        impl<'de> Visitor<'de> for HexColorVisitor {
            type Value = HexColor;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a color as \"#RRGGBB\" or an integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<HexColor, E> {
                parse_hex_color(v).ok_or_else(|| E::custom(format!("invalid color '{}'", v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<HexColor, E> {
                if v <= 0xff_ffff {
                    Ok(v as HexColor)
                } else {
                    Err(E::custom(format!("color {:#x} out of range", v)))
                }
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<HexColor, E> {
                if v < 0 {
                    return Err(E::custom("color must not be negative"));
                }
                self.visit_u64(v as u64)
            }
        }

        deserializer.deserialize_any(HexColorVisitor)
    }
}
