//! Mask overlay color.

use std::fmt;
use std::str::FromStr;

use palette::Srgba;
use palette::rgb::channels::Argb;
use serde::{Deserialize, Serialize};

/// Translucent color composited over the whole frame after the tiles.
///
/// Stored as 8-bit sRGB with straight alpha. Serializes as a packed
/// `0xAARRGGBB` integer, the same layout hosts usually hand over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct MaskColor(Srgba<u8>);

impl MaskColor {
    /// Fully transparent; no overlay is drawn.
    pub fn transparent() -> Self {
        Self::from_argb(0)
    }

    pub fn from_argb(argb: u32) -> Self {
        Self(Srgba::from_u32::<Argb>(argb))
    }

    pub fn to_argb(self) -> u32 {
        self.0.into_u32::<Argb>()
    }

    /// Channels in `[r, g, b, a]` order.
    pub fn rgba(self) -> [u8; 4] {
        [self.0.red, self.0.green, self.0.blue, self.0.alpha]
    }

    pub fn alpha(self) -> u8 {
        self.0.alpha
    }

    pub fn is_transparent(self) -> bool {
        self.alpha() == 0
    }
}

impl Default for MaskColor {
    fn default() -> Self {
        Self::transparent()
    }
}

impl From<u32> for MaskColor {
    fn from(argb: u32) -> Self {
        Self::from_argb(argb)
    }
}

impl From<MaskColor> for u32 {
    fn from(color: MaskColor) -> Self {
        color.to_argb()
    }
}

impl fmt::Display for MaskColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_argb())
    }
}

/// Parses `#AARRGGBB` or `#RRGGBB` (opaque). The leading `#` is optional.
impl FromStr for MaskColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        let value =
            u32::from_str_radix(hex, 16).map_err(|e| format!("invalid mask color '{s}': {e}"))?;
        match hex.len() {
            8 => Ok(Self::from_argb(value)),
            6 => Ok(Self::from_argb(0xFF00_0000 | value)),
            _ => Err(format!(
                "invalid mask color '{s}': expected #AARRGGBB or #RRGGBB"
            )),
        }
    }
}
