use crate::foundation::error::{CharadeError, CharadeResult};

pub use kurbo::{BezPath, Point, Vec2};

/// Logical drawing surface dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in logical units (one unit is one pixel on the raster surface).
    pub width: u32,
    /// Height in logical units.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas. Both dimensions must be in `1..=u16::MAX`.
    pub fn new(width: u32, height: u32) -> CharadeResult<Self> {
        let c = Self { width, height };
        c.validate()?;
        Ok(c)
    }

    /// Check that the canvas can back a raster surface.
    pub fn validate(self) -> CharadeResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CharadeError::validation("canvas dimensions must be > 0"));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(CharadeError::validation("canvas dimensions exceed u16"));
        }
        Ok(())
    }

    /// Midpoint of the canvas.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 400,
            height: 300,
        }
    }
}

/// Point in time (or a duration) on the animation clock, in milliseconds.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Millis(pub u64);

impl Millis {
    /// Time zero.
    pub const ZERO: Self = Self(0);

    /// Add a duration using saturating arithmetic.
    pub fn saturating_add(self, d: Millis) -> Self {
        Self(self.0.saturating_add(d.0))
    }

    /// Elapsed time since `earlier`, zero when `earlier` is in the future.
    pub fn since(self, earlier: Millis) -> Millis {
        Self(self.0.saturating_sub(earlier.0))
    }

    /// Milliseconds as floating point.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black.
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    /// Opaque color from RGB channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional, case-insensitive).
    pub fn from_hex(s: &str) -> CharadeResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> CharadeResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| CharadeError::config(format!("invalid hex byte \"{pair}\"")))
        }

        if !s.is_ascii() {
            return Err(CharadeError::config("hex color must be ASCII"));
        }

        match s.len() {
            3 => {
                let expand = |i: usize| hex_byte(&s[i..=i].repeat(2));
                Ok(Self::opaque(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::opaque(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
            )),
            8 => Ok(Self {
                r: hex_byte(&s[0..2])?,
                g: hex_byte(&s[2..4])?,
                b: hex_byte(&s[4..6])?,
                a: hex_byte(&s[6..8])?,
            }),
            _ => Err(CharadeError::config(
                "hex color must be #RGB, #RRGGBB or #RRGGBBAA",
            )),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Obj {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "opaque_alpha")]
                a: u8,
            },
        }

        fn opaque_alpha() -> u8 {
            255
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Self::from_hex(&s).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b, a } => Ok(Self { r, g, b, a }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
