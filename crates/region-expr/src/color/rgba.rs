//! 8-bit RGBA pixel value.

use std::fmt;

use super::InvalidColorError;

/// A single 8-bit RGBA pixel.
///
/// This is the value stored in a [`PixelGrid`](crate::PixelGrid) and the
/// color carried by every [`Rectangle`](crate::Rectangle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the canonical empty pixel.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a pixel from a `[R, G, B, A]` byte array.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a `[R, G, B, A]` byte array.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build a pixel from a raw channel list of 3 or 4 numbers.
    ///
    /// A 3-channel list gets an implicit alpha of 255. Every channel must be a
    /// finite integer in `0..=255`.
    ///
    /// # Example
    ///
    /// ```
    /// use region_expr::Rgba;
    ///
    /// let c = Rgba::from_channels(&[10.0, 20.0, 30.0]).unwrap();
    /// assert_eq!(c, Rgba::new(10, 20, 30, 255));
    /// assert!(Rgba::from_channels(&[10.0, 20.0]).is_err());
    /// ```
    pub fn from_channels(channels: &[f64]) -> Result<Self, InvalidColorError> {
        match channels.len() {
            n if n < 3 => return Err(InvalidColorError::TooFewChannels { found: n }),
            n if n > 4 => return Err(InvalidColorError::TooManyChannels { found: n }),
            _ => {}
        }

        let mut bytes = [255u8; 4];
        for (channel, &value) in channels.iter().enumerate() {
            if !value.is_finite() || value.fract() != 0.0 {
                return Err(InvalidColorError::NotAnInteger { channel, value });
            }
            if !(0.0..=255.0).contains(&value) {
                return Err(InvalidColorError::OutOfRange { channel, value });
            }
            bytes[channel] = value as u8;
        }

        Ok(Self::from_bytes(bytes))
    }

    /// Whether this pixel counts as empty: the sum of all four channels is zero.
    ///
    /// Only transparent black qualifies. Known defect kept for output
    /// compatibility: a transparent pixel with any non-zero RGB (e.g. white at
    /// alpha 0) is *not* empty and will be drawn.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.r as u16 + self.g as u16 + self.b as u16 + self.a as u16 == 0
    }

    /// Format as `#rrggbb` (lowercase, alpha never included).
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<[u8; 3]> for Rgba {
    fn from(rgb: [u8; 3]) -> Self {
        Self::opaque(rgb[0], rgb[1], rgb[2])
    }
}
