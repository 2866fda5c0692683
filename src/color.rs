// File: src/color.rs

/// An sRGB colour with straight (non-premultiplied) opacity in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn opacity(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Parses `RRGGBB` or `#RRGGBB`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Composites `self` over an opaque `background`, for surfaces without alpha.
    pub fn over(self, background: Rgba) -> (u8, u8, u8) {
        let a = self.a.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| -> u8 {
            (fg as f32 * a + bg as f32 * (1.0 - a)).round() as u8
        };
        (
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }
}

// The app palette.
pub const PRIMARY_BLUE: Rgba = Rgba::rgb(28, 117, 213);
pub const PRIMARY_PINK: Rgba = Rgba::rgb(213, 28, 114);
pub const PRIMARY_GREEN: Rgba = Rgba::rgb(52, 199, 89);
pub const PRIMARY_TEXT: Rgba = Rgba::rgb(21, 21, 23);
pub const SECONDARY_TEXT: Rgba = PRIMARY_TEXT.opacity(0.5);
pub const SCREEN_BACKGROUND: Rgba = Rgba::rgb(0xFA, 0xFB, 0xFC);
pub const ROW_BACKGROUND: Rgba = Rgba::rgb(0xFF, 0xFF, 0xFF);
pub const ROW_BORDER: Rgba = Rgba::rgb(0xF1, 0xF6, 0xFB);
pub const ERROR_TEXT: Rgba = Rgba::rgb(255, 59, 48);
