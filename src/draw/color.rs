//! RGBA color type, the fixed drawing palette, and predefined color constants.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use paintbox::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let faded = red.fade(0.6);
/// assert_eq!(faded.a, 0.6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates an opaque color from 8-bit sRGB components.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Returns the same color with its alpha replaced by `alpha` (clamped to 0.0-1.0).
    pub fn fade(self, alpha: f64) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Sets this color as the source of the given Cairo context.
    pub fn apply(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

// ============================================================================
// Palette colors (selectable with 1-4)
// ============================================================================

/// Palette black
pub const BLACK: Color = Color::from_rgb8(0, 0, 0);

/// Palette red
pub const RED: Color = Color::from_rgb8(230, 41, 55);

/// Palette blue
pub const BLUE: Color = Color::from_rgb8(0, 121, 241);

/// Palette green
pub const GREEN: Color = Color::from_rgb8(0, 228, 48);

// ============================================================================
// UI colors
// ============================================================================

/// Canvas fill color
pub const WHITE: Color = Color::from_rgb8(255, 255, 255);

/// Screen background behind the canvas
pub const SCREEN_BACKGROUND: Color = Color::from_rgb8(245, 245, 245);

/// Toolbar strip fill
pub const LIGHT_GRAY: Color = Color::from_rgb8(200, 200, 200);

/// Help line text
pub const DARK_GRAY: Color = Color::from_rgb8(80, 80, 80);

/// FPS counter text
pub const LIME: Color = Color::from_rgb8(0, 158, 47);

/// One of the four selectable drawing colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    #[default]
    Black,
    Red,
    Blue,
    Green,
}

impl PaletteColor {
    /// Resolves the palette entry to its RGBA value.
    pub fn to_color(self) -> Color {
        match self {
            PaletteColor::Black => BLACK,
            PaletteColor::Red => RED,
            PaletteColor::Blue => BLUE,
            PaletteColor::Green => GREEN,
        }
    }

    /// Lowercase name as used in the config file.
    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Black => "black",
            PaletteColor::Red => "red",
            PaletteColor::Blue => "blue",
            PaletteColor::Green => "green",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_replaces_alpha_only() {
        let faded = RED.fade(0.6);
        assert_eq!(faded.r, RED.r);
        assert_eq!(faded.g, RED.g);
        assert_eq!(faded.b, RED.b);
        assert_eq!(faded.a, 0.6);
    }

    #[test]
    fn fade_clamps_out_of_range_alpha() {
        assert_eq!(BLUE.fade(1.5).a, 1.0);
        assert_eq!(BLUE.fade(-0.2).a, 0.0);
    }

    #[test]
    fn palette_resolves_to_constants() {
        assert_eq!(PaletteColor::Black.to_color(), BLACK);
        assert_eq!(PaletteColor::Red.to_color(), RED);
        assert_eq!(PaletteColor::Blue.to_color(), BLUE);
        assert_eq!(PaletteColor::Green.to_color(), GREEN);
        assert_eq!(PaletteColor::default(), PaletteColor::Black);
    }

    #[test]
    fn from_rgb8_scales_components() {
        let c = Color::from_rgb8(255, 0, 51);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-9);
        assert_eq!(c.a, 1.0);
    }
}
