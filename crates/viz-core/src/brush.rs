//! Colors, palettes and the radial gradient brush each layer strokes with.

use crate::constants::{GRADIENT_OUTER_FACTOR, GRADIENT_STOP_OFFSETS};
use crate::error::{Result, VizError};
use crate::geometry::surface_center;
use crate::surface::Surface;
use glam::Vec2;

/// 8-bit RGB color with a floating point alpha, as CSS writes it.
#[derive(Clone, Copy, Debug, PartialEq)]
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

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB`.
    pub fn from_hex(text: &str) -> Result<Self> {
        let invalid = || VizError::InvalidColor(text.to_string());
        let hex = text.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// CSS color string accepted by canvas fill/stroke styles.
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Five colors spread over a gradient's stops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette(pub [Rgba; 5]);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Concentric radial color ramp from `inner_radius` to `outer_radius`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub stops: [ColorStop; 5],
}

impl RadialGradient {
    /// Gradient with inner radius `scale` and outer radius `5 * scale`.
    pub fn new(center: Vec2, scale: f32, palette: &Palette) -> Self {
        let mut stops = [ColorStop {
            offset: 0.0,
            color: palette.0[0],
        }; 5];
        for (i, stop) in stops.iter_mut().enumerate() {
            stop.offset = GRADIENT_STOP_OFFSETS[i];
            stop.color = palette.0[i];
        }
        Self {
            center,
            inner_radius: scale,
            outer_radius: scale * GRADIENT_OUTER_FACTOR,
            stops,
        }
    }
}

/// A drawing surface paired with the brush built for it at startup.
pub struct Layer<S: Surface> {
    pub surface: S,
    pub brush: S::Brush,
}

impl<S: Surface> Layer<S> {
    /// Build the layer's gradient brush, centered on the surface.
    pub fn new(surface: S, scale: f32, palette: &Palette) -> Result<Self> {
        let (width, height) = (surface.width(), surface.height());
        if width == 0 || height == 0 {
            return Err(VizError::EmptySurface { width, height });
        }
        let gradient = RadialGradient::new(surface_center(width, height), scale, palette);
        let brush = surface.create_radial_gradient(&gradient)?;
        log::debug!(
            "[layer] {}x{} gradient r0={:.2} r1={:.2}",
            width,
            height,
            gradient.inner_radius,
            gradient.outer_radius
        );
        Ok(Self { surface, brush })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_parse_and_print() {
        let c = Rgba::from_hex("#FF4411").unwrap();
        assert_eq!(c, Rgba::rgb(0xFF, 0x44, 0x11));
        assert_eq!(c.to_css(), "#ff4411");
    }

    #[test]
    fn malformed_hex_is_rejected() {
        for bad in ["FF4411", "#FF441", "#GG4411", "#FF44110"] {
            assert!(Rgba::from_hex(bad).is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn translucent_color_prints_rgba() {
        assert_eq!(Rgba::rgba(0, 0, 0, 0.04).to_css(), "rgba(0, 0, 0, 0.04)");
    }
}
