//! Core types for the renderer

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use super::math::Vec3;

/// RGB color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` color; the leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        Some(Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear blend toward `other`; `t` is clamped to 0.0-1.0.
    pub fn mix(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

// Colors travel through options files as hex strings, not structs.
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Color::from_hex(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color '{}'", text)))
    }
}

/// A sample on a solid's surface: position plus unit outward normal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfacePoint {
    pub position: Vec3,
    pub normal: Vec3,
}

impl SurfacePoint {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }
}

/// Per-model surface coloring rule.
///
/// `color_at` receives the rotated position and rotated normal, so painted
/// features turn with the solid instead of sticking to the screen.
#[derive(Debug, Clone)]
pub enum ColorStrategy {
    /// Six fixed colors keyed by the dominant normal axis:
    /// `[+x, -x, +y, -y, +z, -z]`. Ties go to x over y over z.
    Facets([Color; 6]),
    /// Blend from `from` to `to` as position x moves across `min_x..max_x`.
    AxisBlend { from: Color, to: Color, min_x: f32, max_x: f32 },
    /// Sinusoidal bands: `0.5 + 0.5*sin(y*y_freq + x*x_freq)` picks the blend.
    LatitudeBands { a: Color, b: Color, y_freq: f32, x_freq: f32 },
    /// Stripes around the y axis: `0.5 + 0.5*sin(atan2(z,x)*around + y*along)`.
    AzimuthStripes { a: Color, b: Color, around: f32, along: f32 },
    /// One fixed color everywhere.
    Uniform(Color),
}

/// Neutral fallback for models that register no specific rule.
impl Default for ColorStrategy {
    fn default() -> Self {
        ColorStrategy::Uniform(Color::new(0xe0, 0xe0, 0xe0))
    }
}

impl ColorStrategy {
    pub fn color_at(&self, position: Vec3, normal: Vec3) -> Color {
        match *self {
            ColorStrategy::Facets(colors) => {
                let (ax, ay, az) = (normal.x.abs(), normal.y.abs(), normal.z.abs());
                if ax >= ay && ax >= az {
                    if normal.x > 0.0 { colors[0] } else { colors[1] }
                } else if ay >= az {
                    if normal.y > 0.0 { colors[2] } else { colors[3] }
                } else if normal.z > 0.0 {
                    colors[4]
                } else {
                    colors[5]
                }
            }
            ColorStrategy::AxisBlend { from, to, min_x, max_x } => {
                let t = (position.x - min_x) / (max_x - min_x);
                from.mix(to, t)
            }
            ColorStrategy::LatitudeBands { a, b, y_freq, x_freq } => {
                let t = 0.5 + 0.5 * (position.y * y_freq + position.x * x_freq).sin();
                a.mix(b, t)
            }
            ColorStrategy::AzimuthStripes { a, b, around, along } => {
                let angle = position.z.atan2(position.x);
                let t = 0.5 + 0.5 * (angle * around + position.y * along).sin();
                a.mix(b, t)
            }
            ColorStrategy::Uniform(color) => color,
        }
    }
}

/// One cell of a rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub glyph: char,
    pub color: Color,
}

/// A finished frame: `width * height` cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Pixel>,
}

impl Frame {
    /// Iterate rows top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Pixel> {
        self.pixels.chunks_exact(self.width)
    }
}

/// Renderer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Camera pullback added to rotated z before projection
    pub z_offset: f32,
    /// Horizontal magnification, as a fraction of grid width
    pub zoom_x: f32,
    /// Vertical magnification; runs higher than zoom_x because terminal
    /// cells are taller than they are wide
    pub zoom_y: f32,
    /// Directional light (normalized on load)
    pub light_dir: Vec3,
    /// Brightness floor so faces pointing away from the light stay legible
    pub ambient: f32,
    /// Depth tolerance band: samples within this distance of the nearest
    /// 1/z at a cell blend instead of replacing each other
    pub depth_epsilon: f32,
    /// Rotation rates around x and y per unit of animation time
    pub spin_x: f32,
    pub spin_y: f32,
    /// Color assigned to cells no sample reached
    pub background: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            z_offset: 6.0,
            zoom_x: 0.7,
            zoom_y: 0.95,
            light_dir: Vec3::new(0.35, 0.7, -0.55).normalize(),
            ambient: 0.18,
            depth_epsilon: 0.02,
            spin_x: 0.7,
            spin_y: 0.9,
            background: Color::new(0xe0, 0xe0, 0xe0),
        }
    }
}
