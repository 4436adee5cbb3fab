//! Software point-cloud renderer for glyph grids
//!
//! Pipeline per frame:
//! - Rotate each surface point (x axis, then y axis)
//! - Perspective-project onto the cell grid
//! - Bilinear splat into a tolerance-banded depth buffer
//! - Smooth brightness with a 3x3 pass
//! - Map brightness onto a glyph ramp, averaged color per cell

mod math;
mod types;
mod render;

pub use math::*;
pub use types::*;
pub use render::*;

/// Grid size used when the terminal size cannot be detected.
pub const DEFAULT_WIDTH: usize = 140;
pub const DEFAULT_HEIGHT: usize = 52;

/// Stock shade ramp, brightest glyph first. The trailing space doubles as
/// the background.
pub const DEFAULT_SHADES: &str = "█▓▒░ ";
