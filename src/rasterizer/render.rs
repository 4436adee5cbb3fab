//! Core rendering pipeline
//! Point-cloud splatting with a tolerance-banded depth buffer

use super::math::{rotate_normal, rotate_point, Vec3};
use super::types::{Color, ColorStrategy, Frame, Pixel, RenderOptions, SurfacePoint};

/// Points closer to the camera plane than this are discarded before the
/// perspective divide.
const NEAR_CLIP: f32 = 0.1;

/// A projected point ready to be splatted onto the grid.
#[derive(Debug, Clone, Copy)]
pub struct ScreenSample {
    /// Continuous cell coordinates; the integer part picks the base cell.
    pub x: f32,
    pub y: f32,
    /// Reciprocal depth. Larger is closer.
    pub inv_z: f32,
}

/// Accumulation buffer for one frame of splatting.
///
/// Cells hold weighted sums, not averages; `weight` is the divisor applied
/// at readout. `depth` tracks the closest reciprocal depth seen so far.
pub struct SplatBuffer {
    pub depth: Vec<f32>,
    pub brightness: Vec<f32>,
    pub weight: Vec<f32>,
    pub color: Vec<Vec3>,
    pub width: usize,
    pub height: usize,
}

impl SplatBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            depth: vec![f32::NEG_INFINITY; width * height],
            brightness: vec![0.0; width * height],
            weight: vec![0.0; width * height],
            color: vec![Vec3::ZERO; width * height],
            width,
            height,
        }
    }

    /// Deposit one sample bilinearly over the four cells around it.
    ///
    /// Each touched cell runs the depth test independently: a sample more
    /// than `epsilon` nearer than the cell's depth evicts everything
    /// accumulated there, a sample within `epsilon` of it blends in, and a
    /// sample more than `epsilon` farther is dropped.
    pub fn splat(&mut self, sample: ScreenSample, brightness: f32, color: Color, epsilon: f32) {
        let base_x = sample.x.floor() as i32;
        let base_y = sample.y.floor() as i32;
        let fx = sample.x - base_x as f32;
        let fy = sample.y - base_y as f32;
        let rgb = Vec3::new(color.r as f32, color.g as f32, color.b as f32);

        for iy in 0..2 {
            for ix in 0..2 {
                let cx = base_x + ix;
                let cy = base_y + iy;
                if cx < 0 || cx >= self.width as i32 || cy < 0 || cy >= self.height as i32 {
                    continue;
                }
                let w = (if ix == 0 { 1.0 - fx } else { fx }) * (if iy == 0 { 1.0 - fy } else { fy });
                if w <= 0.0 {
                    continue;
                }
                let idx = cy as usize * self.width + cx as usize;

                if sample.inv_z > self.depth[idx] + epsilon {
                    self.depth[idx] = sample.inv_z;
                    self.brightness[idx] = 0.0;
                    self.weight[idx] = 0.0;
                    self.color[idx] = Vec3::ZERO;
                }
                if (sample.inv_z - self.depth[idx]).abs() <= epsilon {
                    self.brightness[idx] += brightness * w;
                    self.weight[idx] += w;
                    self.color[idx] = self.color[idx] + rgb.scale(w);
                }
            }
        }
    }
}

/// Perspective-project a rotated point onto a `width x height` grid.
///
/// Returns `None` for points behind the near plane or landing more than one
/// cell outside the grid (one cell of margin keeps edge splats partial
/// instead of popping).
pub fn project_point(p: Vec3, width: usize, height: usize, opts: &RenderOptions) -> Option<ScreenSample> {
    let z = p.z + opts.z_offset;
    if z <= NEAR_CLIP {
        return None;
    }
    let inv_z = 1.0 / z;
    let w = width as f32;
    let h = height as f32;
    let x = w / 2.0 + p.x * inv_z * w * opts.zoom_x;
    let y = h / 2.0 - p.y * inv_z * h * opts.zoom_y;
    if x < -1.0 || x >= w + 1.0 || y < -1.0 || y >= h + 1.0 {
        return None;
    }
    Some(ScreenSample { x, y, inv_z })
}

/// 3x3 brightness smoothing over the splatted grid.
///
/// Each cell averages its normalized brightness (counted twice) with every
/// lit neighbor; unlit neighbors are skipped so edges do not darken. An
/// unlit cell with lit neighbors picks up their average, which reads as a
/// one-cell glow around the silhouette.
pub fn smooth_brightness(buf: &SplatBuffer) -> Vec<f32> {
    let (w, h) = (buf.width, buf.height);
    let base = |idx: usize| {
        if buf.weight[idx] > 0.0 {
            buf.brightness[idx] / buf.weight[idx]
        } else {
            0.0
        }
    };

    let mut smoothed = vec![0.0; w * h];
    for y in 0..h {
        for x in 0..w {
            let own = base(y * w + x);
            let mut total = own * 2.0;
            let mut count = if own > 0.0 { 2 } else { 0 };
            for dy in -1i32..=1 {
                for dx in -1i32..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let nx = x as i32 + dx;
                    let ny = y as i32 + dy;
                    if nx < 0 || nx >= w as i32 || ny < 0 || ny >= h as i32 {
                        continue;
                    }
                    let neighbor = base(ny as usize * w + nx as usize);
                    if neighbor > 0.0 {
                        total += neighbor;
                        count += 1;
                    }
                }
            }
            if count > 0 {
                smoothed[y * w + x] = total / count as f32;
            }
        }
    }
    smoothed
}

/// Map a brightness in 0.0-1.0 onto a ramp index; 1.0 is the first
/// (brightest) glyph, 0.0 the last.
pub fn shade_index(brightness: f32, ramp_len: usize) -> usize {
    let steps = ramp_len.saturating_sub(1);
    let idx = ((1.0 - brightness) * steps as f32).floor().max(0.0) as usize;
    idx.min(steps)
}

/// Render one frame of a rotating point cloud.
///
/// `t` is animation time: the cloud is rotated by `t * spin_x` around x and
/// `t * spin_y` around y. `shades` runs from brightest glyph to darkest and
/// must not be empty. The output is deterministic for equal inputs.
pub fn render_frame(
    points: &[SurfacePoint],
    colorer: &ColorStrategy,
    t: f32,
    width: usize,
    height: usize,
    shades: &[char],
    opts: &RenderOptions,
) -> Frame {
    debug_assert!(!shades.is_empty());
    let ax = t * opts.spin_x;
    let ay = t * opts.spin_y;

    let mut buf = SplatBuffer::new(width, height);
    for point in points {
        let p = rotate_point(point.position, ax, ay);
        let Some(sample) = project_point(p, width, height, opts) else {
            continue;
        };
        let n = rotate_normal(point.normal, ax, ay);
        let brightness = n.dot(opts.light_dir).max(opts.ambient).min(1.0);
        buf.splat(sample, brightness, colorer.color_at(p, n), opts.depth_epsilon);
    }

    let smoothed = smooth_brightness(&buf);
    let mut pixels = Vec::with_capacity(width * height);
    for idx in 0..width * height {
        let glyph = shades[shade_index(smoothed[idx], shades.len())];
        let color = if buf.weight[idx] > 0.0 {
            let c = buf.color[idx].scale(1.0 / buf.weight[idx]);
            Color::new(c.x.round() as u8, c.y.round() as u8, c.z.round() as u8)
        } else {
            opts.background
        };
        pixels.push(Pixel { glyph, color });
    }
    Frame { width, height, pixels }
}
