//! Built-in model catalog
//!
//! Point clouds are sampled once on first access and shared for the
//! program lifetime.

use std::fmt;

use once_cell::sync::Lazy;

use crate::rasterizer::{
    render_frame, Color, ColorStrategy, Frame, RenderOptions, SurfacePoint, Vec3,
};
use super::solids::{box_points, sphere_points, torus_points};

/// A renderable solid: lookup key, display label, sampled surface and the
/// coloring rule applied to it.
#[derive(Debug)]
pub struct Model {
    pub key: &'static str,
    pub label: &'static str,
    pub points: Vec<SurfacePoint>,
    pub colorer: ColorStrategy,
}

impl Model {
    /// Render this model at animation time `t` onto a `width x height` grid.
    pub fn render(&self, t: f32, width: usize, height: usize, shades: &[char], opts: &RenderOptions) -> Frame {
        render_frame(&self.points, &self.colorer, t, width, height, shades, opts)
    }
}

static MODELS: Lazy<Vec<Model>> = Lazy::new(|| {
    vec![
        Model {
            key: "cube",
            label: "Cube",
            points: box_points(1.6, 0.09, Vec3::new(1.0, 1.0, 1.0)),
            colorer: ColorStrategy::Facets([
                Color::new(0xff, 0x7b, 0x7b), // +x
                Color::new(0xc5, 0x6c, 0xff), // -x
                Color::new(0x6b, 0xff, 0xc2), // +y
                Color::new(0x58, 0xc9, 0xff), // -y
                Color::new(0xff, 0xd5, 0x6c), // +z
                Color::new(0x9b, 0xe6, 0xff), // -z
            ]),
        },
        Model {
            key: "wide-cube",
            label: "Wide Cube",
            points: box_points(1.6, 0.09, Vec3::new(1.5, 1.0, 1.5)),
            colorer: ColorStrategy::AxisBlend {
                from: Color::new(0xd9, 0xff, 0x6c),
                to: Color::new(0xff, 0x6c, 0xf3),
                min_x: -1.5,
                max_x: 1.5,
            },
        },
        Model {
            key: "sphere",
            label: "Sphere",
            points: sphere_points(1.7, 0.11, 0.11),
            colorer: ColorStrategy::LatitudeBands {
                a: Color::new(0x65, 0xd8, 0xff),
                b: Color::new(0x6c, 0x9b, 0xff),
                y_freq: 3.2,
                x_freq: 1.4,
            },
        },
        Model {
            key: "torus",
            label: "Torus",
            points: torus_points(1.35, 0.45, 0.13, 0.13),
            colorer: ColorStrategy::AzimuthStripes {
                a: Color::new(0xff, 0xd3, 0x6c),
                b: Color::new(0xff, 0x6c, 0x8f),
                around: 4.0,
                along: 2.0,
            },
        },
    ]
});

/// All built-in models in registration order. Never empty.
pub fn all() -> &'static [Model] {
    &MODELS
}

/// Look up a model by key.
pub fn find(key: &str) -> Option<&'static Model> {
    MODELS.iter().find(|m| m.key == key)
}

/// Look up a model by key, falling back to the first registered model.
/// Interactive surfaces use this so a stale key still shows something;
/// batch callers want [`resolve`] instead.
pub fn find_or_default(key: &str) -> &'static Model {
    find(key).unwrap_or(&MODELS[0])
}

/// Strict lookup for the CLI: an unknown key is an error that names every
/// valid key.
pub fn resolve(key: &str) -> Result<&'static Model, UnknownModelError> {
    find(key).ok_or_else(|| UnknownModelError { requested: key.to_string() })
}

/// Requested key does not match any registered model.
#[derive(Debug)]
pub struct UnknownModelError {
    pub requested: String,
}

impl fmt::Display for UnknownModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = all().iter().map(|m| m.key).collect();
        write!(f, "unknown model '{}'. available: {}", self.requested, keys.join(", "))
    }
}

impl std::error::Error for UnknownModelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_models_registered_in_order() {
        let keys: Vec<&str> = all().iter().map(|m| m.key).collect();
        assert_eq!(keys, ["cube", "wide-cube", "sphere", "torus"]);
    }

    #[test]
    fn test_every_model_has_points() {
        for model in all() {
            assert!(!model.points.is_empty(), "{} has no points", model.key);
            assert!(!model.label.is_empty());
        }
    }

    #[test]
    fn test_find_and_fallback() {
        assert_eq!(find("torus").unwrap().label, "Torus");
        assert!(find("teapot").is_none());
        assert_eq!(find_or_default("teapot").key, "cube");
        assert_eq!(find_or_default("sphere").key, "sphere");
    }

    #[test]
    fn test_resolve_error_lists_every_key() {
        let err = resolve("teapot").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("teapot"));
        for model in all() {
            assert!(msg.contains(model.key), "missing {} in: {}", model.key, msg);
        }
    }

    #[test]
    fn test_model_render_is_deterministic() {
        let model = find_or_default("cube");
        let shades: Vec<char> = "@=-. ".chars().collect();
        let opts = RenderOptions::default();
        let a = model.render(0.0, 20, 10, &shades, &opts);
        let b = model.render(0.0, 20, 10, &shades, &opts);
        assert_eq!(a, b);
        // the solid actually shows up
        assert!(a.pixels.iter().any(|p| p.glyph != ' '));
    }

    #[test]
    fn test_rotation_changes_the_picture() {
        let model = find_or_default("torus");
        let shades: Vec<char> = "@=-. ".chars().collect();
        let opts = RenderOptions::default();
        let a = model.render(0.0, 30, 14, &shades, &opts);
        let b = model.render(1.0, 30, 14, &shades, &opts);
        assert_ne!(a, b);
    }
}
