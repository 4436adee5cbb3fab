//! Point-cloud generators for the built-in solids
//!
//! Pure sampling functions with no rendering logic. Each one walks a
//! parametric surface at a fixed step and emits positions paired with unit
//! outward normals. Steps must be positive.

use crate::rasterizer::{SurfacePoint, Vec3};

/// Sample the six faces of an axis-aligned box.
///
/// The face grid runs `-half..=half` in steps of `step` before `scale`
/// stretches it per axis. Normals stay axis-aligned: a stretched box keeps
/// the lighting of its unstretched faces.
pub fn box_points(half: f32, step: f32, scale: Vec3) -> Vec<SurfacePoint> {
    let mut ticks = Vec::new();
    let mut u = -half;
    while u <= half {
        ticks.push(u);
        u += step;
    }

    let mut points = Vec::with_capacity(6 * ticks.len() * ticks.len());
    for face in 0..6 {
        let normal = match face {
            0 => Vec3::new(1.0, 0.0, 0.0),
            1 => Vec3::new(-1.0, 0.0, 0.0),
            2 => Vec3::new(0.0, 1.0, 0.0),
            3 => Vec3::new(0.0, -1.0, 0.0),
            4 => Vec3::new(0.0, 0.0, 1.0),
            _ => Vec3::new(0.0, 0.0, -1.0),
        };
        for &u in &ticks {
            for &v in &ticks {
                let position = match face {
                    0 => Vec3::new(half * scale.x, u * scale.y, v * scale.z),
                    1 => Vec3::new(-half * scale.x, u * scale.y, v * scale.z),
                    2 => Vec3::new(u * scale.x, half * scale.y, v * scale.z),
                    3 => Vec3::new(u * scale.x, -half * scale.y, v * scale.z),
                    4 => Vec3::new(u * scale.x, v * scale.y, half * scale.z),
                    _ => Vec3::new(u * scale.x, v * scale.y, -half * scale.z),
                };
                points.push(SurfacePoint::new(position, normal));
            }
        }
    }
    points
}

/// Sample a sphere over latitude `0..=PI` and longitude `0..2*PI`.
pub fn sphere_points(radius: f32, lat_step: f32, lon_step: f32) -> Vec<SurfacePoint> {
    use std::f32::consts::{PI, TAU};

    let mut points = Vec::new();
    let mut lat = 0.0f32;
    while lat <= PI {
        let sin_lat = lat.sin();
        let cos_lat = lat.cos();
        let mut lon = 0.0f32;
        while lon < TAU {
            let dir = Vec3::new(sin_lat * lon.cos(), sin_lat * lon.sin(), cos_lat);
            points.push(SurfacePoint::new(dir * radius, dir.normalize()));
            lon += lon_step;
        }
        lat += lat_step;
    }
    points
}

/// Sample a torus in the xz plane: `major_r` is the ring radius, `minor_r`
/// the tube radius.
pub fn torus_points(major_r: f32, minor_r: f32, major_step: f32, minor_step: f32) -> Vec<SurfacePoint> {
    use std::f32::consts::TAU;

    let mut points = Vec::new();
    let mut a = 0.0f32;
    while a < TAU {
        let cos_a = a.cos();
        let sin_a = a.sin();
        let mut b = 0.0f32;
        while b < TAU {
            let cos_b = b.cos();
            let sin_b = b.sin();
            let position = Vec3::new(
                (major_r + minor_r * cos_b) * cos_a,
                minor_r * sin_b,
                (major_r + minor_r * cos_b) * sin_a,
            );
            let normal = Vec3::new(cos_a * cos_b, sin_b, sin_a * cos_b).normalize();
            points.push(SurfacePoint::new(position, normal));
            b += minor_step;
        }
        a += major_step;
    }
    points
}
