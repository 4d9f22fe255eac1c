//! Geometry descriptions handed to the host renderer.
//!
//! Parametric shapes (spheres, cylinders, boxes) are sent as parameters and
//! tessellated by the host. Rings and point clouds carry their vertex data
//! because the animation either generates or mutates it.

use glam::{Vec2, Vec3};
use serde::Serialize;
use std::f32::consts::TAU;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
    Cuboid {
        width: f32,
        height: f32,
        depth: f32,
    },
    Ring(RingGeometry),
    Points(PointCloud),
}

impl Geometry {
    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Geometry::Sphere { radius, width_segments, height_segments }
    }

    pub fn points(&self) -> Option<&PointCloud> {
        match self {
            Geometry::Points(cloud) => Some(cloud),
            _ => None,
        }
    }

    pub fn points_mut(&mut self) -> Option<&mut PointCloud> {
        match self {
            Geometry::Points(cloud) => Some(cloud),
            _ => None,
        }
    }
}

// ── Rings ────────────────────────────────────────────────────────────

/// Flat annulus in the local XY plane, one radial band of quads.
///
/// Vertex layout: `segments + 1` vertices on the inner edge followed by
/// `segments + 1` on the outer edge (the seam vertex is duplicated).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RingGeometry {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub segments: u32,
    pub positions: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl RingGeometry {
    /// Build the annulus with planar texture coordinates
    /// (`uv = (p / outer + 1) / 2`).
    pub fn new(inner_radius: f32, outer_radius: f32, segments: u32) -> Self {
        let segments = segments.max(3);
        let row = segments + 1;
        let mut positions = Vec::with_capacity(2 * row as usize);
        let mut uvs = Vec::with_capacity(2 * row as usize);

        for radius in [inner_radius, outer_radius] {
            for i in 0..row {
                let theta = i as f32 / segments as f32 * TAU;
                let p = Vec3::new(radius * theta.cos(), radius * theta.sin(), 0.0);
                positions.push(p);
                uvs.push(Vec2::new(
                    (p.x / outer_radius + 1.0) / 2.0,
                    (p.y / outer_radius + 1.0) / 2.0,
                ));
            }
        }

        let mut indices = Vec::with_capacity(6 * segments as usize);
        for i in 0..segments {
            let a = i;
            let b = i + row;
            let c = i + row + 1;
            let d = i + 1;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }

        Self { inner_radius, outer_radius, segments, positions, uvs, indices }
    }

    /// Replace the planar coordinates with a radial strip mapping, so a
    /// 1-D ring texture runs from the inner edge (u = 0) to the outer (u = 1).
    pub fn with_radial_uv(mut self) -> Self {
        for (uv, p) in self.uvs.iter_mut().zip(&self.positions) {
            *uv = radial_ring_uv(p.truncate(), self.inner_radius, self.outer_radius);
        }
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Texture coordinate for a point on an annulus: `u` is the linear remap of
/// the point's radial distance from `[inner, outer]` to `[0, 1]`, `v` is 0.5.
/// A degenerate annulus maps everything to `u = 0`.
pub fn radial_ring_uv(point: Vec2, inner: f32, outer: f32) -> Vec2 {
    let width = outer - inner;
    if width.abs() <= f32::EPSILON {
        return Vec2::new(0.0, 0.5);
    }
    Vec2::new((point.length() - inner) / width, 0.5)
}

// ── Point clouds ─────────────────────────────────────────────────────

/// Fixed-size pool of points. Positions may be mutated in place every frame;
/// the pool never grows after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointCloud {
    pub positions: Vec<Vec3>,
    /// Per-point phase in [0, 1) for host-side twinkle.
    pub size_phases: Vec<f32>,
    /// Point size the layer was created with.
    pub base_size: f32,
}

impl PointCloud {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radial_uv_maps_edges_to_unit_range() {
        assert!((radial_ring_uv(Vec2::new(15.4, 0.0), 15.4, 27.5).x).abs() < 1e-6);
        assert!((radial_ring_uv(Vec2::new(0.0, 27.5), 15.4, 27.5).x - 1.0).abs() < 1e-6);
        let mid = radial_ring_uv(Vec2::new(-21.45, 0.0), 15.4, 27.5);
        assert!((mid.x - 0.5).abs() < 1e-5);
        assert_eq!(mid.y, 0.5);
    }

    #[test]
    fn radial_uv_is_linear_in_radius() {
        let (inner, outer) = (2.0, 6.0);
        for i in 0..=8 {
            let r = inner + (outer - inner) * i as f32 / 8.0;
            let uv = radial_ring_uv(Vec2::new(r * 0.6, r * 0.8), inner, outer);
            assert!((uv.x - i as f32 / 8.0).abs() < 1e-5, "r={r} u={}", uv.x);
        }
    }

    #[test]
    fn degenerate_ring_does_not_divide_by_zero() {
        let uv = radial_ring_uv(Vec2::new(3.0, 0.0), 3.0, 3.0);
        assert_eq!(uv, Vec2::new(0.0, 0.5));
    }

    #[test]
    fn ring_layout() {
        let ring = RingGeometry::new(39.85, 40.15, 128);
        assert_eq!(ring.vertex_count(), 2 * 129);
        assert_eq!(ring.uvs.len(), ring.vertex_count());
        assert_eq!(ring.indices.len(), 6 * 128);
        assert!(ring.indices.iter().all(|&i| (i as usize) < ring.vertex_count()));
        for p in &ring.positions[..129] {
            assert!((p.length() - 39.85).abs() < 1e-3);
        }
        for p in &ring.positions[129..] {
            assert!((p.length() - 40.15).abs() < 1e-3);
            assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn radial_uv_rewrites_every_vertex() {
        let ring = RingGeometry::new(15.4, 27.5, 64).with_radial_uv();
        for uv in &ring.uvs[..65] {
            assert!(uv.x.abs() < 1e-4);
        }
        for uv in &ring.uvs[65..] {
            assert!((uv.x - 1.0).abs() < 1e-4);
        }
        assert!(ring.uvs.iter().all(|uv| uv.y == 0.5));
    }

    #[test]
    fn geometry_serializes_with_kind_tag() {
        let json = serde_json::to_value(Geometry::sphere(15.0, 64, 64)).unwrap();
        assert_eq!(json["kind"], "sphere");
        assert_eq!(json["radius"], 15.0);
    }
}
