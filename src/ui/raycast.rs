//! Ray picking against flat button quads.

use glam::{Quat, Vec2, Vec3};

/// A ray in world space. `direction` is always normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or(Vec3::NEG_Z),
        }
    }

    /// Ray along the forward axis (-Z) of a tracked input source.
    #[must_use]
    pub fn from_pose(position: Vec3, orientation: Quat) -> Self {
        Self::new(position, orientation * Vec3::NEG_Z)
    }

    #[inline]
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Ray parameter of the hit on `quad`, if the ray crosses it in front of the origin.
    #[must_use]
    pub fn intersect_quad(&self, quad: &Quad) -> Option<f32> {
        let normal = quad.normal();
        let denom = normal.dot(self.direction);
        if denom.abs() < 1e-8 {
            return None; // Parallel to the panel
        }

        let t = normal.dot(quad.center - self.origin) / denom;
        if t < 0.0 {
            return None;
        }

        let local = self.at(t) - quad.center;
        let x = local.dot(quad.right);
        let y = local.dot(quad.up);
        if x.abs() > quad.half_extents.x || y.abs() > quad.half_extents.y {
            return None;
        }

        Some(t)
    }
}

/// A rectangle in world space, spanned by two orthonormal axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub center: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub half_extents: Vec2,
}

impl Quad {
    /// An axis-aligned quad facing +Z.
    #[must_use]
    pub fn facing_z(center: Vec3, size: Vec2) -> Self {
        Self {
            center,
            right: Vec3::X,
            up: Vec3::Y,
            half_extents: size * 0.5,
        }
    }

    #[inline]
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        self.right.cross(self.up)
    }
}

/// The nearest quad a ray hits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Position of the hit quad in the slice passed to the query.
    pub target: usize,
    /// Index of the ray (controller) that produced the hit.
    pub source: usize,
    pub t: f32,
}

/// Nearest hit of `ray` among `quads`, by ray parameter.
#[must_use]
pub fn nearest_hit<'a>(
    ray: &Ray,
    quads: impl IntoIterator<Item = &'a Quad>,
) -> Option<(usize, f32)> {
    quads
        .into_iter()
        .enumerate()
        .filter_map(|(i, quad)| ray.intersect_quad(quad).map(|t| (i, t)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Casts every ray in order and returns the first one that hits anything.
///
/// Controller 0 is tested before controller 1, so when both rays hit, the
/// first controller wins regardless of distance.
#[must_use]
pub fn pick<'a, I>(rays: &[Ray], quads: I) -> Option<RayHit>
where
    I: IntoIterator<Item = &'a Quad> + Clone,
{
    rays.iter().enumerate().find_map(|(source, ray)| {
        nearest_hit(ray, quads.clone()).map(|(target, t)| RayHit { target, source, t })
    })
}
