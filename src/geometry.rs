//! Axis-aligned volumes and ray intersection.
//!
//! Trigger zones and sight blockers are authored as boxes, so perception
//! only needs a slab-method ray/AABB test rather than a full collision
//! library.

use glam::Vec3;

/// Axis-aligned bounding box in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Distance along a ray to this box, if it is struck within `max_len`.
    ///
    /// `dir` must be normalized. A ray starting inside the box reports a
    /// hit at distance 0 (the box is already "in view").
    pub fn ray_intersection(&self, origin: Vec3, dir: Vec3, max_len: f32) -> Option<f32> {
        let mut t_near = 0.0_f32;
        let mut t_far = max_len;

        for axis in 0..3 {
            let o = origin[axis];
            let d = dir[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if d.abs() < f32::EPSILON {
                // Ray parallel to this slab: misses unless origin is inside it
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / d;
            let mut t0 = (lo - o) * inv;
            let mut t1 = (hi - o) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_near = t_near.max(t0);
            t_far = t_far.min(t1);
            if t_near > t_far {
                return None;
            }
        }

        Some(t_near)
    }
}
