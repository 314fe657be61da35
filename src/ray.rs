use crate::vec3::{Point3, Vec3};

/// Half-line `origin + dir * t`. `dir` is always unit length.
///
/// The direction passed to `new` must be non-zero; every caller in the crate
/// builds it from a validated camera basis or a reflection of a unit vector.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, dir: Vec3) -> Ray {
        debug_assert!(!dir.is_degenerate(), "ray direction must be non-zero");
        Ray {
            origin,
            dir: dir.unit_vec(),
        }
    }

    pub fn cast(&self, t: f64) -> Point3 {
        self.origin + self.dir * t
    }
}
