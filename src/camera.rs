use crate::error::SceneError;
use crate::ray::Ray;
use crate::vec3::{Point3, Vec3};

/// Vertical field of view, in degrees.
pub const FOV_DEG: f64 = 45.;

/// Pinhole camera with an orthonormal right/up/forward basis.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Point3,
    look_dir: Vec3,
    up_dir: Vec3,
    right_dir: Vec3,
}

impl Camera {
    /// `up` is only a hint and need not be perpendicular to the view
    /// direction. Fails when `look_point == origin` or when `up` is parallel
    /// to the view direction.
    pub fn new(origin: Point3, look_point: Point3, up: Vec3) -> Result<Self, SceneError> {
        let look = look_point - origin;
        if look.is_degenerate() {
            return Err(SceneError::DegenerateCamera("look-at point equals position"));
        }
        let look_dir = look.unit_vec();

        let side = up.cross(&look_dir);
        if side.is_degenerate() {
            return Err(SceneError::DegenerateCamera("up hint is parallel to view direction"));
        }
        // camera-space up is the hint flipped; the flipped ndc y in
        // `ray_through_pixel` puts the top row back on the hint's side
        let up_dir = side.unit_vec().cross(&look_dir).unit_vec();
        let right_dir = up_dir.cross(&look_dir).unit_vec();

        Ok(Camera {
            origin,
            look_dir,
            up_dir,
            right_dir,
        })
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn forward(&self) -> Vec3 {
        self.look_dir
    }

    pub fn up(&self) -> Vec3 {
        self.up_dir
    }

    pub fn right(&self) -> Vec3 {
        self.right_dir
    }

    /// Primary ray through the center of pixel `(x, y)`. Row 0 is the top of
    /// the image.
    pub fn ray_through_pixel(&self, x: usize, y: usize, width: usize, height: usize) -> Ray {
        let aspect_ratio = width as f64 / height as f64;
        let scale = (FOV_DEG.to_radians() / 2.).tan();

        let ndc_x = 2. * (x as f64 + 0.5) / width as f64 - 1.;
        let ndc_y = 1. - 2. * (y as f64 + 0.5) / height as f64;

        let cam_x = ndc_x * scale * aspect_ratio;
        let cam_y = -ndc_y * scale;

        let dir = cam_x * self.right_dir + cam_y * self.up_dir + self.look_dir;

        Ray::new(self.origin, dir)
    }
}
