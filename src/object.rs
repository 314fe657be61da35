use crate::error::SceneError;
use crate::material::Material;
use crate::ray::*;
use crate::vec3::*;

/// Something a ray can hit. Objects are shared read-only across render
/// workers.
pub trait Object: Send + Sync {
    /// Distance to the nearest hit strictly in front of the ray origin.
    fn hit(&self, ray: &Ray) -> Option<f64>;

    /// Unit outward normal at a point on the surface.
    fn normal_at(&self, point: &Point3) -> Vec3;

    fn material(&self) -> &Material;
}

#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point3,
    r: f64,
    material: Material,
}

impl Sphere {
    pub fn new(center: Point3, r: f64, material: Material) -> Result<Self, SceneError> {
        if !(r.is_finite() && r > 0.) {
            return Err(SceneError::InvalidRadius(r));
        }

        Ok(Sphere {
            center,
            r,
            material,
        })
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.r
    }
}

impl Object for Sphere {
    fn hit(&self, ray: &Ray) -> Option<f64> {
        // https://en.wikipedia.org/wiki/Line%E2%80%93sphere_intersection
        let diff = ray.origin - self.center;

        let a = ray.dir.mag_squared();
        let b = ray.dir.dot(&diff) * 2.;
        let c = diff.mag_squared() - self.r * self.r;

        let disc = b * b - 4. * a * c;
        if disc < 0. {
            return None;
        }

        let sqrt_disc = disc.sqrt();
        let t0 = (-b - sqrt_disc) / (2. * a);
        let t1 = (-b + sqrt_disc) / (2. * a);

        if t0 > 0. {
            Some(t0)
        } else if t1 > 0. {
            Some(t1)
        } else {
            None
        }
    }

    fn normal_at(&self, point: &Point3) -> Vec3 {
        (*point - self.center).unit_vec()
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::vec3;

    fn sphere(center: Point3, r: f64) -> Sphere {
        Sphere::new(center, r, Material::diffuse(Color::white())).unwrap()
    }

    #[test]
    fn head_on_hit_distance() {
        let s = sphere(vec3!(0., 0., 500.), 100.);
        let ray = Ray::new(Vec3::empty(), vec3!(0., 0., 1.));

        let t = s.hit(&ray).unwrap();
        assert!((t - 400.).abs() < 1e-9);

        let origin = vec3!(30., -40., 10.);
        let s = sphere(vec3!(-7., 12., 2.), 3.5);
        let ray = Ray::new(origin, s.center() - origin);
        let expected = (origin - s.center()).mag() - s.radius();
        assert!((s.hit(&ray).unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn aimed_away_misses() {
        let s = sphere(vec3!(0., 0., 500.), 100.);
        let ray = Ray::new(Vec3::empty(), vec3!(0., 0., -1.));
        assert_eq!(s.hit(&ray), None);

        let ray = Ray::new(Vec3::empty(), vec3!(0., 1., 0.));
        assert_eq!(s.hit(&ray), None);
    }

    #[test]
    fn tangent_ray_reports_single_root() {
        let s = sphere(Vec3::empty(), 1.);
        let ray = Ray::new(vec3!(0., 1., -10.), vec3!(0., 0., 1.));

        let t = s.hit(&ray).unwrap();
        assert!((t - 10.).abs() < 1e-9);
        assert!((ray.cast(t) - vec3!(0., 1., 0.)).mag() < 1e-9);
    }

    #[test]
    fn origin_inside_takes_far_root() {
        let s = sphere(Vec3::empty(), 2.);
        let ray = Ray::new(Vec3::empty(), vec3!(1., 0., 0.));

        assert!((s.hit(&ray).unwrap() - 2.).abs() < 1e-9);
    }

    #[test]
    fn normal_points_outward() {
        let s = sphere(vec3!(1., 1., 1.), 2.);
        let n = s.normal_at(&vec3!(1., 3., 1.));

        assert!((n - vec3!(0., 1., 0.)).mag() < 1e-12);
    }

    #[test]
    fn rejects_bad_radius() {
        let m = Material::diffuse(Color::black());

        assert_eq!(
            Sphere::new(Vec3::empty(), 0., m).unwrap_err(),
            SceneError::InvalidRadius(0.)
        );
        assert!(Sphere::new(Vec3::empty(), -3., m).is_err());
        assert!(Sphere::new(Vec3::empty(), f64::NAN, m).is_err());
        assert!(Sphere::new(Vec3::empty(), f64::INFINITY, m).is_err());
    }
}
