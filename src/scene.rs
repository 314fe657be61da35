use crate::object::Object;
use crate::ray::Ray;
use crate::vec3::{Point3, Vec3};

/// Transient record of the nearest intersection along a ray.
pub struct RayHit<'a> {
    pub t: f64,
    pub point: Point3,
    pub normal: Vec3,
    pub object: &'a dyn Object,
}

/// Ordered, immutable collection of objects. Order only matters when two
/// hits are at exactly the same distance: the earlier object wins.
#[derive(Default)]
pub struct Scene {
    objects: Vec<Box<dyn Object>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, object: Box<dyn Object>) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Linear scan for the smallest positive `t`.
    pub fn closest_hit(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let (t, obj) = self
            .objects
            .iter()
            .fold((f64::INFINITY, None::<&dyn Object>), |acc, obj| match obj.hit(ray) {
                Some(t) if t < acc.0 => (t, Some(&**obj)),
                _ => acc,
            });

        obj.map(|object| {
            let point = ray.cast(t);
            RayHit {
                t,
                point,
                normal: object.normal_at(&point),
                object,
            }
        })
    }
}

impl FromIterator<Box<dyn Object>> for Scene {
    fn from_iter<I: IntoIterator<Item = Box<dyn Object>>>(iter: I) -> Self {
        Scene {
            objects: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::material::Material;
    use crate::object::Sphere;
    use crate::vec3;

    fn ball(z: f64, r: f64, color: Color) -> Box<dyn Object> {
        Box::new(Sphere::new(vec3!(0., 0., z), r, Material::diffuse(color)).unwrap())
    }

    #[test]
    fn empty_scene_misses() {
        let ray = Ray::new(Vec3::empty(), vec3!(0., 0., 1.));
        assert!(Scene::new().closest_hit(&ray).is_none());
    }

    #[test]
    fn picks_nearest_regardless_of_order() {
        let red = Color::of_rgb(255, 0, 0);
        let blue = Color::of_rgb(0, 0, 255);
        let ray = Ray::new(Vec3::empty(), vec3!(0., 0., 1.));

        let far_first: Scene = vec![ball(50., 10., blue), ball(20., 10., red)]
            .into_iter()
            .collect();
        let hit = far_first.closest_hit(&ray).unwrap();
        assert!((hit.t - 10.).abs() < 1e-9);
        assert_eq!(hit.object.material().color(), red);
        assert!((hit.normal - vec3!(0., 0., -1.)).mag() < 1e-9);
    }

    #[test]
    fn ties_go_to_first() {
        let red = Color::of_rgb(255, 0, 0);
        let green = Color::of_rgb(0, 255, 0);
        let ray = Ray::new(Vec3::empty(), vec3!(0., 0., 1.));

        let scene: Scene = vec![ball(20., 5., green), ball(20., 5., red)]
            .into_iter()
            .collect();
        let hit = scene.closest_hit(&ray).unwrap();
        assert_eq!(hit.object.material().color(), green);
    }

    #[test]
    fn objects_behind_origin_are_ignored() {
        let ray = Ray::new(Vec3::empty(), vec3!(0., 0., 1.));
        let scene: Scene = vec![ball(-20., 5., Color::white())].into_iter().collect();

        assert!(scene.closest_hit(&ray).is_none());
    }
}
