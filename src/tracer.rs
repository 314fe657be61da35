use crate::color::Color;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vec3::Vec3;

/// Returned once the bounce budget is spent.
pub const EXHAUSTED: Color = Color::of_rgb(8, 8, 8);

/// Returned for rays that leave the scene.
pub const ENVIRONMENT: Color = Color::of_rgb(30, 30, 60);

/// Fraction of the surface color every hit receives regardless of lighting.
pub const AMBIENT_FACTOR: f64 = 0.1;

/// Offset along the normal for bounce origins so they clear the surface they
/// start on.
pub const REFLECT_EPSILON: f64 = 1e-6;

pub const DEFAULT_MAX_DEPTH: i32 = 3;

/// Color seen along `ray`, following mirror bounces until `depth` runs out.
///
/// `light_dir` is the direction the light travels, so surfaces facing
/// `-light_dir` are fully lit. There is no occlusion test: a surface facing
/// the light is lit even if another object sits in between.
pub fn trace(ray: &Ray, scene: &Scene, light_dir: Vec3, depth: i32) -> Color {
    if depth <= 0 {
        return EXHAUSTED;
    }

    let hit = match scene.closest_hit(ray) {
        Some(hit) => hit,
        None => return ENVIRONMENT,
    };

    let material = hit.object.material();
    let surface = material.color();

    let intensity = hit.normal.dot(&(-light_dir).unit_vec()).max(0.);
    let diffuse = surface.scale(intensity);

    match material.reflectivity() {
        Some(reflectivity) => {
            let bounce = Ray::new(
                hit.point + hit.normal * REFLECT_EPSILON,
                ray.dir.reflect(&hit.normal),
            );
            let reflected = trace(&bounce, scene, light_dir, depth - 1);

            diffuse.blend(&reflected, reflectivity)
        }
        None => diffuse.add(&surface.scale(AMBIENT_FACTOR)),
    }
}
