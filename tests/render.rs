use mirrortrace::camera::Camera;
use mirrortrace::config::RenderConfig;
use mirrortrace::material::Material;
use mirrortrace::object::{Object, Sphere};
use mirrortrace::render::{render, RenderSettings};
use mirrortrace::scene::Scene;
use mirrortrace::tracer::{self, ENVIRONMENT};
use mirrortrace::{vec3, Color, Vec3};

fn red_sphere_scene() -> Scene {
    let red = Sphere::new(
        vec3!(0., 0., 500.),
        100.,
        Material::diffuse(Color::of_rgb(255, 0, 0)),
    )
    .unwrap();

    vec![Box::new(red) as Box<dyn Object>].into_iter().collect()
}

#[test]
fn red_sphere_center_and_off_axis() {
    let cam = Camera::new(Vec3::empty(), vec3!(0., 0., 1.), vec3!(0., 1., 0.)).unwrap();
    let scene = red_sphere_scene();
    let light = vec3!(0., 0., -1.);

    let center = tracer::trace(&cam.ray_through_pixel(50, 50, 100, 100), &scene, light, 3);
    assert!(center.r > 0);
    assert!(center.r > center.g && center.r > center.b);

    let corner = tracer::trace(&cam.ray_through_pixel(0, 0, 100, 100), &scene, light, 3);
    assert_eq!(corner, ENVIRONMENT);
}

#[test]
fn full_pass_over_red_sphere() {
    let cam = Camera::new(Vec3::empty(), vec3!(0., 0., 1.), vec3!(0., 1., 0.)).unwrap();
    let settings = RenderSettings::new(100, 100, vec3!(0., 0., -1.)).unwrap();

    let img = render(&settings, &red_sphere_scene(), &cam);

    let c = img.get(50, 50);
    assert!(c.r > c.g && c.r > c.b);
    for &(x, y) in [(0, 0), (99, 0), (0, 99), (99, 99)].iter() {
        assert_eq!(img.get(x, y), ENVIRONMENT);
    }
}

#[test]
fn bundled_scene_file_renders() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scenes/mirrors.yaml");
    let mut config = RenderConfig::from_file(path).unwrap();
    config.width = 40;
    config.height = 30;

    let img = render(
        &config.settings().unwrap(),
        &config.scene().unwrap(),
        &config.camera().unwrap(),
    );
    assert_eq!((img.width, img.height), (40, 30));
}
