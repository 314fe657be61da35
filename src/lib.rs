//! Sphere ray tracer: pinhole camera, Lambert + ambient shading and
//! depth-bounded mirror reflections.

pub mod vec3;

pub mod camera;
pub mod color;
pub mod config;
pub mod error;
pub mod material;
pub mod object;
pub mod ray;
pub mod render;
pub mod scene;
pub mod tracer;

pub use color::Color;
pub use error::SceneError;
pub use vec3::{Point3, Vec3};
