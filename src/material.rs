use crate::color::Color;

/// Surface response of an object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Material {
    /// Lambert shading plus an ambient floor.
    Diffuse { color: Color },
    /// Lambert shading blended with a traced mirror bounce.
    Reflective { color: Color, reflectivity: f64 },
}

impl Material {
    pub fn diffuse(color: Color) -> Self {
        Material::Diffuse { color }
    }

    /// `reflectivity` is clamped into `[0, 1]`; NaN counts as 0.
    pub fn reflective(color: Color, reflectivity: f64) -> Self {
        let clamped = if reflectivity.is_nan() {
            0.
        } else {
            reflectivity.clamp(0., 1.)
        };
        if clamped != reflectivity {
            log::warn!("reflectivity {} clamped to {}", reflectivity, clamped);
        }

        Material::Reflective {
            color,
            reflectivity: clamped,
        }
    }

    pub fn color(&self) -> Color {
        match *self {
            Material::Diffuse { color } | Material::Reflective { color, .. } => color,
        }
    }

    /// Mirror weight, `None` for surfaces that never spawn a bounce.
    pub fn reflectivity(&self) -> Option<f64> {
        match *self {
            Material::Diffuse { .. } => None,
            Material::Reflective { reflectivity, .. } => Some(reflectivity),
        }
    }
}
