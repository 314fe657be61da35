use std::ops::{Add, Div, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    a: [f64; 3],
}

pub type Point3 = Vec3;

impl Vec3 {
    pub fn empty() -> Self {
        Self { a: [0., 0., 0.] }
    }

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { a: [x, y, z] }
    }

    pub fn x(&self) -> f64 {
        self.a[0]
    }

    pub fn y(&self) -> f64 {
        self.a[1]
    }

    pub fn z(&self) -> f64 {
        self.a[2]
    }

    pub fn dot(self, other: &Self) -> f64 {
        self.a.iter().zip(other.a.iter()).map(|(a, b)| a * b).sum()
    }

    pub fn cross(&self, other: &Self) -> Self {
        let a = self.a;
        let b = other.a;
        Self {
            a: [
                a[1] * b[2] - a[2] * b[1],
                a[2] * b[0] - a[0] * b[2],
                a[0] * b[1] - a[1] * b[0],
            ],
        }
    }

    pub fn mag_squared(&self) -> f64 {
        self.a.iter().map(|a| a * a).sum()
    }

    pub fn mag(&self) -> f64 {
        self.mag_squared().sqrt()
    }

    /// Zero, or too short to normalize without producing NaN/inf.
    pub fn is_degenerate(&self) -> bool {
        let m = self.mag_squared();
        !m.is_finite() || m < 1e-12
    }

    pub fn unit_vec(self) -> Self {
        self / self.mag()
    }

    /// Mirror `self` about the unit normal `n`.
    pub fn reflect(&self, n: &Vec3) -> Self {
        *self - *n * (2. * self.dot(n))
    }
}

#[macro_export]
macro_rules! vec3 {
    ($a:expr,$b:expr,$c:expr) => {
        $crate::vec3::Vec3::new($a, $b, $c)
    };
}

impl From<[f64; 3]> for Vec3 {
    fn from(a: [f64; 3]) -> Self {
        Self { a }
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            a: [
                self.a[0] + other.a[0],
                self.a[1] + other.a[1],
                self.a[2] + other.a[2],
            ],
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            a: [-self.a[0], -self.a[1], -self.a[2]],
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, fact: f64) -> Self {
        Self {
            a: [self.a[0] * fact, self.a[1] * fact, self.a[2] * fact],
        }
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Vec3 {
        v * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, fact: f64) -> Self {
        self * (1. / fact)
    }
}

#[test]
fn test_ops() {
    let a = Vec3::new(3., 0., 2.);
    let b = Vec3::new(-1., 4., 2.);

    assert_eq!(a.cross(&b), Vec3::new(-8., -8., 12.));
    assert_eq!(a.dot(&b), 1.);
    assert_eq!(a + b, Vec3::new(2., 4., 4.));
    assert_eq!(-a, Vec3::new(-3., -0., -2.));
    assert_eq!(-a * 2., Vec3::new(-6., -0., -4.));
    assert_eq!(2. * a, Vec3::new(6., 0., 4.));
    assert_eq!(a / 2., Vec3::new(1.5, -0., 1.));
    assert_eq!(a - b, Vec3::new(4., -4., 0.));
    assert_eq!(a.mag_squared(), 13.);
    assert_eq!(a.mag(), (13 as f64).sqrt());
}

#[test]
fn test_reflect() {
    let n = Vec3::new(0., 1., 0.);
    let d = Vec3::new(1., -1., 0.);

    assert_eq!(d.reflect(&n), Vec3::new(1., 1., 0.));
    // head-on bounces straight back
    assert_eq!(Vec3::new(0., 0., 1.).reflect(&vec3!(0., 0., -1.)), vec3!(0., 0., -1.));
}

#[test]
fn test_degenerate() {
    assert!(Vec3::empty().is_degenerate());
    assert!(Vec3::new(f64::NAN, 0., 0.).is_degenerate());
    assert!(!Vec3::new(0., 0., 1e-3).is_degenerate());
}
