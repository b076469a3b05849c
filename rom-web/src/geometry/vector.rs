//! 3D vector primitives on nalgebra types

use nalgebra::{Point3, Vector3};

use super::error::GeometryError;

pub type Vec3 = Vector3<f64>;

/// Norms below this are treated as zero
pub const MIN_MAGNITUDE: f64 = f64::EPSILON;

/// Vector from `a` to `b` (b - a)
pub fn difference(a: &Point3<f64>, b: &Point3<f64>) -> Vec3 {
    b - a
}

pub fn dot(u: &Vec3, v: &Vec3) -> f64 {
    u.dot(v)
}

pub fn cross(u: &Vec3, v: &Vec3) -> Vec3 {
    u.cross(v)
}

/// Euclidean norm, refusing zero-length vectors
pub fn magnitude(u: &Vec3) -> Result<f64, GeometryError> {
    let n = u.norm();
    if n < MIN_MAGNITUDE {
        return Err(GeometryError::DegenerateVector);
    }
    Ok(n)
}

/// Unsigned angle between two vectors in degrees, in [0, 180]
///
/// Uses dot product formula: cos(θ) = (u · v) / (|u| × |v|)
///
/// The cosine is clamped to [-1, 1]; rounding on near-parallel vectors
/// otherwise pushes it just outside and `acos` returns NaN.
pub fn angle_between(u: &Vec3, v: &Vec3) -> Result<f64, GeometryError> {
    let cos_angle = dot(u, v) / (magnitude(u)? * magnitude(v)?);
    Ok(cos_angle.clamp(-1.0, 1.0).acos().to_degrees())
}
