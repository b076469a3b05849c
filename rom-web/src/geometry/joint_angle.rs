//! Signed joint angle
//!
//! Angle at `p1` between the vectors p1→p0 and p1→p2, signed by which side
//! of the palm the bend turns toward.

use nalgebra::Point3;

use super::error::GeometryError;
use super::vector::{angle_between, cross, difference, dot, Vec3};

/// Signed angle in degrees, in [-180, 180]
///
/// Magnitude comes from `angle_between`. The sign is that of
/// (p1→p0 × p1→p2) · palm_normal; zero counts as positive.
///
/// A straight chain (p0, p1, p2 colinear in order) measures ±180 since
/// both vectors leave the vertex in opposite directions.
pub fn signed_angle(
    p0: &Point3<f64>,
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    palm_normal: &Vec3,
) -> Result<f64, GeometryError> {
    let u = difference(p1, p0);
    let v = difference(p1, p2);

    let angle = angle_between(&u, &v)?;
    let side = dot(&cross(&u, &v), palm_normal);

    Ok(if side >= 0.0 { angle } else { -angle })
}
