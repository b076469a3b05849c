//! Geometry module - vector math and the per-joint measurements
//!
//! Re-exports only. All logic in submodules.

mod error;
mod vector;
mod palm;
mod joint_angle;
mod tip_distance;

pub use error::GeometryError;
pub use vector::{difference, dot, cross, magnitude, angle_between, Vec3, MIN_MAGNITUDE};
pub use palm::{palm_normal, palm_center, PALM_CENTER_LANDMARKS};
pub use joint_angle::signed_angle;
pub use tip_distance::normalized_tip_distance;
