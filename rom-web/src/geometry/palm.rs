//! Palm plane - normal and center
//!
//! The normal gives the hand's "up" direction so flexion angles keep the
//! same sign from frame to frame.

use nalgebra::Point3;

use super::vector::{cross, difference, Vec3};
use crate::hand::{LandmarkFrame, INDEX_MCP, MIDDLE_MCP, PINKY_MCP, RING_MCP, WRIST};

/// Landmarks averaged into the palm center
pub const PALM_CENTER_LANDMARKS: [usize; 5] = [WRIST, INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP];

/// (wrist → index MCP) × (wrist → pinky MCP)
///
/// Not normalized: callers only look at the sign of a dot product with it.
pub fn palm_normal(frame: &LandmarkFrame) -> Vec3 {
    let wrist = frame[WRIST].point();
    let a = difference(&wrist, &frame[INDEX_MCP].point());
    let b = difference(&wrist, &frame[PINKY_MCP].point());
    cross(&a, &b)
}

/// Unweighted mean of the wrist and the four finger MCPs
pub fn palm_center(frame: &LandmarkFrame) -> Point3<f64> {
    let sum = PALM_CENTER_LANDMARKS
        .iter()
        .fold(Vec3::zeros(), |acc, &i| acc + frame[i].point().coords);
    Point3::from(sum / PALM_CENTER_LANDMARKS.len() as f64)
}
