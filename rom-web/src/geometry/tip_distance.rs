//! Fingertip to palm distance, normalized by hand size

use super::error::GeometryError;
use super::palm::palm_center;
use super::vector::{difference, magnitude};
use crate::hand::{LandmarkFrame, MIDDLE_MCP, WRIST};

/// |palm center → tip| / |wrist → middle MCP|
///
/// Dividing by the wrist to middle-MCP length keeps the ratio independent
/// of how far the hand is from the camera. A zero reference length is
/// reported as `DegenerateReference` instead of dividing by zero.
pub fn normalized_tip_distance(frame: &LandmarkFrame, tip_index: usize) -> Result<f64, GeometryError> {
    let tip = frame
        .get(tip_index)
        .ok_or(GeometryError::IndexOutOfRange(tip_index))?
        .point();

    let distance = difference(&palm_center(frame), &tip).norm();

    let reference = magnitude(&difference(&frame[WRIST].point(), &frame[MIDDLE_MCP].point()))
        .map_err(|_| GeometryError::DegenerateReference)?;

    Ok(distance / reference)
}
