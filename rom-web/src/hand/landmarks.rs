//! Hand landmark frame
//!
//! One frame of MediaPipe Hands output: 21 points in the tracker's
//! coordinate space. A `LandmarkFrame` can only be built with exactly 21
//! finite points, so indexing with the constants below never fails.

use std::ops::Index;

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// HAND LANDMARK INDICES (MediaPipe Hands - 21 total)
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Landmarks per hand
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Length of a flat `[x0, y0, z0, x1, ...]` buffer for one hand
pub const FLAT_FRAME_LEN: usize = HAND_LANDMARK_COUNT * 3;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Errors from building a frame out of tracker data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameError {
    #[error("Invalid landmark count: {0} (expected 21)")]
    WrongLength(usize),

    #[error("Invalid landmark data length: {0} (expected 63)")]
    WrongFlatLength(usize),

    #[error("Landmark {0} has a non-finite coordinate")]
    NonFinite(usize),
}

/// A single 3D landmark point
///
/// Serializes as `{"x": .., "y": .., "z": ..}`, the shape MediaPipe hands
/// to JavaScript.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Landmark {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn point(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<Point3<f64>> for Landmark {
    fn from(p: Point3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

/// Exactly 21 landmarks, indexed by the constants in this module
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct LandmarkFrame {
    landmarks: [Landmark; HAND_LANDMARK_COUNT],
}

impl LandmarkFrame {
    /// Build a frame from exactly 21 landmarks
    pub fn from_landmarks(landmarks: &[Landmark]) -> Result<Self, FrameError> {
        let landmarks: [Landmark; HAND_LANDMARK_COUNT] = landmarks
            .try_into()
            .map_err(|_| FrameError::WrongLength(landmarks.len()))?;

        if let Some(bad) = landmarks.iter().position(|lm| !lm.is_finite()) {
            return Err(FrameError::NonFinite(bad));
        }

        Ok(Self { landmarks })
    }

    /// Build a frame from a flat array of 63 values
    /// (21 landmarks × 3 coordinates: x, y, z)
    pub fn from_flat(data: &[f64]) -> Result<Self, FrameError> {
        if data.len() != FLAT_FRAME_LEN {
            return Err(FrameError::WrongFlatLength(data.len()));
        }

        let landmarks: Vec<Landmark> = data
            .chunks_exact(3)
            .map(|c| Landmark::new(c[0], c[1], c[2]))
            .collect();

        Self::from_landmarks(&landmarks)
    }

    /// Landmark by index, `None` past the last one
    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    pub fn landmarks(&self) -> &[Landmark; HAND_LANDMARK_COUNT] {
        &self.landmarks
    }
}

impl Index<usize> for LandmarkFrame {
    type Output = Landmark;

    fn index(&self, index: usize) -> &Landmark {
        &self.landmarks[index]
    }
}

impl TryFrom<Vec<Landmark>> for LandmarkFrame {
    type Error = FrameError;

    fn try_from(landmarks: Vec<Landmark>) -> Result<Self, FrameError> {
        Self::from_landmarks(&landmarks)
    }
}

impl From<LandmarkFrame> for Vec<Landmark> {
    fn from(frame: LandmarkFrame) -> Self {
        frame.landmarks.to_vec()
    }
}
