//! Test hands
//!
//! Palm lies in the z = 0 plane with fingers pointing along +y, so the
//! palm normal is (0, 0, -0.6).

use super::landmarks::*;

pub(crate) fn straight_hand() -> LandmarkFrame {
    let mut points = [Landmark::default(); HAND_LANDMARK_COUNT];

    points[WRIST] = Landmark::new(0.0, 0.0, 0.0);

    points[THUMB_CMC] = Landmark::new(-0.35, 0.25, 0.0);
    points[THUMB_MCP] = Landmark::new(-0.5, 0.45, 0.0);
    points[THUMB_IP] = Landmark::new(-0.6, 0.6, 0.0);
    points[THUMB_TIP] = Landmark::new(-0.7, 0.75, 0.0);

    points[INDEX_MCP] = Landmark::new(-0.3, 1.0, 0.0);
    points[INDEX_PIP] = Landmark::new(-0.3, 1.35, 0.0);
    points[INDEX_DIP] = Landmark::new(-0.3, 1.55, 0.0);
    points[INDEX_TIP] = Landmark::new(-0.3, 1.7, 0.0);

    points[MIDDLE_MCP] = Landmark::new(-0.1, 1.0, 0.0);
    points[MIDDLE_PIP] = Landmark::new(-0.1, 1.4, 0.0);
    points[MIDDLE_DIP] = Landmark::new(-0.1, 1.6, 0.0);
    points[MIDDLE_TIP] = Landmark::new(-0.1, 1.75, 0.0);

    points[RING_MCP] = Landmark::new(0.1, 1.0, 0.0);
    points[RING_PIP] = Landmark::new(0.1, 1.3, 0.0);
    points[RING_DIP] = Landmark::new(0.1, 1.5, 0.0);
    points[RING_TIP] = Landmark::new(0.1, 1.65, 0.0);

    points[PINKY_MCP] = Landmark::new(0.3, 1.0, 0.0);
    points[PINKY_PIP] = Landmark::new(0.3, 1.25, 0.0);
    points[PINKY_DIP] = Landmark::new(0.3, 1.4, 0.0);
    points[PINKY_TIP] = Landmark::new(0.3, 1.5, 0.0);

    LandmarkFrame::from_landmarks(&points).unwrap()
}

/// Ring finger bent sideways in the palm plane: 90° at RING_PIP turning
/// toward +x, then 90° at RING_DIP turning back to +y.
pub(crate) fn sideways_ring_hand() -> LandmarkFrame {
    let mut points = *straight_hand().landmarks();
    points[RING_DIP] = Landmark::new(0.3, 1.3, 0.0);
    points[RING_TIP] = Landmark::new(0.3, 1.5, 0.0);
    LandmarkFrame::from_landmarks(&points).unwrap()
}
