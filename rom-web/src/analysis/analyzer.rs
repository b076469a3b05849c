//! Frame analyzer
//!
//! Turns one landmark frame into an `AnalysisResult`: signed MCP/PIP/DIP
//! angles and normalized tip distance for the ring and pinky fingers, plus
//! each finger's JOA.
//!
//! Joint triples are kept exactly as the existing dashboards expect them,
//! including the DIP triple that repeats the tip landmark. That triple
//! always has a zero-length distal vector, so DIP comes out `None`.

use chrono::{DateTime, SubsecRound, Utc};
use tracing::debug;

use super::metrics::{AnalysisResult, JointMetrics};
use crate::config::RomConfig;
use crate::geometry::{normalized_tip_distance, palm_normal, signed_angle, GeometryError, Vec3};
use crate::hand::{
    LandmarkFrame, PINKY_DIP, PINKY_MCP, PINKY_PIP, PINKY_TIP, RING_DIP, RING_MCP, RING_PIP, RING_TIP,
};

/// Landmark triples (p0, vertex, p2) and tip index for one finger
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FingerChain {
    pub name: &'static str,
    pub mcp: [usize; 3],
    pub pip: [usize; 3],
    pub dip: [usize; 3],
    pub tip: usize,
}

pub const RING_CHAIN: FingerChain = FingerChain {
    name: "ring",
    mcp: [RING_MCP, RING_PIP, RING_DIP],
    pip: [RING_PIP, RING_DIP, RING_TIP],
    dip: [RING_DIP, RING_TIP, RING_TIP],
    tip: RING_TIP,
};

pub const PINKY_CHAIN: FingerChain = FingerChain {
    name: "pinky",
    mcp: [PINKY_MCP, PINKY_PIP, PINKY_DIP],
    pip: [PINKY_PIP, PINKY_DIP, PINKY_TIP],
    dip: [PINKY_DIP, PINKY_TIP, PINKY_TIP],
    tip: PINKY_TIP,
};

/// Measure one finger against the palm normal
///
/// Degenerate measurements are recorded as `None`.
pub fn measure_finger(frame: &LandmarkFrame, chain: &FingerChain, normal: &Vec3) -> JointMetrics {
    let angle = |joint: &'static str, [a, b, c]: [usize; 3]| {
        signed_angle(&frame[a].point(), &frame[b].point(), &frame[c].point(), normal)
            .map_err(|err| report(chain.name, joint, err))
            .ok()
    };

    JointMetrics {
        mcp: angle("MCP", chain.mcp),
        pip: angle("PIP", chain.pip),
        dip: angle("DIP", chain.dip),
        tip_dist: normalized_tip_distance(frame, chain.tip)
            .map_err(|err| report(chain.name, "tipDist", err))
            .ok(),
    }
}

fn report(finger: &str, measurement: &str, err: GeometryError) {
    debug!(finger, measurement, %err, "measurement skipped");
}

/// Stamps results with the configured ROM / version pair
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameAnalyzer {
    rom_id: String,
    version: String,
}

impl FrameAnalyzer {
    pub fn new(rom_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            rom_id: rom_id.into(),
            version: version.into(),
        }
    }

    pub fn from_config(config: &RomConfig) -> Self {
        Self::new(config.rom_id.clone(), config.version.clone())
    }

    pub fn rom_id(&self) -> &str {
        &self.rom_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn set_rom_id(&mut self, rom_id: impl Into<String>) {
        self.rom_id = rom_id.into();
    }

    /// Analyze the given frame, stamped with the current time
    ///
    /// Returns `None` only when there is no frame.
    pub fn analyze_frame(&self, frame: Option<&LandmarkFrame>) -> Option<AnalysisResult> {
        self.analyze_frame_at(frame, Utc::now())
    }

    /// Same as `analyze_frame` with an explicit timestamp
    pub fn analyze_frame_at(&self, frame: Option<&LandmarkFrame>, at: DateTime<Utc>) -> Option<AnalysisResult> {
        let frame = frame?;
        let normal = palm_normal(frame);

        let ring = measure_finger(frame, &RING_CHAIN, &normal);
        let pinky = measure_finger(frame, &PINKY_CHAIN, &normal);

        Some(AnalysisResult {
            timestamp: at.trunc_subsecs(3),
            rom: self.rom_id.clone(),
            version: self.version.clone(),
            joa_ring: ring.joa(),
            joa_pinky: pinky.joa(),
            ring,
            pinky,
        })
    }
}
