//! Geometry errors

use thiserror::Error;

/// Measurements that cannot be taken on the given points
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A direction vector has zero length (coincident landmarks)
    #[error("Zero-length vector")]
    DegenerateVector,

    /// The wrist to middle-MCP reference length is zero
    #[error("Zero-length hand reference (wrist to middle MCP)")]
    DegenerateReference,

    #[error("Landmark index {0} out of range")]
    IndexOutOfRange(usize),
}
