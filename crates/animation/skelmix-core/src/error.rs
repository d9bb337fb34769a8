//! Error type shared by authoring, validation and loading.
//!
//! Playback (`apply`/`mix`) never returns errors; everything here is raised
//! while building or loading animations.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
    #[error("frame index {index} out of range for timeline with {len} frames")]
    FrameIndexOutOfRange { index: usize, len: usize },
    #[error("segment index {index} out of range for timeline with {len} segments")]
    SegmentIndexOutOfRange { index: usize, len: usize },
    #[error("frame {index} at time {time} precedes previous frame at time {previous}")]
    NonMonotonicTime {
        index: usize,
        time: f32,
        previous: f32,
    },
    #[error("frame {index} contains a non-finite component")]
    NonFinite { index: usize },
    #[error("bezier control point ({x}, {y}) is invalid: x must lie in [0,1] and both must be finite")]
    InvalidControlPoint { x: f32, y: f32 },
    #[error("timeline has no frames")]
    EmptyTimeline,
    #[error("curve table has {found} segments, expected {expected}")]
    CurveCountMismatch { found: usize, expected: usize },
    #[error("bone index {index} out of range for pose with {count} bones")]
    BoneOutOfRange { index: usize, count: usize },
    #[error("slot index {index} out of range for pose with {count} slots")]
    SlotOutOfRange { index: usize, count: usize },
    #[error("animation duration must be finite and non-negative, got {0}")]
    InvalidDuration(f32),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("animation json parse error: {0}")]
    Parse(String),
    #[error("animation json serialize error: {0}")]
    Serialize(String),
}

pub type Result<T, E = AnimationError> = std::result::Result<T, E>;
