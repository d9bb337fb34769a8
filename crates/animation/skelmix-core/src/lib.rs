//! skelmix core: keyframe timeline evaluation for 2D skeleton poses.
//!
//! An [`Animation`] owns a set of [`Timeline`]s. Each timeline animates one
//! property (bone rotation, translation or scale, slot color, slot
//! attachment) and writes it into a host [`Pose`], either overwriting the
//! current value (`apply`) or blending toward it by a weight (`mix`).
//! Playback never mutates animations, so one animation can drive many poses
//! from many threads at once.

pub mod animation;
pub mod config;
pub mod curve;
pub mod error;
pub mod frames;
pub mod interp;
pub mod pose;
pub mod stored_animation;
pub mod timeline;

// Re-exports for consumers (hosts)
pub use animation::Animation;
pub use config::Config;
pub use curve::{BezierCurve, Curve, CurveTable, CurveTimeline};
pub use error::{AnimationError, Result};
pub use pose::{Bone, BonePose, Pose, Skeleton, Slot};
pub use stored_animation::parse_animation_json;
pub use timeline::{
    AttachmentFrame, AttachmentTimeline, BoneChannel, ColorFrame, ColorTimeline, RotateFrame,
    RotateTimeline, Scale, ScaleTimeline, Target, Timeline, TranslateTimeline, Translation,
    Vec2Frame, Vec2Timeline,
};
