//! Timelines: one animated property of one pose element.
//!
//! [`Timeline`] is the closed set of kinds an [`Animation`](crate::Animation)
//! owns. Each kind can also be applied on its own.

mod attachment;
mod color;
mod rotate;
mod translate;

pub use attachment::{AttachmentFrame, AttachmentTimeline};
pub use color::{ColorFrame, ColorTimeline};
pub use rotate::{RotateFrame, RotateTimeline};
pub use translate::{
    BoneChannel, Scale, ScaleTimeline, TranslateTimeline, Translation, Vec2Frame, Vec2Timeline,
};

use serde::{Deserialize, Serialize};

use crate::curve::{CurveTable, CurveTimeline};
use crate::error::Result;
use crate::frames::{locate, Keyframe, Sample};
use crate::pose::Pose;

/// Pose property written by a timeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "property", content = "index", rename_all = "snake_case")]
pub enum Target {
    BoneRotation(usize),
    BoneTranslation(usize),
    BoneScale(usize),
    SlotColor(usize),
    SlotAttachment(usize),
}

impl Target {
    pub fn bone(&self) -> Option<usize> {
        match *self {
            Target::BoneRotation(i) | Target::BoneTranslation(i) | Target::BoneScale(i) => Some(i),
            Target::SlotColor(_) | Target::SlotAttachment(_) => None,
        }
    }

    pub fn slot(&self) -> Option<usize> {
        match *self {
            Target::SlotColor(i) | Target::SlotAttachment(i) => Some(i),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Timeline {
    Rotate(RotateTimeline),
    Translate(TranslateTimeline),
    Scale(ScaleTimeline),
    Color(ColorTimeline),
    Attachment(AttachmentTimeline),
}

impl Timeline {
    /// Write this timeline's value at `time` into `pose`, blended by `alpha`.
    pub fn apply<P: Pose + ?Sized>(&self, pose: &mut P, time: f32, alpha: f32) {
        match self {
            Timeline::Rotate(t) => t.apply(pose, time, alpha),
            Timeline::Translate(t) => t.apply(pose, time, alpha),
            Timeline::Scale(t) => t.apply(pose, time, alpha),
            Timeline::Color(t) => t.apply(pose, time, alpha),
            Timeline::Attachment(t) => t.apply(pose, time, alpha),
        }
    }

    pub fn target(&self) -> Target {
        match self {
            Timeline::Rotate(t) => Target::BoneRotation(t.bone_index()),
            Timeline::Translate(t) => Target::BoneTranslation(t.bone_index()),
            Timeline::Scale(t) => Target::BoneScale(t.bone_index()),
            Timeline::Color(t) => Target::SlotColor(t.slot_index()),
            Timeline::Attachment(t) => Target::SlotAttachment(t.slot_index()),
        }
    }

    /// Time of the last frame.
    pub fn duration(&self) -> f32 {
        match self {
            Timeline::Rotate(t) => t.duration(),
            Timeline::Translate(t) => t.duration(),
            Timeline::Scale(t) => t.duration(),
            Timeline::Color(t) => t.duration(),
            Timeline::Attachment(t) => t.duration(),
        }
    }

    pub fn frame_count(&self) -> usize {
        match self {
            Timeline::Rotate(t) => t.frame_count(),
            Timeline::Translate(t) => t.frame_count(),
            Timeline::Scale(t) => t.frame_count(),
            Timeline::Color(t) => t.frame_count(),
            Timeline::Attachment(t) => t.frame_count(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Timeline::Rotate(t) => t.validate(),
            Timeline::Translate(t) => t.validate(),
            Timeline::Scale(t) => t.validate(),
            Timeline::Color(t) => t.validate(),
            Timeline::Attachment(t) => t.validate(),
        }
    }

    /// Curve table of interpolated kinds; `None` for attachments.
    pub fn curves(&self) -> Option<&CurveTable> {
        match self {
            Timeline::Rotate(t) => Some(t.curves()),
            Timeline::Translate(t) => Some(t.curves()),
            Timeline::Scale(t) => Some(t.curves()),
            Timeline::Color(t) => Some(t.curves()),
            Timeline::Attachment(_) => None,
        }
    }

    /// Fill curves omitted from stored data with linear segments.
    pub(crate) fn pad_curves(&mut self) {
        let segments = self.frame_count().saturating_sub(1);
        match self {
            Timeline::Rotate(t) => t.curves_mut().pad_to(segments),
            Timeline::Translate(t) => t.curves_mut().pad_to(segments),
            Timeline::Scale(t) => t.curves_mut().pad_to(segments),
            Timeline::Color(t) => t.curves_mut().pad_to(segments),
            Timeline::Attachment(_) => {}
        }
    }
}

impl From<RotateTimeline> for Timeline {
    fn from(t: RotateTimeline) -> Self {
        Timeline::Rotate(t)
    }
}

impl From<TranslateTimeline> for Timeline {
    fn from(t: TranslateTimeline) -> Self {
        Timeline::Translate(t)
    }
}

impl From<ScaleTimeline> for Timeline {
    fn from(t: ScaleTimeline) -> Self {
        Timeline::Scale(t)
    }
}

impl From<ColorTimeline> for Timeline {
    fn from(t: ColorTimeline) -> Self {
        Timeline::Color(t)
    }
}

impl From<AttachmentTimeline> for Timeline {
    fn from(t: AttachmentTimeline) -> Self {
        Timeline::Attachment(t)
    }
}

/// Resolve the eased value at `time` for a curve-bearing frame sequence.
/// `None` only when there are no frames.
pub(crate) fn sample_eased<F, T>(
    frames: &[F],
    curves: &CurveTable,
    time: f32,
    value: impl Fn(&F) -> T,
    lerp: impl Fn(T, T, f32) -> T,
) -> Option<T>
where
    F: Keyframe,
{
    match locate(frames, time)? {
        Sample::Exact(frame) => Some(value(frame)),
        Sample::Between {
            from,
            to,
            segment,
            percent,
        } => Some(lerp(value(from), value(to), curves.percent(segment, percent))),
    }
}
