use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::frames::{self, Keyframe};
use crate::pose::Pose;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentFrame {
    pub time: f32,
    /// `None` hides the slot's attachment.
    #[serde(default)]
    pub name: Option<String>,
}

impl Keyframe for AttachmentFrame {
    fn time(&self) -> f32 {
        self.time
    }

    fn is_finite(&self) -> bool {
        self.time.is_finite()
    }
}

/// Discrete attachment switches for one slot.
///
/// - Alpha is ignored: attachments are never blended, so any apply or mix
///   call selects the frame's attachment outright.
/// - Before the first frame the slot is left untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttachmentTimeline {
    slot_index: usize,
    frames: Vec<AttachmentFrame>,
}

impl AttachmentTimeline {
    pub fn new(slot_index: usize, frame_count: usize) -> Self {
        Self {
            slot_index,
            frames: vec![AttachmentFrame::default(); frame_count],
        }
    }

    pub fn slot_index(&self) -> usize {
        self.slot_index
    }

    pub fn frames(&self) -> &[AttachmentFrame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn duration(&self) -> f32 {
        frames::last_time(&self.frames)
    }

    pub fn set_frame(&mut self, index: usize, time: f32, name: Option<&str>) -> Result<()> {
        frames::set_frame(
            &mut self.frames,
            index,
            AttachmentFrame {
                time,
                name: name.map(str::to_string),
            },
        )
    }

    pub fn validate(&self) -> Result<()> {
        frames::validate_frames(&self.frames)
    }

    /// Frame active at `time`, or `None` before the first frame.
    pub fn active_frame(&self, time: f32) -> Option<&AttachmentFrame> {
        frames::last_frame_at(&self.frames, time).map(|k| &self.frames[k])
    }

    pub fn apply<P: Pose + ?Sized>(&self, pose: &mut P, time: f32, _alpha: f32) {
        let Some(frame) = self.active_frame(time) else {
            return;
        };
        if self.slot_index >= pose.slot_count() {
            trace!("attachment timeline: slot {} not in pose", self.slot_index);
            return;
        }
        pose.set_attachment(self.slot_index, frame.name.as_deref());
    }
}
