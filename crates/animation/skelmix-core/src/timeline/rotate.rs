use log::trace;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::curve::{CurveTable, CurveTimeline};
use crate::error::Result;
use crate::frames::{self, Keyframe};
use crate::interp::{lerp_degrees, mix_degrees};
use crate::pose::Pose;

use super::sample_eased;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RotateFrame {
    pub time: f32,
    /// Degrees.
    pub angle: f32,
}

impl Keyframe for RotateFrame {
    fn time(&self) -> f32 {
        self.time
    }

    fn is_finite(&self) -> bool {
        self.time.is_finite() && self.angle.is_finite()
    }
}

/// Bone rotation in degrees. Segments always interpolate along the shorter
/// arc, so 350° -> 10° passes through 0° rather than 180°.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotateTimeline {
    bone_index: usize,
    frames: Vec<RotateFrame>,
    #[serde(default)]
    curves: CurveTable,
}

impl RotateTimeline {
    pub fn new(bone_index: usize, frame_count: usize) -> Self {
        Self::with_config(bone_index, frame_count, &Config::default())
    }

    pub fn with_config(bone_index: usize, frame_count: usize, cfg: &Config) -> Self {
        Self {
            bone_index,
            frames: vec![RotateFrame::default(); frame_count],
            curves: CurveTable::new(frame_count, cfg),
        }
    }

    pub fn bone_index(&self) -> usize {
        self.bone_index
    }

    pub fn frames(&self) -> &[RotateFrame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn duration(&self) -> f32 {
        frames::last_time(&self.frames)
    }

    pub fn set_frame(&mut self, index: usize, time: f32, angle: f32) -> Result<()> {
        frames::set_frame(&mut self.frames, index, RotateFrame { time, angle })
    }

    pub fn validate(&self) -> Result<()> {
        frames::validate_frames(&self.frames)?;
        self.curves.validate(self.frames.len())
    }

    /// Eased angle at `time`; `None` when the timeline has no frames.
    pub fn sample(&self, time: f32) -> Option<f32> {
        sample_eased(&self.frames, &self.curves, time, |f| f.angle, lerp_degrees)
    }

    pub fn apply<P: Pose + ?Sized>(&self, pose: &mut P, time: f32, alpha: f32) {
        let Some(angle) = self.sample(time) else {
            return;
        };
        match pose.bone_mut(self.bone_index) {
            Some(bone) => bone.rotation = mix_degrees(bone.rotation, angle, alpha),
            None => trace!("rotate timeline: bone {} not in pose", self.bone_index),
        }
    }
}

impl CurveTimeline for RotateTimeline {
    fn curves(&self) -> &CurveTable {
        &self.curves
    }

    fn curves_mut(&mut self) -> &mut CurveTable {
        &mut self.curves
    }
}
