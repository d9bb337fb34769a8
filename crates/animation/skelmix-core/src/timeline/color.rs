use log::trace;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::curve::{CurveTable, CurveTimeline};
use crate::error::Result;
use crate::frames::{self, Keyframe};
use crate::interp::{lerp_vec4, mix_vec4};
use crate::pose::Pose;

use super::sample_eased;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorFrame {
    pub time: f32,
    /// RGBA
    pub color: [f32; 4],
}

impl Keyframe for ColorFrame {
    fn time(&self) -> f32 {
        self.time
    }

    fn is_finite(&self) -> bool {
        self.time.is_finite() && self.color.iter().all(|c| c.is_finite())
    }
}

/// Slot tint; each channel interpolates independently.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorTimeline {
    slot_index: usize,
    frames: Vec<ColorFrame>,
    #[serde(default)]
    curves: CurveTable,
}

impl ColorTimeline {
    pub fn new(slot_index: usize, frame_count: usize) -> Self {
        Self::with_config(slot_index, frame_count, &Config::default())
    }

    pub fn with_config(slot_index: usize, frame_count: usize, cfg: &Config) -> Self {
        Self {
            slot_index,
            frames: vec![ColorFrame::default(); frame_count],
            curves: CurveTable::new(frame_count, cfg),
        }
    }

    pub fn slot_index(&self) -> usize {
        self.slot_index
    }

    pub fn frames(&self) -> &[ColorFrame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn duration(&self) -> f32 {
        frames::last_time(&self.frames)
    }

    pub fn set_frame(&mut self, index: usize, time: f32, r: f32, g: f32, b: f32, a: f32) -> Result<()> {
        frames::set_frame(
            &mut self.frames,
            index,
            ColorFrame {
                time,
                color: [r, g, b, a],
            },
        )
    }

    pub fn validate(&self) -> Result<()> {
        frames::validate_frames(&self.frames)?;
        self.curves.validate(self.frames.len())
    }

    pub fn sample(&self, time: f32) -> Option<[f32; 4]> {
        sample_eased(&self.frames, &self.curves, time, |f| f.color, lerp_vec4)
    }

    pub fn apply<P: Pose + ?Sized>(&self, pose: &mut P, time: f32, alpha: f32) {
        let Some(target) = self.sample(time) else {
            return;
        };
        match pose.slot_color_mut(self.slot_index) {
            Some(color) => *color = mix_vec4(*color, target, alpha),
            None => trace!("color timeline: slot {} not in pose", self.slot_index),
        }
    }
}

impl CurveTimeline for ColorTimeline {
    fn curves(&self) -> &CurveTable {
        &self.curves
    }

    fn curves_mut(&mut self) -> &mut CurveTable {
        &mut self.curves
    }
}
