//! Bone position and scale timelines. Both store (time, x, y) frames and
//! interpolate each axis independently; a [`BoneChannel`] picks the pose
//! fields they write.

use std::marker::PhantomData;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::curve::{CurveTable, CurveTimeline};
use crate::error::Result;
use crate::frames::{self, Keyframe};
use crate::interp::{lerp_vec2, mix_vec2};
use crate::pose::{BonePose, Pose};

use super::sample_eased;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2Frame {
    pub time: f32,
    pub x: f32,
    pub y: f32,
}

impl Vec2Frame {
    #[inline]
    fn xy(&self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl Keyframe for Vec2Frame {
    fn time(&self) -> f32 {
        self.time
    }

    fn is_finite(&self) -> bool {
        self.time.is_finite() && self.x.is_finite() && self.y.is_finite()
    }
}

/// Pose fields a [`Vec2Timeline`] writes.
pub trait BoneChannel {
    const NAME: &'static str;
    fn read(bone: &BonePose) -> [f32; 2];
    fn write(bone: &mut BonePose, value: [f32; 2]);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Translation;

impl BoneChannel for Translation {
    const NAME: &'static str = "translate";

    fn read(bone: &BonePose) -> [f32; 2] {
        [bone.x, bone.y]
    }

    fn write(bone: &mut BonePose, [x, y]: [f32; 2]) {
        bone.x = x;
        bone.y = y;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scale;

impl BoneChannel for Scale {
    const NAME: &'static str = "scale";

    fn read(bone: &BonePose) -> [f32; 2] {
        [bone.scale_x, bone.scale_y]
    }

    fn write(bone: &mut BonePose, [x, y]: [f32; 2]) {
        bone.scale_x = x;
        bone.scale_y = y;
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Vec2Timeline<C> {
    bone_index: usize,
    frames: Vec<Vec2Frame>,
    #[serde(default)]
    curves: CurveTable,
    #[serde(skip)]
    channel: PhantomData<C>,
}

pub type TranslateTimeline = Vec2Timeline<Translation>;
pub type ScaleTimeline = Vec2Timeline<Scale>;

impl<C: BoneChannel> Vec2Timeline<C> {
    pub fn new(bone_index: usize, frame_count: usize) -> Self {
        Self::with_config(bone_index, frame_count, &Config::default())
    }

    pub fn with_config(bone_index: usize, frame_count: usize, cfg: &Config) -> Self {
        Self {
            bone_index,
            frames: vec![Vec2Frame::default(); frame_count],
            curves: CurveTable::new(frame_count, cfg),
            channel: PhantomData,
        }
    }

    pub fn bone_index(&self) -> usize {
        self.bone_index
    }

    pub fn frames(&self) -> &[Vec2Frame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn duration(&self) -> f32 {
        frames::last_time(&self.frames)
    }

    pub fn set_frame(&mut self, index: usize, time: f32, x: f32, y: f32) -> Result<()> {
        frames::set_frame(&mut self.frames, index, Vec2Frame { time, x, y })
    }

    pub fn validate(&self) -> Result<()> {
        frames::validate_frames(&self.frames)?;
        self.curves.validate(self.frames.len())
    }

    pub fn sample(&self, time: f32) -> Option<[f32; 2]> {
        sample_eased(&self.frames, &self.curves, time, Vec2Frame::xy, lerp_vec2)
    }

    pub fn apply<P: Pose + ?Sized>(&self, pose: &mut P, time: f32, alpha: f32) {
        let Some(target) = self.sample(time) else {
            return;
        };
        match pose.bone_mut(self.bone_index) {
            Some(bone) => {
                let mixed = mix_vec2(C::read(bone), target, alpha);
                C::write(bone, mixed);
            }
            None => trace!("{} timeline: bone {} not in pose", C::NAME, self.bone_index),
        }
    }
}

impl<C> CurveTimeline for Vec2Timeline<C> {
    fn curves(&self) -> &CurveTable {
        &self.curves
    }

    fn curves_mut(&mut self) -> &mut CurveTable {
        &mut self.curves
    }
}
