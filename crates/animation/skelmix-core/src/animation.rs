//! Animation: an owned, ordered set of timelines plus a loop duration.
//!
//! Methods:
//! - new / with_timelines / add_timeline / set_duration (authoring)
//! - apply (full overwrite) and mix (weighted blend) (playback)
//! - validate / check_targets / overlapping_targets (diagnostics)

use std::collections::HashSet;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{AnimationError, Result};
use crate::pose::Pose;
use crate::timeline::{Target, Timeline};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub name: String,
    /// Seconds; loop period used by `apply`/`mix` when looping.
    duration: f32,
    timelines: Vec<Timeline>,
}

/// Wrap `time` into [0, period). Negative times wrap from the end.
fn wrap_time(time: f32, period: f32) -> f32 {
    let m = time.rem_euclid(period);
    // rem_euclid can round up to exactly `period` for tiny negative inputs.
    if m >= period {
        0.0
    } else {
        m
    }
}

impl Animation {
    /// Empty animation with zero duration.
    pub fn new(name: &str) -> Self {
        Self::with_capacity(name, 0)
    }

    /// Empty animation with room for `timeline_count` timelines.
    pub fn with_capacity(name: &str, timeline_count: usize) -> Self {
        Self {
            name: name.to_string(),
            duration: 0.0,
            timelines: Vec::with_capacity(timeline_count),
        }
    }

    /// Build from validated timelines; duration is the latest last-frame time.
    pub fn with_timelines(name: &str, timelines: Vec<Timeline>) -> Result<Self> {
        for timeline in &timelines {
            timeline.validate()?;
        }
        let mut anim = Self {
            name: name.to_string(),
            duration: 0.0,
            timelines,
        };
        anim.duration = anim.timelines_duration();
        debug!(
            "animation '{}': {} timelines, duration {}s",
            anim.name,
            anim.timelines.len(),
            anim.duration
        );
        Ok(anim)
    }

    /// Validate and append a timeline. Duration is left as is.
    pub fn add_timeline(&mut self, timeline: impl Into<Timeline>) -> Result<()> {
        let timeline = timeline.into();
        timeline.validate()?;
        self.timelines.push(timeline);
        Ok(())
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn set_duration(&mut self, duration: f32) -> Result<()> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(AnimationError::InvalidDuration(duration));
        }
        self.duration = duration;
        Ok(())
    }

    /// Latest last-frame time across all timelines.
    pub fn timelines_duration(&self) -> f32 {
        self.timelines
            .iter()
            .map(Timeline::duration)
            .fold(0.0, f32::max)
    }

    pub fn timelines(&self) -> &[Timeline] {
        &self.timelines
    }

    /// Overwrite every animated property with its value at `time`.
    pub fn apply<P: Pose + ?Sized>(&self, pose: &mut P, time: f32, looping: bool) {
        self.mix(pose, time, looping, 1.0);
    }

    /// Blend every animated property toward its value at `time` by `alpha`.
    /// Timelines run in stored order, so a later timeline on the same
    /// property wins.
    pub fn mix<P: Pose + ?Sized>(&self, pose: &mut P, time: f32, looping: bool, alpha: f32) {
        let time = self.playback_time(time, looping);
        for timeline in &self.timelines {
            timeline.apply(pose, time, alpha);
        }
    }

    /// Time handed to timelines for a given clock time.
    pub fn playback_time(&self, time: f32, looping: bool) -> f32 {
        if looping && self.duration > 0.0 {
            wrap_time(time, self.duration)
        } else {
            time
        }
    }

    /// Targets written by more than one timeline, in first-seen order.
    pub fn overlapping_targets(&self) -> Vec<Target> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut out = Vec::new();
        for target in self.timelines.iter().map(Timeline::target) {
            if !seen.insert(target) && reported.insert(target) {
                out.push(target);
            }
        }
        out
    }

    /// Check the duration and every timeline. Overlapping targets are allowed
    /// (last write wins) but logged.
    pub fn validate(&self) -> Result<()> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(AnimationError::InvalidDuration(self.duration));
        }
        for timeline in &self.timelines {
            timeline.validate()?;
        }
        for target in self.overlapping_targets() {
            warn!(
                "animation '{}': multiple timelines target {:?}; last one wins",
                self.name, target
            );
        }
        Ok(())
    }

    /// Ensure every timeline target exists in `pose`.
    pub fn check_targets<P: Pose + ?Sized>(&self, pose: &P) -> Result<()> {
        let bones = pose.bone_count();
        let slots = pose.slot_count();
        for target in self.timelines.iter().map(Timeline::target) {
            if let Some(index) = target.bone() {
                if index >= bones {
                    return Err(AnimationError::BoneOutOfRange {
                        index,
                        count: bones,
                    });
                }
            }
            if let Some(index) = target.slot() {
                if index >= slots {
                    return Err(AnimationError::SlotOutOfRange {
                        index,
                        count: slots,
                    });
                }
            }
        }
        Ok(())
    }
}
