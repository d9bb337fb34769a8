//! Pose contract that timelines write into, plus a plain [`Skeleton`]
//! implementation for hosts that do not bring their own.
//!
//! Indices are 0-based and stable for the lifetime of a pose. World
//! transforms and hierarchy propagation are the host's concern.

use serde::{Deserialize, Serialize};

/// Local transform state of one bone.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BonePose {
    /// Rotation in degrees.
    pub rotation: f32,
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Default for BonePose {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            x: 0.0,
            y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

/// Mutable pose accessors used during playback.
///
/// Accessors return `None` for indices the pose does not have; timelines
/// skip such targets.
pub trait Pose {
    fn bone_count(&self) -> usize;
    fn slot_count(&self) -> usize;
    fn bone_mut(&mut self, index: usize) -> Option<&mut BonePose>;
    /// RGBA, components typically in [0, 1].
    fn slot_color_mut(&mut self, index: usize) -> Option<&mut [f32; 4]>;
    /// Select the slot's visible attachment by name; `None` hides it.
    fn set_attachment(&mut self, slot: usize, name: Option<&str>);
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bone {
    pub name: String,
    #[serde(default)]
    pub pose: BonePose,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(default = "white")]
    pub color: [f32; 4],
    #[serde(default)]
    pub attachment: Option<String>,
}

fn white() -> [f32; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

/// Flat bones + slots pose.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Skeleton {
    pub bones: Vec<Bone>,
    pub slots: Vec<Slot>,
}

impl Skeleton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bone at identity and return its index.
    pub fn add_bone(&mut self, name: &str) -> usize {
        self.bones.push(Bone {
            name: name.to_string(),
            pose: BonePose::default(),
        });
        self.bones.len() - 1
    }

    /// Append a white slot with no attachment and return its index.
    pub fn add_slot(&mut self, name: &str) -> usize {
        self.slots.push(Slot {
            name: name.to_string(),
            color: white(),
            attachment: None,
        });
        self.slots.len() - 1
    }

    pub fn find_bone(&self, name: &str) -> Option<usize> {
        self.bones.iter().position(|b| b.name == name)
    }

    pub fn find_slot(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.name == name)
    }

    pub fn bone(&self, index: usize) -> Option<&BonePose> {
        self.bones.get(index).map(|b| &b.pose)
    }

    pub fn slot_color(&self, index: usize) -> Option<[f32; 4]> {
        self.slots.get(index).map(|s| s.color)
    }

    pub fn attachment(&self, slot: usize) -> Option<&str> {
        self.slots.get(slot).and_then(|s| s.attachment.as_deref())
    }
}

impl Pose for Skeleton {
    fn bone_count(&self) -> usize {
        self.bones.len()
    }

    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn bone_mut(&mut self, index: usize) -> Option<&mut BonePose> {
        self.bones.get_mut(index).map(|b| &mut b.pose)
    }

    fn slot_color_mut(&mut self, index: usize) -> Option<&mut [f32; 4]> {
        self.slots.get_mut(index).map(|s| &mut s.color)
    }

    fn set_attachment(&mut self, slot: usize, name: Option<&str>) {
        if let Some(s) = self.slots.get_mut(slot) {
            if s.attachment.as_deref() != name {
                s.attachment = name.map(str::to_string);
            }
        }
    }
}
