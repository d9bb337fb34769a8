//! JSON storage form of [`Animation`].
//!
//! Notes:
//! - `duration` is optional; when absent it is derived from the timelines.
//! - Interpolated timelines may omit `curves` (or list fewer than
//!   frame_count - 1); missing segments default to linear.
//! - Bezier curves are stored as control points and recomputed on load.
//! - The result is fully validated before it is returned.

use log::debug;
use serde::Deserialize;

use crate::animation::Animation;
use crate::error::{AnimationError, Result};
use crate::timeline::Timeline;

#[derive(Deserialize)]
struct StoredAnimation {
    name: String,
    #[serde(default)]
    duration: Option<f32>,
    timelines: Vec<Timeline>,
}

/// Parse and validate an animation from its JSON storage form.
pub fn parse_animation_json(s: &str) -> Result<Animation> {
    let stored: StoredAnimation =
        serde_json::from_str(s).map_err(|e| AnimationError::Parse(e.to_string()))?;

    let mut timelines = stored.timelines;
    for timeline in &mut timelines {
        timeline.pad_curves();
    }

    let mut anim = Animation::with_timelines(&stored.name, timelines)?;
    if let Some(duration) = stored.duration {
        anim.set_duration(duration)?;
    }
    anim.validate()?;
    debug!(
        "loaded animation '{}' ({} timelines)",
        anim.name,
        anim.timelines().len()
    );
    Ok(anim)
}

impl Animation {
    /// Serialize to the storage form read by [`parse_animation_json`].
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| AnimationError::Serialize(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{Curve, CurveTimeline};
    use crate::timeline::RotateTimeline;

    #[test]
    fn missing_curves_default_to_linear() {
        let json = r#"{
            "name": "spin",
            "timelines": [
                { "type": "rotate", "bone_index": 0,
                  "frames": [ { "time": 0.0, "angle": 0.0 },
                              { "time": 1.0, "angle": 90.0 },
                              { "time": 2.0, "angle": 0.0 } ] }
            ]
        }"#;
        let anim = parse_animation_json(json).expect("parse");
        assert_eq!(anim.duration(), 2.0);
        let curves = anim.timelines()[0].curves().expect("rotate has curves");
        assert_eq!(curves.len(), 2);
        assert!(curves.iter().all(|c| *c == Curve::Linear));
    }

    #[test]
    fn explicit_duration_wins() {
        let json = r#"{
            "name": "idle", "duration": 4.0,
            "timelines": [
                { "type": "attachment", "slot_index": 0,
                  "frames": [ { "time": 0.0, "name": "eyes" }, { "time": 3.0 } ] }
            ]
        }"#;
        let anim = parse_animation_json(json).expect("parse");
        assert_eq!(anim.duration(), 4.0);
    }

    #[test]
    fn rejects_unordered_frames() {
        let json = r#"{
            "name": "bad",
            "timelines": [
                { "type": "translate", "bone_index": 0,
                  "frames": [ { "time": 1.0, "x": 0.0, "y": 0.0 },
                              { "time": 0.5, "x": 1.0, "y": 1.0 } ] }
            ]
        }"#;
        assert!(matches!(
            parse_animation_json(json),
            Err(AnimationError::NonMonotonicTime { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_too_many_curves() {
        let json = r#"{
            "name": "bad",
            "timelines": [
                { "type": "scale", "bone_index": 0,
                  "frames": [ { "time": 0.0, "x": 1.0, "y": 1.0 } ],
                  "curves": [ { "type": "stepped" } ] }
            ]
        }"#;
        assert_eq!(
            parse_animation_json(json),
            Err(AnimationError::CurveCountMismatch {
                found: 1,
                expected: 0
            })
        );
    }

    #[test]
    fn rejects_invalid_bezier() {
        let json = r#"{
            "name": "bad",
            "timelines": [
                { "type": "rotate", "bone_index": 0,
                  "frames": [ { "time": 0.0, "angle": 0.0 }, { "time": 1.0, "angle": 1.0 } ],
                  "curves": [ { "type": "bezier", "cx1": 1.5, "cy1": 0.0, "cx2": 0.5, "cy2": 1.0 } ] }
            ]
        }"#;
        match parse_animation_json(json) {
            Err(AnimationError::Parse(msg)) => {
                assert!(msg.contains("bezier control point (1.5, 0)"), "{msg}")
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_oversized_bezier_subdivisions() {
        let json = r#"{
            "name": "slow",
            "timelines": [
                { "type": "rotate", "bone_index": 0,
                  "frames": [ { "time": 0.0, "angle": 0.0 }, { "time": 1.0, "angle": 1.0 } ],
                  "curves": [ { "type": "bezier", "cx1": 0.4, "cy1": 0.0, "cx2": 0.6, "cy2": 1.0,
                                "segments": 4000000000 } ] }
            ]
        }"#;
        match parse_animation_json(json) {
            Err(AnimationError::Parse(msg)) => assert!(msg.contains("bezier_segments"), "{msg}"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn round_trips_through_json() {
        let mut r = RotateTimeline::new(0, 3);
        r.set_frame(0, 0.0, 0.0).unwrap();
        r.set_frame(1, 0.5, 45.0).unwrap();
        r.set_frame(2, 1.0, 90.0).unwrap();
        r.set_curve(0, 0.25, 0.1, 0.75, 0.9).unwrap();
        r.set_stepped(1).unwrap();
        let anim = Animation::with_timelines("r", vec![r.into()]).unwrap();

        let json = anim.to_json().expect("serialize");
        let back = parse_animation_json(&json).expect("parse back");
        assert_eq!(back, anim);
    }
}
