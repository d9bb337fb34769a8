//! Keyframe storage and lookup shared by every timeline kind.

use crate::error::{AnimationError, Result};

/// A keyframe sample. Frames are stored in ascending time order.
pub trait Keyframe {
    fn time(&self) -> f32;

    /// Whether every component (time included) is finite.
    fn is_finite(&self) -> bool;
}

/// Result of locating a playback time within a frame sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample<'a, F> {
    /// Time falls before the first frame, on a frame boundary with no
    /// successor, or after the last frame. The value is the frame's own.
    Exact(&'a F),
    /// Time falls strictly inside segment `segment`; `percent` is the
    /// elapsed time fraction in [0, 1), not yet eased.
    Between {
        from: &'a F,
        to: &'a F,
        segment: usize,
        percent: f32,
    },
}

/// Index of the last frame whose time is <= `time`, or `None` when `time`
/// precedes the first frame.
#[inline]
pub fn last_frame_at<F: Keyframe>(frames: &[F], time: f32) -> Option<usize> {
    frames.partition_point(|f| f.time() <= time).checked_sub(1)
}

/// Find the frame pair bracketing `time`.
/// Edge cases:
/// - Empty: `None`.
/// - Before the first frame: `Exact(first)`.
/// - At or after the last frame: `Exact(last)`.
pub fn locate<F: Keyframe>(frames: &[F], time: f32) -> Option<Sample<'_, F>> {
    let first = frames.first()?;
    let k = match last_frame_at(frames, time) {
        Some(k) => k,
        None => return Some(Sample::Exact(first)),
    };
    let from = &frames[k];
    let to = match frames.get(k + 1) {
        Some(to) => to,
        None => return Some(Sample::Exact(from)),
    };
    let span = (to.time() - from.time()).max(f32::EPSILON);
    let percent = ((time - from.time()) / span).clamp(0.0, 1.0);
    Some(Sample::Between {
        from,
        to,
        segment: k,
        percent,
    })
}

/// Bounds- and order-checked write of frame `index`. Authoring is expected
/// to proceed in increasing index order, so only the predecessor is checked
/// here; [`validate_frames`] checks the whole sequence.
pub(crate) fn set_frame<F: Keyframe>(frames: &mut [F], index: usize, frame: F) -> Result<()> {
    let len = frames.len();
    if index >= len {
        return Err(AnimationError::FrameIndexOutOfRange { index, len });
    }
    if !frame.is_finite() {
        return Err(AnimationError::NonFinite { index });
    }
    if let Some(prev) = index.checked_sub(1).map(|i| &frames[i]) {
        if frame.time() < prev.time() {
            return Err(AnimationError::NonMonotonicTime {
                index,
                time: frame.time(),
                previous: prev.time(),
            });
        }
    }
    frames[index] = frame;
    Ok(())
}

/// Check that a frame sequence is non-empty, finite and non-decreasing in time.
pub(crate) fn validate_frames<F: Keyframe>(frames: &[F]) -> Result<()> {
    if frames.is_empty() {
        return Err(AnimationError::EmptyTimeline);
    }
    let mut previous = f32::NEG_INFINITY;
    for (index, frame) in frames.iter().enumerate() {
        if !frame.is_finite() {
            return Err(AnimationError::NonFinite { index });
        }
        if frame.time() < previous {
            return Err(AnimationError::NonMonotonicTime {
                index,
                time: frame.time(),
                previous,
            });
        }
        previous = frame.time();
    }
    Ok(())
}

/// Time of the last frame, or zero for an empty sequence.
#[inline]
pub(crate) fn last_time<F: Keyframe>(frames: &[F]) -> f32 {
    frames.last().map(Keyframe::time).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    struct F(f32);

    impl Keyframe for F {
        fn time(&self) -> f32 {
            self.0
        }
        fn is_finite(&self) -> bool {
            self.0.is_finite()
        }
    }

    #[test]
    fn locate_edges() {
        let frames = [F(0.0), F(1.0), F(3.0)];
        assert_eq!(locate(&frames, -1.0), Some(Sample::Exact(&frames[0])));
        assert_eq!(locate(&frames, 3.0), Some(Sample::Exact(&frames[2])));
        assert_eq!(locate(&frames, 9.0), Some(Sample::Exact(&frames[2])));
        assert_eq!(locate::<F>(&[], 0.5), None);
    }

    #[test]
    fn locate_inside_segment() {
        let frames = [F(0.0), F(1.0), F(3.0)];
        match locate(&frames, 2.0) {
            Some(Sample::Between {
                segment, percent, ..
            }) => {
                assert_eq!(segment, 1);
                assert!((percent - 0.5).abs() < 1e-6);
            }
            other => panic!("unexpected {other:?}"),
        }
        // Exactly on an interior frame starts the next segment at zero.
        match locate(&frames, 1.0) {
            Some(Sample::Between {
                segment, percent, ..
            }) => {
                assert_eq!(segment, 1);
                assert_eq!(percent, 0.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn duplicate_times_pick_later_frame() {
        let frames = [F(0.0), F(1.0), F(1.0), F(2.0)];
        assert_eq!(last_frame_at(&frames, 1.0), Some(2));
        assert_eq!(last_frame_at(&frames, -0.1), None);
    }

    #[test]
    fn set_frame_checks_bounds_and_order() {
        let mut frames = vec![F::default(); 2];
        assert!(set_frame(&mut frames, 0, F(0.5)).is_ok());
        assert_eq!(
            set_frame(&mut frames, 1, F(0.25)),
            Err(AnimationError::NonMonotonicTime {
                index: 1,
                time: 0.25,
                previous: 0.5
            })
        );
        assert_eq!(
            set_frame(&mut frames, 2, F(1.0)),
            Err(AnimationError::FrameIndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            set_frame(&mut frames, 1, F(f32::INFINITY)),
            Err(AnimationError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn validate_rejects_empty_and_unordered() {
        assert_eq!(validate_frames::<F>(&[]), Err(AnimationError::EmptyTimeline));
        assert!(validate_frames(&[F(0.0), F(0.0), F(1.0)]).is_ok());
        assert!(matches!(
            validate_frames(&[F(0.0), F(2.0), F(1.0)]),
            Err(AnimationError::NonMonotonicTime { index: 2, .. })
        ));
    }
}
