//! Per-segment easing curves.
//!
//! Each interpolated timeline owns a [`CurveTable`] with one [`Curve`] per
//! segment (frame `i` to frame `i + 1`). Bezier segments are precomputed into
//! forward-difference coefficients at authoring time so evaluation walks a
//! handful of additions instead of solving the cubic.

use serde::{Deserialize, Serialize};

use crate::config::{Config, DEFAULT_BEZIER_SEGMENTS};
use crate::error::{AnimationError, Result};

/// Easing rule for one segment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Curve {
    #[default]
    Linear,
    /// Hold the starting frame's value until the next frame is reached.
    Stepped,
    Bezier(BezierCurve),
}

impl Curve {
    /// Map elapsed-time fraction to elapsed-value fraction. `percent` is
    /// clamped to [0, 1] first.
    pub fn percent(&self, percent: f32) -> f32 {
        let percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 1.0)
        };
        match self {
            Curve::Linear => percent,
            Curve::Stepped => {
                if percent >= 1.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Curve::Bezier(bezier) => bezier.percent(percent),
        }
    }
}

/// Serialized shape of a bezier segment: the two control points and an
/// optional subdivision count.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawBezier {
    cx1: f32,
    cy1: f32,
    cx2: f32,
    cy2: f32,
    #[serde(default = "default_segments")]
    segments: usize,
}

fn default_segments() -> usize {
    DEFAULT_BEZIER_SEGMENTS
}

/// Cubic bezier easing from (0,0) to (1,1) with control points
/// (cx1, cy1) and (cx2, cy2), sampled at `segments` uniform steps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBezier", into = "RawBezier")]
pub struct BezierCurve {
    control: [f32; 4],
    segments: usize,
    // dfx, dfy, ddfx, ddfy, dddfx, dddfy
    coefficients: [f32; 6],
}

impl BezierCurve {
    pub fn new(cx1: f32, cy1: f32, cx2: f32, cy2: f32) -> Result<Self> {
        Self::with_segments(cx1, cy1, cx2, cy2, DEFAULT_BEZIER_SEGMENTS)
    }

    pub fn with_segments(cx1: f32, cy1: f32, cx2: f32, cy2: f32, segments: usize) -> Result<Self> {
        for (x, y) in [(cx1, cy1), (cx2, cy2)] {
            if !x.is_finite() || !y.is_finite() || !(0.0..=1.0).contains(&x) {
                return Err(AnimationError::InvalidControlPoint { x, y });
            }
        }
        Config {
            bezier_segments: segments,
        }
        .validate()?;

        let step = 1.0 / segments as f32;
        let step2 = step * step;
        let step3 = step2 * step;
        let pre1 = 3.0 * step;
        let pre2 = 3.0 * step2;
        let pre4 = 6.0 * step2;
        let pre5 = 6.0 * step3;
        let tmp1x = -cx1 * 2.0 + cx2;
        let tmp1y = -cy1 * 2.0 + cy2;
        let tmp2x = (cx1 - cx2) * 3.0 + 1.0;
        let tmp2y = (cy1 - cy2) * 3.0 + 1.0;

        let coefficients = [
            cx1 * pre1 + tmp1x * pre2 + tmp2x * step3,
            cy1 * pre1 + tmp1y * pre2 + tmp2y * step3,
            tmp1x * pre4 + tmp2x * pre5,
            tmp1y * pre4 + tmp2y * pre5,
            tmp2x * pre5,
            tmp2y * pre5,
        ];

        Ok(Self {
            control: [cx1, cy1, cx2, cy2],
            segments,
            coefficients,
        })
    }

    /// Control points as (cx1, cy1, cx2, cy2).
    pub fn control_points(&self) -> [f32; 4] {
        self.control
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Walk the sampled curve until the bracketing pair around `percent` is
    /// found, then interpolate linearly inside that pair.
    pub fn percent(&self, percent: f32) -> f32 {
        let [mut dfx, mut dfy, mut ddfx, mut ddfy, dddfx, dddfy] = self.coefficients;
        let mut x = dfx;
        let mut y = dfy;
        let mut remaining = self.segments - 2;
        loop {
            if x >= percent {
                let last_x = x - dfx;
                let last_y = y - dfy;
                if dfx <= f32::EPSILON {
                    return y;
                }
                return last_y + (y - last_y) * (percent - last_x) / (x - last_x);
            }
            if remaining == 0 {
                break;
            }
            remaining -= 1;
            dfx += ddfx;
            dfy += ddfy;
            ddfx += dddfx;
            ddfy += dddfy;
            x += dfx;
            y += dfy;
        }
        // Last sample pair ends at (1, 1).
        if 1.0 - x <= f32::EPSILON {
            return 1.0;
        }
        y + (1.0 - y) * (percent - x) / (1.0 - x)
    }
}

impl TryFrom<RawBezier> for BezierCurve {
    type Error = AnimationError;

    fn try_from(raw: RawBezier) -> Result<Self> {
        BezierCurve::with_segments(raw.cx1, raw.cy1, raw.cx2, raw.cy2, raw.segments)
    }
}

impl From<BezierCurve> for RawBezier {
    fn from(curve: BezierCurve) -> Self {
        let [cx1, cy1, cx2, cy2] = curve.control;
        RawBezier {
            cx1,
            cy1,
            cx2,
            cy2,
            segments: curve.segments,
        }
    }
}

/// One curve per segment, sized once at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurveTable {
    curves: Vec<Curve>,
    #[serde(skip, default = "default_segments")]
    bezier_segments: usize,
}

impl Default for CurveTable {
    fn default() -> Self {
        Self {
            curves: Vec::new(),
            bezier_segments: DEFAULT_BEZIER_SEGMENTS,
        }
    }
}

impl CurveTable {
    /// Table for a timeline with `frame_count` frames; every segment starts linear.
    pub fn new(frame_count: usize, cfg: &Config) -> Self {
        Self {
            curves: vec![Curve::Linear; frame_count.saturating_sub(1)],
            bezier_segments: cfg.bezier_segments,
        }
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn get(&self, segment: usize) -> Option<&Curve> {
        self.curves.get(segment)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Curve> {
        self.curves.iter()
    }

    pub fn set(&mut self, segment: usize, curve: Curve) -> Result<()> {
        let len = self.curves.len();
        let slot = self
            .curves
            .get_mut(segment)
            .ok_or(AnimationError::SegmentIndexOutOfRange {
                index: segment,
                len,
            })?;
        *slot = curve;
        Ok(())
    }

    pub fn set_bezier(&mut self, segment: usize, cx1: f32, cy1: f32, cx2: f32, cy2: f32) -> Result<()> {
        // Index errors take precedence over curve errors.
        if segment >= self.curves.len() {
            return Err(AnimationError::SegmentIndexOutOfRange {
                index: segment,
                len: self.curves.len(),
            });
        }
        let bezier = BezierCurve::with_segments(cx1, cy1, cx2, cy2, self.bezier_segments)?;
        self.set(segment, Curve::Bezier(bezier))
    }

    /// Eased percent for `segment`. Unknown segments behave linearly.
    pub fn percent(&self, segment: usize, percent: f32) -> f32 {
        match self.curves.get(segment) {
            Some(curve) => curve.percent(percent),
            None => Curve::Linear.percent(percent),
        }
    }

    /// Pad a deserialized table with linear segments up to `segments`.
    pub(crate) fn pad_to(&mut self, segments: usize) {
        if self.curves.len() < segments {
            self.curves.resize(segments, Curve::Linear);
        }
    }

    pub(crate) fn validate(&self, frame_count: usize) -> Result<()> {
        let expected = frame_count.saturating_sub(1);
        if self.curves.len() != expected {
            return Err(AnimationError::CurveCountMismatch {
                found: self.curves.len(),
                expected,
            });
        }
        Ok(())
    }
}

/// Shared easing behavior of the rotate, translate, scale and color timelines.
pub trait CurveTimeline {
    fn curves(&self) -> &CurveTable;
    fn curves_mut(&mut self) -> &mut CurveTable;

    fn segment_count(&self) -> usize {
        self.curves().len()
    }

    fn set_linear(&mut self, segment: usize) -> Result<()> {
        self.curves_mut().set(segment, Curve::Linear)
    }

    fn set_stepped(&mut self, segment: usize) -> Result<()> {
        self.curves_mut().set(segment, Curve::Stepped)
    }

    /// Bezier easing for `segment`. `cx1`/`cx2` are fractions of the segment's
    /// time span, `cy1`/`cy2` fractions of its value span.
    fn set_curve(&mut self, segment: usize, cx1: f32, cy1: f32, cx2: f32, cy2: f32) -> Result<()> {
        self.curves_mut().set_bezier(segment, cx1, cy1, cx2, cy2)
    }

    fn curve_percent(&self, segment: usize, percent: f32) -> f32 {
        self.curves().percent(segment, percent)
    }
}
