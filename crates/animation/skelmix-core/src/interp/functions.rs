//! Interpolation helpers:
//! - lerp_* (component-wise linear interpolation)
//! - wrap_degrees / lerp_degrees (shortest-arc rotation)
//! - mix_* (weighted blend of a computed value into a pose value)

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec2(a: [f32; 2], b: [f32; 2], t: f32) -> [f32; 2] {
    [lerp_f32(a[0], b[0], t), lerp_f32(a[1], b[1], t)]
}

#[inline]
pub fn lerp_vec4(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
        lerp_f32(a[3], b[3], t),
    ]
}

/// Normalize an angular difference in degrees into (-180, 180].
#[inline]
pub fn wrap_degrees(delta: f32) -> f32 {
    let mut d = delta % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Interpolate two angles in degrees along the shorter arc.
/// The result is not re-normalized, so it may leave [0, 360).
#[inline]
pub fn lerp_degrees(a: f32, b: f32, t: f32) -> f32 {
    a + wrap_degrees(b - a) * t
}

/// Clamp a blend weight into [0, 1]. NaN is treated as zero weight.
#[inline]
pub fn clamp_alpha(alpha: f32) -> f32 {
    if alpha.is_nan() {
        0.0
    } else {
        alpha.clamp(0.0, 1.0)
    }
}

/// Blend `target` into `current` by `alpha`. Full weight overwrites exactly.
#[inline]
pub fn mix_f32(current: f32, target: f32, alpha: f32) -> f32 {
    let alpha = clamp_alpha(alpha);
    if alpha >= 1.0 {
        target
    } else {
        current + (target - current) * alpha
    }
}

#[inline]
pub fn mix_vec2(current: [f32; 2], target: [f32; 2], alpha: f32) -> [f32; 2] {
    [
        mix_f32(current[0], target[0], alpha),
        mix_f32(current[1], target[1], alpha),
    ]
}

#[inline]
pub fn mix_vec4(current: [f32; 4], target: [f32; 4], alpha: f32) -> [f32; 4] {
    [
        mix_f32(current[0], target[0], alpha),
        mix_f32(current[1], target[1], alpha),
        mix_f32(current[2], target[2], alpha),
        mix_f32(current[3], target[3], alpha),
    ]
}

/// Blend an angle toward `target` along the shorter arc.
#[inline]
pub fn mix_degrees(current: f32, target: f32, alpha: f32) -> f32 {
    let alpha = clamp_alpha(alpha);
    if alpha >= 1.0 {
        target
    } else {
        current + wrap_degrees(target - current) * alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_stays_in_half_open_range() {
        assert_eq!(wrap_degrees(180.0), 180.0);
        assert_eq!(wrap_degrees(-180.0), 180.0);
        assert_eq!(wrap_degrees(190.0), -170.0);
        assert_eq!(wrap_degrees(-190.0), 170.0);
        assert_eq!(wrap_degrees(540.0), 180.0);
        assert_eq!(wrap_degrees(-340.0), 20.0);
    }

    #[test]
    fn lerp_degrees_crosses_zero() {
        // 350 -> 10 goes forward through 360, not backward through 180.
        let mid = lerp_degrees(350.0, 10.0, 0.5);
        assert!((mid - 360.0).abs() < 1e-4, "mid {mid}");
    }

    #[test]
    fn mix_zero_alpha_is_identity() {
        assert_eq!(mix_f32(3.0, 7.0, 0.0), 3.0);
        assert_eq!(mix_degrees(10.0, 200.0, 0.0), 10.0);
        assert_eq!(mix_f32(3.0, 7.0, f32::NAN), 3.0);
    }

    #[test]
    fn mix_full_alpha_overwrites() {
        assert_eq!(mix_f32(3.0, 7.0, 1.0), 7.0);
        assert_eq!(mix_f32(3.0, 7.0, 4.0), 7.0);
        assert_eq!(mix_degrees(10.0, 350.0, 1.0), 350.0);
    }

    #[test]
    fn mix_clamps_negative_alpha() {
        assert_eq!(mix_vec2([1.0, 2.0], [5.0, 6.0], -0.5), [1.0, 2.0]);
    }
}
