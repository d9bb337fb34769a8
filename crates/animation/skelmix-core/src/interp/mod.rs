//! Interpolation and blending helpers.
//!
//! Component-wise lerp for positions, scales and colors, plus shortest-arc
//! handling for angles in degrees.

pub mod functions;

pub use functions::{
    clamp_alpha, lerp_degrees, lerp_f32, lerp_vec2, lerp_vec4, mix_degrees, mix_f32, mix_vec2,
    mix_vec4, wrap_degrees,
};
