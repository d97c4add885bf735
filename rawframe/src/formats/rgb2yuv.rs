//! The fixed RGB to YUV transform shared by all YUV layouts.
//!
//! Consumers of the raw dumps depend on these exact coefficients and on truncation
//! (not rounding) when going back to 8 bits, so neither may change.

const Y_R: f32 = 0.299;
const Y_G: f32 = 0.587;
const Y_B: f32 = 0.114;

const U_R: f32 = -0.169;
const U_G: f32 = -0.331;
const U_B: f32 = 0.5;

const V_R: f32 = 0.5;
const V_G: f32 = -0.419;
const V_B: f32 = -0.081;

const CHROMA_OFFSET: f32 = 128.0;

/// Converts one RGB pixel (channels in `[0, 255]`) into unrounded `(Y, U, V)`.
#[must_use]
#[allow(clippy::suboptimal_flops)] // fused multiply-add would change the low bits
pub const fn rgb_to_yuv(rgb: (f32, f32, f32)) -> (f32, f32, f32) {
    let (r, g, b) = rgb;

    let y = Y_R * r + Y_G * g + Y_B * b;
    let u = U_R * r + U_G * g + U_B * b + CHROMA_OFFSET;
    let v = V_R * r + V_G * g + V_B * b + CHROMA_OFFSET;

    (y, u, v)
}

/// Truncates a luma or chroma sample to 8 bits.
///
/// The cast saturates, so overshoot beyond `[0, 255]` is clamped.
#[must_use]
pub const fn sample_to_u8(sample: f32) -> u8 {
    sample as u8
}
