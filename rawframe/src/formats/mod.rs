//! Handles conversions, e.g., from RGB to NV12 and YUYV.

mod nv12;
mod plane;
mod rgb;
mod rgb2yuv;
mod yuv;
mod yuyv;

pub use nv12::Nv12Buffer;
pub use plane::Plane;
pub use rgb::{BgrSliceU8, BgraSliceU8, EvenCrop, RGBSource, RgbBuffer, RgbSliceU8, RgbaSliceU8, even_dimensions, write_rgb8};
pub use rgb2yuv::{rgb_to_yuv, sample_to_u8};
pub use yuv::YUVPlanes;
pub use yuyv::YuyvBuffer;

use crate::PixelFormat;

/// A packed frame buffer, ready to be written out as a raw dump.
pub trait RawFrame {
    /// Size of the image as `(w, h)`.
    #[must_use]
    fn dimensions(&self) -> (usize, usize);

    /// Layout of the bytes returned by [`Self::as_bytes`].
    #[must_use]
    fn format(&self) -> PixelFormat;

    /// The packed bytes, of length `self.format().buffer_size(w, h)`.
    #[must_use]
    fn as_bytes(&self) -> &[u8];

    /// Consumes the frame and returns the packed bytes.
    #[must_use]
    fn into_vec(self) -> Vec<u8>;
}
