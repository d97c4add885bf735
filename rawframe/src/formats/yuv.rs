use crate::formats::rgb2yuv::rgb_to_yuv;
use crate::formats::{Plane, RGBSource};

/// Full resolution, unrounded Y, U and V planes of an RGB source.
///
/// Every packer starts from these, so the colorspace transform runs exactly once per pixel.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct YUVPlanes {
    y: Plane,
    u: Plane,
    v: Plane,
}

impl YUVPlanes {
    /// Transforms every pixel of the given source.
    pub fn from_rgb_source(rgb: impl RGBSource) -> Self {
        let (width, height) = rgb.dimensions();

        let mut pixels = Vec::with_capacity(width * height);
        for py in 0..height {
            for px in 0..width {
                pixels.push(rgb_to_yuv(rgb.pixel_f32(px, py)));
            }
        }

        let y = Plane::from_fn(width, height, |px, py| pixels[px + py * width].0);
        let u = Plane::from_fn(width, height, |px, py| pixels[px + py * width].1);
        let v = Plane::from_fn(width, height, |px, py| pixels[px + py * width].2);

        Self { y, u, v }
    }

    /// Size of the planes as `(w, h)`.
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        self.y.dimensions()
    }

    /// Luma plane.
    pub const fn y(&self) -> &Plane {
        &self.y
    }

    /// Blue difference chroma plane.
    pub const fn u(&self) -> &Plane {
        &self.u
    }

    /// Red difference chroma plane.
    pub const fn v(&self) -> &Plane {
        &self.v
    }
}
