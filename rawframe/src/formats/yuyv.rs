use crate::PixelFormat;
use crate::formats::{RGBSource, RawFrame, YUVPlanes, sample_to_u8};

/// Packed 4:2:2 frame of `[Y0 U Y1 V ...]` groups, each covering two horizontal pixels.
///
/// Chroma is taken from the even column of each pair as is. Unlike [`Nv12Buffer`](crate::formats::Nv12Buffer)
/// nothing is averaged, existing consumers rely on that.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct YuyvBuffer {
    yuyv: Vec<u8>,
    width: usize,
    height: usize,
}

impl YuyvBuffer {
    /// Converts an RGB source into YUYV, dropping the last column if the width is odd.
    pub fn from_rgb_source(rgb: impl RGBSource) -> Self {
        Self::from_planes(&YUVPlanes::from_rgb_source(rgb))
    }

    /// Packs already transformed planes into YUYV, dropping the last column if the width is odd.
    pub fn from_planes(planes: &YUVPlanes) -> Self {
        let (width, height) = planes.dimensions();
        let width = width & !1;

        let mut yuyv = Vec::with_capacity(PixelFormat::Yuyv.buffer_size(width, height));

        for row in 0..height {
            let (y, u, v) = (planes.y().row(row), planes.u().row(row), planes.v().row(row));

            for x in (0..width).step_by(2) {
                yuyv.push(sample_to_u8(y[x]));
                yuyv.push(sample_to_u8(u[x]));
                yuyv.push(sample_to_u8(y[x + 1]));
                yuyv.push(sample_to_u8(v[x]));
            }
        }

        Self { yuyv, width, height }
    }
}

impl RawFrame for YuyvBuffer {
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn format(&self) -> PixelFormat {
        PixelFormat::Yuyv
    }

    fn as_bytes(&self) -> &[u8] {
        &self.yuyv
    }

    fn into_vec(self) -> Vec<u8> {
        self.yuyv
    }
}
