use crate::PixelFormat;
use crate::formats::{RGBSource, RawFrame, YUVPlanes, sample_to_u8};

/// Semi-planar 4:2:0 frame: a full resolution Y plane followed by interleaved `[U V U V ...]` rows.
///
/// The UV plane has `h / 2` rows of `w` bytes, one `U V` pair per 2x2 block of source pixels,
/// each being the mean of the block's four unrounded chroma samples.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Nv12Buffer {
    nv12: Vec<u8>,
    width: usize,
    height: usize,
}

impl Nv12Buffer {
    /// Converts an RGB source into NV12.
    ///
    /// # Panics
    ///
    /// Panics if the source dimensions are not multiples of 2.
    pub fn from_rgb_source(rgb: impl RGBSource) -> Self {
        Self::from_planes(&YUVPlanes::from_rgb_source(rgb))
    }

    /// Packs already transformed planes into NV12.
    ///
    /// # Panics
    ///
    /// Panics if the plane dimensions are not multiples of 2.
    pub fn from_planes(planes: &YUVPlanes) -> Self {
        let (width, height) = planes.dimensions();

        assert_eq!(width % 2, 0, "width needs to be a multiple of 2");
        assert_eq!(height % 2, 0, "height needs to be a multiple of 2");

        let mut nv12 = Vec::with_capacity(PixelFormat::Nv12.buffer_size(width, height));

        nv12.extend(planes.y().as_slice().iter().map(|&y| sample_to_u8(y)));

        let u = planes.u().subsample_2x2();
        let v = planes.v().subsample_2x2();

        for (&u, &v) in u.as_slice().iter().zip(v.as_slice()) {
            nv12.push(sample_to_u8(u));
            nv12.push(sample_to_u8(v));
        }

        Self { nv12, width, height }
    }

    /// Y plane, `w * h` bytes.
    #[must_use]
    pub fn y(&self) -> &[u8] {
        &self.nv12[..self.width * self.height]
    }

    /// Interleaved UV plane, `(h / 2) * w` bytes.
    #[must_use]
    pub fn uv(&self) -> &[u8] {
        &self.nv12[self.width * self.height..]
    }
}

impl RawFrame for Nv12Buffer {
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn format(&self) -> PixelFormat {
        PixelFormat::Nv12
    }

    fn as_bytes(&self) -> &[u8] {
        &self.nv12
    }

    fn into_vec(self) -> Vec<u8> {
        self.nv12
    }
}
