use crate::formats::RawFrame;
use crate::{Error, PixelFormat};

/// Source of arbitrarily formatted 8 bit RGB data.
pub trait RGBSource {
    /// Size of the image as `(w, h)`.
    #[must_use]
    fn dimensions(&self) -> (usize, usize);

    /// Extract the `[R, G, B]` value at the specified location.
    #[must_use]
    fn pixel_u8(&self, x: usize, y: usize) -> [u8; 3];

    /// Extract the pixel value at the specified location. Pixel values are
    /// floats in the range `[0, 255]` (`u8` represented as `f32`).
    #[must_use]
    fn pixel_f32(&self, x: usize, y: usize) -> (f32, f32, f32) {
        let [r, g, b] = self.pixel_u8(x, y);
        (f32::from(r), f32::from(g), f32::from(b))
    }
}

impl<T: RGBSource + ?Sized> RGBSource for &T {
    fn dimensions(&self) -> (usize, usize) {
        (**self).dimensions()
    }

    fn pixel_u8(&self, x: usize, y: usize) -> [u8; 3] {
        (**self).pixel_u8(x, y)
    }
}

/// Container for a slice of contiguous `[R G B R G B ...]` data.
#[derive(Copy, Clone, Debug)]
#[must_use]
pub struct RgbSliceU8<'a> {
    data: &'a [u8],
    dimensions: (usize, usize),
}

/// Container for a slice of contiguous `[B G R B G R ...]` data.
#[derive(Copy, Clone, Debug)]
#[must_use]
pub struct BgrSliceU8<'a> {
    data: &'a [u8],
    dimensions: (usize, usize),
}

/// Container for a slice of contiguous `[R G B A R G B A ...]` data. Alpha is ignored.
#[derive(Copy, Clone, Debug)]
#[must_use]
pub struct RgbaSliceU8<'a> {
    data: &'a [u8],
    dimensions: (usize, usize),
}

/// Container for a slice of contiguous `[B G R A B G R A ...]` data. Alpha is ignored.
#[derive(Copy, Clone, Debug)]
#[must_use]
pub struct BgraSliceU8<'a> {
    data: &'a [u8],
    dimensions: (usize, usize),
}

macro_rules! impl_slice_wrapper_u8 {
    ($t:ty, $stride:expr, $offsets:expr) => {
        impl<'a> $t {
            /// Creates a new instance given the byte slice and dimensions `(w, h)`.
            ///
            /// # Errors
            ///
            /// Returns [`Error::BufferSize`] if `data` does not hold exactly `w * h` pixels.
            pub fn new(data: &'a [u8], dimensions: (usize, usize)) -> Result<Self, Error> {
                let expected = dimensions.0 * dimensions.1 * $stride;

                if data.len() != expected {
                    return Err(Error::BufferSize { expected, got: data.len() });
                }

                Ok(Self { data, dimensions })
            }
        }

        impl<'a> RGBSource for $t {
            fn dimensions(&self) -> (usize, usize) {
                self.dimensions
            }

            fn pixel_u8(&self, x: usize, y: usize) -> [u8; 3] {
                let base_pos = (x + y * self.dimensions.0) * $stride;
                [
                    self.data[base_pos + $offsets[0]],
                    self.data[base_pos + $offsets[1]],
                    self.data[base_pos + $offsets[2]],
                ]
            }
        }
    };
}

impl_slice_wrapper_u8!(RgbSliceU8<'a>, 3, [0, 1, 2]);
impl_slice_wrapper_u8!(RgbaSliceU8<'a>, 4, [0, 1, 2]);
impl_slice_wrapper_u8!(BgrSliceU8<'a>, 3, [2, 1, 0]);
impl_slice_wrapper_u8!(BgraSliceU8<'a>, 4, [2, 1, 0]);

/// Rounds both dimensions down to the next even number.
#[must_use]
pub const fn even_dimensions(dimensions: (usize, usize)) -> (usize, usize) {
    (dimensions.0 & !1, dimensions.1 & !1)
}

/// Views the top left part of a source whose width and height are both even.
///
/// An odd width loses the last column, an odd height the last row.
#[derive(Copy, Clone, Debug)]
#[must_use]
pub struct EvenCrop<S> {
    source: S,
    dimensions: (usize, usize),
}

impl<S: RGBSource> EvenCrop<S> {
    /// Wraps the given source.
    pub fn new(source: S) -> Self {
        let original = source.dimensions();
        let dimensions = even_dimensions(original);

        if dimensions != original {
            tracing::debug!(?original, cropped = ?dimensions, "cropping source to even dimensions");
        }

        Self { source, dimensions }
    }

    /// Returns the wrapped source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: RGBSource> RGBSource for EvenCrop<S> {
    fn dimensions(&self) -> (usize, usize) {
        self.dimensions
    }

    fn pixel_u8(&self, x: usize, y: usize) -> [u8; 3] {
        self.source.pixel_u8(x, y)
    }
}

/// Writes the source as row-major `[R G B R G B ...]` into `target`.
///
/// # Panics
///
/// Panics if `target` is not exactly `w * h * 3` bytes long.
pub fn write_rgb8(rgb: impl RGBSource, target: &mut [u8]) {
    let (width, height) = rgb.dimensions();

    assert_eq!(target.len(), width * height * 3, "RGB target needs to be properly sized");

    for (i, pixel) in target.chunks_exact_mut(3).enumerate() {
        pixel.copy_from_slice(&rgb.pixel_u8(i % width, i / width));
    }
}

/// Owned `[R G B R G B ...]` frame.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct RgbBuffer {
    rgb: Vec<u8>,
    width: usize,
    height: usize,
}

impl RgbBuffer {
    /// Copies the given source into a new interleaved RGB buffer.
    pub fn from_rgb_source(rgb: impl RGBSource) -> Self {
        let (width, height) = rgb.dimensions();
        let mut buffer = vec![0u8; PixelFormat::Rgb.buffer_size(width, height)];

        write_rgb8(rgb, &mut buffer);

        Self { rgb: buffer, width, height }
    }
}

impl RawFrame for RgbBuffer {
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn format(&self) -> PixelFormat {
        PixelFormat::Rgb
    }

    fn as_bytes(&self) -> &[u8] {
        &self.rgb
    }

    fn into_vec(self) -> Vec<u8> {
        self.rgb
    }
}
