#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
//! Converts RGB raster images into raw frame buffers as consumed by camera and video pipelines.
//!
//! Three layouts are supported:
//!
//! - `rgb`, row-major `[R G B R G B ...]`, a passthrough of the source pixels.
//! - `nv12`, a full resolution Y plane followed by a half resolution plane of interleaved `U V` pairs (4:2:0).
//! - `yuv422` (also `yuyv` or `yuv 4:2:2`), packed `[Y0 U Y1 V ...]` groups covering two pixels each (4:2:2).
//!
//! Output buffers are headerless, consumers must know width, height and format out of band.
//!
//! ```
//! use rawframe::formats::RgbSliceU8;
//! use rawframe::{PixelFormat, convert};
//!
//! let pixels = [255u8; 4 * 2 * 3];
//! let source = RgbSliceU8::new(&pixels, (4, 2))?;
//! let format: PixelFormat = "NV12".parse()?;
//!
//! let nv12 = convert(source, format);
//! assert_eq!(nv12.len(), format.buffer_size(4, 2));
//! # Ok::<(), rawframe::Error>(())
//! ```

mod error;
mod pixel_format;

pub mod formats;

pub use error::Error;
pub use pixel_format::{PixelFormat, convert};
