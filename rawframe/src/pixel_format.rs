use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::Error;
use crate::formats::{EvenCrop, Nv12Buffer, RGBSource, RawFrame, RgbBuffer, YUVPlanes, YuyvBuffer};

/// Supported output layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PixelFormat {
    /// Single RGB interleaved plane, `[R G B R G B ...]`
    Rgb,

    /// Y plane and interleaved UV plane, 4:2:0 sub sampling, chroma averaged over 2x2 blocks
    Nv12,

    /// Single packed `[Y0 U Y1 V ...]` plane, 4:2:2 sub sampling, chroma from even columns
    Yuyv,
}

impl PixelFormat {
    /// All formats, in the order they are listed to users.
    pub const ALL: [Self; 3] = [Self::Rgb, Self::Nv12, Self::Yuyv];

    /// Canonical identifier, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Nv12 => "nv12",
            Self::Yuyv => "yuv422",
        }
    }

    /// Number of bytes a frame of the given (even) dimensions occupies in this format.
    #[must_use]
    pub const fn buffer_size(self, width: usize, height: usize) -> usize {
        match self {
            Self::Rgb => width * height * 3,
            Self::Nv12 => width * height * 3 / 2,
            Self::Yuyv => width * height * 2,
        }
    }
}

impl Display for PixelFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PixelFormat {
    type Err = Error;

    /// Parses a format identifier, ignoring ASCII case.
    ///
    /// `yuv422`, `yuv 4:2:2` and `yuyv` all name [`PixelFormat::Yuyv`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rgb" => Ok(Self::Rgb),
            "nv12" => Ok(Self::Nv12),
            "yuv422" | "yuv 4:2:2" | "yuyv" => Ok(Self::Yuyv),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Converts an RGB source into a raw frame of the given format.
///
/// Odd dimensions are first cropped to even ones by dropping the last column and/or row,
/// so the result always has `format.buffer_size(w & !1, h & !1)` bytes.
#[must_use]
pub fn convert(rgb: impl RGBSource, format: PixelFormat) -> Vec<u8> {
    let rgb = EvenCrop::new(rgb);
    let (width, height) = rgb.dimensions();

    tracing::debug!(width, height, %format, "converting frame");

    let frame = match format {
        PixelFormat::Rgb => RgbBuffer::from_rgb_source(rgb).into_vec(),
        PixelFormat::Nv12 => Nv12Buffer::from_planes(&YUVPlanes::from_rgb_source(rgb)).into_vec(),
        PixelFormat::Yuyv => YuyvBuffer::from_planes(&YUVPlanes::from_rgb_source(rgb)).into_vec(),
    };

    tracing::debug!(bytes = frame.len(), "frame packed");

    frame
}

#[cfg(test)]
mod tests {
    use super::{PixelFormat, convert};
    use crate::Error;
    use crate::formats::RgbSliceU8;

    #[test]
    fn parses_identifiers_case_insensitively() {
        assert_eq!("rgb".parse::<PixelFormat>(), Ok(PixelFormat::Rgb));
        assert_eq!("RGB".parse::<PixelFormat>(), Ok(PixelFormat::Rgb));
        assert_eq!("Nv12".parse::<PixelFormat>(), Ok(PixelFormat::Nv12));
        assert_eq!("yuv422".parse::<PixelFormat>(), Ok(PixelFormat::Yuyv));
        assert_eq!("YUV 4:2:2".parse::<PixelFormat>(), Ok(PixelFormat::Yuyv));
        assert_eq!("YUYV".parse::<PixelFormat>(), Ok(PixelFormat::Yuyv));
    }

    #[test]
    fn rejects_unknown_identifiers_verbatim() {
        assert_eq!("bogus".parse::<PixelFormat>(), Err(Error::UnsupportedFormat("bogus".to_string())));
        assert_eq!(" nv12".parse::<PixelFormat>(), Err(Error::UnsupportedFormat(" nv12".to_string())));
        assert_eq!("".parse::<PixelFormat>(), Err(Error::UnsupportedFormat(String::new())));
    }

    #[test]
    fn error_message_names_identifier() {
        let err = "I420".parse::<PixelFormat>().unwrap_err();
        assert_eq!(err.to_string(), "unsupported format: I420");
    }

    #[test]
    fn names_round_trip() {
        for format in PixelFormat::ALL {
            assert_eq!(format.name().parse::<PixelFormat>(), Ok(format));
            assert_eq!(format.to_string(), format.name());
        }
    }

    #[test]
    fn buffer_sizes() {
        assert_eq!(PixelFormat::Rgb.buffer_size(4, 2), 24);
        assert_eq!(PixelFormat::Nv12.buffer_size(4, 2), 12);
        assert_eq!(PixelFormat::Yuyv.buffer_size(4, 2), 16);
        assert_eq!(PixelFormat::Nv12.buffer_size(1920, 1080), 3_110_400);
    }

    #[test]
    fn convert_crops_odd_sources() {
        let data = vec![100u8; 5 * 3 * 3];
        let rgb = RgbSliceU8::new(&data, (5, 3)).unwrap();

        for format in PixelFormat::ALL {
            assert_eq!(convert(rgb, format).len(), format.buffer_size(4, 2));
        }
    }

    #[test]
    fn convert_empty_source() {
        let rgb = RgbSliceU8::new(&[], (0, 0)).unwrap();

        for format in PixelFormat::ALL {
            assert!(convert(rgb, format).is_empty());
        }
    }
}
