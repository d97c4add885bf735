/// Errors raised while preparing a conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested output format matches none of the known identifiers.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A pixel slice does not hold exactly `width * height` pixels.
    #[error("pixel buffer has {got} bytes, expected {expected}")]
    BufferSize {
        /// Length implied by the dimensions.
        expected: usize,
        /// Length of the slice that was passed in.
        got: usize,
    },
}
