use std::path::PathBuf;

/// Everything that can end a `rawframe` invocation early.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Wrong number of arguments or otherwise malformed command line.
    #[error("{0}")]
    Usage(clap::Error),

    /// Input missing, unreadable or not an image.
    #[error("cannot decode {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Unsupported format identifier, or a decoded image that does not fit its dimensions.
    #[error(transparent)]
    Frame(#[from] rawframe::Error),

    /// Output could not be created or written.
    #[error("cannot write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
