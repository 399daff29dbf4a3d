use std::path::PathBuf;

/// Result alias used throughout the conversion pipeline
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors surfaced by [`convert`](crate::convert) and the artifact export
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The source image could not be read or is not a supported raster format
    #[error("failed to decode image: {source}")]
    Decode {
        #[source]
        source: image::ImageError,
    },

    /// A caller-supplied parameter is out of range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Writing the artifact to disk failed
    #[error("failed to write {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Machine-distinguishable error category, without payload
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Decode,
    InvalidParameter,
    Export,
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::Decode { .. } => ErrorKind::Decode,
            ConvertError::InvalidParameter(_) => ErrorKind::InvalidParameter,
            ConvertError::Export { .. } => ErrorKind::Export,
        }
    }
}

impl From<image::ImageError> for ConvertError {
    fn from(source: image::ImageError) -> Self {
        ConvertError::Decode { source }
    }
}
