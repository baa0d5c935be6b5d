use thiserror::Error;

use crate::ErrorCorrectionLevel;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("QR encoder is not available")]
    Unavailable,
    #[error("input does not fit in a QR code at level {0}")]
    DataTooLong(ErrorCorrectionLevel),
    #[error("encoder produced an invalid image: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CopyError {
    #[error("no rendered image to copy")]
    NoImage,
    #[error("clipboard is not available: {0}")]
    Unavailable(String),
    #[error("clipboard rejected the image: {0}")]
    Rejected(String),
    #[error("copying images is not supported on this platform")]
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("failed to encode PNG: {0}")]
    Encode(String),
    #[error("failed to write file: {0}")]
    Io(String),
    #[error("platform refused the download: {0}")]
    Platform(String),
}
