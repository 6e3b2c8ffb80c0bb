use crate::types::ImageFormat;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SniffError {
    #[error("unrecognized magic bytes")]
    UnknownFormat,

    #[error("unreadable {format} header")]
    BadHeader { format: ImageFormat },
}

pub type Result<T> = std::result::Result<T, SniffError>;
