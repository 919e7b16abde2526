use thiserror::Error;

#[derive(Error, Debug)]
pub enum BandError {
    #[error("Header incomplete, required keys never found: {0}")]
    HeaderIncomplete(String),

    #[error("Unsupported data type code: {0}")]
    UnsupportedTypeCode(String),

    #[error("Failed to read {0}")]
    ResourceUnreadable(String),

    #[error("Pixel payload truncated: expected {expected} bytes, found {actual}")]
    TruncatedPayload { expected: usize, actual: usize },

    #[error("Failed to decode band: {0}")]
    DecodeError(String),

    #[error("Invalid band dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("No decodable scenes found under {0}")]
    EmptyStack(String),

    #[error("Failed to encode output: {0}")]
    EncodeError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BandError>;
