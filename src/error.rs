use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Format resolution errors
    #[error("data does not match any registered compression format")]
    UnknownFormat,

    #[error("{format} does not support compression")]
    EncodingUnsupported { format: &'static str },

    // Size-limit errors
    #[error("{format} input of {size} bytes exceeds the {limit} byte maximum")]
    InputTooLarge { format: &'static str, size: usize, limit: usize },

    // Corrupt-stream errors
    #[error("invalid {format} header")]
    InvalidHeader { format: &'static str },

    #[error("back-reference distance {distance} exceeds the {available} bytes decoded so far")]
    InvalidDistance { distance: usize, available: usize },

    #[error("compressed stream ended in the middle of a token group")]
    TruncatedStream,

    // I/O errors
    #[error("I/O error: {0}")]
    Io(std::io::Error),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        // Every read in the engine is against a fully-resident buffer, so an
        // unexpected EOF always means the compressed stream was cut short.
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            Error::TruncatedStream
        } else {
            Error::Io(e)
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
