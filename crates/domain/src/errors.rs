use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid genomic location: {0}")]
    InvalidLocation(String),

    #[error("Invalid track selector: {0}")]
    InvalidTrack(String),

    #[error("Track not found: {0}")]
    TrackNotFound(String),

    #[error("Malformed track file: {0}")]
    TrackParse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::IoError(err.to_string())
    }
}

