use thiserror::Error;

/// Errors raised by the fallible helpers of the extraction layer.
///
/// Field reads never produce these; a missing or malformed field is an empty
/// value on the record.
#[derive(Error, Debug)]
pub enum MfError {
    #[error("Invalid document location: {0}")]
    InvalidLocation(String),

    #[error(transparent)]
    UrlError(#[from] url::ParseError),
}

pub type MfResult<T> = std::result::Result<T, MfError>;
