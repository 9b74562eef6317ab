use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    MfError(#[from] oomph_mf::error::MfError),

    /// The scan was replaced or cancelled while geocoding was in flight.
    #[error("Scan invalidated before geocoding finished")]
    ScanInvalidated,
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
