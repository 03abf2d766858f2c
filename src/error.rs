use thiserror::Error;

/// Errors raised while setting up a carousel
///
/// Nothing in the per-tick path returns an error; these only surface from
/// construction and configuration loading.
#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("configuration error: the carousel needs at least one item")]
    NoItems,

    #[error("configuration error: min distance {min} must be below max distance {max}")]
    InvalidZoomRange { min: f64, max: f64 },

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl CarouselError {
    /// Whether this is a configuration problem rather than an I/O failure
    pub fn is_configuration(&self) -> bool {
        matches!(self, CarouselError::NoItems | CarouselError::InvalidZoomRange { .. })
    }
}

pub type Result<T> = std::result::Result<T, CarouselError>;
