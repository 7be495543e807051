// Application error types
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("unknown map style '{0}', expected 'satellite' or 'street'")]
    UnknownMapStyle(String),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("missing query parameter: {0}")]
    MissingParameter(&'static str),

    #[error("map initialization failed: {0}")]
    MapInitialization(String),

    #[error("repository error: {0}")]
    Repository(#[from] anyhow::Error),
}

impl DashboardError {
    /// True when the caller supplied bad input rather than the service failing
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DashboardError::UnknownMapStyle(_)
                | DashboardError::InvalidDate(_)
                | DashboardError::BadRequest(_)
                | DashboardError::MissingParameter(_)
        )
    }
}
