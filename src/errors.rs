// errors.rs
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad input, etc.) or downstream layers (pool, DB, views).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// Pool checkout or connectivity failure. Rendered as "data unavailable".
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Database Error: {0}")]
    DbError(String),

    /// A view needs a column (or a value in every row of it) that isn't there.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl From<rusqlite::Error> for ServerError {
    fn from(e: rusqlite::Error) -> Self {
        ServerError::DbError(e.to_string())
    }
}

impl From<r2d2::Error> for ServerError {
    fn from(e: r2d2::Error) -> Self {
        ServerError::DataUnavailable(e.to_string())
    }
}
