//! Error types for plot computations and the HTTP surface.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for plot operations
pub type Result<T> = std::result::Result<T, PlotError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    /// The area is NaN, infinite, or too large to count.
    #[error("Invalid spot count for a {width} x {height} plot.")]
    InvalidSpotCount { width: f64, height: f64 },

    /// Valid plot, but more spots than the service is willing to return.
    #[error("Plot needs {requested} spots, the limit is {limit}.")]
    TooManySpots { requested: usize, limit: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ResponseError for PlotError {
    fn status_code(&self) -> StatusCode {
        match self {
            PlotError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}
