use astra::Response;
use thiserror::Error;

/// Errors originating from the server logic (routing, bad input, missing
/// notices). Upstream fetch failures never end up here; the board shows
/// them as a message instead.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
