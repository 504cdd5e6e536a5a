use crate::errors::ServerError;
use crate::responses::html::html_with_status;
use crate::templates::pages::error_page;
use astra::{Body, Response};
use tracing::warn;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let (status, message) = match &err {
        ServerError::NotFound => (404, "요청하신 페이지를 찾을 수 없습니다.".to_string()),
        ServerError::BadRequest(msg) => (400, msg.clone()),
        ServerError::InternalError => (500, "서버 오류가 발생했습니다.".to_string()),
    };
    warn!(status, error = %err, "request failed");

    html_with_status(status, error_page(status, &message))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
