use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use genes_domain::DomainError;
use tracing::{error, warn};

/// Body returned by `/find` when the location cannot be parsed.
pub const EMPTY_OBJECT: &str = "{}";

/// Wraps an already serialized JSON body. The bytes are sent as stored.
pub fn json_body(body: impl AsRef<str>) -> Response {
    (
        [(header::CONTENT_TYPE, "application/json")],
        body.as_ref().to_owned(),
    )
        .into_response()
}

/// Maps a domain error onto the status code and plain-text message sent to
/// the client.
pub fn domain_error_response(err: DomainError) -> (StatusCode, String) {
    match err {
        DomainError::TrackNotFound(_) | DomainError::InvalidTrack(_) => {
            warn!(error = %err, "Requested track does not exist");
            (StatusCode::NOT_FOUND, err.to_string())
        }
        _ => {
            error!(error = %err, "Request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}
