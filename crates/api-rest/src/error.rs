use api_shared::ErrorRes;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use notes_core::NoteError;

/// Error returned by REST handlers, rendered as `{"error": "<message>"}`.
///
/// Messages are short and generic; details stay in the server log.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Maps a core error to a response.
    ///
    /// `context` prefixes the log line; `fallback` is the client-facing message
    /// for infrastructure failures.
    pub fn from_note_error(err: NoteError, context: &str, fallback: &'static str) -> Self {
        match err {
            NoteError::Validation(message) => {
                tracing::warn!("{}: {}", context, message);
                Self::bad_request(message)
            }
            NoteError::NotFound(id) => {
                tracing::warn!("{}: note {} not found", context, id);
                Self::new(StatusCode::NOT_FOUND, "Note not found")
            }
            other => {
                tracing::error!("{}: {:?}", context, other);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, fallback)
            }
        }
    }

    pub fn from_rejection(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        Self::bad_request("Invalid request body")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorRes { error: self.message })).into_response()
    }
}
