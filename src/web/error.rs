use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::services::activity_registry::ActivityError;
use crate::services::roster_service::RosterError;
use crate::services::student_registry::StudentError;

impl RosterError {
    pub fn status(&self) -> StatusCode {
        match self {
            RosterError::Activity(ActivityError::NotFound)
            | RosterError::Student(StudentError::NotFound) => StatusCode::NOT_FOUND,
            RosterError::Activity(_) | RosterError::Student(_) => StatusCode::BAD_REQUEST,
            RosterError::ParticipantsNotSaved(_) | RosterError::StudentsNotSaved(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(error = %self, "request failed");
        }
        (
            status,
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
