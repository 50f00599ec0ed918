use axum::{Json, http::StatusCode};
use tracing::{info, instrument};

use crate::models::LogSubmission;

#[instrument(name = "handlers.log", skip(submission))]
pub async fn log_handler(Json(submission): Json<LogSubmission>) -> StatusCode {
    // An absent "message" field is not an error; log it as empty.
    let message = submission.message.unwrap_or_default();

    info!(msg = "Client log received", message = %message);

    StatusCode::NO_CONTENT
}
