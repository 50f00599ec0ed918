use serde::Deserialize;

/// Body of a `POST /log` submission.
#[derive(Debug, Deserialize)]
pub struct LogSubmission {
    pub message: Option<String>,
}
