use serde::Deserialize;
use serde_json::Value;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Not authenticated, sign in again.")]
    Unauthorized,
    #[error("Backend answered {status}: {detail}")]
    Status { status: u16, detail: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Value,
}

impl ApiError {
    /// Error of a non-2xx answer other than 401.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            detail: detail_of(body),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Status { status, .. } => Some(*status),
        }
    }
}

/// Human-readable text of an error body. The backend answers
/// `{"detail": "..."}` for handled errors and `{"detail": [{"msg": ...}]}`
/// for validation errors; anything else is shown as it came.
fn detail_of(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body).map(|b| b.detail) {
        Ok(Value::String(detail)) => detail,
        Ok(Value::Array(items)) => items
            .iter()
            .map(|item| match item.get("msg").and_then(Value::as_str) {
                Some(msg) => msg.to_string(),
                None => item.to_string(),
            })
            .collect::<Vec<_>>()
            .join("; "),
        Ok(other) => other.to_string(),
        Err(_) => body.trim().to_string(),
    }
}
