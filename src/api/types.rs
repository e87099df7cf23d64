use serde::Serialize;

/// `{"error": "..."}` body of JSON error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
    pub message: &'static str,
}

impl HealthDto {
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            status: "OK",
            message: "Server is running",
        }
    }
}
