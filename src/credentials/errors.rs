use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum CredentialApiError {
    CredentialMissing,
    AuthenticationFailed,
}

impl CredentialApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::CredentialMissing => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Missing API token. Please configure your Replicate API token first."
                    .to_string(),
            },
            Self::AuthenticationFailed => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message:
                    "Invalid API token. Please check your Replicate API token and try again."
                        .to_string(),
            },
        }
    }
}
