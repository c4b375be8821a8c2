use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum ProxyApiError {
    InvalidEndpoint,
    InvalidMethod,
}

impl ProxyApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InvalidEndpoint => ApiError {
                code: StatusCode::FORBIDDEN,
                message: "Invalid endpoint requested.".to_string(),
            },
            Self::InvalidMethod => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid HTTP method.".to_string(),
            },
        }
    }
}
