use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum GenerationApiError {
    NoImagesGenerated,
    Failed,
    Canceled,
    TimedOut,
    InvalidImageData,
}

impl GenerationApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::NoImagesGenerated => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Replicate generated no images.".to_string(),
            },
            Self::Failed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Image generation failed. Please try again.".to_string(),
            },
            Self::Canceled => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Image generation was canceled. Please try again.".to_string(),
            },
            Self::TimedOut => ApiError {
                code: StatusCode::GATEWAY_TIMEOUT,
                message: "Timeout: Image generation took too long. Please try again."
                    .to_string(),
            },
            Self::InvalidImageData => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to decode generated image.".to_string(),
            },
        }
    }
}
