use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{dtos::create_flyer_dto::CreateFlyerDto, service};

pub async fn generate_flyer(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<CreateFlyerDto>,
) -> Result<impl IntoResponse, ApiError> {
    match dto.validate() {
        Ok(_) => {
            let flyer = service::generate_flyer(&dto, &state).await?;

            let headers = [
                (header::CONTENT_TYPE, mime::IMAGE_PNG.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", flyer.file_name),
                ),
            ];

            Ok((headers, flyer.bytes))
        }
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}
