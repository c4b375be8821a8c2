use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{dtos::proxy_request_dto::ProxyRequestDto, service};

pub async fn forward(
    State(_state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<ProxyRequestDto>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    match service::forward(&dto).await {
        Ok(res) => {
            let status =
                StatusCode::from_u16(res.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Ok((status, Json(res.body)))
        }
        Err(e) => Err(e),
    }
}
