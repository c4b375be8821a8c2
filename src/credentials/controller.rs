use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    flyers::apis::replicate,
    AppState,
};

use super::{dtos::save_credential_dto::SaveCredentialDto, errors::CredentialApiError, service};

pub async fn get_credential_status(State(state): State<AppState>) -> Json<Value> {
    let source = if state.credentials.stored().await.is_some() {
        Some("stored")
    } else if state.credentials.has_fallback() {
        Some("env")
    } else {
        None
    };

    Json(json!({
        "key": service::CREDENTIAL_KEY,
        "configured": source.is_some(),
        "source": source,
    }))
}

pub async fn save_credential(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<SaveCredentialDto>,
) -> Result<(), ApiError> {
    match dto.validate() {
        Ok(_) => {
            let dto = dto.sanitized();

            match replicate::service::validate_api_connection(&dto.token).await {
                true => state.credentials.save(&dto.token).await,
                false => Err(CredentialApiError::AuthenticationFailed.value()),
            }
        }
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn delete_credential(State(state): State<AppState>) -> Result<(), ApiError> {
    state.credentials.invalidate().await;
    Ok(())
}
