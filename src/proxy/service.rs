use axum::http::StatusCode;
use reqwest::header;
use serde_json::{json, Value};

use crate::app::models::api_error::ApiError;

use super::{
    config::API_URL, dtos::proxy_request_dto::ProxyRequestDto, errors::ProxyApiError,
    structs::proxy_response::ProxyResponse,
};

pub static ALLOWED_ENDPOINTS: [&str; 6] = [
    "predictions",
    "predictions/",
    "collections",
    "deployments",
    "models",
    "trainings",
];

pub static ALLOWED_METHODS: [&str; 4] = ["GET", "POST", "HEAD", "DELETE"];

/// Prefix allow-list plus a parent-traversal check so a textual prefix match
/// cannot be abused to reach arbitrary upstream routes.
pub fn validate_endpoint(endpoint: &str) -> bool {
    ALLOWED_ENDPOINTS
        .iter()
        .any(|allowed| endpoint.starts_with(allowed))
        && !endpoint.contains("..")
}

pub fn validate_method(method: &str) -> bool {
    ALLOWED_METHODS.contains(&method.to_uppercase().as_str())
}

pub async fn forward(dto: &ProxyRequestDto) -> Result<ProxyResponse, ApiError> {
    let endpoint = dto.endpoint.as_deref().filter(|e| !e.is_empty());
    let token = dto.token.as_deref().filter(|t| !t.is_empty());

    let (Some(endpoint), Some(token)) = (endpoint, token) else {
        return Err(missing_params_error(endpoint.is_none(), token.is_none()));
    };

    if !validate_endpoint(endpoint) {
        return Err(ProxyApiError::InvalidEndpoint.value());
    }

    let method = dto
        .method
        .as_deref()
        .unwrap_or("POST")
        .to_uppercase();
    if !validate_method(&method) {
        return Err(ProxyApiError::InvalidMethod.value());
    }

    let Ok(method) = reqwest::Method::from_bytes(method.as_bytes()) else {
        return Err(ProxyApiError::InvalidMethod.value());
    };

    let mut headers = header::HeaderMap::new();
    headers.insert("Content-Type", "application/json".parse().unwrap());
    let Ok(authorization) = format!("Token {}", token).parse() else {
        return Err(missing_params_error(false, true));
    };
    headers.insert("Authorization", authorization);

    let url = format!("{}/{}", API_URL, endpoint.trim_start_matches('/'));

    let client = reqwest::Client::new();
    let is_head = method == reqwest::Method::HEAD;
    let mut request = client.request(method.clone(), url).headers(headers);

    if method == reqwest::Method::POST
        || method == reqwest::Method::PUT
        || method == reqwest::Method::PATCH
    {
        if let Some(payload) = &dto.payload {
            request = request.json(payload);
        }
    }

    match request.send().await {
        Ok(res) => {
            let status = res.status().as_u16();

            if is_head {
                return Ok(ProxyResponse {
                    status,
                    body: json!({ "status": status, "ok": res.status().is_success() }),
                });
            }

            let is_json = res
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.contains("application/json"))
                .unwrap_or(false);

            let body = if is_json {
                match res.json::<Value>().await {
                    Ok(body) => body,
                    Err(e) => {
                        tracing::warn!("forward (1): {:?}", e);
                        return Err(transport_error(&e));
                    }
                }
            } else {
                match res.text().await {
                    Ok(text) => json!({ "message": text }),
                    Err(e) => {
                        tracing::warn!("forward (2): {:?}", e);
                        return Err(transport_error(&e));
                    }
                }
            };

            Ok(ProxyResponse { status, body })
        }
        Err(e) => {
            tracing::warn!("forward (3): {:?}", e);
            Err(transport_error(&e))
        }
    }
}

fn missing_params_error(endpoint_missing: bool, token_missing: bool) -> ApiError {
    let mut missing = Vec::new();
    if endpoint_missing {
        missing.push("endpoint");
    }
    if token_missing {
        missing.push("token");
    }

    ApiError {
        code: StatusCode::BAD_REQUEST,
        message: format!("Missing required parameters: {}.", missing.join(", ")),
    }
}

fn transport_error(e: &reqwest::Error) -> ApiError {
    let classification = if e.is_timeout() {
        "timeout"
    } else if e.is_connect() {
        "connect"
    } else if e.is_decode() {
        "decode"
    } else {
        "request"
    };

    ApiError {
        code: StatusCode::INTERNAL_SERVER_ERROR,
        message: format!("Proxy error ({}): {}", classification, e),
    }
}
