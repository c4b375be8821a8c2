use std::{future::Future, time::Duration};

use axum::http::StatusCode;
use tokio::time::sleep;

use crate::{
    app::{
        errors::DefaultApiError,
        models::api_error::ApiError,
        util::backoff::with_backoff,
    },
    credentials::errors::CredentialApiError,
    flyers::errors::GenerationApiError,
    proxy::{self, dtos::proxy_request_dto::ProxyRequestDto, structs::proxy_response::ProxyResponse},
    AppState,
};

use super::{
    config::{
        GUIDANCE_SCALE, MAX_POLL_ATTEMPTS, NEGATIVE_PROMPT, NUM_INFERENCE_STEPS, OUTPUT_HEIGHT,
        OUTPUT_WIDTH, POLL_INTERVAL_MS,
    },
    enums::{
        replicate_model_version::ReplicateModelVersion,
        replicate_prediction_status::ReplicatePredictionStatus,
    },
    models::input_spec::{InputSpec, InputStableDiffusionXl},
    structs::replicate_prediction_response::ReplicatePredictionResponse,
};

/// Cheap authenticated request against the models listing. Used both as the
/// pre-generation probe and when saving a token.
pub async fn validate_api_connection(token: &str) -> bool {
    let dto = ProxyRequestDto::new("models", "GET", None, token);

    match proxy::service::forward(&dto).await {
        Ok(res) => res.ok() && !res.body.is_null(),
        Err(e) => {
            tracing::error!("validate_api_connection: {}", e.message);
            false
        }
    }
}

/// Runs a full generation: resolve credentials, probe them, submit the job,
/// then poll until it settles. Returns the output image urls.
pub async fn generate_flyer_image(
    prompt: &str,
    state: &AppState,
) -> Result<Vec<String>, ApiError> {
    let Some(token) = state.credentials.resolve().await
    else {
        return Err(CredentialApiError::CredentialMissing.value());
    };

    tracing::debug!("testing api connection");
    if !validate_api_connection(&token).await {
        state.credentials.invalidate().await;
        return Err(CredentialApiError::AuthenticationFailed.value());
    }

    tracing::debug!("initiating image generation");
    let prediction = with_backoff(|| create_prediction(prompt, &token)).await?;

    // A 200 submission can still carry an inline error; that is fatal, not a
    // retryable transport failure.
    if let Some(error) = &prediction.error {
        if !error.is_empty() {
            return Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: error.to_string(),
            });
        }
    }

    tracing::debug!("generation initiated, prediction id: {}", prediction.id);
    poll_prediction(|| get_prediction_by_id(&prediction.id, &token)).await
}

async fn create_prediction(
    prompt: &str,
    token: &str,
) -> Result<ReplicatePredictionResponse, ApiError> {
    let input_spec = provide_input_spec(prompt);
    let payload = match serde_json::to_value(&input_spec) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!("create_prediction: {:?}", e);
            return Err(DefaultApiError::InternalServerError.value());
        }
    };

    let dto = ProxyRequestDto::new("predictions", "POST", Some(payload), token);
    let res = proxy::service::forward(&dto).await?;

    parse_prediction(res)
}

async fn get_prediction_by_id(
    id: &str,
    token: &str,
) -> Result<ReplicatePredictionResponse, ApiError> {
    let endpoint = format!("predictions/{}", id);
    let dto = ProxyRequestDto::new(&endpoint, "GET", None, token);
    let res = proxy::service::forward(&dto).await?;

    parse_prediction(res)
}

fn parse_prediction(res: ProxyResponse) -> Result<ReplicatePredictionResponse, ApiError> {
    if !res.ok() {
        return Err(ApiError {
            code: StatusCode::from_u16(res.status)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            message: res
                .error_message()
                .unwrap_or_else(|| "API request failed.".to_string()),
        });
    }

    match serde_json::from_value::<ReplicatePredictionResponse>(res.body.clone()) {
        Ok(prediction) => Ok(prediction),
        Err(_) => {
            tracing::warn!("parse_prediction (1): {:?}", res.body);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

fn provide_input_spec(prompt: &str) -> InputSpec {
    let input = InputStableDiffusionXl {
        prompt: prompt.to_string(),
        negative_prompt: NEGATIVE_PROMPT.to_string(),
        num_inference_steps: NUM_INFERENCE_STEPS,
        guidance_scale: GUIDANCE_SCALE,
        width: OUTPUT_WIDTH,
        height: OUTPUT_HEIGHT,
    };

    InputSpec {
        version: ReplicateModelVersion::StableDiffusionXl.value().to_string(),
        input: serde_json::json!(input),
    }
}

/// Polls `fetch` once per second until the prediction settles or the attempt
/// budget runs out. Each fetch goes through the retry wrapper, so transient
/// transport failures do not consume poll attempts.
pub async fn poll_prediction<F, Fut>(mut fetch: F) -> Result<Vec<String>, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<ReplicatePredictionResponse, ApiError>>,
{
    let mut attempts: u32 = 0;

    while attempts < MAX_POLL_ATTEMPTS {
        let prediction = with_backoff(&mut fetch).await?;

        tracing::debug!("generation status: {}", prediction.status);

        if prediction.status == ReplicatePredictionStatus::Succeeded.value() {
            return match prediction.output {
                Some(output) if !output.is_empty() => Ok(output),
                _ => Err(GenerationApiError::NoImagesGenerated.value()),
            };
        }

        if prediction.status == ReplicatePredictionStatus::Failed.value() {
            return Err(match prediction.error {
                Some(error) if !error.is_empty() => ApiError {
                    code: StatusCode::INTERNAL_SERVER_ERROR,
                    message: error,
                },
                _ => GenerationApiError::Failed.value(),
            });
        }

        if prediction.status == ReplicatePredictionStatus::Canceled.value() {
            return Err(GenerationApiError::Canceled.value());
        }

        attempts += 1;
        sleep(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }

    Err(GenerationApiError::TimedOut.value())
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicU32, Ordering},
        Arc,
    };

    use super::*;

    fn prediction(status: &str) -> ReplicatePredictionResponse {
        ReplicatePredictionResponse {
            id: "p1".to_string(),
            version: None,
            status: status.to_string(),
            input: None,
            output: None,
            error: None,
            logs: None,
        }
    }

    #[test]
    fn input_spec_carries_the_fixed_generation_request() {
        let spec = provide_input_spec("a dark warehouse");
        let value = serde_json::json!(spec);

        assert_eq!(
            value["version"],
            "39ed52f2a78e934b3ba6e2a89f5b1c712de7dfea535525255b1aa35c5565e08b"
        );
        assert_eq!(value["input"]["prompt"], "a dark warehouse");
        assert_eq!(value["input"]["negative_prompt"], NEGATIVE_PROMPT);
        assert_eq!(value["input"]["num_inference_steps"], 30);
        assert_eq!(value["input"]["guidance_scale"], 7.5);
        assert_eq!(value["input"]["width"], 768);
        assert_eq!(value["input"]["height"], 1024);
    }

    #[tokio::test(start_paused = true)]
    async fn polling_returns_output_once_succeeded() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = count.clone();

        let start = tokio::time::Instant::now();
        let result = poll_prediction(move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 2 {
                    Ok(prediction("processing"))
                } else {
                    let mut done = prediction("succeeded");
                    done.output = Some(vec!["https://img.example/out.png".to_string()]);
                    Ok(done)
                }
            }
        })
        .await;

        assert_eq!(
            result.unwrap(),
            vec!["https://img.example/out.png".to_string()]
        );
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert_eq!(start.elapsed(), Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn polling_times_out_after_sixty_attempts() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = count.clone();

        let result = poll_prediction(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok(prediction("processing")) }
        })
        .await;

        assert_eq!(
            result.unwrap_err(),
            GenerationApiError::TimedOut.value()
        );
        assert_eq!(count.load(Ordering::SeqCst), 60);
    }

    #[tokio::test]
    async fn failed_prediction_surfaces_the_provider_message() {
        let result = poll_prediction(|| async {
            let mut failed = prediction("failed");
            failed.error = Some("NSFW content detected".to_string());
            Ok(failed)
        })
        .await;

        let e = result.unwrap_err();
        assert_eq!(e.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message, "NSFW content detected");
    }

    #[tokio::test]
    async fn failed_prediction_without_detail_uses_the_generic_message() {
        let result = poll_prediction(|| async { Ok(prediction("failed")) }).await;

        assert_eq!(result.unwrap_err(), GenerationApiError::Failed.value());
    }

    #[tokio::test]
    async fn canceled_prediction_is_an_error() {
        let result = poll_prediction(|| async { Ok(prediction("canceled")) }).await;

        assert_eq!(result.unwrap_err(), GenerationApiError::Canceled.value());
    }

    #[tokio::test]
    async fn succeeded_without_output_is_an_error() {
        let result = poll_prediction(|| async {
            let mut done = prediction("succeeded");
            done.output = Some(vec![]);
            Ok(done)
        })
        .await;

        assert_eq!(
            result.unwrap_err(),
            GenerationApiError::NoImagesGenerated.value()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn transient_poll_failures_do_not_consume_poll_attempts() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = count.clone();

        let result = poll_prediction(move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if n == 0 {
                    Err(ApiError {
                        code: StatusCode::INTERNAL_SERVER_ERROR,
                        message: "Proxy error (timeout): deadline exceeded".to_string(),
                    })
                } else {
                    let mut done = prediction("succeeded");
                    done.output = Some(vec!["https://img.example/out.png".to_string()]);
                    Ok(done)
                }
            }
        })
        .await;

        assert!(result.is_ok());
        // One failed fetch retried by the wrapper plus the successful one.
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
