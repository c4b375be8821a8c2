use std::{future::Future, time::Duration};

use tokio::time::sleep;

use crate::app::models::api_error::ApiError;

pub const MAX_RETRIES: u32 = 3;
pub const INITIAL_DELAY_MS: u64 = 1000;

/// Invalid tokens are fatal; retrying them only burns the attempt budget.
pub fn is_auth_error(e: &ApiError) -> bool {
    e.message.contains("Invalid API token")
}

pub async fn with_backoff<T, F, Fut>(operation: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    with_backoff_config(
        operation,
        MAX_RETRIES,
        Duration::from_millis(INITIAL_DELAY_MS),
    )
    .await
}

/// Runs `operation`, retrying failures with doubling delays until `max_retries`
/// is exhausted. Authentication failures surface immediately, and the original
/// error is always returned unwrapped.
pub async fn with_backoff_config<T, F, Fut>(
    mut operation: F,
    max_retries: u32,
    initial_delay: Duration,
) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut retries_remaining = max_retries;
    let mut delay = initial_delay;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                if retries_remaining == 0 || is_auth_error(&e) {
                    return Err(e);
                }

                tracing::warn!(
                    "retrying operation, {} attempts remaining: {}",
                    retries_remaining,
                    e.message
                );
                sleep(delay).await;
                retries_remaining -= 1;
                delay *= 2;
            }
        }
    }
}
