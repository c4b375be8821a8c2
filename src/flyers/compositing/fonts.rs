use std::sync::Arc;

use axum::http::StatusCode;
use tokio::sync::OnceCell;

use crate::app::{envy::Envy, models::api_error::ApiError, util};

pub static DEFAULT_FONT_URL: &str = "https://rsms.me/inter/font-files/InterVariable.ttf";

#[derive(Debug)]
pub struct LoadedFont {
    pub bytes: Vec<u8>,
}

/// Lazily loaded overlay font shared by all render requests. The first
/// generation pays the load cost; everything after reuses the same bytes.
#[derive(Clone)]
pub struct FontLibrary {
    font_path: Option<String>,
    font_url: String,
    loaded: Arc<OnceCell<Arc<LoadedFont>>>,
}

impl FontLibrary {
    pub fn new(envy: &Envy) -> Self {
        Self {
            font_path: envy.font_path.clone(),
            font_url: envy
                .font_url
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_URL.to_string()),
            loaded: Arc::new(OnceCell::new()),
        }
    }

    pub async fn get_or_load(&self) -> Result<Arc<LoadedFont>, ApiError> {
        self.loaded
            .get_or_try_init(|| async {
                let bytes = self.load_bytes().await?;
                tracing::debug!("overlay font loaded, {} bytes", bytes.len());
                Ok(Arc::new(LoadedFont { bytes }))
            })
            .await
            .map(Arc::clone)
    }

    async fn load_bytes(&self) -> Result<Vec<u8>, ApiError> {
        if let Some(path) = &self.font_path {
            return match std::fs::read(path) {
                Ok(bytes) => Ok(bytes),
                Err(e) => {
                    tracing::error!("failed to read font file {}: {}", path, e);
                    Err(ApiError {
                        code: StatusCode::INTERNAL_SERVER_ERROR,
                        message: "Failed to read the configured font file.".to_string(),
                    })
                }
            };
        }

        let bytes = util::reqwest::get_bytes_with_retry(&self.font_url).await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::util::time::current_time_in_millis;

    fn envy_with(font_path: Option<String>, font_url: Option<String>) -> Envy {
        Envy {
            port: None,
            replicate_api_token: None,
            data_dir: None,
            font_path,
            font_url,
        }
    }

    #[tokio::test]
    async fn loads_from_a_configured_path_once() {
        let path = std::env::temp_dir().join(format!("font-{}.ttf", current_time_in_millis()));
        std::fs::write(&path, b"not really a font").unwrap();

        let library = FontLibrary::new(&envy_with(
            Some(path.to_string_lossy().to_string()),
            None,
        ));

        let first = library.get_or_load().await.unwrap();
        assert_eq!(first.bytes, b"not really a font");

        // Deleting the file must not matter once the bytes are cached.
        std::fs::remove_file(&path).unwrap();
        let second = library.get_or_load().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn missing_path_is_an_error() {
        let library = FontLibrary::new(&envy_with(
            Some("/definitely/not/here.ttf".to_string()),
            None,
        ));

        assert!(library.get_or_load().await.is_err());
    }

    #[test]
    fn falls_back_to_the_default_url() {
        let library = FontLibrary::new(&envy_with(None, None));
        assert_eq!(library.font_url, DEFAULT_FONT_URL);
    }
}
