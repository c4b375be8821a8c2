use std::{fs, path::PathBuf, sync::Arc};

use serde_json::{json, Value};
use tokio::sync::RwLock;

use crate::app::{envy::Envy, errors::DefaultApiError, models::api_error::ApiError};

pub const CREDENTIAL_KEY: &str = "replicate_token";
pub const CREDENTIAL_FILE: &str = "credentials.json";

pub type CredentialListener = Arc<dyn Fn(Option<&str>) + Send + Sync>;

/// File-backed store for the single Replicate API token, with an explicit
/// subscription interface for components that react to credential changes.
#[derive(Clone)]
pub struct CredentialStore {
    path: PathBuf,
    token: Arc<RwLock<Option<String>>>,
    fallback: Option<String>,
    listeners: Arc<RwLock<Vec<CredentialListener>>>,
}

impl CredentialStore {
    pub fn load(envy: &Envy) -> Self {
        let data_dir = envy.data_dir.clone().unwrap_or(".".to_string());
        let path = PathBuf::from(data_dir).join(CREDENTIAL_FILE);
        let token = read_stored_token(&path);

        Self {
            path,
            token: Arc::new(RwLock::new(token)),
            fallback: envy.replicate_api_token.clone(),
            listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Stored token first, environment default second.
    pub async fn resolve(&self) -> Option<String> {
        match self.token.read().await.clone() {
            Some(token) => Some(token),
            None => self.fallback.clone(),
        }
    }

    pub async fn stored(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    pub async fn save(&self, token: &str) -> Result<(), ApiError> {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!(%e);
                return Err(DefaultApiError::InternalServerError.value());
            }
        }

        let contents = json!({ CREDENTIAL_KEY: token }).to_string();
        if let Err(e) = fs::write(&self.path, contents) {
            tracing::error!(%e);
            return Err(DefaultApiError::InternalServerError.value());
        }

        *self.token.write().await = Some(token.to_string());
        self.notify(Some(token)).await;

        Ok(())
    }

    /// Drops the stored token, used whenever a validation probe fails.
    pub async fn invalidate(&self) {
        if self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                tracing::error!(%e);
            }
        }

        *self.token.write().await = None;
        self.notify(None).await;
    }

    pub async fn subscribe(&self, listener: CredentialListener) {
        self.listeners.write().await.push(listener);
    }

    async fn notify(&self, token: Option<&str>) {
        for listener in self.listeners.read().await.iter() {
            listener(token);
        }
    }
}

fn read_stored_token(path: &PathBuf) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    let value: Value = serde_json::from_str(&contents).ok()?;

    value
        .get(CREDENTIAL_KEY)
        .and_then(|v| v.as_str())
        .map(|v| v.to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::app::util::time::current_time_in_millis;

    use super::*;

    fn test_envy(data_dir: &str, fallback: Option<&str>) -> Envy {
        Envy {
            port: None,
            replicate_api_token: fallback.map(|v| v.to_string()),
            data_dir: Some(data_dir.to_string()),
            font_path: None,
            font_url: None,
        }
    }

    fn temp_data_dir() -> String {
        std::env::temp_dir()
            .join(format!("flyer-api-test-{}", current_time_in_millis()))
            .to_string_lossy()
            .to_string()
    }

    #[tokio::test]
    async fn save_persists_and_resolve_prefers_stored_token() {
        let dir = temp_data_dir();
        let store = CredentialStore::load(&test_envy(&dir, Some("env-token")));

        assert_eq!(store.resolve().await, Some("env-token".to_string()));

        store.save("stored-token").await.unwrap();
        assert_eq!(store.resolve().await, Some("stored-token".to_string()));

        // a fresh store sees the persisted token
        let reloaded = CredentialStore::load(&test_envy(&dir, None));
        assert_eq!(reloaded.resolve().await, Some("stored-token".to_string()));

        let _ = fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn invalidate_falls_back_to_env_token() {
        let dir = temp_data_dir();
        let store = CredentialStore::load(&test_envy(&dir, Some("env-token")));

        store.save("stored-token").await.unwrap();
        store.invalidate().await;

        assert_eq!(store.stored().await, None);
        assert_eq!(store.resolve().await, Some("env-token".to_string()));

        let _ = fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn listeners_observe_saves_and_invalidations() {
        let dir = temp_data_dir();
        let store = CredentialStore::load(&test_envy(&dir, None));

        let seen: Arc<Mutex<Vec<Option<String>>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        store
            .subscribe(Arc::new(move |token| {
                sink.lock().unwrap().push(token.map(|t| t.to_string()));
            }))
            .await;

        store.save("r8_token").await.unwrap();
        store.invalidate().await;

        let seen = seen.lock().unwrap();
        assert_eq!(*seen, vec![Some("r8_token".to_string()), None]);

        let _ = fs::remove_dir_all(&dir);
    }
}
