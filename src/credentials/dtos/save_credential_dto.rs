use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaveCredentialDto {
    #[validate(length(min = 1, message = "token must not be empty."))]
    pub token: String,
}

impl SaveCredentialDto {
    pub fn sanitized(&self) -> Self {
        Self {
            token: self.token.trim().to_string(),
        }
    }
}
