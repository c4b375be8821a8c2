use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::flyers::enums::genre::Genre;

lazy_static! {
    static ref DATE_REGEX: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFlyerDto {
    #[validate(length(
        min = 1,
        max = 100,
        message = "event_name must be between 1 and 100 characters."
    ))]
    pub event_name: String,
    #[validate(regex(path = "DATE_REGEX", message = "date must use the YYYY-MM-DD format."))]
    pub date: String,
    #[validate(length(
        min = 1,
        max = 100,
        message = "location must be between 1 and 100 characters."
    ))]
    pub location: String,
    #[validate(length(
        min = 1,
        max = 1000,
        message = "lineup must be between 1 and 1000 characters."
    ))]
    pub lineup: String,
    pub genre: Genre,
    #[validate(length(
        max = 1000,
        message = "custom_prompt must be at most 1000 characters."
    ))]
    pub custom_prompt: Option<String>,
    pub format: Option<String>,
    #[validate(range(
        min = 0.5,
        max = 2.0,
        message = "display_scale must be between 0.5 and 2.0."
    ))]
    pub display_scale: Option<f32>,
}

impl CreateFlyerDto {
    pub fn sanitized(&self) -> Self {
        Self {
            event_name: self.event_name.trim().to_string(),
            date: self.date.trim().to_string(),
            location: self.location.trim().to_string(),
            lineup: self.lineup.trim().to_string(),
            genre: self.genre,
            custom_prompt: self
                .custom_prompt
                .as_ref()
                .map(|prompt| prompt.trim().replace('\n', "").replace('\r', "")),
            format: self.format.as_ref().map(|format| format.trim().to_string()),
            display_scale: self.display_scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> CreateFlyerDto {
        CreateFlyerDto {
            event_name: "Neon Nights".to_string(),
            date: "2025-06-01".to_string(),
            location: "Warehouse 7".to_string(),
            lineup: "DJ A, DJ B".to_string(),
            genre: Genre::TechnoHardTechnoIndustrial,
            custom_prompt: None,
            format: None,
            display_scale: None,
        }
    }

    #[test]
    fn accepts_a_complete_request() {
        assert!(dto().validate().is_ok());
    }

    #[test]
    fn rejects_malformed_dates() {
        let mut invalid = dto();
        invalid.date = "01.06.2025".to_string();
        assert!(invalid.validate().is_err());

        let mut invalid = dto();
        invalid.date = "2025-6-1".to_string();
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_display_scale() {
        let mut invalid = dto();
        invalid.display_scale = Some(2.5);
        assert!(invalid.validate().is_err());

        let mut valid = dto();
        valid.display_scale = Some(0.5);
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn sanitized_strips_whitespace_and_newlines() {
        let mut messy = dto();
        messy.event_name = "  Neon Nights  ".to_string();
        messy.custom_prompt = Some("smoke\nmachines".to_string());

        let clean = messy.sanitized();
        assert_eq!(clean.event_name, "Neon Nights");
        assert_eq!(clean.custom_prompt.as_deref(), Some("smokemachines"));
    }
}
