use validator::ValidationError;

use super::enums::cooking_style::CookingStyle;

pub mod generation_request_dto;

pub fn validate_style(value: &str) -> Result<(), ValidationError> {
    match CookingStyle::from_value(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("style_validation")),
    }
}
