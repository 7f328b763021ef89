use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::inputs::enums::cooking_style::CookingStyle;

use super::validate_style;

fn default_style() -> String {
    CookingStyle::default().value().to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct GenerationRequestDto {
    #[validate(length(min = 1, message = "ingredients are required."))]
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub quantity: String,
    #[validate(custom = "validate_style")]
    #[serde(default = "default_style")]
    pub style: String,
}

impl Default for GenerationRequestDto {
    fn default() -> Self {
        Self {
            ingredients: String::new(),
            quantity: String::new(),
            style: default_style(),
        }
    }
}

impl GenerationRequestDto {
    pub fn sanitized(&self) -> Self {
        return Self {
            ingredients: self.ingredients.trim().to_string(),
            quantity: self.quantity.trim().to_string(),
            style: self.style.trim().to_string(),
        };
    }
}
