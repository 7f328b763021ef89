use serde::Serialize;
use validator::Validate;

use crate::{
    generations::{enums::generation_mode::GenerationMode, errors::GenerationsApiError},
    inputs::{dtos::generation_request_dto::GenerationRequestDto, enums::cooking_style::CookingStyle},
};

/// Body sent to the generation service. Built once per dispatch and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub ingredients: String,
    pub quantity: String,
    pub style: CookingStyle,
}

impl GenerationRequest {
    pub fn from_dto(
        dto: &GenerationRequestDto,
        mode: &GenerationMode,
    ) -> Result<Self, GenerationsApiError> {
        let dto = dto.sanitized();

        if let Err(e) = dto.validate() {
            tracing::debug!("generation request rejected: {}", e);
            return Err(GenerationsApiError::ValidationFailed(
                mode.validation_notice().to_string(),
            ));
        }

        if mode.requires_quantity() && dto.quantity.is_empty() {
            return Err(GenerationsApiError::ValidationFailed(
                mode.validation_notice().to_string(),
            ));
        }

        let Some(style) = CookingStyle::from_value(&dto.style) else {
            return Err(GenerationsApiError::ValidationFailed(
                mode.validation_notice().to_string(),
            ));
        };

        Ok(Self {
            ingredients: dto.ingredients,
            quantity: dto.quantity,
            style,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(ingredients: &str, quantity: &str) -> GenerationRequestDto {
        GenerationRequestDto {
            ingredients: ingredients.to_string(),
            quantity: quantity.to_string(),
            style: CookingStyle::SpicyIsaan.value().to_string(),
        }
    }

    #[test]
    fn split_mode_allows_empty_quantity() {
        let request = GenerationRequest::from_dto(&dto(" กุ้ง ", ""), &GenerationMode::Split).unwrap();

        assert_eq!(request.ingredients, "กุ้ง");
        assert_eq!(request.quantity, "");
        assert_eq!(request.style, CookingStyle::SpicyIsaan);
    }

    #[test]
    fn combined_mode_requires_quantity() {
        let result = GenerationRequest::from_dto(&dto("กุ้ง", " "), &GenerationMode::Combined);

        assert!(matches!(result, Err(GenerationsApiError::ValidationFailed(_))));
    }

    #[test]
    fn empty_ingredients_rejected_in_every_mode() {
        for mode in [GenerationMode::Split, GenerationMode::Combined] {
            let result = GenerationRequest::from_dto(&dto("", "2 ตัว"), &mode);
            assert!(matches!(result, Err(GenerationsApiError::ValidationFailed(_))));
        }
    }

    #[test]
    fn serializes_wire_body() {
        let request = GenerationRequest::from_dto(&dto("กุ้ง", "2 ตัว"), &GenerationMode::Split).unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "ingredients": "กุ้ง",
                "quantity": "2 ตัว",
                "style": "Spicy Isaan style with sticky rice"
            })
        );
    }
}
