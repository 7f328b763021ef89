use serde::Serialize;

use crate::inputs::dtos::generation_request_dto::GenerationRequestDto;

/// Current form contents. Edits replace the fields as-is; checks happen
/// when a request is built from a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputModel {
    pub ingredients: String,
    pub quantity: String,
    pub style: String,
}

impl InputModel {
    pub fn new() -> Self {
        let dto = GenerationRequestDto::default();

        return Self {
            ingredients: dto.ingredients,
            quantity: dto.quantity,
            style: dto.style,
        };
    }

    pub fn update(&mut self, dto: &GenerationRequestDto) {
        self.ingredients = dto.ingredients.to_string();
        self.quantity = dto.quantity.to_string();
        self.style = dto.style.to_string();
    }

    pub fn snapshot(&self) -> GenerationRequestDto {
        GenerationRequestDto {
            ingredients: self.ingredients.to_string(),
            quantity: self.quantity.to_string(),
            style: self.style.to_string(),
        }
    }
}
