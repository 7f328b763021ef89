use serde::Deserialize;

use super::generate_recipe_response::GenerateRecipeResponse;

#[derive(Debug, Deserialize)]
pub struct GenerateCreationResponse {
    #[serde(rename(deserialize = "image_url"))]
    pub image_url: String,
    /// JSON document `{menu_name, instructions}` encoded as a string.
    #[serde(rename(deserialize = "recipe"))]
    pub recipe: String,
}

impl GenerateCreationResponse {
    pub fn decode_recipe(&self) -> Result<GenerateRecipeResponse, serde_json::Error> {
        let cleaned = self
            .recipe
            .trim()
            .trim_start_matches("```json")
            .trim_start_matches("```")
            .trim_end_matches("```");

        serde_json::from_str(cleaned.trim())
    }
}
