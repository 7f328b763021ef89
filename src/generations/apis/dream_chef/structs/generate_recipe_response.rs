use serde::Deserialize;

use crate::generations::models::recipe_artifact::RecipeArtifact;

#[derive(Debug, Deserialize)]
pub struct GenerateRecipeResponse {
    #[serde(rename(deserialize = "menu_name"))]
    pub menu_name: String,
    #[serde(rename(deserialize = "instructions"))]
    pub instructions: String,
}

impl GenerateRecipeResponse {
    pub fn into_artifact(self) -> RecipeArtifact {
        RecipeArtifact {
            menu_name: self.menu_name,
            instructions: self.instructions,
        }
    }
}
