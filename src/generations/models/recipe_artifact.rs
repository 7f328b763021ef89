use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeArtifact {
    pub menu_name: String,
    pub instructions: String,
}

impl RecipeArtifact {
    /// Plain-text document handed to the exporter.
    pub fn to_text(&self) -> String {
        format!(
            "เมนู: {}\n\nวิธีทำ:\n{}",
            self.menu_name, self.instructions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_contains_both_fields() {
        let recipe = RecipeArtifact {
            menu_name: "ต้มยำกุ้ง".to_string(),
            instructions: "ต้มน้ำ...".to_string(),
        };

        assert_eq!(recipe.to_text(), "เมนู: ต้มยำกุ้ง\n\nวิธีทำ:\nต้มน้ำ...");
    }
}
