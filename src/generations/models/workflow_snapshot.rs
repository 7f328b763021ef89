use serde::Serialize;

use crate::{
    app::models::session::Session,
    generations::enums::generation_mode::GenerationMode,
    inputs::models::input_model::InputModel,
};

use super::{image_artifact::ImageArtifact, recipe_artifact::RecipeArtifact};

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowSnapshot {
    pub mode: GenerationMode,
    pub status: String,
    pub error: Option<String>,
    pub image: Option<ImageArtifact>,
    pub recipe: Option<RecipeArtifact>,
    pub inputs: InputModel,
    pub can_submit: bool,
    pub can_request_recipe: bool,
    pub unsaved: bool,
}

impl WorkflowSnapshot {
    pub fn new(session: &Session) -> Self {
        let workflow = &session.workflow;

        return Self {
            mode: workflow.mode(),
            status: workflow.status().value().to_string(),
            error: workflow.status().error_message().map(|m| m.to_string()),
            image: workflow.image().cloned(),
            recipe: workflow.recipe().cloned(),
            inputs: session.inputs.clone(),
            can_submit: workflow.can_submit(),
            can_request_recipe: workflow.can_request_recipe(),
            unsaved: session.unload_guard.intercepts(workflow),
        };
    }
}
