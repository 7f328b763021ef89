use crate::{
    generations::{
        enums::{generation_mode::GenerationMode, workflow_status::WorkflowStatus},
        errors::GenerationsApiError,
    },
    inputs::models::generation_request::GenerationRequest,
};

use super::{
    image_artifact::ImageArtifact, recipe_artifact::RecipeArtifact,
    request_failure::RequestFailure,
};

/// The orchestrator's state: one status tag plus the two artifact slots.
///
/// Fields are private so every change goes through a transition below.
/// Each `begin_*` is the synchronous half of a call, each `complete_*`
/// commits its single terminal outcome.
#[derive(Debug, Clone)]
pub struct Workflow {
    mode: GenerationMode,
    status: WorkflowStatus,
    image: Option<ImageArtifact>,
    recipe: Option<RecipeArtifact>,
    origin: Option<GenerationRequest>,
}

impl Workflow {
    pub fn new(mode: GenerationMode) -> Self {
        return Self {
            mode,
            status: WorkflowStatus::Idle,
            image: None,
            recipe: None,
            origin: None,
        };
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    pub fn status(&self) -> &WorkflowStatus {
        &self.status
    }

    pub fn image(&self) -> Option<&ImageArtifact> {
        self.image.as_ref()
    }

    pub fn recipe(&self) -> Option<&RecipeArtifact> {
        self.recipe.as_ref()
    }

    pub fn has_artifacts(&self) -> bool {
        self.image.is_some() || self.recipe.is_some()
    }

    pub fn can_submit(&self) -> bool {
        !self.status.is_loading()
    }

    pub fn can_request_recipe(&self) -> bool {
        self.check_recipe_request().is_ok()
    }

    pub fn begin_image_request(
        &mut self,
        request: GenerationRequest,
    ) -> Result<(), GenerationsApiError> {
        if self.status.is_loading() {
            return Err(GenerationsApiError::WorkflowBusy);
        }

        self.image = None;
        self.recipe = None;
        self.origin = Some(request);
        self.status = WorkflowStatus::GeneratingImage;

        Ok(())
    }

    pub fn complete_image_request(
        &mut self,
        result: Result<ImageArtifact, RequestFailure>,
    ) -> Result<(), GenerationsApiError> {
        if self.status != WorkflowStatus::GeneratingImage || self.mode != GenerationMode::Split {
            return Err(GenerationsApiError::InvalidTransition);
        }

        match result {
            Ok(image) => {
                self.image = Some(image);
                self.status = WorkflowStatus::Ready;
            }
            Err(failure) => {
                self.status = WorkflowStatus::Error(failure.message);
            }
        }

        Ok(())
    }

    pub fn complete_creation(
        &mut self,
        result: Result<(ImageArtifact, RecipeArtifact), RequestFailure>,
    ) -> Result<(), GenerationsApiError> {
        if self.status != WorkflowStatus::GeneratingImage || self.mode != GenerationMode::Combined
        {
            return Err(GenerationsApiError::InvalidTransition);
        }

        match result {
            Ok((image, recipe)) => {
                self.image = Some(image);
                self.recipe = Some(recipe);
                self.status = WorkflowStatus::Ready;
            }
            Err(failure) => {
                self.status = WorkflowStatus::Error(failure.message);
            }
        }

        Ok(())
    }

    /// Returns the request the current image was generated from.
    pub fn begin_recipe_request(&mut self) -> Result<GenerationRequest, GenerationsApiError> {
        self.check_recipe_request()?;

        let Some(origin) = self.origin.clone() else {
            return Err(GenerationsApiError::NoImage);
        };

        self.status = WorkflowStatus::GeneratingRecipe;

        Ok(origin)
    }

    pub fn complete_recipe_request(
        &mut self,
        result: Result<RecipeArtifact, RequestFailure>,
    ) -> Result<(), GenerationsApiError> {
        if self.status != WorkflowStatus::GeneratingRecipe {
            return Err(GenerationsApiError::InvalidTransition);
        }

        match result {
            Ok(recipe) => {
                self.recipe = Some(recipe);
                self.status = WorkflowStatus::Ready;
            }
            // the image stays: only the recipe call failed
            Err(failure) => {
                self.status = WorkflowStatus::Error(failure.message);
            }
        }

        Ok(())
    }

    fn check_recipe_request(&self) -> Result<(), GenerationsApiError> {
        if self.mode == GenerationMode::Combined {
            return Err(GenerationsApiError::RecipeUnavailable);
        }
        if self.status.is_loading() {
            return Err(GenerationsApiError::WorkflowBusy);
        }
        if self.image.is_none() {
            return Err(GenerationsApiError::NoImage);
        }
        if self.recipe.is_some() {
            return Err(GenerationsApiError::RecipeAlreadyExists);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::enums::cooking_style::CookingStyle;

    fn request() -> GenerationRequest {
        GenerationRequest {
            ingredients: "กุ้ง".to_string(),
            quantity: "2 ตัว".to_string(),
            style: CookingStyle::SpicyIsaan,
        }
    }

    fn image(url: &str) -> ImageArtifact {
        ImageArtifact {
            url: url.to_string(),
        }
    }

    fn recipe() -> RecipeArtifact {
        RecipeArtifact {
            menu_name: "ต้มแซ่บกุ้ง".to_string(),
            instructions: "...".to_string(),
        }
    }

    fn ready_with_image() -> Workflow {
        let mut workflow = Workflow::new(GenerationMode::Split);
        workflow.begin_image_request(request()).unwrap();
        workflow
            .complete_image_request(Ok(image("http://x/1.png")))
            .unwrap();
        workflow
    }

    #[test]
    fn starts_idle_and_empty() {
        let workflow = Workflow::new(GenerationMode::Split);

        assert_eq!(workflow.status(), &WorkflowStatus::Idle);
        assert!(!workflow.has_artifacts());
        assert!(workflow.can_submit());
        assert!(!workflow.can_request_recipe());
    }

    #[test]
    fn image_success_stores_only_the_image() {
        let workflow = ready_with_image();

        assert_eq!(workflow.status(), &WorkflowStatus::Ready);
        assert_eq!(workflow.image(), Some(&image("http://x/1.png")));
        assert!(workflow.recipe().is_none());
        assert!(workflow.can_request_recipe());
    }

    #[test]
    fn image_failure_sets_error_and_leaves_slot_empty() {
        let mut workflow = Workflow::new(GenerationMode::Split);
        workflow.begin_image_request(request()).unwrap();
        workflow
            .complete_image_request(Err(RequestFailure::new("Failed to generate image")))
            .unwrap();

        assert_eq!(
            workflow.status(),
            &WorkflowStatus::Error("Failed to generate image".to_string())
        );
        assert!(workflow.image().is_none());
        assert!(!workflow.can_request_recipe());
    }

    #[test]
    fn second_submit_while_generating_is_rejected() {
        let mut workflow = Workflow::new(GenerationMode::Split);
        workflow.begin_image_request(request()).unwrap();

        assert_eq!(
            workflow.begin_image_request(request()),
            Err(GenerationsApiError::WorkflowBusy)
        );
        assert!(!workflow.can_submit());
    }

    #[test]
    fn resubmit_clears_both_artifacts_before_resolving() {
        let mut workflow = ready_with_image();
        workflow.begin_recipe_request().unwrap();
        workflow.complete_recipe_request(Ok(recipe())).unwrap();
        assert!(workflow.recipe().is_some());

        workflow.begin_image_request(request()).unwrap();

        assert_eq!(workflow.status(), &WorkflowStatus::GeneratingImage);
        assert!(workflow.image().is_none());
        assert!(workflow.recipe().is_none());
        assert!(!workflow.has_artifacts());
    }

    #[test]
    fn resubmit_clears_previous_error() {
        let mut workflow = Workflow::new(GenerationMode::Split);
        workflow.begin_image_request(request()).unwrap();
        workflow
            .complete_image_request(Err(RequestFailure::fallback()))
            .unwrap();

        workflow.begin_image_request(request()).unwrap();
        assert_eq!(workflow.status().error_message(), None);

        workflow
            .complete_image_request(Ok(image("http://x/2.png")))
            .unwrap();
        assert_eq!(workflow.status(), &WorkflowStatus::Ready);
    }

    #[test]
    fn recipe_request_keeps_image_visible() {
        let mut workflow = ready_with_image();

        let origin = workflow.begin_recipe_request().unwrap();

        assert_eq!(origin, request());
        assert_eq!(workflow.status(), &WorkflowStatus::GeneratingRecipe);
        assert!(workflow.image().is_some());
        assert!(!workflow.can_submit());
    }

    #[test]
    fn recipe_failure_preserves_image() {
        let mut workflow = ready_with_image();
        workflow.begin_recipe_request().unwrap();
        workflow
            .complete_recipe_request(Err(RequestFailure::new("quota")))
            .unwrap();

        assert_eq!(workflow.status().error_message(), Some("quota"));
        assert_eq!(workflow.image(), Some(&image("http://x/1.png")));
        assert!(workflow.recipe().is_none());
        assert!(workflow.can_request_recipe());
    }

    #[test]
    fn recipe_requires_image_and_no_recipe() {
        let mut workflow = Workflow::new(GenerationMode::Split);
        assert_eq!(
            workflow.begin_recipe_request(),
            Err(GenerationsApiError::NoImage)
        );

        let mut workflow = ready_with_image();
        workflow.begin_recipe_request().unwrap();
        workflow.complete_recipe_request(Ok(recipe())).unwrap();
        assert_eq!(
            workflow.begin_recipe_request(),
            Err(GenerationsApiError::RecipeAlreadyExists)
        );
    }

    #[test]
    fn combined_success_stores_both() {
        let mut workflow = Workflow::new(GenerationMode::Combined);
        workflow.begin_image_request(request()).unwrap();
        workflow
            .complete_creation(Ok((image("data:image/png;base64,AA=="), recipe())))
            .unwrap();

        assert_eq!(workflow.status(), &WorkflowStatus::Ready);
        assert!(workflow.image().is_some());
        assert!(workflow.recipe().is_some());
        assert_eq!(
            workflow.begin_recipe_request(),
            Err(GenerationsApiError::RecipeUnavailable)
        );
    }

    #[test]
    fn completions_out_of_turn_are_refused() {
        let mut workflow = Workflow::new(GenerationMode::Split);

        assert_eq!(
            workflow.complete_image_request(Ok(image("http://x/1.png"))),
            Err(GenerationsApiError::InvalidTransition)
        );
        assert_eq!(
            workflow.complete_recipe_request(Ok(recipe())),
            Err(GenerationsApiError::InvalidTransition)
        );
        assert_eq!(workflow.status(), &WorkflowStatus::Idle);
        assert!(!workflow.has_artifacts());
    }
}
