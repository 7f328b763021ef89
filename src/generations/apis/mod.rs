use async_trait::async_trait;

use crate::{
    generations::models::{
        image_artifact::ImageArtifact, recipe_artifact::RecipeArtifact,
        request_failure::RequestFailure,
    },
    inputs::models::generation_request::GenerationRequest,
};

pub mod dream_chef;

/// Remote generation service. Implementations never panic on bad
/// responses; every failure comes back as a [`RequestFailure`].
#[async_trait]
pub trait GenerationApi: Send + Sync {
    async fn generate_image(
        &self,
        request: &GenerationRequest,
    ) -> Result<ImageArtifact, RequestFailure>;

    async fn generate_recipe(
        &self,
        request: &GenerationRequest,
    ) -> Result<RecipeArtifact, RequestFailure>;

    async fn generate_creation(
        &self,
        request: &GenerationRequest,
    ) -> Result<(ImageArtifact, RecipeArtifact), RequestFailure>;
}
