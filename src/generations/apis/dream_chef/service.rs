use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    generations::{
        apis::GenerationApi,
        models::{
            image_artifact::ImageArtifact, recipe_artifact::RecipeArtifact,
            request_failure::RequestFailure,
        },
    },
    inputs::models::generation_request::GenerationRequest,
};

use super::{
    config::{
        ERROR_FIELD, GENERATE_CREATION_PATH, GENERATE_IMAGE_PATH, GENERATE_RECIPE_PATH,
        RECIPE_ERROR_FIELD,
    },
    structs::{
        generate_creation_response::GenerateCreationResponse,
        generate_image_response::GenerateImageResponse,
        generate_recipe_response::GenerateRecipeResponse,
    },
};

#[derive(Debug, Clone)]
pub struct DreamChefApi {
    client: reqwest::Client,
    api_url: String,
    base_url: Url,
    error_field: Option<String>,
}

impl DreamChefApi {
    pub fn new(
        client: reqwest::Client,
        api_url: &str,
        error_field: Option<String>,
    ) -> Result<Self, String> {
        let api_url = api_url.trim().trim_end_matches('/').to_string();
        let base_url = match Url::parse(&api_url) {
            Ok(url) => url,
            Err(e) => return Err(format!("invalid api_url {}: {}", api_url, e)),
        };

        Ok(Self {
            client,
            api_url,
            base_url,
            error_field: error_field.filter(|field| !field.trim().is_empty()),
        })
    }

    async fn post(
        &self,
        path: &str,
        request: &GenerationRequest,
        error_fields: &[&str],
    ) -> Result<String, RequestFailure> {
        let url = [self.api_url.as_str(), path].concat();

        let res = match self.client.post(&url).json(request).send().await {
            Ok(res) => res,
            Err(e) => {
                tracing::error!(%e);
                return Err(RequestFailure::new(&e.to_string()));
            }
        };

        let status = res.status();
        let text = match res.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(%e);
                return Err(RequestFailure::new(&e.to_string()));
            }
        };

        if !status.is_success() {
            tracing::error!("{} responded {}", path, status);
            return Err(self.failure_from_body(&text, error_fields));
        }

        Ok(text)
    }

    fn parse<T: DeserializeOwned>(&self, path: &str, text: &str) -> Result<T, RequestFailure> {
        match serde_json::from_str(text) {
            Ok(response) => Ok(response),
            Err(e) => {
                tracing::error!("{} returned an unreadable body: {}", path, e);
                Err(RequestFailure::fallback())
            }
        }
    }

    /// First non-blank string among `error`, the configured field, then
    /// `extra_fields`.
    fn failure_from_body(&self, body: &str, extra_fields: &[&str]) -> RequestFailure {
        let Ok(value) = serde_json::from_str::<Value>(body) else {
            return RequestFailure::fallback();
        };

        let mut fields = vec![ERROR_FIELD];
        if let Some(field) = &self.error_field {
            fields.push(field.as_str());
        }
        fields.extend_from_slice(extra_fields);

        for field in fields {
            let Some(message) = value.get(field).and_then(Value::as_str) else {
                continue;
            };

            if !message.trim().is_empty() {
                return RequestFailure::new(message);
            }
        }

        RequestFailure::fallback()
    }

    /// Relative image paths are served by the generation service itself.
    fn resolve_image_url(&self, image_url: &str) -> Result<ImageArtifact, RequestFailure> {
        let image_url = image_url.trim();

        if image_url.is_empty() {
            tracing::error!("generation service returned an empty image_url");
            return Err(RequestFailure::fallback());
        }

        if image_url.starts_with("data:") {
            return Ok(ImageArtifact {
                url: image_url.to_string(),
            });
        }

        match self.base_url.join(image_url) {
            Ok(url) => Ok(ImageArtifact {
                url: url.to_string(),
            }),
            Err(e) => {
                tracing::error!(%e);
                Err(RequestFailure::fallback())
            }
        }
    }
}

#[async_trait]
impl GenerationApi for DreamChefApi {
    async fn generate_image(
        &self,
        request: &GenerationRequest,
    ) -> Result<ImageArtifact, RequestFailure> {
        let text = self.post(GENERATE_IMAGE_PATH, request, &[]).await?;
        let response: GenerateImageResponse = self.parse(GENERATE_IMAGE_PATH, &text)?;

        self.resolve_image_url(&response.image_url)
    }

    async fn generate_recipe(
        &self,
        request: &GenerationRequest,
    ) -> Result<RecipeArtifact, RequestFailure> {
        let text = self
            .post(GENERATE_RECIPE_PATH, request, &[RECIPE_ERROR_FIELD])
            .await?;
        let response: GenerateRecipeResponse = self.parse(GENERATE_RECIPE_PATH, &text)?;

        Ok(response.into_artifact())
    }

    async fn generate_creation(
        &self,
        request: &GenerationRequest,
    ) -> Result<(ImageArtifact, RecipeArtifact), RequestFailure> {
        let text = self.post(GENERATE_CREATION_PATH, request, &[]).await?;
        let response: GenerateCreationResponse = self.parse(GENERATE_CREATION_PATH, &text)?;

        let image = self.resolve_image_url(&response.image_url)?;
        let recipe = match response.decode_recipe() {
            Ok(recipe) => recipe.into_artifact(),
            Err(e) => {
                tracing::error!("generate-creation recipe is not valid json: {}", e);
                return Err(RequestFailure::fallback());
            }
        };

        Ok((image, recipe))
    }
}
