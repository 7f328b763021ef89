use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::{
    app::envy::Envy,
    generations::{
        apis::GenerationApi,
        enums::generation_mode::GenerationMode,
        models::{
            image_artifact::ImageArtifact, recipe_artifact::RecipeArtifact,
            request_failure::RequestFailure,
        },
    },
    inputs::models::generation_request::GenerationRequest,
    AppState,
};

/// Generation service double returning canned results. An unset result
/// answers with the fallback failure.
#[derive(Default)]
pub struct ScriptedApi {
    image_result: Mutex<Option<Result<ImageArtifact, RequestFailure>>>,
    recipe_result: Mutex<Option<Result<RecipeArtifact, RequestFailure>>>,
    creation_result: Mutex<Option<Result<(ImageArtifact, RecipeArtifact), RequestFailure>>>,
    gate: tokio::sync::Mutex<Option<oneshot::Receiver<()>>>,
    pub image_calls: AtomicUsize,
    pub recipe_calls: AtomicUsize,
    pub creation_calls: AtomicUsize,
    pub last_request: Mutex<Option<GenerationRequest>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_image(&self, result: Result<ImageArtifact, RequestFailure>) {
        *self.image_result.lock() = Some(result);
    }

    pub fn set_recipe(&self, result: Result<RecipeArtifact, RequestFailure>) {
        *self.recipe_result.lock() = Some(result);
    }

    pub fn set_creation(&self, result: Result<(ImageArtifact, RecipeArtifact), RequestFailure>) {
        *self.creation_result.lock() = Some(result);
    }

    /// Holds the next call until the returned sender fires or drops.
    pub async fn gate(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.lock().await = Some(rx);
        tx
    }

    pub fn calls(&self) -> usize {
        self.image_calls.load(Ordering::SeqCst)
            + self.recipe_calls.load(Ordering::SeqCst)
            + self.creation_calls.load(Ordering::SeqCst)
    }

    async fn enter(&self, request: &GenerationRequest) {
        *self.last_request.lock() = Some(request.clone());

        let gate = self.gate.lock().await.take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
    }
}

#[async_trait]
impl GenerationApi for ScriptedApi {
    async fn generate_image(
        &self,
        request: &GenerationRequest,
    ) -> Result<ImageArtifact, RequestFailure> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        self.enter(request).await;
        let result = self.image_result.lock().clone();
        result.unwrap_or(Err(RequestFailure::fallback()))
    }

    async fn generate_recipe(
        &self,
        request: &GenerationRequest,
    ) -> Result<RecipeArtifact, RequestFailure> {
        self.recipe_calls.fetch_add(1, Ordering::SeqCst);
        self.enter(request).await;
        let result = self.recipe_result.lock().clone();
        result.unwrap_or(Err(RequestFailure::fallback()))
    }

    async fn generate_creation(
        &self,
        request: &GenerationRequest,
    ) -> Result<(ImageArtifact, RecipeArtifact), RequestFailure> {
        self.creation_calls.fetch_add(1, Ordering::SeqCst);
        self.enter(request).await;
        let result = self.creation_result.lock().clone();
        result.unwrap_or(Err(RequestFailure::fallback()))
    }
}

pub fn envy(mode: GenerationMode) -> Envy {
    Envy {
        port: None,
        api_url: "http://127.0.0.1:9".to_string(),
        generation_mode: Some(mode.value().to_string()),
        error_field: None,
        export_dir: None,
    }
}

pub fn state(mode: GenerationMode, api: Arc<ScriptedApi>) -> AppState {
    AppState::new(envy(mode), mode, api, reqwest::Client::new())
}

pub fn image(url: &str) -> ImageArtifact {
    ImageArtifact {
        url: url.to_string(),
    }
}

pub fn recipe(menu_name: &str, instructions: &str) -> RecipeArtifact {
    RecipeArtifact {
        menu_name: menu_name.to_string(),
        instructions: instructions.to_string(),
    }
}
