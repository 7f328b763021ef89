use tokio::task::JoinHandle;

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    generations::{
        enums::generation_mode::GenerationMode,
        errors::GenerationsApiError,
        models::{workflow::Workflow, workflow_snapshot::WorkflowSnapshot},
    },
    inputs::{
        dtos::generation_request_dto::GenerationRequestDto,
        models::generation_request::GenerationRequest,
    },
    AppState,
};

pub fn snapshot(state: &AppState) -> WorkflowSnapshot {
    WorkflowSnapshot::new(&state.session.lock())
}

/// Records the form edit, then validates and moves the workflow to
/// `generating_image`. Nothing is sent until the returned request is
/// resolved.
pub fn begin_image_request(
    dto: &GenerationRequestDto,
    state: &AppState,
) -> Result<GenerationRequest, ApiError> {
    let mut session = state.session.lock();
    session.inputs.update(dto);

    if !session.workflow.can_submit() {
        tracing::warn!(
            "submit ignored while {}",
            session.workflow.status().value()
        );
        return Err(GenerationsApiError::WorkflowBusy.value());
    }

    let mode = session.workflow.mode();
    let request = match GenerationRequest::from_dto(&session.inputs.snapshot(), &mode) {
        Ok(request) => request,
        Err(e) => return Err(e.value()),
    };

    match session.workflow.begin_image_request(request.clone()) {
        Ok(_) => {
            tracing::debug!("workflow -> {}", session.workflow.status().value());
            Ok(request)
        }
        Err(e) => Err(e.value()),
    }
}

pub async fn resolve_image_request(request: &GenerationRequest, state: &AppState) {
    match state.mode {
        GenerationMode::Split => {
            let result = state.api.generate_image(request).await;
            commit(state, "generate_image", |workflow| {
                workflow.complete_image_request(result)
            });
        }
        GenerationMode::Combined => {
            let result = state.api.generate_creation(request).await;
            commit(state, "generate_creation", |workflow| {
                workflow.complete_creation(result)
            });
        }
    }
}

/// The call runs on its own task, so it commits even if the caller goes away.
pub fn spawn_image_request(request: GenerationRequest, state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        resolve_image_request(&request, &state).await;
    })
}

pub async fn submit_image_request(
    dto: &GenerationRequestDto,
    state: &AppState,
) -> Result<WorkflowSnapshot, ApiError> {
    let request = begin_image_request(dto, state)?;
    join(spawn_image_request(request, state.clone())).await?;

    Ok(snapshot(state))
}

pub fn begin_recipe_request(state: &AppState) -> Result<GenerationRequest, ApiError> {
    let mut session = state.session.lock();

    match session.workflow.begin_recipe_request() {
        Ok(request) => {
            tracing::debug!("workflow -> {}", session.workflow.status().value());
            Ok(request)
        }
        Err(e) => {
            tracing::warn!("recipe request refused: {:?}", e);
            Err(e.value())
        }
    }
}

pub async fn resolve_recipe_request(request: &GenerationRequest, state: &AppState) {
    let result = state.api.generate_recipe(request).await;
    commit(state, "generate_recipe", |workflow| {
        workflow.complete_recipe_request(result)
    });
}

pub fn spawn_recipe_request(request: GenerationRequest, state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        resolve_recipe_request(&request, &state).await;
    })
}

pub async fn request_recipe(state: &AppState) -> Result<WorkflowSnapshot, ApiError> {
    let request = begin_recipe_request(state)?;
    join(spawn_recipe_request(request, state.clone())).await?;

    Ok(snapshot(state))
}

async fn join(handle: JoinHandle<()>) -> Result<(), ApiError> {
    match handle.await {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::GenerationTaskFailed.value())
        }
    }
}

fn commit<F>(state: &AppState, call: &str, apply: F)
where
    F: FnOnce(&mut Workflow) -> Result<(), GenerationsApiError>,
{
    let mut session = state.session.lock();

    match apply(&mut session.workflow) {
        Ok(_) => match session.workflow.status().error_message() {
            Some(message) => tracing::error!("{} failed: {}", call, message),
            None => tracing::debug!(
                "{} settled, workflow -> {}",
                call,
                session.workflow.status().value()
            ),
        },
        Err(e) => tracing::error!("{} result dropped: {:?}", call, e),
    }
}
