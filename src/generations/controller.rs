use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    inputs::dtos::generation_request_dto::GenerationRequestDto,
    pages::views,
    AppState,
};

use super::{models::workflow_snapshot::WorkflowSnapshot, service};

pub async fn get_workflow(State(state): State<AppState>) -> Json<WorkflowSnapshot> {
    Json(service::snapshot(&state))
}

pub async fn generate_image(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GenerationRequestDto>,
) -> Result<Json<WorkflowSnapshot>, ApiError> {
    match service::submit_image_request(&dto, &state).await {
        Ok(snapshot) => Ok(Json(snapshot)),
        Err(e) => Err(e),
    }
}

pub async fn generate_recipe(
    State(state): State<AppState>,
) -> Result<Json<WorkflowSnapshot>, ApiError> {
    match service::request_recipe(&state).await {
        Ok(snapshot) => Ok(Json(snapshot)),
        Err(e) => Err(e),
    }
}

/// Form submit from the page. The call runs in the background; the page
/// polls until it settles.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(dto): Form<GenerationRequestDto>,
) -> Response {
    match service::begin_image_request(&dto, &state) {
        Ok(request) => {
            service::spawn_image_request(request, state);
            Redirect::to("/").into_response()
        }
        Err(e) => render_refusal(e, &state),
    }
}

pub async fn recipe_form(State(state): State<AppState>) -> Response {
    match service::begin_recipe_request(&state) {
        Ok(request) => {
            service::spawn_recipe_request(request, state);
            Redirect::to("/").into_response()
        }
        Err(e) => render_refusal(e, &state),
    }
}

/// Form posts come from the page, so a refusal re-renders it with the
/// message instead of answering with JSON.
fn render_refusal(e: ApiError, state: &AppState) -> Response {
    let html = views::index::render(
        &service::snapshot(state),
        Some(&e.message),
        state.envy.export_dir.is_some(),
    );
    (e.code, Html(html)).into_response()
}
