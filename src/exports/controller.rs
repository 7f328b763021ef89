use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::{app::models::api_error::ApiError, AppState};

use super::{models::export_file::ExportFile, service, sinks::directory_sink::DirectorySink};

pub async fn export_image(State(state): State<AppState>) -> Result<Response, ApiError> {
    let (image, recipe) = {
        let session = state.session.lock();
        (
            session.workflow.image().cloned(),
            session.workflow.recipe().cloned(),
        )
    };
    let suggested_name = recipe.as_ref().map(|recipe| recipe.menu_name.as_str());

    match service::export_image(image.as_ref(), suggested_name, &state.client).await? {
        Some(file) => deliver(file, &state),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

pub async fn export_recipe(State(state): State<AppState>) -> Result<Response, ApiError> {
    let recipe = state.session.lock().workflow.recipe().cloned();

    match service::export_recipe(recipe.as_ref()) {
        Some(file) => deliver(file, &state),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

fn deliver(file: ExportFile, state: &AppState) -> Result<Response, ApiError> {
    match &state.envy.export_dir {
        Some(dir) => {
            DirectorySink::new(dir).save(&file)?;
            Ok(Redirect::to("/").into_response())
        }
        None => Ok(file.into_response()),
    }
}
