use axum::{
    routing::{get, post},
    Router,
};

use crate::{exports, generations, pages, AppState};

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::controller::get_root))
        // page actions
        .route("/submit", post(generations::controller::submit_form))
        .route("/recipe", post(generations::controller::recipe_form))
        // exports
        .route("/export/image", get(exports::controller::export_image))
        .route("/export/recipe", get(exports::controller::export_recipe))
        // workflow api
        .route("/api/workflow", get(generations::controller::get_workflow))
        .route(
            "/api/workflow/image",
            post(generations::controller::generate_image),
        )
        .route(
            "/api/workflow/recipe",
            post(generations::controller::generate_recipe),
        )
        .with_state(state)
}
