use axum::{extract::State, response::Html};

use crate::{generations::service, AppState};

use super::views;

pub async fn get_root(State(state): State<AppState>) -> Html<String> {
    Html(views::index::render(
        &service::snapshot(&state),
        None,
        state.envy.export_dir.is_some(),
    ))
}
