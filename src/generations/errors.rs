use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationsApiError {
    ValidationFailed(String),
    WorkflowBusy,
    NoImage,
    RecipeAlreadyExists,
    RecipeUnavailable,
    InvalidTransition,
}

impl GenerationsApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::ValidationFailed(notice) => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: notice.to_string(),
            },
            Self::WorkflowBusy => ApiError {
                code: StatusCode::CONFLICT,
                message: "A generation is already in progress.".to_string(),
            },
            Self::NoImage => ApiError {
                code: StatusCode::CONFLICT,
                message: "Generate an image before requesting a recipe.".to_string(),
            },
            Self::RecipeAlreadyExists => ApiError {
                code: StatusCode::CONFLICT,
                message: "A recipe already exists for this image.".to_string(),
            },
            Self::RecipeUnavailable => ApiError {
                code: StatusCode::CONFLICT,
                message: "Recipes are generated together with the image.".to_string(),
            },
            Self::InvalidTransition => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "The workflow is not waiting for this result.".to_string(),
            },
        }
    }
}
