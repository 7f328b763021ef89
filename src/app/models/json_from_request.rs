use axum::Json;
use axum_macros::FromRequest;

use super::api_error::ApiError;

/// `Json` whose rejection answers in the same `{message}` shape as every
/// other workflow error.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonFromRequest<T>(pub T);
