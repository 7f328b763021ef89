use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    InternalServerError,
    GenerationTaskFailed,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InternalServerError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "เกิดข้อผิดพลาดภายในระบบ".to_string(),
            },
            // the task panicked or was cancelled before committing
            Self::GenerationTaskFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "การสร้างเมนูถูกยกเลิกก่อนเสร็จสิ้น".to_string(),
            },
        }
    }
}
