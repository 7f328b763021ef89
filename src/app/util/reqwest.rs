use bytes::Bytes;
use reqwest::StatusCode;

use crate::app::models::api_error::ApiError;

pub async fn get_bytes(client: &reqwest::Client, url: &str) -> Result<Bytes, ApiError> {
    match client.get(url).send().await {
        Ok(res) => {
            if !res.status().is_success() {
                tracing::error!("get_bytes {} responded {}", url, res.status());
                return Err(ApiError {
                    code: StatusCode::BAD_GATEWAY,
                    message: "Failed to get url response.".to_string(),
                });
            }

            match res.bytes().await {
                Ok(bytes) => Ok(bytes),
                Err(e) => {
                    tracing::error!(%e);
                    Err(ApiError {
                        code: StatusCode::BAD_GATEWAY,
                        message: "Failed to get bytes from response.".to_string(),
                    })
                }
            }
        }
        Err(e) => {
            tracing::error!(%e);
            Err(ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Failed to get url response.".to_string(),
            })
        }
    }
}
