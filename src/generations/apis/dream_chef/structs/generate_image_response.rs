use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GenerateImageResponse {
    #[serde(rename(deserialize = "image_url"))]
    pub image_url: String,
}
