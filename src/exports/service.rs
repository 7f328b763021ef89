use axum::http::StatusCode;
use bytes::Bytes;

use crate::{
    app::{
        models::api_error::ApiError,
        util::{file_name, reqwest::get_bytes},
    },
    exports::models::export_file::ExportFile,
    generations::models::{image_artifact::ImageArtifact, recipe_artifact::RecipeArtifact},
};

pub const DEFAULT_IMAGE_FILE_NAME: &str = "dream-chef-image.png";
const DEFAULT_RECIPE_NAME: &str = "dream-chef-recipe";
const DEFAULT_IMAGE_NAME: &str = "dream-chef-image";

/// `None` when there is no image to export.
pub async fn export_image(
    image: Option<&ImageArtifact>,
    suggested_name: Option<&str>,
    client: &reqwest::Client,
) -> Result<Option<ExportFile>, ApiError> {
    let Some(image) = image else {
        return Ok(None);
    };

    let (mime_type, data) = load_image(&image.url, client).await?;
    let file_name = match suggested_name {
        Some(name) => [file_name::sanitize(name, DEFAULT_IMAGE_NAME).as_str(), ".png"].concat(),
        None => DEFAULT_IMAGE_FILE_NAME.to_string(),
    };

    Ok(Some(ExportFile {
        file_name,
        mime_type,
        data,
    }))
}

/// `None` when there is no recipe to export.
pub fn export_recipe(recipe: Option<&RecipeArtifact>) -> Option<ExportFile> {
    let recipe = recipe?;
    let name = file_name::sanitize(&recipe.menu_name, DEFAULT_RECIPE_NAME);

    Some(ExportFile {
        file_name: [name.as_str(), ".txt"].concat(),
        mime_type: mime::TEXT_PLAIN_UTF_8.to_string(),
        data: Bytes::from(recipe.to_text()),
    })
}

async fn load_image(url: &str, client: &reqwest::Client) -> Result<(String, Bytes), ApiError> {
    if let Some(data_url) = url.strip_prefix("data:") {
        return decode_data_url(data_url);
    }

    if url.starts_with("http://") || url.starts_with("https://") {
        let bytes = get_bytes(client, url).await?;
        return Ok((mime::IMAGE_PNG.to_string(), bytes));
    }

    Err(ApiError {
        code: StatusCode::BAD_REQUEST,
        message: "Unsupported image url.".to_string(),
    })
}

/// Body of a `data:` URL, after the scheme.
fn decode_data_url(data_url: &str) -> Result<(String, Bytes), ApiError> {
    let Some((meta, payload)) = data_url.split_once(',') else {
        return Err(invalid_data_url());
    };

    let (media_type, is_base64) = match meta.strip_suffix(";base64") {
        Some(media_type) => (media_type, true),
        None => (meta, false),
    };
    let mime_type = match media_type.is_empty() {
        true => mime::IMAGE_PNG.to_string(),
        false => media_type.to_string(),
    };

    let data = match is_base64 {
        true => match base64::decode(payload.trim()) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(%e);
                return Err(invalid_data_url());
            }
        },
        false => urlencoding::decode_binary(payload.as_bytes()).into_owned(),
    };

    Ok((mime_type, Bytes::from(data)))
}

fn invalid_data_url() -> ApiError {
    ApiError {
        code: StatusCode::BAD_REQUEST,
        message: "Invalid image data url.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use axum::{routing::get, Router};

    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G'];

    fn recipe(menu_name: &str) -> RecipeArtifact {
        RecipeArtifact {
            menu_name: menu_name.to_string(),
            instructions: "ต้มน้ำ...".to_string(),
        }
    }

    #[test]
    fn recipe_export_contains_both_fields() {
        let file = export_recipe(Some(&recipe("ต้มยำกุ้ง"))).unwrap();
        let text = String::from_utf8(file.data.to_vec()).unwrap();

        assert_eq!(file.file_name, "ต้มยำกุ้ง.txt");
        assert_eq!(file.mime_type, "text/plain; charset=utf-8");
        assert!(text.contains("ต้มยำกุ้ง"));
        assert!(text.contains("ต้มน้ำ..."));
    }

    #[test]
    fn recipe_export_without_recipe_is_noop() {
        assert!(export_recipe(None).is_none());
    }

    #[test]
    fn recipe_export_is_repeatable() {
        let recipe = recipe("ต้มยำกุ้ง");

        assert_eq!(export_recipe(Some(&recipe)), export_recipe(Some(&recipe)));
    }

    #[test]
    fn recipe_name_is_sanitized() {
        let file = export_recipe(Some(&recipe("แกง/ส้ม"))).unwrap();

        assert_eq!(file.file_name, "แกง_ส้ม.txt");
    }

    #[tokio::test]
    async fn image_export_without_image_is_noop() {
        let client = reqwest::Client::new();

        assert!(export_image(None, Some("ต้มยำกุ้ง"), &client)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn data_url_image_is_decoded_and_named_after_recipe() {
        let client = reqwest::Client::new();
        let image = ImageArtifact {
            url: format!("data:image/png;base64,{}", base64::encode(PNG_HEADER)),
        };

        let file = export_image(Some(&image), Some("ต้มยำกุ้ง"), &client)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(file.file_name, "ต้มยำกุ้ง.png");
        assert_eq!(file.mime_type, "image/png");
        assert_eq!(file.data.as_ref(), PNG_HEADER);
    }

    #[tokio::test]
    async fn image_without_recipe_uses_fallback_name() {
        let client = reqwest::Client::new();
        let image = ImageArtifact {
            url: format!("data:;base64,{}", base64::encode(PNG_HEADER)),
        };

        let file = export_image(Some(&image), None, &client)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(file.file_name, DEFAULT_IMAGE_FILE_NAME);
        assert_eq!(file.mime_type, "image/png");
    }

    #[tokio::test]
    async fn remote_image_is_fetched() {
        let router = Router::new().route("/images/1.png", get(|| async { PNG_HEADER }));
        let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
            .serve(router.into_make_service());
        let addr = server.local_addr();
        tokio::spawn(server);

        let image = ImageArtifact {
            url: format!("http://{}/images/1.png", addr),
        };
        let file = export_image(Some(&image), None, &reqwest::Client::new())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(file.data.as_ref(), PNG_HEADER);
    }

    #[tokio::test]
    async fn broken_data_url_is_an_error() {
        let image = ImageArtifact {
            url: "data:image/png;base64,@@@".to_string(),
        };

        let err = export_image(Some(&image), None, &reqwest::Client::new())
            .await
            .unwrap_err();

        assert_eq!(err.code, StatusCode::BAD_REQUEST);
    }
}
