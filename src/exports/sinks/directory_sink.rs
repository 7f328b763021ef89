use std::{io::Write, path::PathBuf};

use axum::http::StatusCode;
use tempfile::NamedTempFile;

use crate::{app::models::api_error::ApiError, exports::models::export_file::ExportFile};

/// Saves exports into a local directory. Data goes to a temporary file
/// first; the temporary is renamed into place on success and deleted on
/// any failure.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn save(&self, file: &ExportFile) -> Result<PathBuf, ApiError> {
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            tracing::error!(%e);
            return Err(save_error());
        }

        let mut temp = match NamedTempFile::new_in(&self.dir) {
            Ok(temp) => temp,
            Err(e) => {
                tracing::error!(%e);
                return Err(save_error());
            }
        };

        if let Err(e) = temp.write_all(&file.data).and_then(|_| temp.flush()) {
            tracing::error!(%e);
            return Err(save_error());
        }

        let path = self.dir.join(&file.file_name);
        match temp.persist(&path) {
            Ok(_) => {
                tracing::debug!("export saved to {}", path.display());
                Ok(path)
            }
            Err(e) => {
                tracing::error!("failed to persist {}: {}", path.display(), e.error);
                Err(save_error())
            }
        }
    }
}

fn save_error() -> ApiError {
    ApiError {
        code: StatusCode::INTERNAL_SERVER_ERROR,
        message: "Failed to save export.".to_string(),
    }
}
