use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub port: Option<u16>,

    pub api_url: String,
    pub generation_mode: Option<String>,
    pub error_field: Option<String>,

    pub export_dir: Option<String>,
}

impl Envy {
    pub fn load() -> Result<Self, envy::Error> {
        let app_env = std::env::var("APP_ENV").unwrap_or("development".to_string());
        let _ = dotenvy::from_filename(format!(".env.{}", app_env));

        envy::from_env::<Envy>()
    }
}
