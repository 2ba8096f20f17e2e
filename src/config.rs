use serde::{Deserialize, Serialize};
use std::path::Path;

use config::{Config, ConfigError, Environment, File};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub photos_dir: String,
    pub max_edge: u32,
    pub webp_quality: f32,
    pub jpeg_quality: u8,
    pub site_prefix: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            photos_dir: "public/photos".to_string(),
            max_edge: 1600,
            webp_quality: 95.0,
            jpeg_quality: 100,
            site_prefix: "/photos".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::with_name("photo-prep").required(false))
            .add_source(Environment::with_prefix("PHOTO_PREP").try_parsing(true))
            .build()?;

        s.try_deserialize()
    }

    pub fn root(&self) -> &Path {
        Path::new(&self.photos_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_field() {
        let config = AppConfig::default();
        assert_eq!(config.photos_dir, "public/photos");
        assert_eq!(config.max_edge, 1600);
        assert_eq!(config.webp_quality, 95.0);
        assert_eq!(config.jpeg_quality, 100);
        assert_eq!(config.site_prefix, "/photos");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn new_resolves_without_a_config_file() {
        let config = AppConfig::new().unwrap();
        assert_eq!(config.max_edge, AppConfig::default().max_edge);
        assert_eq!(config.root(), Path::new(&config.photos_dir));
    }
}
