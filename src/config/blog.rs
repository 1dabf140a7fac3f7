//! CMS configuration (blogcms.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::index::IndexOrder;

/// Configuration file name looked up in the base directory
pub const CONFIG_FILE: &str = "blogcms.yml";

/// Main CMS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    // Template
    /// Path to the page template; the embedded template is used when unset
    pub template: Option<PathBuf>,

    // Directory
    pub blogs_dir: String,
    pub images_dir: String,
    pub index_file: String,

    // Defaults
    pub default_author: String,
    pub publisher: String,
    pub default_video_url: String,

    // Paths written into rendered output
    pub content_image_prefix: String,
    pub index_image_prefix: String,
    pub index_link_prefix: String,

    // Post index
    pub index_order: IndexOrder,
    pub index_listing_limit: usize,

    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            template: None,

            blogs_dir: "blogs".to_string(),
            images_dir: "imagesofblog".to_string(),
            index_file: "blogs.json".to_string(),

            default_author: "xmonks".to_string(),
            publisher: "xMonks".to_string(),
            default_video_url: "https://www.youtube.com/embed/9QZs51GUQ_Q?si=UD5JUqqZTKF1bi2v"
                .to_string(),

            content_image_prefix: "./imagesofblog/".to_string(),
            index_image_prefix: "./blogs/imagesofblog/".to_string(),
            index_link_prefix: "./blogs/".to_string(),

            index_order: IndexOrder::Prepend,
            index_listing_limit: 20,

            server: ServerConfig::default(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load `blogcms.yml` from a base directory, falling back to defaults
    pub fn load_or_default<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join(CONFIG_FILE);
        if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}
