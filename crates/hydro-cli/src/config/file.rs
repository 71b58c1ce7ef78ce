use crate::error::{CliError, Result};
use hydroplot::core::scales::HydropathyScale;
use hydroplot::engine::spans::HighlightSpan;
use hydroplot::render::ImageFormat;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileProfileConfig {
    pub window: Option<usize>,
    pub scale: Option<HydropathyScale>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileRenderConfig {
    pub dpi: Option<u32>,
    #[serde(rename = "stream-format")]
    pub stream_format: Option<ImageFormat>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub profile: Option<FileProfileConfig>,
    pub render: Option<FileRenderConfig>,
    #[serde(default)]
    pub highlight: Vec<HighlightSpan>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
