use hydroplot::engine::config::ProfileConfig;
use hydroplot::render::ImageFormat;
use std::path::{Path, PathBuf};

const STDIO_MARKER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout(ImageFormat),
    File(PathBuf),
}

impl InputSource {
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(p) if p != Path::new(STDIO_MARKER) => InputSource::File(p.to_path_buf()),
            _ => InputSource::Stdin,
        }
    }
}

impl OutputTarget {
    pub fn from_arg(path: Option<&Path>, stream_format: ImageFormat) -> Self {
        match path {
            Some(p) if p != Path::new(STDIO_MARKER) => OutputTarget::File(p.to_path_buf()),
            _ => OutputTarget::Stdout(stream_format),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub input: InputSource,
    pub output: OutputTarget,
    pub profile: ProfileConfig,
}
