use super::spans::HighlightSpan;
use crate::core::scales::HydropathyScale;
use std::ops::RangeInclusive;
use thiserror::Error;

pub const WINDOW_RANGE: RangeInclusive<usize> = 5..=19;
pub const DPI_RANGE: RangeInclusive<u32> = 80..=300;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Window size {0} is invalid: expected an odd value between 5 and 19")]
    InvalidWindow(usize),
    #[error("DPI {0} is out of range: expected a value between 80 and 300")]
    InvalidDpi(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub dpi: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileConfig {
    pub window: usize,
    pub scale: HydropathyScale,
    pub highlights: Vec<HighlightSpan>,
    pub render: RenderConfig,
}

#[derive(Default)]
pub struct ProfileConfigBuilder {
    window: Option<usize>,
    scale: Option<HydropathyScale>,
    highlights: Vec<HighlightSpan>,
    dpi: Option<u32>,
}

impl ProfileConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window(mut self, window: usize) -> Self {
        self.window = Some(window);
        self
    }
    pub fn scale(mut self, scale: HydropathyScale) -> Self {
        self.scale = Some(scale);
        self
    }
    pub fn highlights(mut self, spans: Vec<HighlightSpan>) -> Self {
        self.highlights = spans;
        self
    }
    pub fn add_highlight(mut self, span: HighlightSpan) -> Self {
        self.highlights.push(span);
        self
    }
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.dpi = Some(dpi);
        self
    }

    pub fn build(self) -> Result<ProfileConfig, ConfigError> {
        let window = self.window.ok_or(ConfigError::MissingParameter("window"))?;
        if !WINDOW_RANGE.contains(&window) || window % 2 == 0 {
            return Err(ConfigError::InvalidWindow(window));
        }
        let dpi = self.dpi.ok_or(ConfigError::MissingParameter("dpi"))?;
        if !DPI_RANGE.contains(&dpi) {
            return Err(ConfigError::InvalidDpi(dpi));
        }

        Ok(ProfileConfig {
            window,
            scale: self.scale.ok_or(ConfigError::MissingParameter("scale"))?,
            highlights: self.highlights,
            render: RenderConfig { dpi },
        })
    }
}
