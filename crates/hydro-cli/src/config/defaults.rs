use hydroplot::core::scales::HydropathyScale;
use hydroplot::render::ImageFormat;

pub struct DefaultsConfig {
    pub window: usize,
    pub scale: HydropathyScale,
    pub dpi: u32,
    pub stream_format: ImageFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            window: 19,
            scale: HydropathyScale::HoppWoods,
            dpi: 80,
            stream_format: ImageFormat::Png,
        }
    }
}
