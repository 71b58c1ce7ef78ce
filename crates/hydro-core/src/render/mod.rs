//! Renders computed hydropathy profiles to image files or byte streams.
//!
//! Bitmap output is drawn into a raw RGB buffer by the `plotters` bitmap
//! backend and PNG-encoded with the `image` crate, for files and streams alike.
//! Files with an `.svg` extension, or streams requested as SVG, use the SVG
//! backend.

pub mod chart;
pub mod format;

pub use chart::{RenderError, canvas_size, render_to_path, render_to_writer};
pub use format::ImageFormat;
