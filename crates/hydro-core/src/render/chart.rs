use super::format::ImageFormat;
use crate::engine::config::RenderConfig;
use crate::engine::spans::HighlightSpan;
use crate::engine::weights::WeightKernel;
use crate::workflows::profile::HydropathyProfile;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::ops::Range;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Figure size in inches; the pixel canvas is this times the DPI.
pub const FIGURE_SIZE_INCHES: (f64, f64) = (8.0, 6.0);

const POINTS_PER_INCH: f64 = 72.0;
const SPAN_ALPHA: f64 = 0.4;
const Y_PADDING_FRACTION: f64 = 0.05;
const ZERO_LINE_COLOR: RGBColor = RGBColor(128, 128, 128);

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Drawing failed: {0}")]
    Drawing(String),
    #[error("PNG encoding failed: {0}")]
    Encoding(#[from] image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn drawing_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Drawing(err.to_string())
}

pub fn canvas_size(dpi: u32) -> (u32, u32) {
    let dpi = dpi as f64;
    (
        (FIGURE_SIZE_INCHES.0 * dpi).round() as u32,
        (FIGURE_SIZE_INCHES.1 * dpi).round() as u32,
    )
}

fn points_to_pixels(points: f64, dpi: u32) -> u32 {
    ((points * dpi as f64 / POINTS_PER_INCH).round() as u32).max(1)
}

fn kernel_color(kernel: WeightKernel) -> RGBColor {
    match kernel {
        WeightKernel::Average => RGBColor(31, 119, 180),
        WeightKernel::Triangle => RGBColor(255, 127, 14),
        WeightKernel::SavitzkyGolay => RGBColor(44, 160, 44),
    }
}

/// The residue axis always spans `[1, sequence length]`.
fn x_bounds(sequence_len: usize) -> Range<f64> {
    1.0..(sequence_len.max(2) as f64)
}

/// Y range covering every finite smoothed value and the zero line, padded slightly.
fn y_bounds(profile: &HydropathyProfile) -> Range<f64> {
    let (lo, hi) = profile
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if hi - lo <= f64::EPSILON {
        return -1.0..1.0;
    }
    let pad = (hi - lo) * Y_PADDING_FRACTION;
    (lo - pad)..(hi + pad)
}

/// Clamps a span to the residue axis; spans entirely outside it are dropped.
fn clip_span(span: &HighlightSpan, x_range: &Range<f64>) -> Option<(f64, f64)> {
    let start = (span.start as f64).max(x_range.start);
    let end = (span.end as f64).min(x_range.end);
    (end > start).then_some((start, end))
}

fn draw_profile<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    profile: &HydropathyProfile,
    dpi: u32,
) -> Result<(), RenderError> {
    let title_font = ("sans-serif", points_to_pixels(12.0, dpi));
    let label_font = ("sans-serif", points_to_pixels(10.0, dpi));
    let stroke = points_to_pixels(1.0, dpi);

    root.fill(&WHITE).map_err(drawing_error)?;

    let x_range = x_bounds(profile.sequence_len);
    let y_range = y_bounds(profile);

    let mut chart = ChartBuilder::on(root)
        .caption(format!("Protein {}", profile.record_id), title_font)
        .margin(points_to_pixels(8.0, dpi))
        .x_label_area_size(points_to_pixels(30.0, dpi))
        .y_label_area_size(points_to_pixels(40.0, dpi))
        .build_cartesian_2d(x_range.clone(), y_range.clone())
        .map_err(drawing_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("residue number")
        .y_desc(profile.scale.description())
        .axis_desc_style(label_font)
        .label_style(label_font)
        .draw()
        .map_err(drawing_error)?;

    let spans: Vec<(f64, f64)> = profile
        .highlights
        .iter()
        .filter_map(|span| clip_span(span, &x_range))
        .collect();
    debug!("Shading {} highlight span(s).", spans.len());
    chart
        .draw_series(spans.iter().map(|&(start, end)| {
            Rectangle::new(
                [(start, y_range.start), (end, y_range.end)],
                YELLOW.mix(SPAN_ALPHA).filled(),
            )
        }))
        .map_err(drawing_error)?;

    chart
        .draw_series(LineSeries::new(
            vec![(x_range.start, 0.0), (x_range.end, 0.0)],
            ZERO_LINE_COLOR.stroke_width(stroke),
        ))
        .map_err(drawing_error)?;

    let positions = profile.positions();
    for series in &profile.series {
        let color = kernel_color(series.kernel);
        chart
            .draw_series(LineSeries::new(
                positions
                    .iter()
                    .zip(&series.values)
                    .filter(|(_, v)| v.is_finite())
                    .map(|(&x, &y)| (x as f64, y)),
                color.stroke_width(stroke),
            ))
            .map_err(drawing_error)?
            .label(series.kernel.label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(stroke)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(label_font)
        .position(SeriesLabelPosition::UpperRight)
        .draw()
        .map_err(drawing_error)?;

    Ok(())
}

/// Draws `profile` into an RGB buffer and writes it PNG-encoded to `writer`.
fn encode_png<W: Write>(
    profile: &HydropathyProfile,
    dpi: u32,
    writer: &mut W,
) -> Result<(), RenderError> {
    let (width, height) = canvas_size(dpi);
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw_profile(&root, profile, dpi)?;
        root.present().map_err(drawing_error)?;
    }
    PngEncoder::new(writer).write_image(&buffer, width, height, ExtendedColorType::Rgb8)?;
    Ok(())
}

fn render_svg_string(profile: &HydropathyProfile, dpi: u32) -> Result<String, RenderError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, canvas_size(dpi)).into_drawing_area();
        draw_profile(&root, profile, dpi)?;
        root.present().map_err(drawing_error)?;
    }
    Ok(svg)
}

/// Renders `profile` to a file.
///
/// A `.svg` extension selects SVG output; any other name, including one
/// without an extension, receives PNG bytes.
pub fn render_to_path(
    profile: &HydropathyProfile,
    config: &RenderConfig,
    path: &Path,
) -> Result<(), RenderError> {
    let size = canvas_size(config.dpi);
    let format = ImageFormat::for_path(path);
    info!(
        "Rendering {}x{} {} image to {:?}",
        size.0, size.1, format, path
    );

    match format {
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw_profile(&root, profile, config.dpi)?;
            root.present().map_err(drawing_error)?;
        }
        ImageFormat::Png => {
            let mut writer = BufWriter::new(File::create(path)?);
            encode_png(profile, config.dpi, &mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

/// Renders `profile` as an encoded image into `writer`.
pub fn render_to_writer<W: Write>(
    profile: &HydropathyProfile,
    config: &RenderConfig,
    format: ImageFormat,
    writer: &mut W,
) -> Result<(), RenderError> {
    let (width, height) = canvas_size(config.dpi);
    info!("Rendering {}x{} {} image to stream", width, height, format);

    match format {
        ImageFormat::Svg => {
            let svg = render_svg_string(profile, config.dpi)?;
            writer.write_all(svg.as_bytes())?;
        }
        ImageFormat::Png => encode_png(profile, config.dpi, writer)?,
    }
    writer.flush()?;
    Ok(())
}
