use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, InputSource, OutputTarget};
use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::utils::parser;
use hydroplot::engine::config::ProfileConfigBuilder;
use hydroplot::engine::error::EngineError;
use hydroplot::engine::spans::HighlightSpan;
use tracing::{debug, warn};

pub fn build_config(cli: &Cli) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &cli.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &cli.set_values)?;

    let profile_file = file_config.profile.take().unwrap_or_default();
    let render_file = file_config.render.take().unwrap_or_default();

    let window = cli
        .window
        .or(profile_file.window)
        .unwrap_or(defaults.window);
    let scale = cli.scale.or(profile_file.scale).unwrap_or(defaults.scale);
    let dpi = cli.dpi.or(render_file.dpi).unwrap_or(defaults.dpi);
    let stream_format = cli
        .format
        .or(render_file.stream_format)
        .unwrap_or(defaults.stream_format);

    let highlights: Vec<HighlightSpan> = file_config
        .highlight
        .into_iter()
        .chain(cli.coord_pairs().into_iter().map(HighlightSpan::from))
        .collect();

    let profile = ProfileConfigBuilder::new()
        .window(window)
        .scale(scale)
        .dpi(dpi)
        .highlights(highlights)
        .build()
        .map_err(EngineError::from)?;

    let input = InputSource::from_arg(cli.infile.as_deref());
    let output = OutputTarget::from_arg(cli.outfile.as_deref(), stream_format);
    if cli.format.is_some() && matches!(output, OutputTarget::File(_)) {
        warn!("--format only applies to stdout output; the output file extension selects the format.");
    }

    debug!(
        "Resolved configuration: window={}, scale={}, dpi={}, {} highlight(s)",
        profile.window,
        profile.scale,
        profile.render.dpi,
        profile.highlights.len()
    );

    Ok(AppConfig {
        input,
        output,
        profile,
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) =
            parser::parse_set_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "profile.window" => {
                config.profile.get_or_insert_with(Default::default).window =
                    Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                    })?);
            }
            "profile.scale" => {
                config.profile.get_or_insert_with(Default::default).scale =
                    Some(value_str.parse().map_err(|e| {
                        CliError::Config(format!("Invalid value for {}: {}", key, e))
                    })?);
            }
            "render.dpi" => {
                config.render.get_or_insert_with(Default::default).dpi =
                    Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                    })?);
            }
            "render.stream-format" => {
                config.render.get_or_insert_with(Default::default).stream_format =
                    Some(value_str.parse().map_err(|e| {
                        CliError::Config(format!("Invalid value for {}: {}", key, e))
                    })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
