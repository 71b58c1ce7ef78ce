use crate::cli::Cli;
use crate::config::{InputSource, OutputTarget, build_config};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use hydroplot::{
    core::io::{fasta::FastaFile, traits::SequenceFile},
    core::models::sequence::SequenceRecord,
    engine::progress::{Progress, ProgressReporter},
    render, workflows,
};
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

const STDIN_LABEL: &str = "<stdin>";

pub fn run(cli: &Cli) -> Result<()> {
    let config = build_config(cli)?;

    let record = load_record(&config.input)?;
    info!(
        "Loaded record '{}' with {} residues.",
        record.record_id(),
        record.len()
    );

    let progress_handler = if cli.quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the hydropathy profile workflow...");
    let profile = workflows::profile::run(&record, &config.profile, &reporter)?;
    if profile.positions().is_empty() {
        warn!("Profile has no smoothed values; the plot will only show the axes.");
    }

    reporter.report(Progress::PhaseStart { name: "Rendering" });
    match &config.output {
        OutputTarget::File(path) => {
            render::render_to_path(&profile, &config.profile.render, path)?;
            reporter.report(Progress::PhaseFinish);
            info!("Plot written to {:?}", path);
        }
        OutputTarget::Stdout(format) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            render::render_to_writer(&profile, &config.profile.render, *format, &mut handle)?;
            reporter.report(Progress::PhaseFinish);
            info!("Plot written to stdout as {}.", format);
        }
    }

    progress_handler.finish();
    Ok(())
}

fn load_record(input: &InputSource) -> Result<SequenceRecord> {
    match input {
        InputSource::File(path) => {
            info!("Loading input sequence from {:?}", path);
            FastaFile::read_from_path(path).map_err(|e| CliError::FileParsing {
                path: path.clone(),
                source: e.into(),
            })
        }
        InputSource::Stdin => {
            info!("Reading input sequence from standard input.");
            FastaFile::read_from_stdin().map_err(|e| CliError::FileParsing {
                path: PathBuf::from(STDIN_LABEL),
                source: e.into(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use hydroplot::engine::config::ConfigError;
    use hydroplot::engine::error::EngineError;
    use std::fs;
    use tempfile::tempdir;

    const BACTERIORHODOPSIN: &str = ">sp|P02945|BACR_HALSA Bacteriorhodopsin
MLELLPTAVEGVSQAQITGRPEWIWLALGTALMGLGTLYFLVKGMGVSDPDAKKFYAITT
LVPAIAFTMYLSMLLGYGLTMVPFGGEQNPIYWARYADWLFTTPLLLLDLALLVDADQGT
";

    #[test]
    fn load_record_reads_fasta_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bR.fasta");
        fs::write(&path, BACTERIORHODOPSIN).unwrap();

        let record = load_record(&InputSource::File(path)).unwrap();
        assert_eq!(record.record_id(), "sp|P02945|BACR_HALSA");
        assert_eq!(record.len(), 120);
    }

    #[test]
    fn load_record_reports_the_failing_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_header.fasta");
        fs::write(&path, "MLELLPTAVEG\n").unwrap();

        match load_record(&InputSource::File(path.clone())) {
            Err(CliError::FileParsing { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn unknown_residue_fails_before_rendering() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.fasta");
        let output = dir.path().join("bad.png");
        fs::write(&input, ">bad\nACDEFGHIKXLMNPQRSTVWY\n").unwrap();

        let cli = Cli::parse_from([
            "hydroplot",
            "-q",
            "-w",
            "5",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]);
        let result = run(&cli);
        assert!(matches!(
            result,
            Err(CliError::Engine(EngineError::Projection { .. }))
        ));
        assert!(!output.exists());
    }

    #[test]
    fn even_window_fails_before_reading_input() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("never.png");
        let cli = Cli::parse_from([
            "hydroplot",
            "-q",
            "-w",
            "10",
            "-i",
            "/nonexistent/input.fasta",
            "-o",
            output.to_str().unwrap(),
        ]);
        assert!(matches!(
            run(&cli),
            Err(CliError::Engine(EngineError::Config(ConfigError::InvalidWindow(10))))
        ));
        assert!(!output.exists());
    }
}
