use clap::{ArgAction, Parser};
use hydroplot::core::scales::HydropathyScale;
use hydroplot::render::ImageFormat;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "hydroplot",
    author,
    version,
    about = "Hydroplot - Plot smoothed hydrophobicity/hydrophilicity profiles of a protein sequence.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    // --- Profile Arguments ---
    /// Smoothing window size (odd, 5 to 19) [default: 19]
    #[arg(short, long, value_name = "INT")]
    pub window: Option<usize>,

    /// Available scales: kd (Kyte&Doolittle); hw (Hopp&Woods) [default: hw]
    #[arg(short, long, value_name = "SCALE")]
    pub scale: Option<HydropathyScale>,

    // --- Input/Output ---
    /// Input protein sequence file in FASTA format. Reads stdin when omitted or '-'.
    #[arg(short, long, value_name = "PATH")]
    pub infile: Option<PathBuf>,

    /// Output image plot file. Writes to stdout when omitted or '-'.
    #[arg(short, long, value_name = "PATH")]
    pub outfile: Option<PathBuf>,

    /// Image resolution in dots per inch (80 to 300) [default: 80]
    #[arg(short, long, value_name = "INT")]
    pub dpi: Option<u32>,

    /// Start and end residue of a highlighted range. Can be used multiple times.
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["START", "END"],
        action = ArgAction::Append,
        allow_negative_numbers = true
    )]
    pub coord: Vec<i64>,

    /// Image format used when writing to stdout (png or svg) [default: png]
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<ImageFormat>,

    // --- Configuration ---
    /// Path to a configuration file in TOML format.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S profile.window=15
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    // --- Logging ---
    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output and progress display
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Highlight pairs in the order they were given.
    pub fn coord_pairs(&self) -> Vec<(i64, i64)> {
        self.coord
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .collect()
    }
}
