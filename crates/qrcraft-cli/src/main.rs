//! qrcraft-cli: render and export a QR code from the command line.
//!
//! Drives the same state → render → export pipeline as the web panel
//! and writes the resulting file to disk instead of triggering a browser
//! download.  Useful for checking export output without a browser.
//!
//! # Usage
//!
//! ```text
//! cargo run --bin qrcraft-cli -- [OPTIONS] <CONTENT>
//! RUST_LOG=debug cargo run --bin qrcraft-cli -- --format pdf "https://example.com"
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use qrcraft_render::{ExportFormat, GeneratorState};

/// Render a QR code and export it as PNG, JPEG, PDF, or CSV.
#[derive(Parser)]
#[command(name = "qrcraft-cli", version)]
struct Cli {
    /// Text or URL to encode.
    #[arg(default_value = GeneratorState::DEFAULT_CONTENT)]
    content: String,

    /// Edge length of the QR code in pixels.
    #[arg(
        long,
        default_value_t = GeneratorState::DEFAULT_SIZE,
        value_parser = clap::builder::RangedU64ValueParser::<u32>::new()
            .range(u64::from(GeneratorState::MIN_SIZE)..=u64::from(GeneratorState::MAX_SIZE)),
    )]
    size: u32,

    /// Dark module color (any CSS color; malformed values fall back to black).
    #[arg(long, default_value = GeneratorState::DEFAULT_FOREGROUND)]
    fg: String,

    /// Background color (any CSS color; malformed values fall back to white).
    #[arg(long, default_value = GeneratorState::DEFAULT_BACKGROUND)]
    bg: String,

    /// Export format.
    #[arg(long, value_enum, default_value_t = Format::Png)]
    format: Format,

    /// Output path.  Defaults to the format's download filename in the
    /// current directory (e.g. `qrcode.png`).
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Full generator state as a JSON string.
    ///
    /// When provided, all other state flags are ignored.  Missing fields
    /// take their default values.
    #[arg(long)]
    state_json: Option<String>,

    /// Print the resolved generator state as JSON before exporting.
    #[arg(long)]
    print_state: bool,
}

/// Export format selection.
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Lossless PNG image.
    Png,
    /// JPEG image at quality 95.
    Jpeg,
    /// Single-page PDF document.
    Pdf,
    /// Settings table as CSV.
    Csv,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Png => Self::Png,
            Format::Jpeg => Self::Jpeg,
            Format::Pdf => Self::Pdf,
            Format::Csv => Self::Csv,
        }
    }
}

/// Build a [`GeneratorState`] from CLI arguments.
///
/// If `--state-json` is provided, the JSON is parsed directly and all
/// individual state flags are ignored.  Otherwise, the state is
/// assembled from the individual flags through the same setters the UI
/// uses.
fn state_from_cli(cli: &Cli) -> Result<GeneratorState, String> {
    if let Some(ref json) = cli.state_json {
        let state: GeneratorState = serde_json::from_str(json)
            .map_err(|e| format!("Error parsing --state-json: {e}"))?;
        if !state.size_in_range() {
            return Err(format!(
                "size {} in --state-json is outside {}..={}",
                state.size,
                GeneratorState::MIN_SIZE,
                GeneratorState::MAX_SIZE,
            ));
        }
        return Ok(state);
    }

    let mut state = GeneratorState::default();
    state.set_content(cli.content.as_str());
    state.set_size(cli.size);
    state.set_foreground_color(cli.fg.as_str());
    state.set_background_color(cli.bg.as_str());
    state.set_export_format(cli.format.into());
    Ok(state)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let state = match state_from_cli(&cli) {
        Ok(s) => s,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    if cli.print_state {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing state: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    // A render failure leaves the artifact absent; raster formats then
    // no-op exactly like the web panel does.
    let artifact = match qrcraft_render::render_state(&state) {
        Ok(artifact) => Some(artifact),
        Err(e) => {
            log::warn!("render failed: {e}");
            None
        }
    };

    let timestamp = qrcraft_export::timestamp::now_iso8601();
    let file = match qrcraft_export::export(&state, artifact.as_ref(), &timestamp) {
        Ok(Some(file)) => file,
        Ok(None) => {
            eprintln!("Nothing to export (empty content or no rendered QR code)");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Export failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(file.filename));
    match std::fs::write(&path, &file.bytes) {
        Ok(()) => {
            eprintln!(
                "{} written to {} ({} bytes)",
                state.export_format,
                path.display(),
                file.bytes.len(),
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error writing {}: {e}", path.display());
            ExitCode::FAILURE
        }
    }
}
