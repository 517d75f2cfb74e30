//! Retouch CLI - headless front-end for the Retouch editor
//!
//! Opens an image, replays a list of edit steps (including `undo` and
//! `redo`) in order, and saves the result.
//!
//! ```text
//! retouch photo.jpg -e blur=7 -e undo -e grayscale -o out.png
//! ```
//!
//! Without `-o` the result is written to a timestamped PNG in the home
//! directory. Set `RUST_LOG` to override the log filter.

mod replay;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use retouch_core::Editor;
use tracing_subscriber::EnvFilter;

use replay::{replay, Step};

#[derive(Debug, Parser)]
#[command(name = "retouch", version, about = "Apply edits to an image with undo/redo")]
struct Cli {
    /// Image to open
    input: PathBuf,

    /// Edit step, applied in order: blur=N, crop=WxH, grayscale, fliph,
    /// flipv, hue=N, saturation=N, brightness=N, gradient=N, undo, redo
    #[arg(short = 'e', long = "edit", value_name = "STEP")]
    steps: Vec<Step>,

    /// Output file; the format follows the extension
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print file information after loading
    #[arg(long)]
    info: bool,

    /// Log every history transition
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut editor = Editor::new();
    editor
        .open(&cli.input)
        .with_context(|| format!("failed to open {}", cli.input.display()))?;

    if cli.info {
        if let Some(info) = editor.info() {
            println!("{info}");
        }
    }

    let summary = replay(&mut editor, &cli.steps);
    tracing::info!(
        applied = summary.applied,
        notices = summary.notices.len(),
        "replayed edit steps"
    );

    let saved_to = match &cli.output {
        Some(path) => {
            editor.save(path).context("failed to save image")?;
            path.clone()
        }
        None => editor.save_default().context("failed to save image")?,
    };
    println!("Image saved successfully to {}", saved_to.display());
    Ok(())
}
