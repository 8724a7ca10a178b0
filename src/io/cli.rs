//! Command-line interface for drawing trait combinations and compositing tokens

use crate::algorithm::drawing::Drawing;
use crate::io::configuration::DEFAULT_TOKENS_FILE;
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{Compositor, MissingLayerPolicy};
use crate::io::layers::load_layers;
use crate::io::progress::ProgressReporter;
use crate::io::specification::Specification;
use crate::io::tokens::{load_tokens, write_tokens};
use clap::{ArgAction, Args, Parser, Subcommand};
use env_logger::{Builder, Env};
use log::LevelFilter;
use rayon::ThreadPoolBuilder;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "traitmix")]
#[command(
    author,
    version,
    about = "Draw weighted trait combinations and composite layered token images"
)]
/// Command-line arguments shared by all commands
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Draw combinations of features for a given specification
    Draw(DrawArgs),
    /// Generate token images from drawn combinations
    Generate(GenerateArgs),
}

/// Arguments of the `draw` command
#[derive(Args, Debug)]
pub struct DrawArgs {
    /// Specification JSON with name, count and weighted features
    #[arg(short, long, value_name = "FILE")]
    pub spec: PathBuf,

    /// Token JSON to write
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_TOKENS_FILE)]
    pub output: PathBuf,
}

/// Arguments of the `generate` command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// JSON array of layer path templates, bottom layer first
    #[arg(short, long, value_name = "FILE")]
    pub layers: PathBuf,

    /// Base directory for layer images and the output directory
    #[arg(short, long, value_name = "DIR")]
    pub path: PathBuf,

    /// Token JSON written by `draw`
    #[arg(short, long, value_name = "FILE")]
    pub tokens: PathBuf,

    /// Handling of missing layer images
    #[arg(short, long, value_enum, default_value_t = MissingLayerPolicy::Break)]
    pub mode: MissingLayerPolicy,

    /// Limit compositing worker threads
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl Cli {
    /// Log level forced by the `-v` and `-q` counts, `None` when neither
    /// was given so the environment filter applies
    pub const fn log_level(&self) -> Option<LevelFilter> {
        match (self.quiet, self.verbose) {
            (0, 0) => None,
            (0, 1) => Some(LevelFilter::Debug),
            (0, _) => Some(LevelFilter::Trace),
            (1, _) => Some(LevelFilter::Warn),
            _ => Some(LevelFilter::Error),
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        self.quiet == 0
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the command
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Command::Draw(args) => args.execute().map(|_| ()),
            Command::Generate(args) => args
                .execute(self.should_show_progress())
                .map(|_| ()),
        }
    }
}

impl DrawArgs {
    /// Load the specification, draw, log both reports and write the tokens
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The specification cannot be read or is malformed
    /// - The count is negative or a feature has no positive weight
    /// - The token file cannot be written
    pub fn execute(&self) -> Result<Drawing> {
        let start_time = Instant::now();
        let spec = Specification::load(&self.spec)?;
        log::info!(
            "Drawing {} tokens for '{}' over {} features",
            spec.count,
            spec.name,
            spec.catalog.len()
        );

        let drawing = Drawing::from_specification(&spec)?;
        drawing.log_reports();

        write_tokens(&drawing.vectors, &self.output)?;
        log::info!(
            "Wrote {} tokens ({} distinct) to {} in {:.2?}",
            drawing.draw_count(),
            drawing.vectors.len(),
            self.output.display(),
            start_time.elapsed()
        );

        Ok(drawing)
    }
}

impl GenerateArgs {
    /// Composite one image per token, returning the number of images written
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The layer or token file cannot be read
    /// - The thread count is zero or the worker pool cannot be built
    /// - Any token fails to composite
    pub fn execute(&self, show_progress: bool) -> Result<usize> {
        let start_time = Instant::now();
        let layers = load_layers(&self.layers)?;
        let tokens = load_tokens(&self.tokens)?;
        log::info!(
            "Compositing {} tokens from {} layers",
            tokens.len(),
            layers.len()
        );

        let compositor = Compositor::new(&layers, &self.path, self.mode);
        let progress =
            ProgressReporter::with_visibility(tokens.len(), show_progress && !self.no_progress);

        match self.threads {
            Some(0) => {
                return Err(invalid_parameter(
                    "threads",
                    &0,
                    &"must be at least 1",
                ));
            }
            Some(threads) => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| invalid_parameter("threads", &threads, &e))?;
                pool.install(|| compositor.composite_all(&tokens, &progress))?;
            }
            None => compositor.composite_all(&tokens, &progress)?,
        }

        progress.finish();
        log::info!(
            "Composited {} images in {:.2?}",
            tokens.len(),
            start_time.elapsed()
        );

        Ok(tokens.len())
    }
}

/// Logger configuration: `env` supplies the filter unless `level` overrides it
pub fn logger_builder(level: Option<LevelFilter>, env: Env<'_>) -> Builder {
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder
}

/// Install the global logger, filtering by `RUST_LOG` (default `info`)
/// unless `level` is given
pub fn init_logging(level: Option<LevelFilter>) {
    let env = Env::default().default_filter_or("info");
    if let Err(e) = logger_builder(level, env).try_init() {
        log::debug!("Keeping the installed logger: {e}");
    }
}
