//! Command-line interface for the binary pattern pixelation filter

use crate::algorithm::pixelator::PatternPixelator;
use crate::io::configuration::{DEFAULT_BLOCK_SIZE, DEFAULT_PATTERN, OUTPUT_PREFIX};
use crate::io::error::Result;
use crate::io::image::{load_image, save_image};
use crate::io::progress::ProgressManager;
use crate::pattern::PatternKind;
use clap::Parser;
use image::RgbImage;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "binpix")]
#[command(
    author,
    version,
    about = "Convert images to pixelated blocks filled with binary on/off patterns"
)]
/// Command-line arguments for the pixelation tool
pub struct Cli {
    /// Input image path
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Side length of each block in pixels
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: u32,

    /// Pattern: checkerboard, diagonal, horizontal or vertical
    #[arg(short, long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Output image path (default: output_<pattern>.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress info lines and the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress and info lines should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Resolve the output path, defaulting to `output_<pattern>.png`
    pub fn output_path(&self, pattern: PatternKind) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!("{OUTPUT_PREFIX}{}.png", pattern.name()))
        })
    }
}

/// Orchestrates a single pixelation job: validate, load, process, save
pub struct JobRunner {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl JobRunner {
    /// Create a runner from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);

        Self { cli, progress }
    }

    /// Run the job to completion
    ///
    /// Configuration is validated before any file is touched, so a bad
    /// block size or pattern name never creates an output file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or if loading or
    /// saving the image fails.
    pub fn run(&mut self) -> Result<()> {
        let pixelator = PatternPixelator::new(self.cli.block_size, &self.cli.pattern)?;
        let image = load_image(&self.cli.input)?;

        self.print_info(&pixelator, &image);

        let (blocks_x, blocks_y) = pixelator.block_grid(image.width(), image.height());
        let total_blocks = u64::from(blocks_x) * u64::from(blocks_y);

        if let Some(ref mut pm) = self.progress {
            pm.start("Processing", total_blocks);
        }

        let output = pixelator.process_with_progress(&image, |completed| {
            if let Some(ref pm) = self.progress {
                pm.advance(completed);
            }
        });

        if let Some(ref pm) = self.progress {
            pm.finish();
        }

        let output_path = self.cli.output_path(pixelator.pattern());
        save_image(&output, &output_path)?;

        // Allow print for user feedback on completion
        #[allow(clippy::print_stderr)]
        if !self.cli.quiet {
            eprintln!("Saved: {}", output_path.display());
        }

        Ok(())
    }

    // Allow print for user feedback before processing starts
    #[allow(clippy::print_stderr)]
    fn print_info(&self, pixelator: &PatternPixelator, image: &RgbImage) {
        if self.cli.quiet {
            return;
        }

        let (blocks_x, blocks_y) = pixelator.block_grid(image.width(), image.height());

        eprintln!(
            "Input: {} ({}x{})",
            self.cli.input.display(),
            image.width(),
            image.height()
        );
        eprintln!(
            "Block size: {} px, cell size: {} px, pattern: {}",
            pixelator.block_size(),
            pixelator.cell_size(),
            pixelator.pattern().name()
        );
        eprintln!(
            "Blocks: {blocks_x} x {blocks_y} = {}",
            u64::from(blocks_x) * u64::from(blocks_y)
        );
    }
}
