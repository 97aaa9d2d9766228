//! Command-line interface for generating and exporting kolam patterns

use crate::algorithm::bias::{BiasSource, SeededBias};
use crate::algorithm::generator::{self, Algorithm, Generation, Outcome, PatternRequest};
use crate::io::configuration::{
    DEFAULT_COMPLEXITY, DEFAULT_GRID_SIZE, DEFAULT_PALETTE, DEFAULT_SEED, PROGRESS_STEP_THRESHOLD,
};
use crate::io::error::Result;
use crate::io::image::{self, Theme};
use crate::io::progress::ProgressManager;
use clap::builder::PossibleValue;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

// Kept here so the algorithm layer stays free of CLI concerns
impl ValueEnum for Algorithm {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::SingleStroke, Self::MultiStroke]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::SingleStroke => PossibleValue::new("single-stroke")
                .help("One continuous stroke from the grid center"),
            Self::MultiStroke => {
                PossibleValue::new("multi-stroke").help("Greedy strokes aiming for grid coverage")
            }
        })
    }
}

#[derive(Parser)]
#[command(name = "kolamgen")]
#[command(
    author,
    version,
    about = "Generate traditional kolam patterns using randomized grid walks"
)]
/// Command-line arguments for the pattern generation tool
pub struct Cli {
    /// Output PNG file (patterns beyond the first get numbered suffixes)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Walk algorithm variant
    #[arg(short, long, value_enum, default_value_t = Algorithm::SingleStroke)]
    pub algorithm: Algorithm,

    /// Dot-grid size, clamped to [4, 20]
    #[arg(short = 's', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Pattern complexity, clamped to [0.1, 0.9]; lower values turn forward more often
    #[arg(short, long, default_value_t = DEFAULT_COMPLEXITY)]
    pub complexity: f64,

    /// Random seed for reproducible generation
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Background theme
    #[arg(short, long, value_enum, default_value_t = Theme::Light)]
    pub theme: Theme,

    /// Stroke color as #rrggbb, or "random" for a palette pick
    #[arg(long)]
    pub color: Option<String>,

    /// Number of patterns to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Suppress progress output and diagnostics
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates pattern generation and export for the CLI
pub struct PatternProcessor {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl PatternProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli
            .should_show_progress()
            .then(|| ProgressManager::new(PROGRESS_STEP_THRESHOLD));

        Self { cli, progress }
    }

    /// Generate and export the requested patterns
    ///
    /// # Errors
    ///
    /// Returns an error if the stroke color fails to parse or a rendered
    /// pattern cannot be written to disk
    // Allow print for degenerate-generation diagnostics
    #[allow(clippy::print_stderr)]
    pub fn process(&mut self) -> Result<()> {
        let request = PatternRequest {
            grid_size: self.cli.size,
            complexity: self.cli.complexity,
            algorithm: self.cli.algorithm,
        }
        .clamped();

        let mut bias = SeededBias::new(self.cli.seed);
        let count = self.cli.count.max(1);

        for index in 0..count {
            let label = format!("pattern {}/{count}", index + 1);

            let generation = Self::run(&mut self.progress, &request, &mut bias, &label);

            if generation.outcome == Outcome::Degenerate && !self.cli.quiet {
                eprintln!("Warning: {label} was degenerate; substituted the center point");
            }

            let stroke = self.resolve_stroke(&mut bias)?;
            let output_path = Self::numbered_output(&self.cli.output, index, count);
            image::export_pattern_png(&generation.points, self.cli.theme, stroke, &output_path)?;
        }

        Ok(())
    }

    fn run(
        progress: &mut Option<ProgressManager>,
        request: &PatternRequest,
        bias: &mut dyn BiasSource,
        label: &str,
    ) -> Generation {
        let Some(pm) = progress.as_mut() else {
            return generator::generate(request, bias, None);
        };

        let mut report = |step: usize, total: usize| pm.report(label, step, total);
        let generation = generator::generate(request, bias, Some(&mut report));
        pm.finish();
        generation
    }

    // None keeps the theme's default stroke color
    fn resolve_stroke(&self, bias: &mut dyn BiasSource) -> Result<Option<[u8; 4]>> {
        match self.cli.color.as_deref() {
            None => Ok(None),
            Some("random") => {
                let rgb = DEFAULT_PALETTE
                    .get(bias.pick(DEFAULT_PALETTE.len()))
                    .copied()
                    .unwrap_or([0x1f, 0x77, 0xb4]);
                Ok(Some([rgb[0], rgb[1], rgb[2], 0xff]))
            }
            Some(value) => image::parse_hex_color(value).map(Some),
        }
    }

    fn numbered_output(output: &Path, index: usize, count: usize) -> PathBuf {
        if count <= 1 {
            return output.to_path_buf();
        }

        let stem = output.file_stem().unwrap_or_default();
        let extension = output
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("png");
        let name = format!("{}_{}.{extension}", stem.to_string_lossy(), index + 1);

        output
            .parent()
            .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parses_from_kebab_case() {
        assert_eq!(
            <Algorithm as ValueEnum>::from_str("multi-stroke", false).ok(),
            Some(Algorithm::MultiStroke)
        );
        assert_eq!(
            <Algorithm as ValueEnum>::from_str("single-stroke", false).ok(),
            Some(Algorithm::SingleStroke)
        );
        assert!(<Algorithm as ValueEnum>::from_str("freehand", false).is_err());
    }

    #[test]
    fn test_numbered_output_leaves_single_pattern_alone() {
        let path = PathBuf::from("out/kolam.png");
        assert_eq!(PatternProcessor::numbered_output(&path, 0, 1), path);
    }

    #[test]
    fn test_numbered_output_suffixes_batches() {
        let path = PathBuf::from("out/kolam.png");
        assert_eq!(
            PatternProcessor::numbered_output(&path, 2, 4),
            PathBuf::from("out/kolam_3.png")
        );
    }
}
