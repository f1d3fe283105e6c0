//! Command-line interface for batch analysis of lesion photos

use crate::inference::{Classifier, ModelSession, ScoreTable};
use crate::interpretation::interpreter::interpret_with;
use crate::io::configuration::{OUTPUT_EXTENSION, OUTPUT_SUFFIX, SUPPORTED_EXTENSIONS};
use crate::io::error::{AnalysisError, Result, file_system_error, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::report::render_report;
use clap::Parser;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "lesionlens")]
#[command(
    author,
    version,
    about = "Analyze skin lesion photos from classifier scores"
)]
/// Command-line arguments for the analysis tool
pub struct Cli {
    /// Image file or directory of images to analyze
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Score table with one line of classifier scores per image
    #[arg(short, long, value_name = "FILE")]
    pub scores: PathBuf,

    /// Suppress progress output and informational logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Analyze images even if a report already exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Also print each report to stdout
    #[arg(short, long)]
    pub print: bool,
}

impl Cli {
    /// Check if images with existing reports should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Outcome counts for one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Images analyzed and reported
    pub analyzed: usize,
    /// Images skipped because a report already existed
    pub skipped: usize,
    /// Images that could not be analyzed
    pub failed: usize,
}

// Images left to analyze after conflict and skip filtering
struct CollectedBatch {
    files: Vec<PathBuf>,
    skipped: usize,
    conflicting: usize,
}

/// Orchestrates batch analysis of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Analyze images according to CLI arguments using the score table classifier
    ///
    /// # Errors
    ///
    /// Returns an error if the target is invalid or the score table cannot be loaded.
    /// Failures on individual images are logged and counted instead.
    pub fn process(&mut self) -> Result<BatchSummary> {
        let scores = self.cli.scores.clone();
        self.process_with(|| ScoreTable::from_path(&scores))
    }

    /// Analyze images with a classifier acquired through `loader`
    ///
    /// # Errors
    ///
    /// Returns an error if the target is invalid or the classifier cannot be loaded
    pub fn process_with<C, F>(&mut self, loader: F) -> Result<BatchSummary>
    where
        C: Classifier,
        F: FnOnce() -> Result<C>,
    {
        let batch = self.collect_files()?;
        let files = batch.files;
        let mut summary = BatchSummary {
            skipped: batch.skipped,
            failed: batch.conflicting,
            ..BatchSummary::default()
        };

        if files.is_empty() {
            info!(
                skipped = summary.skipped,
                failed = summary.failed,
                "No images to analyze"
            );
            return Ok(summary);
        }

        let mut session = ModelSession::open(loader)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            if let Some(ref pm) = self.progress_manager {
                pm.start_image(file);
            }

            let outcome = self.process_file(&mut session, file);
            match &outcome {
                Ok(()) => summary.analyzed += 1,
                Err(e) => {
                    error!("{e}");
                    summary.failed += 1;
                }
            }

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_image(outcome.is_ok());
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        session.close();

        info!(
            analyzed = summary.analyzed,
            skipped = summary.skipped,
            failed = summary.failed,
            "Batch finished"
        );
        Ok(summary)
    }

    fn collect_files(&self) -> Result<CollectedBatch> {
        let candidates = if self.cli.target.is_file() {
            if !is_supported_image(&self.cli.target) {
                return Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &format!("must be an image ({})", SUPPORTED_EXTENSIONS.join(", ")),
                ));
            }
            vec![self.cli.target.clone()]
        } else if self.cli.target.is_dir() {
            let entries = std::fs::read_dir(&self.cli.target)
                .map_err(|e| file_system_error(&self.cli.target, "read directory", e))?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry
                    .map_err(|e| file_system_error(&self.cli.target, "read directory", e))?
                    .path();
                if path.is_file() && is_supported_image(&path) {
                    files.push(path);
                }
            }
            files.sort();
            files
        } else {
            return Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"must be an image file or directory",
            ));
        };

        let (candidates, conflicting) = claim_report_paths(candidates);

        let total = candidates.len();
        let files: Vec<PathBuf> = candidates
            .into_iter()
            .filter(|path| self.should_process_file(path))
            .collect();
        let skipped = total - files.len();
        Ok(CollectedBatch {
            files,
            skipped,
            conflicting,
        })
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            if !self.cli.quiet {
                warn!("Skipping: {} (report exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print for the --print flag
    #[allow(clippy::print_stdout)]
    fn process_file<C: Classifier>(
        &self,
        session: &mut ModelSession<C>,
        input_path: &Path,
    ) -> Result<()> {
        let predictions = session.analyze_file(input_path)?;
        let result = interpret_with(session.taxonomy(), &predictions)?;
        let report = render_report(&result, &predictions);

        let output_path = Self::get_output_path(input_path);
        std::fs::write(&output_path, &report)
            .map_err(|e| file_system_error(&output_path, "write report", e))?;

        info!(
            image = %input_path.display(),
            category = result.category.name,
            confidence = result.confidence,
            urgency = %result.urgency(),
            "Analyzed image"
        );

        if self.cli.print {
            println!("{}\n{report}", input_path.display());
        }

        Ok(())
    }

    /// Report path written for an input image: `<stem>_analysis.txt` beside it
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            OUTPUT_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Keep the first image for each report path and reject the rest
///
/// Images sharing a stem (`mole.png`, `mole.jpg`) would write the same
/// report. `paths` must already be in processing order; every later image is
/// logged as a [`AnalysisError::ReportConflict`] and counted.
fn claim_report_paths(paths: Vec<PathBuf>) -> (Vec<PathBuf>, usize) {
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::with_capacity(paths.len());
    let mut kept = Vec::with_capacity(paths.len());
    let mut conflicting = 0;

    for path in paths {
        let report = FileProcessor::get_output_path(&path);
        if let Some(owner) = claimed.get(&report) {
            let conflict = AnalysisError::ReportConflict {
                path,
                claimed_by: owner.clone(),
                report,
            };
            error!("{conflict}");
            conflicting += 1;
        } else {
            claimed.insert(report, path.clone());
            kept.push(path);
        }
    }
    (kept, conflicting)
}

/// Whether a path has one of the supported image extensions, ignoring case
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}
