//! Align command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{create_formatter, Labels, OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use linealign_core::{AlignConfig, Corpus, WindowScheduler};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

/// Arguments for the align command
#[derive(Debug, Args)]
pub struct AlignArgs {
    /// Source-language corpus, one line per entry
    #[arg(short = 'a', long, value_name = "FILE")]
    pub corpus_a: PathBuf,

    /// Target-language corpus, one line per entry
    #[arg(short = 'b', long, value_name = "FILE")]
    pub corpus_b: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Maximum number of lines to process per corpus
    #[arg(short, long, value_name = "LINES")]
    pub limit: Option<usize>,

    /// Lines per alignment window
    #[arg(short, long, value_name = "LINES")]
    pub window: Option<usize>,

    /// Label printed before corpus A lines in text output
    #[arg(long, value_name = "LABEL")]
    pub label_a: Option<String>,

    /// Label printed before corpus B lines in text output
    #[arg(long, value_name = "LABEL")]
    pub label_b: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Settings after merging flags, config file and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    /// Scheduler configuration
    pub align: AlignConfig,
    /// Output format
    pub format: OutputFormat,
    /// Side labels
    pub labels: Labels,
    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl AlignArgs {
    /// Execute the align command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting alignment");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let settings = self.resolve(&file_config);
        settings.align.validate().map_err(CliError::from)?;

        // The last window may reach past `limit` when it is not a multiple
        // of the window size
        let required = settings.align.required_lines();
        let lines = required.max(settings.align.limit);
        let corpus_a = load_corpus(&self.corpus_a, lines, required)?;
        let corpus_b = load_corpus(&self.corpus_b, lines, required)?;

        let formatter = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output: {}", path.display()))?;
                create_formatter(
                    settings.format,
                    BufWriter::new(file),
                    settings.labels.clone(),
                    settings.pretty_json,
                )
            }
            None => create_formatter(
                settings.format,
                io::stdout(),
                settings.labels.clone(),
                settings.pretty_json,
            ),
        };

        let pairs = self.align(&corpus_a, &corpus_b, settings.align, formatter)?;
        log::info!("Wrote {} aligned pairs", pairs);

        Ok(())
    }

    /// Merge command-line flags over the config file
    pub fn resolve(&self, file_config: &CliConfig) -> ResolvedSettings {
        let alignment = &file_config.alignment;
        let output = &file_config.output;

        ResolvedSettings {
            align: AlignConfig::new(
                self.limit.unwrap_or(alignment.limit),
                self.window.unwrap_or(alignment.window),
            ),
            format: self.format.unwrap_or(output.format),
            labels: Labels {
                a: self.label_a.clone().unwrap_or_else(|| output.label_a.clone()),
                b: self.label_b.clone().unwrap_or_else(|| output.label_b.clone()),
            },
            pretty_json: output.pretty_json,
        }
    }

    /// Run the scheduler and stream its pairs into the formatter
    fn align(
        &self,
        corpus_a: &Corpus,
        corpus_b: &Corpus,
        config: AlignConfig,
        mut formatter: Box<dyn OutputFormatter>,
    ) -> Result<usize> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_rounds(config.rounds() as u64);

        let scheduler = WindowScheduler::new(corpus_a, corpus_b, config)
            .map_err(CliError::from)?
            .with_observer(|report| progress.round_completed(report));

        let mut count = 0;
        for pair in scheduler {
            let pair = match pair {
                Ok(pair) => pair,
                Err(err) => {
                    progress.abandon();
                    return Err(CliError::from(err).into());
                }
            };
            formatter.format_pair(&pair)?;
            count += 1;
        }

        formatter.finish()?;
        progress.finish();

        Ok(count)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

/// Read a corpus and make sure it covers every window of the run
fn load_corpus(path: &Path, limit: usize, required: usize) -> Result<Corpus> {
    let corpus = FileReader::read_corpus(path, Some(limit))?;

    if corpus.len() < required {
        return Err(CliError::CorpusTooShort {
            path: path.display().to_string(),
            lines: corpus.len(),
            required,
        }
        .into());
    }

    Ok(corpus)
}
