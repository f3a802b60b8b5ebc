use crate::bio::classification::{filter_candidates, FilterSummary, ScopClass, CLASS_LABELS};
use crate::bio::fasta::{parse_fasta, write_fasta};
use crate::cli::formatter::{self, format_number, print_section, print_stats_table, print_success, print_tip, print_warning};
use crate::core::config::{default_config, load_config, Config};
use crate::core::diversity_selector::{DiversitySelector, SelectionOutcome, SelectionStrategy};
use crate::core::selection::{ProgressBarObserver, SelectionObserver, TracingObserver};
use crate::report::{ReportFormat, SelectionReport};
use crate::DiverseError;
use anyhow::Context;
use clap::builder::PossibleValuesParser;
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug, Clone, Default)]
pub struct SelectArgs {
    /// ASTRAL FASTA file (optionally gzipped)
    #[arg(long, value_name = "FILE")]
    pub fasta: PathBuf,

    /// SCOP hierarchy file. Only checked for existence; classes are read
    /// from the FASTA headers
    #[arg(long, value_name = "FILE")]
    pub hie: PathBuf,

    /// SCOP classes to include [default: A B A/B A+B]
    #[arg(long, num_args = 1.., value_parser = PossibleValuesParser::new(CLASS_LABELS))]
    pub classes: Option<Vec<String>>,

    /// Keep sequences strictly shorter than this [default: 70]
    #[arg(long, value_name = "LENGTH")]
    pub maxlen: Option<usize>,

    /// Number of sequences to select [default: 30]
    #[arg(short = 'n', long = "n", value_name = "COUNT")]
    pub n: Option<usize>,

    /// Output FASTA file [default: selected_domains.fa]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output selection report [default: selection_info.tsv]
    #[arg(long, value_name = "FILE")]
    pub info: Option<PathBuf>,

    /// Report format: tsv or json
    #[arg(long, value_name = "FORMAT")]
    pub report_format: Option<ReportFormat>,

    /// How max identities are computed: incremental or recompute.
    /// Both produce the same selection
    #[arg(long, value_name = "STRATEGY")]
    pub strategy: Option<SelectionStrategy>,

    /// Configuration file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

/// Effective settings after merging the config file with arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectSettings {
    pub classes: Vec<ScopClass>,
    pub max_length: usize,
    pub target_count: usize,
    pub strategy: SelectionStrategy,
    pub output: PathBuf,
    pub info: PathBuf,
    pub report_format: ReportFormat,
    pub line_width: usize,
    pub show_progress: bool,
}

impl SelectSettings {
    pub fn resolve(args: &SelectArgs, config: &Config) -> Result<Self, DiverseError> {
        let labels = args.classes.as_ref().unwrap_or(&config.filter.classes);
        let classes = labels
            .iter()
            .map(|label| ScopClass::from_label(label))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            classes,
            max_length: args.maxlen.unwrap_or(config.filter.max_length),
            target_count: args.n.unwrap_or(config.selection.target_count),
            strategy: args.strategy.unwrap_or(config.selection.strategy),
            output: args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.output.fasta)),
            info: args
                .info
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.output.info)),
            report_format: args.report_format.unwrap_or(config.output.report_format),
            line_width: config.output.line_width,
            show_progress: config.output.show_progress && !args.no_progress,
        })
    }
}

/// Everything a finished run produced.
#[derive(Debug)]
pub struct SelectionRun {
    pub settings: SelectSettings,
    pub filter: FilterSummary,
    pub outcome: SelectionOutcome,
    pub report: SelectionReport,
}

pub fn load_settings(args: &SelectArgs) -> anyhow::Result<SelectSettings> {
    let config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => default_config(),
    };
    Ok(SelectSettings::resolve(args, &config)?)
}

fn check_hierarchy(path: &Path) -> Result<(), DiverseError> {
    if !path.exists() {
        return Err(DiverseError::Config(format!(
            "SCOP hierarchy file not found: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Read, filter, select and write outputs.
pub fn execute<O>(
    args: &SelectArgs,
    settings: SelectSettings,
    observer: &mut O,
) -> anyhow::Result<SelectionRun>
where
    O: SelectionObserver + ?Sized,
{
    check_hierarchy(&args.hie)?;

    info!("Parsing FASTA file: {}", args.fasta.display());
    let sequences = parse_fasta(&args.fasta)
        .with_context(|| format!("Failed to read {}", args.fasta.display()))?;

    let filter = filter_candidates(sequences, &settings.classes, settings.max_length);
    info!(
        "Found {} domains matching criteria from {} total sequences",
        filter.candidates.len(),
        filter.total_sequences
    );
    for (class, count) in filter.class_distribution() {
        info!("  {}: {}", class, count);
    }

    if filter.candidates.is_empty() {
        return Err(DiverseError::NoCandidates {
            total: filter.total_sequences,
        }
        .into());
    }

    let outcome = DiversitySelector::new()
        .with_strategy(settings.strategy)
        .select_with_observer(&filter.candidates, settings.target_count, observer);

    let selected = outcome.selected(&filter.candidates);
    write_fasta(
        &settings.output,
        selected.iter().map(|c| &c.sequence),
        settings.line_width,
    )
    .with_context(|| format!("Failed to write {}", settings.output.display()))?;

    let report = SelectionReport::new(&outcome, &filter.candidates, settings.target_count);
    report
        .write(&settings.info, settings.report_format)
        .with_context(|| format!("Failed to write {}", settings.info.display()))?;

    Ok(SelectionRun {
        settings,
        filter,
        outcome,
        report,
    })
}

pub fn run(args: SelectArgs) -> anyhow::Result<()> {
    formatter::init();
    print_section("Diverse domain selection");

    let settings = load_settings(&args)?;
    let result = if settings.show_progress {
        execute(&args, settings, &mut ProgressBarObserver::new())?
    } else {
        execute(&args, settings, &mut TracingObserver)?
    };

    let mut stats = vec![
        (
            "Sequences read".to_string(),
            format_number(result.filter.total_sequences),
        ),
        (
            "Matching candidates".to_string(),
            format_number(result.filter.candidates.len()),
        ),
    ];
    for (class, count) in result.filter.class_distribution() {
        stats.push((format!("  class {}", class), format_number(count)));
    }
    stats.push(("Selected".to_string(), format_number(result.outcome.len())));
    if let Some(mean) = result.report.mean_max_identity() {
        stats.push(("Mean max identity".to_string(), format!("{:.4}", mean)));
    }
    print_stats_table("Selection", stats);

    if result.outcome.trivial {
        print_tip(&format!(
            "Only {} candidates matched, so all were kept. Widen --classes or --maxlen for a real selection",
            result.outcome.len()
        ));
    } else if result.outcome.len() < result.settings.target_count {
        print_warning(&format!(
            "Stopped after {} of {} requested: remaining candidates duplicate the selection",
            result.outcome.len(),
            result.settings.target_count
        ));
    }

    print_success(&format!(
        "Selected {} sequences saved to: {}",
        result.outcome.len(),
        result.settings.output.display()
    ));
    print_success(&format!(
        "Selection info saved to: {}",
        result.settings.info.display()
    ));

    Ok(())
}
