// src/cli.rs
use anyhow::{Context as _, Result, bail};
use clap::Parser;
use std::env;
use std::path::{Path, PathBuf};

use crate::core::config::{Config, load_config};
use crate::core::scanner::{load_subjects, scan_session_logs};
use crate::core::sessions::tally;
use crate::models::{AttendanceState, Overview};
use crate::report::{Summary, SubjectReport};
use crate::utils::{keep_subject, subject_filter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Classes held so far
    #[arg(short = 'H', long, allow_negative_numbers = true)]
    pub held: Option<i64>,

    /// Classes attended so far
    #[arg(short, long, allow_negative_numbers = true)]
    pub attended: Option<i64>,

    /// Minimum attendance percentage (defaults to sib.toml, then 75)
    #[arg(short, long, allow_negative_numbers = true)]
    pub minimum: Option<f64>,

    /// Subject name shown when analysing --held/--attended
    #[arg(short, long, default_value = "Subject")]
    pub name: String,

    /// Decide whether the next class can be skipped
    #[arg(short, long)]
    pub bunk: bool,

    /// Analyse as if this many more classes were held and missed
    #[arg(long, default_value = "0")]
    pub miss: u64,

    /// YAML file with subject records (name, total_classes, attended_classes)
    #[arg(short, long)]
    pub subjects: Option<PathBuf>,

    /// Directory of per-subject session logs
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Only report subjects whose name matches this glob (e.g. "CS*")
    #[arg(short, long)]
    pub only: Option<String>,

    /// Percentage points above the minimum still counted as a warning
    #[arg(long)]
    pub margin: Option<f64>,

    /// Print JSON instead of text
    #[arg(short, long)]
    pub json: bool,

    /// Log filter, e.g. "debug" or "sib=trace" (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

pub fn run(args: Args) -> Result<()> {
    let output = render(&args)?;
    println!("{output}");
    Ok(())
}

/// Produces the text (or JSON) `run` prints.
///
/// # Errors
///
/// This function may return an error if:
/// * No input was given, or only one of `--held`/`--attended`
/// * A count, minimum or margin is invalid
/// * The configuration, subjects file or a session log cannot be read
pub fn render(args: &Args) -> Result<String> {
    let config = load_config(&config_dir(args)?)?;
    let default_minimum = args.minimum.unwrap_or(config.minimum_percentage);
    let margin = args.margin.unwrap_or(config.comfort_margin);

    if let Some(dir) = &args.directory {
        let entries = session_log_entries(dir, &config, args, default_minimum)?;
        return render_summary(entries, args, margin);
    }

    if let Some(path) = &args.subjects {
        let entries = subject_entries(path, args, default_minimum)?;
        return render_summary(entries, args, margin);
    }

    match (args.held, args.attended) {
        (Some(held), Some(attended)) => {
            let state = AttendanceState::new(held, attended, default_minimum)?;
            let report = build_report(&args.name, state, args, margin)?;
            if args.json {
                Ok(serde_json::to_string_pretty(&report)?)
            } else {
                Ok(report.render())
            }
        }
        (None, None) => {
            bail!("Nothing to analyse: pass --held and --attended, --subjects or --directory")
        }
        _ => bail!("--held and --attended must be given together"),
    }
}

// sib.toml is looked up from the directory being scanned, the subjects file's
// directory, or the working directory, in that order.
fn config_dir(args: &Args) -> Result<PathBuf> {
    let dir = args
        .directory
        .clone()
        .or_else(|| {
            args.subjects
                .as_deref()
                .and_then(Path::parent)
                .map(Path::to_path_buf)
        })
        .unwrap_or_default();
    if dir.is_absolute() {
        Ok(dir)
    } else {
        Ok(env::current_dir()?.join(dir))
    }
}

fn session_log_entries(
    dir: &PathBuf,
    config: &Config,
    args: &Args,
    default_minimum: f64,
) -> Result<Vec<(String, AttendanceState)>> {
    let filter = subject_filter(args.only.as_deref())?;
    let logs = scan_session_logs(dir, config)
        .with_context(|| format!("Failed to scan directory: {}", dir.display()))?;

    let mut entries = Vec::new();
    for log in logs {
        if !keep_subject(filter.as_ref(), &log.subject) {
            continue;
        }
        let minimum = log.min_percentage.unwrap_or(default_minimum);
        let state = tally(&log.sessions)
            .and_then(|counts| counts.into_state(minimum).map_err(Into::into))
            .with_context(|| format!("Invalid session log for subject: {}", log.subject))?;
        entries.push((log.subject, state));
    }
    Ok(entries)
}

fn subject_entries(
    path: &Path,
    args: &Args,
    default_minimum: f64,
) -> Result<Vec<(String, AttendanceState)>> {
    let filter = subject_filter(args.only.as_deref())?;

    let mut entries = Vec::new();
    for subject in load_subjects(path)? {
        if !keep_subject(filter.as_ref(), &subject.name) {
            continue;
        }
        let state = subject
            .state(default_minimum)
            .with_context(|| format!("Invalid record for subject: {}", subject.name))?;
        entries.push((subject.name, state));
    }
    Ok(entries)
}

fn build_report(
    name: &str,
    state: AttendanceState,
    args: &Args,
    margin: f64,
) -> Result<SubjectReport> {
    let state = state.with_extra_misses(args.miss);
    let report = SubjectReport::new(name, &state, margin)?;
    if args.bunk {
        Ok(report.with_decision(&state))
    } else {
        Ok(report)
    }
}

fn render_summary(
    entries: Vec<(String, AttendanceState)>,
    args: &Args,
    margin: f64,
) -> Result<String> {
    if entries.is_empty() {
        tracing::warn!("no subjects to report");
    }

    let mut overview = Overview::new();
    let mut subjects = Vec::with_capacity(entries.len());
    for (name, state) in entries {
        overview.add(&state.with_extra_misses(args.miss));
        subjects.push(build_report(&name, state, args, margin)?);
    }

    let summary = Summary {
        subjects,
        overview: overview.into(),
    };
    if args.json {
        Ok(serde_json::to_string_pretty(&summary)?)
    } else {
        Ok(summary.render())
    }
}
