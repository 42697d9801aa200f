//! namedupe - name-based maybe-duplicate grouper.
//!
//! Lists a directory and partitions its entries into contiguous groups of
//! files whose names suggest they are exports of the same shot, e.g.
//! `264.CR2` and `264-2.CR2`. Grouping is a cheap name heuristic meant to
//! feed a later deduplication decision; no file content is read and no
//! file is ever modified.

pub mod cli;
pub mod error;
pub mod grouping;
pub mod logging;
pub mod output;
pub mod scanner;

use anyhow::Result;

use crate::cli::{Cli, OutputFormat};
use crate::error::ExitCode;
use crate::grouping::GroupingSummary;
use crate::output::{JsonOutput, TextReport};

/// Run the application: list the directory, group its entries, report.
///
/// Returns the exit code for a completed run. Any listing or grouping
/// failure terminates the run and surfaces as an error; there is no
/// partial-result recovery.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);
    if cli.no_color {
        yansi::disable();
    }

    let Some(path) = cli.path else {
        anyhow::bail!("path is required");
    };

    let entries = scanner::list_directory(&path)?;
    log::info!("grouping {} entries from {}", entries.len(), path.display());

    let groups = grouping::group(entries)?;
    let summary = GroupingSummary::from_groups(&groups);
    log::debug!(
        "{} groups: {} candidates, {} singletons",
        summary.group_count,
        summary.candidate_groups,
        summary.singletons
    );

    let exit_code = if summary.candidate_groups > 0 {
        ExitCode::Success
    } else {
        ExitCode::NoCandidates
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.output {
        OutputFormat::Text => TextReport::new(&groups, &summary).write_to(&mut out)?,
        OutputFormat::Json => JsonOutput::new(&groups, &summary, exit_code).write_to(&mut out, true)?,
    }

    if cli.dry_run {
        log::info!("dry run: stopping after grouping");
    } else {
        // The merge/delete step does not exist yet; every run stops here.
        log::info!(
            "no action taken on {} candidate group(s)",
            summary.candidate_groups
        );
    }

    Ok(exit_code)
}
