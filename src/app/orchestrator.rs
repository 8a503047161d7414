//! Main application orchestrator.
//!
//! Coordinates one console session:
//! 1. Initializes logging.
//! 2. Prints the introduction.
//! 3. Loads the dictionary, from `--dictionary` or an interactive prompt.
//! 4. Repeatedly prompts for two words, searches for a shortest ladder and
//!    presents the result, until the user quits.
//!
//! The verbose log is flushed after every query unless running quiet.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::presenter;
use super::prompter::{self, Query};
use super::{verbose_eprintln, verbose_println};
use crate::ladder::LadderFinder;
use std::io::{self, BufRead, Write};

/// Counts of what happened during a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub queries: usize,
    pub ladders_found: usize,
}

/// Runs the application on the process console.
///
/// # Errors
/// Returns `AppError` for console failures, or when no dictionary could be
/// loaded. A query without a ladder is not an error.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            // The session still runs, only without a log file.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = run_session(&cli, &mut stdin.lock(), &mut stdout.lock());

    match &result {
        Ok(summary) => verbose_println!(
            quiet_mode,
            "Session finished: {} queries, {} ladders found",
            summary.queries,
            summary.ladders_found
        ),
        Err(e) => verbose_eprintln!(quiet_mode, "Session aborted: {}", e),
    }
    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!("[WARNING] Failed to perform final flush of the log: {}", e);
        }
    }

    result.map(|_| ())
}

/// Runs one full session over the given console streams.
pub fn run_session<R: BufRead, W: Write>(
    cli: &Cli,
    input: &mut R,
    output: &mut W,
) -> Result<SessionSummary, AppError> {
    let quiet_mode = cli.quiet;

    writeln!(output, "Welcome to Word Ladder!")?;
    writeln!(
        output,
        "Please give me two English words, and I will change the first into the second by changing one letter at a time."
    )?;
    writeln!(output)?;

    let dictionary = match &cli.dictionary {
        Some(path) => file_handler::load_dictionary(path, quiet_mode)?,
        None => file_handler::prompt_for_dictionary(input, output, quiet_mode)?,
    };

    // Per-length counts for the query log, computed once per session.
    let length_counts = if quiet_mode {
        Default::default()
    } else {
        dictionary.count_by_length()
    };

    let finder = LadderFinder::new(&dictionary);
    let mut summary = SessionSummary::default();

    while let Query::Ladder { start, target } =
        prompter::prompt_for_query(&dictionary, input, output, quiet_mode)?
    {
        let length = start.chars().count();
        verbose_println!(
            quiet_mode,
            "   => {} dictionary words of length {}",
            length_counts.get(&length).copied().unwrap_or(0),
            length
        );

        let report = finder.search(&start, &target)?;
        verbose_println!(
            quiet_mode,
            "   => expanded {} ladders, discovered {} words",
            report.expanded,
            report.discovered
        );
        match &report.ladder {
            Some(path) => verbose_println!(quiet_mode, "   => ladder of {} words: {}", path.len(), path),
            None => verbose_println!(quiet_mode, "   => no ladder"),
        }

        presenter::present_ladder(output, &start, &target, report.ladder.as_ref(), cli.forward)?;
        summary.queries += 1;
        if report.ladder.is_some() {
            summary.ladders_found += 1;
        }

        if !quiet_mode {
            if let Err(e) = logger::flush_global_logger() {
                eprintln!(
                    "[WARNING] Failed to flush the log after query '{}' -> '{}': {}",
                    start, target, e
                );
            }
        }
    }

    writeln!(output, "Have a nice day.")?;
    Ok(summary)
}
