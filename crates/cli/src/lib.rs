//! Front end for the backups-filter command
//!
//! Reads backup timestamps from a stream, asks the core which ones are
//! redundant under the configured retention policy, and writes the answer
//! back one line per entry.

pub mod args;
pub mod logging;
pub mod settings;
pub mod util;

pub use args::Cli;
pub use settings::Settings;

use anyhow::{Context, Result};
use filter_core::TracingObserver;
use std::io::{BufRead, Write};

/// Run one filtering pass from `input` to `output`.
///
/// Nothing is written until every line has been read and parsed, so a
/// failure never leaves a partial list behind. Returns the number of lines
/// written.
pub fn run<R: BufRead, W: Write>(settings: &Settings, input: R, output: W) -> Result<usize> {
    let policy = settings.policy()?;

    let mut lines = util::read_lines(input).context("Failed to read input")?;
    settings.order.to_oldest_first(&mut lines);

    let reference_day = settings.reference_day();
    tracing::debug!(
        %reference_day,
        lines = lines.len(),
        order = %settings.order,
        mode = %settings.selection,
        "filtering"
    );

    let mut selected = filter_core::select(
        &policy,
        &lines,
        &settings.layout,
        reference_day,
        settings.selection,
        &mut TracingObserver,
    )?;
    settings.order.restore(&mut selected);

    util::write_lines(output, &selected).context("Failed to write output")?;
    Ok(selected.len())
}
