use std::io;

use clap::{Command, CommandFactory};
use clap_complete::{generate, Generator};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::domain::{ordinal_score, wilson_score};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Wilson {
            positive,
            total,
            reserved,
            conf,
        }) => _wilson(*positive, *total, *reserved, *conf),
        Some(Commands::Ordinal { counts, conf }) => _ordinal(counts, *conf),
        Some(Commands::Completion { shell }) => {
            print_completions(*shell, &mut Cli::command());
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    }
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

#[instrument]
fn _wilson(positive: f64, total: f64, reserved: Option<f64>, conf: f64) -> CliResult<()> {
    debug!("positive: {:?}, total: {:?}, conf: {:?}", positive, total, conf);
    if let Some(r) = reserved {
        debug!("ignoring legacy third argument: {:?}", r);
    }
    let (positive, total) = resolve_counts(positive, total)?;
    let score = wilson_score(positive, total, conf)?;
    output::result(&format_score(score));
    Ok(())
}

#[instrument]
fn _ordinal(counts: &[f64], conf: f64) -> CliResult<()> {
    debug!("counts: {:?}, conf: {:?}", counts, conf);
    let counts = resolve_levels(counts)?;
    let score = ordinal_score(&counts, conf)?;
    output::result(&format_score(score));
    Ok(())
}

/// Normalize the wilson positionals to integer counts.
///
/// A non-integral first value in (0, 1) is read as a proportion and resolved
/// against the total; anything else must be a whole non-negative count.
pub fn resolve_counts(positive: f64, total: f64) -> CliResult<(u64, u64)> {
    for (name, v) in [("positive", positive), ("total", total)] {
        if !v.is_finite() || v < 0.0 {
            return Err(CliError::InvalidArgs(format!(
                "{name} must be a non-negative number, got {v}"
            )));
        }
    }
    if total.fract() != 0.0 {
        return Err(CliError::InvalidArgs(format!(
            "total must be a whole number, got {total}"
        )));
    }

    let positive_n = if positive < 1.0 && positive.fract() != 0.0 {
        (positive * total).round() as u64
    } else if positive.fract() != 0.0 {
        return Err(CliError::InvalidArgs(format!(
            "positive must be a whole count or a proportion below 1, got {positive}"
        )));
    } else {
        positive as u64
    };

    Ok((positive_n, total as u64))
}

/// Normalize ordinal level counts to integers.
pub fn resolve_levels(counts: &[f64]) -> CliResult<Vec<u64>> {
    // 2^53: beyond this an f64 no longer holds exact integers, and the
    // u64 bucket sums downstream would overflow
    const MAX_COUNT: f64 = 9_007_199_254_740_992.0;

    if counts.iter().any(|c| !c.is_finite() || *c < 0.0) {
        return Err(CliError::InvalidArgs(
            "all level counts must be non-negative numbers".to_string(),
        ));
    }
    if let Some(big) = counts.iter().find(|c| **c > MAX_COUNT) {
        return Err(CliError::InvalidArgs(format!(
            "level count too large: {big}"
        )));
    }
    // Reference tolerance: float-ish tokens pass, but a fully fractional
    // argument list is a user mistake, not rating data.
    if counts.iter().all(|c| c.fract() != 0.0) {
        return Err(CliError::InvalidArgs(
            "all arguments must be integers".to_string(),
        ));
    }
    Ok(counts.iter().map(|c| c.round() as u64).collect())
}

/// Format a score to 7 significant digits (`0.8872512`, `3.495104`).
pub fn format_score(value: f64) -> String {
    const SIG_DIGITS: i32 = 7;
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (SIG_DIGITS - 1 - magnitude).max(0) as usize;
    format!("{:.*}", decimals, value)
}
