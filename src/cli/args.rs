//! CLI argument definitions using clap

use clap::{Parser, Subcommand};

/// Confidence-adjusted "true" scores from raw rating counts
#[derive(Parser, Debug)]
#[command(name = "truescore")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output (repeat for more: -d -d -d)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Wilson lower bound for binomial (positive/total) ratings
    Wilson {
        /// Positive count, or a proportion in (0, 1) resolved against TOTAL
        positive: f64,

        /// Total number of ratings
        total: f64,

        /// Legacy third slot, accepted and ignored
        reserved: Option<f64>,

        /// Confidence level, strictly between 0 and 1
        #[arg(long = "conf", value_name = "DECIMAL", default_value_t = 0.95)]
        conf: f64,
    },

    /// Lower bound on the mean of ordinal (e.g. 1-5 star) ratings
    Ordinal {
        /// Ratings per level, lowest level first (at least two levels)
        #[arg(num_args = 2.., required = true)]
        counts: Vec<f64>,

        /// Confidence level, strictly between 0 and 1
        #[arg(long = "conf", value_name = "DECIMAL", default_value_t = 0.95)]
        conf: f64,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
