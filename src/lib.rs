//! Statistically adjusted "true" scores from raw rating counts.
//!
//! Naive proportion/average scores overrate items with few ratings. Both
//! estimators here return the lower edge of a two-sided confidence interval
//! instead, so an item needs evidence before it scores well.

pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{ordinal_score, wilson_score};
