//! Domain layer: score estimators and their input rules
//!
//! This layer is independent of external concerns (no I/O, no CLI).

pub mod error;
pub mod estimator;
pub mod normal;

pub use error::DomainError;
pub use estimator::{ordinal_score, wilson_score};
