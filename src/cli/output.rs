//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

/// Print error (red "Error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}", format!("Error: {}", msg).red());
}

/// Print the computed score (plain, stdout, no trailing metadata)
pub fn result(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}
