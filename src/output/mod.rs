//! Terminal output formatting
//!
//! Plain-stdout pretty-printing for the `stats` subcommand.

pub mod display;
mod formatters;

pub use display::print_stats;
pub use formatters::distribution_bar;
