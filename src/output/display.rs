//! Display functions for the stats subcommand

use super::formatters::distribution_bar;
use crate::stats::Stats;
use colored::Colorize;

/// Print the persisted statistics snapshot
pub fn print_stats(stats: &Stats) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {}", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!(
        "\n  Played:         {}",
        stats.played.to_string().bright_yellow()
    );
    println!(
        "  Win rate:       {}",
        format!("{}%", stats.win_rate()).bright_yellow()
    );
    println!(
        "  Current streak: {}",
        stats.current_streak.to_string().bright_yellow()
    );
    println!(
        "  Max streak:     {}",
        stats.max_streak.to_string().bright_yellow()
    );

    println!("\n  {}", "Guess distribution".bold());
    let max = stats.distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.distribution.iter().enumerate() {
        let bar = distribution_bar(count, max, 20);
        println!("  {} [{}] {}", i + 1, bar.green(), count);
    }
    println!();
}
