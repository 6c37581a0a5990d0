//! Formatting utilities for terminal output

/// Bar for one guess-distribution bucket, scaled to the fullest bucket
///
/// Buckets with at least one win always get a visible stub.
#[must_use]
pub fn distribution_bar(value: u32, max: u32, width: usize) -> String {
    let max = max.max(1);
    let filled = ((value as usize * width) / max as usize).min(width);
    let filled = if value > 0 { filled.max(1) } else { filled };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
