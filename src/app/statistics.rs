//! End-of-run statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{OutcomeType, ProcessingStats};

/// Prints lookup outcome counts to the log.
pub fn print_outcome_statistics(stats: &ProcessingStats) {
    let total = stats.total();
    if total == 0 {
        info!("No geolocation lookups were issued");
        return;
    }

    info!("Lookup Outcomes ({} total):", total);
    for line in outcome_lines(stats) {
        info!("   {}", line);
    }
}

/// One `label: count` line per outcome that occurred, in declaration order.
fn outcome_lines(stats: &ProcessingStats) -> Vec<String> {
    OutcomeType::iter()
        .filter_map(|outcome| {
            let count = stats.get_count(outcome);
            (count > 0).then(|| format!("{}: {}", outcome.as_str(), count))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_lines_empty() {
        let stats = ProcessingStats::new();
        assert!(outcome_lines(&stats).is_empty());
    }

    #[test]
    fn test_outcome_lines_skip_zero_counts() {
        let stats = ProcessingStats::new();
        stats.increment(OutcomeType::Resolved);
        stats.increment(OutcomeType::Resolved);
        stats.increment(OutcomeType::QuotaExhausted);

        assert_eq!(
            outcome_lines(&stats),
            vec![
                "Resolved: 2".to_string(),
                "Quota exhausted or service down: 1".to_string(),
            ]
        );
    }
}
