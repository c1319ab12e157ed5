//! Summaries of statistic snapshots for framework dashboards.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::{Filter, Groupings, Snapshot, Statistic, Summary};

/// Summarise each snapshot's `category` under every label in `groupings`.
///
/// One summary per snapshot, in input order. A snapshot without the category
/// summarises to zero for every label.
pub fn format_snapshots(snapshots: &[Snapshot], category: &str, groupings: &Groupings) -> Vec<Summary> {
    snapshots
        .iter()
        .map(|snapshot| {
            let stats: &[Statistic] = match snapshot.category(category) {
                Some(stats) => stats,
                None => {
                    warn!(
                        category,
                        created_at = %snapshot.created_at,
                        "snapshot has no statistics for category"
                    );
                    &[]
                }
            };
            label_and_count(stats, groupings, snapshot.created_at)
        })
        .collect()
}

/// Sum the counts matching each label's filter.
pub fn label_and_count(stats: &[Statistic], groupings: &Groupings, created_at: DateTime<Utc>) -> Summary {
    let counts = groupings
        .iter()
        .map(|(label, filter)| (label.clone(), sum_counts(stats, filter)))
        .collect();

    debug!(statistics = stats.len(), labels = groupings.len(), %created_at, "summarised snapshot");

    Summary { counts, created_at }
}

/// Sum the `count` of every statistic matching `filter`.
pub fn sum_counts(stats: &[Statistic], filter: &Filter) -> i64 {
    stats
        .iter()
        .filter(|statistic| filter.matches(statistic))
        .map(Statistic::count)
        .fold(0i64, i64::saturating_add)
}
