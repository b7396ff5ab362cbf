//! Per-category daily quest progress.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::quest::Quest;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryStats {
    pub completed_today: u32,
    pub total: u32,
}

/// Aggregate today's completion counts per category.
///
/// BTreeMap keeps the output ordering stable for display.
pub fn category_stats(quests: &[Quest]) -> BTreeMap<String, CategoryStats> {
    let mut stats: BTreeMap<String, CategoryStats> = BTreeMap::new();
    for quest in quests {
        let entry = stats.entry(quest.category.clone()).or_default();
        entry.total += 1;
        if quest.completed_today {
            entry.completed_today += 1;
        }
    }
    stats
}
