use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::{RankRecord, RankSchema};
use crate::utils::round_to;

/// All rank records, indexed by player, plus the fixed source schema.
#[derive(Debug, Clone, Default)]
pub struct Rankings {
    schema: RankSchema,
    by_player: HashMap<i64, RankRecord>,
}

impl Rankings {
    /// Index `records` by player id and derive the source schema from the
    /// first record. A player may have at most one record; later duplicates
    /// are dropped.
    pub fn new(records: Vec<RankRecord>) -> Self {
        let schema = RankSchema::from_records(&records);
        let mut by_player = HashMap::with_capacity(records.len());

        for record in records {
            if by_player.contains_key(&record.player_id) {
                warn!(player_id = record.player_id, "Duplicate rank record ignored");
                continue;
            }
            by_player.insert(record.player_id, record);
        }

        debug!(
            players = by_player.len(),
            sources = schema.len(),
            "Rank records indexed"
        );

        Self { schema, by_player }
    }

    pub fn schema(&self) -> &RankSchema {
        &self.schema
    }

    pub fn record(&self, player_id: i64) -> Option<&RankRecord> {
        self.by_player.get(&player_id)
    }

    /// Rank `source` gave `player_id`, if any.
    pub fn rank(&self, player_id: i64, source: &str) -> Option<f64> {
        self.record(player_id).and_then(|r| r.rank(source))
    }

    /// Summarize one player's available ranks.
    pub fn summary(&self, player_id: i64) -> RankSummary<'_> {
        RankSummary::new(self.record(player_id))
    }

    pub fn len(&self) -> usize {
        self.by_player.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_player.is_empty()
    }
}

/// The ranks a player actually has, computed once per player and shared by
/// the composite column and every cell's classification.
#[derive(Debug, Clone, Copy)]
pub struct RankSummary<'a> {
    record: Option<&'a RankRecord>,
    count: usize,
    mean: Option<f64>,
}

impl<'a> RankSummary<'a> {
    pub fn new(record: Option<&'a RankRecord>) -> Self {
        let (sum, count) = record
            .map(|r| r.present_ranks().fold((0.0, 0usize), |(s, c), v| (s + v, c + 1)))
            .unwrap_or((0.0, 0));

        let mean = if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        };

        Self { record, count, mean }
    }

    /// Number of sources that ranked the player.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Unrounded mean of the available ranks.
    pub fn mean(&self) -> Option<f64> {
        self.mean
    }

    /// Mean rounded to `precision` decimals for display and sorting.
    pub fn composite(&self, precision: u32) -> Option<f64> {
        self.mean.map(|m| round_to(m, precision))
    }

    pub fn rank(&self, source: &str) -> Option<f64> {
        self.record.and_then(|r| r.rank(source))
    }
}

/// Composite rank for a player: the mean of every rank a source gave them,
/// rounded to `precision` decimals. `None` when the player has no rank
/// record or no source ranked them.
pub fn composite(rankings: &Rankings, player_id: i64, precision: u32) -> Option<f64> {
    rankings.summary(player_id).composite(precision)
}
