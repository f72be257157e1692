use std::cmp::Ordering;
use std::fmt;

use tracing::warn;

use super::aggregate::Rankings;
use crate::models::{Player, RankSchema};

/// Name accepted wherever a sort key is given as text.
pub const COMPOSITE_KEY: &str = "composite";

/// What the board is ordered by.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Average of every available source rank.
    #[default]
    Composite,
    /// A single named source.
    Source(String),
}

impl SortKey {
    /// Map user input to a sort key. Anything that is not a known source
    /// falls back to the composite sort.
    pub fn resolve(name: &str, schema: &RankSchema) -> Self {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case(COMPOSITE_KEY) {
            return SortKey::Composite;
        }
        if schema.contains(trimmed) {
            return SortKey::Source(trimmed.to_string());
        }
        match schema
            .sources()
            .iter()
            .find(|s| s.eq_ignore_ascii_case(trimmed))
        {
            Some(source) => SortKey::Source(source.clone()),
            None => {
                warn!(key = %trimmed, "Unknown sort key, using composite");
                SortKey::Composite
            }
        }
    }

    pub fn source(&self) -> Option<&str> {
        match self {
            SortKey::Composite => None,
            SortKey::Source(name) => Some(name),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Composite => write!(f, "{}", COMPOSITE_KEY),
            SortKey::Source(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Parse "asc"/"desc" (and the long forms). Unknown input is ascending.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "desc" | "descending" => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }

    /// Header arrow for the active column.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        }
    }
}

/// Compare two optional ranks. A missing rank always orders after a present
/// one, whichever the direction; two missing ranks are equal.
pub fn compare_ranks(a: Option<f64>, b: Option<f64>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let cmp = a.total_cmp(&b);
            match direction {
                SortDirection::Ascending => cmp,
                SortDirection::Descending => cmp.reverse(),
            }
        }
    }
}

/// Order players by `key`. The sort is stable: players that compare equal
/// keep their input order. No player is dropped or duplicated.
///
/// Composite sorting uses the composite rounded to `precision`, the same
/// value the board displays.
pub fn sort_players<'a, I>(
    players: I,
    rankings: &Rankings,
    key: &SortKey,
    direction: SortDirection,
    precision: u32,
) -> Vec<&'a Player>
where
    I: IntoIterator<Item = &'a Player>,
{
    // Resolve each player's sort value once rather than per comparison
    let mut keyed: Vec<(Option<f64>, &'a Player)> = players
        .into_iter()
        .map(|p| {
            let value = match key {
                SortKey::Composite => rankings.summary(p.player_id).composite(precision),
                SortKey::Source(source) => rankings.rank(p.player_id, source),
            };
            (value, p)
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare_ranks(*a, *b, direction));

    keyed.into_iter().map(|(_, p)| p).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RankRecord;

    fn player(id: i64) -> Player {
        serde_json::from_value(serde_json::json!({ "playerId": id })).unwrap()
    }

    fn rec(id: i64, ranks: &[(&str, Option<f64>)]) -> RankRecord {
        RankRecord::new(id, ranks.iter().map(|(s, r)| (s.to_string(), *r)).collect())
    }

    fn rankings(records: Vec<RankRecord>) -> Rankings {
        Rankings::new(records)
    }

    fn ids(sorted: &[&Player]) -> Vec<i64> {
        sorted.iter().map(|p| p.player_id).collect()
    }

    // -------------------------------------------------------------------------
    // Source sort
    // -------------------------------------------------------------------------

    #[test]
    fn test_source_sort_ascending_nulls_last() {
        let players = vec![player(1), player(2), player(3)];
        let r = rankings(vec![
            rec(1, &[("scoutX", None)]),
            rec(2, &[("scoutX", Some(5.0))]),
            rec(3, &[("scoutX", Some(2.0))]),
        ]);
        let key = SortKey::Source("scoutX".to_string());
        let sorted = sort_players(&players, &r, &key, SortDirection::Ascending, 2);
        assert_eq!(ids(&sorted), vec![3, 2, 1]);
    }

    #[test]
    fn test_source_sort_descending_nulls_still_last() {
        let players = vec![player(1), player(2), player(3)];
        let r = rankings(vec![
            rec(1, &[("scoutX", None)]),
            rec(2, &[("scoutX", Some(5.0))]),
            rec(3, &[("scoutX", Some(2.0))]),
        ]);
        let key = SortKey::Source("scoutX".to_string());
        let sorted = sort_players(&players, &r, &key, SortDirection::Descending, 2);
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn test_source_sort_missing_record_is_null() {
        let players = vec![player(9), player(1)];
        let r = rankings(vec![rec(1, &[("A", Some(10.0))])]);
        let key = SortKey::Source("A".to_string());
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sorted = sort_players(&players, &r, &key, direction, 2);
            assert_eq!(ids(&sorted), vec![1, 9]);
        }
    }

    #[test]
    fn test_sort_is_stable_for_ties_and_nulls() {
        let players = vec![player(1), player(2), player(3), player(4), player(5)];
        let r = rankings(vec![
            rec(1, &[("A", None)]),
            rec(2, &[("A", Some(4.0))]),
            rec(3, &[("A", None)]),
            rec(4, &[("A", Some(4.0))]),
            rec(5, &[("A", Some(1.0))]),
        ]);
        let key = SortKey::Source("A".to_string());
        let asc = sort_players(&players, &r, &key, SortDirection::Ascending, 2);
        assert_eq!(ids(&asc), vec![5, 2, 4, 1, 3]);
        let desc = sort_players(&players, &r, &key, SortDirection::Descending, 2);
        assert_eq!(ids(&desc), vec![2, 4, 5, 1, 3]);
    }

    // -------------------------------------------------------------------------
    // Composite sort
    // -------------------------------------------------------------------------

    #[test]
    fn test_composite_sort_undefined_last_both_directions() {
        let players = vec![player(1), player(2), player(3), player(4)];
        let r = rankings(vec![
            rec(1, &[("A", None), ("B", None)]),
            rec(2, &[("A", Some(8.0)), ("B", Some(10.0))]),
            rec(3, &[("A", Some(1.0)), ("B", None)]),
        ]);
        let asc = sort_players(&players, &r, &SortKey::Composite, SortDirection::Ascending, 2);
        assert_eq!(ids(&asc), vec![3, 2, 1, 4]);
        let desc = sort_players(&players, &r, &SortKey::Composite, SortDirection::Descending, 2);
        assert_eq!(ids(&desc), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_composite_sort_uses_rounded_value() {
        // 1.004 and 1.001 both display as 1.00 and therefore tie
        let players = vec![player(1), player(2)];
        let r = rankings(vec![rec(1, &[("A", Some(1.004))]), rec(2, &[("A", Some(1.001))])]);
        let sorted = sort_players(&players, &r, &SortKey::Composite, SortDirection::Ascending, 2);
        assert_eq!(ids(&sorted), vec![1, 2]);
    }

    #[test]
    fn test_sort_keeps_every_player() {
        let players: Vec<Player> = (1..=20).map(player).collect();
        let r = rankings(vec![rec(3, &[("A", Some(2.0))]), rec(7, &[("A", Some(1.0))])]);
        let sorted = sort_players(&players, &r, &SortKey::Composite, SortDirection::Descending, 2);
        let mut got = ids(&sorted);
        got.sort();
        assert_eq!(got, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_sort_empty_collection() {
        let players: Vec<Player> = Vec::new();
        let r = rankings(vec![]);
        assert!(sort_players(&players, &r, &SortKey::Composite, SortDirection::Ascending, 2).is_empty());
    }

    // -------------------------------------------------------------------------
    // Keys and comparator
    // -------------------------------------------------------------------------

    #[test]
    fn test_compare_ranks_null_policy() {
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            assert_eq!(compare_ranks(Some(50.0), None, direction), Ordering::Less);
            assert_eq!(compare_ranks(None, Some(1.0), direction), Ordering::Greater);
            assert_eq!(compare_ranks(None, None, direction), Ordering::Equal);
        }
        assert_eq!(compare_ranks(Some(1.0), Some(2.0), SortDirection::Ascending), Ordering::Less);
        assert_eq!(compare_ranks(Some(1.0), Some(2.0), SortDirection::Descending), Ordering::Greater);
    }

    #[test]
    fn test_resolve_sort_key() {
        let schema = RankSchema::new(vec!["ESPN Rank".to_string(), "Ringer Rank".to_string()]);
        assert_eq!(SortKey::resolve("composite", &schema), SortKey::Composite);
        assert_eq!(SortKey::resolve("COMPOSITE", &schema), SortKey::Composite);
        assert_eq!(
            SortKey::resolve("ESPN Rank", &schema),
            SortKey::Source("ESPN Rank".to_string())
        );
        assert_eq!(
            SortKey::resolve("ringer rank", &schema),
            SortKey::Source("Ringer Rank".to_string())
        );
        assert_eq!(SortKey::resolve("Nobody Rank", &schema), SortKey::Composite);
    }

    #[test]
    fn test_direction_helpers() {
        assert_eq!(SortDirection::Ascending.reversed(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.reversed(), SortDirection::Ascending);
        assert_eq!(SortDirection::from_name("desc"), SortDirection::Descending);
        assert_eq!(SortDirection::from_name("ASC"), SortDirection::Ascending);
        assert_eq!(SortDirection::from_name("sideways"), SortDirection::Ascending);
    }
}
