use super::aggregate::{RankSummary, Rankings};

/// How far, in rank positions, a source must sit from the player's average
/// before its rank is called out.
pub const DEVIATION_THRESHOLD: f64 = 2.0;

/// Where one source's rank sits relative to the player's average rank.
///
/// Lower ranks are better, so `Above` means the source likes the player
/// more than the field does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deviation {
    Above,
    Below,
    Near,
    Unranked,
}

impl Deviation {
    /// Symbol for plain-text output where colour is unavailable.
    pub fn marker(&self) -> &'static str {
        match self {
            Deviation::Above => "+",
            Deviation::Below => "-",
            Deviation::Near | Deviation::Unranked => "",
        }
    }
}

/// A board cell: the raw rank and its label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankCell {
    pub raw: Option<f64>,
    pub deviation: Deviation,
}

/// Label a rank against the mean of the player's available ranks.
pub fn classify_rank(rank: Option<f64>, mean: Option<f64>) -> Deviation {
    match (rank, mean) {
        (Some(rank), Some(mean)) => {
            let diff = rank - mean;
            if diff <= -DEVIATION_THRESHOLD {
                Deviation::Above
            } else if diff >= DEVIATION_THRESHOLD {
                Deviation::Below
            } else {
                Deviation::Near
            }
        }
        _ => Deviation::Unranked,
    }
}

impl RankSummary<'_> {
    /// Classify `source`'s rank for this player.
    pub fn classify(&self, source: &str) -> RankCell {
        let raw = self.rank(source);
        RankCell {
            raw,
            deviation: classify_rank(raw, self.mean()),
        }
    }
}

/// Classify the rank `source` gave `player_id`. The comparison is against
/// the mean of only the sources that ranked this player.
pub fn classify(rankings: &Rankings, player_id: i64, source: &str) -> RankCell {
    rankings.summary(player_id).classify(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::composite;
    use crate::models::RankRecord;

    fn rankings() -> Rankings {
        Rankings::new(vec![
            RankRecord::new(
                1,
                vec![
                    ("A".to_string(), Some(3.0)),
                    ("B".to_string(), Some(7.0)),
                    ("C".to_string(), None),
                ],
            ),
            RankRecord::new(
                2,
                vec![
                    ("A".to_string(), Some(10.0)),
                    ("B".to_string(), Some(11.0)),
                    ("C".to_string(), Some(12.0)),
                ],
            ),
        ])
    }

    #[test]
    fn test_reference_example() {
        let r = rankings();
        assert_eq!(composite(&r, 1, 2), Some(5.0));
        assert_eq!(
            classify(&r, 1, "A"),
            RankCell { raw: Some(3.0), deviation: Deviation::Above }
        );
        assert_eq!(
            classify(&r, 1, "B"),
            RankCell { raw: Some(7.0), deviation: Deviation::Below }
        );
        assert_eq!(
            classify(&r, 1, "C"),
            RankCell { raw: None, deviation: Deviation::Unranked }
        );
    }

    #[test]
    fn test_near_within_threshold() {
        let r = rankings();
        for source in ["A", "B", "C"] {
            assert_eq!(classify(&r, 2, source).deviation, Deviation::Near);
        }
    }

    #[test]
    fn test_missing_record_is_unranked() {
        let r = rankings();
        assert_eq!(classify(&r, 99, "A").deviation, Deviation::Unranked);
        assert_eq!(classify(&r, 99, "A").raw, None);
    }

    #[test]
    fn test_unknown_source_is_unranked() {
        assert_eq!(classify(&rankings(), 1, "Z").deviation, Deviation::Unranked);
    }

    #[test]
    fn test_classify_rank_boundaries() {
        let mean = Some(10.0);
        assert_eq!(classify_rank(Some(8.0), mean), Deviation::Above);
        assert_eq!(classify_rank(Some(8.01), mean), Deviation::Near);
        assert_eq!(classify_rank(Some(11.99), mean), Deviation::Near);
        assert_eq!(classify_rank(Some(12.0), mean), Deviation::Below);
        assert_eq!(classify_rank(Some(1.0), mean), Deviation::Above);
        assert_eq!(classify_rank(None, mean), Deviation::Unranked);
        assert_eq!(classify_rank(Some(5.0), None), Deviation::Unranked);
    }

    #[test]
    fn test_single_source_is_near_itself() {
        let r = Rankings::new(vec![RankRecord::new(5, vec![("A".to_string(), Some(40.0))])]);
        assert_eq!(classify(&r, 5, "A").deviation, Deviation::Near);
    }

    #[test]
    fn test_summary_classify_matches_free_function() {
        let r = rankings();
        let summary = r.summary(1);
        for source in ["A", "B", "C"] {
            assert_eq!(summary.classify(source), classify(&r, 1, source));
        }
    }

    #[test]
    fn test_marker() {
        assert_eq!(Deviation::Above.marker(), "+");
        assert_eq!(Deviation::Below.marker(), "-");
        assert_eq!(Deviation::Near.marker(), "");
    }
}
