use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::sort::{compare_ranks, SortDirection};
use crate::models::{SeasonRecord, NO_DATA};
use crate::utils::{format_number, round_to};

/// Decimal places kept when displaying a statistic.
const STAT_PRECISION: u32 = 3;

/// A single statistic that can be read off a season line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    Season,
    GamesPlayed,
    Minutes,
    Points,
    Assists,
    Rebounds,
    OffensiveRebounds,
    DefensiveRebounds,
    Steals,
    Blocks,
    Turnovers,
    Fouls,
    FieldGoalsAttempted,
    FieldGoalPct,
    EffectiveFgPct,
    TwosAttempted,
    TwoPct,
    ThreesAttempted,
    ThreePct,
    FreeThrowsAttempted,
    FreeThrowPct,
}

impl StatField {
    pub fn read(&self, record: &SeasonRecord) -> Option<f64> {
        match self {
            StatField::Season => record.season,
            StatField::GamesPlayed => record.games_played,
            StatField::Minutes => record.minutes,
            StatField::Points => record.points,
            StatField::Assists => record.assists,
            StatField::Rebounds => record.rebounds,
            StatField::OffensiveRebounds => record.offensive_rebounds,
            StatField::DefensiveRebounds => record.defensive_rebounds,
            StatField::Steals => record.steals,
            StatField::Blocks => record.blocks,
            StatField::Turnovers => record.turnovers,
            StatField::Fouls => record.fouls,
            StatField::FieldGoalsAttempted => record.field_goals_attempted,
            StatField::FieldGoalPct => record.field_goal_pct,
            StatField::EffectiveFgPct => record.effective_fg_pct,
            StatField::TwosAttempted => record.twos_attempted,
            StatField::TwoPct => record.two_pct,
            StatField::ThreesAttempted => record.threes_attempted,
            StatField::ThreePct => record.three_pct,
            StatField::FreeThrowsAttempted => record.free_throws_attempted,
            StatField::FreeThrowPct => record.free_throw_pct,
        }
    }
}

const TOTAL_FIELDS: &[(&str, StatField)] = &[
    ("Season", StatField::Season),
    ("PTS", StatField::Points),
    ("AST", StatField::Assists),
    ("TRB", StatField::Rebounds),
    ("TOV", StatField::Turnovers),
    ("STL", StatField::Steals),
    ("BLK", StatField::Blocks),
    ("PF", StatField::Fouls),
    ("FGA", StatField::FieldGoalsAttempted),
    ("FG%", StatField::FieldGoalPct),
    ("eFG%", StatField::EffectiveFgPct),
    ("2PA", StatField::TwosAttempted),
    ("2P%", StatField::TwoPct),
    ("3PA", StatField::ThreesAttempted),
    ("3P%", StatField::ThreePct),
    ("FTA", StatField::FreeThrowsAttempted),
    ("FT%", StatField::FreeThrowPct),
    ("DRB", StatField::DefensiveRebounds),
    ("ORB", StatField::OffensiveRebounds),
];

const COUNTING_FIELDS: &[(&str, StatField)] = &[
    ("Season", StatField::Season),
    ("GP", StatField::GamesPlayed),
    ("MP", StatField::Minutes),
    ("PTS", StatField::Points),
    ("AST", StatField::Assists),
    ("TRB", StatField::Rebounds),
    ("DRB", StatField::DefensiveRebounds),
    ("ORB", StatField::OffensiveRebounds),
    ("STL", StatField::Steals),
    ("BLK", StatField::Blocks),
    ("TOV", StatField::Turnovers),
    ("PF", StatField::Fouls),
];

const SCORING_FIELDS: &[(&str, StatField)] = &[
    ("Season", StatField::Season),
    ("PTS", StatField::Points),
    ("FGA", StatField::FieldGoalsAttempted),
    ("FG%", StatField::FieldGoalPct),
    ("eFG%", StatField::EffectiveFgPct),
    ("2PA", StatField::TwosAttempted),
    ("2P%", StatField::TwoPct),
    ("3PA", StatField::ThreesAttempted),
    ("3P%", StatField::ThreePct),
    ("FTA", StatField::FreeThrowsAttempted),
    ("FT%", StatField::FreeThrowPct),
];

/// Named projection of a season line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatView {
    Total,
    #[default]
    Counting,
    Scoring,
}

impl StatView {
    pub const ALL: [StatView; 3] = [StatView::Total, StatView::Counting, StatView::Scoring];

    /// The view's ordered (label, field) list.
    pub fn fields(&self) -> &'static [(&'static str, StatField)] {
        match self {
            StatView::Total => TOTAL_FIELDS,
            StatView::Counting => COUNTING_FIELDS,
            StatView::Scoring => SCORING_FIELDS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatView::Total => "total",
            StatView::Counting => "counting",
            StatView::Scoring => "scoring",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            StatView::Total => "Total",
            StatView::Counting => "Counting",
            StatView::Scoring => "Scoring",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(name))
    }

    /// Like `from_name`, but an unknown name falls back to the default view.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            warn!(view = %name, "Unknown stat view, using default");
            Self::default()
        })
    }

    pub fn next(&self) -> Self {
        match self {
            StatView::Total => StatView::Counting,
            StatView::Counting => StatView::Scoring,
            StatView::Scoring => StatView::Total,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            StatView::Total => StatView::Scoring,
            StatView::Counting => StatView::Total,
            StatView::Scoring => StatView::Counting,
        }
    }
}

impl fmt::Display for StatView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// One labelled value produced by `project`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatLine {
    pub label: &'static str,
    pub field: StatField,
    pub value: Option<f64>,
}

impl StatLine {
    /// The value for display, or the placeholder when the record lacks it.
    pub fn display(&self) -> String {
        match self.value {
            Some(v) => format_number(round_to(v, STAT_PRECISION)),
            None => NO_DATA.to_string(),
        }
    }
}

/// Project a season line through `view`.
///
/// The result always has exactly `view.fields().len()` entries; missing
/// statistics come back as `None`. With no season selected the result is
/// empty and the caller shows a "no data" state instead.
pub fn project(record: Option<&SeasonRecord>, view: StatView) -> Vec<StatLine> {
    let Some(record) = record else {
        return Vec::new();
    };

    view.fields()
        .iter()
        .map(|&(label, field)| StatLine {
            label,
            field,
            value: field.read(record),
        })
        .collect()
}

/// A player's season lines, most recent season first. Lines without a
/// season go last; equal seasons keep their input order.
pub fn seasons_most_recent_first<'a, I>(records: I) -> Vec<&'a SeasonRecord>
where
    I: IntoIterator<Item = &'a SeasonRecord>,
{
    let mut seasons: Vec<&'a SeasonRecord> = records.into_iter().collect();
    seasons.sort_by(|a, b| compare_ranks(a.season, b.season, SortDirection::Descending));
    seasons
}

/// The season line selected when a profile is first opened.
pub fn default_season<'a, I>(records: I) -> Option<&'a SeasonRecord>
where
    I: IntoIterator<Item = &'a SeasonRecord>,
{
    seasons_most_recent_first(records).into_iter().next()
}
