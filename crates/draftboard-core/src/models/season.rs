use serde::{Deserialize, Serialize};

use super::deserialize_optional_number;

/// One season of statistics for a player at a given team and league.
///
/// A player can have several of these (multi-season history, mid-season
/// transfers). Every statistic is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeasonRecord {
    #[serde(rename = "playerId")]
    pub player_id: i64,
    #[serde(rename = "Season", default, deserialize_with = "deserialize_optional_number")]
    pub season: Option<f64>,
    #[serde(rename = "Team", default)]
    pub team: Option<String>,
    #[serde(rename = "League", default)]
    pub league: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub age: Option<f64>,

    #[serde(rename = "GP", default, deserialize_with = "deserialize_optional_number")]
    pub games_played: Option<f64>,
    #[serde(rename = "GS", default, deserialize_with = "deserialize_optional_number")]
    pub games_started: Option<f64>,
    #[serde(rename = "MP", default, deserialize_with = "deserialize_optional_number")]
    pub minutes: Option<f64>,
    #[serde(rename = "PTS", default, deserialize_with = "deserialize_optional_number")]
    pub points: Option<f64>,

    #[serde(rename = "FGM", default, deserialize_with = "deserialize_optional_number")]
    pub field_goals_made: Option<f64>,
    #[serde(rename = "FGA", default, deserialize_with = "deserialize_optional_number")]
    pub field_goals_attempted: Option<f64>,
    #[serde(rename = "FG%", default, deserialize_with = "deserialize_optional_number")]
    pub field_goal_pct: Option<f64>,
    #[serde(rename = "FG2M", default, deserialize_with = "deserialize_optional_number")]
    pub twos_made: Option<f64>,
    #[serde(rename = "FG2A", default, deserialize_with = "deserialize_optional_number")]
    pub twos_attempted: Option<f64>,
    #[serde(rename = "FG2%", default, deserialize_with = "deserialize_optional_number")]
    pub two_pct: Option<f64>,
    #[serde(rename = "eFG%", default, deserialize_with = "deserialize_optional_number")]
    pub effective_fg_pct: Option<f64>,
    #[serde(rename = "3PM", default, deserialize_with = "deserialize_optional_number")]
    pub threes_made: Option<f64>,
    #[serde(rename = "3PA", default, deserialize_with = "deserialize_optional_number")]
    pub threes_attempted: Option<f64>,
    #[serde(rename = "3P%", default, deserialize_with = "deserialize_optional_number")]
    pub three_pct: Option<f64>,
    #[serde(rename = "FT", default, deserialize_with = "deserialize_optional_number")]
    pub free_throws_made: Option<f64>,
    #[serde(rename = "FTA", default, deserialize_with = "deserialize_optional_number")]
    pub free_throws_attempted: Option<f64>,
    #[serde(rename = "FTP", default, deserialize_with = "deserialize_optional_number")]
    pub free_throw_pct: Option<f64>,

    #[serde(rename = "ORB", default, deserialize_with = "deserialize_optional_number")]
    pub offensive_rebounds: Option<f64>,
    #[serde(rename = "DRB", default, deserialize_with = "deserialize_optional_number")]
    pub defensive_rebounds: Option<f64>,
    #[serde(rename = "TRB", default, deserialize_with = "deserialize_optional_number")]
    pub rebounds: Option<f64>,
    #[serde(rename = "AST", default, deserialize_with = "deserialize_optional_number")]
    pub assists: Option<f64>,
    #[serde(rename = "STL", default, deserialize_with = "deserialize_optional_number")]
    pub steals: Option<f64>,
    #[serde(rename = "BLK", default, deserialize_with = "deserialize_optional_number")]
    pub blocks: Option<f64>,
    #[serde(rename = "TOV", default, deserialize_with = "deserialize_optional_number")]
    pub turnovers: Option<f64>,
    #[serde(rename = "PF", default, deserialize_with = "deserialize_optional_number")]
    pub fouls: Option<f64>,
}

/// Natural key used to tell a player's season lines apart when selecting.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonKey {
    pub season: Option<f64>,
    pub team: Option<String>,
    pub league: Option<String>,
}

impl SeasonRecord {
    pub fn season_key(&self) -> SeasonKey {
        SeasonKey {
            season: self.season,
            team: self.team.clone(),
            league: self.league.clone(),
        }
    }

    /// Short label for a season selector, e.g. "2024 Harbor City (NCAA)".
    pub fn label(&self) -> String {
        let season = self
            .season
            .map(|s| format!("{}", s as i64))
            .unwrap_or_else(|| "?".to_string());
        match (self.team.as_deref(), self.league.as_deref()) {
            (Some(team), Some(league)) => format!("{} {} ({})", season, team, league),
            (Some(team), None) => format!("{} {}", season, team),
            (None, Some(league)) => format!("{} ({})", season, league),
            (None, None) => season,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_stat_names() {
        let record: SeasonRecord = serde_json::from_str(
            r#"{"playerId": 3, "Season": 2024, "Team": "Harbor City", "League": "NCAA",
                "PTS": 18.4, "FG%": 47.1, "3PA": 5.2, "FTP": 81.0, "TRB": null}"#,
        )
        .unwrap();
        assert_eq!(record.season, Some(2024.0));
        assert_eq!(record.points, Some(18.4));
        assert_eq!(record.field_goal_pct, Some(47.1));
        assert_eq!(record.threes_attempted, Some(5.2));
        assert_eq!(record.free_throw_pct, Some(81.0));
        assert_eq!(record.rebounds, None);
        assert_eq!(record.assists, None);
    }

    #[test]
    fn test_label() {
        let mut record = SeasonRecord {
            season: Some(2024.0),
            team: Some("Harbor City".to_string()),
            league: Some("NCAA".to_string()),
            ..Default::default()
        };
        assert_eq!(record.label(), "2024 Harbor City (NCAA)");
        record.league = None;
        assert_eq!(record.label(), "2024 Harbor City");
        record.team = None;
        record.season = None;
        assert_eq!(record.label(), "?");
    }

    #[test]
    fn test_season_key() {
        let a = SeasonRecord {
            season: Some(2023.0),
            team: Some("North".to_string()),
            ..Default::default()
        };
        let mut b = a.clone();
        assert_eq!(a.season_key(), b.season_key());
        b.team = Some("South".to_string());
        assert_ne!(a.season_key(), b.season_key());
    }

    #[test]
    fn test_non_numeric_stat_is_missing() {
        let record: SeasonRecord = serde_json::from_str(
            r#"{"playerId": 1, "Season": 2024, "PTS": 18, "FG%": "", "3P%": [1], "AST": {"avg": 3}}"#,
        )
        .unwrap();
        assert_eq!(record.season, Some(2024.0));
        assert_eq!(record.points, Some(18.0));
        assert_eq!(record.field_goal_pct, None);
        assert_eq!(record.three_pct, None);
        assert_eq!(record.assists, None);
        // Absent fields still default
        assert_eq!(record.blocks, None);
    }
}
