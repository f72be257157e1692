use serde::{Deserialize, Serialize};

use super::deserialize_optional_number;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    #[serde(rename = "playerId")]
    pub player_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
    #[serde(rename = "birthDate", default)]
    pub birth_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub weight: Option<f64>,
    #[serde(rename = "photoUrl", default)]
    pub photo_url: Option<String>,
    #[serde(rename = "currentTeam", default)]
    pub current_team: Option<String>,
    #[serde(default)]
    pub league: Option<String>,
    #[serde(rename = "leagueType", default)]
    pub league_type: Option<String>,
    #[serde(rename = "highSchool", default)]
    pub high_school: Option<String>,
    #[serde(rename = "homeTown", default)]
    pub home_town: Option<String>,
    #[serde(rename = "homeState", default)]
    pub home_state: Option<String>,
    #[serde(rename = "homeCountry", default)]
    pub home_country: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}

impl Player {
    /// "First Last", falling back to the single `name` field and then the id.
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            _ => self
                .name
                .clone()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| format!("Player {}", self.player_id)),
        }
    }

    /// "Last, First" for the board's name column.
    pub fn board_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{}, {}", last, first),
            _ => self.display_name(),
        }
    }

    /// Team and league on one line, e.g. "Duke (NCAA)".
    pub fn team_line(&self) -> Option<String> {
        match (self.current_team.as_deref(), self.league.as_deref()) {
            (Some(team), Some(league)) if !league.is_empty() => {
                Some(format!("{} ({})", team, league))
            }
            (Some(team), _) => Some(team.to_string()),
            (None, Some(league)) => Some(league.to_string()),
            (None, None) => None,
        }
    }

    /// "Hometown, State, Country" with missing parts skipped.
    pub fn hometown(&self) -> Option<String> {
        let parts: Vec<&str> = [
            self.home_town.as_deref(),
            self.home_state.as_deref(),
            self.home_country.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|p| !p.trim().is_empty())
        .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}
