//! Loading the static prospect dataset.
//!
//! The dataset is a single JSON document holding one array per table:
//!
//! ```json
//! {
//!   "bio": [{ "playerId": 1, "firstName": "...", ... }],
//!   "scoutRankings": [{ "playerId": 1, "ESPN Rank": 3, "Ringer Rank": null }],
//!   "measurements": [...],
//!   "seasonLogs": [...],
//!   "scoutingReports": [...]
//! }
//! ```
//!
//! Every table is optional. Once loaded the dataset is never modified.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::board::Rankings;
use crate::error::DataError;
use crate::models::{Measurements, Player, RankRecord, RankSchema, ScoutingReport, SeasonRecord};

#[derive(Debug, Deserialize, Default)]
struct DatasetFile {
    #[serde(alias = "players", default)]
    bio: Vec<Player>,
    #[serde(rename = "scoutRankings", default)]
    scout_rankings: Vec<RankRecord>,
    #[serde(default)]
    measurements: Vec<Measurements>,
    #[serde(rename = "seasonLogs", default)]
    season_logs: Vec<SeasonRecord>,
    #[serde(rename = "scoutingReports", default)]
    scouting_reports: Vec<ScoutingReport>,
}

/// The loaded, read-only tables plus the per-player indexes built from them.
#[derive(Debug, Default)]
pub struct Dataset {
    players: Vec<Player>,
    rankings: Rankings,
    measurements: HashMap<i64, Measurements>,
    seasons: Vec<SeasonRecord>,
    reports: Vec<ScoutingReport>,
}

impl Dataset {
    /// Read and parse the dataset at `path`.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        if !path.exists() {
            return Err(DataError::NotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path).map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let file: DatasetFile =
            serde_json::from_str(&contents).map_err(|source| DataError::Parse {
                path: Some(path.to_path_buf()),
                source,
            })?;

        let dataset = Self::from_file(file);
        info!(
            path = %path.display(),
            players = dataset.players.len(),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    /// Parse a dataset from an in-memory JSON string.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let file: DatasetFile = serde_json::from_str(json)
            .map_err(|source| DataError::Parse { path: None, source })?;
        Ok(Self::from_file(file))
    }

    fn from_file(file: DatasetFile) -> Self {
        let rankings = Rankings::new(file.scout_rankings);

        let mut measurements = HashMap::with_capacity(file.measurements.len());
        for m in file.measurements {
            if measurements.contains_key(&m.player_id) {
                warn!(player_id = m.player_id, "Duplicate measurements ignored");
                continue;
            }
            measurements.insert(m.player_id, m);
        }

        debug!(
            players = file.bio.len(),
            ranked = rankings.len(),
            sources = rankings.schema().len(),
            measured = measurements.len(),
            season_lines = file.season_logs.len(),
            reports = file.scouting_reports.len(),
            "Dataset indexed"
        );

        Self {
            players: file.bio,
            rankings,
            measurements,
            seasons: file.season_logs,
            reports: file.scouting_reports,
        }
    }

    /// All players in dataset order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, player_id: i64) -> Option<&Player> {
        self.players.iter().find(|p| p.player_id == player_id)
    }

    pub fn rankings(&self) -> &Rankings {
        &self.rankings
    }

    pub fn schema(&self) -> &RankSchema {
        self.rankings.schema()
    }

    pub fn measurements(&self, player_id: i64) -> Option<&Measurements> {
        self.measurements.get(&player_id)
    }

    /// A player's season lines in dataset order.
    pub fn seasons(&self, player_id: i64) -> Vec<&SeasonRecord> {
        self.seasons
            .iter()
            .filter(|s| s.player_id == player_id)
            .collect()
    }

    /// Official scouting reports for a player in dataset order.
    pub fn reports(&self, player_id: i64) -> Vec<&ScoutingReport> {
        self.reports
            .iter()
            .filter(|r| r.player_id == player_id)
            .collect()
    }
}
