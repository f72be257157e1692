use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An official scouting report from the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoutingReport {
    #[serde(rename = "reportId", default)]
    pub report_id: Option<String>,
    #[serde(rename = "playerId")]
    pub player_id: i64,
    #[serde(default)]
    pub scout: Option<String>,
    #[serde(default)]
    pub report: String,
}

impl ScoutingReport {
    pub fn author(&self) -> &str {
        self.scout.as_deref().unwrap_or("Unknown scout")
    }
}

/// A note typed in by the user during this session.
///
/// Notes live only in memory. They are never written back to the dataset
/// and are gone when the program exits.
#[derive(Debug, Clone, PartialEq)]
pub struct UserNote {
    pub author: String,
    pub text: String,
    pub submitted_at: DateTime<Utc>,
}

impl UserNote {
    /// Build a note from raw form input. Returns `None` if either the
    /// author or the text is blank after trimming.
    pub fn new(author: &str, text: &str) -> Option<Self> {
        let author = author.trim();
        let text = text.trim();
        if author.is_empty() || text.is_empty() {
            return None;
        }
        Some(Self {
            author: author.to_string(),
            text: text.to_string(),
            submitted_at: Utc::now(),
        })
    }

    pub fn age_minutes(&self) -> i64 {
        (Utc::now() - self.submitted_at).num_minutes()
    }

    pub fn age_display(&self) -> String {
        let minutes = self.age_minutes();
        if minutes < 1 {
            // Also covers clock skew
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 1440 {
            format!("{}h ago", minutes / 60)
        } else {
            format!("{}d ago", minutes / 1440)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn note_aged(minutes: i64) -> UserNote {
        let mut note = UserNote::new("Sam", "Quick first step").unwrap();
        note.submitted_at = Utc::now() - Duration::minutes(minutes);
        note
    }

    #[test]
    fn test_new_trims_input() {
        let note = UserNote::new("  Sam ", "\tGreat motor.\n").unwrap();
        assert_eq!(note.author, "Sam");
        assert_eq!(note.text, "Great motor.");
    }

    #[test]
    fn test_new_rejects_blank_fields() {
        assert!(UserNote::new("", "text").is_none());
        assert!(UserNote::new("Sam", "   ").is_none());
        assert!(UserNote::new(" ", "\n").is_none());
    }

    #[test]
    fn test_age_display() {
        assert_eq!(note_aged(0).age_display(), "just now");
        assert_eq!(note_aged(-5).age_display(), "just now");
        assert_eq!(note_aged(5).age_display(), "5m ago");
        assert_eq!(note_aged(125).age_display(), "2h ago");
        assert_eq!(note_aged(3 * 1440 + 10).age_display(), "3d ago");
    }

    #[test]
    fn test_report_author_fallback() {
        let report: ScoutingReport =
            serde_json::from_str(r#"{"playerId": 1, "report": "Long arms."}"#).unwrap();
        assert_eq!(report.author(), "Unknown scout");
    }
}
