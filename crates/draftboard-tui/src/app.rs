//! Application state management for draftboard.
//!
//! `App` owns every piece of mutable UI state: the active sort, the board
//! selection, the open profile, the selected season and stat view, and the
//! notes typed in during this session. The dataset it holds is read-only.

use std::collections::HashMap;

use draftboard_core::board::{
    project, seasons_most_recent_first, sort_players, SortDirection, SortKey, StatLine, StatView,
};
use draftboard_core::models::{Player, SeasonRecord, UserNote};
use draftboard_core::utils::contains_ignore_case;
use draftboard_core::{Config, Dataset};
use tracing::{debug, info};

// ============================================================================
// Constants
// ============================================================================

/// Number of rows to scroll on page up/down.
pub const PAGE_SCROLL_SIZE: usize = 10;

/// Maximum length for a note author's name.
const MAX_AUTHOR_LENGTH: usize = 40;

/// Maximum length for a note body.
const MAX_NOTE_LENGTH: usize = 1000;

// ============================================================================
// UI State Types
// ============================================================================

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Board,
    Profile,
}

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    Searching,
    ShowingHelp,
    AddingNote,
    ConfirmingQuit,
    Quitting,
}

/// Note form focus state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteField {
    Author,
    Text,
}

/// Where a report shown on the profile came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOrigin {
    Official,
    /// Typed in this session; carries the note's age for display
    Session(String),
}

/// One entry of the profile's reports panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub author: String,
    pub body: String,
    pub origin: ReportOrigin,
}

// ============================================================================
// Main Application Struct
// ============================================================================

/// Main application state container
pub struct App {
    pub config: Config,
    pub dataset: Dataset,

    // UI State
    pub state: AppState,
    pub screen: Screen,
    pub search_query: String,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    pub board_selection: usize,

    // Profile state
    pub profile_player: Option<i64>,
    pub season_selection: usize,
    pub stat_view: StatView,
    pub reports_scroll: u16,

    // Note form state
    pub note_author: String,
    pub note_text: String,
    pub note_focus: NoteField,
    pub note_error: Option<String>,

    /// Notes typed in this session, keyed by player id. Never merged into
    /// the dataset.
    notes: HashMap<i64, Vec<UserNote>>,

    // Status message
    pub status_message: Option<String>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config, dataset: Dataset) -> Self {
        let sort_key = config
            .default_sort_source
            .as_deref()
            .map(|name| SortKey::resolve(name, dataset.schema()))
            .unwrap_or_default();
        let stat_view = config.default_stat_view;

        debug!(%sort_key, ?stat_view, "App state initialized");

        Self {
            config,
            dataset,

            state: AppState::Normal,
            screen: Screen::Board,
            search_query: String::new(),
            sort_key,
            sort_direction: SortDirection::Ascending,
            board_selection: 0,

            profile_player: None,
            season_selection: 0,
            stat_view,
            reports_scroll: 0,

            note_author: String::new(),
            note_text: String::new(),
            note_focus: NoteField::Author,
            note_error: None,

            notes: HashMap::new(),

            status_message: None,
        }
    }

    pub fn rank_precision(&self) -> u32 {
        self.config.rank_precision
    }

    // =========================================================================
    // Board
    // =========================================================================

    /// Check if a player matches the search query.
    /// Query should already be lowercased.
    fn player_matches_search(player: &Player, query: &str) -> bool {
        contains_ignore_case(&player.display_name(), query)
            || player
                .current_team
                .as_ref()
                .map(|s| contains_ignore_case(s, query))
                .unwrap_or(false)
            || player
                .league
                .as_ref()
                .map(|s| contains_ignore_case(s, query))
                .unwrap_or(false)
    }

    /// Get players sorted by current sort settings, filtered by search query
    pub fn get_sorted_players(&self) -> Vec<&Player> {
        let mut players: Vec<&Player> = self.dataset.players().iter().collect();

        if !self.search_query.is_empty() {
            let query = self.search_query.to_lowercase();
            players.retain(|p| Self::player_matches_search(p, &query));
        }

        sort_players(
            players,
            self.dataset.rankings(),
            &self.sort_key,
            self.sort_direction,
            self.rank_precision(),
        )
    }

    pub fn selected_player(&self) -> Option<&Player> {
        self.get_sorted_players().get(self.board_selection).copied()
    }

    /// Toggle sort - if already sorting by this key, flip direction;
    /// otherwise switch to this key ascending. Resets selection to 0.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.reversed();
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Ascending;
        }
        self.board_selection = 0;
        debug!(key = %self.sort_key, direction = ?self.sort_direction, "Sort changed");
    }

    /// Toggle sort on the source in the given 0-based board column.
    /// Columns past the last source are ignored.
    pub fn toggle_source_sort(&mut self, index: usize) {
        if let Some(source) = self.dataset.schema().get(index) {
            let key = SortKey::Source(source.to_string());
            self.toggle_sort(key);
        }
    }

    pub fn board_len(&self) -> usize {
        self.get_sorted_players().len()
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.board_len();
        if len == 0 {
            self.board_selection = 0;
            return;
        }
        let next = self.board_selection as isize + delta;
        self.board_selection = next.clamp(0, len as isize - 1) as usize;
    }

    // =========================================================================
    // Profile
    // =========================================================================

    /// Open the profile of the selected board row.
    pub fn open_profile(&mut self) {
        let Some(player_id) = self.selected_player().map(|p| p.player_id) else {
            return;
        };
        info!(player_id, "Opening profile");
        self.profile_player = Some(player_id);
        self.season_selection = 0;
        self.stat_view = self.config.default_stat_view;
        self.reports_scroll = 0;
        self.screen = Screen::Profile;
    }

    pub fn close_profile(&mut self) {
        self.screen = Screen::Board;
        self.profile_player = None;
    }

    pub fn profile(&self) -> Option<&Player> {
        self.profile_player.and_then(|id| self.dataset.player(id))
    }

    /// Season lines of the open profile, most recent first.
    pub fn profile_seasons(&self) -> Vec<&SeasonRecord> {
        match self.profile_player {
            Some(id) => seasons_most_recent_first(self.dataset.seasons(id)),
            None => Vec::new(),
        }
    }

    pub fn selected_season(&self) -> Option<&SeasonRecord> {
        self.profile_seasons().get(self.season_selection).copied()
    }

    /// Step through the profile's seasons, wrapping at either end.
    pub fn cycle_season(&mut self, forward: bool) {
        let len = self.profile_seasons().len();
        if len == 0 {
            return;
        }
        self.season_selection = if forward {
            (self.season_selection + 1) % len
        } else {
            (self.season_selection + len - 1) % len
        };
    }

    pub fn set_stat_view(&mut self, view: StatView) {
        self.stat_view = view;
    }

    pub fn stat_lines(&self) -> Vec<StatLine> {
        project(self.selected_season(), self.stat_view)
    }

    // =========================================================================
    // Reports and session notes
    // =========================================================================

    pub fn notes_for(&self, player_id: i64) -> &[UserNote] {
        self.notes.get(&player_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Official reports followed by this session's notes, in submission
    /// order. The two collections stay separate; they only meet here.
    pub fn reports_for(&self, player_id: i64) -> Vec<ReportEntry> {
        let official = self.dataset.reports(player_id).into_iter().map(|r| ReportEntry {
            author: r.author().to_string(),
            body: r.report.clone(),
            origin: ReportOrigin::Official,
        });

        let session = self.notes_for(player_id).iter().map(|n| ReportEntry {
            author: n.author.clone(),
            body: n.text.clone(),
            origin: ReportOrigin::Session(n.age_display()),
        });

        official.chain(session).collect()
    }

    pub fn start_note(&mut self) {
        if self.profile_player.is_none() {
            return;
        }
        self.note_text.clear();
        self.note_focus = if self.note_author.is_empty() {
            NoteField::Author
        } else {
            NoteField::Text
        };
        self.note_error = None;
        self.state = AppState::AddingNote;
    }

    pub fn cancel_note(&mut self) {
        self.note_text.clear();
        self.note_error = None;
        self.state = AppState::Normal;
    }

    /// Submit the note form. Blank fields keep the form open with an error.
    /// The author name is kept for the next note.
    pub fn submit_note(&mut self) -> bool {
        let Some(player_id) = self.profile_player else {
            self.cancel_note();
            return false;
        };

        match UserNote::new(&self.note_author, &self.note_text) {
            Some(note) => {
                debug!(player_id, author = %note.author, "Session note added");
                self.notes.entry(player_id).or_default().push(note);
                self.note_text.clear();
                self.note_error = None;
                self.state = AppState::Normal;
                self.status_message = Some("Note added for this session".to_string());
                true
            }
            None => {
                self.note_error = Some("Name and note are both required".to_string());
                false
            }
        }
    }
}

// ============================================================================
// Input validation helpers (exported for use in input.rs)
// ============================================================================

/// Check if a character is valid for input (no control characters)
fn is_valid_input_char(c: char) -> bool {
    !c.is_control()
}

/// Check if an author name character should be accepted
pub fn can_add_author_char(current_len: usize, c: char) -> bool {
    current_len < MAX_AUTHOR_LENGTH && is_valid_input_char(c)
}

/// Check if a note character should be accepted
pub fn can_add_note_char(current_len: usize, c: char) -> bool {
    current_len < MAX_NOTE_LENGTH && is_valid_input_char(c)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "bio": [
            {"playerId": 1, "firstName": "Ada", "lastName": "Stone", "currentTeam": "Harbor City"},
            {"playerId": 2, "firstName": "Ben", "lastName": "Okafor", "currentTeam": "Lakeview"},
            {"playerId": 3, "firstName": "Cal", "lastName": "Reyes", "currentTeam": "Harbor City"}
        ],
        "scoutRankings": [
            {"playerId": 1, "Scout A": null, "Scout B": 4},
            {"playerId": 2, "Scout A": 5, "Scout B": 1},
            {"playerId": 3, "Scout A": 2, "Scout B": 2}
        ],
        "seasonLogs": [
            {"playerId": 1, "Season": 2021, "Team": "Prep"},
            {"playerId": 1, "Season": 2023, "Team": "Harbor City", "PTS": 17.5},
            {"playerId": 1, "Season": 2022, "Team": "Harbor City"}
        ],
        "scoutingReports": [
            {"playerId": 1, "scout": "Scout B", "report": "Plus defender."}
        ]
    }"#;

    fn app() -> App {
        App::new(Config::default(), Dataset::from_json(SAMPLE).unwrap())
    }

    fn ids(app: &App) -> Vec<i64> {
        app.get_sorted_players().iter().map(|p| p.player_id).collect()
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    #[test]
    fn test_default_sort_is_composite_ascending() {
        let app = app();
        assert_eq!(app.sort_key, SortKey::Composite);
        assert_eq!(app.sort_direction, SortDirection::Ascending);
        // composites: 1 -> 4.0, 2 -> 3.0, 3 -> 2.0
        assert_eq!(ids(&app), vec![3, 2, 1]);
    }

    #[test]
    fn test_toggle_same_key_flips_direction() {
        let mut app = app();
        app.toggle_sort(SortKey::Composite);
        assert_eq!(app.sort_direction, SortDirection::Descending);
        assert_eq!(ids(&app), vec![1, 2, 3]);
        app.toggle_sort(SortKey::Composite);
        assert_eq!(app.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn test_toggle_new_key_resets_ascending() {
        let mut app = app();
        app.toggle_sort(SortKey::Composite);
        app.board_selection = 2;
        app.toggle_source_sort(0);
        assert_eq!(app.sort_key, SortKey::Source("Scout A".to_string()));
        assert_eq!(app.sort_direction, SortDirection::Ascending);
        assert_eq!(app.board_selection, 0);
        // Player 1 has no Scout A rank and stays last
        assert_eq!(ids(&app), vec![3, 2, 1]);
        app.toggle_source_sort(0);
        assert_eq!(ids(&app), vec![2, 3, 1]);
    }

    #[test]
    fn test_toggle_source_out_of_range_is_ignored() {
        let mut app = app();
        app.toggle_source_sort(7);
        assert_eq!(app.sort_key, SortKey::Composite);
    }

    #[test]
    fn test_configured_default_sort_source() {
        let config = Config {
            default_sort_source: Some("scout b".to_string()),
            ..Default::default()
        };
        let app = App::new(config, Dataset::from_json(SAMPLE).unwrap());
        assert_eq!(app.sort_key, SortKey::Source("Scout B".to_string()));
        assert_eq!(ids(&app), vec![2, 3, 1]);
    }

    #[test]
    fn test_search_filters_before_sorting() {
        let mut app = app();
        app.search_query = "harbor".to_string();
        assert_eq!(ids(&app), vec![3, 1]);
    }

    #[test]
    fn test_move_selection_clamps() {
        let mut app = app();
        app.move_selection(-3);
        assert_eq!(app.board_selection, 0);
        app.move_selection(PAGE_SCROLL_SIZE as isize);
        assert_eq!(app.board_selection, 2);
    }

    // -------------------------------------------------------------------------
    // Profile
    // -------------------------------------------------------------------------

    fn app_with_profile(player_index: usize) -> App {
        let mut app = app();
        app.board_selection = player_index;
        app.open_profile();
        app
    }

    #[test]
    fn test_open_profile_selects_most_recent_season() {
        let app = app_with_profile(2);
        assert_eq!(app.screen, Screen::Profile);
        assert_eq!(app.profile_player, Some(1));
        assert_eq!(app.selected_season().and_then(|s| s.season), Some(2023.0));
        assert_eq!(app.stat_view, StatView::Counting);
    }

    #[test]
    fn test_cycle_season_wraps() {
        let mut app = app_with_profile(2);
        app.cycle_season(true);
        assert_eq!(app.selected_season().and_then(|s| s.season), Some(2022.0));
        app.cycle_season(true);
        app.cycle_season(true);
        assert_eq!(app.selected_season().and_then(|s| s.season), Some(2023.0));
        app.cycle_season(false);
        assert_eq!(app.selected_season().and_then(|s| s.season), Some(2021.0));
    }

    #[test]
    fn test_stat_lines_follow_view() {
        let mut app = app_with_profile(2);
        assert_eq!(app.stat_lines().len(), StatView::Counting.fields().len());
        app.set_stat_view(StatView::Total);
        assert_eq!(app.stat_lines().len(), StatView::Total.fields().len());
    }

    #[test]
    fn test_profile_without_seasons_has_no_stat_lines() {
        let app = app_with_profile(0);
        assert_eq!(app.profile_player, Some(3));
        assert!(app.selected_season().is_none());
        assert!(app.stat_lines().is_empty());
    }

    #[test]
    fn test_close_profile() {
        let mut app = app_with_profile(1);
        app.close_profile();
        assert_eq!(app.screen, Screen::Board);
        assert!(app.profile().is_none());
    }

    // -------------------------------------------------------------------------
    // Notes
    // -------------------------------------------------------------------------

    #[test]
    fn test_submit_note_appends_after_official_reports() {
        let mut app = app_with_profile(2);
        app.start_note();
        assert_eq!(app.state, AppState::AddingNote);
        app.note_author = "Sam".to_string();
        app.note_text = " Needs to add strength. ".to_string();
        assert!(app.submit_note());
        assert_eq!(app.state, AppState::Normal);

        let reports = app.reports_for(1);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].origin, ReportOrigin::Official);
        assert_eq!(reports[1].author, "Sam");
        assert_eq!(reports[1].body, "Needs to add strength.");
        assert!(matches!(reports[1].origin, ReportOrigin::Session(_)));

        // The dataset itself is untouched
        assert_eq!(app.dataset.reports(1).len(), 1);
    }

    #[test]
    fn test_blank_note_is_rejected() {
        let mut app = app_with_profile(2);
        app.start_note();
        app.note_author = "Sam".to_string();
        app.note_text = "   ".to_string();
        assert!(!app.submit_note());
        assert_eq!(app.state, AppState::AddingNote);
        assert!(app.note_error.is_some());
        assert!(app.notes_for(1).is_empty());
    }

    #[test]
    fn test_notes_are_per_player() {
        let mut app = app_with_profile(2);
        app.start_note();
        app.note_author = "Sam".to_string();
        app.note_text = "First look.".to_string();
        app.submit_note();
        assert_eq!(app.notes_for(1).len(), 1);
        assert!(app.notes_for(2).is_empty());
        assert!(app.reports_for(2).is_empty());
    }

    #[test]
    fn test_start_note_remembers_author() {
        let mut app = app_with_profile(2);
        app.start_note();
        assert_eq!(app.note_focus, NoteField::Author);
        app.note_author = "Sam".to_string();
        app.note_text = "One.".to_string();
        app.submit_note();
        app.start_note();
        assert_eq!(app.note_focus, NoteField::Text);
        assert!(app.note_text.is_empty());
    }

    // -------------------------------------------------------------------------
    // Input Validation Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_can_add_author_char() {
        assert!(can_add_author_char(0, 'a'));
        assert!(can_add_author_char(39, 'z'));
        assert!(!can_add_author_char(40, 'a'));
        assert!(!can_add_author_char(0, '\n'));
    }

    #[test]
    fn test_can_add_note_char() {
        assert!(can_add_note_char(0, 'a'));
        assert!(can_add_note_char(999, '!'));
        assert!(!can_add_note_char(1000, 'a'));
        assert!(!can_add_note_char(0, '\x00'));
    }
}
