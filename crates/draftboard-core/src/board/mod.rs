//! The big board engine.
//!
//! Every function here is a pure read over the loaded dataset. Nothing is
//! cached between calls, so any combination of sort key, direction, season
//! and stat view can be requested at any time.
//!
//! - `aggregate`: per-player rank summary and composite rank
//! - `sort`: ordering players by one source or by composite
//! - `classify`: labelling a source's rank against the player's average
//! - `views`: named projections of a season stat line

pub mod aggregate;
pub mod classify;
pub mod sort;
pub mod views;

pub use aggregate::{composite, RankSummary, Rankings};
pub use classify::{classify, classify_rank, Deviation, RankCell, DEVIATION_THRESHOLD};
pub use sort::{compare_ranks, sort_players, SortDirection, SortKey};
pub use views::{default_season, project, seasons_most_recent_first, StatField, StatLine, StatView};
