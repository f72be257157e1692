//! Core library for draftboard.
//!
//! This crate holds everything that is not terminal rendering:
//!
//! - `models`: players, rank records, season lines, measurements, reports
//! - `dataset`: loading the static prospect dataset from JSON
//! - `board`: rank aggregation, sorting, deviation classification and
//!   season stat views
//! - `config`: user configuration and data file resolution
//! - `utils`: formatting helpers shared with the front end

pub mod board;
pub mod config;
pub mod dataset;
pub mod error;
pub mod models;
pub mod utils;

pub use config::Config;
pub use dataset::Dataset;
pub use error::DataError;
