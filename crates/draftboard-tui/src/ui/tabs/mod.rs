pub mod board;
pub mod profile;
