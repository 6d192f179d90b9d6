pub mod format;
pub mod generation;
pub mod indicators;
pub mod list;
