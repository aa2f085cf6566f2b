pub mod persistence;
pub mod reaper;
pub mod warehouse;
