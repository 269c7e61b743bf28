pub mod discover;
pub mod matches;
pub mod profile;
