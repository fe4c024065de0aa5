pub mod ids;
pub mod matches;
pub mod summary;
