#![warn(clippy::pedantic)]

pub mod combo;
pub mod enumerator;
pub mod format;
pub mod implement;
pub mod loading_mode;
pub mod plan;
pub mod plate;
pub mod planner_error;
