use std::{fmt::Display, str::FromStr};

use crate::planner_error::PlannerError;

/// How one inventory is shared between the sides being loaded.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub enum LoadingMode {
    /// Two dumbbells loaded identically.
    Pair,
    /// One connecting bar.
    Connector,
    /// One dumbbell.
    Single,
}

impl LoadingMode {
    pub const ALL: [LoadingMode; 3] = [LoadingMode::Pair, LoadingMode::Connector, LoadingMode::Single];

    /// Number of identical sides drawing from the same plate pool.
    #[must_use]
    pub fn sharing_factor(&self) -> usize {
        match self {
            LoadingMode::Pair => 4,
            LoadingMode::Connector | LoadingMode::Single => 2,
        }
    }
}

impl Display for LoadingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadingMode::Pair => write!(f, "pair"),
            LoadingMode::Connector => write!(f, "connector"),
            LoadingMode::Single => write!(f, "single"),
        }
    }
}

impl FromStr for LoadingMode {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pair" => Ok(LoadingMode::Pair),
            "connector" => Ok(LoadingMode::Connector),
            "single" => Ok(LoadingMode::Single),
            _ => Err(PlannerError::InvalidMode(s.to_string())),
        }
    }
}
