use std::fmt::Display;

use crate::{
    combo::ComboResult,
    enumerator,
    format::{fmt_num, round3},
    loading_mode::LoadingMode,
    plate::Plate,
    planner_error::PlannerError,
};

pub const DEFAULT_SIDE_LENGTH: f64 = 21.0;
pub const DUMBBELL_BAR_WEIGHT: f64 = 0.365;
pub const CONNECTOR_BAR_WEIGHT: f64 = 1.0;

/// The thing being loaded: a loading mode, the usable length on each side
/// and the weight of the bar (one handle for dumbbells).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Implement {
    mode: LoadingMode,
    side_length: f64,
    bar_weight: f64,
}

impl Implement {
    #[must_use]
    pub fn new(mode: LoadingMode, side_length: f64, bar_weight: f64) -> Self {
        Implement {
            mode,
            side_length,
            bar_weight,
        }
    }

    #[must_use]
    pub fn mode(&self) -> LoadingMode {
        self.mode
    }

    #[must_use]
    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    #[must_use]
    pub fn bar_weight(&self) -> f64 {
        self.bar_weight
    }

    ///
    /// # Errors
    /// If the side length is negative or not finite.
    ///
    pub fn enumerate(
        &self,
        plates: &[Plate],
        include_zero: bool,
    ) -> Result<Vec<ComboResult>, PlannerError> {
        enumerator::enumerate(plates, self.side_length, self.mode, include_zero)
    }

    /// Everything lifted for `combo`: both dumbbells with handles for a pair,
    /// plates plus bar otherwise.
    #[must_use]
    pub fn loaded_weight(&self, combo: &ComboResult) -> f64 {
        match self.mode {
            LoadingMode::Pair => round3(combo.total_weight() * 2.0 + self.bar_weight * 2.0),
            LoadingMode::Connector | LoadingMode::Single => {
                round3(combo.total_weight() + self.bar_weight)
            }
        }
    }

    #[must_use]
    pub fn loaded_formula(&self, combo: &ComboResult) -> String {
        let total = fmt_num(combo.total_weight());
        let bar = fmt_num(self.bar_weight);
        let loaded = fmt_num(self.loaded_weight(combo));
        match self.mode {
            LoadingMode::Pair => format!("{total}×2 + {bar}×2 = {loaded}"),
            LoadingMode::Connector | LoadingMode::Single => format!("{total} + {bar} = {loaded}"),
        }
    }
}

impl From<LoadingMode> for Implement {
    fn from(mode: LoadingMode) -> Self {
        let bar_weight = match mode {
            LoadingMode::Pair | LoadingMode::Single => DUMBBELL_BAR_WEIGHT,
            LoadingMode::Connector => CONNECTOR_BAR_WEIGHT,
        };
        Implement::new(mode, DEFAULT_SIDE_LENGTH, bar_weight)
    }
}

impl Display for Implement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} cm/side, bar {} kg)",
            self.mode,
            fmt_num(self.side_length),
            fmt_num(self.bar_weight)
        )
    }
}
