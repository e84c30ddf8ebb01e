use itertools::Itertools;

use crate::{
    combo::ComboResult, implement::Implement, loading_mode::LoadingMode, plate::Plate,
    planner_error::PlannerError,
};

/// All loadings for one implement.
#[derive(Clone, Debug)]
pub struct PlanSection {
    implement: Implement,
    results: Vec<ComboResult>,
}

impl PlanSection {
    #[must_use]
    pub fn implement(&self) -> &Implement {
        &self.implement
    }

    #[must_use]
    pub fn results(&self) -> &[ComboResult] {
        &self.results
    }

    #[must_use]
    pub fn combo_count(&self) -> usize {
        self.results.len()
    }

    /// Distinct plate totals, heaviest first.
    #[must_use]
    pub fn weights(&self) -> Vec<f64> {
        self.results
            .iter()
            .map(ComboResult::total_weight)
            .dedup_by(|a, b| a.to_bits() == b.to_bits())
            .collect()
    }

    #[must_use]
    pub fn distinct_weights(&self) -> usize {
        self.weights().len()
    }
}

/// Loadings for several implements sharing one plate inventory.
#[derive(Clone, Debug)]
pub struct Plan {
    plates: Vec<Plate>,
    sections: Vec<PlanSection>,
}

impl Plan {
    ///
    /// Enumerates every implement against the same inventory, keeping the
    /// implements' order.
    ///
    /// # Errors
    /// If no plate in `plates` has a positive weight, thickness and count,
    /// or an implement has an invalid side length.
    ///
    pub fn build(
        plates: Vec<Plate>,
        implements: &[Implement],
        include_zero: bool,
    ) -> Result<Self, PlannerError> {
        if !plates.iter().any(|p| p.is_usable() && p.count() > 0) {
            return Err(PlannerError::EmptyInventory);
        }

        let sections = implements
            .iter()
            .map(|implement| -> Result<PlanSection, PlannerError> {
                let results = implement.enumerate(&plates, include_zero)?;
                log::info!("{implement}: {} loadings", results.len());
                Ok(PlanSection {
                    implement: *implement,
                    results,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Plan { plates, sections })
    }

    /// The inventory the results' plate indices refer to.
    #[must_use]
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    #[must_use]
    pub fn sections(&self) -> &[PlanSection] {
        &self.sections
    }

    #[must_use]
    pub fn get(&self, mode: LoadingMode) -> Option<&PlanSection> {
        self.sections.iter().find(|s| s.implement.mode() == mode)
    }

    /// The first section, in pair, connector, single order, with any loadings.
    #[must_use]
    pub fn first_non_empty(&self) -> Option<&PlanSection> {
        LoadingMode::ALL
            .iter()
            .filter_map(|mode| self.get(*mode))
            .find(|s| !s.results.is_empty())
    }
}
