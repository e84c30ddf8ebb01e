use std::{collections::BTreeMap, fmt::Display};

use itertools::Itertools;

use crate::{format::fmt_num, plate::Plate};

pub const SUMMARY_SEPARATOR: &str = " + ";
pub const EMPTY_SUMMARY: &str = "(empty)";

/// One feasible symmetric loading.
///
/// `per_side_counts` is keyed by position in the inventory the search was run on.
#[derive(Clone, Debug, PartialEq)]
pub struct ComboResult {
    total_weight: f64,
    per_side_thickness: f64,
    per_side_counts: BTreeMap<usize, usize>,
    summary: String,
}

impl ComboResult {
    pub(crate) fn new(
        plates: &[Plate],
        total_weight: f64,
        per_side_thickness: f64,
        per_side_counts: BTreeMap<usize, usize>,
    ) -> Self {
        let summary = Self::summarize(plates, &per_side_counts);
        ComboResult {
            total_weight,
            per_side_thickness,
            per_side_counts,
            summary,
        }
    }

    /// Plate weight of both sides of one implement, bar excluded.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    #[must_use]
    pub fn per_side_thickness(&self) -> f64 {
        self.per_side_thickness
    }

    #[must_use]
    pub fn per_side_counts(&self) -> &BTreeMap<usize, usize> {
        &self.per_side_counts
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Number of plates on one side.
    #[must_use]
    pub fn plate_count(&self) -> usize {
        self.per_side_counts.values().sum()
    }

    fn summarize(plates: &[Plate], counts: &BTreeMap<usize, usize>) -> String {
        if counts.is_empty() {
            return EMPTY_SUMMARY.to_string();
        }

        counts
            .iter()
            .map(|(&idx, &count)| (&plates[idx], count))
            .sorted_by(|(a, _), (b, _)| {
                b.weight()
                    .total_cmp(&a.weight())
                    .then_with(|| b.thickness().total_cmp(&a.thickness()))
            })
            .map(|(plate, count)| format!("{}×{count}", plate.display()))
            .join(SUMMARY_SEPARATOR)
    }
}

impl Display for ComboResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} kg | {} cm | {}",
            fmt_num(self.total_weight),
            fmt_num(self.per_side_thickness),
            self.summary
        )
    }
}
