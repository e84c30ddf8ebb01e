use std::{fmt::Display, str::FromStr};

use crate::{loading_mode::LoadingMode, planner_error::PlannerError};

/// One kind of plate in the inventory.
///
/// `count` is the number of physical plates owned in total, not per side.
#[derive(Clone, Debug, PartialEq)]
pub struct Plate {
    weight: f64,
    thickness: f64,
    count: usize,
    label: Option<String>,
}

impl Plate {
    #[must_use]
    pub fn new(weight: f64, thickness: f64, count: usize) -> Self {
        Plate {
            weight,
            thickness,
            count,
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.label = (!label.trim().is_empty()).then_some(label);
        self
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The label if one was given, otherwise the weight in kilograms.
    #[must_use]
    pub fn display(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("{} kg", self.weight),
        }
    }

    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.weight.is_finite()
            && self.thickness.is_finite()
            && self.weight > 0.0
            && self.thickness > 0.0
    }

    /// How many of this plate fit on one side when the inventory is shared per `mode`.
    #[must_use]
    pub fn per_side_cap(&self, mode: LoadingMode) -> usize {
        if self.is_usable() {
            self.count / mode.sharing_factor()
        } else {
            0
        }
    }

    /// The inventory the planner starts from when none is given.
    #[must_use]
    pub fn sample_inventory() -> Vec<Plate> {
        [
            (3.0, 4.0, 10),
            (2.5, 4.0, 2),
            (2.0, 4.0, 4),
            (1.5, 3.5, 2),
            (1.25, 3.0, 10),
        ]
        .into_iter()
        .map(|(weight, thickness, count)| {
            Plate::new(weight, thickness, count).with_label(format!("{weight} kg"))
        })
        .collect()
    }

    /// Heaviest first, thicker first among equal weights.
    pub fn sort_for_display(plates: &mut [Plate]) {
        plates.sort_by(|a, b| {
            b.weight
                .total_cmp(&a.weight)
                .then_with(|| b.thickness.total_cmp(&a.thickness))
        });
    }
}

impl Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} cm) x{}",
            self.display(),
            self.thickness,
            self.count
        )
    }
}

impl FromStr for Plate {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PlannerError::InvalidPlate(s.to_string());

        let mut fields = s.splitn(4, ':');
        let mut next = || fields.next().map(str::trim).ok_or_else(invalid);

        let weight = next()?.parse::<f64>().map_err(|_| invalid())?;
        let thickness = next()?.parse::<f64>().map_err(|_| invalid())?;
        let count = next()?.parse::<usize>().map_err(|_| invalid())?;
        let label = fields.next().unwrap_or_default();

        if weight < 0.0 || thickness < 0.0 {
            return Err(invalid());
        }

        Ok(Plate::new(weight, thickness, count).with_label(label))
    }
}
