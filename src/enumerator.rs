//! Exhaustive enumeration of symmetric plate loadings.
//!
//! The search walks plate kinds thickest first and, for each, tries every
//! per-side count from the largest that still fits down to zero. Lengths are
//! compared with a small absolute slack so stacks that land exactly on the
//! limit are not lost to floating point accumulation.

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::{
    combo::ComboResult, format::round3, loading_mode::LoadingMode, plate::Plate,
    planner_error::PlannerError,
};

/// Absolute slack applied when comparing stacked thickness with the side length.
pub const LENGTH_TOLERANCE: f64 = 1e-9;

/// A plate kind that can appear at least once per side.
struct Candidate<'a> {
    index: usize,
    plate: &'a Plate,
    cap: usize,
}

struct Search<'a> {
    plates: &'a [Plate],
    candidates: Vec<Candidate<'a>>,
    side_length: f64,
    include_zero: bool,
    results: Vec<ComboResult>,
}

///
/// Every distinct per-side loading of `plates` that fits within `side_length`
/// when the inventory is shared as `mode` dictates, heaviest first and, among
/// equal weights, shortest stack first.
///
/// The empty loading is only reported when `include_zero` is set.
///
/// # Errors
/// If `side_length` is negative or not a finite number.
///
pub fn enumerate(
    plates: &[Plate],
    side_length: f64,
    mode: LoadingMode,
    include_zero: bool,
) -> Result<Vec<ComboResult>, PlannerError> {
    if !side_length.is_finite() || side_length < 0.0 {
        return Err(PlannerError::InvalidSideLength(side_length));
    }

    let candidates = candidates(plates, mode);
    log::debug!(
        "{mode}: {} of {} plate kinds usable, caps {:?}",
        candidates.len(),
        plates.len(),
        candidates.iter().map(|c| (c.index, c.cap)).collect_vec()
    );

    if candidates.is_empty() && !include_zero {
        return Ok(Vec::new());
    }

    let mut search = Search {
        plates,
        candidates,
        side_length,
        include_zero,
        results: Vec::new(),
    };
    search.visit(0, 0.0, 0.0, &mut Vec::new());

    let found = search.results.len();
    let results = finish(search.results);
    log::debug!("{mode}: {found} loadings found, {} after dedup", results.len());

    Ok(results)
}

fn candidates(plates: &[Plate], mode: LoadingMode) -> Vec<Candidate<'_>> {
    plates
        .iter()
        .enumerate()
        .filter(|(index, plate)| {
            if plate.count() > 0 && !plate.is_usable() {
                log::warn!("ignoring plate #{index} ({plate}): weight and thickness must be positive");
            }
            plate.is_usable()
        })
        .map(|(index, plate)| Candidate {
            index,
            plate,
            cap: plate.per_side_cap(mode),
        })
        .filter(|candidate| candidate.cap > 0)
        .sorted_by(|a, b| b.plate.thickness().total_cmp(&a.plate.thickness()))
        .collect()
}

impl Search<'_> {
    /// `counts[i]` is the count chosen for `candidates[i]`, for every `i < depth`.
    fn visit(&mut self, depth: usize, used: f64, side_weight: f64, counts: &mut Vec<usize>) {
        if used - LENGTH_TOLERANCE > self.side_length {
            return;
        }

        let Some(candidate) = self.candidates.get(depth) else {
            self.emit(used, side_weight, counts);
            return;
        };

        let thickness = candidate.plate.thickness();
        let weight = candidate.plate.weight();
        let room = (self.side_length - used + LENGTH_TOLERANCE).max(0.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let fits = (room / thickness).floor() as usize;
        let hi = candidate.cap.min(fits);

        for n in (0..=hi).rev() {
            #[allow(clippy::cast_precision_loss)]
            let n_f = n as f64;
            counts.push(n);
            self.visit(depth + 1, used + n_f * thickness, side_weight + n_f * weight, counts);
            counts.pop();
        }
    }

    fn emit(&mut self, used: f64, side_weight: f64, counts: &[usize]) {
        if side_weight <= 0.0 && !self.include_zero {
            return;
        }

        let per_side_counts = self
            .candidates
            .iter()
            .zip(counts)
            .filter(|(_, n)| **n > 0)
            .map(|(candidate, n)| (candidate.index, *n))
            .collect::<BTreeMap<_, _>>();

        self.results.push(ComboResult::new(
            self.plates,
            round3(side_weight * 2.0),
            round3(used),
            per_side_counts,
        ));
    }
}

/// Drops repeated loadings and puts the rest in display order.
fn finish(results: Vec<ComboResult>) -> Vec<ComboResult> {
    results
        .into_iter()
        .unique_by(|r| {
            (
                r.total_weight().to_bits(),
                r.per_side_thickness().to_bits(),
                r.per_side_counts()
                    .iter()
                    .map(|(&idx, &n)| (idx, n))
                    .collect_vec(),
            )
        })
        .sorted_by(|a, b| {
            b.total_weight()
                .total_cmp(&a.total_weight())
                .then_with(|| a.per_side_thickness().total_cmp(&b.per_side_thickness()))
        })
        .collect()
}
