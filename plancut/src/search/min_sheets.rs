use crate::config::SearchConfig;
use crate::entities::{AllocationUnit, Sheet};
use crate::packer::{Heuristic, PackRect, RectPacker};
use crate::search::{
    PackingCandidate, ProgressCallback, SearchProgress, area_lower_bound, bin_sizes, fits_empty_bin,
    pack_rects,
};
use log::{debug, info, warn};
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Finds the smallest number of sheets from the front of `pool` on which some heuristic places every unit.
///
/// For every sheet count `n` (starting from the area lower bound), all candidate heuristics are run with exactly
/// the first `n` sheets. At the first count where at least one succeeds, the successful heuristic with
/// the highest utilization is returned, ties going to the earliest heuristic in the configured order.
/// Returns `None` if no heuristic places all units even with the entire pool.
pub fn search_min_sheets(
    units: &[AllocationUnit],
    pool: &[Sheet],
    config: &SearchConfig,
    progress: Option<&ProgressCallback<'_>>,
) -> Option<PackingCandidate> {
    let rects = pack_rects(units);
    let bins = bin_sizes(pool);

    if let Some(r) = rects
        .iter()
        .find(|r| !bins.iter().any(|b| fits_empty_bin(r, b, config.allow_rotation)))
    {
        warn!(
            "[SEARCH] unit {} ({}x{}) does not fit on any sheet of the pool",
            r.id, r.width, r.height
        );
        return None;
    }

    let heuristics = config.heuristics_for(units.len());
    let attempt = AtomicUsize::new(0);
    let start = area_lower_bound(&rects, pool);
    debug!(
        "[SEARCH] searching {} to {} sheet(s) with {} heuristic(s)",
        start,
        pool.len(),
        heuristics.len()
    );

    for n_sheets in start..=pool.len() {
        let sheets = &pool[..n_sheets];
        let try_heuristic = |h: &Heuristic| {
            let candidate = attempt_packing(*h, &rects, sheets, units, config.allow_rotation);
            let attempt = attempt.fetch_add(1, Ordering::Relaxed) + 1;
            if let Some(callback) = progress {
                callback(&SearchProgress {
                    heuristic: *h,
                    n_sheets,
                    success: candidate.is_some(),
                    attempt,
                });
            }
            candidate
        };

        #[cfg(feature = "parallel")]
        let candidates = heuristics.par_iter().map(try_heuristic).collect::<Vec<_>>();
        #[cfg(not(feature = "parallel"))]
        let candidates = heuristics.iter().map(try_heuristic).collect::<Vec<_>>();

        //results are collected in heuristic order, so the earliest heuristic wins ties
        let best = candidates
            .into_iter()
            .flatten()
            .fold(None, |best: Option<PackingCandidate>, c| match &best {
                Some(b) if !c.better_than(b) => best,
                _ => Some(c),
            });

        if let Some(best) = best {
            info!(
                "[SEARCH] minimum of {} sheet(s) reached by {} ({:.2}% utilization) after {} attempts",
                best.n_sheets,
                best.heuristic,
                best.utilization,
                attempt.load(Ordering::Relaxed)
            );
            return Some(best);
        }
    }

    warn!(
        "[SEARCH] no heuristic places all {} units on {} sheet(s)",
        units.len(),
        pool.len()
    );
    None
}

fn attempt_packing(
    heuristic: Heuristic,
    rects: &[PackRect],
    sheets: &[Sheet],
    units: &[AllocationUnit],
    allow_rotation: bool,
) -> Option<PackingCandidate> {
    let packing = heuristic.pack(rects, &bin_sizes(sheets), allow_rotation);
    debug!(
        "[SEARCH] {heuristic} placed {}/{} units on {} sheet(s)",
        packing.n_placed(),
        rects.len(),
        sheets.len()
    );
    match packing.is_complete() {
        true => Some(PackingCandidate::new(
            heuristic,
            packing,
            sheets.to_vec(),
            units,
        )),
        false => None,
    }
}
