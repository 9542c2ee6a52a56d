use crate::config::SearchConfig;
use crate::entities::{AllocationUnit, Sheet};
use crate::packer::RectPacker;
use crate::search::{
    PackingCandidate, ProgressCallback, SearchProgress, area_lower_bound, bin_sizes, fits_empty_bin,
    pack_rects,
};
use log::{debug, info, warn};

/// Runs each candidate heuristic with a growing number of identical sheets until all units are placed,
/// keeping the result which uses the fewest sheets.
///
/// Equal sheet counts are not compared on utilization: the first heuristic to reach a count wins.
/// Returns `None` if a unit does not fit on an empty sheet, in which case no number of sheets would suffice.
pub fn search_by_bin_growth(
    units: &[AllocationUnit],
    sheet: &Sheet,
    config: &SearchConfig,
    progress: Option<&ProgressCallback<'_>>,
) -> Option<PackingCandidate> {
    let rects = pack_rects(units);
    let bin = bin_sizes(&[*sheet])[0];

    if let Some(r) = rects
        .iter()
        .find(|r| !fits_empty_bin(r, &bin, config.allow_rotation))
    {
        warn!(
            "[SEARCH] unit {} ({}x{}) does not fit on an empty {}x{} sheet",
            r.id, r.width, r.height, bin.width, bin.height
        );
        return None;
    }

    //packing with more identical sheets than needed never changes the layout, so growing from the area bound is safe
    let start = area_lower_bound(&rects, &sheet.pool(rects.len().max(1)));
    let mut attempt = 0;
    let mut best: Option<PackingCandidate> = None;

    for heuristic in config.heuristics_for(units.len()) {
        let mut n_sheets = start;
        let packing = loop {
            let sheets = sheet.pool(n_sheets);
            let packing = heuristic.pack(&rects, &bin_sizes(&sheets), config.allow_rotation);
            attempt += 1;
            if let Some(callback) = progress {
                callback(&SearchProgress {
                    heuristic,
                    n_sheets,
                    success: packing.is_complete(),
                    attempt,
                });
            }
            debug!(
                "[SEARCH] {heuristic} placed {}/{} units on {n_sheets} sheet(s)",
                packing.n_placed(),
                rects.len()
            );
            match packing.is_complete() || n_sheets >= rects.len() {
                true => break packing,
                false => n_sheets += 1,
            }
        };
        if !packing.is_complete() {
            continue;
        }

        let candidate = PackingCandidate::new(heuristic, packing, sheet.pool(n_sheets), units);
        if best.as_ref().is_none_or(|b| candidate.n_sheets < b.n_sheets) {
            best = Some(candidate);
        }
    }

    if let Some(b) = &best {
        info!(
            "[SEARCH] bin growth: {} on {} sheet(s), {:.2}% utilization",
            b.heuristic, b.n_sheets, b.utilization
        );
    }
    best
}
