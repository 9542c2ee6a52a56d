use crate::config::ScrapConfig;
use crate::entities::{
    AllocationUnit, CuttingPlan, MaterialBreakdown, NestingResult, PlacedPiece, PlanSignature,
};
use crate::geometry::Rect;
use crate::packer::PackedBin;
use crate::scrap::find_scraps;
use crate::search::PackingCandidate;
use crate::util::assertions;
use itertools::Itertools;
use log::info;
use std::collections::HashMap;
use std::time::Instant;

/// Turns a complete packing into a [`NestingResult`]:
/// converts the packed rectangles to placed pieces, groups identical layouts into plans with a repetition count,
/// extracts the leftover regions of every distinct plan and accounts for the consumed material.
///
/// `units` must be indexed by their id.
pub fn build_result(
    candidate: PackingCandidate,
    units: &[AllocationUnit],
    thickness: f64,
    density: f64,
    scrap_config: &ScrapConfig,
    start: Instant,
) -> NestingResult {
    debug_assert!(assertions::unit_ids_correct(units));

    let mut plans: Vec<CuttingPlan> = vec![];
    let mut plan_index: HashMap<PlanSignature, usize> = HashMap::new();

    for bin in candidate.packing.bins.iter().filter(|b| !b.rects.is_empty()) {
        let sheet = candidate.sheets[bin.bin_index];
        let pieces = placed_pieces(bin, units, sheet.margin, sheet.usable_height());
        debug_assert!(assertions::pieces_do_not_overlap(&pieces));
        debug_assert!(assertions::pieces_inside_sheet(&pieces, &sheet));

        let signature = PlanSignature::new(&sheet, &pieces);
        match plan_index.get(&signature) {
            Some(&i) => plans[i].repetitions += 1,
            None => {
                let footprints = bin
                    .rects
                    .iter()
                    .map(|r| Rect::from_xywh(r.x, r.y, r.width, r.height))
                    .collect_vec();
                let scraps = find_scraps(
                    sheet.usable_width(),
                    sheet.usable_height(),
                    &footprints,
                    scrap_config,
                )
                .into_iter()
                .map(|s| s.translate(sheet.margin, sheet.margin))
                .collect_vec();

                let plan = CuttingPlan::new(sheet, pieces, scraps);
                debug_assert!(assertions::scraps_are_free(&plan));
                plan_index.insert(signature, plans.len());
                plans.push(plan);
            }
        }
    }

    let breakdown = MaterialBreakdown::from_plans(&plans, thickness, density);
    debug_assert!(assertions::area_conserved(
        breakdown.total.area,
        breakdown.accounted_area()
    ));

    let total_sheets = plans.iter().map(|p| p.repetitions).sum();
    info!(
        "[NEST] {} sheet(s) in {} distinct plan(s), {:.2}% utilization ({})",
        total_sheets,
        plans.len(),
        candidate.utilization,
        candidate.heuristic
    );

    NestingResult {
        plans,
        total_sheets,
        utilization: candidate.utilization,
        heuristic: candidate.heuristic,
        thickness,
        density,
        breakdown,
        run_time_ms: start.elapsed().as_millis() as u64,
    }
}

/// Converts the packer's bottom-left frame of the nesting area into top-left sheet coordinates.
fn placed_pieces(
    bin: &PackedBin,
    units: &[AllocationUnit],
    margin: f64,
    usable_height: f64,
) -> Vec<PlacedPiece> {
    bin.rects
        .iter()
        .map(|r| {
            let x = margin + r.x;
            let y = margin + (usable_height - r.y - r.height);
            PlacedPiece::new(
                &units[r.id],
                bin.bin_index,
                x,
                y,
                r.width,
                r.height,
                r.rotated,
            )
        })
        .collect_vec()
}
