use crate::entities::{AllocationUnit, CuttingPlan, PlacedPiece, Sheet};
use itertools::Itertools;
use log::error;
//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks

pub fn unit_ids_correct(units: &[AllocationUnit]) -> bool {
    units.iter().enumerate().all(|(i, u)| u.id == i)
}

/// No two footprints on the same sheet share interior area.
pub fn pieces_do_not_overlap(pieces: &[PlacedPiece]) -> bool {
    for (a, b) in pieces.iter().tuple_combinations() {
        if a.sheet_index == b.sheet_index && a.footprint().overlaps(&b.footprint()) {
            error!(
                "pieces {} and {} overlap on sheet {}: {:?} and {:?}",
                a.unit_id,
                b.unit_id,
                a.sheet_index,
                a.footprint(),
                b.footprint()
            );
            return false;
        }
    }
    true
}

/// Every footprint lies within the usable area of the sheet.
pub fn pieces_inside_sheet(pieces: &[PlacedPiece], sheet: &Sheet) -> bool {
    let usable = sheet.usable_rect();
    match pieces.iter().find(|p| !usable.contains(&p.footprint())) {
        Some(p) => {
            error!(
                "piece {} at {:?} exceeds usable area {:?}",
                p.unit_id,
                p.footprint(),
                usable
            );
            false
        }
        None => true,
    }
}

/// Scraps lie within the usable area and do not overlap the pieces nor each other.
pub fn scraps_are_free(plan: &CuttingPlan) -> bool {
    let usable = plan.sheet.usable_rect();
    let in_sheet = plan.scraps.iter().all(|s| usable.contains(&s.rect()));
    let clear_of_pieces = plan
        .scraps
        .iter()
        .cartesian_product(plan.pieces.iter())
        .all(|(s, p)| !s.rect().overlaps(&p.footprint()));
    let disjoint = plan
        .scraps
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !a.rect().overlaps(&b.rect()));
    if !(in_sheet && clear_of_pieces && disjoint) {
        error!(
            "invalid scraps (in sheet: {in_sheet}, clear of pieces: {clear_of_pieces}, disjoint: {disjoint})"
        );
    }
    in_sheet && clear_of_pieces && disjoint
}

/// The classes of a material breakdown add up to the total.
pub fn area_conserved(total: f64, accounted: f64) -> bool {
    let tolerance = f64::max(1.0, total * 1e-9);
    let conserved = (total - accounted).abs() <= tolerance;
    if !conserved {
        error!("material breakdown accounts for {accounted} of {total} mm²");
    }
    conserved
}
