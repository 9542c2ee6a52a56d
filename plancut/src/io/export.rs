use crate::entities::{
    AreaWeight, CuttingPlan, Hole, MaterialBreakdown, NestingResult, PlacedPiece, ScrapRegion,
};
use crate::io::ext_repr::{
    ExtAreaWeight, ExtBreakdown, ExtGroupReport, ExtGroupStatus, ExtHole, ExtNestingReport,
    ExtNestingResult, ExtPieceSummary, ExtPlacedPiece, ExtPlan, ExtScrap, ExtSheet,
};
use crate::nesting::{NestingOutcome, ThicknessGroupOutcome};
use itertools::Itertools;

pub fn export_report(job_name: &str, groups: &[ThicknessGroupOutcome]) -> ExtNestingReport {
    ExtNestingReport {
        job: job_name.to_string(),
        groups: groups.iter().map(export_group).collect_vec(),
    }
}

pub fn export_group(group: &ThicknessGroupOutcome) -> ExtGroupReport {
    let (status, result) = match &group.outcome {
        NestingOutcome::NoValidParts => (ExtGroupStatus::NoValidParts, None),
        NestingOutcome::Infeasible => (ExtGroupStatus::Infeasible, None),
        NestingOutcome::Nested(r) => (ExtGroupStatus::Nested, Some(export_result(r))),
    };
    ExtGroupReport {
        thickness: group.thickness,
        offset: group.clearance.offset,
        margin: group.clearance.margin,
        n_requested: group.n_requested,
        status,
        result,
    }
}

pub fn export_result(result: &NestingResult) -> ExtNestingResult {
    ExtNestingResult {
        heuristic: result.heuristic.to_string(),
        total_sheets: result.total_sheets,
        n_parts: result.n_parts(),
        utilization: result.utilization,
        density: result.density,
        sheet_weight: result.sheet_weight(),
        run_time_ms: result.run_time_ms,
        breakdown: export_breakdown(&result.breakdown),
        plans: result.plans.iter().map(export_plan).collect_vec(),
    }
}

pub fn export_plan(plan: &CuttingPlan) -> ExtPlan {
    ExtPlan {
        sheet: ExtSheet {
            width: plan.sheet.width,
            height: plan.sheet.height,
            margin: plan.sheet.margin,
        },
        repetitions: plan.repetitions,
        footprint_area: plan.footprint_area(),
        part_area: plan.part_area(),
        leftover_area: plan.leftover_area(),
        summary: plan
            .summary
            .iter()
            .map(|s| ExtPieceSummary {
                label: s.label.clone(),
                quantity: s.quantity,
                n_parts: s.n_parts,
                n_holes_per_unit: s.n_holes_per_unit,
            })
            .collect_vec(),
        pieces: plan.pieces.iter().map(export_piece).collect_vec(),
        scraps: plan.scraps.iter().map(export_scrap).collect_vec(),
    }
}

fn export_piece(piece: &PlacedPiece) -> ExtPlacedPiece {
    ExtPlacedPiece {
        unit_id: piece.unit_id,
        code: piece.shape.code().to_string(),
        label: piece.shape.label(),
        x: piece.x,
        y: piece.y,
        width: piece.width,
        height: piece.height,
        rotated: piece.rotated,
        offset: piece.offset,
        holes: piece.sheet_holes().iter().map(export_hole).collect_vec(),
    }
}

fn export_hole(hole: &Hole) -> ExtHole {
    ExtHole {
        diameter: hole.diameter,
        x: hole.x,
        y: hole.y,
    }
}

fn export_scrap(scrap: &ScrapRegion) -> ExtScrap {
    ExtScrap {
        x: scrap.x,
        y: scrap.y,
        width: scrap.width,
        height: scrap.height,
        kind: scrap.kind,
        priority: scrap.priority,
    }
}

fn export_breakdown(b: &MaterialBreakdown) -> ExtBreakdown {
    let aw = |a: &AreaWeight| ExtAreaWeight {
        area: a.area,
        weight: a.weight,
    };
    ExtBreakdown {
        total: aw(&b.total),
        used: aw(&b.used),
        reusable_scrap: aw(&b.reusable_scrap),
        dimensioned_scrap: aw(&b.dimensioned_scrap),
        offset_loss: aw(&b.offset_loss),
        process_loss: aw(&b.process_loss),
    }
}
