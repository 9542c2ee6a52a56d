mod job;
mod report;

#[doc(inline)]
pub use job::{NestingJob, ThicknessGroupOutcome, nest_job};
#[doc(inline)]
pub use report::build_result;

use crate::config::NestingConfig;
use crate::entities::{AllocationUnit, NestingResult, PartSpec, Sheet};
use crate::normalize::{expand_units, sort_units};
use crate::pairing::fuse_pairs;
use crate::search::{ProgressCallback, search_by_bin_growth, search_min_sheets};
use anyhow::{Result, ensure};
use log::{info, warn};
use std::time::Instant;

/// Outcome of nesting the parts of one thickness.
#[derive(Clone, Debug)]
pub enum NestingOutcome {
    /// None of the parts can be placed, no search was run
    NoValidParts,
    /// Parts are present, but no heuristic places all of them within the available sheets
    Infeasible,
    Nested(NestingResult),
}

impl NestingOutcome {
    pub fn result(&self) -> Option<&NestingResult> {
        match self {
            NestingOutcome::Nested(r) => Some(r),
            _ => None,
        }
    }
}

/// Simple variant: single sheet size without margin, no offset and no pairing.
/// The number of sheets grows per heuristic until all parts are placed, the first heuristic reaching the fewest sheets wins.
///
/// Returns `Ok(None)` if there is nothing to place or a part does not fit on an empty sheet.
pub fn compute_cutting_plan(
    sheet_width: f64,
    sheet_height: f64,
    parts: &[PartSpec],
    config: &NestingConfig,
) -> Result<Option<NestingResult>> {
    let start = Instant::now();
    let sheet = Sheet::try_new(sheet_width, sheet_height, 0.0)?;
    let units = sort_units(expand_units(parts, 0.0)?);
    if units.is_empty() {
        warn!("[NEST] no valid parts to place");
        return Ok(None);
    }
    let thickness = parts.iter().find_map(|p| p.thickness).unwrap_or(0.0);

    let result = search_by_bin_growth(&units, &sheet, &config.search, None).map(|candidate| {
        build_result(
            candidate,
            &units,
            thickness,
            config.density,
            &config.scrap,
            start,
        )
    });
    Ok(result)
}

/// Minimum-sheet variant over an explicit pool of sheets, each with its own margin.
/// Parts are inflated by `offset` and congruent triangles and trapezoids are paired.
///
/// Returns `Ok(None)` if there is nothing to place or no heuristic places every part within `bins`.
pub fn compute_cutting_plan_in_bins(
    parts: &[PartSpec],
    offset: f64,
    thickness: f64,
    bins: &[Sheet],
    density: f64,
    config: &NestingConfig,
    progress: Option<&ProgressCallback<'_>>,
) -> Result<Option<NestingResult>> {
    let outcome = nest_in_pool(parts, offset, thickness, bins, density, config, progress)?;
    match outcome {
        NestingOutcome::Nested(result) => Ok(Some(result)),
        NestingOutcome::NoValidParts | NestingOutcome::Infeasible => Ok(None),
    }
}

/// Nests parts of one thickness on a pool of [`NestingConfig::max_sheets`] copies of `sheet`.
/// Distinguishes the absence of valid parts from an infeasible layout.
pub fn nest(
    sheet: &Sheet,
    offset: f64,
    parts: &[PartSpec],
    thickness: f64,
    density: f64,
    config: &NestingConfig,
    progress: Option<&ProgressCallback<'_>>,
) -> Result<NestingOutcome> {
    let pool = sheet.pool(config.max_sheets);
    nest_in_pool(parts, offset, thickness, &pool, density, config, progress)
}

fn nest_in_pool(
    parts: &[PartSpec],
    offset: f64,
    thickness: f64,
    pool: &[Sheet],
    density: f64,
    config: &NestingConfig,
    progress: Option<&ProgressCallback<'_>>,
) -> Result<NestingOutcome> {
    let start = Instant::now();
    ensure!(!pool.is_empty(), "at least one sheet is required");
    for sheet in pool {
        sheet.validate()?;
    }
    ensure!(
        density.is_finite() && density > 0.0,
        "density must be positive, got {density}"
    );

    let units = prepare_units(parts, offset)?;
    if units.is_empty() {
        warn!("[NEST] no valid parts to place");
        return Ok(NestingOutcome::NoValidParts);
    }
    info!(
        "[NEST] nesting {} unit(s) of thickness {thickness} on up to {} sheet(s)",
        units.len(),
        pool.len()
    );

    match search_min_sheets(&units, pool, &config.search, progress) {
        Some(candidate) => Ok(NestingOutcome::Nested(build_result(
            candidate,
            &units,
            thickness,
            density,
            &config.scrap,
            start,
        ))),
        None => Ok(NestingOutcome::Infeasible),
    }
}

/// Normalized, paired and sorted allocation units, ids matching their position.
pub fn prepare_units(parts: &[PartSpec], offset: f64) -> Result<Vec<AllocationUnit>> {
    let singles = expand_units(parts, offset)?;
    Ok(sort_units(fuse_pairs(singles)))
}
