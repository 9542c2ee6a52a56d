use crate::config::{Clearance, NestingConfig, OffsetPolicy};
use crate::entities::{PartSpec, Sheet};
use crate::nesting::{NestingOutcome, nest};
use crate::search::ProgressCallback;
use anyhow::{Result, ensure};
use itertools::Itertools;
use log::info;
use ordered_float::OrderedFloat;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A complete nesting request: parts of possibly different thicknesses cut from one sheet format.
#[derive(Clone, Debug)]
pub struct NestingJob {
    pub name: String,
    pub sheet: Sheet,
    pub offset_policy: OffsetPolicy,
    /// Overrides [`NestingConfig::density`] when set
    pub density: Option<f64>,
    /// Thickness of parts which do not specify their own
    pub default_thickness: f64,
    pub parts: Vec<PartSpec>,
}

/// Outcome of one thickness group of a [`NestingJob`].
#[derive(Clone, Debug)]
pub struct ThicknessGroupOutcome {
    pub thickness: f64,
    pub clearance: Clearance,
    /// Number of physical parts requested in this group
    pub n_requested: usize,
    pub outcome: NestingOutcome,
}

impl NestingJob {
    /// Parts grouped by thickness, in ascending order of thickness.
    pub fn thickness_groups(&self) -> Vec<(f64, Vec<PartSpec>)> {
        self.parts
            .iter()
            .map(|p| (p.thickness.unwrap_or(self.default_thickness), p.clone()))
            .into_group_map_by(|(t, _)| OrderedFloat(*t))
            .into_iter()
            .sorted_by_key(|(t, _)| *t)
            .map(|(t, parts)| (t.0, parts.into_iter().map(|(_, p)| p).collect_vec()))
            .collect_vec()
    }

    /// Offset and margin to use for a group of the given thickness.
    pub fn clearance(&self, thickness: f64, config: &NestingConfig) -> Clearance {
        match self.offset_policy {
            OffsetPolicy::Fixed { offset } => Clearance {
                offset,
                margin: self.sheet.margin,
            },
            OffsetPolicy::ThicknessTable => config.offset_table.lookup(thickness),
        }
    }
}

/// Nests every thickness group of the job independently.
/// With the `parallel` feature the groups are processed concurrently.
pub fn nest_job(
    job: &NestingJob,
    config: &NestingConfig,
    progress: Option<&ProgressCallback<'_>>,
) -> Result<Vec<ThicknessGroupOutcome>> {
    let density = job.density.unwrap_or(config.density);
    ensure!(
        density.is_finite() && density > 0.0,
        "density must be positive, got {density}"
    );
    ensure!(
        job.default_thickness.is_finite() && job.default_thickness >= 0.0,
        "default thickness must not be negative, got {}",
        job.default_thickness
    );

    let groups = job.thickness_groups();
    info!(
        "[NEST] job '{}': {} part type(s) in {} thickness group(s)",
        job.name,
        job.parts.len(),
        groups.len()
    );

    let nest_group = |(thickness, parts): &(f64, Vec<PartSpec>)| -> Result<ThicknessGroupOutcome> {
        let clearance = job.clearance(*thickness, config);
        let sheet = job.sheet.with_margin(clearance.margin);
        let outcome = nest(
            &sheet,
            clearance.offset,
            parts,
            *thickness,
            density,
            config,
            progress,
        )?;
        Ok(ThicknessGroupOutcome {
            thickness: *thickness,
            clearance,
            n_requested: parts.iter().map(|p| p.quantity).sum(),
            outcome,
        })
    };

    #[cfg(feature = "parallel")]
    let group_iter = groups.par_iter();
    #[cfg(not(feature = "parallel"))]
    let group_iter = groups.iter();

    group_iter.map(nest_group).collect()
}
