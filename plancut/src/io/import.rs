use crate::entities::{Hole, PartShape, PartSpec, Sheet};
use crate::io::ext_repr::{ExtHole, ExtNestingJob, ExtPart, ExtPartShape};
use crate::nesting::NestingJob;
use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use log::warn;

/// Converts an external job into a [`NestingJob`].
/// Rows with a zero quantity are dropped. Dimensions are checked later, when the job is nested,
/// so corner holes are only added to parts with valid dimensions.
pub fn import_job(ext_job: &ExtNestingJob) -> Result<NestingJob> {
    let sheet = Sheet::try_new(
        ext_job.sheet.width,
        ext_job.sheet.height,
        ext_job.sheet.margin,
    )
    .with_context(|| format!("invalid sheet in job '{}'", ext_job.name))?;

    let parts = ext_job
        .parts
        .iter()
        .filter(|p| match p.quantity {
            0 => {
                warn!("[NEST] dropping part '{}': zero quantity", p.name);
                false
            }
            _ => true,
        })
        .map(import_part)
        .collect::<Result<Vec<_>>>()?;

    Ok(NestingJob {
        name: ext_job.name.clone(),
        sheet,
        offset_policy: ext_job.offset_policy,
        density: ext_job.density,
        default_thickness: ext_job.default_thickness,
        parts,
    })
}

pub fn import_part(ext_part: &ExtPart) -> Result<PartSpec> {
    if let Some(t) = ext_part.thickness {
        ensure!(
            t.is_finite() && t >= 0.0,
            "part '{}' has an invalid thickness: {t}",
            ext_part.name
        );
    }
    let shape = match &ext_part.shape {
        ExtPartShape::Rectangle { width, height } => PartShape::Rectangle {
            width: *width,
            height: *height,
        },
        ExtPartShape::Circle { diameter } => PartShape::Circle {
            diameter: *diameter,
        },
        ExtPartShape::RightTriangle { base, height } => PartShape::RightTriangle {
            base: *base,
            height: *height,
        },
        ExtPartShape::Trapezoid {
            large_base,
            small_base,
            height,
        } => PartShape::Trapezoid {
            large_base: *large_base,
            small_base: *small_base,
            height: *height,
        },
        ExtPartShape::TracedOutline {
            outline,
            width,
            height,
        } => PartShape::TracedOutline {
            outline: outline.clone(),
            width: *width,
            height: *height,
        },
    };
    let holes = ext_part.holes.iter().map(import_hole).collect_vec();

    let part = PartSpec {
        name: ext_part.name.clone(),
        shape,
        quantity: ext_part.quantity,
        holes,
        thickness: ext_part.thickness,
    };
    match ext_part.corner_holes {
        Some(ch) if part.shape.is_valid() => part.with_corner_holes(ch.diameter, ch.inset),
        _ => Ok(part),
    }
}

fn import_hole(ext_hole: &ExtHole) -> Hole {
    Hole {
        diameter: ext_hole.diameter,
        x: ext_hole.x,
        y: ext_hole.y,
    }
}
