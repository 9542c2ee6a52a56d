use crate::entities::CuttingPlan;
use crate::packer::Heuristic;

/// Conversion factor from mm² x mm x (kg/dm³) to kg.
const MM3_TO_DM3: f64 = 1.0 / 1_000_000.0;

/// An area (mm²) and the weight (kg) of plate material it represents.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AreaWeight {
    pub area: f64,
    pub weight: f64,
}

impl AreaWeight {
    pub fn new(area: f64, thickness: f64, density: f64) -> Self {
        Self {
            area,
            weight: area * MM3_TO_DM3 * thickness * density,
        }
    }
}

/// Decomposition of the consumed sheet area into material classes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MaterialBreakdown {
    /// All consumed sheets
    pub total: AreaWeight,
    /// Finished parts
    pub used: AreaWeight,
    /// Leftover regions classified as reusable
    pub reusable_scrap: AreaWeight,
    /// Leftover regions too small to reuse, reported with their dimensions
    pub dimensioned_scrap: AreaWeight,
    /// Clearance reserved around parts for the cutting path
    pub offset_loss: AreaWeight,
    /// Everything else: margins, slivers below the minimum scrap size, bounding box corners of non-rectangular parts
    pub process_loss: AreaWeight,
}

impl MaterialBreakdown {
    pub fn from_plans(plans: &[CuttingPlan], thickness: f64, density: f64) -> Self {
        let mut total = 0.0;
        let mut used = 0.0;
        let mut reusable = 0.0;
        let mut dimensioned = 0.0;
        let mut offset = 0.0;

        for plan in plans {
            let reps = plan.repetitions as f64;
            total += plan.sheet.area() * reps;
            used += plan.part_area() * reps;
            offset += plan.offset_area() * reps;
            for scrap in &plan.scraps {
                match scrap.is_reusable() {
                    true => reusable += scrap.area() * reps,
                    false => dimensioned += scrap.area() * reps,
                }
            }
        }
        let process = f64::max(total - used - reusable - dimensioned - offset, 0.0);

        let aw = |area| AreaWeight::new(area, thickness, density);
        Self {
            total: aw(total),
            used: aw(used),
            reusable_scrap: aw(reusable),
            dimensioned_scrap: aw(dimensioned),
            offset_loss: aw(offset),
            process_loss: aw(process),
        }
    }

    /// Sum of all classes except the total, which should match the total.
    pub fn accounted_area(&self) -> f64 {
        self.used.area
            + self.reusable_scrap.area
            + self.dimensioned_scrap.area
            + self.offset_loss.area
            + self.process_loss.area
    }
}

/// Outcome of nesting a set of parts of one thickness.
#[derive(Clone, Debug)]
pub struct NestingResult {
    /// Unique cutting plans, each with its repetition count
    pub plans: Vec<CuttingPlan>,
    pub total_sheets: usize,
    /// Real part area over consumed sheet area, in percent
    pub utilization: f64,
    /// Packing heuristic that produced the layouts
    pub heuristic: Heuristic,
    pub thickness: f64,
    pub density: f64,
    pub breakdown: MaterialBreakdown,
    /// Time spent searching and assembling the result, in milliseconds
    pub run_time_ms: u64,
}

impl NestingResult {
    pub fn n_parts(&self) -> usize {
        self.plans
            .iter()
            .map(|p| p.n_parts() * p.repetitions)
            .sum()
    }

    pub fn sheet_weight(&self) -> f64 {
        self.breakdown.total.weight
    }
}
