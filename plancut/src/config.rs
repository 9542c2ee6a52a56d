use crate::packer::Heuristic;
use crate::util::FPA;
use serde::{Deserialize, Serialize};

/// Configuration of the nesting engine
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NestingConfig {
    /// Configuration of the heuristic search
    pub search: SearchConfig,
    /// Configuration of the scrap extraction
    pub scrap: ScrapConfig,
    /// Plate density in kg/dm³ (7.85 for steel)
    pub density: f64,
    /// Number of identical sheets in the bin pool of a single run
    pub max_sheets: usize,
    /// Thickness dependent offset and margin, used by jobs with a [`OffsetPolicy::ThicknessTable`] policy
    pub offset_table: ThicknessTable,
}

impl Default for NestingConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            scrap: ScrapConfig::default(),
            density: 7.85,
            max_sheets: 200,
            offset_table: ThicknessTable::default(),
        }
    }
}

/// Selection of packing heuristics, narrowed as the number of units grows to bound latency.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Below this number of units, every heuristic of `full_set` is tried
    pub full_set_limit: usize,
    /// Below this number of units (and above `full_set_limit`), the `reduced_set` is tried
    pub reduced_set_limit: usize,
    pub full_set: Vec<Heuristic>,
    pub reduced_set: Vec<Heuristic>,
    /// Only heuristic tried for very large unit counts
    pub fast_heuristic: Heuristic,
    /// Allow the packer to turn units by 90°
    pub allow_rotation: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            full_set_limit: 200,
            reduced_set_limit: 500,
            full_set: Heuristic::ALL.to_vec(),
            reduced_set: vec![
                Heuristic::MaxRectsBssf,
                Heuristic::MaxRectsBaf,
                Heuristic::SkylineBl,
            ],
            fast_heuristic: Heuristic::SkylineBl,
            allow_rotation: true,
        }
    }
}

impl SearchConfig {
    /// Heuristics to try for a run with `n_units` units.
    pub fn heuristics_for(&self, n_units: usize) -> Vec<Heuristic> {
        if n_units < self.full_set_limit && !self.full_set.is_empty() {
            self.full_set.clone()
        } else if n_units < self.reduced_set_limit && !self.reduced_set.is_empty() {
            self.reduced_set.clone()
        } else {
            vec![self.fast_heuristic]
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ScrapConfig {
    /// Leftover regions with a side below this value are discarded as noise
    pub min_dimension: f64,
    /// Leftover regions with both sides at least this long are reusable
    pub reusable_dimension: f64,
}

impl Default for ScrapConfig {
    fn default() -> Self {
        Self {
            min_dimension: 50.0,
            reusable_dimension: 300.0,
        }
    }
}

/// Cutting clearance added to the parts and margin kept free along the sheet edges.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Clearance {
    pub offset: f64,
    pub margin: f64,
}

/// Clearance for plates up to (and including) `max_thickness` mm.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ThicknessBand {
    pub max_thickness: f64,
    #[serde(flatten)]
    pub clearance: Clearance,
}

/// Maps plate thickness to the offset and margin used when nesting it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThicknessTable {
    /// Bands in ascending order of `max_thickness`
    pub bands: Vec<ThicknessBand>,
    /// Used for plates thicker than the last band
    pub fallback: Clearance,
}

impl ThicknessTable {
    pub fn lookup(&self, thickness: f64) -> Clearance {
        self.bands
            .iter()
            .find(|b| FPA(thickness) <= FPA(b.max_thickness))
            .map(|b| b.clearance)
            .unwrap_or(self.fallback)
    }
}

impl Default for ThicknessTable {
    fn default() -> Self {
        let band = |max_thickness, offset, margin| ThicknessBand {
            max_thickness,
            clearance: Clearance { offset, margin },
        };
        Self {
            bands: vec![
                band(6.35, 8.0, 10.0),
                band(15.88, 10.0, 10.0),
                band(20.0, 12.0, 15.0),
                band(22.22, 14.0, 15.0),
                band(25.4, 16.0, 20.0),
                band(38.0, 20.0, 25.0),
            ],
            fallback: Clearance {
                offset: 25.0,
                margin: 30.0,
            },
        }
    }
}

/// How a job determines the clearance of each thickness group.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OffsetPolicy {
    /// Same offset for every thickness, margin taken from the sheet
    Fixed { offset: f64 },
    /// Offset and margin looked up in [`NestingConfig::offset_table`]
    ThicknessTable,
}
