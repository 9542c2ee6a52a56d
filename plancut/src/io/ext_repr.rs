use crate::config::OffsetPolicy;
use crate::entities::ScrapKind;
use serde::{Deserialize, Serialize};

/// External representation of a [`NestingJob`](crate::nesting::NestingJob).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtNestingJob {
    pub name: String,
    pub sheet: ExtSheet,
    pub offset_policy: OffsetPolicy,
    /// Plate density in kg/dm³, configured default if not specified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
    /// Thickness of parts which do not specify their own
    #[serde(default)]
    pub default_thickness: f64,
    pub parts: Vec<ExtPart>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtSheet {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub margin: f64,
}

/// External representation of a [`PartSpec`](crate::entities::PartSpec).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPart {
    pub name: String,
    pub shape: ExtPartShape,
    pub quantity: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub holes: Vec<ExtHole>,
    /// Four identical holes near the corners, added to `holes`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_holes: Option<ExtCornerHoles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtCornerHoles {
    pub diameter: f64,
    /// Distance from the hole centres to the nearest edges
    pub inset: f64,
}

/// Shape of a part, tagged by `type`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum ExtPartShape {
    Rectangle {
        width: f64,
        height: f64,
    },
    Circle {
        diameter: f64,
    },
    RightTriangle {
        base: f64,
        height: f64,
    },
    Trapezoid {
        large_base: f64,
        small_base: f64,
        height: f64,
    },
    /// Reference to an outline in an external drawing, with its bounding box
    TracedOutline {
        outline: String,
        width: f64,
        height: f64,
    },
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtHole {
    pub diameter: f64,
    pub x: f64,
    pub y: f64,
}

/// Report of a complete job, one entry per thickness group.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtNestingReport {
    pub job: String,
    pub groups: Vec<ExtGroupReport>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExtGroupStatus {
    Nested,
    NoValidParts,
    Infeasible,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtGroupReport {
    pub thickness: f64,
    pub offset: f64,
    pub margin: f64,
    /// Number of physical parts requested
    pub n_requested: usize,
    pub status: ExtGroupStatus,
    /// Only present if `status` is `nested`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ExtNestingResult>,
}

/// External representation of a [`NestingResult`](crate::entities::NestingResult).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtNestingResult {
    pub heuristic: String,
    pub total_sheets: usize,
    pub n_parts: usize,
    /// In percent
    pub utilization: f64,
    pub density: f64,
    /// Weight of all consumed sheets, in kg
    pub sheet_weight: f64,
    pub run_time_ms: u64,
    pub breakdown: ExtBreakdown,
    pub plans: Vec<ExtPlan>,
}

/// Areas in mm², weights in kg
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtAreaWeight {
    pub area: f64,
    pub weight: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtBreakdown {
    pub total: ExtAreaWeight,
    pub used: ExtAreaWeight,
    pub reusable_scrap: ExtAreaWeight,
    pub dimensioned_scrap: ExtAreaWeight,
    pub offset_loss: ExtAreaWeight,
    pub process_loss: ExtAreaWeight,
}

/// External representation of a [`CuttingPlan`](crate::entities::CuttingPlan).
/// Coordinates have their origin at the top-left corner of the sheet.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlan {
    pub sheet: ExtSheet,
    pub repetitions: usize,
    pub footprint_area: f64,
    pub part_area: f64,
    pub leftover_area: f64,
    pub summary: Vec<ExtPieceSummary>,
    pub pieces: Vec<ExtPlacedPiece>,
    pub scraps: Vec<ExtScrap>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPieceSummary {
    pub label: String,
    pub quantity: usize,
    pub n_parts: usize,
    pub n_holes_per_unit: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacedPiece {
    pub unit_id: usize,
    /// Shop document code of the shape
    pub code: String,
    pub label: String,
    /// Footprint, offset included
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotated: bool,
    pub offset: f64,
    /// Hole positions in sheet coordinates
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub holes: Vec<ExtHole>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtScrap {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub kind: ScrapKind,
    pub priority: f64,
}
