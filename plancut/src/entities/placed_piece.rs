use crate::entities::{AllocationUnit, Hole, UnitShape};
use crate::geometry::Rect;

/// An [`AllocationUnit`] after packing.
/// Coordinates are in sheet space (margin included) with the origin at the top-left corner of the sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedPiece {
    pub unit_id: usize,
    /// Index of the sheet within the bin pool
    pub sheet_index: usize,
    pub x: f64,
    pub y: f64,
    /// Realized footprint width, after rotation
    pub width: f64,
    /// Realized footprint height, after rotation
    pub height: f64,
    pub rotated: bool,
    pub shape: UnitShape,
    pub offset: f64,
    /// Holes relative to the top-left corner of the real part, with rotation applied
    pub holes: Vec<Hole>,
}

impl PlacedPiece {
    pub fn new(
        unit: &AllocationUnit,
        sheet_index: usize,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rotated: bool,
    ) -> Self {
        let (real_w, _) = unit.shape.real_dims();
        let holes = match rotated {
            true => unit.holes.iter().map(|h| h.rotated_90(real_w)).collect(),
            false => unit.holes.clone(),
        };
        Self {
            unit_id: unit.id,
            sheet_index,
            x,
            y,
            width,
            height,
            rotated,
            shape: unit.shape.clone(),
            offset: unit.offset,
            holes,
        }
    }

    /// Area reserved on the sheet, offset included.
    pub fn footprint(&self) -> Rect {
        Rect::from_xywh(self.x, self.y, self.width, self.height)
    }

    /// Real bounding box of the part, centred inside its footprint.
    pub fn part_rect(&self) -> Rect {
        let half = self.offset / 2.0;
        Rect::from_xywh(
            self.x + half,
            self.y + half,
            self.width - self.offset,
            self.height - self.offset,
        )
    }

    /// Holes in sheet coordinates.
    pub fn sheet_holes(&self) -> Vec<Hole> {
        let origin = self.part_rect();
        self.holes
            .iter()
            .map(|h| h.translate(origin.x_min, origin.y_min))
            .collect()
    }

    pub fn real_area(&self) -> f64 {
        self.shape.real_area()
    }

    /// Material consumed by the cutting clearance around the part.
    pub fn offset_area(&self) -> f64 {
        self.footprint().area() - self.part_rect().area()
    }
}
