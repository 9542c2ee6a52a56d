use crate::entities::{PlacedPiece, ScrapRegion, Sheet};
use itertools::Itertools;
use ordered_float::OrderedFloat;

/// Count of pieces of one type within a [`CuttingPlan`].
#[derive(Clone, Debug, PartialEq)]
pub struct PieceSummary {
    /// Human-readable type signature, see [`UnitShape::label`](crate::entities::UnitShape::label)
    pub label: String,
    /// Number of placed units of this type
    pub quantity: usize,
    /// Number of physical parts (paired units count twice)
    pub n_parts: usize,
    pub n_holes_per_unit: usize,
}

/// Identifies layouts which are geometrically identical: same sheet and same pieces at the same footprints.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlanSignature {
    sheet: [OrderedFloat<f64>; 3],
    pieces: Vec<([OrderedFloat<f64>; 4], String)>,
}

impl PlanSignature {
    pub fn new(sheet: &Sheet, pieces: &[PlacedPiece]) -> Self {
        let pieces = pieces
            .iter()
            .map(|p| {
                let footprint = [p.x, p.y, p.width, p.height].map(|v| OrderedFloat(round_to_grid(v)));
                (footprint, piece_label(p))
            })
            .sorted()
            .collect_vec();
        Self {
            sheet: [sheet.width, sheet.height, sheet.margin].map(OrderedFloat),
            pieces,
        }
    }
}

/// Snaps values to a micrometre grid so rounding noise does not split identical layouts.
fn round_to_grid(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// One distinct arrangement of pieces on a sheet, repeated `repetitions` times.
#[derive(Clone, Debug)]
pub struct CuttingPlan {
    pub sheet: Sheet,
    pub pieces: Vec<PlacedPiece>,
    pub repetitions: usize,
    pub summary: Vec<PieceSummary>,
    /// Leftover regions of a single repetition
    pub scraps: Vec<ScrapRegion>,
}

impl CuttingPlan {
    pub fn new(sheet: Sheet, pieces: Vec<PlacedPiece>, scraps: Vec<ScrapRegion>) -> Self {
        let summary = summarize(&pieces);
        Self {
            sheet,
            pieces,
            repetitions: 1,
            summary,
            scraps,
        }
    }

    /// Area reserved by the pieces, offset included.
    pub fn footprint_area(&self) -> f64 {
        self.pieces.iter().map(|p| p.footprint().area()).sum()
    }

    /// Area of the finished parts.
    pub fn part_area(&self) -> f64 {
        self.pieces.iter().map(|p| p.real_area()).sum()
    }

    pub fn offset_area(&self) -> f64 {
        self.pieces.iter().map(|p| p.offset_area()).sum()
    }

    /// Sheet area not covered by any footprint.
    pub fn leftover_area(&self) -> f64 {
        self.sheet.area() - self.footprint_area()
    }

    pub fn n_parts(&self) -> usize {
        self.pieces.iter().map(|p| p.shape.n_parts()).sum()
    }
}

fn piece_label(piece: &PlacedPiece) -> String {
    match piece.holes.len() {
        0 => piece.shape.label(),
        n => format!("{} ({n} holes)", piece.shape.label()),
    }
}

fn summarize(pieces: &[PlacedPiece]) -> Vec<PieceSummary> {
    let mut summary: Vec<PieceSummary> = vec![];
    for piece in pieces {
        let label = piece_label(piece);
        match summary.iter_mut().find(|s| s.label == label) {
            Some(s) => {
                s.quantity += 1;
                s.n_parts += piece.shape.n_parts();
            }
            None => summary.push(PieceSummary {
                label,
                quantity: 1,
                n_parts: piece.shape.n_parts(),
                n_holes_per_unit: piece.holes.len(),
            }),
        }
    }
    summary
}
