mod heuristic;
mod maxrects;
mod packing;
mod skyline;

#[doc(inline)]
pub use heuristic::Heuristic;

#[doc(inline)]
pub use packing::{BinSize, PackRect, PackedBin, PackedRect, Packing};

pub(crate) use maxrects::{MaxRectsBin, MaxRectsRule};
pub(crate) use skyline::{SkylineBin, SkylineRule};

use crate::util::FPA;

/// Places axis-aligned rectangles into one or more bins.
///
/// Rectangles are handled in the order given. Every rectangle either ends up in exactly one bin,
/// at a position expressed relative to the bottom-left corner of that bin, or is reported unplaced.
pub trait RectPacker {
    fn pack(&self, rects: &[PackRect], bins: &[BinSize], allow_rotation: bool) -> Packing;
}

/// Free space bookkeeping of a single bin, as maintained by one placement heuristic.
pub(crate) trait BinState {
    /// Best position for a `width` x `height` rectangle, if any.
    fn find(&self, width: f64, height: f64, allow_rotation: bool) -> Option<Candidate>;

    /// Claims the space of a candidate previously returned by [`BinState::find`].
    fn commit(&mut self, candidate: &Candidate);
}

/// A feasible position for a rectangle inside a bin.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Candidate {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotated: bool,
    pub score: Score,
}

/// Lexicographic placement score, lower is better.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Score(pub f64, pub f64);

impl Score {
    pub fn better_than(&self, other: &Score) -> bool {
        match FPA(self.0) == FPA(other.0) {
            true => FPA(self.1) < FPA(other.1),
            false => FPA(self.0) < FPA(other.0),
        }
    }
}

/// Orientations to try for a rectangle.
pub(crate) fn orientations(width: f64, height: f64, allow_rotation: bool) -> Vec<(f64, f64, bool)> {
    match allow_rotation && FPA(width) != FPA(height) {
        true => vec![(width, height, false), (height, width, true)],
        false => vec![(width, height, false)],
    }
}
