use crate::packer::packing::pack_best_bin_fit;
use crate::packer::{
    BinSize, MaxRectsBin, MaxRectsRule, PackRect, Packing, RectPacker, SkylineBin, SkylineRule,
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Interchangeable placement heuristics behind the [`RectPacker`] contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Maximal rectangles, best short side fit
    MaxRectsBssf,
    /// Maximal rectangles, best area fit
    MaxRectsBaf,
    /// Maximal rectangles, best long side fit
    MaxRectsBlsf,
    /// Maximal rectangles, bottom-left placement
    MaxRectsBl,
    /// Skyline, bottom-left placement
    SkylineBl,
    /// Skyline, minimal wasted area below the placed rectangle
    SkylineMwf,
}

impl Heuristic {
    pub const ALL: [Heuristic; 6] = [
        Heuristic::MaxRectsBssf,
        Heuristic::MaxRectsBaf,
        Heuristic::MaxRectsBlsf,
        Heuristic::MaxRectsBl,
        Heuristic::SkylineBl,
        Heuristic::SkylineMwf,
    ];
}

impl RectPacker for Heuristic {
    fn pack(&self, rects: &[PackRect], bins: &[BinSize], allow_rotation: bool) -> Packing {
        let maxrects = |rule: MaxRectsRule| {
            pack_best_bin_fit(rects, bins, allow_rotation, |b| MaxRectsBin::new(b, rule))
        };
        let skyline = |rule: SkylineRule| {
            pack_best_bin_fit(rects, bins, allow_rotation, |b| SkylineBin::new(b, rule))
        };
        match self {
            Heuristic::MaxRectsBssf => maxrects(MaxRectsRule::BestShortSideFit),
            Heuristic::MaxRectsBaf => maxrects(MaxRectsRule::BestAreaFit),
            Heuristic::MaxRectsBlsf => maxrects(MaxRectsRule::BestLongSideFit),
            Heuristic::MaxRectsBl => maxrects(MaxRectsRule::BottomLeft),
            Heuristic::SkylineBl => skyline(SkylineRule::BottomLeft),
            Heuristic::SkylineMwf => skyline(SkylineRule::MinWaste),
        }
    }
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Heuristic::MaxRectsBssf => "MaxRects-BSSF",
            Heuristic::MaxRectsBaf => "MaxRects-BAF",
            Heuristic::MaxRectsBlsf => "MaxRects-BLSF",
            Heuristic::MaxRectsBl => "MaxRects-BL",
            Heuristic::SkylineBl => "Skyline-BL",
            Heuristic::SkylineMwf => "Skyline-MWF",
        };
        write!(f, "{name}")
    }
}
