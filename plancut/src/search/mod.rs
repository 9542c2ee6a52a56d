mod growth;
mod min_sheets;

#[doc(inline)]
pub use growth::search_by_bin_growth;
#[doc(inline)]
pub use min_sheets::search_min_sheets;

use crate::entities::{AllocationUnit, Sheet};
use crate::packer::{BinSize, Heuristic, PackRect, Packing};
use crate::util::FPA;
use itertools::Itertools;

/// Report of a single heuristic attempt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchProgress {
    pub heuristic: Heuristic,
    /// Number of sheets made available to the packer
    pub n_sheets: usize,
    /// Whether every unit was placed
    pub success: bool,
    /// Sequence number of the attempt within the search, starting at 1
    pub attempt: usize,
}

/// Advisory callback, invoked once per heuristic attempt.
/// With the `parallel` feature it may be called from several threads at once.
pub type ProgressCallback<'a> = dyn Fn(&SearchProgress) + Send + Sync + 'a;

/// Complete packing of all units produced by one heuristic.
#[derive(Clone, Debug)]
pub struct PackingCandidate {
    pub heuristic: Heuristic,
    pub packing: Packing,
    /// Sheets handed to the packer, [`PackedBin::bin_index`](crate::packer::PackedBin::bin_index) refers to this list
    pub sheets: Vec<Sheet>,
    /// Number of sheets holding at least one unit
    pub n_sheets: usize,
    /// Real area of the units over the total area of the used sheets, in percent
    pub utilization: f64,
}

impl PackingCandidate {
    pub fn new(heuristic: Heuristic, packing: Packing, sheets: Vec<Sheet>, units: &[AllocationUnit]) -> Self {
        debug_assert!(packing.is_complete());
        let sheet_area: f64 = packing
            .bins
            .iter()
            .filter(|b| !b.rects.is_empty())
            .map(|b| sheets[b.bin_index].area())
            .sum();
        let part_area: f64 = units.iter().map(|u| u.real_area()).sum();
        let utilization = match sheet_area > 0.0 {
            true => part_area / sheet_area * 100.0,
            false => 0.0,
        };
        Self {
            heuristic,
            n_sheets: packing.n_bins_used(),
            packing,
            sheets,
            utilization,
        }
    }

    /// Fewer sheets first, higher utilization on equal sheet count.
    pub fn better_than(&self, other: &PackingCandidate) -> bool {
        match self.n_sheets == other.n_sheets {
            true => FPA(self.utilization) > FPA(other.utilization),
            false => self.n_sheets < other.n_sheets,
        }
    }
}

/// Rectangles handed to the packer: one per unit, id equal to the unit id, offset included.
pub fn pack_rects(units: &[AllocationUnit]) -> Vec<PackRect> {
    units
        .iter()
        .map(|u| {
            let (width, height) = u.packed_dims();
            PackRect {
                id: u.id,
                width,
                height,
            }
        })
        .collect_vec()
}

/// Usable dimensions of the sheets, as seen by the packer.
pub fn bin_sizes(sheets: &[Sheet]) -> Vec<BinSize> {
    sheets
        .iter()
        .map(|s| BinSize {
            width: s.usable_width(),
            height: s.usable_height(),
        })
        .collect_vec()
}

/// Whether the rectangle fits an empty bin in at least one allowed orientation.
pub(crate) fn fits_empty_bin(rect: &PackRect, bin: &BinSize, allow_rotation: bool) -> bool {
    let fits = |w: f64, h: f64| FPA(w) <= FPA(bin.width) && FPA(h) <= FPA(bin.height);
    fits(rect.width, rect.height) || (allow_rotation && fits(rect.height, rect.width))
}

/// Smallest number of leading sheets whose combined usable area could hold all rectangles.
/// Fewer sheets can never hold them, whatever the heuristic.
pub(crate) fn area_lower_bound(rects: &[PackRect], sheets: &[Sheet]) -> usize {
    let required: f64 = rects.iter().map(|r| r.width * r.height).sum();
    let mut available = 0.0;
    for (i, sheet) in sheets.iter().enumerate() {
        available += sheet.usable_area();
        if FPA(available) >= FPA(required) {
            return i + 1;
        }
    }
    sheets.len()
}
