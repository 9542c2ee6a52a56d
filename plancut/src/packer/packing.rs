use crate::packer::{BinState, Candidate};
use itertools::Itertools;

/// Rectangle to be packed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackRect {
    pub id: usize,
    pub width: f64,
    pub height: f64,
}

/// Dimensions of a bin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BinSize {
    pub width: f64,
    pub height: f64,
}

/// Rectangle after packing, positioned relative to the bottom-left corner of its bin.
/// `width` and `height` are swapped with respect to the input if `rotated` is set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackedRect {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotated: bool,
}

/// Contents of one opened bin.
#[derive(Clone, Debug, PartialEq)]
pub struct PackedBin {
    /// Index of the bin in the slice handed to the packer
    pub bin_index: usize,
    pub rects: Vec<PackedRect>,
}

/// Result of a packing run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Packing {
    /// Opened bins, in order of opening
    pub bins: Vec<PackedBin>,
    /// Ids of the rectangles which did not fit in any bin
    pub unplaced: Vec<usize>,
}

impl Packing {
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    pub fn n_bins_used(&self) -> usize {
        self.bins.iter().filter(|b| !b.rects.is_empty()).count()
    }

    pub fn n_placed(&self) -> usize {
        self.bins.iter().map(|b| b.rects.len()).sum()
    }
}

/// Best-bin-fit driver shared by all heuristics.
///
/// Each rectangle goes to the open bin offering the best score (lowest index on ties).
/// A new bin is only opened when none of the open bins can accommodate the rectangle.
pub(crate) fn pack_best_bin_fit<S: BinState>(
    rects: &[PackRect],
    bins: &[BinSize],
    allow_rotation: bool,
    new_bin: impl Fn(BinSize) -> S,
) -> Packing {
    let mut states: Vec<Option<S>> = bins.iter().map(|_| None).collect_vec();
    let mut contents: Vec<Vec<PackedRect>> = bins.iter().map(|_| vec![]).collect_vec();
    let mut opening_order = vec![];
    let mut unplaced = vec![];

    for rect in rects {
        let best_open = states
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|s| (i, s)))
            .filter_map(|(i, s)| s.find(rect.width, rect.height, allow_rotation).map(|c| (i, c)))
            .fold(None, |best: Option<(usize, Candidate)>, (i, c)| match best {
                Some((_, bc)) if !c.score.better_than(&bc.score) => best,
                _ => Some((i, c)),
            });

        let target = match best_open {
            Some(target) => Some(target),
            //no open bin fits, open the first closed bin that does
            None => {
                let mut opened = None;
                for i in 0..bins.len() {
                    if states[i].is_some() {
                        continue;
                    }
                    let state = new_bin(bins[i]);
                    if let Some(candidate) = state.find(rect.width, rect.height, allow_rotation) {
                        states[i] = Some(state);
                        opening_order.push(i);
                        opened = Some((i, candidate));
                        break;
                    }
                }
                opened
            }
        };

        match target {
            Some((i, c)) => {
                states[i]
                    .as_mut()
                    .expect("target bin should be open")
                    .commit(&c);
                contents[i].push(PackedRect {
                    id: rect.id,
                    x: c.x,
                    y: c.y,
                    width: c.width,
                    height: c.height,
                    rotated: c.rotated,
                });
            }
            None => unplaced.push(rect.id),
        }
    }

    let bins = opening_order
        .into_iter()
        .map(|bin_index| PackedBin {
            bin_index,
            rects: std::mem::take(&mut contents[bin_index]),
        })
        .collect_vec();

    Packing { bins, unplaced }
}
