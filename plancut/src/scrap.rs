use crate::config::ScrapConfig;
use crate::entities::{ScrapKind, ScrapRegion};
use crate::geometry::Rect;
use crate::util::FPA;
use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;
use slotmap::{SlotMap, new_key_type};
use std::cmp::Reverse;
use std::collections::VecDeque;

new_key_type! {
    /// Key of a leftover region in the merge arena
    struct RegionKey;
}

/// Bonus for regions large enough to be reused
const REUSABLE_BONUS: f64 = 50.0;
/// Bonus for strips running along the full width or height of the nesting area
const EDGE_STRIP_BONUS: f64 = 20.0;

/// Computes the leftover regions of one sheet.
///
/// `pieces` are the footprints of the placed pieces in the packer's frame: relative to the nesting area
/// of `width` x `height`, origin at the bottom-left corner.
/// The returned regions are relative to the top-left corner of the nesting area, sorted by descending priority.
pub fn find_scraps(
    width: f64,
    height: f64,
    pieces: &[Rect],
    config: &ScrapConfig,
) -> Vec<ScrapRegion> {
    if pieces.is_empty() {
        let whole = Rect::from_xywh(0.0, 0.0, width, height);
        return vec![classify(whole, width, height, config)];
    }

    let raw = sweep(width, height, pieces);
    let merged = merge_regions(raw);
    let n_merged = merged.len();

    let scraps = merged
        .into_iter()
        .filter(|r| {
            FPA(r.width()) >= FPA(config.min_dimension) && FPA(r.height()) >= FPA(config.min_dimension)
        })
        .map(|r| classify(r.flip_y(height), width, height, config))
        .sorted_by_key(|s| (Reverse(OrderedFloat(s.priority)), OrderedFloat(s.y), OrderedFloat(s.x)))
        .collect_vec();

    debug!(
        "[SCRAP] {} pieces leave {} regions, {} above {}",
        pieces.len(),
        n_merged,
        scraps.len(),
        config.min_dimension
    );
    scraps
}

/// Horizontal scanline sweep.
/// Between consecutive piece edges the occupancy is constant, every uncovered span of such a strip is a raw region.
fn sweep(width: f64, height: f64, pieces: &[Rect]) -> Vec<Rect> {
    let ys = pieces
        .iter()
        .flat_map(|p| [p.y_min, p.y_max])
        .chain([0.0, height])
        .map(|y| y.clamp(0.0, height))
        .sorted_by_key(|y| OrderedFloat(*y))
        .dedup_by(|a, b| FPA(*a) == FPA(*b))
        .collect_vec();

    let mut regions = vec![];
    for (&y0, &y1) in ys.iter().tuple_windows() {
        if FPA(y1 - y0) <= FPA(0.0) {
            continue;
        }
        let mid = (y0 + y1) / 2.0;
        let covering = pieces
            .iter()
            .filter(|p| p.y_min < mid && mid < p.y_max)
            .sorted_by_key(|p| OrderedFloat(p.x_min))
            .collect_vec();

        let mut covered_to = 0.0;
        for p in covering {
            if FPA(p.x_min - covered_to) > FPA(0.0) {
                regions.push(Rect::from_xywh(covered_to, y0, p.x_min - covered_to, y1 - y0));
            }
            covered_to = f64::max(covered_to, p.x_max);
        }
        if FPA(width - covered_to) > FPA(0.0) {
            regions.push(Rect::from_xywh(covered_to, y0, width - covered_to, y1 - y0));
        }
    }
    regions
}

/// Merges edge-adjacent regions until no pair can be merged anymore.
///
/// Two regions merge vertically when they share the same horizontal extent and touch in y,
/// and horizontally when they share the same vertical extent and touch in x.
/// Only a region that just grew can have a new partner, so each one is queued again after a merge
/// and compared against the others. Every merge removes one region, so the loop terminates.
/// Applying this function to its own output returns it unchanged.
pub fn merge_regions(regions: Vec<Rect>) -> Vec<Rect> {
    let mut arena: SlotMap<RegionKey, Rect> = SlotMap::with_key();
    let mut pending: VecDeque<RegionKey> = regions.into_iter().map(|r| arena.insert(r)).collect();

    while let Some(k) = pending.pop_front() {
        //removed by an earlier merge
        let Some(&region) = arena.get(k) else {
            continue;
        };
        let partner = arena
            .iter()
            .filter(|(j, _)| *j != k)
            .find_map(|(j, other)| try_merge(&region, other).map(|m| (j, m)));

        if let Some((j, merged)) = partner {
            arena.remove(j);
            arena[k] = merged;
            pending.push_front(k);
        }
    }
    arena.into_iter().map(|(_, r)| r).collect_vec()
}

fn try_merge(a: &Rect, b: &Rect) -> Option<Rect> {
    let same_columns = FPA(a.x_min) == FPA(b.x_min) && FPA(a.x_max) == FPA(b.x_max);
    let touch_y = FPA(a.y_max) == FPA(b.y_min) || FPA(b.y_max) == FPA(a.y_min);
    let same_rows = FPA(a.y_min) == FPA(b.y_min) && FPA(a.y_max) == FPA(b.y_max);
    let touch_x = FPA(a.x_max) == FPA(b.x_min) || FPA(b.x_max) == FPA(a.x_min);

    match (same_columns && touch_y) || (same_rows && touch_x) {
        true => Some(Rect::bounding_rect(*a, *b)),
        false => None,
    }
}

fn classify(r: Rect, width: f64, height: f64, config: &ScrapConfig) -> ScrapRegion {
    let reusable = FPA(f64::min(r.width(), r.height())) >= FPA(config.reusable_dimension);
    let kind = match reusable {
        true => ScrapKind::Reusable,
        false => ScrapKind::Scrap,
    };

    let mut priority = 100.0 * r.area() / (width * height);
    if reusable {
        priority += REUSABLE_BONUS;
    }
    if FPA(r.width()) == FPA(width) || FPA(r.height()) == FPA(height) {
        priority += EDGE_STRIP_BONUS;
    }

    ScrapRegion {
        x: r.x_min,
        y: r.y_min,
        width: r.width(),
        height: r.height(),
        kind,
        priority,
    }
}
