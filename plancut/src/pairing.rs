use crate::entities::{AllocationUnit, Hole, UnitShape};
use crate::util::FPA;
use itertools::Itertools;
use log::debug;

/// Fuses congruent right triangles and trapezoids two by two into rectangular paired units.
///
/// Triangles are grouped by (base, height) and trapezoids by (large base, small base, height),
/// units of a group must also share the same holes.
/// A group of `n` units yields `n / 2` paired units and `n % 2` single units.
/// All other shapes pass through unchanged. Ids of the returned units are not renumbered.
pub fn fuse_pairs(units: Vec<AllocationUnit>) -> Vec<AllocationUnit> {
    let n_input = units.len();
    let mut groups: Vec<Vec<AllocationUnit>> = vec![];
    let mut output = vec![];

    for unit in units {
        match unit.shape {
            UnitShape::RightTriangle { .. } | UnitShape::Trapezoid { .. } => {
                match groups.iter_mut().find(|g| congruent(&g[0], &unit)) {
                    Some(group) => group.push(unit),
                    None => groups.push(vec![unit]),
                }
            }
            _ => output.push(unit),
        }
    }

    for group in groups {
        let mut members = group.into_iter();
        while let Some(first) = members.next() {
            match members.next() {
                Some(second) => output.push(fuse(first, second)),
                None => output.push(first),
            }
        }
    }

    debug!("[NEST] pairing reduced {} units to {}", n_input, output.len());
    output
}

fn congruent(a: &AllocationUnit, b: &AllocationUnit) -> bool {
    let same_shape = match (&a.shape, &b.shape) {
        (
            UnitShape::RightTriangle { base: b1, height: h1 },
            UnitShape::RightTriangle { base: b2, height: h2 },
        ) => FPA(*b1) == FPA(*b2) && FPA(*h1) == FPA(*h2),
        (
            UnitShape::Trapezoid {
                large_base: l1,
                small_base: s1,
                height: h1,
            },
            UnitShape::Trapezoid {
                large_base: l2,
                small_base: s2,
                height: h2,
            },
        ) => FPA(*l1) == FPA(*l2) && FPA(*s1) == FPA(*s2) && FPA(*h1) == FPA(*h2),
        _ => false,
    };
    same_shape
        && FPA(a.offset) == FPA(b.offset)
        && a.holes.len() == b.holes.len()
        && a.holes.iter().zip(b.holes.iter()).all(|(h1, h2)| same_hole(h1, h2))
}

fn same_hole(a: &Hole, b: &Hole) -> bool {
    FPA(a.diameter) == FPA(b.diameter) && FPA(a.x) == FPA(b.x) && FPA(a.y) == FPA(b.y)
}

/// Combines two congruent units. The second one is turned 180° so both tile the paired bounding box.
fn fuse(first: AllocationUnit, second: AllocationUnit) -> AllocationUnit {
    let shape = match first.shape {
        UnitShape::RightTriangle { base, height } => UnitShape::PairedTriangle { base, height },
        UnitShape::Trapezoid {
            large_base,
            small_base,
            height,
        } => UnitShape::PairedTrapezoid {
            large_base,
            small_base,
            height,
        },
        _ => unreachable!("only triangles and trapezoids are paired"),
    };
    let (frame_w, frame_h) = shape.real_dims();
    let holes = first
        .holes
        .iter()
        .copied()
        .chain(second.holes.iter().map(|h| h.rotated_180(frame_w, frame_h)))
        .collect_vec();
    let sources = first.sources.into_iter().chain(second.sources).collect_vec();

    AllocationUnit::new(first.id, shape, sources, holes, first.offset)
}
