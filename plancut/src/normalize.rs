use crate::entities::{AllocationUnit, PartShape, PartSpec, UnitShape};
use anyhow::{Result, bail, ensure};
use itertools::Itertools;
use log::warn;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Checks the part list and keeps the indices of the parts which can be placed.
///
/// Parts with non-positive dimensions or a zero quantity are excluded with a warning.
/// A traced outline without a reference cannot be resolved by any downstream consumer and is a hard error.
pub fn eligible_parts(parts: &[PartSpec]) -> Result<Vec<usize>> {
    let mut eligible = vec![];
    for (i, part) in parts.iter().enumerate() {
        if matches!(&part.shape, PartShape::TracedOutline { outline, .. } if outline.trim().is_empty())
        {
            bail!("part '{}' references an empty traced outline", part.name);
        }
        match part.is_eligible() {
            true => eligible.push(i),
            false => warn!(
                "[NEST] excluding part '{}' ({}, qty {}): {:?}",
                part.name,
                part.shape.kind(),
                part.quantity,
                part.shape.linear_dims()
            ),
        }
    }
    Ok(eligible)
}

/// Expands every eligible part into `quantity` single allocation units, inflated by `offset`.
/// Unit ids follow the order of expansion.
pub fn expand_units(parts: &[PartSpec], offset: f64) -> Result<Vec<AllocationUnit>> {
    ensure!(
        offset.is_finite() && offset >= 0.0,
        "offset must be a non-negative number, got {offset}"
    );
    let units = eligible_parts(parts)?
        .into_iter()
        .flat_map(|i| {
            let part = &parts[i];
            let shape = UnitShape::single(&part.shape);
            (0..part.quantity).map(move |_| (i, shape.clone(), part.holes.clone()))
        })
        .enumerate()
        .map(|(id, (src, shape, holes))| AllocationUnit::new(id, shape, vec![src], holes, offset))
        .collect_vec();
    Ok(units)
}

/// Sorts units by descending packed area (largest first) and renumbers their ids to match their position.
/// The sort is stable, units of equal area keep their relative order.
pub fn sort_units(mut units: Vec<AllocationUnit>) -> Vec<AllocationUnit> {
    units.sort_by_key(|u| Reverse(OrderedFloat(u.packed_area())));
    units.iter_mut().enumerate().for_each(|(i, u)| u.id = i);
    units
}
