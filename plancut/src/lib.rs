#![doc = document_features::document_features!()]
//! Bounding-box nesting of sheet metal parts: how many sheets a batch of parts needs,
//! where each part goes and which leftover material remains reusable.

/// Configuration of the search, the scrap extraction and the thickness dependent clearances
pub mod config;

/// Entities to model parts, sheets, placements, cutting plans and results
pub mod entities;

/// Axis-aligned geometric primitives
pub mod geometry;

/// Importing jobs into and exporting reports out of this library
pub mod io;

/// Top-level entry points: from part lists to complete nesting results
pub mod nesting;

/// Conversion of part specifications into allocation units
pub mod normalize;

/// Rectangle bin packing heuristics
pub mod packer;

/// Fusion of congruent triangles and trapezoids into rectangular units
pub mod pairing;

/// Leftover region extraction and classification
pub mod scrap;

/// Heuristic and sheet count search around the packer
pub mod search;

/// Helper functions which do not belong to any specific module
pub mod util;
