use crate::entities::{Hole, PartShape};
use std::sync::Arc;

/// Shape of an [`AllocationUnit`].
/// Besides the single part shapes, two congruent right triangles or trapezoids can be fused into one paired unit.
#[derive(Clone, Debug, PartialEq)]
pub enum UnitShape {
    Rectangle {
        width: f64,
        height: f64,
    },
    Circle {
        diameter: f64,
    },
    RightTriangle {
        base: f64,
        height: f64,
    },
    Trapezoid {
        large_base: f64,
        small_base: f64,
        height: f64,
    },
    /// Two right triangles occupying opposite corners of a `base` x `height` rectangle
    PairedTriangle {
        base: f64,
        height: f64,
    },
    /// Two trapezoids interlocked base-to-base, filling a (`large_base` + `small_base`) x `height` rectangle
    PairedTrapezoid {
        large_base: f64,
        small_base: f64,
        height: f64,
    },
    TracedOutline {
        outline: Arc<str>,
        width: f64,
        height: f64,
    },
}

impl UnitShape {
    pub fn single(shape: &PartShape) -> Self {
        match shape {
            PartShape::Rectangle { width, height } => UnitShape::Rectangle {
                width: *width,
                height: *height,
            },
            PartShape::Circle { diameter } => UnitShape::Circle {
                diameter: *diameter,
            },
            PartShape::RightTriangle { base, height } => UnitShape::RightTriangle {
                base: *base,
                height: *height,
            },
            PartShape::Trapezoid {
                large_base,
                small_base,
                height,
            } => UnitShape::Trapezoid {
                large_base: *large_base,
                small_base: *small_base,
                height: *height,
            },
            PartShape::TracedOutline {
                outline,
                width,
                height,
            } => UnitShape::TracedOutline {
                outline: Arc::from(outline.trim()),
                width: *width,
                height: *height,
            },
        }
    }

    /// Width and height of the bounding box, without any offset.
    pub fn real_dims(&self) -> (f64, f64) {
        match self {
            UnitShape::Rectangle { width, height } => (*width, *height),
            UnitShape::Circle { diameter } => (*diameter, *diameter),
            UnitShape::RightTriangle { base, height } => (*base, *height),
            UnitShape::Trapezoid {
                large_base, height, ..
            } => (*large_base, *height),
            UnitShape::PairedTriangle { base, height } => (*base, *height),
            UnitShape::PairedTrapezoid {
                large_base,
                small_base,
                height,
            } => (large_base + small_base, *height),
            UnitShape::TracedOutline { width, height, .. } => (*width, *height),
        }
    }

    /// Surface of the material that ends up in finished parts.
    pub fn real_area(&self) -> f64 {
        match self {
            UnitShape::Rectangle { width, height } => width * height,
            UnitShape::Circle { diameter } => std::f64::consts::PI * diameter * diameter / 4.0,
            UnitShape::RightTriangle { base, height } => base * height / 2.0,
            UnitShape::Trapezoid {
                large_base,
                small_base,
                height,
            } => (large_base + small_base) * height / 2.0,
            UnitShape::PairedTriangle { base, height } => base * height,
            UnitShape::PairedTrapezoid {
                large_base,
                small_base,
                height,
            } => (large_base + small_base) * height,
            UnitShape::TracedOutline { width, height, .. } => width * height,
        }
    }

    /// Number of physical parts represented.
    pub fn n_parts(&self) -> usize {
        match self {
            UnitShape::PairedTriangle { .. } | UnitShape::PairedTrapezoid { .. } => 2,
            _ => 1,
        }
    }

    /// Short shape code used on shop documents.
    pub fn code(&self) -> &'static str {
        match self {
            UnitShape::Rectangle { width, height } if width == height => "Q",
            UnitShape::Rectangle { .. } => "R",
            UnitShape::Circle { .. } => "C",
            UnitShape::RightTriangle { .. } => "T",
            UnitShape::Trapezoid { .. } => "TP",
            UnitShape::PairedTriangle { .. } => "2T",
            UnitShape::PairedTrapezoid { .. } => "2TP",
            UnitShape::TracedOutline { .. } => "OUT",
        }
    }

    /// Human-readable type signature: shape code and real dimensions.
    pub fn label(&self) -> String {
        let code = self.code();
        match self {
            UnitShape::Rectangle { width, height } => format!("{code} {width}x{height}"),
            UnitShape::Circle { diameter } => format!("{code} Ø{diameter}"),
            UnitShape::RightTriangle { base, height }
            | UnitShape::PairedTriangle { base, height } => format!("{code} {base}x{height}"),
            UnitShape::Trapezoid {
                large_base,
                small_base,
                height,
            }
            | UnitShape::PairedTrapezoid {
                large_base,
                small_base,
                height,
            } => format!("{code} {large_base}/{small_base}x{height}"),
            UnitShape::TracedOutline {
                outline,
                width,
                height,
            } => format!("{code} {outline} {width}x{height}"),
        }
    }
}

/// One physical instance to place on a sheet: a single part, or a pair of fused parts.
#[derive(Clone, Debug, PartialEq)]
pub struct AllocationUnit {
    /// Unique identifier within a calculation run
    pub id: usize,
    pub shape: UnitShape,
    /// Indices of the originating [`PartSpec`](crate::entities::PartSpec)s, one per physical part
    pub sources: Vec<usize>,
    /// Holes of all physical parts, relative to the top-left corner of the unit's real bounding box
    pub holes: Vec<Hole>,
    /// Clearance added to each linear dimension before packing
    pub offset: f64,
}

impl AllocationUnit {
    pub fn new(
        id: usize,
        shape: UnitShape,
        sources: Vec<usize>,
        holes: Vec<Hole>,
        offset: f64,
    ) -> Self {
        debug_assert!(sources.len() == shape.n_parts());
        Self {
            id,
            shape,
            sources,
            holes,
            offset,
        }
    }

    /// Dimensions handed to the packer: real bounding box inflated by the offset.
    pub fn packed_dims(&self) -> (f64, f64) {
        let (w, h) = self.shape.real_dims();
        (w + self.offset, h + self.offset)
    }

    pub fn packed_area(&self) -> f64 {
        let (w, h) = self.packed_dims();
        w * h
    }

    pub fn real_area(&self) -> f64 {
        self.shape.real_area()
    }
}
