use anyhow::{Result, ensure};

/// Circular hole drilled or cut inside a part.
/// Coordinates are relative to the part's own top-left origin.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Hole {
    pub diameter: f64,
    pub x: f64,
    pub y: f64,
}

impl Hole {
    /// Position of the hole after the part (of width `part_width`) is turned 90° on the sheet.
    /// The axes are swapped and the new vertical axis is mirrored.
    pub fn rotated_90(&self, part_width: f64) -> Hole {
        Hole {
            diameter: self.diameter,
            x: self.y,
            y: part_width - self.x,
        }
    }

    /// Position of the hole after the part is turned 180° within a frame of `width` x `height`.
    pub fn rotated_180(&self, width: f64, height: f64) -> Hole {
        Hole {
            diameter: self.diameter,
            x: width - self.x,
            y: height - self.y,
        }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Hole {
        Hole {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Geometry of a requested part, each variant carrying its own dimensions.
#[derive(Clone, Debug, PartialEq)]
pub enum PartShape {
    Rectangle {
        width: f64,
        height: f64,
    },
    Circle {
        diameter: f64,
    },
    /// Right triangle with the right angle between `base` and `height`
    RightTriangle {
        base: f64,
        height: f64,
    },
    Trapezoid {
        large_base: f64,
        small_base: f64,
        height: f64,
    },
    /// Free-form contour traced from an external drawing, known only by its bounding box
    TracedOutline {
        outline: String,
        width: f64,
        height: f64,
    },
}

impl PartShape {
    /// Width and height of the axis-aligned bounding box of a single instance.
    /// A trapezoid is bounded by its large base.
    pub fn bbox(&self) -> (f64, f64) {
        match self {
            PartShape::Rectangle { width, height } => (*width, *height),
            PartShape::Circle { diameter } => (*diameter, *diameter),
            PartShape::RightTriangle { base, height } => (*base, *height),
            PartShape::Trapezoid {
                large_base, height, ..
            } => (*large_base, *height),
            PartShape::TracedOutline { width, height, .. } => (*width, *height),
        }
    }

    /// All linear dimensions of the shape.
    pub fn linear_dims(&self) -> Vec<f64> {
        match self {
            PartShape::Rectangle { width, height } => vec![*width, *height],
            PartShape::Circle { diameter } => vec![*diameter],
            PartShape::RightTriangle { base, height } => vec![*base, *height],
            PartShape::Trapezoid {
                large_base,
                small_base,
                height,
            } => vec![*large_base, *small_base, *height],
            PartShape::TracedOutline { width, height, .. } => vec![*width, *height],
        }
    }

    /// Whether the dimensions describe a shape that can be placed.
    pub fn is_valid(&self) -> bool {
        let positive = self
            .linear_dims()
            .iter()
            .all(|d| d.is_finite() && *d > 0.0);
        match self {
            PartShape::Trapezoid {
                large_base,
                small_base,
                ..
            } => positive && small_base <= large_base,
            _ => positive,
        }
    }

    /// Lowercase name of the shape kind, as used in job files.
    pub fn kind(&self) -> &'static str {
        match self {
            PartShape::Rectangle { .. } => "rectangle",
            PartShape::Circle { .. } => "circle",
            PartShape::RightTriangle { .. } => "right_triangle",
            PartShape::Trapezoid { .. } => "trapezoid",
            PartShape::TracedOutline { .. } => "traced_outline",
        }
    }
}

/// A requested part type, before it is expanded into individual [`AllocationUnit`](crate::entities::AllocationUnit)s.
#[derive(Clone, Debug, PartialEq)]
pub struct PartSpec {
    pub name: String,
    pub shape: PartShape,
    /// Number of instances to produce
    pub quantity: usize,
    pub holes: Vec<Hole>,
    /// Plate thickness in mm, if known
    pub thickness: Option<f64>,
}

impl PartSpec {
    pub fn new(name: impl Into<String>, shape: PartShape, quantity: usize) -> Self {
        Self {
            name: name.into(),
            shape,
            quantity,
            holes: vec![],
            thickness: None,
        }
    }

    pub fn with_holes(mut self, holes: Vec<Hole>) -> Self {
        self.holes = holes;
        self
    }

    /// Adds four holes of `diameter`, each `inset` away from both edges of a corner.
    /// Only rectangles (squares included) carry the pattern.
    pub fn with_corner_holes(mut self, diameter: f64, inset: f64) -> Result<Self> {
        ensure!(
            matches!(self.shape, PartShape::Rectangle { .. }),
            "corner holes are only available for rectangles (part '{}')",
            self.name
        );
        let (w, h) = self.shape.bbox();
        ensure!(
            diameter > 0.0 && inset > 0.0,
            "corner holes of part '{}' need a positive diameter and inset",
            self.name
        );
        ensure!(
            2.0 * inset < w && 2.0 * inset < h,
            "corner hole inset {inset} exceeds the dimensions of part '{}' ({w}x{h})",
            self.name
        );
        let corners = [
            (inset, inset),
            (w - inset, inset),
            (w - inset, h - inset),
            (inset, h - inset),
        ];
        self.holes
            .extend(corners.map(|(x, y)| Hole { diameter, x, y }));
        Ok(self)
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = Some(thickness);
        self
    }

    /// A part is eligible for placement if it is requested at least once and all its dimensions are positive.
    pub fn is_eligible(&self) -> bool {
        self.quantity > 0 && self.shape.is_valid()
    }
}
