use crate::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Classification of a leftover region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrapKind {
    /// Large enough to nest future parts in
    Reusable,
    /// Disposed of, but still reported with its dimensions
    Scrap,
}

impl Display for ScrapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScrapKind::Reusable => write!(f, "reusable"),
            ScrapKind::Scrap => write!(f, "scrap"),
        }
    }
}

/// Leftover rectangle on a sheet, with its origin at the top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrapRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub kind: ScrapKind,
    /// Higher is more valuable to keep in stock
    pub priority: f64,
}

impl ScrapRegion {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn rect(&self) -> Rect {
        Rect::from_xywh(self.x, self.y, self.width, self.height)
    }

    pub fn is_reusable(&self) -> bool {
        self.kind == ScrapKind::Reusable
    }

    pub fn translate(&self, dx: f64, dy: f64) -> ScrapRegion {
        ScrapRegion {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }
}
