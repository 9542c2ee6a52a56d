use crate::geometry::Rect;
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Stock sheet of fixed dimensions.
/// The margin shrinks the usable nesting area symmetrically on all sides.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub margin: f64,
}

impl Sheet {
    pub fn try_new(width: f64, height: f64, margin: f64) -> Result<Self> {
        let sheet = Sheet {
            width,
            height,
            margin,
        };
        sheet.validate()?;
        Ok(sheet)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width > 0.0 && self.height > 0.0,
            "sheet dimensions must be positive, got {}x{}",
            self.width,
            self.height
        );
        ensure!(
            self.margin >= 0.0,
            "sheet margin must not be negative, got {}",
            self.margin
        );
        ensure!(
            self.usable_width() > 0.0 && self.usable_height() > 0.0,
            "margin {} leaves no usable area on a {}x{} sheet",
            self.margin,
            self.width,
            self.height
        );
        Ok(())
    }

    pub fn with_margin(self, margin: f64) -> Self {
        Sheet { margin, ..self }
    }

    pub fn usable_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    pub fn usable_height(&self) -> f64 {
        self.height - 2.0 * self.margin
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn usable_area(&self) -> f64 {
        self.usable_width() * self.usable_height()
    }

    /// The nesting area in sheet coordinates.
    pub fn usable_rect(&self) -> Rect {
        Rect::from_xywh(
            self.margin,
            self.margin,
            self.usable_width(),
            self.usable_height(),
        )
    }

    /// Pool of `n` identical sheets.
    pub fn pool(&self, n: usize) -> Vec<Sheet> {
        vec![*self; n]
    }
}
