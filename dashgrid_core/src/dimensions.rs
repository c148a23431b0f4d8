// Copyright 2025 the DashGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Extent and placement types shared by the sizing engine.

use kurbo::Rect;

use crate::grid::GridConfig;

/// A width/height pair in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Creates a size from a width/height pair.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns this size grown by the given amounts on each axis.
    #[must_use]
    pub fn grown(self, dw: f64, dh: f64) -> Self {
        Self {
            width: self.width + dw,
            height: self.height + dh,
        }
    }

    /// Returns the per-axis maximum of `self` and `other`.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Returns the per-axis minimum of `self` and `other`.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self {
            width: self.width.min(other.width),
            height: self.height.min(other.height),
        }
    }
}

/// A widget extent in whole grid units.
///
/// `w` counts columns and is meaningful in `1..=cols` for a given
/// [`GridConfig`]; `h` counts rows and is unbounded above.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    /// Extent in columns.
    pub w: u32,
    /// Extent in rows.
    pub h: u32,
}

impl GridDimensions {
    /// Creates a grid extent from a column/row pair.
    #[must_use]
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// Clamps the column extent to `1..=cols`.
    ///
    /// The row extent is left alone; tall widgets scroll the dashboard, wide
    /// ones cannot escape the container.
    #[must_use]
    pub fn clamped_to_cols(self, cols: u32) -> Self {
        Self {
            w: self.w.clamp(1, cols.max(1)),
            h: self.h,
        }
    }

    /// Returns `self` raised to at least `floor` on each axis.
    #[must_use]
    pub fn raised_to(self, floor: Self) -> Self {
        Self {
            w: self.w.max(floor.w),
            h: self.h.max(floor.h),
        }
    }

    /// Returns whether both axes meet the given minimum.
    #[must_use]
    pub fn meets(self, min: Self) -> bool {
        self.w >= min.w && self.h >= min.h
    }
}

/// A placed widget: grid position plus extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridPlacement {
    /// Leftmost occupied column.
    pub col: u32,
    /// Topmost occupied row.
    pub row: u32,
    /// Occupied extent.
    pub size: GridDimensions,
}

impl GridPlacement {
    /// Creates a placement at the given cell.
    #[must_use]
    pub const fn new(col: u32, row: u32, size: GridDimensions) -> Self {
        Self { col, row, size }
    }

    /// Returns the pixel rectangle this placement renders into.
    ///
    /// Rendering code (DOM/canvas sizing) consumes this directly; the
    /// rectangle is relative to the container origin with edge margins
    /// applied.
    #[must_use]
    pub fn to_px_rect(&self, grid: &GridConfig) -> Rect {
        let x0 = grid.margin_x + f64::from(self.col) * (grid.column_width() + grid.margin_x);
        let y0 = grid.margin_y + f64::from(self.row) * (grid.row_height + grid.margin_y);
        Rect::new(
            x0,
            y0,
            x0 + grid.width_px_from_units(self.size.w),
            y0 + grid.height_px_from_units(self.size.h),
        )
    }
}
