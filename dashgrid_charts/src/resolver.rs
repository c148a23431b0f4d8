// Copyright 2025 the DashGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel constraints resolved to grid units.
//!
//! This is the layer dashboard-builder code talks to: it combines the
//! constraint table, the content analyzer, and the pixel/unit converter into
//! final `{w, h}` grid extents for placement, validation, and resize
//! clamping.

use dashgrid_core::{GridConfig, GridDimensions, Size};

use crate::constraint::ConstraintSet;
use crate::content::ChartContent;
use crate::kind::ChartKind;
use crate::trace::{NoTrace, SizeTrace};

/// Which of a constraint's two extents to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeClass {
    /// The smallest extent the chart stays legible in.
    Minimum,
    /// The extent the chart opens at when first placed.
    Preferred,
}

/// Breathing room added around content-derived extents before conversion.
///
/// Preferred boxes get more than minimum boxes: a freshly placed chart should
/// look roomy, a shrink limit should bind late.
const MIN_PADDING_PX: f64 = 10.0;
const PREFERRED_PADDING_PX: f64 = 20.0;

/// Result of validating a widget extent against its kind's minimum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeCheck {
    /// Whether both axes meet the minimum.
    pub is_valid: bool,
    /// The minimum extent the kind requires.
    pub min_required: GridDimensions,
}

/// Resolves chart sizing against a particular grid.
#[derive(Clone, Debug, Default)]
pub struct GridSizer {
    /// The grid coordinate system to resolve into.
    pub grid: GridConfig,
    /// The constraint table to resolve from.
    pub constraints: ConstraintSet,
}

impl GridSizer {
    /// Creates a sizer for the given grid and constraint table.
    #[must_use]
    pub fn new(grid: GridConfig, constraints: ConstraintSet) -> Self {
        Self { grid, constraints }
    }

    /// The smallest grid extent a `kind` widget may be resized to.
    ///
    /// At least 1×1 regardless of the pixel table, and never wider than the
    /// grid.
    #[must_use]
    pub fn min_units(&self, kind: ChartKind) -> GridDimensions {
        let c = self.constraints.get(kind);
        self.units_for(c.min)
            .raised_to(GridDimensions::new(1, 1))
            .clamped_to_cols(self.grid.cols)
    }

    /// The grid extent a `kind` widget opens at when first placed.
    ///
    /// Never smaller than [`Self::min_units`] on either axis, never wider
    /// than the grid.
    #[must_use]
    pub fn preferred_units(&self, kind: ChartKind) -> GridDimensions {
        self.units_for(self.constraints.get(kind).preferred)
            .clamped_to_cols(self.grid.cols)
            .raised_to(self.min_units(kind))
    }

    /// The fullest resolution: content-aware sizing.
    ///
    /// Runs the content analyzer, pads the chosen extent, converts to grid
    /// units, and applies the per-kind absolute unit floors: pixel minimums
    /// can round down to visually cramped unit counts, so the floors are the
    /// final safety net.
    #[must_use]
    pub fn content_units(
        &self,
        kind: ChartKind,
        content: Option<&ChartContent>,
        class: SizeClass,
    ) -> GridDimensions {
        self.content_units_traced(kind, content, class, &NoTrace)
    }

    /// [`Self::content_units`] with sizing decisions reported to `trace`.
    #[must_use]
    pub fn content_units_traced(
        &self,
        kind: ChartKind,
        content: Option<&ChartContent>,
        class: SizeClass,
        trace: &dyn SizeTrace,
    ) -> GridDimensions {
        let constraint = self.constraints.analyzed(kind, content, trace);
        let (px, pad) = match class {
            SizeClass::Minimum => (constraint.min, MIN_PADDING_PX),
            SizeClass::Preferred => (constraint.preferred, PREFERRED_PADDING_PX),
        };
        self.units_for(px.grown(pad, pad))
            .clamped_to_cols(self.grid.cols)
            .raised_to(unit_floor(kind))
    }

    /// Checks an extent against the kind's minimum.
    #[must_use]
    pub fn validate(&self, kind: ChartKind, dims: GridDimensions) -> SizeCheck {
        let min_required = self.min_units(kind);
        SizeCheck {
            is_valid: dims.meets(min_required),
            min_required,
        }
    }

    /// Raises an extent to the kind's minimum where it falls short.
    ///
    /// Axes already at or above the minimum are left alone; this never
    /// shrinks.
    #[must_use]
    pub fn raise_to_minimum(&self, kind: ChartKind, dims: GridDimensions) -> GridDimensions {
        dims.raised_to(self.min_units(kind))
    }

    fn units_for(&self, px: Size) -> GridDimensions {
        GridDimensions::new(
            self.grid.units_from_width_px(px.width),
            self.grid.units_from_height_px(px.height),
        )
    }
}

/// Absolute unit floors per kind.
///
/// These are grid-space minimums independent of the pixel table: unit
/// rounding of a small pixel minimum can still leave a chart squashed against
/// its axis labels, so each kind states the smallest box that reads well.
const fn unit_floor(kind: ChartKind) -> GridDimensions {
    match kind {
        ChartKind::Bar | ChartKind::Line | ChartKind::Pie => GridDimensions::new(3, 4),
        ChartKind::Map => GridDimensions::new(4, 5),
        ChartKind::Table => GridDimensions::new(3, 3),
        ChartKind::Number | ChartKind::Text => GridDimensions::new(2, 2),
        ChartKind::Other => GridDimensions::new(2, 3),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn minimums_fit_the_grid_and_floor_at_one() {
        let sizer = GridSizer::default();
        for kind in ChartKind::ALL {
            let min = sizer.min_units(kind);
            assert!(min.w >= 1 && min.h >= 1, "{kind:?} below 1x1");
            assert!(min.w <= sizer.grid.cols, "{kind:?} wider than the grid");
        }
    }

    #[test]
    fn preferred_never_undercuts_minimum() {
        let sizer = GridSizer::default();
        for kind in ChartKind::ALL {
            let min = sizer.min_units(kind);
            let preferred = sizer.preferred_units(kind);
            assert!(preferred.meets(min), "{kind:?} preferred below minimum");
            assert!(preferred.w <= sizer.grid.cols, "{kind:?} overflows columns");
        }
    }

    #[test]
    fn exact_minimum_validates() {
        let sizer = GridSizer::default();
        for kind in ChartKind::ALL {
            let check = sizer.validate(kind, sizer.min_units(kind));
            assert!(check.is_valid, "{kind:?} rejects its own minimum");
        }
    }

    #[test]
    fn zero_extent_raises_to_the_minimum() {
        let sizer = GridSizer::default();
        for kind in ChartKind::ALL {
            assert_eq!(
                sizer.raise_to_minimum(kind, GridDimensions::new(0, 0)),
                sizer.min_units(kind),
                "{kind:?}"
            );
        }
    }

    #[test]
    fn oversized_extents_are_left_alone() {
        let sizer = GridSizer::default();
        let big = GridDimensions::new(12, 40);
        assert_eq!(sizer.raise_to_minimum(ChartKind::Map, big), big);
        assert!(sizer.validate(ChartKind::Map, big).is_valid);
    }

    #[test]
    fn content_units_respect_the_unit_floors() {
        let sizer = GridSizer::default();
        for kind in ChartKind::ALL {
            let dims = sizer.content_units(kind, None, SizeClass::Minimum);
            assert!(dims.meets(unit_floor(kind)), "{kind:?} under its floor");
            assert!(dims.w <= sizer.grid.cols, "{kind:?} overflows columns");
        }
    }

    #[test]
    fn preferred_class_is_never_smaller_than_minimum_class() {
        let sizer = GridSizer::default();
        for kind in ChartKind::ALL {
            let min = sizer.content_units(kind, None, SizeClass::Minimum);
            let preferred = sizer.content_units(kind, None, SizeClass::Preferred);
            assert!(preferred.meets(min), "{kind:?} classes out of order");
        }
    }
}
