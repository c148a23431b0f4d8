// Copyright 2025 the DashGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-kind size constraints and the constraint table.
//!
//! Every chart kind has a baseline: the smallest box it stays legible in and
//! the box it should open at when first dropped on a dashboard. Baselines are
//! deliberately roomy ("ample" sizing); content analysis only ever grows them.

use dashgrid_core::Size;
use hashbrown::HashMap;

use crate::analyze;
use crate::content::ChartContent;
use crate::kind::ChartKind;
use crate::trace::SizeTrace;

/// Minimum and preferred pixel extents for one chart kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeConstraint {
    /// The smallest extent the chart stays legible in.
    pub min: Size,
    /// The extent the chart opens at when first placed.
    pub preferred: Size,
}

impl SizeConstraint {
    /// Creates a constraint, raising `preferred` to at least `min` per axis.
    #[must_use]
    pub fn new(min: Size, preferred: Size) -> Self {
        Self {
            min,
            preferred: preferred.max(min),
        }
    }

    /// Returns this constraint with every field raised to at least the
    /// corresponding field of `base`.
    #[must_use]
    pub fn floored_to(self, base: Self) -> Self {
        let min = self.min.max(base.min);
        Self {
            min,
            preferred: self.preferred.max(base.preferred).max(min),
        }
    }
}

/// The constraint lookup table.
///
/// Starts from the built-in baselines; hosts can override individual kinds
/// (white-label themes tend to restyle number cards and tables). Lookup is
/// total: every [`ChartKind`] resolves, and unknown widget names have
/// already collapsed to [`ChartKind::Other`] at the parse boundary.
#[derive(Clone, Debug, Default)]
pub struct ConstraintSet {
    overrides: HashMap<ChartKind, SizeConstraint>,
}

impl ConstraintSet {
    /// Creates the table with built-in baselines and no overrides.
    #[must_use]
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Replaces the baseline for one kind.
    ///
    /// The override is normalized so `preferred` is at least `min`.
    #[must_use]
    pub fn with_override(mut self, kind: ChartKind, constraint: SizeConstraint) -> Self {
        self.overrides
            .insert(kind, SizeConstraint::new(constraint.min, constraint.preferred));
        self
    }

    /// Looks up the constraint for a kind.
    #[must_use]
    pub fn get(&self, kind: ChartKind) -> SizeConstraint {
        self.overrides
            .get(&kind)
            .copied()
            .unwrap_or_else(|| baseline(kind))
    }

    /// Returns the constraint for a kind, inflated by its content.
    ///
    /// `None` content returns the baseline unchanged. Otherwise the content
    /// rules grow the preferred extent (never the minimum), each rule
    /// independently capped, and the result is floored to the baseline so no
    /// field ever shrinks below it. Applied rules are reported to `trace`.
    #[must_use]
    pub fn analyzed(
        &self,
        kind: ChartKind,
        content: Option<&ChartContent>,
        trace: &dyn SizeTrace,
    ) -> SizeConstraint {
        let base = self.get(kind);
        match content {
            None => base,
            Some(content) => analyze::apply_content_rules(base, kind, content, trace),
        }
    }
}

/// Built-in "ample" baselines.
///
/// Maps get the largest box (drill-down needs room), number cards the
/// smallest. Values are calibrated for the default 1200 px reference grid.
fn baseline(kind: ChartKind) -> SizeConstraint {
    let (min, preferred) = match kind {
        ChartKind::Bar | ChartKind::Line => ((300.0, 250.0), (420.0, 300.0)),
        ChartKind::Pie => ((250.0, 250.0), (360.0, 360.0)),
        ChartKind::Map => ((420.0, 400.0), (520.0, 460.0)),
        ChartKind::Table => ((300.0, 200.0), (520.0, 360.0)),
        ChartKind::Number => ((150.0, 120.0), (240.0, 160.0)),
        ChartKind::Text => ((200.0, 120.0), (300.0, 170.0)),
        ChartKind::Other => ((250.0, 200.0), (360.0, 260.0)),
    };
    SizeConstraint::new(
        Size::new(min.0, min.1),
        Size::new(preferred.0, preferred.1),
    )
}
