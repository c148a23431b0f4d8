// Copyright 2025 the DashGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sizing instrumentation hooks.
//!
//! Hosts occasionally need to see *why* a chart was sized the way it was
//! (support tooling, layout debugging overlays). Rather than logging, the
//! analyzer reports each applied adjustment through a caller-provided trace,
//! in the same callback style the text measurer uses. The default is a no-op;
//! no trace implementation can change the sizing result.

use dashgrid_core::Size;

use crate::kind::ChartKind;

/// The content rule behind a single sizing adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdjustRule {
    /// Bar/line: width widened for categories past the threshold.
    CategoryCount,
    /// Bar/line: height grown for legend rows past the first series.
    SeriesLegend,
    /// Bar/line: height grown for long, rotated category labels.
    CategoryLabels,
    /// Pie: both axes grown for slices past the threshold.
    SliceCount,
    /// Pie: both axes grown for long slice labels.
    SliceLabels,
    /// Table: width grown per column past the threshold.
    ColumnCount,
    /// Table: height grown per row past the threshold.
    RowCount,
    /// Number card: grown for long formatted values.
    ValueLength,
    /// Number card: grown for long captions.
    LabelLength,
    /// Fallback widgets: extra height for a legend.
    LegendSpace,
    /// Fallback widgets: extra width for zoom controls.
    ZoomControls,
}

/// Receives one call per content adjustment the analyzer applies.
pub trait SizeTrace {
    /// Reports that `rule` grew the preferred size of a `kind` chart by
    /// `delta` (per-axis pixel amounts, already capped).
    fn adjustment(&self, kind: ChartKind, rule: AdjustRule, delta: Size);
}

/// The default trace: discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl SizeTrace for NoTrace {
    fn adjustment(&self, _kind: ChartKind, _rule: AdjustRule, _delta: Size) {}
}
