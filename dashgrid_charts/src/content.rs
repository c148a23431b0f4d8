// Copyright 2025 the DashGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed chart content summaries.
//!
//! The sizing engine never sees raw query results; the rendering layer hands
//! it a small summary of what a chart is about to draw (how many categories,
//! how long the labels run, how many table rows). Each chart kind has its own
//! summary shape, so content is a closed tagged union and the analyzer is a
//! pattern match; there are no optional fields to probe and nothing to throw.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::kind::ChartKind;

/// One plotted series of a bar/line chart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeriesInfo {
    /// Legend label for the series.
    pub label: String,
    /// Number of data points in the series.
    pub point_count: usize,
}

impl SeriesInfo {
    /// Creates a series summary.
    pub fn new(label: impl Into<String>, point_count: usize) -> Self {
        Self {
            label: label.into(),
            point_count,
        }
    }
}

/// Content summary for category-axis charts (bar, line).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategorySeries {
    /// Category labels along the x axis, in display order.
    pub categories: Vec<String>,
    /// Plotted series, in legend order.
    pub series: Vec<SeriesInfo>,
}

impl CategorySeries {
    /// Length of the longest category label, in characters.
    #[must_use]
    pub fn max_category_chars(&self) -> usize {
        max_chars(&self.categories)
    }
}

/// Content summary for pie/donut charts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PieSlices {
    /// Slice labels, in display order.
    pub labels: Vec<String>,
}

impl PieSlices {
    /// Length of the longest slice label, in characters.
    #[must_use]
    pub fn max_label_chars(&self) -> usize {
        max_chars(&self.labels)
    }
}

/// Content summary for data tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableShape {
    /// Number of columns.
    pub column_count: usize,
    /// Number of rows.
    pub row_count: usize,
}

/// Content summary for single-number cards.
///
/// The rendering layer formats the numeric value (units, separators, decimal
/// places); sizing only cares about the resulting text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NumberCard {
    /// The formatted value text, e.g. `"1,284,551"`.
    pub value_text: String,
    /// The caption shown under the value.
    pub label: String,
}

/// Content flags for widgets with no richer summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WidgetFlags {
    /// Whether the widget renders a legend.
    pub has_legend: bool,
    /// Whether the widget renders zoom controls.
    pub has_zoom_controls: bool,
}

/// What a chart is about to render, summarized per kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChartContent {
    /// Bar chart content.
    Bar(CategorySeries),
    /// Line chart content.
    Line(CategorySeries),
    /// Pie chart content.
    Pie(PieSlices),
    /// Table content.
    Table(TableShape),
    /// Number card content.
    Number(NumberCard),
    /// Maps carry no content signals; they always use their baseline size.
    Map,
    /// Anything else, reduced to coarse flags.
    Other(WidgetFlags),
}

impl ChartContent {
    /// Returns the chart kind this content belongs to.
    #[must_use]
    pub const fn kind(&self) -> ChartKind {
        match self {
            Self::Bar(_) => ChartKind::Bar,
            Self::Line(_) => ChartKind::Line,
            Self::Pie(_) => ChartKind::Pie,
            Self::Table(_) => ChartKind::Table,
            Self::Number(_) => ChartKind::Number,
            Self::Map => ChartKind::Map,
            Self::Other(_) => ChartKind::Other,
        }
    }
}

fn max_chars(labels: &[String]) -> usize {
    labels.iter().map(|l| l.chars().count()).max().unwrap_or(0)
}
