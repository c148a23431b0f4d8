// Copyright 2025 the DashGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart kinds.
//!
//! The kind decides which baseline constraint and which content rules apply.
//! Dashboard definitions arrive from an untyped boundary (persisted widget
//! configs, HTTP payloads), so the parse from a name string is total: anything
//! unrecognized collapses to [`ChartKind::Other`] rather than failing.

/// The visualization kind of a dashboard widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Vertical bar chart.
    Bar,
    /// Line chart.
    Line,
    /// Pie/donut chart.
    Pie,
    /// Geographic map.
    Map,
    /// Data table.
    Table,
    /// Single-number card.
    Number,
    /// Free-text widget.
    Text,
    /// Fallback for unknown widget kinds.
    Other,
}

impl ChartKind {
    /// Every kind, in display order.
    pub const ALL: [Self; 8] = [
        Self::Bar,
        Self::Line,
        Self::Pie,
        Self::Map,
        Self::Table,
        Self::Number,
        Self::Text,
        Self::Other,
    ];

    /// Parses a widget kind name.
    ///
    /// Matching is ASCII-case-insensitive and ignores surrounding whitespace.
    /// Unknown, empty, or garbage names map to [`Self::Other`]; there is no
    /// failure path.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        for kind in Self::ALL {
            if name.eq_ignore_ascii_case(kind.name()) {
                return kind;
            }
        }
        Self::Other
    }

    /// Returns the canonical lowercase name for this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Map => "map",
            Self::Table => "table",
            Self::Number => "number",
            Self::Text => "text",
            Self::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in ChartKind::ALL {
            assert_eq!(ChartKind::from_name(kind.name()), kind);
        }
    }

    #[test]
    fn parse_is_case_and_whitespace_tolerant() {
        assert_eq!(ChartKind::from_name("  Bar "), ChartKind::Bar);
        assert_eq!(ChartKind::from_name("TABLE"), ChartKind::Table);
    }

    #[test]
    fn unknown_names_fall_back() {
        assert_eq!(ChartKind::from_name(""), ChartKind::Other);
        assert_eq!(ChartKind::from_name("unknown-type"), ChartKind::Other);
        assert_eq!(ChartKind::from_name("scatter3d"), ChartKind::Other);
    }
}
