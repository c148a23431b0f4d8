// Copyright 2025 the DashGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content-aware chart sizing for dashboard grids.
//!
//! This crate turns "a bar chart with 20 categories and 2 series" into "an
//! 8×12 box on a 12-column grid":
//! - **Constraints** give every chart kind a baseline minimum and preferred
//!   pixel extent.
//! - **Content analysis** grows the preferred extent from volume signals
//!   (category counts, label lengths, table shape), additively and capped.
//! - **Resolution** converts pixels to grid units and enforces the unit
//!   floors a placement grid needs.
//!
//! Every entry point is a pure, total function: malformed or absent content
//! degrades to the baseline constraint, never to an error.

#![no_std]

extern crate alloc;

mod analyze;
mod constraint;
mod content;
mod kind;
mod resolver;
mod trace;

pub use constraint::{ConstraintSet, SizeConstraint};
pub use content::{
    CategorySeries, ChartContent, NumberCard, PieSlices, SeriesInfo, TableShape, WidgetFlags,
};
pub use kind::ChartKind;
pub use resolver::{GridSizer, SizeCheck, SizeClass};
pub use trace::{AdjustRule, NoTrace, SizeTrace};
