// Copyright 2025 the DashGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid coordinate system for `DashGrid`.
//!
//! Dashboard widgets are sized in two coordinate systems:
//! - **pixels**, where content heuristics live (label widths, row heights), and
//! - **grid units**, the discrete column/row extents a drag-and-drop dashboard
//!   grid actually places.
//!
//! This crate owns the conversion between the two plus the small extent types
//! shared by the rest of the workspace. Everything here is pure arithmetic:
//! no I/O, no shared state, total over all inputs.

#![no_std]

mod dimensions;
#[cfg(not(feature = "std"))]
mod float;
mod grid;

pub use dimensions::{GridDimensions, GridPlacement, Size};
pub use grid::GridConfig;
