// Copyright 2025 the DashGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Free-text widget sizing.
//!
//! Text widgets (headings, annotations, markdown-ish paragraphs) are the one
//! dashboard widget whose extent is driven by typed characters rather than
//! data volume. Real shaping lives in the rendering layer; at placement time
//! the engine only needs a box that comfortably fits the text, so measurement
//! here is heuristic: an average glyph advance of ~0.6 em, scaled up a
//! little for bold.
//!
//! This crate is intentionally:
//! - small and dependency-light,
//! - `no_std`-friendly (it uses `alloc` for the owned content string), and
//! - total: any config measures to a usable, editable box.

#![no_std]

extern crate alloc;

use alloc::string::String;

use dashgrid_core::{GridConfig, GridDimensions, Size};

/// Average glyph advance as a fraction of the font size.
const AVG_CHAR_EM: f64 = 0.6;
/// Bold glyphs run a little wider.
const BOLD_FACTOR: f64 = 1.1;

/// Fixed padding inside the widget box.
const H_PADDING_PX: f64 = 32.0;
const V_PADDING_PX: f64 = 24.0;

/// Line height as a multiple of the font size.
const HEADING_LINE_EM: f64 = 1.4;
const PARAGRAPH_LINE_EM: f64 = 1.5;

/// Floors: even one-character content must render in a usable box.
const MIN_WIDTH_PX: f64 = 200.0;
const MIN_HEIGHT_PX: f64 = 120.0;

/// Fixed height of the placeholder box shown for empty content.
const EMPTY_HEIGHT_PX: f64 = 150.0;

/// Placeholder shown in (and sized for) empty text widgets.
const EMPTY_PLACEHOLDER: &str = "Add text here";

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// The block role of a text widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBlockKind {
    /// Body text with roomy line spacing.
    #[default]
    Paragraph,
    /// Heading text with tighter line spacing.
    Heading,
}

/// Horizontal alignment of the text within its box.
///
/// Alignment is carried with the widget config for the rendering layer;
/// it does not affect the measured extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// Align lines to the left edge.
    #[default]
    Left,
    /// Center lines.
    Center,
    /// Align lines to the right edge.
    Right,
}

/// Configuration of a free-text dashboard widget.
#[derive(Clone, Debug, PartialEq)]
pub struct TextWidgetConfig {
    /// The text content; lines are separated by `\n`.
    pub content: String,
    /// Font size in pixels.
    pub font_size: f64,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Paragraph or heading spacing.
    pub block_kind: TextBlockKind,
    /// Horizontal alignment (rendering only).
    pub align: TextAlign,
}

impl Default for TextWidgetConfig {
    fn default() -> Self {
        Self::new("")
    }
}

/// Minimum and preferred grid extents for a text widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextGridDimensions {
    /// The smallest extent the widget may be resized to.
    pub min: GridDimensions,
    /// The extent the widget opens at when first placed.
    pub preferred: GridDimensions,
}

impl TextWidgetConfig {
    /// Creates a 14 px paragraph config with the given content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font_size: 14.0,
            font_weight: FontWeight::NORMAL,
            block_kind: TextBlockKind::Paragraph,
            align: TextAlign::Left,
        }
    }

    /// Sets the font size.
    #[must_use]
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_font_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Sets the block role.
    #[must_use]
    pub fn with_block_kind(mut self, block_kind: TextBlockKind) -> Self {
        self.block_kind = block_kind;
        self
    }

    /// Sets the horizontal alignment.
    #[must_use]
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Measures the pixel box this widget needs.
    ///
    /// Empty or whitespace-only content gets a placeholder-sized box with a
    /// fixed height, so a freshly dropped widget is comfortably editable.
    /// Otherwise the longest line drives the width and the line count the
    /// height, both padded and floored.
    #[must_use]
    pub fn measure(&self) -> Size {
        let font_size = self.font_size.max(1.0);
        let char_px = AVG_CHAR_EM
            * font_size
            * if self.font_weight >= FontWeight::BOLD {
                BOLD_FACTOR
            } else {
                1.0
            };

        if self.content.trim().is_empty() {
            let width = EMPTY_PLACEHOLDER.chars().count() as f64 * char_px + H_PADDING_PX;
            return Size::new(width.max(MIN_WIDTH_PX), EMPTY_HEIGHT_PX);
        }

        let mut line_count = 0_usize;
        let mut longest_chars = 0_usize;
        for line in self.content.split('\n') {
            line_count += 1;
            longest_chars = longest_chars.max(line.chars().count());
        }

        let line_px = match self.block_kind {
            TextBlockKind::Heading => HEADING_LINE_EM,
            TextBlockKind::Paragraph => PARAGRAPH_LINE_EM,
        } * font_size;

        let width = longest_chars as f64 * char_px + H_PADDING_PX;
        let height = line_count as f64 * line_px + V_PADDING_PX;
        Size::new(width.max(MIN_WIDTH_PX), height.max(MIN_HEIGHT_PX))
    }

    /// Resolves the measured box to grid units.
    ///
    /// The preferred extent is the minimum grown by a quarter on each axis
    /// (rounded up), giving new widgets some breathing room; widths are
    /// capped at the grid's column count.
    #[must_use]
    pub fn grid_units(&self, grid: &GridConfig) -> TextGridDimensions {
        let px = self.measure();
        let min = GridDimensions::new(
            grid.units_from_width_px(px.width),
            grid.units_from_height_px(px.height),
        )
        .raised_to(GridDimensions::new(1, 1))
        .clamped_to_cols(grid.cols);

        let preferred = GridDimensions::new(
            min.w + min.w.div_ceil(4),
            min.h + min.h.div_ceil(4),
        )
        .clamped_to_cols(grid.cols);

        TextGridDimensions { min, preferred }
    }
}
