// Copyright 2025 the DashGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for the `DashGrid` sizing engine.
//!
//! Sizes a small mixed dashboard and prints the resolved grid extents plus
//! the pixel rectangle each widget would render into.

use dashgrid_charts::{
    AdjustRule, CategorySeries, ChartContent, ChartKind, ConstraintSet, GridSizer, NumberCard,
    PieSlices, SeriesInfo, SizeClass, SizeTrace, TableShape,
};
use dashgrid_core::{GridConfig, GridDimensions, GridPlacement, Size};
use dashgrid_text::{FontWeight, TextBlockKind, TextWidgetConfig};

/// Prints every adjustment the analyzer applies.
struct PrintTrace;

impl SizeTrace for PrintTrace {
    fn adjustment(&self, kind: ChartKind, rule: AdjustRule, delta: Size) {
        println!(
            "    {:>6}: {:?} grew preferred by {}x{} px",
            kind.name(),
            rule,
            delta.width,
            delta.height
        );
    }
}

fn main() {
    let sizer = GridSizer::new(GridConfig::DEFAULT, ConstraintSet::builtin());

    let widgets: Vec<(&str, ChartContent)> = vec![
        (
            "monthly sales",
            ChartContent::Bar(CategorySeries {
                categories: (1..=20).map(|m| format!("2025-{m:02}")).collect(),
                series: vec![
                    SeriesInfo::new("actual", 20),
                    SeriesInfo::new("target", 20),
                ],
            }),
        ),
        (
            "share by region",
            ChartContent::Pie(PieSlices {
                labels: vec![
                    "North America".into(),
                    "South America".into(),
                    "Europe".into(),
                    "Asia Pacific".into(),
                    "Africa".into(),
                    "Middle East".into(),
                    "Oceania".into(),
                ],
            }),
        ),
        (
            "raw orders",
            ChartContent::Table(TableShape {
                column_count: 10,
                row_count: 50,
            }),
        ),
        (
            "total revenue",
            ChartContent::Number(NumberCard {
                value_text: "$1,284,551.20".into(),
                label: "Total revenue, trailing 12 months".into(),
            }),
        ),
        ("store locations", ChartContent::Map),
    ];

    println!("dashboard sizing on the default {}-column grid:", sizer.grid.cols);
    let mut row = 0;
    for (name, content) in &widgets {
        let kind = content.kind();
        println!("  {name} ({}):", kind.name());
        let dims = sizer.content_units_traced(kind, Some(content), SizeClass::Preferred, &PrintTrace);
        let min = sizer.content_units(kind, Some(content), SizeClass::Minimum);
        let rect = GridPlacement::new(0, row, dims).to_px_rect(&sizer.grid);
        println!(
            "    opens at {}x{} units (min {}x{}), rect {:.0}x{:.0} px at ({:.0}, {:.0})",
            dims.w,
            dims.h,
            min.w,
            min.h,
            rect.width(),
            rect.height(),
            rect.x0,
            rect.y0,
        );
        row += dims.h;
    }

    // A resize below the minimum gets rejected, then repaired.
    let too_small = GridDimensions::new(1, 1);
    let check = sizer.validate(ChartKind::Map, too_small);
    println!(
        "resize map to {}x{}: valid={}, min required {}x{}",
        too_small.w, too_small.h, check.is_valid, check.min_required.w, check.min_required.h
    );
    let repaired = sizer.raise_to_minimum(ChartKind::Map, too_small);
    println!("  repaired to {}x{}", repaired.w, repaired.h);

    // Text widgets size themselves from their content.
    let note = TextWidgetConfig::new("Q3 targets\nupdated weekly by the finance team")
        .with_font_size(16.0)
        .with_font_weight(FontWeight::BOLD)
        .with_block_kind(TextBlockKind::Heading);
    let px = note.measure();
    let units = note.grid_units(&sizer.grid);
    println!(
        "text widget: {:.0}x{:.0} px -> min {}x{} / preferred {}x{} units",
        px.width, px.height, units.min.w, units.min.h, units.preferred.w, units.preferred.h
    );
}
