// Copyright 2025 the DashGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content adjustment rules.
//!
//! Each chart kind reads a few volume signals from its content summary and
//! grows the *preferred* extent accordingly: more categories need a wider bar
//! chart, more rows a taller table. Every rule is additive, only engages past
//! a threshold, and is independently capped, so no single signal can blow a
//! widget up without bound. Minimum extents are never touched; a chart that
//! the user shrank by hand stays shrinkable.

use dashgrid_core::Size;
use smallvec::SmallVec;

use crate::constraint::SizeConstraint;
use crate::content::ChartContent;
use crate::kind::ChartKind;
use crate::trace::{AdjustRule, SizeTrace};

/// Categories a bar/line chart fits comfortably before widening.
const CATEGORY_THRESHOLD: usize = 10;
const CATEGORY_STEP_PX: f64 = 20.0;
const CATEGORY_CAP_PX: f64 = 400.0;

/// Legend row allowance per series beyond the first.
const SERIES_ROW_PX: f64 = 22.0;
const SERIES_CAP_PX: f64 = 88.0;

/// Category labels longer than this render rotated and need vertical room.
const AXIS_LABEL_THRESHOLD: usize = 8;
const AXIS_LABEL_STEP_PX: f64 = 4.0;
const AXIS_LABEL_CAP_PX: f64 = 80.0;

const SLICE_THRESHOLD: usize = 6;
const SLICE_STEP_W_PX: f64 = 15.0;
const SLICE_STEP_H_PX: f64 = 10.0;
const SLICE_CAP_W_PX: f64 = 150.0;
const SLICE_CAP_H_PX: f64 = 100.0;

const SLICE_LABEL_THRESHOLD: usize = 10;
const SLICE_LABEL_STEP_PX: f64 = 5.0;
const SLICE_LABEL_CAP_PX: f64 = 100.0;

const COLUMN_THRESHOLD: usize = 4;
const COLUMN_STEP_PX: f64 = 80.0;
const ROW_THRESHOLD: usize = 5;
const ROW_STEP_PX: f64 = 28.0;

/// Tables wider/taller than this scroll instead of growing further.
const TABLE_MAX_WIDTH_PX: f64 = 1000.0;
const TABLE_MAX_HEIGHT_PX: f64 = 600.0;

const VALUE_THRESHOLD: usize = 6;
const VALUE_STEP_W_PX: f64 = 14.0;
const VALUE_STEP_H_PX: f64 = 2.0;
const VALUE_CAP_W_PX: f64 = 140.0;
const VALUE_CAP_H_PX: f64 = 24.0;

const CARD_LABEL_THRESHOLD: usize = 12;
const CARD_LABEL_STEP_W_PX: f64 = 8.0;
const CARD_LABEL_STEP_H_PX: f64 = 3.0;
const CARD_LABEL_CAP_W_PX: f64 = 120.0;
const CARD_LABEL_CAP_H_PX: f64 = 36.0;

/// Extra room for fallback widgets that declare a legend or zoom controls.
const FLAG_EXTRA_PX: f64 = 40.0;

type Applied = SmallVec<[(AdjustRule, Size); 4]>;

/// Grows `base.preferred` according to the content's rules.
///
/// The `kind` picks the baseline being grown; the content variant picks the
/// rules (callers pass matching pairs). The result is floored back to `base`
/// per field, so this never shrinks anything.
pub(crate) fn apply_content_rules(
    base: SizeConstraint,
    kind: ChartKind,
    content: &ChartContent,
    trace: &dyn SizeTrace,
) -> SizeConstraint {
    let mut applied = Applied::new();

    match content {
        ChartContent::Bar(cs) | ChartContent::Line(cs) => {
            push(
                &mut applied,
                AdjustRule::CategoryCount,
                Size::new(
                    growth(cs.categories.len(), CATEGORY_THRESHOLD, CATEGORY_STEP_PX)
                        .min(CATEGORY_CAP_PX),
                    0.0,
                ),
            );
            push(
                &mut applied,
                AdjustRule::SeriesLegend,
                Size::new(
                    0.0,
                    growth(cs.series.len(), 1, SERIES_ROW_PX).min(SERIES_CAP_PX),
                ),
            );
            push(
                &mut applied,
                AdjustRule::CategoryLabels,
                Size::new(
                    0.0,
                    growth(cs.max_category_chars(), AXIS_LABEL_THRESHOLD, AXIS_LABEL_STEP_PX)
                        .min(AXIS_LABEL_CAP_PX),
                ),
            );
        }
        ChartContent::Pie(slices) => {
            let n = slices.labels.len();
            push(
                &mut applied,
                AdjustRule::SliceCount,
                Size::new(
                    growth(n, SLICE_THRESHOLD, SLICE_STEP_W_PX).min(SLICE_CAP_W_PX),
                    growth(n, SLICE_THRESHOLD, SLICE_STEP_H_PX).min(SLICE_CAP_H_PX),
                ),
            );
            let label_px = growth(
                slices.max_label_chars(),
                SLICE_LABEL_THRESHOLD,
                SLICE_LABEL_STEP_PX,
            )
            .min(SLICE_LABEL_CAP_PX);
            push(
                &mut applied,
                AdjustRule::SliceLabels,
                Size::new(label_px, label_px),
            );
        }
        ChartContent::Table(shape) => {
            push(
                &mut applied,
                AdjustRule::ColumnCount,
                Size::new(
                    growth(shape.column_count, COLUMN_THRESHOLD, COLUMN_STEP_PX),
                    0.0,
                ),
            );
            push(
                &mut applied,
                AdjustRule::RowCount,
                Size::new(0.0, growth(shape.row_count, ROW_THRESHOLD, ROW_STEP_PX)),
            );
        }
        ChartContent::Number(card) => {
            push(
                &mut applied,
                AdjustRule::ValueLength,
                Size::new(
                    growth(card.value_text.chars().count(), VALUE_THRESHOLD, VALUE_STEP_W_PX)
                        .min(VALUE_CAP_W_PX),
                    growth(card.value_text.chars().count(), VALUE_THRESHOLD, VALUE_STEP_H_PX)
                        .min(VALUE_CAP_H_PX),
                ),
            );
            push(
                &mut applied,
                AdjustRule::LabelLength,
                Size::new(
                    growth(card.label.chars().count(), CARD_LABEL_THRESHOLD, CARD_LABEL_STEP_W_PX)
                        .min(CARD_LABEL_CAP_W_PX),
                    growth(card.label.chars().count(), CARD_LABEL_THRESHOLD, CARD_LABEL_STEP_H_PX)
                        .min(CARD_LABEL_CAP_H_PX),
                ),
            );
        }
        ChartContent::Map => {}
        ChartContent::Other(flags) => {
            if flags.has_legend {
                push(
                    &mut applied,
                    AdjustRule::LegendSpace,
                    Size::new(0.0, FLAG_EXTRA_PX),
                );
            }
            if flags.has_zoom_controls {
                push(
                    &mut applied,
                    AdjustRule::ZoomControls,
                    Size::new(FLAG_EXTRA_PX, 0.0),
                );
            }
        }
    }

    let mut out = base;
    for &(rule, delta) in &applied {
        out.preferred = out.preferred.grown(delta.width, delta.height);
        trace.adjustment(kind, rule, delta);
    }

    // Very large tables scroll; their box stops growing at the absolute caps.
    if matches!(content, ChartContent::Table(_)) {
        out.preferred = out
            .preferred
            .min(Size::new(TABLE_MAX_WIDTH_PX, TABLE_MAX_HEIGHT_PX));
    }

    out.floored_to(base)
}

/// Linear growth past a threshold: `(count - threshold) * step`, else `0`.
fn growth(count: usize, threshold: usize, step_px: f64) -> f64 {
    count.saturating_sub(threshold) as f64 * step_px
}

fn push(applied: &mut Applied, rule: AdjustRule, delta: Size) {
    if delta.width > 0.0 || delta.height > 0.0 {
        applied.push((rule, delta));
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::format;
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::*;
    use crate::constraint::ConstraintSet;
    use crate::content::{CategorySeries, NumberCard, PieSlices, SeriesInfo, TableShape, WidgetFlags};
    use crate::trace::NoTrace;

    fn bar_content(categories: usize, series: usize) -> ChartContent {
        ChartContent::Bar(CategorySeries {
            categories: (0..categories).map(|i| format!("c{i}")).collect(),
            series: (0..series).map(|i| SeriesInfo::new(format!("s{i}"), categories)).collect(),
        })
    }

    #[test]
    fn crowded_bar_chart_widens_preferred_only() {
        let set = ConstraintSet::builtin();
        let base = set.get(ChartKind::Bar);
        let c = set.analyzed(ChartKind::Bar, Some(&bar_content(20, 2)), &NoTrace);

        assert_eq!(c.min, base.min);
        // 10 categories past the threshold at 20 px each.
        assert!((c.preferred.width - (base.preferred.width + 200.0)).abs() < 1e-9);
        // One legend row past the first series; labels are short.
        assert!((c.preferred.height - (base.preferred.height + 22.0)).abs() < 1e-9);
    }

    #[test]
    fn category_growth_is_capped() {
        let set = ConstraintSet::builtin();
        let base = set.get(ChartKind::Line);
        let c = set.analyzed(ChartKind::Line, Some(&bar_content(500, 30)), &NoTrace);
        assert!((c.preferred.width - (base.preferred.width + 400.0)).abs() < 1e-9);
        assert!((c.preferred.height - (base.preferred.height + 88.0)).abs() < 1e-9);
    }

    #[test]
    fn long_category_labels_reserve_rotation_room() {
        let set = ConstraintSet::builtin();
        let base = set.get(ChartKind::Bar);
        let content = ChartContent::Bar(CategorySeries {
            categories: alloc::vec!["twelve chars".to_string()],
            series: alloc::vec![SeriesInfo::new("s", 1)],
        });
        let c = set.analyzed(ChartKind::Bar, Some(&content), &NoTrace);
        assert!((c.preferred.height - (base.preferred.height + 16.0)).abs() < 1e-9);
    }

    #[test]
    fn big_tables_cap_at_the_scroll_box() {
        let set = ConstraintSet::builtin();
        let c = set.analyzed(
            ChartKind::Table,
            Some(&ChartContent::Table(TableShape {
                column_count: 10,
                row_count: 50,
            })),
            &NoTrace,
        );
        assert_eq!(c.preferred, Size::new(TABLE_MAX_WIDTH_PX, TABLE_MAX_HEIGHT_PX));

        let wider = set.analyzed(
            ChartKind::Table,
            Some(&ChartContent::Table(TableShape {
                column_count: 40,
                row_count: 500,
            })),
            &NoTrace,
        );
        assert_eq!(wider.preferred, c.preferred);
    }

    #[test]
    fn number_card_grows_with_value_and_caption() {
        let set = ConstraintSet::builtin();
        let base = set.get(ChartKind::Number);
        let c = set.analyzed(
            ChartKind::Number,
            Some(&ChartContent::Number(NumberCard {
                value_text: "1,234,567.89".to_string(), // 12 chars
                label: "Quarterly revenue".to_string(), // 17 chars
            })),
            &NoTrace,
        );
        assert!((c.preferred.width - (base.preferred.width + 6.0 * 14.0 + 5.0 * 8.0)).abs() < 1e-9);
        assert!((c.preferred.height - (base.preferred.height + 6.0 * 2.0 + 5.0 * 3.0)).abs() < 1e-9);
    }

    #[test]
    fn maps_and_empty_content_change_nothing() {
        let set = ConstraintSet::builtin();
        assert_eq!(
            set.analyzed(ChartKind::Map, Some(&ChartContent::Map), &NoTrace),
            set.get(ChartKind::Map)
        );
        assert_eq!(
            set.analyzed(
                ChartKind::Bar,
                Some(&ChartContent::Bar(CategorySeries::default())),
                &NoTrace
            ),
            set.get(ChartKind::Bar)
        );
    }

    #[test]
    fn fallback_flags_add_fixed_room() {
        let set = ConstraintSet::builtin();
        let base = set.get(ChartKind::Other);
        let c = set.analyzed(
            ChartKind::Other,
            Some(&ChartContent::Other(WidgetFlags {
                has_legend: true,
                has_zoom_controls: true,
            })),
            &NoTrace,
        );
        assert_eq!(c.preferred, base.preferred.grown(40.0, 40.0));
    }

    #[test]
    fn pie_growth_tracks_slices_and_labels() {
        let set = ConstraintSet::builtin();
        let base = set.get(ChartKind::Pie);
        let content = ChartContent::Pie(PieSlices {
            labels: (0..10).map(|i| format!("segment number {i}")).collect(), // 16 chars
        });
        let c = set.analyzed(ChartKind::Pie, Some(&content), &NoTrace);
        assert!((c.preferred.width - (base.preferred.width + 4.0 * 15.0 + 6.0 * 5.0)).abs() < 1e-9);
        assert!((c.preferred.height - (base.preferred.height + 4.0 * 10.0 + 6.0 * 5.0)).abs() < 1e-9);
    }

    struct RecordingTrace(RefCell<Vec<AdjustRule>>);

    impl SizeTrace for RecordingTrace {
        fn adjustment(&self, _kind: ChartKind, rule: AdjustRule, _delta: Size) {
            self.0.borrow_mut().push(rule);
        }
    }

    #[test]
    fn trace_sees_each_applied_rule_once() {
        let trace = RecordingTrace(RefCell::new(Vec::new()));
        let set = ConstraintSet::builtin();
        let _ = set.analyzed(ChartKind::Bar, Some(&bar_content(20, 3)), &trace);
        let rules = trace.0.into_inner();
        assert_eq!(
            rules,
            alloc::vec![AdjustRule::CategoryCount, AdjustRule::SeriesLegend]
        );
    }
}
