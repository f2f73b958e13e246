//! # Trend Chart
//!
//! A text line chart of BMI over time, oldest measurement on the left.
//!
//! ```text
//!    26.1 ┤        ●
//!         │╌╌╌╌╌╌╌╌╌╌╌╌╌
//!         │    ●
//!    22.9 ┤●           ●
//!         └─────────────
//!          2024-01-02  2024-03-01
//! ```
//!
//! Category thresholds (18.5, 25, 30) that fall inside the plotted range are drawn as
//! dashed rows so a reader can see which band each point sits in.
//!
//! [`HistoryView`] owns the current chart. Every refresh goes through
//! [`HistoryView::replace`], which drops the previous chart before building the next one;
//! there is never more than one chart alive.

use bmilogapp::engine::{OBESE_FROM, OVERWEIGHT_FROM, UNDERWEIGHT_BELOW};
use bmilogapp::model::{History, Record};

use super::render::render_table;

pub const CHART_HEIGHT: usize = 8;
pub const MAX_POINTS: usize = 40;
const MIN_SPAN: f64 = 2.0;
const LABEL_WIDTH: usize = 7;
const COLUMN_STEP: usize = 3;
const POINT: char = '●';
const THRESHOLD: char = '╌';

#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    lines: Vec<String>,
}

impl TrendChart {
    /// `records` must already be in ascending date order.
    pub fn build(records: &[Record]) -> Self {
        if records.is_empty() {
            return Self {
                lines: vec!["No measurements to chart.".to_string()],
            };
        }

        let shown = &records[records.len().saturating_sub(MAX_POINTS)..];
        let (lo, hi) = value_range(shown);
        let row_of = |v: f64| -> usize {
            let scaled = (v - lo) / (hi - lo) * (CHART_HEIGHT - 1) as f64;
            (scaled.round().max(0.0) as usize).min(CHART_HEIGHT - 1)
        };

        let width = (shown.len() - 1) * COLUMN_STEP + 1;
        let mut grid = vec![vec![' '; width]; CHART_HEIGHT];

        for threshold in [UNDERWEIGHT_BELOW, OVERWEIGHT_FROM, OBESE_FROM] {
            if threshold > lo && threshold < hi {
                grid[row_of(threshold)].fill(THRESHOLD);
            }
        }
        for (i, record) in shown.iter().enumerate() {
            grid[row_of(record.bmi)][i * COLUMN_STEP] = POINT;
        }

        let mut lines = Vec::with_capacity(CHART_HEIGHT + 3);
        for row in (0..CHART_HEIGHT).rev() {
            let cells: String = grid[row].iter().collect();
            let cells = cells.trim_end();
            if row == 0 || row == CHART_HEIGHT - 1 {
                let value = lo + (hi - lo) * row as f64 / (CHART_HEIGHT - 1) as f64;
                lines.push(format!(
                    "{:>width$.1} ┤{}",
                    value,
                    cells,
                    width = LABEL_WIDTH
                ));
            } else {
                lines.push(format!("{:>width$} │{}", "", cells, width = LABEL_WIDTH));
            }
        }
        lines.push(format!(
            "{:>width$} └{}",
            "",
            "─".repeat(width),
            width = LABEL_WIDTH
        ));
        lines.push(date_axis(shown));

        if shown.len() < records.len() {
            lines.push(format!(
                "(showing the last {} of {} measurements)",
                shown.len(),
                records.len()
            ));
        }

        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

fn value_range(records: &[Record]) -> (f64, f64) {
    let (lo, hi) = records
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
            (lo.min(r.bmi), hi.max(r.bmi))
        });
    if hi - lo < MIN_SPAN {
        let mid = (hi + lo) / 2.0;
        (mid - MIN_SPAN / 2.0, mid + MIN_SPAN / 2.0)
    } else {
        (lo, hi)
    }
}

fn date_axis(records: &[Record]) -> String {
    let first = records[0].date.format("%Y-%m-%d").to_string();
    let indent = " ".repeat(LABEL_WIDTH + 2);
    if records.len() == 1 {
        return format!("{}{}", indent, first);
    }
    let last = records[records.len() - 1].date.format("%Y-%m-%d").to_string();
    let width = (records.len() - 1) * COLUMN_STEP + 1;
    let gap = width.saturating_sub(first.len() + last.len()).max(2);
    format!("{}{}{}{}", indent, first, " ".repeat(gap), last)
}

/// Presentation state for the history: the rendered table and the one live chart.
pub struct HistoryView {
    decimals: u32,
    table: String,
    chart: Option<TrendChart>,
}

impl HistoryView {
    pub fn new(decimals: u32) -> Self {
        Self {
            decimals,
            table: String::new(),
            chart: None,
        }
    }

    /// Dispose of the previous rendering and build a new one from `history`.
    pub fn replace(&mut self, history: &History) {
        self.chart.take();
        self.table = render_table(&history.table, self.decimals);
        self.chart = Some(TrendChart::build(&history.chart));
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn chart(&self) -> Option<&TrendChart> {
        self.chart.as_ref()
    }
}
