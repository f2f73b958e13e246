//! # Rendering Module
//!
//! Turns structured command results into terminal text. Every function here returns a
//! `String` so output can be tested without capturing stdout; `commands.rs` does the
//! printing.
//!
//! Layout math (column widths, padding) is done on the plain text with `unicode-width`
//! before any color is applied, so Thai labels and ANSI escapes do not throw the columns
//! off.

use bmilogapp::api::{Assessment, CmdMessage};
use bmilogapp::error::BmiError;
use bmilogapp::locale::Texts;
use bmilogapp::model::Record;
use chrono::{DateTime, Local, Utc};
use unicode_width::UnicodeWidthStr;

use super::styles::{header, muted, paint_category, paint_message};

const COLUMN_GAP: &str = "  ";
const EMPTY_HISTORY: &str = "No measurements yet. Add one with `bmilog add <weight> <height>`.";

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        out.push_str(&paint_message(&message.content, message.level).to_string());
        out.push('\n');
    }
    out
}

/// The result panel: value, label, and the two advice lines.
pub fn render_assessment(assessment: &Assessment, texts: &Texts, decimals: u32) -> String {
    let value = format!("{:.*}", decimals as usize, assessment.bmi);
    format!(
        "{} {}  {}\n{}{}\n{}{}\n",
        header("BMI"),
        header(&value),
        paint_category(assessment.label, assessment.category),
        texts.exercise_prefix,
        assessment.advice.exercise,
        texts.diet_prefix,
        assessment.advice.diet,
    )
}

/// Text for the error slot. Input errors get the localized inline message.
pub fn render_error(err: &BmiError, texts: &Texts) -> String {
    match texts.input_error(err) {
        Some(inline) => inline.to_string(),
        None => err.to_string(),
    }
}

/// History table, one row per record in the order given.
pub fn render_table(records: &[Record], decimals: u32) -> String {
    if records.is_empty() {
        return format!("{}\n", muted(EMPTY_HISTORY));
    }

    let headers = ["ID", "Date", "Weight", "Height", "BMI", "Category", ""];
    let rows: Vec<[String; 7]> = records
        .iter()
        .map(|r| {
            [
                r.id.clone(),
                format_date(r.date),
                format_number(r.weight_kg),
                format_number(r.height_cm),
                format!("{:.*}", decimals as usize, r.bmi),
                r.category.clone(),
                format_time_ago(r.date),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.width());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = String::new();
    let head: Vec<String> = headers
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad_right(h, *w))
        .collect();
    out.push_str(&header(head.join(COLUMN_GAP).trim_end()).to_string());
    out.push('\n');

    for (record, row) in records.iter().zip(rows.iter()) {
        let mut cells: Vec<String> = Vec::with_capacity(row.len());
        for (i, (cell, w)) in row.iter().zip(widths.iter()).enumerate() {
            let padded = pad_right(cell, *w);
            let styled = match i {
                0 => muted(&padded).to_string(),
                5 => paint_category(&padded, record.band()).to_string(),
                6 => muted(&padded).to_string(),
                _ => padded,
            };
            cells.push(styled);
        }
        out.push_str(cells.join(COLUMN_GAP).trim_end());
        out.push('\n');
    }
    out
}

fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

fn format_date(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Whole numbers without a trailing `.0`, others as entered.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmilogapp::api::MessageLevel;
    use bmilogapp::commands::compute::assess;
    use bmilogapp::config::BmiConfig;
    use bmilogapp::locale::{texts, Language};

    fn plain() {
        colored::control::set_override(false);
    }

    fn record(id: &str, bmi: f64, category: &str) -> Record {
        let two_days_ago = Utc::now() - chrono::Duration::days(2);
        Record::new(id.to_string(), two_days_ago, 70.0, 175.5, bmi, category)
    }

    #[test]
    fn empty_table_has_hint() {
        plain();
        assert!(render_table(&[], 2).contains("bmilog add"));
    }

    #[test]
    fn table_has_header_and_one_row_per_record() {
        plain();
        let out = render_table(
            &[record("111", 22.857142, "Normal"), record("222", 31.2, "Obese")],
            2,
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].starts_with("111"));
        assert!(lines[1].contains("22.86"));
        assert!(lines[1].contains("175.5"));
        assert!(lines[1].contains(" 70 "));
        assert!(lines[2].contains("31.20"));
    }

    #[test]
    fn table_respects_decimals() {
        plain();
        let out = render_table(&[record("1", 22.857142, "Normal")], 1);
        assert!(out.contains("22.9"));
        assert!(!out.contains("22.86"));
    }

    #[test]
    fn thai_labels_keep_columns_aligned() {
        plain();
        let out = render_table(
            &[record("1", 22.0, "ปกติ"), record("2", 27.0, "น้ำหนักเกิน")],
            2,
        );
        let lines: Vec<&str> = out.lines().collect();
        let col = |line: &str| line.find("ago").map(|i| line[..i].width());
        assert_eq!(col(lines[1]), col(lines[2]));
    }

    #[test]
    fn assessment_shows_value_label_and_advice() {
        plain();
        let config = BmiConfig::default();
        let assessment = assess(70.0, 175.0, &config);
        let out = render_assessment(&assessment, texts(Language::En), 2);
        assert!(out.contains("BMI 22.86  Normal"));
        assert!(out.contains("Exercise: Strength training + cardio"));
        assert!(out.contains("Diet: Eat from all food groups"));
    }

    #[test]
    fn input_errors_are_localized() {
        let th = texts(Language::Th);
        assert_eq!(render_error(&BmiError::MissingInput, th), "กรุณากรอกข้อมูลให้ครบ");
        assert_eq!(
            render_error(&BmiError::Store("disk".into()), th),
            "Store error: disk"
        );
    }

    #[test]
    fn messages_are_one_per_line() {
        plain();
        let out = render_messages(&[
            CmdMessage::success("one"),
            CmdMessage {
                level: MessageLevel::Info,
                content: "two".into(),
            },
        ]);
        assert_eq!(out, "one\ntwo\n");
    }
}
