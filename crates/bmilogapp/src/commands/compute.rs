//! Compute action: validate, compute, categorize, advise, record, refresh.
//!
//! Validation runs in a fixed order and stops at the first failure:
//!
//! 1. Both inputs must parse as non-zero numbers, else [`BmiError::MissingInput`].
//!    `NaN` counts as missing; infinities are numbers and fail the range check.
//! 2. Both must fall inside the configured [`Bounds`](crate::config::Bounds), else
//!    [`BmiError::OutOfRange`].
//!
//! A failure writes nothing.

use crate::config::BmiConfig;
use crate::engine::{self, Advice};
use crate::error::{BmiError, Result};
use crate::locale::texts;
use crate::model::Category;
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;
use serde::Serialize;

use super::{history, CmdMessage, CmdResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub bmi: f64,
    pub category: Category,
    pub label: &'static str,
    pub style_tag: &'static str,
    pub advice: Advice,
}

pub fn assess(weight_kg: f64, height_cm: f64, config: &BmiConfig) -> Assessment {
    let bmi = engine::compute_bmi(weight_kg, height_cm);
    let category = engine::categorize(bmi);
    Assessment {
        bmi,
        category,
        label: texts(config.language).label(category),
        style_tag: category.style_tag(),
        advice: engine::advise(bmi, config.language),
    }
}

/// Empty, non-numeric, `NaN` and zero all count as missing.
pub fn parse_input(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan() && *v != 0.0)
}

pub fn validate(weight_input: &str, height_input: &str, config: &BmiConfig) -> Result<(f64, f64)> {
    let (Some(weight), Some(height)) = (parse_input(weight_input), parse_input(height_input))
    else {
        return Err(BmiError::MissingInput);
    };
    config.bounds.check(weight, height)?;
    Ok((weight, height))
}

pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    config: &BmiConfig,
    weight_input: &str,
    height_input: &str,
) -> Result<CmdResult> {
    let (weight, height) = validate(weight_input, height_input, config)?;
    let assessment = assess(weight, height, config);

    let record = store.append(weight, height, assessment.bmi, assessment.label)?;

    let mut result = CmdResult::default().with_history(history::refresh(store)?);
    result.add_message(CmdMessage::success(format!(
        "{} {}: BMI {:.*} ({})",
        texts(config.language).recorded,
        record.id,
        config.decimals as usize,
        assessment.bmi,
        assessment.label
    )));
    result.assessment = Some(assessment);
    result.created = Some(record);
    Ok(result)
}
