//! # BMI Engine
//!
//! Pure functions, total on any finite positive input. Validation happens before these
//! are called (see [`crate::commands::compute`]).
//!
//! Bands are half-open and lower-inclusive:
//!
//! | BMI            | Category    |
//! |----------------|-------------|
//! | `< 18.5`       | underweight |
//! | `18.5 ..< 25`  | normal      |
//! | `25 ..< 30`    | overweight  |
//! | `>= 30`        | obese       |

use crate::locale::{texts, Language};
use crate::model::Category;
use serde::Serialize;

pub const UNDERWEIGHT_BELOW: f64 = 18.5;
pub const OVERWEIGHT_FROM: f64 = 25.0;
pub const OBESE_FROM: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub exercise: &'static str,
    pub diet: &'static str,
}

/// `weight / (height in metres)^2`, unrounded.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let m = height_cm / 100.0;
    weight_kg / (m * m)
}

pub fn categorize(bmi: f64) -> Category {
    if bmi < UNDERWEIGHT_BELOW {
        Category::Underweight
    } else if bmi < OVERWEIGHT_FROM {
        Category::Normal
    } else if bmi < OBESE_FROM {
        Category::Overweight
    } else {
        Category::Obese
    }
}

pub fn advise(bmi: f64, language: Language) -> Advice {
    texts(language).advice(categorize(bmi))
}
