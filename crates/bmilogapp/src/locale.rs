//! # Display Language
//!
//! Category labels, advice and user-facing error messages exist in two languages.
//! Thai (`th`) carries the wording the tool was first written with; English (`en`) is the
//! default. The stored `category` field of a record is written in whatever language was
//! active when the record was created and is never translated afterwards.

use crate::engine::Advice;
use crate::error::BmiError;
use crate::model::Category;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Th,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Th => write!(f, "th"),
        }
    }
}

impl FromStr for Language {
    type Err = BmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "th" => Ok(Language::Th),
            other => Err(BmiError::Config(format!(
                "Unknown language '{}' (expected 'en' or 'th')",
                other
            ))),
        }
    }
}

/// All the fixed strings for one language.
#[derive(Debug)]
pub struct Texts {
    labels: [&'static str; 4],
    advice: [Advice; 4],
    pub exercise_prefix: &'static str,
    pub diet_prefix: &'static str,
    pub missing_input: &'static str,
    pub out_of_range: &'static str,
    pub clear_prompt: &'static str,
    pub cleared: &'static str,
    pub cancelled: &'static str,
    /// Followed by the new record's id.
    pub recorded: &'static str,
    /// Followed by the deleted id.
    pub deleted: &'static str,
    /// Followed by the id that matched nothing.
    pub not_found: &'static str,
}

impl Texts {
    pub fn label(&self, category: Category) -> &'static str {
        self.labels[category.band()]
    }

    pub fn advice(&self, category: Category) -> Advice {
        self.advice[category.band()]
    }

    /// Inline message for a validation failure, `None` for every other error.
    pub fn input_error(&self, err: &BmiError) -> Option<&'static str> {
        match err {
            BmiError::MissingInput => Some(self.missing_input),
            BmiError::OutOfRange { .. } => Some(self.out_of_range),
            _ => None,
        }
    }
}

const EN: Texts = Texts {
    labels: ["Underweight", "Normal", "Overweight", "Obese"],
    advice: [
        Advice {
            exercise: "Strength training 3–4 days/week",
            diet: "Add 300–500 kcal/day, focus on protein such as eggs, beans, chicken breast",
        },
        Advice {
            exercise: "Strength training + cardio, 2–3 days/week each",
            diet: "Eat from all food groups, cut down on sugary drinks",
        },
        Advice {
            exercise: "Cardio 30–40 minutes, 4–5 days/week",
            diet: "Less fried food, more vegetables, lean protein",
        },
        Advice {
            exercise: "Brisk walk 20–30 minutes daily, strength training 2–3 days",
            diet: "Cut 500–700 kcal/day, cut down on sugary drinks",
        },
    ],
    exercise_prefix: "🏋️ Exercise: ",
    diet_prefix: "🍽️ Diet: ",
    missing_input: "Please fill in both weight and height",
    out_of_range: "Height/weight value looks wrong",
    clear_prompt: "Clear the whole history?",
    cleared: "History cleared.",
    cancelled: "Operation cancelled.",
    recorded: "Recorded",
    deleted: "Record deleted:",
    not_found: "No record with id",
};

const TH: Texts = Texts {
    labels: ["น้ำหนักน้อย", "ปกติ", "น้ำหนักเกิน", "อ้วน"],
    advice: [
        Advice {
            exercise: "เน้นเวทเทรนนิ่ง 3–4 วัน/สัปดาห์",
            diet: "เพิ่มพลังงาน 300–500 kcal/วัน เน้นโปรตีน เช่น ไข่ ถั่ว อกไก่",
        },
        Advice {
            exercise: "เวทเทรนนิ่ง + คาร์ดิโอ อย่างละ 2–3 วัน/สัปดาห์",
            diet: "กินครบ 3 หมู่ ลดน้ำหวาน",
        },
        Advice {
            exercise: "คาร์ดิโอ 30–40 นาที 4–5 วัน/สัปดาห์",
            diet: "ลดของทอด เพิ่มผัก เน้นโปรตีนไขมันต่ำ",
        },
        Advice {
            exercise: "เดินเร็ว 20–30 นาทีทุกวัน, เวท 2–3 วัน",
            diet: "ลดแคล 500–700 kcal/วัน ลดน้ำหวาน",
        },
    ],
    exercise_prefix: "🏋️ ออกกำลังกาย: ",
    diet_prefix: "🍽️ อาหาร: ",
    missing_input: "กรุณากรอกข้อมูลให้ครบ",
    out_of_range: "ค่าส่วนสูง/น้ำหนักผิดปกติ",
    clear_prompt: "ล้างประวัติทั้งหมด?",
    cleared: "ล้างประวัติแล้ว",
    cancelled: "ยกเลิกแล้ว",
    recorded: "บันทึกแล้ว",
    deleted: "ลบรายการแล้ว:",
    not_found: "ไม่พบรายการรหัส",
};

pub fn texts(language: Language) -> &'static Texts {
    match language {
        Language::En => &EN,
        Language::Th => &TH,
    }
}
