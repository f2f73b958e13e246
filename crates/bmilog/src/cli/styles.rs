use bmilogapp::api::MessageLevel;
use bmilogapp::model::Category;
use colored::{ColoredString, Colorize};

/// Terminal styling for a category band, keyed the same way as its style tag.
pub fn paint_category(text: &str, category: Category) -> ColoredString {
    match category {
        Category::Underweight => text.cyan(),
        Category::Normal => text.green(),
        Category::Overweight => text.yellow(),
        Category::Obese => text.red().bold(),
    }
}

pub fn paint_message(text: &str, level: MessageLevel) -> ColoredString {
    match level {
        MessageLevel::Info => text.dimmed(),
        MessageLevel::Success => text.green(),
        MessageLevel::Error => text.red(),
    }
}

pub fn header(text: &str) -> ColoredString {
    text.bold()
}

pub fn muted(text: &str) -> ColoredString {
    text.dimmed()
}
