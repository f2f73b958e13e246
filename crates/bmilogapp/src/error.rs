use thiserror::Error;

#[derive(Error, Debug)]
pub enum BmiError {
    #[error("Weight and height are both required")]
    MissingInput,

    #[error("{field} {value} is outside the accepted range {min}-{max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Stored records are unreadable ({0}); run `bmilog clear` to reset them")]
    CorruptData(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl BmiError {
    /// True for errors caused by what the user typed rather than by the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(self, BmiError::MissingInput | BmiError::OutOfRange { .. })
    }
}

pub type Result<T> = std::result::Result<T, BmiError>;
