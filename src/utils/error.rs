use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlcometerError {
    #[error("Weight is missing or not a positive number")]
    MissingWeight,

    #[error("Unknown sex '{value}', expected 'male' or 'female'")]
    InvalidSex { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AlcometerError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            AlcometerError::MissingWeight => "Please enter your weight.".to_string(),
            AlcometerError::InvalidSex { value } => {
                format!("'{}' is not a recognised sex", value)
            }
            AlcometerError::IoError(e) => format!("Could not access a file: {}", e),
            AlcometerError::CsvError(e) => format!("Could not process CSV data: {}", e),
            AlcometerError::SerializationError(e) => {
                format!("Could not produce JSON output: {}", e)
            }
            AlcometerError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            AlcometerError::InvalidConfigValueError { field, value, .. } => {
                format!("Configuration value '{}' for '{}' is not valid", value, field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AlcometerError::MissingWeight => {
                "Pass a positive number of kilograms with --weight, e.g. --weight 70"
            }
            AlcometerError::InvalidSex { .. } => "Use either 'male' or 'female'",
            AlcometerError::IoError(_) => "Check that the path exists and is readable",
            AlcometerError::CsvError(_) => {
                "Make sure the CSV has the header row: weight,bottles,hours,sex"
            }
            AlcometerError::SerializationError(_) => "Retry with --format text",
            AlcometerError::ConfigValidationError { .. }
            | AlcometerError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again"
            }
        }
    }

    /// 依錯誤類型決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            AlcometerError::MissingWeight | AlcometerError::InvalidSex { .. } => 2,
            AlcometerError::ConfigValidationError { .. }
            | AlcometerError::InvalidConfigValueError { .. } => 1,
            AlcometerError::IoError(_)
            | AlcometerError::CsvError(_)
            | AlcometerError::SerializationError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, AlcometerError>;
