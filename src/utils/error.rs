use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumerologyError {
    #[error("Invalid date for {field}: '{value}' ({reason})")]
    InvalidDate {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required value: {field}")]
    MissingConfig { field: String },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NumerologyError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            NumerologyError::InvalidDate { field, value, .. } => {
                format!("'{}' is not a usable date for {}", value, field)
            }
            NumerologyError::InvalidConfigValue { field, reason, .. } => {
                format!("The value given for {} is not valid: {}", field, reason)
            }
            NumerologyError::MissingConfig { field } => {
                format!("Please provide a value for {}", field)
            }
            NumerologyError::ConfigParse { .. } => "The profile file could not be read".to_string(),
            NumerologyError::Io(_) => "A file could not be opened".to_string(),
            NumerologyError::Serialization(_) => "The report could not be serialized".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            NumerologyError::InvalidDate { .. } => "Write dates as YYYY-MM-DD, e.g. 1990-11-22",
            NumerologyError::InvalidConfigValue { .. } => "Check the flag or profile value and try again",
            NumerologyError::MissingConfig { .. } => {
                "Pass --name and --dob, or point --profile at a TOML profile"
            }
            NumerologyError::ConfigParse { .. } => {
                "Make sure the profile is valid TOML with a [person] table"
            }
            NumerologyError::Io(_) => "Check that the path exists and is readable",
            NumerologyError::Serialization(_) => "Retry with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, NumerologyError>;
