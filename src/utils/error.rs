use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Service not found: {name}")]
    ServiceNotFound { name: String },

    #[error("Addon not found: {key}")]
    AddonNotFound { key: String },

    #[error("Unsupported currency '{currency}' for {item}")]
    UnsupportedCurrency { currency: String, item: String },

    #[error("Invalid complexity tier: {value}")]
    InvalidComplexity { value: String },

    #[error("Invalid quote status: {value}")]
    InvalidStatus { value: String },

    #[error("Transition from '{from}' to '{to}' is not allowed")]
    IllegalTransition { from: String, to: String },

    #[error("Quote not found: {id}")]
    QuoteNotFound { id: u64 },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PricingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PricingError::ServiceNotFound { .. }
            | PricingError::AddonNotFound { .. }
            | PricingError::QuoteNotFound { .. } => ErrorCategory::NotFound,
            PricingError::UnsupportedCurrency { .. }
            | PricingError::InvalidComplexity { .. }
            | PricingError::InvalidStatus { .. }
            | PricingError::IllegalTransition { .. }
            | PricingError::ValidationError { .. } => ErrorCategory::Input,
            PricingError::ConfigValidationError { .. }
            | PricingError::InvalidConfigValueError { .. }
            | PricingError::MissingConfigError { .. } => ErrorCategory::Configuration,
            PricingError::IoError(_) | PricingError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::NotFound => ErrorSeverity::Medium,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給呼叫端的處理建議
    pub fn recovery_suggestion(&self) -> String {
        match self {
            PricingError::ServiceNotFound { .. } => {
                "Run the `services` command to list the available service names".to_string()
            }
            PricingError::AddonNotFound { .. } => {
                "Check the addon keys declared in the catalog".to_string()
            }
            PricingError::UnsupportedCurrency { .. } => {
                "Use one of the currencies listed in the catalog settings".to_string()
            }
            PricingError::InvalidComplexity { .. } => {
                "Use one of: basic, intermediate, advanced".to_string()
            }
            PricingError::InvalidStatus { .. } => {
                "Use one of: pending, reviewed, quoted, accepted, rejected, completed".to_string()
            }
            PricingError::IllegalTransition { .. } => {
                "Follow the workflow order or switch to the permissive lifecycle policy"
                    .to_string()
            }
            PricingError::QuoteNotFound { .. } => "Check the quote id".to_string(),
            PricingError::ValidationError { .. } => "Fix the request fields and retry".to_string(),
            PricingError::ConfigValidationError { .. }
            | PricingError::InvalidConfigValueError { .. }
            | PricingError::MissingConfigError { .. } => {
                "Fix the catalog file and reload it".to_string()
            }
            PricingError::IoError(_) => "Check the file path and permissions".to_string(),
            PricingError::SerializationError(_) => "Check that the input is valid JSON".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::NotFound => format!("Not found: {}", self),
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Configuration => format!("Catalog configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PricingError>;
