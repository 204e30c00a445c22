//! Error handling for sysview

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("System information error: {message}")]
    System { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("GPU query error: {message}")]
    Gpu { message: String },

    #[error("Logging error: {message}")]
    Logging { message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: toml::de::Error,
    },
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, AppError>;

/// Helper functions for creating specific error types
impl AppError {
    pub fn system<S: Into<String>>(message: S) -> Self {
        Self::System {
            message: message.into(),
        }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn gpu<S: Into<String>>(message: S) -> Self {
        Self::Gpu {
            message: message.into(),
        }
    }

    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

impl From<flexi_logger::FlexiLoggerError> for AppError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        Self::logging(format!("Failed to start logger: {}", err))
    }
}
