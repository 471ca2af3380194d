//! Error types for the contacts server.

use async_graphql::ErrorExtensions;
use thiserror::Error;

/// Result type alias for contacts server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the contacts server.
#[derive(Error, Debug)]
pub enum Error {
    // ===== Contact Errors =====
    #[error("Name must be unique: {0}")]
    DuplicateName(String),

    // ===== Server Errors =====
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// GraphQL error code reported in the `extensions.code` field.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateName(_) => "BAD_USER_INPUT",
            Self::Io(_) | Self::Config(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Check if this error was caused by the caller's input.
    pub fn is_user_input(&self) -> bool {
        matches!(self, Self::DuplicateName(_))
    }
}

impl ErrorExtensions for Error {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code().to_string());
            if let Self::DuplicateName(name) = self {
                e.set("invalidArgs", name.clone());
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let dup = Error::DuplicateName("Gabriela".to_string());
        assert_eq!(dup.to_string(), "Name must be unique: Gabriela");

        let config = Error::Config("invalid socket address".to_string());
        assert_eq!(
            config.to_string(),
            "Configuration error: invalid socket address"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::DuplicateName("x".to_string()).code(),
            "BAD_USER_INPUT"
        );
        assert_eq!(
            Error::Config("x".to_string()).code(),
            "INTERNAL_SERVER_ERROR"
        );

        assert!(Error::DuplicateName("x".to_string()).is_user_input());
        assert!(!Error::Config("x".to_string()).is_user_input());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err: Error = io.into();
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn test_duplicate_name_extensions() {
        let err = Error::DuplicateName("Sara".to_string()).extend();
        assert_eq!(err.message, "Name must be unique: Sara");

        let json = serde_json::to_value(err.extensions.as_ref().unwrap()).unwrap();
        assert_eq!(json["code"], "BAD_USER_INPUT");
        assert_eq!(json["invalidArgs"], "Sara");
    }
}
