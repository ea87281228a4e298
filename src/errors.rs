//! Unified error handling.
//!
//! Error types are generated by a macro so every variant carries a stable
//! code and a type name.

use std::fmt;

/// Generates the error enum.
///
/// Produces:
/// - the enum definition
/// - code() - stable error code
/// - error_type() - error type name
/// - message() - error detail
/// - snake_case convenience constructors
macro_rules! define_escola_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum EscolaError {
            $($variant(String),)*
        }

        impl EscolaError {
            pub fn code(&self) -> &'static str {
                match self {
                    $(EscolaError::$variant(_) => $code,)*
                }
            }

            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EscolaError::$variant(_) => $type_name,)*
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    $(EscolaError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl EscolaError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EscolaError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_escola_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    FileOperation("E006", "File Operation Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    DateParse("E010", "Date Parse Error"),
    Authentication("E011", "Authentication Error"),
    Authorization("E012", "Authorization Error"),
    MailDelivery("E013", "Mail Delivery Error"),
    ReportRender("E014", "Report Render Error"),
}

impl EscolaError {
    /// Colored output for development builds.
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for EscolaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EscolaError {}

impl From<sea_orm::DbErr> for EscolaError {
    fn from(err: sea_orm::DbErr) -> Self {
        EscolaError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for EscolaError {
    fn from(err: std::io::Error) -> Self {
        EscolaError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for EscolaError {
    fn from(err: serde_json::Error) -> Self {
        EscolaError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for EscolaError {
    fn from(err: chrono::ParseError) -> Self {
        EscolaError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EscolaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(EscolaError::cache_connection("test").code(), "E001");
        assert_eq!(EscolaError::database_config("test").code(), "E003");
        assert_eq!(EscolaError::validation("test").code(), "E007");
        assert_eq!(EscolaError::authentication("test").code(), "E011");
        assert_eq!(EscolaError::mail_delivery("test").code(), "E013");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            EscolaError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            EscolaError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = EscolaError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = EscolaError::validation("Invalid URL");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid URL"));
    }
}
