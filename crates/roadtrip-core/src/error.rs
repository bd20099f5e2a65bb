//! Error types and exit codes for roadtrip
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed input files, unknown country, no path)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input, unknown country, no path (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading or querying the country graph
#[derive(Error, Debug)]
pub enum RoadTripError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    // Data errors (exit code 3)
    #[error("unknown country: {input}")]
    UnknownCountry { input: String },

    #[error("no path found between {from} and {to}")]
    NoPathFound { from: String, to: String },

    #[error("malformed data in {}:{line}: {reason}", .source_file.display())]
    MalformedGraphData {
        source_file: PathBuf,
        line: usize,
        reason: String,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },
}

impl RoadTripError {
    /// Create an error for a country name that could not be resolved
    pub fn unknown_country(input: impl Into<String>) -> Self {
        RoadTripError::UnknownCountry {
            input: input.into(),
        }
    }

    /// Create an error for two valid countries with no connecting route
    pub fn no_path(from: impl Into<String>, to: impl Into<String>) -> Self {
        RoadTripError::NoPathFound {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create an error for a malformed line in one of the data files
    pub fn malformed(
        source_file: impl Into<PathBuf>,
        line: usize,
        reason: impl std::fmt::Display,
    ) -> Self {
        RoadTripError::MalformedGraphData {
            source_file: source_file.into(),
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RoadTripError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RoadTripError::UnknownFormat(_) => ExitCode::Usage,

            RoadTripError::UnknownCountry { .. }
            | RoadTripError::NoPathFound { .. }
            | RoadTripError::MalformedGraphData { .. } => ExitCode::Data,

            RoadTripError::Io(_)
            | RoadTripError::Json(_)
            | RoadTripError::Toml(_)
            | RoadTripError::FailedOperationWithTarget { .. } => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RoadTripError::UnknownFormat(_) => "unknown_format",
            RoadTripError::UnknownCountry { .. } => "unknown_country",
            RoadTripError::NoPathFound { .. } => "no_path_found",
            RoadTripError::MalformedGraphData { .. } => "malformed_graph_data",
            RoadTripError::Io(_) => "io_error",
            RoadTripError::Json(_) => "json_error",
            RoadTripError::Toml(_) => "toml_error",
            RoadTripError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let RoadTripError::MalformedGraphData {
            source_file, line, ..
        } = self
        {
            error_obj["file"] = serde_json::json!(source_file.display().to_string());
            error_obj["line"] = serde_json::json!(line);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for roadtrip operations
pub type Result<T> = std::result::Result<T, RoadTripError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            RoadTripError::UnknownFormat("records".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            RoadTripError::unknown_country("Wakanda").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            RoadTripError::no_path("Madagascar", "France").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            RoadTripError::io_operation("read", "borders.txt", "denied").exit_code(),
            ExitCode::Failure
        );
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_malformed_display() {
        let err = RoadTripError::malformed("borders.txt", 7, "missing distance");
        assert_eq!(
            err.to_string(),
            "malformed data in borders.txt:7: missing distance"
        );
    }

    #[test]
    fn test_to_json_shape() {
        let json = RoadTripError::unknown_country("Wakanda").to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "unknown_country");
        assert_eq!(json["error"]["message"], "unknown country: Wakanda");

        let json = RoadTripError::malformed("capdist.csv", 2, "short row").to_json();
        assert_eq!(json["error"]["file"], "capdist.csv");
        assert_eq!(json["error"]["line"], 2);
    }
}
