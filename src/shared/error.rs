use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// different types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - including informational "not found" query outcomes
    Success = 0,
    /// The depth argument was not a valid non-negative integer
    InvalidDepth = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing graph file, I/O error, config error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidDepth => write!(f, "Invalid Depth (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency graph queries.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
///
/// "Package not found" and "no wildcard match" conditions are NOT errors:
/// they are informational query outcomes reported on stdout.
#[derive(Debug, Error)]
pub enum DependsError {
    #[error("Graph file not found: {path}\n\n💡 Hint: {suggestion}")]
    GraphFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read graph file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    GraphFileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Bad depth argument: {value}")]
    InvalidDepth { value: String },

    #[error("Invalid config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML and recognized fields")]
    ConfigError { path: PathBuf, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidDepth.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::InvalidDepth), "Invalid Depth (1)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_graph_file_not_found_display() {
        let error = DependsError::GraphFileNotFound {
            path: PathBuf::from("/build/pn-depends.dot"),
            suggestion: "Generate the file with bitbake -g <recipe>".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Graph file not found"));
        assert!(display.contains("/build/pn-depends.dot"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("bitbake -g"));
    }

    #[test]
    fn test_graph_file_read_error_display() {
        let error = DependsError::GraphFileReadError {
            path: PathBuf::from("/build/pn-depends.dot"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read graph file"));
        assert!(display.contains("Permission denied"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = DependsError::FileWriteError {
            path: PathBuf::from("/out/report.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/out/report.json"));
    }

    #[test]
    fn test_invalid_depth_display() {
        let error = DependsError::InvalidDepth {
            value: "abc".to_string(),
        };
        assert_eq!(format!("{}", error), "Bad depth argument: abc");
    }

    #[test]
    fn test_config_error_display() {
        let error = DependsError::ConfigError {
            path: PathBuf::from("oe-depends.config.yml"),
            details: "unknown format value".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid config file"));
        assert!(display.contains("unknown format value"));
    }
}
