use crate::ports::outbound::GraphFileReader;
use crate::shared::error::DependsError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter for reading graph files from the file system
///
/// Implements the GraphFileReader port with the usual safety checks
/// before touching file contents.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read file metadata: {}", e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read file: {}", e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFileReader for FileSystemReader {
    fn read_graph(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(DependsError::GraphFileNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "The graph file \"{}\" does not exist.\n   \
                     Generate it with bitbake -g <recipe>, or point at an existing file with the --file option.",
                    path.display()
                ),
            }
            .into());
        }

        self.safe_read_file(path).map_err(|e| {
            DependsError::GraphFileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_graph_success() {
        let temp_dir = TempDir::new().unwrap();
        let graph_path = temp_dir.path().join("pn-depends.dot");
        fs::write(&graph_path, "\"A\" -> \"B\"\n").unwrap();

        let reader = FileSystemReader::new();
        let content = reader.read_graph(&graph_path).unwrap();

        assert_eq!(content, "\"A\" -> \"B\"\n");
    }

    #[test]
    fn test_read_graph_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let graph_path = temp_dir.path().join("pn-depends.dot");

        let reader = FileSystemReader::new();
        let result = reader.read_graph(&graph_path);

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Graph file not found"));
        assert!(err_string.contains("bitbake -g"));
    }

    #[test]
    fn test_read_graph_directory_rejected() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_graph(temp_dir.path());

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to read graph file"));
    }
}
