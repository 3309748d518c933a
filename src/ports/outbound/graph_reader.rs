use crate::shared::Result;
use std::path::Path;

/// GraphFileReader port for reading graph-file contents
///
/// This port abstracts the file system operations needed to read the
/// pn-depends graph description produced by bitbake.
pub trait GraphFileReader {
    /// Reads the graph file at the given path
    ///
    /// # Arguments
    /// * `path` - Path to the graph file
    ///
    /// # Returns
    /// The raw content of the graph file as a string
    ///
    /// # Errors
    /// Returns an error if:
    /// - The graph file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_graph(&self, path: &Path) -> Result<String>;
}
