use oe_depends::prelude::*;
use std::path::Path;

/// Mock GraphFileReader for testing
pub struct MockGraphReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockGraphReader {
    pub fn new(content: String) -> Self {
        Self {
            content,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl GraphFileReader for MockGraphReader {
    fn read_graph(&self, _path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock graph read failure");
        }
        Ok(self.content.clone())
    }
}
