use crate::shared::Result;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// NewType wrapper for a package name with validation.
///
/// Names are opaque identifiers taken verbatim from the graph file.
/// Comparison is case-sensitive, exact string equality; ordering is
/// lexicographic so that sorted displays are deterministic.
///
/// Bitbake recipe names may contain characters like `+` (gtk+3) so no
/// character whitelist is applied beyond rejecting embedded whitespace,
/// which the space-separated record format cannot produce anyway.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        if name.chars().any(char::is_whitespace) {
            anyhow::bail!("Package name cannot contain whitespace");
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
