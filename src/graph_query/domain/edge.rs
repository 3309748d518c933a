use super::PackageName;

/// A single dependency edge tokenized from one line of the graph file.
///
/// Replaces raw field-count checks scattered through a parse loop with one
/// typed record: `name` depends on `depend`, and `annotated` records
/// whether the line carried a trailing style annotation (the form bitbake
/// uses to mark an edge that closes a loop).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub name: PackageName,
    pub depend: PackageName,
    pub annotated: bool,
}

impl EdgeRecord {
    /// Tokenizes one line of the graph file into an edge record.
    ///
    /// Accepted shapes, split on single spaces:
    /// - `"<name>" -> "<depend>"` (3 fields)
    /// - `"<name>" -> "<depend>" [style=...]` (4 fields; the content of the
    ///   fourth field is ignored, only its presence matters)
    ///
    /// Returns `None` for every other line: wrong field count, a second
    /// field that is not the literal `->` marker, or quoted names that are
    /// empty once the surrounding quote characters are stripped.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim_end();
        let fields: Vec<&str> = line.split(' ').collect();

        let annotated = match fields.len() {
            3 => false,
            4 => true,
            _ => return None,
        };

        if fields[1] != "->" {
            return None;
        }

        let name = PackageName::new(strip_outer(fields[0]).to_string()).ok()?;
        let depend = PackageName::new(strip_outer(fields[2]).to_string()).ok()?;

        Some(Self {
            name,
            depend,
            annotated,
        })
    }
}

/// Strips exactly the first and last character of a field, removing the
/// surrounding quote characters of a graph-file identifier.
fn strip_outer(field: &str) -> &str {
    let mut chars = field.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
