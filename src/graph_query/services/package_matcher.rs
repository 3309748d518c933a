use crate::graph_query::domain::DependencyGraph;

/// PackageMatcher service resolving a user-supplied name or wildcard
/// pattern against the set of known package names.
///
/// A pattern without wildcard characters is returned as-is, even when the
/// name is unknown - existence is checked later by the traversal engine,
/// which reports "not found". Wildcard patterns are matched anchored over
/// the whole candidate name: `?` matches exactly one character, `*`
/// matches zero or more, every other character (including `.`) is literal.
pub struct PackageMatcher;

impl PackageMatcher {
    /// Resolves a pattern to the sorted, deduplicated list of matching
    /// known names. May be empty for a wildcard pattern nothing matches.
    pub fn resolve(pattern: &str, graph: &DependencyGraph) -> Vec<String> {
        if !pattern.contains(['*', '?']) {
            return vec![pattern.to_string()];
        }

        // known_names() iterates a BTreeSet, so the result is already
        // sorted and deduplicated.
        graph
            .known_names()
            .into_iter()
            .filter(|name| Self::wildcard_match(pattern, name))
            .map(str::to_string)
            .collect()
    }

    /// Anchored glob match. Iterative two-pointer scan with single-star
    /// backtracking; no recursion, linear in the common case.
    fn wildcard_match(pattern: &str, name: &str) -> bool {
        let pattern: Vec<char> = pattern.chars().collect();
        let name: Vec<char> = name.chars().collect();

        let mut p = 0;
        let mut n = 0;
        let mut backtrack: Option<(usize, usize)> = None;

        while n < name.len() {
            if p < pattern.len() && (pattern[p] == '?' || pattern[p] == name[n]) {
                p += 1;
                n += 1;
            } else if p < pattern.len() && pattern[p] == '*' {
                // Tentatively match zero characters; remember where to
                // resume if the rest of the pattern fails.
                backtrack = Some((p + 1, n));
                p += 1;
            } else if let Some((bp, bn)) = backtrack {
                // Let the last star swallow one more character.
                backtrack = Some((bp, bn + 1));
                p = bp;
                n = bn + 1;
            } else {
                return false;
            }
        }

        while p < pattern.len() && pattern[p] == '*' {
            p += 1;
        }

        p == pattern.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_query::services::GraphParser;

    fn graph_of(names: &[(&str, &str)]) -> DependencyGraph {
        let content: String = names
            .iter()
            .map(|(name, depend)| format!("\"{}\" -> \"{}\"\n", name, depend))
            .collect();
        GraphParser::parse(&content).graph
    }

    #[test]
    fn test_literal_pattern_returned_unconditionally() {
        let graph = graph_of(&[("busybox", "glibc")]);

        assert_eq!(
            PackageMatcher::resolve("busybox", &graph),
            vec!["busybox".to_string()]
        );
        // Unknown names pass through; the traversal reports "not found".
        assert_eq!(
            PackageMatcher::resolve("no-such-package", &graph),
            vec!["no-such-package".to_string()]
        );
    }

    #[test]
    fn test_star_prefix_match() {
        let graph = graph_of(&[
            ("foo", "foolib"),
            ("foobar", "glibc"),
            ("other", "foo"),
        ]);

        assert_eq!(
            PackageMatcher::resolve("foo*", &graph),
            vec!["foo".to_string(), "foobar".to_string(), "foolib".to_string()]
        );
    }

    #[test]
    fn test_question_mark_matches_exactly_one_char() {
        let graph = graph_of(&[("foo", "bar"), ("fo", "bar"), ("fooo", "bar")]);

        assert_eq!(
            PackageMatcher::resolve("f??", &graph),
            vec!["foo".to_string()]
        );
    }

    #[test]
    fn test_match_is_anchored() {
        let graph = graph_of(&[("libfoo", "glibc"), ("foolib", "glibc")]);

        // "foo*" must cover the whole name: "libfoo" contains "foo" but
        // does not start with it.
        assert_eq!(
            PackageMatcher::resolve("foo*", &graph),
            vec!["foolib".to_string()]
        );
        assert!(PackageMatcher::resolve("ib*", &graph).is_empty());
    }

    #[test]
    fn test_dot_is_literal() {
        let graph = graph_of(&[("glibc-2.39", "x"), ("glibc-2a39", "x")]);

        assert_eq!(
            PackageMatcher::resolve("glibc-2.*", &graph),
            vec!["glibc-2.39".to_string()]
        );
    }

    #[test]
    fn test_universe_includes_dependency_only_names() {
        // "glibc" never appears as a key, only as a target.
        let graph = graph_of(&[("busybox", "glibc")]);

        assert_eq!(
            PackageMatcher::resolve("gli*", &graph),
            vec!["glibc".to_string()]
        );
    }

    #[test]
    fn test_no_match_yields_empty() {
        let graph = graph_of(&[("busybox", "glibc")]);
        assert!(PackageMatcher::resolve("zzz*", &graph).is_empty());
    }

    #[test]
    fn test_interior_star_and_question() {
        let graph = graph_of(&[("gtk+3", "glib"), ("gtk+4", "glib"), ("gtkmm", "glib")]);

        assert_eq!(
            PackageMatcher::resolve("gtk+?", &graph),
            vec!["gtk+3".to_string(), "gtk+4".to_string()]
        );
        assert_eq!(
            PackageMatcher::resolve("g*m", &graph),
            vec!["gtkmm".to_string()]
        );
    }

    #[test]
    fn test_star_matches_zero_characters() {
        let graph = graph_of(&[("foo", "bar")]);
        assert_eq!(
            PackageMatcher::resolve("foo*", &graph),
            vec!["foo".to_string()]
        );
        assert_eq!(
            PackageMatcher::resolve("*foo*", &graph),
            vec!["foo".to_string()]
        );
    }
}
