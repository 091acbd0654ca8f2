//! Line-by-line splitting of a resource section into key/value assignments.

/// Keys starting with this prefix are script-binding metadata, not data.
const SCRIPT_PREFIX: &str = "script";

/// Lazy iterator over the `key = value` assignments in a section body.
///
/// Skips blank lines, `#` comment lines, and `script`-prefixed bindings.
/// Lines that do not match `identifier = rest-of-line` are silently
/// dropped; hand-edited files routinely contain stray formatting and a
/// tolerant scan keeps the rest of the file usable.
#[derive(Debug, Clone)]
pub struct Assignments<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> Assignments<'a> {
    /// Iterate the assignments of a resource section body.
    pub fn new(section: &'a str) -> Self {
        Self {
            lines: section.lines(),
        }
    }
}

impl<'a> Iterator for Assignments<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(SCRIPT_PREFIX) {
                continue;
            }
            if let Some(pair) = split_assignment(line) {
                return Some(pair);
            }
        }
        None
    }
}

/// Split a trimmed line into `(key, raw_value)`.
///
/// The key must be a bare identifier (`[A-Za-z0-9_]+`) and the value must
/// be non-empty once trimmed.
fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let (key, rest) = line.split_once('=')?;
    let key = key.trim_end();
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    let value = rest.trim();
    if value.is_empty() {
        return None;
    }
    Some((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(section: &str) -> Vec<(&str, &str)> {
        Assignments::new(section).collect()
    }

    #[test]
    fn test_basic_assignments() {
        let pairs = collect("hp = 100\nname = \"Slime\"\n");

        assert_eq!(pairs, vec![("hp", "100"), ("name", "\"Slime\"")]);
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let pairs = collect("\n# a comment\n\nhp = 5\n   \n# another\n");

        assert_eq!(pairs, vec![("hp", "5")]);
    }

    #[test]
    fn test_skips_script_bindings() {
        let section = "script = ExtResource(\"1_abc\")\nscript/source = \"...\"\nhp = 5\n";

        assert_eq!(collect(section), vec![("hp", "5")]);
    }

    #[test]
    fn test_skips_lines_without_assignment_shape() {
        let section = "not an assignment\nmetadata/_custom = 1\nhp = 5\n= orphan\nempty =\n";

        // "metadata/_custom" has a non-identifier key, "= orphan" has no key,
        // "empty =" has no value
        assert_eq!(collect(section), vec![("hp", "5")]);
    }

    #[test]
    fn test_value_containing_equals() {
        let pairs = collect("formula = \"a = b + 1\"\n");

        assert_eq!(pairs, vec![("formula", "\"a = b + 1\"")]);
    }

    #[test]
    fn test_spacing_variants() {
        let pairs = collect("a=1\nb  =  2\n  c = 3\n");

        assert_eq!(pairs, vec![("a", "1"), ("b", "2"), ("c", "3")]);
    }

    #[test]
    fn test_restartable() {
        let section = "a = 1\nb = 2\n";
        let assignments = Assignments::new(section);

        let first: Vec<_> = assignments.clone().collect();
        let second: Vec<_> = assignments.collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_section() {
        assert!(collect("").is_empty());
    }
}
