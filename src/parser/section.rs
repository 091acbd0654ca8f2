//! Resource section extraction.

/// The header that introduces a file's flat data assignments.
const SECTION_MARKER: &str = "[resource]";

/// Return everything after the `[resource]` marker, or `None` when the file
/// has no resource section.
///
/// Sub-resource and external-resource sections preceding the marker are
/// discarded wholesale; no further structure is validated here.
pub fn resource_section(source: &str) -> Option<&str> {
    source
        .find(SECTION_MARKER)
        .map(|start| &source[start + SECTION_MARKER.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_after_marker() {
        let source = "[gd_resource type=\"Resource\" format=3]\n\n[resource]\nhp = 10\n";

        let section = resource_section(source).unwrap();

        assert_eq!(section, "\nhp = 10\n");
    }

    #[test]
    fn test_no_section() {
        let source = "[gd_resource type=\"Resource\" format=3]\n\n[sub_resource id=1]\n";

        assert!(resource_section(source).is_none());
    }

    #[test]
    fn test_empty_input() {
        assert!(resource_section("").is_none());
    }

    #[test]
    fn test_marker_at_end_of_file() {
        let section = resource_section("[resource]").unwrap();

        assert_eq!(section, "");
    }

    #[test]
    fn test_ignores_preceding_sections() {
        let source = "[ext_resource path=\"res://x.png\" id=1]\n[resource]\nname = \"a\"";

        let section = resource_section(source).unwrap();

        assert_eq!(section, "\nname = \"a\"");
    }
}
