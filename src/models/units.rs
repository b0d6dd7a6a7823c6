use once_cell::sync::Lazy;
use regex::Regex;

/// Whether a discovered booking unit is a section (loop / lettered area that
/// expands into individual sites) or an individually bookable site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Section,
    Site,
}

/// A booking unit as displayed by the reservation site. Discovered fresh on
/// every search, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookableUnit {
    pub name: String,
    pub kind: UnitKind,
}

impl BookableUnit {
    pub fn section(name: impl Into<String>) -> Self {
        BookableUnit {
            name: name.into(),
            kind: UnitKind::Section,
        }
    }

    pub fn site(name: impl Into<String>) -> Self {
        BookableUnit {
            name: name.into(),
            kind: UnitKind::Site,
        }
    }
}

impl AsRef<BookableUnit> for BookableUnit {
    fn as_ref(&self) -> &BookableUnit {
        self
    }
}

/// Label prefixes the site uses for section/loop buttons (case-insensitive).
const SECTION_LABEL_PREFIXES: [&str; 3] = ["site ", "loops", "loop "];

/// Trailing availability markers on button labels. Longest first, so
/// "Not Available" is not left as a dangling "Not".
const AVAILABILITY_MARKERS: [&str; 3] = ["Not Available", "Unavailable", "Available"];

static HAS_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());

/// True if the label looks like a section/loop button rather than an
/// individual site.
///
/// Section buttons:   "Site A  Available", "Loops 22-27  Available"
/// Individual sites:  "Site A49  Available" (digit right after the letter)
pub fn is_section_label(label: &str) -> bool {
    let lower = label.to_lowercase();
    if !SECTION_LABEL_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return false;
    }
    if lower.starts_with("site ") {
        // "Site A" is a section, "Site A49" is an individual site.
        if let Some(identifier) = label[5..].split_whitespace().next() {
            if HAS_DIGIT.is_match(identifier) {
                return false;
            }
        }
    }
    true
}

/// Extract the canonical identifier from a raw button label.
///
/// "Site A  Available"           -> "A"
/// "Site Loops 22-27  Available" -> "Loops 22-27"
/// "A50"                         -> "A50" (already canonical)
pub fn unit_name(label: &str) -> String {
    let mut part = label.trim();
    if part.len() >= 5 && part.as_bytes()[..5].eq_ignore_ascii_case(b"site ") {
        part = part[5..].trim();
    }
    for marker in AVAILABILITY_MARKERS {
        if let Some(stripped) = strip_suffix_ignore_case(part, marker) {
            part = stripped;
            break;
        }
    }
    part.trim().to_string()
}

/// Reduce an identifier to its alphabetic characters, upper-cased:
/// "A21" -> "A", "Loops 22-27" -> "LOOPS". Used to match a preferred site
/// number to the section it lives in.
pub fn section_key(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect::<String>()
        .to_uppercase()
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let (s_bytes, suf_bytes) = (s.as_bytes(), suffix.as_bytes());
    if s_bytes.len() >= suf_bytes.len()
        && s_bytes[s_bytes.len() - suf_bytes.len()..].eq_ignore_ascii_case(suf_bytes)
    {
        Some(&s[..s.len() - suffix.len()])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lettered_section_label() {
        assert!(is_section_label("Site A  Available"));
    }

    #[test]
    fn loops_section_label() {
        assert!(is_section_label("Loops 22-27  Available"));
    }

    #[test]
    fn loop_section_label() {
        assert!(is_section_label("Loop B  Available"));
    }

    #[test]
    fn individual_site_with_digit_is_not_a_section() {
        assert!(!is_section_label("Site A49  Available"));
    }

    #[test]
    fn plain_numbered_site_is_not_a_section() {
        assert!(!is_section_label("Site 22  Available"));
    }

    #[test]
    fn unrelated_label_is_not_a_section() {
        assert!(!is_section_label("Reserve"));
    }

    #[test]
    fn section_label_check_is_case_insensitive() {
        assert!(is_section_label("LOOPS 5-10  Available"));
        assert!(is_section_label("site b  Available"));
    }

    #[test]
    fn extracts_lettered_section_name() {
        assert_eq!(unit_name("Site A  Available"), "A");
    }

    #[test]
    fn extracts_loops_section_name() {
        assert_eq!(unit_name("Site Loops 22-27  Available"), "Loops 22-27");
    }

    #[test]
    fn extracts_not_available_marker() {
        assert_eq!(unit_name("Site B  Not Available"), "B");
        assert_eq!(unit_name("Site C  Unavailable"), "C");
    }

    #[test]
    fn canonical_name_passes_through() {
        assert_eq!(unit_name("A50"), "A50");
    }

    #[test]
    fn section_key_strips_digits_and_uppercases() {
        assert_eq!(section_key("A21"), "A");
        assert_eq!(section_key("Loops 22-27"), "LOOPS");
        assert_eq!(section_key("22"), "");
    }
}
