//! Deterministic choice of which discovered booking unit to act on.
//!
//! Both functions are pure and stateless: same inputs, same pick. Absence of
//! any candidate is an `Option::None`, never an error; the caller moves on
//! to the next date variant or campground.

use crate::models::units::{BookableUnit, section_key, unit_name};

/// Choose a section to expand.
///
/// Priority:
///   1. first `preferred_sections` entry matching some section name
///      (case-insensitive substring), first matching section in list order
///   2. section derived from a preferred site number ("A21" -> section "A")
///   3. first section in list order
pub fn choose_section<'a, T>(
    sections: &'a [T],
    preferred_sections: &[String],
    preferred_sites: &[String],
) -> Option<&'a T>
where
    T: AsRef<BookableUnit>,
{
    if sections.is_empty() {
        return None;
    }

    for pref in preferred_sections {
        let wanted = pref.to_lowercase();
        if let Some(section) = sections
            .iter()
            .find(|s| s.as_ref().name.to_lowercase().contains(&wanted))
        {
            return Some(section);
        }
    }

    for pref in preferred_sites {
        let key = section_key(pref);
        if key.is_empty() {
            continue;
        }
        if let Some(section) = sections
            .iter()
            .find(|s| section_key(&unit_name(&s.as_ref().name)) == key)
        {
            return Some(section);
        }
    }

    sections.first()
}

/// Choose an individual site: first preference entry (in order) that is a
/// case-insensitive substring of some site's name, else the first site.
pub fn choose_site<'a, T>(sites: &'a [T], preferred_sites: &[String]) -> Option<&'a T>
where
    T: AsRef<BookableUnit>,
{
    if sites.is_empty() {
        return None;
    }

    for pref in preferred_sites {
        let wanted = pref.trim().to_uppercase();
        if let Some(site) = sites
            .iter()
            .find(|s| s.as_ref().name.to_uppercase().contains(&wanted))
        {
            return Some(site);
        }
    }

    sites.first()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::units::UnitKind;

    fn sites(names: &[&str]) -> Vec<BookableUnit> {
        names.iter().map(|n| BookableUnit::site(*n)).collect()
    }

    fn sections(names: &[&str]) -> Vec<BookableUnit> {
        names.iter().map(|n| BookableUnit::section(*n)).collect()
    }

    fn prefs(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn site_preferred_entry_matched() {
        let candidates = sites(&["22A", "22B", "22C"]);
        let chosen = choose_site(&candidates, &prefs(&["22B"])).unwrap();
        assert_eq!(chosen.name, "22B");
        assert_eq!(chosen.kind, UnitKind::Site);
    }

    #[test]
    fn site_match_is_case_insensitive() {
        let candidates = sites(&["A49", "A55"]);
        let chosen = choose_site(&candidates, &prefs(&["a49"])).unwrap();
        assert_eq!(chosen.name, "A49");
    }

    #[test]
    fn site_falls_back_to_first_when_nothing_matches() {
        let candidates = sites(&["22A", "22B"]);
        let chosen = choose_site(&candidates, &prefs(&["Z99"])).unwrap();
        assert_eq!(chosen.name, "22A");
    }

    #[test]
    fn site_empty_preferences_return_first() {
        let candidates = sites(&["A50"]);
        assert_eq!(choose_site(&candidates, &[]).unwrap().name, "A50");
    }

    #[test]
    fn site_no_candidates_returns_none() {
        let candidates: Vec<BookableUnit> = vec![];
        assert!(choose_site(&candidates, &prefs(&["A49"])).is_none());
    }

    #[test]
    fn section_explicit_preference_matched() {
        let candidates = sections(&["Loops 22-27", "Loops 5-10"]);
        let chosen = choose_section(&candidates, &prefs(&["Loops 22-27"]), &[]).unwrap();
        assert_eq!(chosen.name, "Loops 22-27");
    }

    #[test]
    fn section_substring_preference_matched() {
        let candidates = sections(&["Loops 1-5", "Loops 6-10"]);
        let chosen = choose_section(&candidates, &prefs(&["Loops 6"]), &[]).unwrap();
        assert_eq!(chosen.name, "Loops 6-10");
    }

    #[test]
    fn section_derived_from_preferred_site_number() {
        let candidates = sections(&["Site A", "Site B"]);
        let chosen = choose_section(&candidates, &[], &prefs(&["A21"])).unwrap();
        assert_eq!(chosen.name, "Site A");
    }

    #[test]
    fn explicit_section_preference_beats_derived() {
        let candidates = sections(&["Loops 1-5", "Loops 6-10"]);
        let chosen =
            choose_section(&candidates, &prefs(&["Loops 6"]), &prefs(&["1A"])).unwrap();
        assert_eq!(chosen.name, "Loops 6-10");
    }

    #[test]
    fn numeric_only_site_preference_cannot_derive_a_section() {
        let candidates = sections(&["Site A", "Site B"]);
        let chosen = choose_section(&candidates, &[], &prefs(&["22"])).unwrap();
        assert_eq!(chosen.name, "Site A");
    }

    #[test]
    fn section_falls_back_to_first() {
        let candidates = sections(&["Site A", "Site B"]);
        let chosen = choose_section(&candidates, &[], &[]).unwrap();
        assert_eq!(chosen.name, "Site A");
    }

    #[test]
    fn section_no_candidates_returns_none() {
        let candidates: Vec<BookableUnit> = vec![];
        assert!(choose_section(&candidates, &[], &[]).is_none());
    }

    #[test]
    fn selection_is_idempotent() {
        let candidates = sites(&["A49", "A55"]);
        let wanted = prefs(&["A55"]);
        let first = choose_site(&candidates, &wanted).unwrap();
        let second = choose_site(&candidates, &wanted).unwrap();
        assert_eq!(first, second);
    }
}
