use std::io::Write;
use std::path::Path;

use campsite_booker::config::load_config;
use tempfile::NamedTempFile;

const SAMPLE_YAML: &str = r#"
campgrounds:
  - name: "Two Jack Lakeside"
    url_slug: "TwoJackLakeside"
  - name: "Tunnel Mountain Village I"
    url_slug: "TunnelMountainVillageI"

dates:
  check_in: "2026-07-10"
  check_out: "2026-07-13"
  flexible_days: 2

party:
  size: 4
  equipment: tent

preferred_sections: ["Loops 22-27"]
preferred_sites: ["A21", "A22"]

notifications:
  sound: true
  desktop: false
"#;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_full_config() {
    let file = write_config(SAMPLE_YAML);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.campgrounds.len(), 2);
    assert_eq!(config.campgrounds[0].name, "Two Jack Lakeside");
    assert_eq!(config.campgrounds[0].url_slug, "TwoJackLakeside");
    assert_eq!(config.dates.check_in.to_string(), "2026-07-10");
    assert_eq!(config.dates.check_out.to_string(), "2026-07-13");
    assert_eq!(config.dates.flexible_days, 2);
    assert_eq!(config.party.size, 4);
    assert_eq!(config.party.equipment, "tent");
    assert_eq!(config.preferred_sections, vec!["Loops 22-27"]);
    assert_eq!(config.preferred_sites, vec!["A21", "A22"]);
    assert!(config.notifications.sound);
    assert!(!config.notifications.desktop);
}

#[test]
fn date_variants_come_from_the_loaded_request() {
    let file = write_config(SAMPLE_YAML);
    let config = load_config(file.path()).unwrap();

    let variants = config.dates.request().date_variants();
    assert_eq!(variants.len(), 5);
    assert_eq!(variants[0].check_in, config.dates.check_in);
    assert_eq!(variants[0].check_out, config.dates.check_out);
}

#[test]
fn missing_file_is_an_error() {
    let err = load_config(Path::new("/nonexistent/config.yaml")).unwrap_err();
    assert!(err.to_string().contains("config file not found"));
}

#[test]
fn reversed_dates_are_rejected() {
    let file = write_config(
        r#"
campgrounds:
  - name: "Two Jack Lakeside"
    url_slug: "TwoJackLakeside"

dates:
  check_in: "2026-07-13"
  check_out: "2026-07-10"
"#,
    );
    assert!(load_config(file.path()).is_err());
}
