use career_guide::core::knowledge::{default_profile, DEFAULT_DOMAIN_KEY, SAMPLE_DOMAIN_FILE};
use career_guide::KnowledgeBase;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_loads_prefixed_name_and_description() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("Cloud.txt"),
        "Name: X\nDescription: Y\n\nCore Skills:\n- Networking\n- Linux\n",
    )
    .unwrap();

    let kb = KnowledgeBase::load(dir.path());

    assert_eq!(kb.domain_names(), vec!["Cloud"]);
    let profile = kb.get("Cloud").unwrap();
    assert_eq!(profile.name, "X");
    assert_eq!(profile.description, "Y");
    assert_eq!(profile.core_skills, vec!["Networking", "Linux"]);
    assert!(profile.key_companies.is_empty());
}

#[test]
fn test_file_in_place_of_directory_gives_default() {
    let dir = TempDir::new().unwrap();
    let not_a_dir = dir.path().join("domains");
    fs::write(&not_a_dir, "plain file").unwrap();

    let kb = KnowledgeBase::load(&not_a_dir);

    assert_eq!(kb.len(), 1);
    assert_eq!(kb.get(DEFAULT_DOMAIN_KEY), Some(&default_profile()));
}

#[test]
fn test_missing_directory_is_created_and_seeded() {
    let dir = TempDir::new().unwrap();
    let domains_dir = dir.path().join("nested").join("domain_data");

    let kb = KnowledgeBase::load(&domains_dir);

    assert!(domains_dir.join(SAMPLE_DOMAIN_FILE).is_file());
    assert_eq!(kb.domain_names(), vec!["Software Development"]);
    let profile = kb.find("software development").unwrap();
    assert_eq!(profile.name, "Software Development");
    assert_eq!(profile.core_skills.len(), 5);
    assert_eq!(profile.career_levels.last().map(String::as_str), Some("Software Architect"));
}

#[test]
fn test_existing_domains_are_not_reseeded() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Security.txt"), "Name: Security\n").unwrap();
    fs::write(dir.path().join("notes.md"), "not a domain").unwrap();

    let kb = KnowledgeBase::load(dir.path());

    assert!(!dir.path().join(SAMPLE_DOMAIN_FILE).exists());
    assert_eq!(kb.domain_names(), vec!["Security"]);
}

#[test]
fn test_latin1_file_is_decoded() {
    let dir = TempDir::new().unwrap();
    // "Café" in windows-1252
    fs::write(dir.path().join("Food.txt"), b"Name: Caf\xe9\nDescription: Kitchens\n").unwrap();

    let kb = KnowledgeBase::load(dir.path());

    assert_eq!(kb.get("Food").unwrap().name, "Café");
}

#[test]
fn test_unknown_domain_gets_empty_profile() {
    let dir = TempDir::new().unwrap();
    let kb = KnowledgeBase::load(dir.path());

    let profile = kb.profile_or_default("Underwater Basket Weaving");
    assert!(profile.name.is_empty());
    assert!(profile.core_skills.is_empty());
}
