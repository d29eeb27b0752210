use crate::core::DomainProfile;
use crate::utils::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const DEFAULT_DOMAIN_KEY: &str = "default";
pub const SAMPLE_DOMAIN_FILE: &str = "Software Development.txt";

const SAMPLE_DOMAIN: &str = "Name: Software Development
Description: Modern software development encompassing various programming languages, frameworks, and methodologies.

Core Skills:
- Programming fundamentals
- Object-oriented design
- Version control (Git)
- Testing and debugging
- API development

Specializations:
- Full-stack development
- Mobile development
- Cloud computing
- DevOps
- Security

Tools and Technologies:
- Python/JavaScript/Java
- Docker & Kubernetes
- AWS/Azure/GCP
- CI/CD tools
- Database systems

Industry Standards:
- Agile methodology
- Clean code principles
- Microservices architecture
- DevSecOps
- Cloud-native development

Career Levels:
- Junior Developer
- Mid-level Developer
- Senior Developer
- Tech Lead
- Software Architect

Certification Paths:
- AWS Certified Developer
- Microsoft Azure Developer
- Google Cloud Developer
- Certified Kubernetes Administrator
- CompTIA Security+

Key Companies:
- Google
- Microsoft
- Amazon
- Meta
- Apple
";

/// Domain profiles keyed by the stem of the file they were loaded from.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    domains: BTreeMap<String, DomainProfile>,
}

impl KnowledgeBase {
    /// Loads every `.txt` file in `dir`. Never fails: an unreadable directory
    /// or one without domains yields the built-in default profile.
    pub fn load<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        let mut domains = match load_domains(dir) {
            Ok(domains) => domains,
            Err(e) => {
                tracing::error!("Error loading domains from {}: {}", dir.display(), e);
                BTreeMap::new()
            }
        };

        if domains.is_empty() {
            tracing::warn!("No domain profiles available, using built-in default");
            domains.insert(DEFAULT_DOMAIN_KEY.to_string(), default_profile());
        }

        Self { domains }
    }

    pub fn from_profiles<I: IntoIterator<Item = (String, DomainProfile)>>(profiles: I) -> Self {
        Self {
            domains: profiles.into_iter().collect(),
        }
    }

    pub fn domain_names(&self) -> Vec<&str> {
        self.domains.keys().map(String::as_str).collect()
    }

    pub fn get(&self, name: &str) -> Option<&DomainProfile> {
        self.domains.get(name)
    }

    /// Looks `name` up by key, then case-insensitively by key or profile name.
    pub fn find(&self, name: &str) -> Option<&DomainProfile> {
        self.get(name).or_else(|| {
            self.domains
                .iter()
                .find(|(key, profile)| {
                    key.eq_ignore_ascii_case(name) || profile.name.eq_ignore_ascii_case(name)
                })
                .map(|(_, profile)| profile)
        })
    }

    /// Unknown domains get an empty profile, which the fallback generator
    /// still turns into a usable plan.
    pub fn profile_or_default(&self, name: &str) -> DomainProfile {
        self.find(name).cloned().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

fn load_domains(dir: &Path) -> Result<BTreeMap<String, DomainProfile>> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        tracing::info!("Created directory: {}", dir.display());
    }

    if !has_domain_files(dir)? {
        fs::write(dir.join(SAMPLE_DOMAIN_FILE), SAMPLE_DOMAIN)?;
        tracing::info!("Seeded {} with {}", dir.display(), SAMPLE_DOMAIN_FILE);
    }

    let mut domains = BTreeMap::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !is_domain_file(&path) {
            continue;
        }
        let Some(key) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        match fs::read(&path) {
            Ok(bytes) => {
                let content = decode_text(&bytes);
                tracing::debug!("Loaded {} ({} bytes)", path.display(), bytes.len());
                domains.insert(key.to_string(), parse_domain_content(&content));
            }
            Err(e) => tracing::error!("Error reading {}: {}", path.display(), e),
        }
    }

    Ok(domains)
}

fn is_domain_file(path: &Path) -> bool {
    path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("txt")
}

fn has_domain_files(dir: &Path) -> Result<bool> {
    for entry in fs::read_dir(dir)? {
        if is_domain_file(&entry?.path()) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// UTF-8 first; anything else is read as Windows-1252, which covers latin-1.
pub fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.strip_prefix('\u{feff}').unwrap_or(text).to_string(),
        Err(_) => {
            tracing::debug!("Content is not valid UTF-8, decoding as windows-1252");
            let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            text.into_owned()
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Name,
    Description,
    CoreSkills,
    Specializations,
    Tools,
    Standards,
    CareerLevels,
    Certifications,
    Companies,
    Unknown,
}

impl Section {
    fn from_header(header: &str) -> Self {
        let key = header
            .to_lowercase()
            .replace('&', " and ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");

        match key.as_str() {
            "name" => Section::Name,
            "description" => Section::Description,
            "core_skills" => Section::CoreSkills,
            "specializations" => Section::Specializations,
            "tools_and_technologies" => Section::Tools,
            "industry_standards" => Section::Standards,
            "career_levels" => Section::CareerLevels,
            "certification_paths" => Section::Certifications,
            "key_companies" => Section::Companies,
            _ => Section::Unknown,
        }
    }
}

fn section_list(profile: &mut DomainProfile, section: Section) -> Option<&mut Vec<String>> {
    match section {
        Section::CoreSkills => Some(&mut profile.core_skills),
        Section::Specializations => Some(&mut profile.specializations),
        Section::Tools => Some(&mut profile.tools_and_technologies),
        Section::Standards => Some(&mut profile.industry_standards),
        Section::CareerLevels => Some(&mut profile.career_levels),
        Section::Certifications => Some(&mut profile.certification_paths),
        Section::Companies => Some(&mut profile.key_companies),
        Section::Name | Section::Description | Section::Unknown => None,
    }
}

/// Parses the line-oriented domain format. Malformed input degrades to a
/// partially empty profile.
pub fn parse_domain_content(content: &str) -> DomainProfile {
    let mut profile = DomainProfile::default();
    let mut current: Option<Section> = None;

    for line in content.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("Name:") {
            let rest = rest.trim();
            profile.name = rest.to_string();
            current = rest.is_empty().then_some(Section::Name);
        } else if let Some(rest) = line.strip_prefix("Description:") {
            let rest = rest.trim();
            profile.description = rest.to_string();
            current = rest.is_empty().then_some(Section::Description);
        } else if let Some(header) = line.strip_suffix(':') {
            current = Some(Section::from_header(header));
        } else if let Some(item) = line.strip_prefix('-') {
            if let Some(list) = current.and_then(|s| section_list(&mut profile, s)) {
                list.push(item.trim().to_string());
            }
        } else {
            match current {
                Some(Section::Name) => profile.name = line.to_string(),
                Some(Section::Description) => profile.description = line.to_string(),
                _ => {}
            }
        }
    }

    profile
}

pub fn default_profile() -> DomainProfile {
    let list = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    DomainProfile {
        name: "General Technology".to_string(),
        description: "General technology and computing skills".to_string(),
        core_skills: list(&["Programming", "System Design", "Problem Solving"]),
        specializations: list(&["Software Development", "Data Science", "Cloud Computing"]),
        tools_and_technologies: list(&["Programming Languages", "Databases", "Cloud Platforms"]),
        industry_standards: list(&["Best Practices", "Security", "Performance"]),
        career_levels: list(&["Entry Level", "Mid Level", "Senior Level"]),
        certification_paths: list(&["General Certifications"]),
        key_companies: list(&["Tech Companies"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_basic_profile() {
        let profile = parse_domain_content(
            "Name: X\nDescription: Y\n\nCore Skills:\n- First skill\n-   Second skill  \n",
        );
        assert_eq!(profile.name, "X");
        assert_eq!(profile.description, "Y");
        assert_eq!(profile.core_skills, vec!["First skill", "Second skill"]);
    }

    #[test]
    fn test_unknown_sections_are_dropped() {
        let profile = parse_domain_content(
            "Hobbies:\n- Chess\nTools & Technologies:\n- Rust\nKey Companies:\n- Acme\n",
        );
        assert_eq!(profile.tools_and_technologies, vec!["Rust"]);
        assert_eq!(profile.key_companies, vec!["Acme"]);
        assert!(profile.core_skills.is_empty());
    }

    #[test]
    fn test_name_on_following_line() {
        let profile = parse_domain_content("Name:\nData Science\nDescription:\nNumbers at scale\n");
        assert_eq!(profile.name, "Data Science");
        assert_eq!(profile.description, "Numbers at scale");
    }

    #[test]
    fn test_items_without_section_are_ignored() {
        let profile = parse_domain_content("- orphan\nrandom text\n");
        assert_eq!(profile, DomainProfile::default());
    }

    #[test]
    fn test_decode_latin1_fallback() {
        let bytes = b"Name: Caf\xe9 Ops\n";
        let text = decode_text(bytes);
        assert_eq!(parse_domain_content(&text).name, "Café Ops");
    }

    #[test]
    fn test_missing_directory_is_seeded() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("domain_data");

        let kb = KnowledgeBase::load(&dir);

        assert!(dir.join(SAMPLE_DOMAIN_FILE).exists());
        assert_eq!(kb.domain_names(), vec!["Software Development"]);
        let profile = kb.get("Software Development").unwrap();
        assert_eq!(profile.name, "Software Development");
        assert_eq!(profile.core_skills.len(), 5);
        assert_eq!(profile.career_levels.len(), 5);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let kb = KnowledgeBase::from_profiles(vec![(
            "data_science".to_string(),
            DomainProfile {
                name: "Data Science".to_string(),
                ..Default::default()
            },
        )]);
        assert!(kb.find("DATA_SCIENCE").is_some());
        assert!(kb.find("data science").is_some());
        assert_eq!(kb.profile_or_default("nope"), DomainProfile::default());
    }
}
