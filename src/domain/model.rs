use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::lenient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown experience level: {}", s))
    }
}

/// Metadata for one field of professional practice, loaded from a domain text file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainProfile {
    pub name: String,
    pub description: String,
    pub core_skills: Vec<String>,
    pub specializations: Vec<String>,
    pub tools_and_technologies: Vec<String>,
    pub industry_standards: Vec<String>,
    pub career_levels: Vec<String>,
    pub certification_paths: Vec<String>,
    pub key_companies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillDetail {
    #[serde(deserialize_with = "lenient::string")]
    pub skill_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub importance_level: String,
    #[serde(deserialize_with = "lenient::string")]
    pub time_to_master: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub prerequisites: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub resources: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub industry_applications: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub proficiency_metrics: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseDetail {
    #[serde(deserialize_with = "lenient::string")]
    pub course_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub platform: String,
    #[serde(deserialize_with = "lenient::string")]
    pub link: String,
    #[serde(deserialize_with = "lenient::string")]
    pub duration: String,
    #[serde(deserialize_with = "lenient::string")]
    pub difficulty_level: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub prerequisites: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub key_topics: Vec<String>,
    #[serde(deserialize_with = "lenient::boolean")]
    pub certification: bool,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub price: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectDetail {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub skills_practiced: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub difficulty_level: String,
    #[serde(deserialize_with = "lenient::string")]
    pub estimated_duration: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub resources_needed: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub learning_outcomes: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub implementation_steps: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerPathDetail {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string")]
    pub salary_range: String,
    #[serde(deserialize_with = "lenient::string")]
    pub required_experience: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub key_responsibilities: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub required_skills: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub growth_opportunities: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub industry_demand: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub typical_job_titles: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobListing {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub platform: String,
    pub link: String,
    pub posted_date: String,
    pub description: String,
}

/// Aggregate recommendation for one (domain, level) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerGuidance {
    #[serde(deserialize_with = "lenient::string")]
    pub domain_overview: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub current_industry_trends: Vec<String>,
    #[serde(deserialize_with = "lenient::records")]
    pub skill_roadmap: Vec<SkillDetail>,
    #[serde(deserialize_with = "lenient::records")]
    pub recommended_courses: Vec<CourseDetail>,
    #[serde(deserialize_with = "lenient::records")]
    pub project_suggestions: Vec<ProjectDetail>,
    #[serde(deserialize_with = "lenient::records")]
    pub career_growth_paths: Vec<CareerPathDetail>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub certifications_needed: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub networking_suggestions: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub interview_preparation: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub industry_resources: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parsing_is_case_insensitive() {
        assert_eq!("beginner".parse::<ExperienceLevel>(), Ok(ExperienceLevel::Beginner));
        assert_eq!(" ADVANCED ".parse::<ExperienceLevel>(), Ok(ExperienceLevel::Advanced));
        assert!("expert".parse::<ExperienceLevel>().is_err());
        assert_eq!(ExperienceLevel::Intermediate.to_string(), "Intermediate");
    }

    #[test]
    fn test_guidance_defaults_are_empty() {
        let guidance: CareerGuidance = serde_json::from_str("{}").unwrap();
        assert_eq!(guidance, CareerGuidance::default());
        assert!(guidance.skill_roadmap.is_empty());
        assert!(guidance.domain_overview.is_empty());
    }

    #[test]
    fn test_coerces_loose_model_output() {
        let raw = serde_json::json!({
            "domain_overview": null,
            "current_industry_trends": "AI everywhere",
            "recommended_courses": [{
                "course_name": "Intro",
                "duration": 8,
                "certification": "yes",
                "price": null,
                "key_topics": ["a", 2, null]
            }],
            "skill_roadmap": null,
            "unknown_field": {"nested": true}
        });

        let guidance: CareerGuidance = serde_json::from_value(raw).unwrap();
        assert_eq!(guidance.domain_overview, "");
        assert_eq!(guidance.current_industry_trends, vec!["AI everywhere"]);
        assert!(guidance.skill_roadmap.is_empty());

        let course = &guidance.recommended_courses[0];
        assert_eq!(course.duration, "8");
        assert!(course.certification);
        assert_eq!(course.price, None);
        assert_eq!(course.key_topics, vec!["a", "2"]);
    }
}
