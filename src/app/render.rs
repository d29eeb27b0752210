use crate::core::{CareerGuidance, CareerPathDetail, ExperienceLevel, JobListing};
use chrono::{DateTime, Local};
use std::fmt::Write;

/// Header information printed above a guidance report.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    pub domain: String,
    pub level: ExperienceLevel,
    pub generated_at: DateTime<Local>,
}

impl ReportMeta {
    pub fn now(domain: &str, level: ExperienceLevel) -> Self {
        Self {
            domain: domain.to_string(),
            level,
            generated_at: Local::now(),
        }
    }
}

fn bullets(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "- {}", item);
    }
}

fn labeled_bullets(out: &mut String, label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "**{}:**", label);
    bullets(out, items);
}

fn or_not_specified(value: &str) -> &str {
    if value.trim().is_empty() {
        "Not specified"
    } else {
        value
    }
}

pub fn render_guidance(guidance: &CareerGuidance, meta: &ReportMeta) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# 📊 Career Guidance: {} ({})", meta.domain, meta.level);
    let _ = writeln!(out, "_Generated {}_\n", meta.generated_at.format("%Y-%m-%d %H:%M"));

    let _ = writeln!(out, "## 🌐 Domain Overview\n\n{}\n", guidance.domain_overview);
    let _ = writeln!(out, "## Current Industry Trends\n");
    bullets(&mut out, &guidance.current_industry_trends);
    out.push('\n');

    render_skills(&mut out, guidance);
    render_courses(&mut out, guidance);
    render_projects(&mut out, guidance);
    render_career_paths(&mut out, guidance);
    render_resources(&mut out, guidance);

    out
}

fn render_skills(out: &mut String, guidance: &CareerGuidance) {
    if guidance.skill_roadmap.is_empty() {
        return;
    }
    let _ = writeln!(out, "## 🎯 Skill Roadmap\n");
    for skill in &guidance.skill_roadmap {
        let _ = writeln!(out, "### {}\n", skill.skill_name);
        let _ = writeln!(out, "**Importance Level:** {}  ", skill.importance_level);
        let _ = writeln!(out, "**Time to Master:** {}\n", skill.time_to_master);
        labeled_bullets(out, "Prerequisites", &skill.prerequisites);
        labeled_bullets(out, "Industry Applications", &skill.industry_applications);
        labeled_bullets(out, "Proficiency Metrics", &skill.proficiency_metrics);
        out.push('\n');
    }
}

fn render_courses(out: &mut String, guidance: &CareerGuidance) {
    if guidance.recommended_courses.is_empty() {
        return;
    }
    let _ = writeln!(out, "## 📚 Recommended Courses\n");
    for course in &guidance.recommended_courses {
        let _ = writeln!(out, "### {}\n", course.course_name);
        let _ = writeln!(out, "**Platform:** {}  ", course.platform);
        let _ = writeln!(out, "**Duration:** {}  ", course.duration);
        let _ = writeln!(out, "**Difficulty:** {}  ", course.difficulty_level);
        let _ = writeln!(
            out,
            "**Price:** {}  ",
            or_not_specified(course.price.as_deref().unwrap_or_default())
        );
        let _ = writeln!(
            out,
            "**Certification:** {}",
            if course.certification { "Yes" } else { "No" }
        );
        if !course.link.is_empty() {
            let _ = writeln!(out, "[Course Link]({})", course.link);
        }
        if !course.key_topics.is_empty() {
            let _ = writeln!(out, "**Key Topics:** {}", course.key_topics.join(", "));
        }
        out.push('\n');
    }
}

fn render_projects(out: &mut String, guidance: &CareerGuidance) {
    if guidance.project_suggestions.is_empty() {
        return;
    }
    let _ = writeln!(out, "## 💻 Project Suggestions\n");
    for project in &guidance.project_suggestions {
        let _ = writeln!(out, "### {}\n\n{}\n", project.title, project.description);
        let _ = writeln!(out, "**Difficulty:** {}  ", project.difficulty_level);
        let _ = writeln!(out, "**Duration:** {}", project.estimated_duration);
        if !project.skills_practiced.is_empty() {
            let _ = writeln!(out, "**Skills Practiced:** {}", project.skills_practiced.join(", "));
        }
        if !project.implementation_steps.is_empty() {
            let _ = writeln!(out, "**Implementation Steps:**");
            for (idx, step) in project.implementation_steps.iter().enumerate() {
                let _ = writeln!(out, "{}. {}", idx + 1, step);
            }
        }
        out.push('\n');
    }
}

fn render_career_paths(out: &mut String, guidance: &CareerGuidance) {
    if guidance.career_growth_paths.is_empty() {
        return;
    }
    let _ = writeln!(out, "## 🚀 Career Growth Paths\n");
    for path in &guidance.career_growth_paths {
        render_path(out, path);
    }
}

fn render_path(out: &mut String, path: &CareerPathDetail) {
    let _ = writeln!(out, "### {}\n\n{}\n", path.title, path.description);
    let _ = writeln!(out, "**Salary Range:** {}  ", or_not_specified(&path.salary_range));
    let _ = writeln!(out, "**Required Experience:** {}  ", or_not_specified(&path.required_experience));
    let _ = writeln!(out, "**Industry Demand:** {}", or_not_specified(&path.industry_demand));
    labeled_bullets(out, "Required Skills", &path.required_skills);
    labeled_bullets(out, "Key Responsibilities", &path.key_responsibilities);
    labeled_bullets(out, "Growth Opportunities", &path.growth_opportunities);
    out.push('\n');
}

fn render_resources(out: &mut String, guidance: &CareerGuidance) {
    let sections = [
        ("Certifications", &guidance.certifications_needed),
        ("Networking Suggestions", &guidance.networking_suggestions),
        ("Interview Preparation", &guidance.interview_preparation),
        ("Industry Resources", &guidance.industry_resources),
    ];
    if sections.iter().all(|(_, items)| items.is_empty()) {
        return;
    }

    let _ = writeln!(out, "## 🎓 Additional Resources\n");
    for (title, items) in sections {
        if items.is_empty() {
            continue;
        }
        let _ = writeln!(out, "### {}\n", title);
        bullets(out, items);
        out.push('\n');
    }
}

pub fn render_jobs(domain: &str, jobs: &[JobListing]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# 🔍 Recent Job Suggestions: {}\n", domain);

    if jobs.is_empty() {
        out.push_str("No recent jobs found for this domain.\n");
        return out;
    }

    for job in jobs {
        let _ = writeln!(out, "### {}\n", job.job_title);
        let _ = writeln!(out, "**Company:** {}  ", job.company);
        let _ = writeln!(out, "**Location:** {}  ", job.location);
        let _ = writeln!(out, "**Platform:** {}  ", job.platform);
        let _ = writeln!(out, "**Posted:** {}", job.posted_date);
        let _ = writeln!(out, "[Apply Here]({})", job.link);
        let _ = writeln!(out, "**Description:** {}\n\n---\n", job.description);
    }
    out
}

pub fn render_answer(question: &str, answer: &str) -> String {
    format!("# ❓ {}\n\n### Answer\n\n{}\n", question.trim(), answer.trim())
}

pub fn render_domains(names: &[&str]) -> String {
    let mut out = String::from("Available domains:\n");
    bullets(&mut out, &names.iter().map(|n| n.to_string()).collect::<Vec<_>>());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fallback;
    use crate::core::knowledge::default_profile;
    use chrono::TimeZone;

    fn meta() -> ReportMeta {
        ReportMeta {
            domain: "General Technology".to_string(),
            level: ExperienceLevel::Beginner,
            generated_at: Local.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    #[test]
    fn test_render_guidance_sections() {
        let guidance = fallback::synthesize("General Technology", ExperienceLevel::Beginner, &default_profile());
        let text = render_guidance(&guidance, &meta());

        assert!(text.starts_with("# 📊 Career Guidance: General Technology (Beginner)"));
        assert!(text.contains("_Generated 2026-01-02 03:04_"));
        assert!(text.contains("## 🎯 Skill Roadmap"));
        assert!(text.contains("### Programming"));
        assert!(text.contains("**Importance Level:** Essential"));
        assert!(text.contains("## 📚 Recommended Courses"));
        assert!(text.contains("**Certification:** Yes"));
        assert!(text.contains("1. Define project scope and requirements"));
        assert!(text.contains("### Entry Level"));
        assert!(text.contains("### Interview Preparation"));
    }

    #[test]
    fn test_render_empty_guidance_skips_sections() {
        let text = render_guidance(&CareerGuidance::default(), &meta());
        assert!(!text.contains("Skill Roadmap"));
        assert!(!text.contains("Additional Resources"));
    }

    #[test]
    fn test_render_jobs() {
        assert!(render_jobs("Cloud", &[]).contains("No recent jobs found for this domain."));

        let job = JobListing {
            job_title: "Cloud Engineer".to_string(),
            company: "Acme".to_string(),
            platform: "Indeed".to_string(),
            link: "https://example.com/1".to_string(),
            ..Default::default()
        };
        let text = render_jobs("Cloud", &[job]);
        assert!(text.contains("### Cloud Engineer"));
        assert!(text.contains("[Apply Here](https://example.com/1)"));
    }

    #[test]
    fn test_render_answer() {
        assert_eq!(
            render_answer(" Where to start? ", "Learn SQL.\n"),
            "# ❓ Where to start?\n\n### Answer\n\nLearn SQL.\n"
        );
    }
}
