//! Deterministic guidance synthesized from a domain profile alone, used when
//! the model is unreachable or its replies cannot be parsed.

use crate::core::{
    CareerGuidance, CareerPathDetail, CourseDetail, DomainProfile, ExperienceLevel, ProjectDetail,
    SkillDetail,
};

const ESSENTIAL_SKILL_COUNT: usize = 3;

/// (salary range, required experience) per career tier; later tiers reuse the last entry.
const CAREER_TIERS: [(&str, &str); 5] = [
    ("$45,000 - $65,000", "0-2 years"),
    ("$65,000 - $90,000", "2-5 years"),
    ("$90,000 - $130,000", "5-8 years"),
    ("$120,000 - $160,000", "8-12 years"),
    ("$150,000+", "12+ years"),
];

fn strings<const N: usize>(items: [&str; N]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn head(items: &[String], n: usize) -> Vec<String> {
    items.iter().take(n).cloned().collect()
}

fn joined_or(items: &[String], n: usize, default: &str) -> String {
    if items.is_empty() {
        default.to_string()
    } else {
        head(items, n).join(", ")
    }
}

fn time_to_master(level: ExperienceLevel) -> &'static str {
    match level {
        ExperienceLevel::Beginner => "3-6 months",
        ExperienceLevel::Intermediate => "1-3 months",
        ExperienceLevel::Advanced => "2-4 weeks",
    }
}

pub fn synthesize(domain: &str, level: ExperienceLevel, profile: &DomainProfile) -> CareerGuidance {
    CareerGuidance {
        domain_overview: overview(domain, level, profile),
        current_industry_trends: trends(domain, profile),
        skill_roadmap: skill_roadmap(domain, level, profile),
        recommended_courses: courses(domain, level, profile),
        project_suggestions: projects(domain, level, profile),
        career_growth_paths: career_paths(domain, profile),
        certifications_needed: certifications(domain, profile),
        networking_suggestions: vec![
            format!("Join local {} meetups and user groups", domain),
            format!("Attend {} conferences and workshops", domain),
            format!("Connect with {} professionals on LinkedIn", domain),
            format!("Participate in online {} communities", domain),
            "Follow industry leaders and companies on social media".to_string(),
            format!("Join professional {} associations", domain),
        ],
        interview_preparation: vec![
            format!("Study {} fundamentals and core concepts", domain),
            "Practice explaining your projects clearly".to_string(),
            "Prepare examples of problem-solving experiences".to_string(),
            "Review common technical questions".to_string(),
            "Practice coding/practical exercises".to_string(),
            "Prepare questions about company culture and growth".to_string(),
        ],
        industry_resources: industry_resources(domain, profile),
    }
}

fn overview(domain: &str, level: ExperienceLevel, profile: &DomainProfile) -> String {
    let intro = if profile.description.is_empty() {
        format!(
            "The {} field is a dynamic and growing area that combines {} to solve real-world problems.",
            domain,
            joined_or(&profile.core_skills, 3, "core technical skills")
        )
    } else {
        profile.description.clone()
    };

    format!(
        "{} As a {} professional, you'll focus on building foundational skills and gaining practical experience through hands-on projects.",
        intro, level
    )
}

fn trends(domain: &str, profile: &DomainProfile) -> Vec<String> {
    profile
        .industry_standards
        .iter()
        .map(|standard| format!("Growing emphasis on {}", standard))
        .chain([
            format!("Increased demand for {} professionals", domain),
            format!(
                "Growing adoption of {}",
                profile
                    .tools_and_technologies
                    .first()
                    .map(String::as_str)
                    .unwrap_or("modern tools")
            ),
            "Remote work opportunities expanding".to_string(),
        ])
        .collect()
}

fn skill_roadmap(domain: &str, level: ExperienceLevel, profile: &DomainProfile) -> Vec<SkillDetail> {
    profile
        .core_skills
        .iter()
        .enumerate()
        .map(|(idx, skill)| SkillDetail {
            skill_name: skill.clone(),
            importance_level: if idx < ESSENTIAL_SKILL_COUNT {
                "Essential"
            } else {
                "Important"
            }
            .to_string(),
            time_to_master: time_to_master(level).to_string(),
            prerequisites: if idx == 0 {
                Vec::new()
            } else {
                head(&profile.core_skills, 1)
            },
            resources: strings([
                "Online tutorials and courses",
                "Practice exercises and projects",
                "Community forums and documentation",
            ]),
            industry_applications: vec![
                format!("Entry-level {} positions", domain),
                format!("Freelance {} projects", domain),
                format!("Personal {} development", domain),
            ],
            proficiency_metrics: strings([
                "Complete beginner projects",
                "Build portfolio applications",
                "Pass practical assessments",
            ]),
        })
        .collect()
}

fn or_single(items: Vec<String>, default: String) -> Vec<String> {
    if items.is_empty() {
        vec![default]
    } else {
        items
    }
}

fn courses(domain: &str, level: ExperienceLevel, profile: &DomainProfile) -> Vec<CourseDetail> {
    vec![
        CourseDetail {
            course_name: format!("Complete {} Course for {}s", domain, level),
            platform: "Coursera".to_string(),
            link: "https://coursera.org".to_string(),
            duration: "8-12 weeks".to_string(),
            difficulty_level: level.to_string(),
            prerequisites: Vec::new(),
            key_topics: or_single(head(&profile.core_skills, 3), format!("{} basics", domain)),
            certification: true,
            price: Some("$39-79/month".to_string()),
        },
        CourseDetail {
            course_name: format!("{} Fundamentals", domain),
            platform: "Udemy".to_string(),
            link: "https://udemy.com".to_string(),
            duration: "6-8 weeks".to_string(),
            difficulty_level: level.to_string(),
            prerequisites: Vec::new(),
            key_topics: or_single(head(&profile.specializations, 3), format!("{} concepts", domain)),
            certification: true,
            price: Some("$50-100".to_string()),
        },
        CourseDetail {
            course_name: format!("Practical {} Projects", domain),
            platform: "edX".to_string(),
            link: "https://edx.org".to_string(),
            duration: "4-6 weeks".to_string(),
            difficulty_level: level.to_string(),
            prerequisites: head(&profile.core_skills, 1),
            key_topics: or_single(
                head(&profile.tools_and_technologies, 3),
                "hands-on practice".to_string(),
            ),
            certification: true,
            price: Some("Free (Verified Certificate: $99)".to_string()),
        },
    ]
}

fn projects(domain: &str, level: ExperienceLevel, profile: &DomainProfile) -> Vec<ProjectDetail> {
    vec![
        ProjectDetail {
            title: format!("{} Portfolio Project", domain),
            description: format!(
                "Build a comprehensive {} project that demonstrates your understanding of {}. This project will serve as a cornerstone piece for your portfolio.",
                domain,
                joined_or(&profile.core_skills, 3, "core concepts")
            ),
            skills_practiced: or_single(head(&profile.core_skills, 4), format!("{} fundamentals", domain)),
            difficulty_level: level.to_string(),
            estimated_duration: "4-6 weeks".to_string(),
            resources_needed: strings([
                "Computer with internet access",
                "Basic development environment",
                "Online learning resources",
            ]),
            learning_outcomes: vec![
                format!("Understand {} fundamentals", domain),
                "Build practical problem-solving skills".to_string(),
                "Create a portfolio-worthy project".to_string(),
                "Gain hands-on experience".to_string(),
            ],
            implementation_steps: strings([
                "Define project scope and requirements",
                "Set up development environment",
                "Break down project into smaller tasks",
                "Implement core functionality",
                "Test and debug the solution",
                "Document and present the project",
            ]),
        },
        ProjectDetail {
            title: format!("Real-world {} Application", domain),
            description: format!(
                "Create a practical application that solves a real-world problem using {} principles and {}.",
                domain,
                joined_or(&profile.tools_and_technologies, 2, "modern tools")
            ),
            skills_practiced: or_single(head(&profile.core_skills, 3), format!("{} application", domain)),
            difficulty_level: level.to_string(),
            estimated_duration: "3-4 weeks".to_string(),
            resources_needed: strings([
                "Development tools and software",
                "Sample datasets or materials",
                "Documentation and tutorials",
            ]),
            learning_outcomes: strings([
                "Apply theoretical knowledge to practical problems",
                "Learn industry best practices",
                "Build confidence in problem-solving",
            ]),
            implementation_steps: strings([
                "Identify a real-world problem to solve",
                "Research existing solutions",
                "Design your approach",
                "Implement and iterate",
                "Share and get feedback",
            ]),
        },
    ]
}

/// One path per declared career level, in declaration order.
fn career_paths(domain: &str, profile: &DomainProfile) -> Vec<CareerPathDetail> {
    let levels = &profile.career_levels;

    levels
        .iter()
        .enumerate()
        .map(|(idx, title)| {
            let (salary_range, experience) = CAREER_TIERS[idx.min(CAREER_TIERS.len() - 1)];
            let entry_level = idx == 0;

            let growth_opportunities = if idx + 1 < levels.len() {
                levels[idx + 1..].to_vec()
            } else {
                vec![
                    format!("{} Director", domain),
                    format!("Principal {} Consultant", domain),
                ]
            };

            CareerPathDetail {
                title: title.clone(),
                description: if entry_level {
                    format!(
                        "Entry-level {} position focusing on {} with opportunities for growth and learning.",
                        domain,
                        joined_or(&profile.specializations, 2, "foundational skills")
                    )
                } else {
                    format!(
                        "Experienced {} role with responsibility for {} and mentoring junior staff.",
                        domain,
                        joined_or(&profile.specializations, 3, "advanced projects")
                    )
                },
                salary_range: salary_range.to_string(),
                required_experience: experience.to_string(),
                key_responsibilities: if entry_level {
                    vec![
                        format!("Assist with {} projects and tasks", domain),
                        "Learn and apply industry best practices".to_string(),
                        "Collaborate with senior team members".to_string(),
                        "Contribute to project documentation".to_string(),
                    ]
                } else {
                    vec![
                        format!("Lead {} projects independently", domain),
                        "Mentor junior team members".to_string(),
                        "Design and implement solutions".to_string(),
                        "Communicate with stakeholders".to_string(),
                    ]
                },
                required_skills: if entry_level {
                    head(&profile.core_skills, 4)
                } else {
                    profile.core_skills.clone()
                },
                growth_opportunities,
                industry_demand: "High".to_string(),
                typical_job_titles: vec![title.clone(), format!("{} {}", domain, title)],
            }
        })
        .collect()
}

fn certifications(domain: &str, profile: &DomainProfile) -> Vec<String> {
    vec![
        format!("Professional {} Certification", domain),
        format!("{} Fundamentals Certificate", domain),
        format!("Industry-recognized {} Credential", domain),
    ]
    .into_iter()
    .chain(head(&profile.certification_paths, 3))
    .collect()
}

fn industry_resources(domain: &str, profile: &DomainProfile) -> Vec<String> {
    vec![
        format!(
            "Leading {} companies: {}",
            domain,
            joined_or(&profile.key_companies, 5, "Google, Microsoft, Amazon")
        ),
        format!(
            "Key technologies: {}",
            joined_or(&profile.tools_and_technologies, 5, "Modern tools and frameworks")
        ),
        format!("Professional communities: {} forums and Discord servers", domain),
        "Learning platforms: Coursera, Udemy, Pluralsight, LinkedIn Learning".to_string(),
        format!("Industry publications and blogs about {}", domain),
        "Open source projects and GitHub repositories".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::knowledge::default_profile;

    fn profile_with_skills(n: usize) -> DomainProfile {
        DomainProfile {
            name: "Data Science".to_string(),
            core_skills: (0..n).map(|i| format!("Skill {}", i)).collect(),
            career_levels: vec!["Junior Analyst".to_string(), "Data Scientist".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_one_roadmap_entry_per_core_skill() {
        for n in [0, 1, 3, 7] {
            let guidance = synthesize("Data Science", ExperienceLevel::Beginner, &profile_with_skills(n));
            assert_eq!(guidance.skill_roadmap.len(), n);
            for (idx, skill) in guidance.skill_roadmap.iter().enumerate() {
                let expected = if idx < 3 { "Essential" } else { "Important" };
                assert_eq!(skill.importance_level, expected);
                assert_eq!(skill.skill_name, format!("Skill {}", idx));
            }
        }
    }

    #[test]
    fn test_time_to_master_depends_on_level() {
        let profile = profile_with_skills(2);
        let beginner = synthesize("Data Science", ExperienceLevel::Beginner, &profile);
        let advanced = synthesize("Data Science", ExperienceLevel::Advanced, &profile);
        assert_eq!(beginner.skill_roadmap[0].time_to_master, "3-6 months");
        assert_eq!(advanced.skill_roadmap[0].time_to_master, "2-4 weeks");
        assert!(beginner.skill_roadmap[0].prerequisites.is_empty());
        assert_eq!(beginner.skill_roadmap[1].prerequisites, vec!["Skill 0"]);
    }

    #[test]
    fn test_career_path_per_level() {
        let guidance = synthesize("Data Science", ExperienceLevel::Intermediate, &profile_with_skills(5));
        let paths = &guidance.career_growth_paths;
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].title, "Junior Analyst");
        assert_eq!(paths[0].required_experience, "0-2 years");
        assert_eq!(paths[0].growth_opportunities, vec!["Data Scientist"]);
        assert_eq!(paths[0].required_skills.len(), 4);
        assert_eq!(paths[1].required_skills.len(), 5);
        assert_eq!(paths[1].salary_range, "$65,000 - $90,000");
    }

    #[test]
    fn test_courses_and_projects_interpolate_domain_and_level() {
        let guidance = synthesize("Cloud", ExperienceLevel::Advanced, &DomainProfile::default());
        assert_eq!(guidance.recommended_courses.len(), 3);
        assert_eq!(guidance.recommended_courses[0].course_name, "Complete Cloud Course for Advanceds");
        assert_eq!(guidance.recommended_courses[0].key_topics, vec!["Cloud basics"]);
        assert_eq!(guidance.project_suggestions.len(), 2);
        assert!(guidance
            .project_suggestions
            .iter()
            .all(|p| p.difficulty_level == "Advanced"));
    }

    #[test]
    fn test_overview_and_trends_come_from_profile() {
        let profile = default_profile();
        let guidance = synthesize("General Technology", ExperienceLevel::Beginner, &profile);
        assert!(guidance
            .domain_overview
            .starts_with("General technology and computing skills"));
        assert_eq!(guidance.current_industry_trends[0], "Growing emphasis on Best Practices");
        assert_eq!(guidance.certifications_needed.len(), 4);
        assert!(guidance.industry_resources[0].ends_with("Tech Companies"));
    }

    #[test]
    fn test_is_deterministic() {
        let profile = default_profile();
        assert_eq!(
            synthesize("X", ExperienceLevel::Intermediate, &profile),
            synthesize("X", ExperienceLevel::Intermediate, &profile)
        );
    }
}
