use crate::core::{DomainProfile, ExperienceLevel};

const GUIDANCE_SCHEMA: &str = r#"{
    "domain_overview": "String describing the domain overview",
    "current_industry_trends": ["trend1", "trend2", ...],
    "skill_roadmap": [
        {
            "skill_name": "Skill name",
            "importance_level": "Essential/Important/Helpful",
            "time_to_master": "Time period",
            "prerequisites": ["prerequisite1", "prerequisite2", ...],
            "resources": ["resource1", "resource2", ...],
            "industry_applications": ["application1", "application2", ...],
            "proficiency_metrics": ["metric1", "metric2", ...]
        }
    ],
    "recommended_courses": [
        {
            "course_name": "Course name",
            "platform": "Platform name",
            "link": "Course URL",
            "duration": "Course duration",
            "difficulty_level": "Beginner/Intermediate/Advanced",
            "prerequisites": ["prerequisite1", "prerequisite2", ...],
            "key_topics": ["topic1", "topic2", ...],
            "certification": true/false,
            "price": "Price information"
        }
    ],
    "project_suggestions": [
        {
            "title": "Project title",
            "description": "Project description",
            "skills_practiced": ["skill1", "skill2", ...],
            "difficulty_level": "Beginner/Intermediate/Advanced",
            "estimated_duration": "Time period",
            "resources_needed": ["resource1", "resource2", ...],
            "learning_outcomes": ["outcome1", "outcome2", ...],
            "implementation_steps": ["step1", "step2", ...]
        }
    ],
    "career_growth_paths": [
        {
            "title": "Career path title",
            "description": "Career path description",
            "salary_range": "Salary range",
            "required_experience": "Required experience",
            "key_responsibilities": ["responsibility1", "responsibility2", ...],
            "required_skills": ["skill1", "skill2", ...],
            "growth_opportunities": ["opportunity1", "opportunity2", ...],
            "industry_demand": "High/Medium/Low",
            "typical_job_titles": ["title1", "title2", ...]
        }
    ],
    "certifications_needed": ["certification1", "certification2", ...],
    "networking_suggestions": ["suggestion1", "suggestion2", ...],
    "interview_preparation": ["tip1", "tip2", ...],
    "industry_resources": ["resource1", "resource2", ...]
}"#;

/// Full guidance prompt with the domain context and the target JSON schema.
pub fn guidance_prompt(domain: &str, level: ExperienceLevel, profile: &DomainProfile) -> String {
    format!(
        r#"You are a senior career counselor and industry expert. The domain is: {domain}
Create a comprehensive career development plan for a {level} professional in this domain.

Domain Knowledge Context:
Description: {description}
Core Skills: {core_skills}
Specializations: {specializations}
Tools & Technologies: {tools}
Industry Standards: {standards}

Consider:
1. Current industry state and emerging trends
2. Essential skills and technologies needed at this level
3. Detailed course recommendations with actual platforms and courses
4. Practical projects that demonstrate real-world competency
5. Career progression paths with current market insights
6. Industry-recognized certifications
7. Domain-specific interview preparation

Your response must be in valid JSON format with the following structure:
{schema}

Make all recommendations highly specific to {domain} and {level} level.
Include actual course names, specific project details, and realistic salary ranges.

CRITICAL FORMATTING REQUIREMENTS:
- Respond with ONLY valid JSON - no markdown, no explanations, no extra text
- All strings must be properly quoted
- No trailing commas
- All arrays and objects must be properly closed
- Use double quotes only, never single quotes

IMPORTANT: Respond with ONLY the JSON object, no other text or formatting."#,
        domain = domain,
        level = level,
        description = profile.description,
        core_skills = profile.core_skills.join(", "),
        specializations = profile.specializations.join(", "),
        tools = profile.tools_and_technologies.join(", "),
        standards = profile.industry_standards.join(", "),
        schema = GUIDANCE_SCHEMA,
    )
}

/// Shorter prompt used for the single retry after an unparsable reply. The
/// example values double as a concrete template the model can copy.
pub fn simplified_prompt(domain: &str, level: ExperienceLevel) -> String {
    format!(
        r#"Create a career guidance plan for a {level} level professional in {domain}.

Provide a JSON response with this exact structure:
{{
    "domain_overview": "Brief overview of {domain}",
    "current_industry_trends": ["trend1", "trend2", "trend3"],
    "skill_roadmap": [
        {{
            "skill_name": "Core skill name",
            "importance_level": "Essential",
            "time_to_master": "3-6 months",
            "prerequisites": [],
            "resources": ["resource1"],
            "industry_applications": ["application1"],
            "proficiency_metrics": ["metric1"]
        }}
    ],
    "recommended_courses": [
        {{
            "course_name": "Course name",
            "platform": "Platform",
            "link": "",
            "duration": "8 weeks",
            "difficulty_level": "{level}",
            "prerequisites": [],
            "key_topics": ["topic1"],
            "certification": true,
            "price": "Free"
        }}
    ],
    "project_suggestions": [
        {{
            "title": "{level} {domain} Project",
            "description": "Build a practical project",
            "skills_practiced": ["skill1"],
            "difficulty_level": "{level}",
            "estimated_duration": "4 weeks",
            "resources_needed": [],
            "learning_outcomes": [],
            "implementation_steps": []
        }}
    ],
    "career_growth_paths": [
        {{
            "title": "Junior {domain} Role",
            "description": "Entry level position",
            "salary_range": "$40,000-$60,000",
            "required_experience": "0-2 years",
            "key_responsibilities": [],
            "required_skills": [],
            "growth_opportunities": [],
            "industry_demand": "High",
            "typical_job_titles": []
        }}
    ],
    "certifications_needed": ["Certification 1"],
    "networking_suggestions": ["Join professional groups"],
    "interview_preparation": ["Study fundamentals"],
    "industry_resources": ["Resource 1"]
}}

Respond only with valid JSON."#,
        domain = domain,
        level = level,
    )
}

pub fn counselor_prompt(domain: &str, question: &str) -> String {
    format!(
        "As a career counselor specializing in {domain}, please provide a detailed, \
actionable answer to this question: {question}\n\n\
Focus on practical advice and specific next steps the person can take.",
        domain = domain,
        question = question.trim(),
    )
}
