pub mod counselor;
pub mod fallback;
pub mod guidance;
pub mod jobs;
pub mod knowledge;
pub mod parse;
pub mod prompt;
pub mod source;

pub use crate::domain::model::{
    CareerGuidance, CareerPathDetail, CourseDetail, DomainProfile, ExperienceLevel, JobListing,
    ProjectDetail, SkillDetail,
};
pub use crate::domain::ports::{FallibleSource, LanguageModel};
pub use crate::utils::error::Result;
