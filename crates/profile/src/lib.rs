pub mod education;
pub mod format;
pub mod internship;
pub mod portfolio;
pub mod skills;

pub use education::{Certification, Education};
pub use internship::Internship;
pub use portfolio::Project;
pub use skills::{Skill, SkillGroup, SkillLevel, SkillsSummary};
