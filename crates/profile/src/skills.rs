use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Width of the progress bar shown for the level.
    pub fn percent(&self) -> u8 {
        match self {
            SkillLevel::Beginner => 25,
            SkillLevel::Intermediate => 50,
            SkillLevel::Advanced => 75,
            SkillLevel::Expert => 95,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub level: SkillLevel,
    pub icon: &'static str,
    pub category: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SkillsSummary {
    pub total: usize,
    pub by_level: Vec<(SkillLevel, usize)>,
    pub by_category: Vec<(&'static str, usize)>,
}

const fn skill(
    category: &'static str,
    name: &'static str,
    level: SkillLevel,
    icon: &'static str,
) -> Skill {
    Skill {
        name,
        level,
        icon,
        category,
    }
}

const CATEGORIES: [&str; 4] = ["programming", "design", "technical", "frameworks"];

static SKILLS: &[Skill] = &[
    skill("programming", "HTML5", SkillLevel::Advanced, "html5"),
    skill("programming", "CSS3", SkillLevel::Advanced, "css3"),
    skill("programming", "JavaScript", SkillLevel::Intermediate, "javascript"),
    skill("programming", "PHP", SkillLevel::Intermediate, "php"),
    skill("programming", "Java", SkillLevel::Intermediate, "java"),
    skill("design", "Graphic Design", SkillLevel::Beginner, "design"),
    skill("design", "Video Editing", SkillLevel::Intermediate, "video"),
    skill("design", "Figma", SkillLevel::Intermediate, "figma"),
    skill("technical", "Computer Literacy", SkillLevel::Advanced, "computer"),
    skill("technical", "Typing Skills (90 WPM)", SkillLevel::Expert, "keyboard"),
    skill("technical", "Git/GitHub", SkillLevel::Intermediate, "git"),
    skill("technical", "MySQL", SkillLevel::Intermediate, "mysql"),
    skill("frameworks", "Bootstrap", SkillLevel::Advanced, "bootstrap"),
    skill("frameworks", "Tailwind CSS", SkillLevel::Intermediate, "tailwind"),
];

pub fn categories() -> Vec<&'static str> {
    CATEGORIES.to_vec()
}

/// All skills grouped by category, in display order.
pub fn all() -> Vec<SkillGroup> {
    CATEGORIES
        .iter()
        .map(|category| SkillGroup {
            category: *category,
            skills: by_category(category),
        })
        .collect()
}

/// Skills of one category, matched case-insensitively. Unknown categories
/// yield an empty list.
pub fn by_category(category: &str) -> Vec<Skill> {
    SKILLS
        .iter()
        .filter(|s| s.category.eq_ignore_ascii_case(category.trim()))
        .copied()
        .collect()
}

pub fn flat_list() -> Vec<Skill> {
    SKILLS.to_vec()
}

pub fn by_level(level: SkillLevel) -> Vec<Skill> {
    SKILLS.iter().filter(|s| s.level == level).copied().collect()
}

pub fn count() -> usize {
    SKILLS.len()
}

pub fn summary() -> SkillsSummary {
    SkillsSummary {
        total: count(),
        by_level: SkillLevel::VARIANTS
            .iter()
            .map(|level| (*level, by_level(*level).len()))
            .collect(),
        by_category: CATEGORIES
            .iter()
            .map(|category| (*category, by_category(category).len()))
            .collect(),
    }
}
