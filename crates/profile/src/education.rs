use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Education {
    pub id: u32,
    pub degree: &'static str,
    pub school: &'static str,
    pub location: &'static str,
    pub start_year: i32,
    /// `None` while still enrolled.
    pub end_year: Option<i32>,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub current: bool,
}

impl Education {
    pub fn year_range(&self) -> String {
        crate::format::year_range(self.start_year, self.end_year)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Certification {
    pub id: u32,
    pub name: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub link: &'static str,
}

static EDUCATION: &[Education] = &[
    Education {
        id: 1,
        degree: "Bachelor of Science in Information Technology",
        school: "Pamantasan ng Lungsod ng Valenzuela (PLV)",
        location: "Valenzuela City, Metro Manila",
        start_year: 2021,
        end_year: None,
        description: "Pursuing a degree in Information Technology with focus on software development and web technologies.",
        achievements: &[
            "Active member of IT Student Organization",
            "Participated in various coding competitions",
            "Consistent academic performer",
        ],
        current: true,
    },
    Education {
        id: 2,
        degree: "Senior High School - STEM Strand",
        school: "Senior High School",
        location: "Valenzuela City",
        start_year: 2019,
        end_year: Some(2021),
        description: "Completed Science, Technology, Engineering, and Mathematics track.",
        achievements: &["Graduated with honors", "Member of Science Club"],
        current: false,
    },
];

static CERTIFICATIONS: &[Certification] = &[
    Certification {
        id: 1,
        name: "Web Development Fundamentals",
        issuer: "Online Learning Platform",
        date: "2023",
        link: "#",
    },
    Certification {
        id: 2,
        name: "JavaScript Basics",
        issuer: "Online Course",
        date: "2023",
        link: "#",
    },
];

pub fn all() -> Vec<Education> {
    EDUCATION.to_vec()
}

pub fn current() -> Option<Education> {
    EDUCATION.iter().find(|e| e.current).copied()
}

pub fn by_id(id: u32) -> Option<Education> {
    EDUCATION.iter().find(|e| e.id == id).copied()
}

pub fn certifications() -> Vec<Certification> {
    CERTIFICATIONS.to_vec()
}

/// Entries ordered by start year, newest first.
pub fn timeline() -> Vec<Education> {
    let mut entries = all();
    entries.sort_by(|a, b| b.start_year.cmp(&a.start_year));
    entries
}

/// Sum of years spent in every entry, counting ongoing ones up to
/// `current_year`.
pub fn total_years(current_year: i32) -> i32 {
    EDUCATION
        .iter()
        .map(|e| e.end_year.unwrap_or(current_year) - e.start_year)
        .sum()
}
