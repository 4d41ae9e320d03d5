use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Internship {
    pub company: &'static str,
    pub position: &'static str,
    pub start_date: &'static str,
    pub end_date: &'static str,
    pub hours: u32,
    pub logo: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub achievements: &'static [&'static str],
}

static INTERNSHIP: Internship = Internship {
    company: "Food Machinery Industrial Corporation",
    position: "IT Tech",
    start_date: "June 2025",
    end_date: "October 2025",
    hours: 486,
    logo: "/static/images/fmic-logo.svg",
    description: "Gained hands-on experience in IT support, system maintenance, and technical troubleshooting in an industrial manufacturing environment.",
    skills: &[
        "Technical Support",
        "System Maintenance",
        "Hardware Troubleshooting",
        "Network Configuration",
    ],
    achievements: &[
        "Completed 486 hours of intensive IT training",
        "Provided technical support for manufacturing systems",
        "Assisted in network infrastructure maintenance",
        "Developed problem-solving skills in real-world scenarios",
    ],
};

pub fn data() -> Internship {
    INTERNSHIP
}

pub fn formatted_duration() -> String {
    format!("{} - {}", INTERNSHIP.start_date, INTERNSHIP.end_date)
}

pub fn total_hours() -> u32 {
    INTERNSHIP.hours
}
