use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
    pub featured: bool,
}

impl Project {
    fn matches(&self, term: &str) -> bool {
        let contains = |value: &str| value.to_lowercase().contains(term);

        contains(self.title)
            || contains(self.description)
            || contains(self.category)
            || self.tags.iter().any(|tag| contains(*tag))
    }
}

pub const ALL_CATEGORY: &str = "All";

static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-Commerce Website",
        category: "Web Development",
        description: "A full-stack e-commerce platform with shopping cart, payment integration, and admin dashboard.",
        image: "/static/images/project-1.svg",
        tags: &["HTML", "CSS", "JavaScript", "PHP"],
        link: "#",
        featured: true,
    },
    Project {
        id: 2,
        title: "Student Portal System",
        category: "Web Application",
        description: "A comprehensive student information system for managing grades, schedules, and announcements.",
        image: "/static/images/project-2.svg",
        tags: &["HTML", "CSS", "JavaScript", "MySQL"],
        link: "#",
        featured: true,
    },
    Project {
        id: 3,
        title: "Mobile Banking UI",
        category: "UI/UX Design",
        description: "Modern and intuitive mobile banking application interface design with focus on user experience.",
        image: "/static/images/project-3.svg",
        tags: &["Figma", "UI Design", "Prototyping"],
        link: "#",
        featured: true,
    },
    Project {
        id: 4,
        title: "Inventory Management",
        category: "Desktop Application",
        description: "Desktop application for small businesses to track inventory, sales, and generate reports.",
        image: "/static/images/project-4.svg",
        tags: &["Java", "MySQL", "Swing"],
        link: "#",
        featured: false,
    },
    Project {
        id: 5,
        title: "Restaurant Website",
        category: "Web Development",
        description: "Responsive restaurant website with online menu, reservation system, and contact form.",
        image: "/static/images/project-5.svg",
        tags: &["HTML", "CSS", "JavaScript"],
        link: "#",
        featured: false,
    },
    Project {
        id: 6,
        title: "Weather Dashboard",
        category: "Web Application",
        description: "Interactive weather dashboard that displays real-time weather data with beautiful visualizations.",
        image: "/static/images/project-6.svg",
        tags: &["JavaScript", "API", "CSS"],
        link: "#",
        featured: false,
    },
];

pub fn all() -> Vec<Project> {
    PROJECTS.to_vec()
}

pub fn featured() -> Vec<Project> {
    PROJECTS.iter().filter(|p| p.featured).copied().collect()
}

/// Projects in `category`, compared case-insensitively. An empty category or
/// `all` returns every project.
pub fn by_category(category: &str) -> Vec<Project> {
    let category = category.trim();
    if category.is_empty() || category.eq_ignore_ascii_case(ALL_CATEGORY) {
        return all();
    }

    PROJECTS
        .iter()
        .filter(|p| p.category.eq_ignore_ascii_case(category))
        .copied()
        .collect()
}

/// `All` followed by each distinct category in first-seen order.
pub fn categories() -> Vec<&'static str> {
    let mut categories = vec![ALL_CATEGORY];
    for project in PROJECTS {
        if !categories.contains(&project.category) {
            categories.push(project.category);
        }
    }

    categories
}

pub fn by_id(id: u32) -> Option<Project> {
    PROJECTS.iter().find(|p| p.id == id).copied()
}

pub fn search(keyword: &str) -> Vec<Project> {
    let term = keyword.trim().to_lowercase();
    if term.is_empty() {
        return all();
    }

    PROJECTS.iter().filter(|p| p.matches(&term)).copied().collect()
}

pub fn count() -> usize {
    PROJECTS.len()
}
