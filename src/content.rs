use chrono::NaiveDate;
use serde::Serialize;

pub const OWNER_NAME: &str = "Aryan Chandna";
pub const OWNER_INITIALS: &str = "AC";

pub const HERO_TITLE: &str = "Hi there, Nice to meet you!";
pub const HERO_SUBTITLE: &str = "I specialize in Java, Spring Boot, and system design, creating backend solutions that are fast, reliable, and ready to scale.";
pub const HERO_DESCRIPTION: &str =
    "Open to exciting opportunities. Let’s build something impactful together!";

pub const TERMINAL_SNIPPET: &str = r#"> const developer = {
  name: "Aryan Chandna",
  role: "Software Engineer",
  passion: "Building robust, scalable systems",
  status: "Ready to build something amazing!"
  funFact: "Thinks in threads, speaks in APIs.",
};"#;

/// Close, minimize and zoom dots of the terminal card.
pub const TERMINAL_BUTTONS: [&str; 3] = ["#ff5f56", "#ffbd2e", "#27c93f"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Twitter,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        kind: SocialKind::GitHub,
        label: "GitHub",
        href: "https://github.com/yourusername",
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        label: "LinkedIn",
        href: "https://linkedin.com/in/yourusername",
    },
    SocialLink {
        kind: SocialKind::Twitter,
        label: "Twitter",
        href: "https://twitter.com/yourusername",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "About",
        anchor: "about",
    },
    NavLink {
        label: "Experience",
        anchor: "experience",
    },
    NavLink {
        label: "Projects",
        anchor: "projects",
    },
    NavLink {
        label: "Skills",
        anchor: "skills",
    },
    NavLink {
        label: "Contact",
        anchor: "contact",
    },
];

pub const ABOUT_BADGES: [&str; 2] = ["🚀 Backend Engineer", "💻 System Architect"];

pub const ABOUT_TECHNOLOGIES: &[&str] = &[
    "Backend Development",
    "System Design",
    "Node.js",
    "Python",
    "Java",
    "AWS",
    "Docker",
    "Kubernetes",
    "MongoDB",
    "PostgreSQL",
];

/// A span of months; an open end renders as "Present".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl Period {
    fn month(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 1).expect("hard-coded month should be a valid date")
    }

    pub fn closed(start: (i32, u32), end: (i32, u32)) -> Self {
        Self {
            start: Self::month(start.0, start.1),
            end: Some(Self::month(end.0, end.1)),
        }
    }

    pub fn ongoing(start: (i32, u32)) -> Self {
        Self {
            start: Self::month(start.0, start.1),
            end: None,
        }
    }

    pub fn is_current(&self) -> bool {
        self.end.is_none()
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let start = self.start.format("%b %Y");
        match self.end {
            Some(end) => write!(f, "{start} - {}", end.format("%b %Y")),
            None => write!(f, "{start} - Present"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    pub period: Period,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

pub fn experiences() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            role: "Senior Backend Engineer",
            company: "Tech Company A",
            period: Period::ongoing((2023, 1)),
            description: "Led the development of high-performance microservices architecture, improving system scalability by 300%. Implemented robust CI/CD pipelines and mentored junior developers.",
            tech: &["Node.js", "Kubernetes", "AWS", "MongoDB"],
        },
        ExperienceEntry {
            role: "Backend Developer",
            company: "Tech Company B",
            period: Period::closed((2021, 6), (2022, 12)),
            description: "Designed and implemented RESTful APIs serving millions of requests daily. Optimized database queries resulting in 50% reduction in response time.",
            tech: &["Python", "PostgreSQL", "Docker", "Redis"],
        },
        ExperienceEntry {
            role: "Software Engineer",
            company: "Tech Company C",
            period: Period::closed((2020, 1), (2021, 5)),
            description: "Developed and maintained backend services for a large-scale e-commerce platform. Implemented real-time analytics processing pipeline.",
            tech: &["Java", "Spring Boot", "MySQL", "Kafka"],
        },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub github: &'static str,
    pub demo: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Distributed Task Queue",
        description: "A high-performance distributed task queue system built with Node.js and Redis, capable of processing millions of jobs per day with automatic retries and error handling.",
        image: "/project1.jpg",
        tech: &["Node.js", "Redis", "Docker", "Kubernetes"],
        github: "https://github.com/yourusername/project1",
        demo: "https://project1-demo.com",
    },
    Project {
        title: "Real-time Analytics Engine",
        description: "Scalable real-time analytics processing engine using Apache Kafka and Python, providing instant insights from streaming data with sub-second latency.",
        image: "/project2.jpg",
        tech: &["Python", "Kafka", "Elasticsearch", "AWS"],
        github: "https://github.com/yourusername/project2",
        demo: "https://project2-demo.com",
    },
    Project {
        title: "API Gateway Service",
        description: "A modern API Gateway service with rate limiting, caching, and authentication, serving as the entry point for a microservices architecture.",
        image: "/project3.jpg",
        tech: &["Go", "gRPC", "Redis", "PostgreSQL"],
        github: "https://github.com/yourusername/project3",
        demo: "https://project3-demo.com",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0 to 100.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Languages",
        skills: &[
            skill("Node.js", 90),
            skill("Python", 85),
            skill("Go", 80),
            skill("Java", 75),
        ],
    },
    SkillCategory {
        name: "Databases",
        skills: &[
            skill("PostgreSQL", 90),
            skill("MongoDB", 85),
            skill("Redis", 80),
            skill("Elasticsearch", 75),
        ],
    },
    SkillCategory {
        name: "Cloud & DevOps",
        skills: &[
            skill("AWS", 85),
            skill("Docker", 90),
            skill("Kubernetes", 80),
            skill("CI/CD", 85),
        ],
    },
    SkillCategory {
        name: "Architecture",
        skills: &[
            skill("Microservices", 90),
            skill("REST APIs", 95),
            skill("gRPC", 80),
            skill("Event-Driven", 85),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_display() {
        let periods = experiences()
            .iter()
            .map(|e| e.period.to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            periods,
            vec![
                "Jan 2023 - Present",
                "Jun 2021 - Dec 2022",
                "Jan 2020 - May 2021"
            ]
        );
    }

    #[test]
    #[should_panic(expected = "valid date")]
    fn test_invalid_month_fails_loudly() {
        Period::ongoing((2020, 13));
    }

    #[test]
    fn test_only_latest_role_is_current() {
        let current = experiences()
            .iter()
            .filter(|e| e.period.is_current())
            .count();
        assert_eq!(current, 1);
        assert!(experiences()[0].period.is_current());
    }

    #[test]
    fn test_skill_levels_in_range() {
        for category in SKILL_CATEGORIES {
            assert_eq!(category.skills.len(), 4);
            for skill in category.skills {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn test_nav_links_point_to_sections() {
        let hrefs = NAV_LINKS.iter().map(NavLink::href).collect::<Vec<_>>();
        assert_eq!(
            hrefs,
            vec!["#about", "#experience", "#projects", "#skills", "#contact"]
        );
    }

    #[test]
    fn test_snippet_shape() {
        assert!(TERMINAL_SNIPPET.starts_with("> const developer"));
        assert!(TERMINAL_SNIPPET.ends_with("};"));
        assert!(TERMINAL_SNIPPET.contains(OWNER_NAME));
    }
}
