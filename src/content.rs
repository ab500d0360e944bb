use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

static GLOBAL_PROJECTS: LazyLock<Result<Vec<Project>, ContentError>> =
    LazyLock::new(|| load("projects.json"));
static GLOBAL_SKILLS: LazyLock<Result<Vec<SkillCategory>, ContentError>> =
    LazyLock::new(|| load("skills.json"));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse {name}: {reason}")]
    ParseError { name: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub performance: u8,
    pub users: String,
    pub rating: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub live_demo: Option<String>,
    pub source_code: String,
    #[serde(default)]
    pub featured: bool,
    pub stats: ProjectStats,
}

impl Project {
    /// Explicit image, or a placeholder seeded from the title.
    pub fn image_url(&self) -> String {
        match &self.image {
            Some(url) => url.clone(),
            None => {
                let seed = self
                    .title
                    .split_whitespace()
                    .collect::<String>()
                    .to_lowercase();
                format!("https://picsum.photos/600/400?random={seed}")
            }
        }
    }

    /// Live demo link with a scheme, if the project has one.
    pub fn live_demo_url(&self) -> Option<String> {
        let demo = self.live_demo.as_deref()?.trim();
        if demo.is_empty() || demo == "#" {
            None
        } else if demo.starts_with("http://") || demo.starts_with("https://") {
            Some(demo.to_string())
        } else {
            Some(format!("https://{demo}"))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub key: String,
    pub title: String,
    pub icon: String,
    pub color: String,
    pub skills: Vec<Skill>,
}

fn load<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|e| ContentError::ParseError {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

pub fn projects() -> Result<&'static [Project], ContentError> {
    GLOBAL_PROJECTS.as_deref().map_err(Clone::clone)
}

pub fn skill_categories() -> Result<&'static [SkillCategory], ContentError> {
    GLOBAL_SKILLS.as_deref().map_err(Clone::clone)
}

pub const ROLE_PHRASES: [&str; 5] = [
    "Full Stack Developer",
    "React Specialist",
    "MERN Expert",
    "UI/UX Enthusiast",
    "Problem Solver",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
    pub color: &'static str,
}

pub static HERO_SOCIALS: [SocialLink; 3] = [
    SocialLink {
        name: "GitHub",
        icon: "devicon-github-plain",
        href: "https://github.com",
        color: "#333",
    },
    SocialLink {
        name: "LinkedIn",
        icon: "devicon-linkedin-plain",
        href: "https://linkedin.com",
        color: "#0077b5",
    },
    SocialLink {
        name: "Twitter",
        icon: "devicon-twitter-original",
        href: "https://twitter.com",
        color: "#1da1f2",
    },
];

pub const FLOATING_TECH: [&str; 3] = ["React", "Node.js", "MongoDB"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat {
        number: "50+",
        label: "Projects Completed",
        icon: "💻",
    },
    Stat {
        number: "3+",
        label: "Years Experience",
        icon: "🏆",
    },
    Stat {
        number: "20+",
        label: "Happy Clients",
        icon: "👥",
    },
    Stat {
        number: "1000+",
        label: "Cups of Coffee",
        icon: "☕",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub static VALUES: [Value; 4] = [
    Value {
        title: "Clean Code",
        description: "Writing maintainable, scalable, and efficient code that stands the test of time.",
        icon: "💻",
        color: "#00f5ff",
    },
    Value {
        title: "Innovation",
        description: "Always exploring new technologies and creative solutions to complex problems.",
        icon: "💡",
        color: "#ff0080",
    },
    Value {
        title: "Performance",
        description: "Optimizing applications for speed, scalability, and exceptional user experience.",
        icon: "🚀",
        color: "#9333ea",
    },
    Value {
        title: "Collaboration",
        description: "Working effectively in teams to deliver projects that exceed expectations.",
        icon: "👥",
        color: "#10b981",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub progress: u8,
}

pub static ACHIEVEMENTS: [Achievement; 4] = [
    Achievement {
        title: "Full Stack Mastery",
        description: "Complete MERN stack proficiency",
        icon: "🚀",
        progress: 92,
    },
    Achievement {
        title: "Performance Optimization",
        description: "Advanced optimization techniques",
        icon: "⚡",
        progress: 88,
    },
    Achievement {
        title: "Security Best Practices",
        description: "Secure coding & data protection",
        icon: "🛡️",
        progress: 85,
    },
    Achievement {
        title: "Scalable Architecture",
        description: "Microservices & system design",
        icon: "🧠",
        progress: 82,
    },
];

pub const TECH_ORBIT: [&str; 8] = ["⚛️", "🟢", "🍃", "📘", "🎨", "☁️", "🔐", "📱"];

pub const CONTACT_DETAILS: [(&str, &str); 3] = [
    ("📍", "Peshawar, Pakistan 🌍"),
    ("⏰", "Available 24/7 for amazing projects"),
    ("🎯", "Response time: Lightning fast!"),
];
