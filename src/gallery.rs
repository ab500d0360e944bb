use serde::{Deserialize, Serialize};

use crate::content::Project;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub static PROJECT_CATEGORIES: [ProjectCategory; 4] = [
    ProjectCategory {
        id: "all",
        label: "All Projects",
        icon: "🚀",
    },
    ProjectCategory {
        id: "html-css",
        label: "HTML + CSS",
        icon: "🎨",
    },
    ProjectCategory {
        id: "html-css-js",
        label: "HTML + CSS + JS",
        icon: "⚡",
    },
    ProjectCategory {
        id: "mern",
        label: "MERN Stack",
        icon: "💻",
    },
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(String),
}

impl ProjectFilter {
    pub fn from_id(id: &str) -> Self {
        match id {
            "all" => Self::All,
            other => Self::Category(other.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Category(c) => c,
        }
    }

    /// Whether the filter names one of [`PROJECT_CATEGORIES`].
    pub fn is_known(&self) -> bool {
        PROJECT_CATEGORIES.iter().any(|c| c.id == self.id())
    }

    /// Values restored from storage may be stale; fall back to `All`.
    pub fn sanitized(self) -> Self {
        if self.is_known() {
            self
        } else {
            Self::All
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => project.category == *c,
        }
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }

    /// "Showing 15 projects" / "Showing 3 HTML + CSS projects".
    pub fn count_label(&self, count: usize) -> String {
        match self {
            Self::All => format!("Showing {count} projects"),
            Self::Category(c) => {
                // only the first dash becomes " + ", e.g. "HTML + CSS-JS"
                let label = c.to_uppercase().replacen('-', " + ", 1);
                format!("Showing {count} {label} projects")
            }
        }
    }
}
