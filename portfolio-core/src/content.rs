use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ContentError;

const BUNDLED_PORTFOLIO: &str = include_str!("../../content/portfolio.json");

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub email: String,
    pub location: String,
    pub years_of_experience: u32,
    pub bio: String,
    pub portrait: String,
    pub social_links: SocialLinks,
}

impl Profile {
    /// Leading word of the name, used in the hero greeting.
    pub fn first_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Design,
    Database,
}

impl SkillCategory {
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Tools => "Tools",
            SkillCategory::Design => "Design",
            SkillCategory::Database => "Database",
        }
    }

    /// Gradient utility classes used for the icon tile and proficiency bar.
    pub fn gradient(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "from-blue-400 to-blue-600",
            SkillCategory::Backend => "from-green-400 to-green-600",
            SkillCategory::Tools => "from-orange-400 to-orange-600",
            SkillCategory::Design => "from-purple-400 to-purple-600",
            SkillCategory::Database => "from-yellow-400 to-yellow-600",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    /// Proficiency on a 1-5 scale.
    pub level: u8,
    pub category: SkillCategory,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    /// Free-form range such as "Jul 2023 – Dec 2023".
    pub duration: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub details: String,
    /// Certificate verification URL.
    pub link: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// The whole read-only content store.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Portfolio {
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Content embedded at build time; an empty portfolio if it fails to parse.
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_PORTFOLIO).unwrap_or_else(|e| {
            warn!("bundled portfolio rejected: {e}");
            Portfolio::default()
        })
    }

    /// Skills grouped by category, groups in order of first appearance.
    pub fn skills_by_category(&self) -> Vec<(SkillCategory, Vec<&Skill>)> {
        let mut groups: Vec<(SkillCategory, Vec<&Skill>)> = Vec::new();
        for skill in &self.skills {
            match groups.iter_mut().find(|(c, _)| *c == skill.category) {
                Some((_, list)) => list.push(skill),
                None => groups.push((skill.category, vec![skill])),
            }
        }
        groups
    }
}
