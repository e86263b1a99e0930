//! Presentational transforms from content records to card view models.

use crate::content::{Education, Project, Skill, SkillCategory};

pub const ELLIPSIS: char = '…';

/// A description as shown on a card.
///
/// `full` is set only when `display` is a shortened prefix; it carries the
/// original text for the hover/focus disclosure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Truncated {
    pub display: String,
    pub full: Option<String>,
}

impl Truncated {
    pub fn is_truncated(&self) -> bool {
        self.full.is_some()
    }

    /// The untruncated text, whichever branch produced this value.
    pub fn full_text(&self) -> &str {
        self.full.as_deref().unwrap_or(&self.display)
    }
}

/// Shorten `text` to `max` characters plus an ellipsis when it is strictly
/// longer than `max`. Counts chars, so a cut never lands inside a code point.
pub fn truncate(text: &str, max: usize) -> Truncated {
    match text.char_indices().nth(max) {
        Some((cut, _)) => Truncated {
            display: format!("{}{}", &text[..cut], ELLIPSIS),
            full: Some(text.to_string()),
        },
        None => Truncated {
            display: text.to_string(),
            full: None,
        },
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillCardView {
    pub name: String,
    pub icon: String,
    pub category: SkillCategory,
    pub level: u8,
    /// Width of the proficiency bar in percent.
    pub percent: f64,
}

pub fn skill_card(skill: &Skill) -> SkillCardView {
    let level = skill.level.clamp(1, 5);
    SkillCardView {
        name: skill.name.clone(),
        icon: skill.icon.clone(),
        category: skill.category,
        level,
        percent: f64::from(level) / 5.0 * 100.0,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectCardView {
    pub title: String,
    pub image: String,
    pub description: Truncated,
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
}

pub fn project_card(project: &Project, max_len: usize) -> ProjectCardView {
    ProjectCardView {
        title: project.title.clone(),
        image: project.image.clone(),
        description: truncate(&project.description, max_len),
        technologies: project.technologies.clone(),
        github_url: project.github_url.clone(),
        live_url: project.live_url.clone(),
        featured: project.featured,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EducationCardView {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub details: Truncated,
    pub certificate: Option<String>,
}

pub fn education_card(edu: &Education, max_len: usize) -> EducationCardView {
    EducationCardView {
        degree: edu.degree.clone(),
        institution: edu.institution.clone(),
        year: edu.year.clone(),
        details: truncate(&edu.details, max_len),
        certificate: edu.link.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exact_length_is_not_truncated() {
        let s = "a".repeat(120);
        let t = truncate(&s, 120);
        assert!(!t.is_truncated());
        assert_eq!(t.display, s);
    }

    #[test]
    fn one_over_is_truncated() {
        let s = "b".repeat(121);
        let t = truncate(&s, 120);
        assert_eq!(t.display, format!("{}…", "b".repeat(120)));
        assert_eq!(t.full.as_deref(), Some(s.as_str()));
    }

    #[test]
    fn multibyte_text_cuts_on_char_boundary() {
        let t = truncate("héllo wörld", 4);
        assert_eq!(t.display, "héll…");
        assert_eq!(t.full_text(), "héllo wörld");
    }

    #[test]
    fn skill_level_is_clamped() {
        let skill = Skill {
            name: "Rust".into(),
            icon: String::new(),
            level: 9,
            category: SkillCategory::Backend,
        };
        let view = skill_card(&skill);
        assert_eq!(view.level, 5);
        assert_eq!(view.percent, 100.0);
    }

    #[test]
    fn project_card_uses_limit() {
        let p = Project {
            title: "T".into(),
            description: "x".repeat(141),
            ..Default::default()
        };
        assert!(project_card(&p, 140).description.is_truncated());
        assert!(!project_card(&p, 141).description.is_truncated());
    }
}
