use crate::content::Portfolio;

/// Year used when a date string carries no parsable year.
pub const FALLBACK_YEAR: i32 = 2020;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineKind {
    Experience,
    Education,
}

impl TimelineKind {
    pub fn label(self) -> &'static str {
        match self {
            TimelineKind::Experience => "Experience",
            TimelineKind::Education => "Education",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineItem {
    pub id: String,
    pub kind: TimelineKind,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub location: Option<String>,
    pub description: String,
    pub achievements: Vec<String>,
    pub link: Option<String>,
    pub year: i32,
}

fn leading_int(s: &str) -> Option<i32> {
    let digits: String = s.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Start year of a range like "Jul 2023 – Dec 2023": the second word of the
/// part before the en dash.
pub fn start_year(duration: &str) -> i32 {
    duration
        .split('–')
        .next()
        .and_then(|start| start.trim().split(' ').nth(1))
        .and_then(leading_int)
        .unwrap_or(FALLBACK_YEAR)
}

/// Experience and education merged into one list, newest first. Items with
/// the same year keep their source order, experience before education.
pub fn timeline(portfolio: &Portfolio) -> Vec<TimelineItem> {
    let exp = portfolio
        .experience
        .iter()
        .enumerate()
        .map(|(i, e)| TimelineItem {
            id: format!("exp-{i}"),
            kind: TimelineKind::Experience,
            title: e.role.clone(),
            subtitle: e.company.clone(),
            date: e.duration.clone(),
            location: Some(e.location.clone()).filter(|l| !l.is_empty()),
            description: e.description.clone(),
            achievements: e.achievements.clone(),
            link: None,
            year: start_year(&e.duration),
        });
    let edu = portfolio
        .education
        .iter()
        .enumerate()
        .map(|(i, e)| TimelineItem {
            id: format!("edu-{i}"),
            kind: TimelineKind::Education,
            title: e.degree.clone(),
            subtitle: e.institution.clone(),
            date: e.year.clone(),
            location: None,
            description: e.details.clone(),
            achievements: Vec::new(),
            link: e.link.clone(),
            year: leading_int(&e.year).unwrap_or(FALLBACK_YEAR),
        });
    let mut items: Vec<TimelineItem> = exp.chain(edu).collect();
    items.sort_by(|a, b| b.year.cmp(&a.year));
    items
}

/// Alternating placement on wide layouts.
pub fn side_for(index: usize) -> Side {
    if index % 2 == 0 { Side::Left } else { Side::Right }
}
