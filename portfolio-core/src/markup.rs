//! HTML fragments for the page sections. Every interpolated string goes
//! through [`escape`].

use std::fmt::Write;

use crate::cards::{
    EducationCardView, ProjectCardView, SkillCardView, Truncated, education_card, project_card,
    skill_card,
};
use crate::config::CardLimits;
use crate::content::{Experience, Portfolio, Profile};
use crate::timeline::{Side, TimelineItem, TimelineKind, side_for};

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Description paragraph. A truncated text becomes a focusable trigger that
/// wraps its own tooltip, so the full text travels with the trigger.
pub fn description(text: &Truncated, class: &str) -> String {
    match &text.full {
        Some(full) => format!(
            "<p class=\"{class} cursor-help tooltip-trigger\" tabindex=\"0\">{}\
             <span class=\"tooltip-content\" role=\"tooltip\">{}</span></p>",
            escape(&text.display),
            escape(full)
        ),
        None => format!("<p class=\"{class}\">{}</p>", escape(&text.display)),
    }
}

fn external_link(href: &str, label: &str, class: &str) -> String {
    format!(
        "<a class=\"{class}\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape(href),
        escape(label)
    )
}

/// Sections listed under the footer's Quick Links, in page order.
pub const QUICK_LINKS: [(&str, &str); 7] = [
    ("hero", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("education", "Education"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Greeting, title and tagline with the two calls to action. The buttons only
/// carry `data-scroll-to` / `data-resume`; the glue crate wires the clicks.
pub fn hero(profile: &Profile) -> String {
    format!(
        "<div class=\"animate-on-scroll\">\
         <span class=\"badge-outline\">Available for hire</span>\
         <h1 class=\"hero-name\">Hi, I'm <span class=\"gradient-text\">{}</span></h1>\
         <h2 class=\"hero-title\">{}</h2><p class=\"hero-tagline\">{}</p>\
         <div class=\"hero-actions\">\
         <button type=\"button\" class=\"btn-primary\" data-scroll-to=\"contact\">Get In Touch</button>\
         <button type=\"button\" class=\"btn-outline\" data-resume=\"hero\">Download Resume</button>\
         </div></div>",
        escape(profile.first_name()),
        escape(&profile.title),
        escape(&profile.tagline)
    )
}

pub fn about(profile: &Profile) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<img class=\"portrait\" src=\"{}\" alt=\"{}\" loading=\"lazy\">",
        escape(&profile.portrait),
        escape(&profile.name)
    );
    let _ = write!(html, "<p class=\"bio\">{}</p>", escape(&profile.bio));
    let _ = write!(
        html,
        "<ul class=\"facts\"><li>{}</li><li>{}+ years experience</li><li>{}</li></ul>",
        escape(&profile.location),
        profile.years_of_experience,
        escape(&profile.email)
    );
    let links = &profile.social_links;
    let _ = write!(
        html,
        "<div class=\"social\">{}{}<a href=\"{}\">Email</a></div>",
        external_link(&links.github, "GitHub", "social-link"),
        external_link(&links.linkedin, "LinkedIn", "social-link"),
        escape(&links.email)
    );
    html
}

fn connect_card(href: &str, label: &str, note: &str, external: bool) -> String {
    let target = if external {
        " target=\"_blank\" rel=\"noopener noreferrer\""
    } else {
        ""
    };
    format!(
        "<a class=\"connect-card\" href=\"{}\"{target}>\
         <div class=\"connect-label\">{}</div><div class=\"connect-note\">{}</div></a>",
        escape(href),
        escape(label),
        escape(note)
    )
}

/// "Let's Connect" panel shown beside the contact form.
pub fn connect(profile: &Profile) -> String {
    let links = &profile.social_links;
    format!(
        "<h3>Let's Connect</h3><div class=\"connect-list\">{}{}{}</div>",
        connect_card(&links.github, "GitHub", "View my code", true),
        connect_card(&links.linkedin, "LinkedIn", "Professional network", true),
        connect_card(&links.email, "Email", &profile.email, false)
    )
}

pub fn footer(profile: &Profile, year: u32) -> String {
    let links = &profile.social_links;
    let mut html = String::new();
    let _ = write!(
        html,
        "<div class=\"footer-grid\"><div class=\"footer-brand gradient-text\">{}</div>",
        escape(&profile.name)
    );
    html.push_str("<div><h4>Quick Links</h4><ul>");
    for (section, label) in QUICK_LINKS {
        let _ = write!(
            html,
            "<li><a class=\"footer-link\" href=\"#{section}\" data-scroll-to=\"{section}\">{label}</a></li>"
        );
    }
    let _ = write!(
        html,
        "</ul></div><div><h4>Resources</h4><ul><li>{}</li><li>{}</li>\
         <li><a class=\"footer-link\" href=\"{}\">Email</a></li></ul></div>",
        external_link(&links.github, "GitHub", "footer-link"),
        external_link(&links.linkedin, "LinkedIn", "footer-link"),
        escape(&links.email)
    );
    let _ = write!(
        html,
        "<div><h4>Connect</h4><div class=\"footer-social\">\
         <a class=\"icon-github\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"GitHub Profile\"></a>\
         <a class=\"icon-linkedin\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"LinkedIn Profile\"></a>\
         </div></div></div>",
        escape(&links.github),
        escape(&links.linkedin)
    );
    let _ = write!(
        html,
        "<p class=\"footer-copy\">© {year} {}. All rights reserved.</p>",
        escape(&profile.name)
    );
    html
}

pub fn skill_card_html(view: &SkillCardView) -> String {
    let gradient = view.category.gradient();
    format!(
        "<div class=\"skill-card\">\
         <div class=\"skill-icon bg-gradient-to-br {gradient}\"><img src=\"{}\" alt=\"{} icon\" loading=\"lazy\"></div>\
         <h3>{}</h3><p class=\"skill-category\">{}</p>\
         <div class=\"skill-level\"><span>Proficiency</span><span>{}/5</span></div>\
         <div class=\"skill-bar\"><div class=\"bg-gradient-to-r {gradient}\" style=\"width: {}%\"></div></div>\
         </div>",
        escape(&view.icon),
        escape(&view.name),
        escape(&view.name),
        view.category.label(),
        view.level,
        view.percent
    )
}

pub fn skills(portfolio: &Portfolio) -> String {
    let mut html = String::new();
    for (category, list) in portfolio.skills_by_category() {
        let _ = write!(
            html,
            "<div class=\"skill-group\"><h3>{}</h3><div class=\"skill-grid\">",
            category.label()
        );
        for (i, skill) in list.iter().enumerate() {
            let _ = write!(
                html,
                "<div style=\"animation-delay: {:.1}s\">{}</div>",
                i as f64 * 0.1,
                skill_card_html(&skill_card(skill))
            );
        }
        html.push_str("</div></div>");
    }
    html
}

pub fn experience(entries: &[Experience]) -> String {
    let mut html = String::new();
    for exp in entries {
        let _ = write!(
            html,
            "<div class=\"experience-card\"><h3>{}</h3><p class=\"company\">{}</p>\
             <span class=\"badge\">{}</span><p>{}</p><ul>",
            escape(&exp.role),
            escape(&exp.company),
            escape(&exp.duration),
            escape(&exp.description)
        );
        for a in &exp.achievements {
            let _ = write!(html, "<li>{}</li>", escape(a));
        }
        html.push_str("</ul></div>");
    }
    html
}

pub fn education_card_html(view: &EducationCardView) -> String {
    let icon = if view.certificate.is_some() {
        "icon-certificate"
    } else {
        "icon-graduation"
    };
    let footer = match &view.certificate {
        Some(href) => external_link(href, "View Certificate", "btn-outline"),
        None => "<div class=\"btn-placeholder\"></div>".to_string(),
    };
    format!(
        "<div class=\"education-card\"><div class=\"card-head\"><span class=\"{icon}\"></span>\
         <span class=\"badge\">{}</span></div><h3>{}</h3><p class=\"institution\">{}</p>{}\
         <div class=\"card-foot\">{footer}</div></div>",
        escape(&view.year),
        escape(&view.degree),
        escape(&view.institution),
        description(&view.details, "details")
    )
}

pub fn education(portfolio: &Portfolio, limits: &CardLimits) -> String {
    portfolio
        .education
        .iter()
        .map(|e| education_card_html(&education_card(e, limits.education)))
        .collect()
}

pub fn project_card_html(view: &ProjectCardView) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<div class=\"project-card\"><div class=\"project-image\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></div>\
         <div class=\"project-body\"><div class=\"project-head\"><h3>{}</h3>",
        escape(&view.image),
        escape(&view.title),
        escape(&view.title)
    );
    if view.featured {
        html.push_str("<span class=\"badge\">Featured</span>");
    }
    html.push_str("</div>");
    html.push_str(&description(&view.description, "description"));
    html.push_str("<div class=\"tech\">");
    for tech in &view.technologies {
        let _ = write!(html, "<span class=\"badge-outline\">{}</span>", escape(tech));
    }
    html.push_str("</div><div class=\"project-links\">");
    if let Some(href) = &view.github_url {
        html.push_str(&external_link(href, "Code", "btn-outline"));
    }
    if let Some(href) = &view.live_url {
        html.push_str(&external_link(href, "Demo", "btn-primary"));
    }
    html.push_str("</div></div></div>");
    html
}

pub fn projects(portfolio: &Portfolio, limits: &CardLimits) -> String {
    let mut html = String::new();
    for (i, p) in portfolio.projects.iter().enumerate() {
        let _ = write!(
            html,
            "<div style=\"animation-delay: {:.1}s\">{}</div>",
            i as f64 * 0.2,
            project_card_html(&project_card(p, limits.project))
        );
    }
    html
}

pub fn timeline_item(item: &TimelineItem, index: usize) -> String {
    let side = match side_for(index) {
        Side::Left => "timeline-left",
        Side::Right => "timeline-right",
    };
    let kind = match item.kind {
        TimelineKind::Experience => "kind-experience",
        TimelineKind::Education => "kind-education",
    };
    let mut html = String::new();
    let _ = write!(
        html,
        "<div class=\"timeline-item {side} animate-on-scroll\" data-id=\"{}\">\
         <div class=\"timeline-card {kind}\"><span class=\"badge\">{}</span>\
         <span class=\"badge\">{}</span><h3>{}</h3><p class=\"subtitle\">{}",
        escape(&item.id),
        item.kind.label(),
        escape(&item.date),
        escape(&item.title),
        escape(&item.subtitle)
    );
    if let Some(loc) = &item.location {
        let _ = write!(html, " • {}", escape(loc));
    }
    let _ = write!(html, "</p><p>{}</p>", escape(&item.description));
    if !item.achievements.is_empty() {
        html.push_str("<ul>");
        for a in &item.achievements {
            let _ = write!(html, "<li>{}</li>", escape(a));
        }
        html.push_str("</ul>");
    }
    if let Some(href) = &item.link {
        html.push_str(&external_link(href, "View Certificate", "btn-outline"));
    }
    html.push_str("</div><div class=\"timeline-dot\"></div></div>");
    html
}

pub fn timeline(items: &[TimelineItem]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| timeline_item(item, i))
        .collect()
}
