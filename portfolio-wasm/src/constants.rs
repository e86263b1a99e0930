//! Element ids and class names shared with the host page.

/// Section content containers filled at start-up.
pub const HERO_CONTENT: &str = "hero-content";
pub const ABOUT_CONTENT: &str = "about-content";
pub const SKILLS_CONTENT: &str = "skills-content";
pub const EXPERIENCE_CONTENT: &str = "experience-content";
pub const EDUCATION_CONTENT: &str = "education-content";
pub const PROJECTS_CONTENT: &str = "projects-content";
pub const TIMELINE_CONTENT: &str = "timeline-content";
pub const CONNECT_CONTENT: &str = "connect-content";
pub const FOOTER_CONTENT: &str = "footer-content";

/// Background canvases.
pub const HERO_CANVAS: &str = "hero-canvas";
pub const TIMELINE_CANVAS: &str = "timeline-canvas";

pub const HEADER: &str = "site-header";
pub const HEADER_SOLID_CLASS: &str = "header-solid";
pub const SCROLL_TOP: &str = "scroll-top";
pub const MENU_TOGGLE: &str = "menu-toggle";
pub const MOBILE_MENU: &str = "mobile-menu";
/// `data-resume` names which download the button triggers.
pub const RESUME_BUTTONS: &str = "[data-resume]";
/// In-page links outside the nav; smooth scroll only, never highlighted.
pub const SCROLL_LINKS: &str = "[data-scroll-to]";
/// Nav links carry the target section id in `data-section`.
pub const NAV_LINKS: &str = "[data-section]";
pub const ACTIVE_CLASS: &str = "active";
pub const OPEN_CLASS: &str = "open";
pub const HIDDEN_CLASS: &str = "hidden";

pub const REVEAL_TARGETS: &str = ".animate-on-scroll";
pub const REVEALED_CLASS: &str = "animate-fade-up";

pub const CONTACT_FORM: &str = "contact-form";
pub const CONTACT_SUBMIT: &str = "contact-submit";
pub const CONTACT_SENT: &str = "contact-sent";
pub const SEND_ANOTHER: &str = "send-another";
/// Field controls are `contact-<key>`, e.g. `contact-email`.
pub const CONTACT_FIELD_PREFIX: &str = "contact-";

pub const TOAST: &str = "toast";
/// Milliseconds a toast stays on screen.
pub const TOAST_MS: i32 = 5000;
