//! Scroll-derived header/nav state.

use log::debug;

use crate::config::ScrollThresholds;

/// Viewport-relative bounding box, as returned by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f64 {
        (self.right - self.left).max(0.0)
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Whether the horizontal line `y` lies within the vertical extent.
    pub fn straddles(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let r = Rect {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        };
        (r.left <= r.right && r.top <= r.bottom).then_some(r)
    }

    pub fn inset(&self, by: f64) -> Rect {
        Rect {
            left: self.left + by,
            top: self.top + by,
            right: self.right - by,
            bottom: self.bottom - by,
        }
    }
}

/// Read-only view of the browser the tracker depends on.
pub trait ScrollEnv {
    fn scroll_y(&self) -> f64;
    /// Bounding box of the section element with this id, if it exists.
    fn section_rect(&self, id: &str) -> Option<Rect>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: &'static str,
}

/// Navigation entries in declaration order; also the probe order.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "Home",
        section: "hero",
    },
    NavItem {
        label: "About",
        section: "about",
    },
    NavItem {
        label: "Skills",
        section: "skills",
    },
    NavItem {
        label: "Projects",
        section: "projects",
    },
    NavItem {
        label: "Contact",
        section: "contact",
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollState {
    pub offset: f64,
    pub header_solid: bool,
    pub show_scroll_top: bool,
    pub active_section: String,
}

pub fn header_solid(offset: f64, t: &ScrollThresholds) -> bool {
    offset > t.header
}

pub fn show_scroll_top(offset: f64, t: &ScrollThresholds) -> bool {
    offset > t.scroll_top
}

/// First section, in order, whose box straddles the probe line.
pub fn probe_section<'a, E: ScrollEnv + ?Sized>(
    env: &E,
    sections: &[&'a str],
    probe_line: f64,
) -> Option<&'a str> {
    sections.iter().copied().find(|id| {
        env.section_rect(id)
            .map(|r| r.straddles(probe_line))
            .unwrap_or(false)
    })
}

pub struct ScrollTracker {
    thresholds: ScrollThresholds,
    sections: Vec<&'static str>,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(thresholds: ScrollThresholds) -> Self {
        let sections: Vec<&'static str> = NAV_ITEMS.iter().map(|n| n.section).collect();
        ScrollTracker {
            thresholds,
            state: ScrollState {
                offset: 0.0,
                header_solid: false,
                show_scroll_top: false,
                active_section: sections[0].to_string(),
            },
            sections,
        }
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Recompute from the environment. Returns true when anything changed.
    pub fn update<E: ScrollEnv + ?Sized>(&mut self, env: &E) -> bool {
        let offset = env.scroll_y();
        let mut next = ScrollState {
            offset,
            header_solid: header_solid(offset, &self.thresholds),
            show_scroll_top: show_scroll_top(offset, &self.thresholds),
            active_section: self.state.active_section.clone(),
        };
        if let Some(id) = probe_section(env, &self.sections, self.thresholds.probe_line)
            && id != next.active_section
        {
            debug!("active section {} -> {}", next.active_section, id);
            next.active_section = id.to_string();
        }
        let changed = next != self.state;
        self.state = next;
        changed
    }

    /// Nav highlight for an item; depends only on the active section.
    pub fn is_active(&self, item: &NavItem) -> bool {
        self.state.active_section == item.section
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeEnv {
        y: f64,
        rects: HashMap<&'static str, Rect>,
    }

    impl ScrollEnv for FakeEnv {
        fn scroll_y(&self) -> f64 {
            self.y
        }
        fn section_rect(&self, id: &str) -> Option<Rect> {
            self.rects.get(id).copied()
        }
    }

    fn band(top: f64, bottom: f64) -> Rect {
        Rect::new(0.0, top, 1000.0, bottom)
    }

    #[test]
    fn picks_first_section_straddling_probe() {
        let mut env = FakeEnv {
            y: 900.0,
            rects: HashMap::new(),
        };
        env.rects.insert("hero", band(-900.0, -100.0));
        env.rects.insert("about", band(-100.0, 100.0));
        env.rects.insert("skills", band(100.0, 900.0));
        let mut t = ScrollTracker::new(ScrollThresholds::default());
        assert!(t.update(&env));
        // about's bottom touches the line and comes first in order
        assert_eq!(t.state().active_section, "about");
        assert!(t.is_active(&NAV_ITEMS[1]));
        assert!(!t.is_active(&NAV_ITEMS[2]));
    }

    #[test]
    fn keeps_previous_section_in_gaps() {
        let mut env = FakeEnv {
            y: 0.0,
            rects: HashMap::new(),
        };
        env.rects.insert("hero", band(0.0, 800.0));
        let mut t = ScrollTracker::new(ScrollThresholds::default());
        t.update(&env);
        env.rects.insert("hero", band(-800.0, 0.0));
        env.rects.insert("projects", band(50.0, 90.0));
        env.rects.insert("contact", band(150.0, 300.0));
        env.y = 800.0;
        t.update(&env);
        assert_eq!(t.state().active_section, "hero");
    }

    #[test]
    fn missing_elements_are_skipped() {
        let env = FakeEnv {
            y: 0.0,
            rects: HashMap::from([("contact", band(0.0, 500.0))]),
        };
        let mut t = ScrollTracker::new(ScrollThresholds::default());
        t.update(&env);
        assert_eq!(t.state().active_section, "contact");
    }

    #[test]
    fn update_reports_no_change_when_steady() {
        let env = FakeEnv {
            y: 10.0,
            rects: HashMap::new(),
        };
        let mut t = ScrollTracker::new(ScrollThresholds::default());
        assert!(t.update(&env));
        assert!(!t.update(&env));
    }

    #[test]
    fn intersection_and_inset() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 150.0, 150.0);
        assert_eq!(a.intersection(&b), Some(Rect::new(50.0, 50.0, 100.0, 100.0)));
        assert_eq!(a.intersection(&Rect::new(200.0, 0.0, 300.0, 10.0)), None);
        assert_eq!(a.inset(10.0), Rect::new(10.0, 10.0, 90.0, 90.0));
    }
}
