use std::cell::Cell;

use portfolio_core::config::{RevealConfig, ScrollThresholds};
use portfolio_core::reveal::{RevealState, RevealTracker};
use portfolio_core::scroll::{NAV_ITEMS, Rect, ScrollEnv, ScrollTracker};

/// A page of stacked 800px sections scrolled by a fake window.
struct Page {
    y: Cell<f64>,
    sections: Vec<(&'static str, f64, f64)>,
}

impl Page {
    fn new() -> Self {
        let mut sections = Vec::new();
        let mut top = 0.0;
        for id in ["hero", "about", "skills", "experience", "education", "projects", "contact"] {
            sections.push((id, top, top + 800.0));
            top += 800.0;
        }
        Page {
            y: Cell::new(0.0),
            sections,
        }
    }

    fn scroll_to(&self, y: f64) {
        self.y.set(y);
    }
}

impl ScrollEnv for Page {
    fn scroll_y(&self) -> f64 {
        self.y.get()
    }

    fn section_rect(&self, id: &str) -> Option<Rect> {
        let y = self.y.get();
        self.sections
            .iter()
            .find(|(s, _, _)| *s == id)
            .map(|(_, top, bottom)| Rect::new(0.0, top - y, 1280.0, bottom - y))
    }
}

#[test]
fn scrolling_through_the_page() {
    let page = Page::new();
    let mut tracker = ScrollTracker::new(ScrollThresholds::default());

    tracker.update(&page);
    assert_eq!(tracker.state().active_section, "hero");
    assert!(!tracker.state().header_solid);

    page.scroll_to(120.0);
    tracker.update(&page);
    assert!(tracker.state().header_solid);
    assert!(!tracker.state().show_scroll_top);

    page.scroll_to(1000.0);
    tracker.update(&page);
    assert_eq!(tracker.state().active_section, "about");
    assert!(tracker.state().show_scroll_top);

    page.scroll_to(1700.0);
    tracker.update(&page);
    assert_eq!(tracker.state().active_section, "skills");

    // experience and education are not nav targets: the highlight stays put
    page.scroll_to(2500.0);
    tracker.update(&page);
    assert_eq!(tracker.state().active_section, "skills");
    page.scroll_to(3300.0);
    tracker.update(&page);
    assert_eq!(tracker.state().active_section, "skills");

    page.scroll_to(4100.0);
    tracker.update(&page);
    assert_eq!(tracker.state().active_section, "projects");

    let highlighted: Vec<_> = NAV_ITEMS
        .iter()
        .filter(|i| tracker.is_active(i))
        .map(|i| i.label)
        .collect();
    assert_eq!(highlighted, vec!["Projects"]);
}

#[test]
fn reveal_follows_scroll_once() {
    let page = Page::new();
    let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
    let mut reveal = RevealTracker::new(page.sections.len(), RevealConfig::default());
    let rect_of = |i: usize| page.sections.get(i).and_then(|(id, _, _)| page.section_rect(id));

    assert_eq!(reveal.scan(&viewport, rect_of), vec![0]);
    page.scroll_to(1000.0);
    let newly = reveal.scan(&viewport, rect_of);
    assert_eq!(newly, vec![1, 2]);
    page.scroll_to(0.0);
    assert!(reveal.scan(&viewport, rect_of).is_empty());
    assert_eq!(reveal.state(1), Some(RevealState::Revealed));
    assert_eq!(reveal.state(6), Some(RevealState::Unseen));
}
