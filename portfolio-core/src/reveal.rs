//! One-shot reveal-on-scroll bookkeeping.

use std::collections::BTreeSet;

use crate::config::RevealConfig;
use crate::scroll::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Unseen,
    Revealed,
}

/// Whether an element is far enough inside the viewport to reveal.
///
/// The viewport is shrunk by `margin` on every side. The element qualifies
/// once a non-empty part of it is visible and that part is at least
/// `threshold` of its area. Zero-area elements qualify when they touch the
/// shrunk viewport at all.
pub fn should_reveal(element: &Rect, viewport: &Rect, threshold: f64, margin: f64) -> bool {
    let root = viewport.inset(margin);
    let Some(visible) = element.intersection(&root) else {
        return false;
    };
    let area = element.area();
    if area <= 0.0 {
        return true;
    }
    let ratio = visible.area() / area;
    ratio > 0.0 && ratio >= threshold
}

/// Tracks a fixed set of elements by index. Revealed elements leave the
/// observed set for good.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    config: RevealConfig,
    states: Vec<RevealState>,
    observed: BTreeSet<usize>,
}

impl RevealTracker {
    pub fn new(count: usize, config: RevealConfig) -> Self {
        RevealTracker {
            config,
            states: vec![RevealState::Unseen; count],
            observed: (0..count).collect(),
        }
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    pub fn observed(&self) -> impl Iterator<Item = usize> + '_ {
        self.observed.iter().copied()
    }

    pub fn is_done(&self) -> bool {
        self.observed.is_empty()
    }

    /// Check every still-observed element and return the ones revealed now.
    /// `rect_of` returns `None` for elements that are gone from the page.
    pub fn scan<F>(&mut self, viewport: &Rect, mut rect_of: F) -> Vec<usize>
    where
        F: FnMut(usize) -> Option<Rect>,
    {
        let RevealConfig { threshold, margin } = self.config;
        let newly: Vec<usize> = self
            .observed
            .iter()
            .copied()
            .filter(|&i| {
                rect_of(i)
                    .map(|r| should_reveal(&r, viewport, threshold, margin))
                    .unwrap_or(false)
            })
            .collect();
        for &i in &newly {
            self.observed.remove(&i);
            self.states[i] = RevealState::Revealed;
        }
        newly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 800.0)
    }

    #[test]
    fn margin_shrinks_viewport() {
        // fully visible in the raw viewport, but only in the 50px margin band
        let el = Rect::new(100.0, 760.0, 300.0, 800.0);
        assert!(!should_reveal(&el, &viewport(), 0.1, 50.0));
        assert!(should_reveal(&el, &viewport(), 0.1, 0.0));
    }

    #[test]
    fn threshold_fraction() {
        // 100px tall, 9px inside the root -> 9%
        let el = Rect::new(100.0, 741.0, 300.0, 841.0);
        assert!(!should_reveal(&el, &viewport(), 0.1, 50.0));
        // 10px inside -> 10%
        let el = Rect::new(100.0, 740.0, 300.0, 840.0);
        assert!(should_reveal(&el, &viewport(), 0.1, 50.0));
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut t = RevealTracker::new(3, RevealConfig::default());
        let mut rects = [
            Rect::new(0.0, 100.0, 500.0, 300.0),
            Rect::new(0.0, 2000.0, 500.0, 2300.0),
            Rect::new(0.0, 3000.0, 500.0, 3300.0),
        ];
        assert_eq!(t.scan(&viewport(), |i| rects.get(i).copied()), vec![0]);
        assert_eq!(t.state(0), Some(RevealState::Revealed));
        assert_eq!(t.state(1), Some(RevealState::Unseen));

        // scroll: element 0 leaves, element 1 enters
        rects[0] = Rect::new(0.0, -2000.0, 500.0, -1800.0);
        rects[1] = Rect::new(0.0, 200.0, 500.0, 500.0);
        assert_eq!(t.scan(&viewport(), |i| rects.get(i).copied()), vec![1]);
        assert_eq!(t.state(0), Some(RevealState::Revealed));
        assert_eq!(t.observed().collect::<Vec<_>>(), vec![2]);
        assert!(!t.is_done());
    }

    #[test]
    fn missing_elements_stay_observed() {
        let mut t = RevealTracker::new(1, RevealConfig::default());
        assert!(t.scan(&viewport(), |_| None).is_empty());
        assert_eq!(t.state(0), Some(RevealState::Unseen));
    }
}
