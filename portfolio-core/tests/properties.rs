use proptest::prelude::*;

use portfolio_core::cards::truncate;
use portfolio_core::config::ScrollThresholds;
use portfolio_core::scene::{ParticleBuffer, seeded_rng};
use portfolio_core::scroll::{header_solid, show_scroll_top};

proptest! {
    #[test]
    fn truncation_keeps_prefix_and_full_text(s in "\\PC{0,200}", max in 1usize..160) {
        let t = truncate(&s, max);
        let len = s.chars().count();
        if len <= max {
            prop_assert_eq!(&t.display, &s);
            prop_assert!(t.full.is_none());
        } else {
            let prefix: String = s.chars().take(max).collect();
            prop_assert_eq!(t.display, format!("{prefix}…"));
            prop_assert_eq!(t.full.as_deref(), Some(s.as_str()));
        }
        let again = truncate(&s, max);
        prop_assert_eq!(again.full_text(), s.as_str());
    }

    #[test]
    fn scroll_flags_follow_their_own_thresholds(offset in -100.0f64..2000.0) {
        let t = ScrollThresholds::default();
        prop_assert_eq!(header_solid(offset, &t), offset > 50.0);
        prop_assert_eq!(show_scroll_top(offset, &t), offset > 300.0);
    }

    #[test]
    fn shell_points_respect_radius_bounds(
        seed in any::<u64>(),
        n in 0usize..2000,
        r_min in 0.0f32..5.0,
        span in 0.01f32..5.0,
    ) {
        let r_max = r_min + span;
        let buf = ParticleBuffer::sphere_shell(n, r_min, r_max, &mut seeded_rng(seed));
        prop_assert_eq!(buf.len(), n);
        for p in buf.positions() {
            let r = p.length();
            prop_assert!(r >= r_min && r <= r_max, "radius {} outside [{}, {}]", r, r_min, r_max);
        }
    }
}
