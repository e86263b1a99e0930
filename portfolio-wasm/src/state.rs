use portfolio_core::contact::ContactForm;
use portfolio_core::reveal::RevealTracker;
use portfolio_core::scene::Pointer;
use portfolio_core::scroll::ScrollTracker;
use portfolio_core::SiteConfig;
use web_sys::{Document, Element, Window};

use crate::background::Background;

/// Application state shared by the WASM callbacks through an
/// `Rc<RefCell<_>>` that each listener closure holds.
pub struct State {
    pub window: Window,
    pub document: Document,
    pub config: SiteConfig,
    pub scroll: ScrollTracker,
    pub reveal: RevealTracker,
    /// Elements watched by `reveal`, indexed the same way.
    pub reveal_targets: Vec<Element>,
    pub contact: ContactForm,
    /// Canvases that obtained a drawing context.
    pub backgrounds: Vec<Background>,
    pub pointer: Pointer,
    pub menu_open: bool,
    /// `performance.now()` at mount; scene time is measured from here.
    pub mounted_at: f64,
    /// Bumped per toast so an older hide timer leaves a newer toast alone.
    pub toast_seq: u32,
}
