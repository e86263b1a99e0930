use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use portfolio_core::scene::Pointer;
use portfolio_core::scroll::{NAV_ITEMS, Rect, ScrollEnv};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollToOptions, Window,
};

use crate::constants::{
    ACTIVE_CLASS, HEADER, HEADER_SOLID_CLASS, HIDDEN_CLASS, MENU_TOGGLE, MOBILE_MENU, NAV_LINKS,
    OPEN_CLASS, RESUME_BUTTONS, REVEALED_CLASS, SCROLL_LINKS, SCROLL_TOP,
};
use crate::state::State;
use crate::utils::{asset_url, client_rect, query_all, set_class, viewport_rect};

/// Live window/document behind [`ScrollEnv`].
struct DomScrollEnv<'a> {
    window: &'a Window,
    document: &'a Document,
}

impl ScrollEnv for DomScrollEnv<'_> {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn section_rect(&self, id: &str) -> Option<Rect> {
        self.document.get_element_by_id(id).map(|el| client_rect(&el))
    }
}

/// Recompute the scroll-derived state and reveal whatever came into view.
pub fn refresh(state: &mut State) {
    let env = DomScrollEnv {
        window: &state.window,
        document: &state.document,
    };
    if state.scroll.update(&env) {
        apply_scroll_state(state);
    }
    if !state.reveal.is_done() {
        let viewport = viewport_rect(&state.window);
        let targets = &state.reveal_targets;
        let newly = state
            .reveal
            .scan(&viewport, |i| targets.get(i).map(client_rect));
        for i in newly {
            set_class(targets.get(i), REVEALED_CLASS, true);
        }
    }
}

fn apply_scroll_state(state: &State) {
    let doc = &state.document;
    let scroll = state.scroll.state();
    set_class(
        doc.get_element_by_id(HEADER).as_ref(),
        HEADER_SOLID_CLASS,
        scroll.header_solid,
    );
    set_class(
        doc.get_element_by_id(SCROLL_TOP).as_ref(),
        HIDDEN_CLASS,
        !scroll.show_scroll_top,
    );
    let Ok(links) = query_all(doc, NAV_LINKS) else {
        return;
    };
    for link in &links {
        let section = link.get_attribute("data-section").unwrap_or_default();
        let active = NAV_ITEMS
            .iter()
            .find(|item| item.section == section)
            .is_some_and(|item| state.scroll.is_active(item));
        set_class(Some(link), ACTIVE_CLASS, active);
    }
}

fn set_menu_open(state: &mut State, open: bool) {
    state.menu_open = open;
    let doc = &state.document;
    set_class(doc.get_element_by_id(MOBILE_MENU).as_ref(), OPEN_CLASS, open);
    for link in query_all(&doc, SCROLL_LINKS)? {
        let st = state.clone();
        let section = link.get_attribute("data-scroll-to").unwrap_or_default();
        on_click(&link, move |e: Event| {
            e.prevent_default();
            smooth_scroll_to(&st.borrow().document, &section);
        })?;
    }

    if let Some(btn) = doc.get_element_by_id(MENU_TOGGLE) {
        let _ = btn.set_attribute("aria-expanded", if open { "true" } else { "false" });
    }
}

fn smooth_scroll_to(document: &Document, section: &str) {
    match document.get_element_by_id(section) {
        Some(el) => {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
        None => debug!("nav target #{section} not found"),
    }
}

/// Trigger a download through a synthesized link click.
fn download_file(document: &Document, url: &str, filename: &str) -> Result<(), JsValue> {
    let a = document.create_element("a")?.dyn_into::<HtmlElement>()?;
    a.set_attribute("href", url)?;
    a.set_attribute("download", filename)?;
    a.click();
    Ok(())
}

fn on_click(el: &Element, f: impl FnMut(Event) + 'static) -> Result<(), JsValue> {
    let onclick = Closure::<dyn FnMut(Event)>::wrap(Box::new(f));
    el.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
    onclick.forget();
    Ok(())
}

pub fn attach_nav(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let (window, doc) = {
        let s = state.borrow();
        (s.window.clone(), s.document.clone())
    };

    // Scroll and resize both re-derive the page state
    {
        let st = state.clone();
        let onscroll = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            refresh(&mut st.borrow_mut());
        }));
        window.add_event_listener_with_callback("scroll", onscroll.as_ref().unchecked_ref())?;
        onscroll.forget();
    }
    {
        let st = state.clone();
        let onresize = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut s = st.borrow_mut();
            for bg in &s.backgrounds {
                bg.sync_size(&s.window);
            }
            refresh(&mut s);
        }));
        window.add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
        onresize.forget();
    }

    // Pointer drives the hero parallax
    {
        let st = state.clone();
        let onmove = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let mut s = st.borrow_mut();
            let vp = viewport_rect(&s.window);
            s.pointer = Pointer::from_client(
                e.client_x() as f64,
                e.client_y() as f64,
                vp.width(),
                vp.height(),
            );
        }));
        window.add_event_listener_with_callback("mousemove", onmove.as_ref().unchecked_ref())?;
        onmove.forget();
    }

    for link in query_all(&doc, NAV_LINKS)? {
        let st = state.clone();
        let section = link.get_attribute("data-section").unwrap_or_default();
        on_click(&link, move |e: Event| {
            e.prevent_default();
            let mut s = st.borrow_mut();
            set_menu_open(&mut s, false);
            smooth_scroll_to(&s.document, &section);
        })?;
    }

    for link in query_all(&doc, SCROLL_LINKS)? {
        let st = state.clone();
        let section = link.get_attribute("data-scroll-to").unwrap_or_default();
        on_click(&link, move |e: Event| {
            e.prevent_default();
            smooth_scroll_to(&st.borrow().document, &section);
        })?;
    }

    if let Some(btn) = doc.get_element_by_id(MENU_TOGGLE) {
        let st = state.clone();
        on_click(&btn, move |_e: Event| {
            let mut s = st.borrow_mut();
            let open = !s.menu_open;
            set_menu_open(&mut s, open);
        })?;
    }

    if let Some(btn) = doc.get_element_by_id(SCROLL_TOP) {
        let st = state.clone();
        on_click(&btn, move |_e: Event| {
            let opts = ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(ScrollBehavior::Smooth);
            st.borrow().window.scroll_to_with_scroll_to_options(&opts);
        })?;
    }

    for btn in query_all(&doc, RESUME_BUTTONS)? {
        let st = state.clone();
        let trigger = btn.get_attribute("data-resume").unwrap_or_default();
        on_click(&btn, move |e: Event| {
            e.prevent_default();
            let s = st.borrow();
            let resume = s.config.resume_for(&trigger);
            let url = asset_url(&resume.path);
            if let Err(err) = download_file(&s.document, &url, &resume.filename) {
                debug!("resume download failed: {err:?}");
            }
        })?;
    }

    let mut s = state.borrow_mut();
    refresh(&mut s);
    apply_scroll_state(&s);
    Ok(())
}
