use std::cell::RefCell;
use std::rc::Rc;

use log::{LevelFilter, debug, info};
use portfolio_core::contact::ContactForm;
use portfolio_core::reveal::RevealTracker;
use portfolio_core::scene::{BackgroundScene, FrameInput, Pointer, seeded_rng};
use portfolio_core::scroll::ScrollTracker;
use portfolio_core::timeline::timeline;
use portfolio_core::{Portfolio, SiteConfig, markup};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Document;

mod background;
mod canvas;
mod constants;
mod contact;
mod nav;
mod state;
mod utils;

use background::{Background, init_background};
use constants::*;
use state::State;
use utils::{asset_url, init_logging, load_site_config, log_level_override, now_ms, query_all};

/// Rewrite relative asset paths against the host base URL.
fn resolve_assets(portfolio: &mut Portfolio) {
    portfolio.profile.portrait = asset_url(&portfolio.profile.portrait);
    for skill in &mut portfolio.skills {
        skill.icon = asset_url(&skill.icon);
    }
    for project in &mut portfolio.projects {
        project.image = asset_url(&project.image);
    }
}

fn fill(document: &Document, id: &str, html: &str) {
    match document.get_element_by_id(id) {
        Some(el) => el.set_inner_html(html),
        None => debug!("no #{id} on this page, section skipped"),
    }
}

fn compose_page(document: &Document, portfolio: &Portfolio, config: &SiteConfig) {
    fill(document, HERO_CONTENT, &markup::hero(&portfolio.profile));
    fill(document, ABOUT_CONTENT, &markup::about(&portfolio.profile));
    fill(document, SKILLS_CONTENT, &markup::skills(portfolio));
    fill(document, EXPERIENCE_CONTENT, &markup::experience(&portfolio.experience));
    fill(document, EDUCATION_CONTENT, &markup::education(portfolio, &config.cards));
    fill(document, PROJECTS_CONTENT, &markup::projects(portfolio, &config.cards));
    fill(document, TIMELINE_CONTENT, &markup::timeline(&timeline(portfolio)));
    fill(document, CONNECT_CONTENT, &markup::connect(&portfolio.profile));
    let year = js_sys::Date::new_0().get_full_year();
    fill(document, FOOTER_CONTENT, &markup::footer(&portfolio.profile, year));
}

fn mount_backgrounds(document: &Document, config: &SiteConfig, seed: u64) -> Vec<Background> {
    let mut rng = seeded_rng(seed);
    let scenes = [
        (HERO_CANVAS, BackgroundScene::hero(&config.scene, &mut rng)),
        (TIMELINE_CANVAS, BackgroundScene::timeline(&config.scene, &mut rng)),
    ];
    scenes
        .into_iter()
        .filter_map(|(id, scene)| match init_background(document, id, scene) {
            Ok(bg) => Some(bg),
            Err(e) => {
                debug!("{e}; background disabled");
                None
            }
        })
        .collect()
}

fn start_animation(state: Rc<RefCell<State>>) {
    type RafClosure = Closure<dyn FnMut(f64)>;
    let f: Rc<RefCell<Option<RafClosure>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let st = state.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        let window = {
            let mut s = st.borrow_mut();
            let input = FrameInput {
                elapsed: ((now_ms(&s.window) - s.mounted_at) / 1000.0) as f32,
                pointer: s.pointer,
            };
            for bg in &mut s.backgrounds {
                bg.render(input);
            }
            s.window.clone()
        };
        if let Some(cb) = f.borrow().as_ref() {
            let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    let window = state.borrow().window.clone();
    if let Some(cb) = g.borrow().as_ref() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init_logging(LevelFilter::Info);
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let config = load_site_config(&window);
    init_logging(log_level_override(&window).unwrap_or_else(|| config.log_level()));

    let mut portfolio = Portfolio::bundled();
    resolve_assets(&mut portfolio);
    compose_page(&document, &portfolio, &config);

    let reveal_targets = query_all(&document, REVEAL_TARGETS)?;
    let seed = config.scene.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
    let backgrounds = mount_backgrounds(&document, &config, seed);
    for bg in &backgrounds {
        bg.sync_size(&window);
    }
    info!(
        "portfolio mounted: {} reveal targets, {} backgrounds, seed {seed}",
        reveal_targets.len(),
        backgrounds.len()
    );

    let contact_form =
        ContactForm::new(config.email.clone()).with_fallback(portfolio.profile.email.clone());
    let state = Rc::new(RefCell::new(State {
        mounted_at: now_ms(&window),
        window,
        document,
        scroll: ScrollTracker::new(config.scroll),
        reveal: RevealTracker::new(reveal_targets.len(), config.reveal),
        reveal_targets,
        contact: contact_form,
        backgrounds,
        pointer: Pointer::default(),
        menu_open: false,
        toast_seq: 0,
        config,
    }));

    nav::attach_nav(state.clone())?;
    contact::attach_contact_form(state.clone())?;
    start_animation(state);
    Ok(())
}
