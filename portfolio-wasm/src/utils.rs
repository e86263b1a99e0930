use log::{Level, LevelFilter, Log, Metadata, Record, warn};
use portfolio_core::SiteConfig;
use portfolio_core::scroll::Rect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

/// `log` backend that writes to the browser console, one console method
/// per level.
struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger. Later calls only change the level.
pub fn init_logging(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Level requested with `?log=<level>`, if any.
pub fn log_level_override(window: &Window) -> Option<LevelFilter> {
    let search = window.location().search().ok()?;
    get_query_param(&search, "log")?.parse().ok()
}

/// Site configuration: `window.__SITE_CONFIG` when the host page sets it,
/// otherwise the bundled one.
pub fn load_site_config(window: &Window) -> SiteConfig {
    let raw = js_sys::Reflect::get(window, &JsValue::from_str("__SITE_CONFIG"))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null());
    let Some(raw) = raw else {
        return SiteConfig::bundled();
    };
    // accept a JSON string or a plain object
    let text = match raw.as_string() {
        Some(s) => s,
        None => match js_sys::JSON::stringify(&raw).ok().map(String::from) {
            Some(s) => s,
            None => {
                warn!("window.__SITE_CONFIG is not serializable, using bundled config");
                return SiteConfig::bundled();
            }
        },
    };
    SiteConfig::from_json(&text).unwrap_or_else(|e| {
        warn!("window.__SITE_CONFIG rejected, using bundled config: {e}");
        SiteConfig::bundled()
    })
}

/// Build an absolute URL for an asset, taking into account the optional
/// `window.__BASE_URL` which is set by the host page.
pub fn asset_url(path: &str) -> String {
    let p = path.trim();
    if p.starts_with("http://") || p.starts_with("https://") || p.starts_with("data:") {
        return p.to_string();
    }
    let base = web_sys::window()
        .and_then(|w| {
            let v = js_sys::Reflect::get(&w, &JsValue::from_str("__BASE_URL")).ok()?;
            v.as_string()
        })
        .unwrap_or_else(|| "/".to_string());
    let base = if base.ends_with('/') {
        base
    } else {
        format!("{}/", base)
    };
    let p = p.trim_start_matches('/');
    format!("{}{}", base, p)
}

/// Simple query string parser used at start-up.
pub fn get_query_param(search: &str, key: &str) -> Option<String> {
    let s = search.trim_start_matches('?');
    for pair in s.split('&') {
        let mut it = pair.splitn(2, '=');
        let k = it.next()?;
        let v = it.next().unwrap_or("");
        if k == key {
            return Some(url_decode(v));
        }
    }
    None
}

fn url_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_encoding::percent_decode_str(&s)
        .decode_utf8_lossy()
        .to_string()
}

pub fn client_rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.right(), r.bottom())
}

/// The layout viewport as a rect at the origin.
pub fn viewport_rect(window: &Window) -> Rect {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Rect::new(0.0, 0.0, w, h)
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Toggle a class; missing elements are ignored.
pub fn set_class(el: Option<&Element>, class: &str, on: bool) {
    if let Some(el) = el {
        let _ = el.class_list().toggle_with_force(class, on);
    }
}

/// Milliseconds from the page's time origin.
pub fn now_ms(window: &Window) -> f64 {
    window
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}
