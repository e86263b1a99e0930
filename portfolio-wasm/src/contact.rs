use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use portfolio_core::DeliveryError;
use portfolio_core::contact::{
    ContactEvent, Effect, EmailRequest, Field, NoticeKind, Notification, Status,
};
use portfolio_core::markup::escape;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlInputElement, HtmlTextAreaElement, Request,
    RequestInit, RequestMode, Response, Window,
};

use crate::constants::{
    CONTACT_FIELD_PREFIX, CONTACT_FORM, CONTACT_SENT, CONTACT_SUBMIT, HIDDEN_CLASS, SEND_ANOTHER,
    TOAST, TOAST_MS,
};
use crate::state::State;
use crate::utils::set_class;

fn field_element(document: &Document, field: Field) -> Option<Element> {
    document.get_element_by_id(&format!("{CONTACT_FIELD_PREFIX}{}", field.key()))
}

fn control_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn set_control_value(el: &Element, value: &str) {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        if input.value() != value {
            input.set_value(value);
        }
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>()
        && area.value() != value
    {
        area.set_value(value);
    }
}

// Wires the contact form controls to the form state machine.
pub fn attach_contact_form(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let doc: Document = state.borrow().document.clone();
    let Some(form) = doc.get_element_by_id(CONTACT_FORM) else {
        debug!("no #{CONTACT_FORM} on this page");
        return Ok(());
    };

    for field in Field::ALL {
        let Some(el) = field_element(&doc, field) else {
            continue;
        };
        let st = state.clone();
        let el_for_closure = el.clone();
        let oninput = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            dispatch(&st, ContactEvent::Input(field, control_value(&el_for_closure)));
        }));
        el.add_event_listener_with_callback("input", oninput.as_ref().unchecked_ref())?;
        oninput.forget();
    }

    {
        let st = state.clone();
        let onsubmit = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            // pick up values the browser filled in without input events
            let doc = st.borrow().document.clone();
            for field in Field::ALL {
                if let Some(el) = field_element(&doc, field) {
                    dispatch(&st, ContactEvent::Input(field, control_value(&el)));
                }
            }
            dispatch(&st, ContactEvent::Submit);
        }));
        form.add_event_listener_with_callback("submit", onsubmit.as_ref().unchecked_ref())?;
        onsubmit.forget();
    }

    if let Some(btn) = doc.get_element_by_id(SEND_ANOTHER) {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            dispatch(&st, ContactEvent::SendAnother);
        }));
        btn.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    render_form(&state.borrow());
    Ok(())
}

/// Feed one event to the form, redraw it, and run the resulting effects.
pub fn dispatch(state: &Rc<RefCell<State>>, event: ContactEvent) {
    let effects = {
        let mut s = state.borrow_mut();
        let effects = s.contact.handle(event);
        render_form(&s);
        effects
    };
    for effect in effects {
        match effect {
            Effect::Send(request) => {
                let st = state.clone();
                let window = state.borrow().window.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = match send_email(&window, &request).await {
                        Ok(()) => ContactEvent::Delivered,
                        Err(err) => ContactEvent::DeliveryFailed(err),
                    };
                    dispatch(&st, outcome);
                });
            }
            Effect::Notify(notice) => show_toast(state, &notice),
        }
    }
}

fn render_form(state: &State) {
    let doc = &state.document;
    let status = state.contact.status();
    let fields = state.contact.fields();
    for field in Field::ALL {
        if let Some(el) = field_element(doc, field) {
            set_control_value(&el, fields.get(field));
        }
    }
    if let Some(btn) = doc
        .get_element_by_id(CONTACT_SUBMIT)
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    {
        let sending = status == Status::Submitting;
        btn.set_disabled(sending);
        btn.set_text_content(Some(if sending { "Sending..." } else { "Send Message" }));
    }
    let submitted = status == Status::Submitted;
    set_class(doc.get_element_by_id(CONTACT_FORM).as_ref(), HIDDEN_CLASS, submitted);
    set_class(doc.get_element_by_id(CONTACT_SENT).as_ref(), HIDDEN_CLASS, !submitted);
}

fn js_error(v: JsValue) -> DeliveryError {
    DeliveryError::Network(v.as_string().unwrap_or_else(|| format!("{v:?}")))
}

/// POST the request as JSON. Any non-2xx status is a rejection.
async fn send_email(window: &Window, request: &EmailRequest) -> Result<(), DeliveryError> {
    let body = request
        .to_json()
        .map_err(|e| DeliveryError::Network(e.to_string()))?;
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));
    let req = Request::new_with_str_and_init(&request.endpoint, &opts).map_err(js_error)?;
    req.headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;
    let resp: Response = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    if resp.ok() {
        info!("email provider accepted the message");
        return Ok(());
    }
    let text = match resp.text() {
        Ok(p) => JsFuture::from(p)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };
    Err(DeliveryError::Rejected {
        status: resp.status(),
        body: text,
    })
}

fn show_toast(state: &Rc<RefCell<State>>, notice: &Notification) {
    let (doc, window, seq) = {
        let mut s = state.borrow_mut();
        s.toast_seq = s.toast_seq.wrapping_add(1);
        (s.document.clone(), s.window.clone(), s.toast_seq)
    };
    let Some(toast) = doc.get_element_by_id(TOAST) else {
        debug!("toast: {} - {}", notice.title, notice.description);
        return;
    };
    let mut html = format!(
        "<strong>{}</strong><p>{}</p>",
        escape(&notice.title),
        escape(&notice.description)
    );
    if let Some(href) = &notice.fallback {
        html.push_str(&format!(
            "<a class=\"toast-link\" href=\"{}\">Email me instead</a>",
            escape(href)
        ));
    }
    toast.set_inner_html(&html);
    set_class(Some(&toast), "toast-success", notice.kind == NoticeKind::Success);
    set_class(Some(&toast), "toast-error", notice.kind == NoticeKind::Error);
    set_class(Some(&toast), HIDDEN_CLASS, false);

    let st = state.clone();
    let hide = Closure::once(move || {
        if st.borrow().toast_seq == seq {
            set_class(Some(&toast), HIDDEN_CLASS, true);
        }
    });
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        hide.as_ref().unchecked_ref(),
        TOAST_MS,
    );
    hide.forget();
}
