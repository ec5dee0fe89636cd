//! Form-level reset and success handling.

use std::cell::Cell;
use std::rc::Rc;

use crate::dom::{self, dom_err, Attrs};
use crate::events::Subscriptions;
use crate::photo;
use fk_form_core::config::{ORIGINAL_VALUE_ATTR, VALUE_ATTR};
use fk_form_core::markers::{self, FORM_TOKEN};
use fk_form_core::{markup, Result};
use gloo_console::warn;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventInit, HtmlInputElement};

pub const SUCCESS_CLASS: &str = "success";
const CHECKMARK_SELECTOR: &str = ".checkmark";
const SUBMIT_SELECTOR: &str = r#"button[type="submit"]"#;

fn dispatch_change(input: &HtmlInputElement) -> Result<()> {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("change", &init).map_err(dom_err)?;
    input.dispatch_event(&event).map_err(dom_err)?;
    Ok(())
}

/// Put every photo picker back to its load-time state. The file selection is
/// nulled now; the `change` that lets listeners observe it goes out on the
/// next tick, once the shell has settled its file list.
fn reset_photo_inputs(form: &Element, alive: &Rc<Cell<bool>>) -> Result<()> {
    for container in dom::query_all_within(form, photo::CONTAINER_SELECTOR)? {
        let Some(input) = dom::query_within(&container, r#"input[type="file"]"#)?
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            continue;
        };

        if let Some(original) = input
            .get_attribute(ORIGINAL_VALUE_ATTR)
            .filter(|v| !v.is_empty())
        {
            dom::set_attr(&input, VALUE_ATTR, &original)?;
            if let Some(thumb) = dom::query_within(&container, ".thumb")? {
                photo::show_thumb(&thumb, &original)?;
            }
        }

        input.set_files(None);

        let alive = Rc::clone(alive);
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(0).await;
            if !alive.get() {
                return;
            }
            if let Err(e) = dispatch_change(&input) {
                warn!("reset change dispatch:", e.to_string());
            }
        });
    }
    Ok(())
}

/// The delayed cleanup outlives the handle: a checkmark shown before
/// `dispose` is still taken down while the form stays in the document.
fn show_success(form: &Element, delay_ms: u32, pending: &Rc<Cell<bool>>) -> Result<()> {
    if pending.get() || !dom::has_class(form, SUCCESS_CLASS) {
        return Ok(());
    }
    pending.set(true);

    if let Some(button) = dom::query_within(form, SUBMIT_SELECTOR)? {
        let mark = dom::render(&markup::checkmark())?;
        button.prepend_with_node_1(&mark).map_err(dom_err)?;
    }

    let form = form.clone();
    let pending = Rc::clone(pending);
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        pending.set(false);
        // the form may have left the document during the delay
        if !form.is_connected() {
            return;
        }
        if let Err(e) = dom::remove_all(&form, CHECKMARK_SELECTOR) {
            warn!("success cleanup:", e.to_string());
        }
        dom::remove_class(&form, SUCCESS_CLASS);
    });
    Ok(())
}

/// Attach the reset and success handlers once per live handle.
pub fn prepare(form: &Element, success_delay_ms: u32, subs: &mut Subscriptions) -> Result<bool> {
    if markers::is_bound(&Attrs(form), FORM_TOKEN) {
        return Ok(false);
    }

    {
        let form_el = form.clone();
        let alive = subs.alive();
        subs.listen(form, "reset", move |_| {
            if let Err(e) = reset_photo_inputs(&form_el, &alive) {
                warn!("form reset:", e.to_string());
            }
        })?;
    }

    {
        let form_el = form.clone();
        let pending = Rc::new(Cell::new(false));
        subs.observe_class(form, move || {
            if let Err(e) = show_success(&form_el, success_delay_ms, &pending) {
                warn!("form success:", e.to_string());
            }
        })?;
    }

    subs.mark_bound(form, FORM_TOKEN)?;
    Ok(true)
}
