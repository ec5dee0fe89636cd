//! Validation blur watchers.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Each invalid text field gets at most one watcher, tracked by the
//! `data-fk-blur-watch` id attribute on the field.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::dom;
use crate::events::Listener;
use fk_form_core::validation::{clears_on_blur, ERROR_CLASS};
use fk_form_core::Result;
use web_sys::Element;

pub const BLUR_WATCH_ATTR: &str = "data-fk-blur-watch";

struct BlurWatch {
    field: Element,
    _listener: Listener,
}

thread_local! {
    static BLUR_WATCHES: RefCell<HashMap<u32, BlurWatch>> = RefCell::new(HashMap::new());
    static NEXT_WATCH_ID: Cell<u32> = const { Cell::new(1) };
}

fn next_id() -> u32 {
    NEXT_WATCH_ID.with(|n| {
        let id = n.get();
        n.set(id.wrapping_add(1));
        id
    })
}

/// Drop watchers whose field has left the document.
fn prune_detached() {
    BLUR_WATCHES.with(|w| w.borrow_mut().retain(|_, watch| watch.field.is_connected()));
}

/// Attach a blur watcher to `field` unless it already has one.
pub fn watch_blur(field: &Element) -> Result<()> {
    prune_detached();
    if field.has_attribute(BLUR_WATCH_ATTR) {
        return Ok(());
    }
    let id = next_id();
    let listener = Listener::new(field, "blur", move |_| on_blur(id))?;
    dom::set_attr(field, BLUR_WATCH_ATTR, &id.to_string())?;
    BLUR_WATCHES.with(|w| {
        w.borrow_mut().insert(
            id,
            BlurWatch {
                field: field.clone(),
                _listener: listener,
            },
        )
    });
    Ok(())
}

fn on_blur(id: u32) {
    let Some(field) = BLUR_WATCHES.with(|w| w.borrow().get(&id).map(|w| w.field.clone())) else {
        return;
    };
    if !clears_on_blur(&dom::control_value(&field)) {
        return;
    }
    if let Ok(Some(erred)) = dom::closest(&field, &format!(".{ERROR_CLASS}")) {
        dom::remove_class(&erred, ERROR_CLASS);
    }
    release(id);
}

/// Detach watcher `id`. The listener is dropped on a later tick because this
/// may run inside its own callback.
fn release(id: u32) {
    let Some(watch) = BLUR_WATCHES.with(|w| w.borrow_mut().remove(&id)) else {
        return;
    };
    dom::remove_attr(&watch.field, BLUR_WATCH_ATTR);
    wasm_bindgen_futures::spawn_local(async move {
        drop(watch);
    });
}

/// Detach every watcher on `scope` or its descendants.
pub fn release_within(scope: &Element) -> Result<()> {
    let mut fields = dom::query_all_within(scope, &format!("[{BLUR_WATCH_ATTR}]"))?;
    if scope.has_attribute(BLUR_WATCH_ATTR) {
        fields.push(scope.clone());
    }
    for field in fields {
        if let Some(id) = field
            .get_attribute(BLUR_WATCH_ATTR)
            .and_then(|raw| raw.parse::<u32>().ok())
        {
            release(id);
        }
    }
    Ok(())
}

pub fn watch_count() -> usize {
    BLUR_WATCHES.with(|w| w.borrow().len())
}
