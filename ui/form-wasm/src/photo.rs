//! Photo pickers for `<input type="file" accept="image/*">`.
//!
//! The picker keeps its state in attributes on the file input:
//! `data-value` is the path currently shown, `data-original-value` the path
//! the form was loaded with (restored on reset).

use crate::dom::{self, Attrs};
use crate::events::Subscriptions;
use fk_form_core::config::{PhotoConfig, ORIGINAL_VALUE_ATTR, VALUE_ATTR};
use fk_form_core::i18n::{Translate, CHOOSE_FILE};
use fk_form_core::paths::thumb_style;
use fk_form_core::{markers, markup, FieldKind, Result};
use gloo_console::warn;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

pub const CONTAINER_SELECTOR: &str = ".photo-input";
const THUMB_SELECTOR: &str = ".thumb";
const REMOVE_SELECTOR: &str = ".remove-photo";

pub fn show_thumb(thumb: &Element, path: &str) -> Result<()> {
    dom::set_attr(thumb, "style", &thumb_style(path))
}

/// Back to the load-time thumbnail, or to the empty picker if there was none.
fn restore_original_state(input: &HtmlInputElement, thumb: &Element) -> Result<()> {
    match input.get_attribute(ORIGINAL_VALUE_ATTR).filter(|v| !v.is_empty()) {
        Some(original) => show_thumb(thumb, &original),
        None => {
            dom::remove_attr(thumb, "style");
            dom::remove_attr(input, VALUE_ATTR);
            Ok(())
        }
    }
}

fn on_change(input: &HtmlInputElement, thumb: &Element) -> Result<()> {
    match dom::first_file_path(input) {
        Some(path) => {
            show_thumb(thumb, &path)?;
            dom::set_attr(input, VALUE_ATTR, &path)
        }
        // the user backed out of the file dialog
        None => restore_original_state(input, thumb),
    }
}

fn on_remove(input: &HtmlInputElement, thumb: &Element) {
    dom::remove_attr(thumb, "style");
    input.set_value("");
    dom::remove_attr(input, VALUE_ATTR);
}

fn wrap(input: &Element, cfg: &PhotoConfig, translator: &dyn Translate) -> Result<()> {
    let template = markup::photo_input(cfg, &translator.translate(CHOOSE_FILE));
    dom::wrap_control(input, &template)?;
    if let Some(original) = cfg.original_to_record() {
        dom::set_attr(input, ORIGINAL_VALUE_ATTR, original)?;
    }
    dom::mark_wrapped(input, FieldKind::Photo)
}

fn bind(el: &Element, subs: &mut Subscriptions) -> Result<bool> {
    let Some(container) = dom::closest(el, CONTAINER_SELECTOR)? else {
        return Ok(false);
    };
    let (Some(thumb), Some(remove)) = (
        dom::query_within(&container, THUMB_SELECTOR)?,
        dom::query_within(&container, REMOVE_SELECTOR)?,
    ) else {
        warn!("photo input without .thumb/.remove-photo markup, not binding");
        return Ok(false);
    };
    let Ok(input) = el.clone().dyn_into::<HtmlInputElement>() else {
        return Ok(false);
    };

    {
        let input = input.clone();
        let thumb = thumb.clone();
        subs.listen(el, "change", move |_| {
            if let Err(e) = on_change(&input, &thumb) {
                warn!("photo change:", e.to_string());
            }
        })?;
    }
    subs.listen(&remove, "click", move |e| {
        e.prevent_default();
        on_remove(&input, &thumb);
    })?;
    subs.mark_bound(el, FieldKind::Photo.token())?;
    Ok(true)
}

pub fn prepare(
    form: &Element,
    translator: &dyn Translate,
    subs: &mut Subscriptions,
) -> Result<usize> {
    let mut bound = 0;
    for el in dom::query_all_within(form, r#"input[type="file"]"#)? {
        let Some(cfg) = PhotoConfig::from_attrs(&Attrs(&el)) else {
            continue;
        };
        if !dom::is_wrapped(&el, FieldKind::Photo)? {
            wrap(&el, &cfg, translator)?;
        }
        if !markers::is_bound(&Attrs(&el), FieldKind::Photo.token()) && bind(&el, subs)? {
            bound += 1;
        }
    }
    Ok(bound)
}
