//! FormKit WASM
//!
//! Declarative enhancement of HTML form markup: wrapper markup and behavior
//! for selects, toggle switches, radios, photo pickers and numeric inputs,
//! plus form-wide validation and value extraction.
//! Each concern lives in its own module; the exported JS API is below.

pub mod checkbox;
pub mod dom;
pub mod events;
pub mod hidden;
pub mod lifecycle;
pub mod number;
pub mod photo;
pub mod prepare;
pub mod radio;
pub mod select;
pub mod settings;
pub mod state;
pub mod text;
pub mod validate;
pub mod values;

use fk_form_core::FormError;
use gloo_console::{debug, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

pub use prepare::FormHandle;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();
}

fn to_js(e: FormError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

/// Prepare every field of `form`. `settings` is an optional object, see
/// `FormSettings`; a `translate(key)` function on it overrides the catalog.
#[wasm_bindgen]
pub fn prepare(form: Element, settings: JsValue) -> Result<FormHandle, JsValue> {
    let cfg = settings::read_settings(&settings).map_err(to_js)?;
    let translator = settings::Translator::new(&cfg, &settings);
    let (subs, report) = prepare::prepare_form(&form, &cfg, &translator).map_err(to_js)?;
    debug!(
        "form prepared:",
        report.selects + report.checkboxes + report.radios + report.texts,
        "fields wrapped,",
        subs.len(),
        "subscriptions"
    );
    Ok(FormHandle::new(subs, report))
}

/// `true` if every required field passes, `false` if any fails, `null` when
/// `target` names no fields.
#[wasm_bindgen]
pub fn validate(target: JsValue, settings: JsValue) -> Result<JsValue, JsValue> {
    let cfg = settings::read_settings(&settings).map_err(to_js)?;
    let targets = dom::resolve_targets(&target).map_err(to_js)?;
    let outcome = validate::validate_elements(&targets, &cfg.required_class).map_err(to_js)?;
    Ok(match outcome {
        Some(valid) => JsValue::from_bool(valid),
        None => JsValue::NULL,
    })
}

#[wasm_bindgen(js_name = clearValidation)]
pub fn clear_validation(target: JsValue) -> Result<(), JsValue> {
    let scopes = dom::resolve_targets(&target).map_err(to_js)?;
    validate::clear_elements(&scopes).map_err(to_js)
}

/// Field values of one form as a plain object, or `null` if `target` names
/// no element.
#[wasm_bindgen(js_name = getValues)]
pub fn get_values(target: JsValue) -> Result<JsValue, JsValue> {
    let targets = dom::resolve_targets(&target).map_err(to_js)?;
    let Some(form) = targets.first() else {
        return Ok(JsValue::NULL);
    };
    if targets.len() > 1 {
        warn!("getValues expects one form, using the first of", targets.len());
    }

    let values = values::collect(form).map_err(to_js)?;
    let serializer = serde_wasm_bindgen::Serializer::new()
        .serialize_missing_as_null(true)
        .serialize_maps_as_objects(true);
    values
        .serialize(&serializer)
        .map_err(|e| to_js(FormError::Serialize(e.to_string())))
}
