//! Host settings and translation lookup.

use fk_form_core::i18n::{Catalog, Translate};
use fk_form_core::{FormError, FormSettings, Result};
use gloo_console::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Read `FormSettings` from an optional JS object.
pub fn read_settings(value: &JsValue) -> Result<FormSettings> {
    if value.is_null() || value.is_undefined() {
        return Ok(FormSettings::default());
    }
    serde_wasm_bindgen::from_value(value.clone()).map_err(|e| FormError::Settings(e.to_string()))
}

/// Catalog lookups, optionally routed through a host `translate(key)` function
/// first.
pub struct Translator {
    host: Option<js_sys::Function>,
    catalog: Catalog,
}

impl Translator {
    pub fn new(settings: &FormSettings, raw: &JsValue) -> Self {
        let host = if raw.is_object() {
            js_sys::Reflect::get(raw, &JsValue::from_str("translate"))
                .ok()
                .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        } else {
            None
        };
        Self {
            host,
            catalog: Catalog::with_overrides(&settings.translations),
        }
    }
}

impl Translate for Translator {
    fn translate(&self, key: &str) -> String {
        if let Some(f) = &self.host {
            match f.call1(&JsValue::NULL, &JsValue::from_str(key)) {
                Ok(text) => {
                    if let Some(text) = text.as_string() {
                        return text;
                    }
                }
                Err(e) => warn!("translate() threw for", key, e),
            }
        }
        self.catalog.translate(key)
    }
}
