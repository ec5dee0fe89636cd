//! Prepare orchestrator.
//!
//! Runs every preparator over one form in a fixed order. Safe to call again
//! on the same form: wrapped controls are skipped, and behavior is only bound
//! where no live handle has bound it yet.

use crate::events::Subscriptions;
use crate::settings::Translator;
use crate::{checkbox, hidden, lifecycle, number, photo, radio, select, text};
use fk_form_core::{FormSettings, Result};
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Counts from one pass, mostly for logging and tests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PrepareReport {
    pub selects: usize,
    pub checkboxes: usize,
    pub radios: usize,
    pub photos: usize,
    pub numbers: usize,
    pub texts: usize,
    pub hidden_fields: usize,
    pub form_handlers: bool,
}

pub fn prepare_form(
    form: &Element,
    settings: &FormSettings,
    translator: &Translator,
) -> Result<(Subscriptions, PrepareReport)> {
    let mut subs = Subscriptions::new();
    let report = PrepareReport {
        selects: select::prepare(form)?,
        checkboxes: checkbox::prepare(form)?,
        radios: radio::prepare(form)?,
        photos: photo::prepare(form, translator, &mut subs)?,
        numbers: number::prepare(form, &mut subs)?,
        texts: text::prepare(form)?,
        hidden_fields: hidden::prepare(form, &settings.hidden_fields_selector, &mut subs)?,
        form_handlers: lifecycle::prepare(form, settings.success_delay_ms, &mut subs)?,
    };
    Ok((subs, report))
}

/// Owns everything `prepare` attached to one form. Call `dispose()` (or let
/// the JS side free the handle) when the form leaves the document.
#[wasm_bindgen]
pub struct FormHandle {
    subs: Option<Subscriptions>,
    report: PrepareReport,
}

impl FormHandle {
    pub fn new(subs: Subscriptions, report: PrepareReport) -> Self {
        Self {
            subs: Some(subs),
            report,
        }
    }

    pub fn report(&self) -> PrepareReport {
        self.report
    }
}

#[wasm_bindgen]
impl FormHandle {
    /// Detach listeners and observers and cancel pending deferred work.
    pub fn dispose(&mut self) {
        self.subs.take();
    }

    #[wasm_bindgen(getter)]
    pub fn disposed(&self) -> bool {
        self.subs.is_none()
    }

    /// Number of listeners and observers still attached.
    #[wasm_bindgen(getter, js_name = subscriptionCount)]
    pub fn subscription_count(&self) -> usize {
        self.subs.as_ref().map_or(0, Subscriptions::len)
    }
}
