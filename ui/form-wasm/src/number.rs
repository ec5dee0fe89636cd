//! `maxlength` and `min`/`max` enforcement for number inputs.
//!
//! Both rules run on `change`, so out-of-range typing is corrected once the
//! value is committed rather than blocked keystroke by keystroke.

use crate::dom::{self, Attrs};
use crate::events::Subscriptions;
use fk_form_core::numeric::NumberRules;
use fk_form_core::{markers, FieldKind, Result};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

pub fn prepare(form: &Element, subs: &mut Subscriptions) -> Result<usize> {
    let mut bound = 0;
    for el in dom::query_all_within(form, r#"input[type="number"]"#)? {
        if markers::is_bound(&Attrs(&el), FieldKind::Number.token()) {
            continue;
        }
        let rules = NumberRules::from_attrs(&Attrs(&el));
        if rules.is_empty() {
            continue;
        }
        let Ok(input) = el.clone().dyn_into::<HtmlInputElement>() else {
            continue;
        };
        subs.listen(&el, "change", move |_| {
            let entered = input.value();
            let corrected = rules.apply(&entered);
            if corrected != entered {
                input.set_value(&corrected);
            }
        })?;
        subs.mark_bound(&el, FieldKind::Number.token())?;
        bound += 1;
    }
    Ok(bound)
}
