//! Value extraction.

use crate::dom;
use fk_form_core::config::VALUE_ATTR;
use fk_form_core::values::{ValuesBuilder, DATE_DAY_FIELD, DATE_MONTH_FIELD, DATE_YEAR_FIELD};
use fk_form_core::{FieldValue, FormValues, InputType, Result};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};

fn file_value(input: &HtmlInputElement) -> FieldValue {
    // only the first file of a multi-selection is kept
    if let Some(path) = dom::first_file_path(input) {
        return FieldValue::Text(path);
    }
    match input.get_attribute(VALUE_ATTR).filter(|v| !v.is_empty()) {
        Some(path) => FieldValue::Text(path),
        None => FieldValue::Null,
    }
}

fn record_field(builder: &mut ValuesBuilder, el: &Element, name: &str) {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        match dom::input_type(el) {
            InputType::Checkbox => builder.record(name, FieldValue::Bool(input.checked())),
            InputType::Radio => builder.record_radio(name, input.checked(), &input.value()),
            InputType::File => builder.record(name, file_value(input)),
            _ => builder.record(name, FieldValue::Text(input.value())),
        }
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>().filter(|s| s.multiple()) {
        builder.record(name, FieldValue::List(dom::selected_values(select)));
    } else {
        builder.record(name, FieldValue::Text(dom::control_value(el)));
    }
}

fn date_part(form: &Element, name: &str) -> Result<Option<String>> {
    let selector = format!(r#"input[name="{name}"]"#);
    Ok(dom::query_within(form, &selector)?.map(|el| dom::control_value(&el)))
}

/// Values of every named field in `form`, plus the composed date keys.
pub fn collect(form: &Element) -> Result<FormValues> {
    let mut builder = ValuesBuilder::new();
    for el in dom::query_all_within(form, "input, select, textarea")? {
        let Some(name) = el.get_attribute("name").filter(|n| !n.is_empty()) else {
            continue;
        };
        record_field(&mut builder, &el, &name);
    }

    let day = date_part(form, DATE_DAY_FIELD)?;
    let month = date_part(form, DATE_MONTH_FIELD)?;
    let year = date_part(form, DATE_YEAR_FIELD)?;
    builder.compose_date(day.as_deref(), month.as_deref(), year.as_deref());

    Ok(builder.finish())
}
