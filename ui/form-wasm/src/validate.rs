//! Required-field validation and cleanup.

use crate::dom;
use crate::state;
use fk_form_core::validation::{
    judge, watches_blur, FieldProbe, Rule, Tally, Verdict, ERROR_CLASS, FIELD_CLASS,
    SUBMISSION_ERROR_CLASS,
};
use fk_form_core::Result;
use web_sys::Element;

const FIELDS: &str = "input, select, textarea";

/// Forms expand to their fields (clearing old submission errors on the
/// way); any other element is a field itself.
fn gather_fields(targets: &[Element]) -> Result<Vec<Element>> {
    let mut fields = Vec::new();
    for el in targets {
        if dom::tag(el) == "form" {
            dom::remove_all(el, &format!(".{SUBMISSION_ERROR_CLASS}"))?;
            fields.extend(dom::query_all_within(el, FIELDS)?);
        } else {
            fields.push(el.clone());
        }
    }
    Ok(fields)
}

fn validate_field(field: &Element, required_class: &str) -> Result<Verdict> {
    let wrapper =
        dom::closest(field, &format!(".{FIELD_CLASS}"))?.unwrap_or_else(|| field.clone());
    let tag = dom::tag(field);
    let input_type = dom::input_type(field);

    let probe = FieldProbe {
        already_invalid: dom::has_class(&wrapper, ERROR_CLASS),
        required: dom::has_class(field, required_class),
        rule: Rule::for_control(&tag, &input_type),
        value: dom::control_value(field),
        file_count: dom::file_count(field),
    };
    let verdict = judge(&probe);

    if verdict == Verdict::Invalid {
        dom::add_class(&wrapper, ERROR_CLASS);
        if watches_blur(&tag, &input_type) {
            state::watch_blur(field)?;
        }
    }
    Ok(verdict)
}

/// `Some(true)` if every field passes, `Some(false)` if any fails, `None`
/// when there was nothing to validate.
pub fn validate_elements(targets: &[Element], required_class: &str) -> Result<Option<bool>> {
    let fields = gather_fields(targets)?;
    let mut tally = Tally::default();
    for field in &fields {
        tally.record(validate_field(field, required_class)?);
    }
    Ok(tally.outcome())
}

/// Drop error state, submission errors and pending blur watchers under each
/// scope.
pub fn clear_elements(scopes: &[Element]) -> Result<()> {
    for scope in scopes {
        dom::remove_class(scope, ERROR_CLASS);
        for erred in dom::query_all_within(scope, &format!(".{ERROR_CLASS}"))? {
            dom::remove_class(&erred, ERROR_CLASS);
        }
        dom::remove_all(scope, &format!(".{SUBMISSION_ERROR_CLASS}"))?;
        state::release_within(scope)?;
    }
    Ok(())
}
