//! Checkbox toggle switches.

use crate::dom::{self, Attrs};
use fk_form_core::config::CheckboxConfig;
use fk_form_core::{markup, FieldKind, Result};
use web_sys::Element;

/// Wrap every unwrapped checkbox in a `.toggle-switch-field`. The checkbox
/// ends up right before `.switch` and stays focusable.
pub fn prepare(form: &Element) -> Result<usize> {
    let mut wrapped = 0;
    for checkbox in dom::query_all_within(form, r#"input[type="checkbox"]"#)? {
        if dom::is_wrapped(&checkbox, FieldKind::Checkbox)? {
            continue;
        }
        let cfg = CheckboxConfig::from_attrs(&Attrs(&checkbox));
        dom::wrap_control(&checkbox, &markup::toggle_switch_field(&cfg))?;
        dom::mark_wrapped(&checkbox, FieldKind::Checkbox)?;
        wrapped += 1;
    }
    Ok(wrapped)
}
