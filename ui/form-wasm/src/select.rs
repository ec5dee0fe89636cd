//! `<select>` wrapping.

use crate::dom::{self, Attrs};
use fk_form_core::config::SelectConfig;
use fk_form_core::{markup, FieldKind, Result};
use web_sys::Element;

/// Wrap every unwrapped `<select>` in `.form-select` / `.form-multi-select`.
pub fn prepare(form: &Element) -> Result<usize> {
    let mut wrapped = 0;
    for select in dom::query_all_within(form, "select")? {
        if dom::is_wrapped(&select, FieldKind::Select)? {
            continue;
        }
        let cfg = SelectConfig::from_attrs(&Attrs(&select));
        dom::wrap_control(&select, &markup::select_field(&cfg))?;
        dom::mark_wrapped(&select, FieldKind::Select)?;
        wrapped += 1;
    }
    Ok(wrapped)
}
