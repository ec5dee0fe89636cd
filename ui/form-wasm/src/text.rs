//! Textual inputs.

use crate::dom::{self, Attrs};
use fk_form_core::config::TextConfig;
use fk_form_core::{markup, FieldKind, Result};
use web_sys::Element;

const TEXTUAL: &str = r#"input[type="text"], input[type="number"], textarea"#;

/// Wrap text/number inputs and textareas in `label.text-input`, with a
/// `.label-text` span or the `.no-label` modifier.
pub fn prepare(form: &Element) -> Result<usize> {
    let mut wrapped = 0;
    for input in dom::query_all_within(form, TEXTUAL)? {
        if dom::is_wrapped(&input, FieldKind::Text)? {
            continue;
        }
        let cfg = TextConfig::from_attrs(&Attrs(&input));
        dom::wrap_control(&input, &markup::text_input(&cfg))?;
        dom::mark_wrapped(&input, FieldKind::Text)?;
        wrapped += 1;
    }
    Ok(wrapped)
}
