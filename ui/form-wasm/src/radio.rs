use crate::dom::{self, Attrs};
use fk_form_core::config::RadioConfig;
use fk_form_core::{markup, FieldKind, Result};
use web_sys::Element;

/// Wrap every unwrapped radio in `.radio-field`, radio first inside the
/// clickable label. `.color-swatch` radios paint their value as background.
pub fn prepare(form: &Element) -> Result<usize> {
    let mut wrapped = 0;
    for radio in dom::query_all_within(form, r#"input[type="radio"]"#)? {
        if dom::is_wrapped(&radio, FieldKind::Radio)? {
            continue;
        }
        let cfg = RadioConfig::from_attrs(&Attrs(&radio));
        dom::wrap_control(&radio, &markup::radio_field(&cfg))?;
        dom::mark_wrapped(&radio, FieldKind::Radio)?;
        wrapped += 1;
    }
    Ok(wrapped)
}
