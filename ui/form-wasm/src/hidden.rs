//! Tab stops inside `.hidden-fields` follow the container's `show` class.

use crate::dom::{self, Attrs};
use crate::events::Subscriptions;
use fk_form_core::markers::{self, HIDDEN_FIELDS_TOKEN};
use fk_form_core::Result;
use gloo_console::error;
use web_sys::Element;

const FOCUSABLE: &str = "input, select, textarea, button, a";
pub const SHOW_CLASS: &str = "show";

/// `tabindex="-1"` on every focusable descendant while hidden; removed while
/// shown.
pub fn sync_tab_stops(container: &Element) -> Result<()> {
    let shown = dom::has_class(container, SHOW_CLASS);
    for el in dom::query_all_within(container, FOCUSABLE)? {
        if shown {
            dom::remove_attr(&el, "tabindex");
        } else {
            dom::set_attr(&el, "tabindex", "-1")?;
        }
    }
    Ok(())
}

pub fn prepare(form: &Element, selector: &str, subs: &mut Subscriptions) -> Result<usize> {
    let mut bound = 0;
    for container in dom::query_all_within(form, selector)? {
        if markers::is_bound(&Attrs(&container), HIDDEN_FIELDS_TOKEN) {
            continue;
        }
        sync_tab_stops(&container)?;

        let watched = container.clone();
        subs.observe_class(&container, move || {
            if let Err(e) = sync_tab_stops(&watched) {
                error!("hidden fields:", e.to_string());
            }
        })?;
        subs.mark_bound(&container, HIDDEN_FIELDS_TOKEN)?;
        bound += 1;
    }
    Ok(bound)
}
