//! Explicit preparation state.
//!
//! `data-fk-wrapped` records that a control's wrapper markup exists,
//! `data-fk-bound` that a live `FormHandle` has listeners attached to it.
//! Both hold a space-separated token list.

use crate::attrs::AttrSource;
use fk_form_types::FieldKind;

pub const WRAPPED_ATTR: &str = "data-fk-wrapped";
pub const BOUND_ATTR: &str = "data-fk-bound";

/// Bound token on a form whose reset/success handlers are attached.
pub const FORM_TOKEN: &str = "form";
/// Bound token on a hidden-fields container with a live observer.
pub const HIDDEN_FIELDS_TOKEN: &str = "hidden-fields";

/// Wrapper class that identifies hand-written or pre-existing markup for a
/// control of this kind.
pub fn wrapper_class(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Select => "select-outer",
        FieldKind::Checkbox => "toggle-switch",
        FieldKind::Radio => "radio-field",
        FieldKind::Photo => "photo-input",
        FieldKind::Text | FieldKind::Number => "text-input",
    }
}

pub fn has_token(list: Option<&str>, token: &str) -> bool {
    list.is_some_and(|l| l.split_ascii_whitespace().any(|t| t == token))
}

/// Token list with `token` appended, unchanged if already present.
pub fn with_token(list: Option<&str>, token: &str) -> String {
    match list.map(str::trim).filter(|l| !l.is_empty()) {
        Some(l) if has_token(Some(l), token) => l.to_owned(),
        Some(l) => format!("{l} {token}"),
        None => token.to_owned(),
    }
}

/// Token list without `token`; `None` once the list is empty.
pub fn without_token(list: Option<&str>, token: &str) -> Option<String> {
    let rest: Vec<&str> = list
        .unwrap_or_default()
        .split_ascii_whitespace()
        .filter(|t| *t != token)
        .collect();
    if rest.is_empty() {
        None
    } else {
        Some(rest.join(" "))
    }
}

pub fn is_wrapped(attrs: &(impl AttrSource + ?Sized), kind: FieldKind) -> bool {
    has_token(attrs.attr(WRAPPED_ATTR).as_deref(), kind.token())
}

pub fn is_bound(attrs: &(impl AttrSource + ?Sized), token: &str) -> bool {
    has_token(attrs.attr(BOUND_ATTR).as_deref(), token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_lists_do_not_duplicate() {
        let once = with_token(None, "photo");
        assert_eq!(once, "photo");
        let twice = with_token(Some(&once), "photo");
        assert_eq!(twice, "photo");
        assert_eq!(with_token(Some("text"), "number"), "text number");
    }

    #[test]
    fn removing_last_token_clears_the_marker() {
        assert_eq!(without_token(Some("number"), "number"), None);
        assert_eq!(
            without_token(Some("text number"), "text").as_deref(),
            Some("number")
        );
        assert_eq!(without_token(None, "form"), None);
    }

    #[test]
    fn markers_read_from_attributes() {
        let attrs: &[(&str, &str)] = &[
            ("data-fk-wrapped", "text"),
            ("data-fk-bound", "number"),
        ];
        assert!(is_wrapped(attrs, FieldKind::Text));
        assert!(!is_wrapped(attrs, FieldKind::Select));
        assert!(is_bound(attrs, FieldKind::Number.token()));
        assert!(!is_bound(attrs, FORM_TOKEN));
    }
}
