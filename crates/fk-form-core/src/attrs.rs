//! Read-only attribute access shared by live elements and test fixtures.

use std::collections::BTreeMap;

pub trait AttrSource {
    fn attr(&self, name: &str) -> Option<String>;

    fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Attribute value, with the empty string treated as absent.
    fn non_empty_attr(&self, name: &str) -> Option<String> {
        self.attr(name).filter(|v| !v.is_empty())
    }

    fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|list| list.split_ascii_whitespace().any(|c| c == class))
    }
}

impl AttrSource for BTreeMap<String, String> {
    fn attr(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl AttrSource for [(&str, &str)] {
    fn attr(&self, name: &str) -> Option<String> {
        self.iter()
            .rev()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| (*v).to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_lookup_matches_whole_tokens() {
        let attrs: &[(&str, &str)] = &[("class", "req  color-swatch")];
        assert!(attrs.has_class("req"));
        assert!(attrs.has_class("color-swatch"));
        assert!(!attrs.has_class("color"));
    }

    #[test]
    fn empty_attribute_is_not_a_value() {
        let attrs: &[(&str, &str)] = &[("data-label", "")];
        assert!(attrs.has_attr("data-label"));
        assert_eq!(attrs.non_empty_attr("data-label"), None);
    }
}
