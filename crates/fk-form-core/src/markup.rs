//! Wrapper markup templates.
//!
//! Templates are small element trees rather than HTML strings, so label text
//! and attribute values never pass through an HTML parser. A
//! [`Markup::Control`] node marks where the original control is relocated.

use crate::config::{CheckboxConfig, PhotoConfig, RadioConfig, SelectConfig, TextConfig};
use crate::paths::thumb_style;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Clone, PartialEq)]
pub enum Markup {
    Element(MarkupElement),
    Text(String),
    /// Slot for the control being wrapped.
    Control,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkupElement {
    pub tag: &'static str,
    pub namespace: Option<&'static str>,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Markup>,
}

impl MarkupElement {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            namespace: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn svg(tag: &'static str) -> Self {
        Self {
            namespace: Some(SVG_NS),
            ..Self::new(tag)
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn classes<'a>(mut self, classes: impl IntoIterator<Item = &'a str>) -> Self {
        self.classes.extend(classes.into_iter().map(str::to_owned));
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn child(mut self, child: MarkupElement) -> Self {
        self.children.push(Markup::Element(child));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Markup::Text(text.into()));
        self
    }

    pub fn control(mut self) -> Self {
        self.children.push(Markup::Control);
        self
    }

    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Depth-first search for the first descendant (or self) with `class`.
    pub fn find_class(&self, class: &str) -> Option<&MarkupElement> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Markup::Element(el) => el.find_class(class),
            _ => None,
        })
    }

    /// Number of control slots in this subtree. Every wrapper has exactly one.
    pub fn control_slots(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                Markup::Control => 1,
                Markup::Element(el) => el.control_slots(),
                Markup::Text(_) => 0,
            })
            .sum()
    }

    /// Concatenated text content of this subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Markup::Text(t) => out.push_str(t),
                Markup::Element(el) => out.push_str(&el.text_content()),
                Markup::Control => {}
            }
        }
        out
    }
}

fn label_text(text: &str) -> MarkupElement {
    MarkupElement::new("span").class("label-text").text(text)
}

/// `div.field.form-select` (or `.form-multi-select`) with the control inside
/// `.select-outer`.
pub fn select_field(cfg: &SelectConfig) -> MarkupElement {
    let mut wrapper = MarkupElement::new("div")
        .class("field")
        .class(cfg.wrapper_class());
    if let Some(label) = &cfg.label {
        wrapper = wrapper.child(label_text(label));
    }
    wrapper.child(MarkupElement::new("div").class("select-outer").control())
}

/// Toggle switch; the checkbox sits right before `.switch` so it stays in
/// the tab order.
pub fn toggle_switch_field(cfg: &CheckboxConfig) -> MarkupElement {
    let switch = MarkupElement::new("div")
        .class("toggle-switch")
        .control()
        .child(MarkupElement::new("div").class("switch"))
        .child(MarkupElement::new("div").class("focus"));

    let mut text = MarkupElement::new("span").class("label-text");
    if let Some(explanation) = &cfg.explanation {
        text = text.child(
            MarkupElement::new("i")
                .classes(["explanation", "tooltip", "far", "fa-question-circle"])
                .attr("data-tooltip", explanation.as_str()),
        );
    }
    let text = text.text(cfg.label.as_str());

    MarkupElement::new("div")
        .classes(["field", "toggle-switch-field"])
        .class(cfg.align.class())
        .child(MarkupElement::new("label").child(switch))
        .child(text)
}

pub fn radio_field(cfg: &RadioConfig) -> MarkupElement {
    let mut clicks = MarkupElement::new("label").class("clicks").control();
    if let Some(color) = &cfg.swatch_color {
        clicks = clicks.attr("style", format!("background-color:{color};"));
    }
    MarkupElement::new("div")
        .classes(["field", "radio-field"])
        .child(clicks)
        .child(label_text(&cfg.label))
}

/// Photo picker container. `choose_text` is the already translated button
/// caption.
pub fn photo_input(cfg: &PhotoConfig, choose_text: &str) -> MarkupElement {
    let remove = MarkupElement::new("button")
        .classes(["remove-photo", "icon-button"])
        .attr("type", "button")
        .child(
            MarkupElement::new("span")
                .attr("tabindex", "-1")
                .child(MarkupElement::new("i").classes(["fas", "fa-times-circle"])),
        );

    let mut thumb = MarkupElement::new("div").class("thumb");
    if let Some(path) = &cfg.initial_value {
        thumb = thumb.attr("style", thumb_style(path));
    }
    let thumb = thumb
        .child(MarkupElement::new("span").class("btn").text(choose_text))
        .child(remove);

    MarkupElement::new("div")
        .classes(["photo-input", "field"])
        .child(label_text(&cfg.label))
        .child(MarkupElement::new("label").control().child(thumb))
}

/// `label.text-input`; `.no-label` when there is no label text.
pub fn text_input(cfg: &TextConfig) -> MarkupElement {
    let wrapper = MarkupElement::new("label").classes(["field", "text-input"]);
    match &cfg.label {
        Some(label) => wrapper.child(label_text(label)).control(),
        None => wrapper.class("no-label").control(),
    }
}

/// Animated checkmark shown in the submit button on success.
pub fn checkmark() -> MarkupElement {
    MarkupElement::svg("svg")
        .class("checkmark")
        .attr("viewBox", "0 0 52 52")
        .child(
            MarkupElement::svg("circle")
                .class("checkmark-circle")
                .attr("cx", "26")
                .attr("cy", "26")
                .attr("r", "25")
                .attr("fill", "none"),
        )
        .child(
            MarkupElement::svg("path")
                .class("checkmark-check")
                .attr("fill", "none")
                .attr("d", "M14.1 27.2l7.1 7.2 16.7-16.8"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Align;

    #[test]
    fn select_wraps_control_in_select_outer() {
        let cfg = SelectConfig {
            label: Some("Genre".into()),
            multiple: false,
        };
        let field = select_field(&cfg);
        assert_eq!(field.class_attr(), "field form-select");
        assert_eq!(field.control_slots(), 1);
        let outer = field.find_class("select-outer").expect("select-outer");
        assert_eq!(outer.children, vec![Markup::Control]);
        assert_eq!(field.find_class("label-text").map(|l| l.text_content()), Some("Genre".into()));
    }

    #[test]
    fn select_without_label_has_no_label_span() {
        let cfg = SelectConfig {
            label: None,
            multiple: true,
        };
        let field = select_field(&cfg);
        assert!(field.has_class("form-multi-select"));
        assert!(field.find_class("label-text").is_none());
    }

    #[test]
    fn checkbox_sits_before_switch() {
        let cfg = CheckboxConfig {
            label: "Owned".into(),
            align: Align::Right,
            explanation: Some("Books you have".into()),
        };
        let field = toggle_switch_field(&cfg);
        assert!(field.has_class("align-right"));
        let toggle = field.find_class("toggle-switch").expect("toggle-switch");
        assert_eq!(toggle.children[0], Markup::Control);
        match &toggle.children[1] {
            Markup::Element(el) => assert!(el.has_class("switch")),
            other => panic!("expected .switch, got {other:?}"),
        }
        let tooltip = field.find_class("tooltip").expect("tooltip");
        assert_eq!(tooltip.attr_value("data-tooltip"), Some("Books you have"));
        assert_eq!(field.find_class("label-text").expect("label").text_content(), "Owned");
    }

    #[test]
    fn radio_control_leads_clickable_label() {
        let cfg = RadioConfig {
            label: "Red".into(),
            swatch_color: Some("#f00".into()),
        };
        let field = radio_field(&cfg);
        let clicks = field.find_class("clicks").expect("clicks");
        assert_eq!(clicks.children.first(), Some(&Markup::Control));
        assert_eq!(clicks.attr_value("style"), Some("background-color:#f00;"));
    }

    #[test]
    fn photo_input_renders_initial_thumb() {
        let cfg = PhotoConfig {
            label: "Cover".into(),
            initial_value: Some("/covers/dune.jpg".into()),
            original_value: None,
        };
        let field = photo_input(&cfg, "Choose file");
        assert_eq!(field.control_slots(), 1);
        let thumb = field.find_class("thumb").expect("thumb");
        assert_eq!(
            thumb.attr_value("style"),
            Some("background-image: url('/covers/dune.jpg')")
        );
        assert_eq!(field.find_class("btn").expect("btn").text_content(), "Choose file");
        let remove = field.find_class("remove-photo").expect("remove");
        assert_eq!(remove.attr_value("type"), Some("button"));
    }

    #[test]
    fn photo_input_without_value_has_no_style() {
        let cfg = PhotoConfig {
            label: String::new(),
            initial_value: None,
            original_value: None,
        };
        let field = photo_input(&cfg, "Choose file");
        assert_eq!(field.find_class("thumb").expect("thumb").attr_value("style"), None);
    }

    #[test]
    fn text_input_marks_missing_label() {
        let bare = text_input(&TextConfig { label: None });
        assert!(bare.has_class("no-label"));
        assert!(bare.has_class("field"));

        let labelled = text_input(&TextConfig {
            label: Some("Title".into()),
        });
        assert!(!labelled.has_class("no-label"));
        assert!(matches!(labelled.children.first(), Some(Markup::Element(el)) if el.has_class("label-text")));
        assert_eq!(labelled.children.last(), Some(&Markup::Control));
    }

    #[test]
    fn checkmark_is_svg() {
        let mark = checkmark();
        assert_eq!(mark.namespace, Some(SVG_NS));
        assert!(mark.find_class("checkmark-check").is_some());
        assert_eq!(mark.control_slots(), 0);
    }
}
