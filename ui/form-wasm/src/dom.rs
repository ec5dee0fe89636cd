//! DOM helpers.
//!
//! Thin wrappers over `web-sys` used by every preparator. Fallible calls map
//! the thrown `JsValue` into [`FormError::Dom`].

use fk_form_core::markers::{self, WRAPPED_ATTR};
use fk_form_core::markup::{Markup, MarkupElement};
use fk_form_core::{AttrSource, FieldKind, FormError, InputType, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, File, HtmlCollection, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Node, NodeList,
};

pub fn dom_err(e: JsValue) -> FormError {
    FormError::Dom(format!("{:?}", e))
}

pub fn document() -> Document {
    gloo_utils::document()
}

/// Attribute view of a live element.
pub struct Attrs<'a>(pub &'a Element);

impl AttrSource for Attrs<'_> {
    fn attr(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn has_attr(&self, name: &str) -> bool {
        self.0.has_attribute(name)
    }

    fn has_class(&self, class: &str) -> bool {
        has_class(self.0, class)
    }
}

// ── Queries ──

fn collect(nl: NodeList) -> Vec<Element> {
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

fn collect_html(col: HtmlCollection) -> Vec<Element> {
    (0..col.length()).filter_map(|i| col.item(i)).collect()
}

pub fn query_all(selector: &str) -> Result<Vec<Element>> {
    let nl = document().query_selector_all(selector).map_err(dom_err)?;
    Ok(collect(nl))
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Result<Vec<Element>> {
    let nl = parent.query_selector_all(selector).map_err(dom_err)?;
    Ok(collect(nl))
}

pub fn query_within(parent: &Element, selector: &str) -> Result<Option<Element>> {
    parent.query_selector(selector).map_err(dom_err)
}

pub fn closest(el: &Element, selector: &str) -> Result<Option<Element>> {
    el.closest(selector).map_err(dom_err)
}

/// Elements named by a host-supplied target: a selector string, one element,
/// or an array-like of elements. `null`/`undefined` name nothing.
pub fn resolve_targets(target: &JsValue) -> Result<Vec<Element>> {
    if target.is_null() || target.is_undefined() {
        return Ok(Vec::new());
    }
    if let Some(selector) = target.as_string() {
        return query_all(&selector);
    }
    if let Some(el) = target.dyn_ref::<Element>() {
        return Ok(vec![el.clone()]);
    }
    if let Some(nl) = target.dyn_ref::<NodeList>() {
        return Ok(collect(nl.clone()));
    }
    if let Some(col) = target.dyn_ref::<HtmlCollection>() {
        return Ok(collect_html(col.clone()));
    }
    if js_sys::Array::is_array(target) {
        let arr: &js_sys::Array = target.unchecked_ref();
        return Ok(arr
            .iter()
            .filter_map(|v| v.dyn_into::<Element>().ok())
            .collect());
    }
    Err(FormError::Target(format!("{:?}", target)))
}

// ── Classes & attributes ──

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn set_attr(el: &Element, name: &str, value: &str) -> Result<()> {
    el.set_attribute(name, value).map_err(dom_err)
}

pub fn remove_attr(el: &Element, name: &str) {
    let _ = el.remove_attribute(name);
}

pub fn remove_all(parent: &Element, selector: &str) -> Result<()> {
    for el in query_all_within(parent, selector)? {
        el.remove();
    }
    Ok(())
}

// ── Controls ──

pub fn tag(el: &Element) -> String {
    el.tag_name().to_ascii_lowercase()
}

pub fn input_type(el: &Element) -> InputType {
    InputType::parse(el.get_attribute("type").as_deref())
}

/// Current value of an input, textarea or select; empty for anything else.
pub fn control_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

pub fn file_count(el: &Element) -> u32 {
    el.dyn_ref::<HtmlInputElement>()
        .and_then(HtmlInputElement::files)
        .map(|files| files.length())
        .unwrap_or(0)
}

/// Filesystem path of a picked file. The desktop shell exposes it as
/// `File.path`; plain browsers only know the name.
pub fn file_path(file: &File) -> String {
    js_sys::Reflect::get(file, &JsValue::from_str("path"))
        .ok()
        .and_then(|v| v.as_string())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| file.name())
}

pub fn first_file_path(input: &HtmlInputElement) -> Option<String> {
    input.files()?.get(0).map(|f| file_path(&f))
}

pub fn selected_values(select: &HtmlSelectElement) -> Vec<String> {
    collect_html(select.selected_options())
        .into_iter()
        .filter_map(|opt| opt.dyn_into::<web_sys::HtmlOptionElement>().ok())
        .map(|opt| opt.value())
        .collect()
}

// ── Preparation markers ──

/// Wrapped by an earlier pass, or already sitting in matching markup.
pub fn is_wrapped(el: &Element, kind: FieldKind) -> Result<bool> {
    if markers::is_wrapped(&Attrs(el), kind) {
        return Ok(true);
    }
    let wrapper = format!(".{}", markers::wrapper_class(kind));
    Ok(closest(el, &wrapper)?.is_some())
}

pub fn mark_wrapped(el: &Element, kind: FieldKind) -> Result<()> {
    let list = markers::with_token(el.get_attribute(WRAPPED_ATTR).as_deref(), kind.token());
    set_attr(el, WRAPPED_ATTR, &list)
}

// ── Markup rendering ──

fn create(markup: &MarkupElement) -> Result<Element> {
    let doc = document();
    let el = match markup.namespace {
        Some(ns) => doc.create_element_ns(Some(ns), markup.tag),
        None => doc.create_element(markup.tag),
    }
    .map_err(dom_err)?;
    if !markup.classes.is_empty() {
        set_attr(&el, "class", &markup.class_attr())?;
    }
    for (name, value) in &markup.attrs {
        set_attr(&el, name, value)?;
    }
    Ok(el)
}

fn fill(parent: &Element, children: &[Markup], control: Option<&Element>) -> Result<()> {
    for child in children {
        match child {
            Markup::Element(markup) => {
                let el = create(markup)?;
                parent.append_child(&el).map_err(dom_err)?;
                fill(&el, &markup.children, control)?;
            }
            Markup::Text(text) => {
                parent
                    .append_child(&document().create_text_node(text))
                    .map_err(dom_err)?;
            }
            Markup::Control => {
                if let Some(control) = control {
                    parent.append_child(control).map_err(dom_err)?;
                }
            }
        }
    }
    Ok(())
}

/// Build a detached element from a template with no control slot.
pub fn render(markup: &MarkupElement) -> Result<Element> {
    let el = create(markup)?;
    fill(&el, &markup.children, None)?;
    Ok(el)
}

/// Insert the wrapper right before `control`, then move `control` into the
/// template's control slot.
pub fn wrap_control(control: &Element, markup: &MarkupElement) -> Result<Element> {
    let parent: Node = control
        .parent_node()
        .ok_or(FormError::Missing("control parent"))?;
    let wrapper = create(markup)?;
    parent
        .insert_before(&wrapper, Some(control.as_ref()))
        .map_err(dom_err)?;
    fill(&wrapper, &markup.children, Some(control))?;
    Ok(wrapper)
}
