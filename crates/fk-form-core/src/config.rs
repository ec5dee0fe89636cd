//! Typed per-kind configuration, hydrated once from a control's attributes.

use crate::attrs::AttrSource;

pub const LABEL_ATTR: &str = "data-label";
pub const ALIGN_ATTR: &str = "data-align";
pub const EXPLANATION_ATTR: &str = "data-explanation";
pub const VALUE_ATTR: &str = "data-value";
pub const ORIGINAL_VALUE_ATTR: &str = "data-original-value";
pub const IMAGE_ACCEPT: &str = "image/*";
pub const COLOR_SWATCH_CLASS: &str = "color-swatch";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectConfig {
    pub label: Option<String>,
    pub multiple: bool,
}

impl SelectConfig {
    pub fn from_attrs(attrs: &(impl AttrSource + ?Sized)) -> Self {
        Self {
            label: attrs.non_empty_attr(LABEL_ATTR),
            multiple: attrs.has_attr("multiple"),
        }
    }

    pub fn wrapper_class(&self) -> &'static str {
        if self.multiple {
            "form-multi-select"
        } else {
            "form-select"
        }
    }
}

/// Horizontal placement of a toggle switch relative to its label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
    Other(String),
}

impl Align {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some("left") => Align::Left,
            Some("right") => Align::Right,
            Some(other) => Align::Other(other.to_owned()),
        }
    }

    /// `align-left`, `align-right`, ...
    pub fn class(&self) -> String {
        let suffix = match self {
            Align::Left => "left",
            Align::Right => "right",
            Align::Other(other) => other.as_str(),
        };
        format!("align-{suffix}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxConfig {
    pub label: String,
    pub align: Align,
    pub explanation: Option<String>,
}

impl CheckboxConfig {
    pub fn from_attrs(attrs: &(impl AttrSource + ?Sized)) -> Self {
        Self {
            label: attrs.attr(LABEL_ATTR).unwrap_or_default(),
            align: Align::parse(attrs.attr(ALIGN_ATTR).as_deref()),
            explanation: attrs.non_empty_attr(EXPLANATION_ATTR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioConfig {
    pub label: String,
    /// Inline background color for swatch radios; the input's own value.
    pub swatch_color: Option<String>,
}

impl RadioConfig {
    pub fn from_attrs(attrs: &(impl AttrSource + ?Sized)) -> Self {
        let swatch_color = if attrs.has_class(COLOR_SWATCH_CLASS) {
            Some(attrs.attr("value").unwrap_or_default())
        } else {
            None
        };
        Self {
            label: attrs.attr(LABEL_ATTR).unwrap_or_default(),
            swatch_color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoConfig {
    pub label: String,
    /// Path the picker starts out showing (`data-value`).
    pub initial_value: Option<String>,
    /// Previously recorded restore point, if this control was seen before.
    pub original_value: Option<String>,
}

impl PhotoConfig {
    /// `None` unless the file input accepts exactly `image/*`.
    pub fn from_attrs(attrs: &(impl AttrSource + ?Sized)) -> Option<Self> {
        if attrs.attr("accept").as_deref() != Some(IMAGE_ACCEPT) {
            return None;
        }
        Some(Self {
            label: attrs.attr(LABEL_ATTR).unwrap_or_default(),
            initial_value: attrs.non_empty_attr(VALUE_ATTR),
            original_value: attrs.non_empty_attr(ORIGINAL_VALUE_ATTR),
        })
    }

    /// Value to record as `data-original-value`. Only the first preparation
    /// records one; an existing restore point is never replaced.
    pub fn original_to_record(&self) -> Option<&str> {
        match self.original_value {
            Some(_) => None,
            None => self.initial_value.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextConfig {
    pub label: Option<String>,
}

impl TextConfig {
    pub fn from_attrs(attrs: &(impl AttrSource + ?Sized)) -> Self {
        Self {
            label: attrs.non_empty_attr(LABEL_ATTR),
        }
    }
}
