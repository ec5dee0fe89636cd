use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Control families the preparators know how to decorate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Select,
    Checkbox,
    Radio,
    Photo,
    Text,
    Number,
}

impl FieldKind {
    /// Token written into the `data-fk-wrapped` / `data-fk-bound` markers.
    pub fn token(self) -> &'static str {
        match self {
            FieldKind::Select => "select",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Radio => "radio",
            FieldKind::Photo => "photo",
            FieldKind::Text => "text",
            FieldKind::Number => "number",
        }
    }
}

/// The `type` attribute of an `<input>`, reduced to the values we act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputType {
    Text,
    Number,
    Checkbox,
    Radio,
    File,
    Other(String),
}

impl InputType {
    /// Missing `type` behaves like `text`, as in the browser.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|t| t.trim().to_ascii_lowercase()).as_deref() {
            None | Some("") | Some("text") => InputType::Text,
            Some("number") => InputType::Number,
            Some("checkbox") => InputType::Checkbox,
            Some("radio") => InputType::Radio,
            Some("file") => InputType::File,
            Some(other) => InputType::Other(other.to_owned()),
        }
    }
}

/// One harvested field value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Field name to value; later writes for the same name win.
pub type FormValues = BTreeMap<String, FieldValue>;

fn default_success_delay_ms() -> u32 {
    2_000
}

fn default_required_class() -> String {
    "req".to_owned()
}

fn default_hidden_fields_selector() -> String {
    ".hidden-fields".to_owned()
}

/// Host-supplied settings for `prepare`. Every field has a default so an
/// absent or partial settings object is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormSettings {
    #[serde(default = "default_success_delay_ms")]
    pub success_delay_ms: u32,
    #[serde(default = "default_required_class")]
    pub required_class: String,
    #[serde(default = "default_hidden_fields_selector")]
    pub hidden_fields_selector: String,
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            success_delay_ms: default_success_delay_ms(),
            required_class: default_required_class(),
            hidden_fields_selector: default_hidden_fields_selector(),
            translations: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_type_defaults_to_text() {
        assert_eq!(InputType::parse(None), InputType::Text);
        assert_eq!(InputType::parse(Some("")), InputType::Text);
        assert_eq!(InputType::parse(Some("NUMBER")), InputType::Number);
        assert_eq!(
            InputType::parse(Some("email")),
            InputType::Other("email".to_owned())
        );
    }

    #[test]
    fn partial_settings_fill_defaults() {
        let settings: FormSettings =
            serde_json::from_str(r#"{"successDelayMs": 500}"#).expect("settings");
        assert_eq!(settings.success_delay_ms, 500);
        assert_eq!(settings.required_class, "req");
        assert_eq!(settings.hidden_fields_selector, ".hidden-fields");
        assert!(settings.translations.is_empty());
    }

    #[test]
    fn field_values_serialize_flat() {
        let mut values = FormValues::new();
        values.insert("title".into(), "Dune".into());
        values.insert("owned".into(), FieldValue::Bool(true));
        values.insert("cover".into(), FieldValue::Null);
        values.insert("date-ms".into(), FieldValue::Number(1.0));
        values.insert(
            "genres".into(),
            FieldValue::List(vec!["sf".into(), "classic".into()]),
        );

        let json = serde_json::to_value(&values).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "cover": null,
                "date-ms": 1.0,
                "genres": ["sf", "classic"],
                "owned": true,
                "title": "Dune",
            })
        );
    }
}
