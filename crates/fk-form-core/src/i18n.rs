//! Translation lookup for the few strings the enhancer renders itself.

use std::collections::BTreeMap;
use tracing::debug;

pub const CHOOSE_FILE: &str = "choose-file";

pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

/// Key to display-text table. Unknown keys render as the key itself.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

impl Catalog {
    /// English defaults.
    pub fn builtin() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(CHOOSE_FILE.to_owned(), "Choose file".to_owned());
        Self { entries }
    }

    /// Builtin catalog with host-supplied entries layered on top.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Self {
        let mut catalog = Self::builtin();
        catalog
            .entries
            .extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        catalog
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(text) => text.clone(),
            None => {
                debug!(key, "no translation, rendering key");
                key.to_owned()
            }
        }
    }
}
