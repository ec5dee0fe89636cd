//! DOM-free rules behind the form enhancer.
//!
//! Everything here works on plain strings and attribute lookups so it can be
//! exercised without a browser. The `form-wasm` crate feeds it live DOM state.

pub mod attrs;
pub mod config;
pub mod error;
pub mod i18n;
pub mod markers;
pub mod markup;
pub mod numeric;
pub mod paths;
pub mod validation;
pub mod values;

pub use attrs::AttrSource;
pub use error::{FormError, Result};
pub use fk_form_types::{FieldKind, FieldValue, FormSettings, FormValues, InputType};
