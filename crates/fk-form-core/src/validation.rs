//! Required-field verdicts.

use fk_form_types::InputType;

pub const ERROR_CLASS: &str = "validation-error";
pub const SUBMISSION_ERROR_CLASS: &str = "submission-error";
/// Ancestor class that carries the error state.
pub const FIELD_CLASS: &str = "field";

/// What "empty" means for a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// textarea, select, `input[type=text]`: trimmed value must be non-empty.
    TrimmedValue,
    /// `input[type=file]`: at least one file selected.
    FileSelection,
    /// No emptiness rule; always passes.
    Unchecked,
}

impl Rule {
    /// `tag` is the lowercase tag name.
    pub fn for_control(tag: &str, input_type: &InputType) -> Self {
        match (tag, input_type) {
            ("textarea", _) | ("select", _) => Rule::TrimmedValue,
            ("input", InputType::Text) => Rule::TrimmedValue,
            ("input", InputType::File) => Rule::FileSelection,
            _ => Rule::Unchecked,
        }
    }
}

/// Text inputs and textareas get a blur watcher that clears the error once
/// the user has typed something.
pub fn watches_blur(tag: &str, input_type: &InputType) -> bool {
    tag == "textarea" || (tag == "input" && *input_type == InputType::Text)
}

/// Blur check: any non-empty value lifts the error.
pub fn clears_on_blur(value: &str) -> bool {
    !value.is_empty()
}

/// Snapshot of one field at validation time.
#[derive(Debug, Clone)]
pub struct FieldProbe {
    pub already_invalid: bool,
    pub required: bool,
    pub rule: Rule,
    pub value: String,
    pub file_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Wrapper already carries the error class; not re-inspected.
    StillInvalid,
    NotRequired,
    Valid,
    /// Newly invalid; the caller marks the wrapper.
    Invalid,
}

impl Verdict {
    pub fn is_failure(self) -> bool {
        matches!(self, Verdict::StillInvalid | Verdict::Invalid)
    }
}

pub fn judge(probe: &FieldProbe) -> Verdict {
    if probe.already_invalid {
        return Verdict::StillInvalid;
    }
    if !probe.required {
        return Verdict::NotRequired;
    }
    let empty = match probe.rule {
        Rule::TrimmedValue => probe.value.trim().is_empty(),
        Rule::FileSelection => probe.file_count == 0,
        Rule::Unchecked => false,
    };
    if empty { Verdict::Invalid } else { Verdict::Valid }
}

/// Running result of one validation pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tally {
    seen: usize,
    failed: usize,
}

impl Tally {
    pub fn record(&mut self, verdict: Verdict) {
        self.seen += 1;
        if verdict.is_failure() {
            self.failed += 1;
        }
    }

    /// `None` when no field was examined: validation did not happen.
    pub fn outcome(&self) -> Option<bool> {
        (self.seen > 0).then_some(self.failed == 0)
    }
}
