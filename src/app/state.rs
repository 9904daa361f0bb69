use crate::validation::{validate_input, ValidOutputView, ValidationResult};

/// Results of the most recent validation run.
///
/// Each run replaces the previous results wholesale; nothing is merged.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormState {
    pub results: Vec<ValidationResult>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `raw` and stores the outcome, returning the number of
    /// results produced.
    pub fn run(&mut self, raw: &str) -> usize {
        self.results = validate_input(raw);
        self.results.len()
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn valid_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_valid).count()
    }

    /// Derived on every call from the current results.
    pub fn valid_view(&self) -> Option<ValidOutputView> {
        ValidOutputView::from_results(&self.results)
    }

    /// True when a run produced results and none of them is valid.
    pub fn nothing_valid(&self) -> bool {
        self.has_results() && self.valid_count() == 0
    }
}
