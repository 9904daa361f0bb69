use super::address::is_valid_address;
use super::normalize::tokenize;
use super::token::Token;

/// Outcome of checking one token.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ValidationResult {
    pub token: Token,
    pub is_valid: bool,
}

impl ValidationResult {
    pub fn new(token: Token) -> Self {
        let is_valid = is_valid_address(&token.text);
        Self { token, is_valid }
    }

    pub fn text(&self) -> &str {
        &self.token.text
    }
}

/// Normalizes `raw` and checks every surviving token, in input order.
pub fn validate_input(raw: &str) -> Vec<ValidationResult> {
    tokenize(raw).into_iter().map(ValidationResult::new).collect()
}

/// Copy-out serializations of the valid subset of a run.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ValidOutputView {
    /// One address per line.
    pub lines: String,
    /// Comma-separated, no spaces.
    pub commas: String,
    pub count: usize,
}

impl ValidOutputView {
    /// Returns `None` when no result is valid.
    pub fn from_results(results: &[ValidationResult]) -> Option<Self> {
        let valid: Vec<&str> = results
            .iter()
            .filter(|r| r.is_valid)
            .map(|r| r.text())
            .collect();

        if valid.is_empty() {
            return None;
        }

        Some(Self {
            lines: valid.join("\n"),
            commas: valid.join(","),
            count: valid.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "0xAb5801a7D398351b8bE11C439e05C5B3259aeC9B";
    const GOOD_2: &str = "0x0000000000000000000000000000000000000001";
    const LONG: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e1";

    #[test]
    fn test_validate_input_valid_then_too_long() {
        let results = validate_input(&format!("{},{}", GOOD, LONG));
        assert_eq!(results.len(), 2);
        assert!(results[0].is_valid);
        assert!(!results[1].is_valid);
        assert_eq!(results[0].text(), GOOD);
        assert_eq!(results[1].token.index, 1);
    }

    #[test]
    fn test_validate_input_empty() {
        assert!(validate_input("").is_empty());
        assert!(validate_input(" \n ").is_empty());
    }

    #[test]
    fn test_validate_input_is_repeatable() {
        let raw = format!("{}\nnope,{}", GOOD, GOOD);
        assert_eq!(validate_input(&raw), validate_input(&raw));
    }

    #[test]
    fn test_view_absent_when_nothing_valid() {
        let results = validate_input("not-an-address");
        assert_eq!(results.len(), 1);
        assert!(ValidOutputView::from_results(&results).is_none());
        assert!(ValidOutputView::from_results(&[]).is_none());
    }

    #[test]
    fn test_view_joins_valid_subset_in_order() {
        let results = validate_input(&format!("{}, junk ,{}\n{}", GOOD_2, GOOD, LONG));
        let view = ValidOutputView::from_results(&results).unwrap();
        assert_eq!(view.count, 2);
        assert_eq!(view.lines, format!("{}\n{}", GOOD_2, GOOD));
        assert_eq!(view.commas, format!("{},{}", GOOD_2, GOOD));
    }

    #[test]
    fn test_view_single_address_has_no_separator() {
        let results = validate_input(GOOD);
        let view = ValidOutputView::from_results(&results).unwrap();
        assert_eq!(view.lines, GOOD);
        assert_eq!(view.commas, GOOD);
    }
}
