/// Candidate address extracted from the raw input blob.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub text: String,
    /// Position among the surviving tokens of one validation run.
    pub index: usize,
}
