use super::token::Token;

/// Byte order mark left at the start of text saved by some editors.
const BOM: char = '\u{FEFF}';

fn is_delimiter(c: char) -> bool {
    c == ',' || c == '\n'
}

fn is_padding(c: char) -> bool {
    c.is_whitespace() || c == BOM
}

/// Splits a raw address list into trimmed, non-empty candidates.
///
/// Runs of `,` and `\n` act as one separator. Order is kept and duplicates
/// are not removed. Empty or whitespace-only input yields no candidates.
/// A byte order mark is trimmed like whitespace.
pub fn normalize(raw: &str) -> Vec<String> {
    raw.split(is_delimiter)
        .map(|piece| piece.trim_matches(is_padding))
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Same as [`normalize`], with each candidate tagged by its position.
pub fn tokenize(raw: &str) -> Vec<Token> {
    normalize(raw)
        .into_iter()
        .enumerate()
        .map(|(index, text)| Token { text, index })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize("").is_empty());
    }

    #[test]
    fn test_normalize_whitespace_only() {
        assert!(normalize("   ").is_empty());
        assert!(normalize(" \t \n , \r\n").is_empty());
    }

    #[test]
    fn test_normalize_trims_and_keeps_order() {
        assert_eq!(
            normalize(" 0xABC , 0xDEF \n 0x123 "),
            vec!["0xABC", "0xDEF", "0x123"]
        );
    }

    #[test]
    fn test_normalize_collapses_delimiter_runs() {
        assert_eq!(normalize("a,,b"), vec!["a", "b"]);
        assert_eq!(normalize("a\n\n\n,b,\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_normalize_keeps_duplicates() {
        assert_eq!(normalize("a,a\na"), vec!["a", "a", "a"]);
    }

    #[test]
    fn test_normalize_strips_carriage_returns() {
        assert_eq!(normalize("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_normalize_strips_byte_order_mark() {
        assert_eq!(normalize("\u{FEFF}a\r\nb"), vec!["a", "b"]);
        assert!(normalize("\u{FEFF}").is_empty());
    }

    #[test]
    fn test_normalize_does_not_split_on_inner_spaces() {
        assert_eq!(normalize("a b, c"), vec!["a b", "c"]);
    }

    #[test]
    fn test_tokenize_assigns_indices_after_filtering() {
        let tokens = tokenize(",,first,, ,second");
        assert_eq!(
            tokens,
            vec![
                Token {
                    text: "first".to_string(),
                    index: 0,
                },
                Token {
                    text: "second".to_string(),
                    index: 1,
                },
            ]
        );
    }
}
