//! Line tokenization for shunt
//!
//! An expression line is a sequence of tokens separated by one or more
//! separator characters: space, ideographic space (U+3000), or tab.
//! There is no quoting or escaping; each token is resolved on its own.

use nom::{
    bytes::complete::{take_while, take_while1},
    sequence::preceded,
    IResult,
};

fn is_separator(c: char) -> bool {
    c == ' ' || c == '\u{3000}' || c == '\t'
}

/// Parse one token, skipping leading separators
fn token(input: &str) -> IResult<&str, &str> {
    preceded(take_while(is_separator), take_while1(|c| !is_separator(c)))(input)
}

/// Split a line into its non-empty tokens, in order.
///
/// Never fails: a line of pure separators (or an empty line) yields no
/// tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut rest = line;
    while let Ok((next, tok)) = token(rest) {
        tokens.push(tok);
        rest = next;
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_simple_expression() {
        assert_eq!(tokenize("1 + 2"), vec!["1", "+", "2"]);
    }

    #[test]
    fn tokenize_collapses_runs_of_separators() {
        assert_eq!(tokenize("  1   +\t\t2  "), vec!["1", "+", "2"]);
    }

    #[test]
    fn tokenize_ideographic_space() {
        assert_eq!(tokenize("1\u{3000}+\u{3000}2"), vec!["1", "+", "2"]);
    }

    #[test]
    fn tokenize_empty_line() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t \u{3000} ").is_empty());
    }

    #[test]
    fn tokenize_preserves_order() {
        assert_eq!(
            tokenize("SQRT( 2 ) * MAX"),
            vec!["SQRT(", "2", ")", "*", "MAX"]
        );
    }

    #[test]
    fn tokenize_does_not_split_keywords() {
        // No multi-character ambiguity resolution: "1+2" is one token
        assert_eq!(tokenize("1+2"), vec!["1+2"]);
    }
}
