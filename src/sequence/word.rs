//! Word adapter: parses maximal runs of printable ASCII into tokens.

use std::io::{self, Read};

/// Sentinel token appended after the corpus. Thirteen tildes sort above
/// any other printable-ASCII token the parser can realistically produce;
/// the index validates this at build time.
pub const WORD_SENTINEL: &str = "~~~~~~~~~~~~~";

/// Parse maximal runs of printable ASCII (`!`..=`~`) as tokens. Any other
/// byte separates tokens and is otherwise discarded.
pub fn read_words<R: Read>(mut reader: R) -> io::Result<Vec<String>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(tokenize_bytes(&buf))
}

/// Parse words and append [`WORD_SENTINEL`].
pub fn read_words_with_sentinel<R: Read>(reader: R) -> io::Result<Vec<String>> {
    let mut words = read_words(reader)?;
    words.push(WORD_SENTINEL.to_string());
    Ok(words)
}

/// Tokenize a query line with the corpus rules. No sentinel is appended.
pub fn tokenize(line: &str) -> Vec<String> {
    tokenize_bytes(line.as_bytes())
}

fn tokenize_bytes(bytes: &[u8]) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    for &b in bytes {
        if (b'!'..=b'~').contains(&b) {
            current.push(b as char);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_whitespace() {
        assert_eq!(tokenize("the cat  sat"), vec!["the", "cat", "sat"]);
    }

    #[test]
    fn test_splits_on_control_bytes() {
        assert_eq!(tokenize("a\tb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_keeps_punctuation_inside_tokens() {
        assert_eq!(tokenize("don't stop!"), vec!["don't", "stop!"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("   \n ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_sentinel_appended_last() {
        let words = read_words_with_sentinel("a b".as_bytes()).unwrap();
        assert_eq!(words, vec!["a", "b", WORD_SENTINEL]);
    }

    #[test]
    fn test_sentinel_sorts_above_words() {
        assert!(WORD_SENTINEL.to_string() > "zebra".to_string());
        assert!(WORD_SENTINEL.to_string() > "}brace".to_string());
    }
}
