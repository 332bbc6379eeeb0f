use thiserror::Error;

/// Articles, coordinating conjunctions and short prepositions that stay
/// lowercase unless they open the title or follow a hyphen-continuation.
pub const MINOR_WORDS: &[&str] = &[
    "a", "an", "and", "the", "but", "for", "or", "nor", "on", "at", "to", "by", "with",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TitleCaseError {
    #[error("Cannot title-case empty text")]
    EmptyInput,
}

/// Convert free text to title case.
///
/// Tokens are split on whitespace and re-joined with single spaces. Minor
/// words are lowercased except in first position or directly after a token
/// ending in `-`; every other token is capitalized.
pub fn title_case(text: &str) -> Result<String, TitleCaseError> {
    let mut words: Vec<String> = Vec::new();
    let mut capitalize_next = true;

    for token in text.split_whitespace() {
        let lower = token.to_lowercase();

        if capitalize_next || !is_minor_word(&lower) {
            words.push(capitalize(token));
        } else {
            words.push(lower);
        }

        capitalize_next = token.ends_with('-');
    }

    let first = words.first_mut().ok_or(TitleCaseError::EmptyInput)?;
    *first = capitalize(first);

    Ok(words.join(" "))
}

pub fn is_minor_word(word: &str) -> bool {
    MINOR_WORDS.contains(&word)
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_word_always_capitalized() {
        assert_eq!(title_case("the beatles live").unwrap(), "The Beatles Live");
        assert_eq!(title_case("a").unwrap(), "A");
    }

    #[test]
    fn test_minor_words_lowercased_after_first() {
        assert_eq!(
            title_case("A Night At The Opera").unwrap(),
            "A Night at the Opera"
        );
        assert_eq!(
            title_case("live AND loud BY the river").unwrap(),
            "Live and Loud by the River"
        );
    }

    #[test]
    fn test_hyphen_continuation_capitalizes_next() {
        assert_eq!(title_case("Re- the Mix").unwrap(), "Re- The Mix");
        assert_eq!(title_case("pink floyd - the wall").unwrap(), "Pink Floyd - The Wall");
    }

    #[test]
    fn test_inner_hyphen_does_not_continue() {
        assert_eq!(title_case("jay-z and the band").unwrap(), "Jay-z and the Band");
    }

    #[test]
    fn test_rest_of_word_lowercased() {
        assert_eq!(title_case("LED ZEPPELIN").unwrap(), "Led Zeppelin");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(
            title_case("  queen \t live   at wembley ").unwrap(),
            "Queen Live at Wembley"
        );
    }

    #[test]
    fn test_non_ascii_letters() {
        assert_eq!(title_case("édith piaf à l'olympia").unwrap(), "Édith Piaf À L'olympia");
    }

    #[test]
    fn test_empty_input_fails() {
        assert_eq!(title_case(""), Err(TitleCaseError::EmptyInput));
        assert_eq!(title_case("   \n "), Err(TitleCaseError::EmptyInput));
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "the rolling stones - live at leeds",
            "A Night At The Opera",
            "nirvana unplugged in new york 1993",
            "Re- the Mix",
            "of monsters and men",
        ];

        for input in inputs {
            let once = title_case(input).unwrap();
            let twice = title_case(&once).unwrap();
            assert_eq!(once, twice, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_is_minor_word() {
        assert!(is_minor_word("the"));
        assert!(is_minor_word("with"));
        assert!(!is_minor_word("The"));
        assert!(!is_minor_word("live"));
    }
}
