//! Short code generation
//!
//! Generated codes are a short word plus a number, easy to read out
//! loud and easy to retype

use rand::Rng;

/// Vocabulary for generated codes
const WORDS: &[&str] = &["cat", "dog", "sun", "moon", "tree"];

/// Numeric suffix range, inclusive on both ends
const SUFFIX_RANGE: std::ops::RangeInclusive<u8> = 1..=99;

/// Source of candidate short codes
///
/// Implementations are pure generators: uniqueness against live records
/// is the registry's concern, not the generator's
pub trait CodeGenerator {
    /// Produce one candidate code, matching `[a-z0-9]+`
    fn generate(&mut self) -> String;
}

/// The word-and-number generator
///
/// Draws a random word from a small fixed vocabulary and glues a random
/// number between 1 and 99 to it: `dog42`, `moon7`, ...
#[derive(Clone, Copy, Debug, Default)]
pub struct WordNumberGenerator;

impl CodeGenerator for WordNumberGenerator {
    fn generate(&mut self) -> String {
        let mut rng = rand::thread_rng();

        let word = WORDS[rng.gen_range(0..WORDS.len())];
        let number = rng.gen_range(SUFFIX_RANGE);

        format!("{word}{number}")
    }
}

/// Sanitize a user-supplied code
///
/// Lowercases the input and keeps only `[a-z0-9]`, everything else is
/// dropped
///
/// ```rust
/// assert_eq!(briefly::sanitize_code(" My-Dog! "), "mydog".to_string());
/// ```
pub fn sanitize_code(code: &str) -> String {
    code.chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_code() {
        assert_eq!("mydog", sanitize_code(" My-Dog! "));
        assert_eq!("dog1", sanitize_code("dog1"));
        assert_eq!("abc123", sanitize_code("a/b/c 1.2.3"));
        assert_eq!("", sanitize_code("!?#"));
        assert_eq!("", sanitize_code(""));
    }

    #[test]
    fn test_generated_codes_have_the_word_number_shape() {
        let mut generator = WordNumberGenerator;

        for _ in 0..100 {
            let code = generator.generate();

            // already sanitized by construction
            assert_eq!(code, sanitize_code(&code));

            let word: String = code.chars().filter(char::is_ascii_alphabetic).collect();
            let number: String = code.chars().filter(char::is_ascii_digit).collect();

            assert!(WORDS.contains(&word.as_str()));
            assert!(SUFFIX_RANGE.contains(&number.parse::<u8>().unwrap()));
        }
    }
}
