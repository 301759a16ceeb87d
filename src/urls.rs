//! Destination handling
//!
//! Whatever the user pastes is turned into a well-formed absolute URL
//! before it is stored

use url::Url;

use crate::registry::Error;

/// Parse and normalize a destination input
///
/// A missing scheme is patched up with `https://` before validation; the
/// scheme-prefixed input itself is what ends up in storage, so
/// `example.com` is stored as `https://example.com` and left untouched
/// otherwise.
///
/// # Errors
///
/// - [`Error::EmptyInput`] when the input is blank
/// - [`Error::InvalidUrl`] when the input does not parse as an absolute
///   URL, even after prefixing
pub fn parse_destination(input: &str) -> Result<String, Error> {
    let input = input.trim();

    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    let destination = if input.starts_with("http") {
        input.to_string()
    } else {
        format!("https://{input}")
    };

    Url::parse(&destination)?;

    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_destination_prefixes_missing_scheme() {
        assert_eq!(
            Ok("https://example.com".to_string()),
            parse_destination("example.com"),
        );

        assert_eq!(
            Ok("https://www.example.com/a?b=c".to_string()),
            parse_destination("www.example.com/a?b=c"),
        );
    }

    #[test]
    fn test_parse_destination_keeps_existing_scheme() {
        assert_eq!(
            Ok("http://example.com".to_string()),
            parse_destination("http://example.com"),
        );

        assert_eq!(
            Ok("https://example.com/".to_string()),
            parse_destination("  https://example.com/  "),
        );
    }

    #[test]
    fn test_parse_destination_rejects_blank_input() {
        assert_eq!(Err(Error::EmptyInput), parse_destination(""));
        assert_eq!(Err(Error::EmptyInput), parse_destination("   "));
    }

    #[test]
    fn test_parse_destination_rejects_unparseable_input() {
        assert!(matches!(
            parse_destination("not a url"),
            Err(Error::InvalidUrl(_)),
        ));

        // starts with `http`, so no prefixing, and no scheme either
        assert!(matches!(
            parse_destination("httpexample"),
            Err(Error::InvalidUrl(_)),
        ));

        assert!(matches!(
            parse_destination("http://"),
            Err(Error::InvalidUrl(_)),
        ));
    }
}
