//! Provider charset names and percent-encoding of substituted values.
//!
//! Substituted fragments are always percent-encoded from UTF-8. A provider's
//! charset is only validated and handed to the template through the
//! [`IKW_CHARSET`](crate::IKW_CHARSET) and [`WSC_CHARSET`](crate::WSC_CHARSET)
//! keys, so that providers can tell the remote service which encoding to
//! expect.

use encoding_rs::Encoding;
use std::borrow::Cow;

/// The charset used when a provider declares none, or one that is unknown.
pub const DEFAULT_CHARSET: &str = "iso-8859-1";

/// Returns whether `name` is a charset label the engine recognises.
///
/// Labels are looked up in the WHATWG encoding label table, so aliases such
/// as `ISO8859-15`, `l1`, `cp819` or `x-sjis` are accepted. Matching is
/// case-insensitive and ignores surrounding whitespace.
#[must_use]
pub fn is_known_charset(name: &str) -> bool {
    Encoding::for_label(name.trim().as_bytes()).is_some()
}

/// Returns `name` if it is a recognised charset, or [`DEFAULT_CHARSET`] for
/// an empty or unknown name.
#[must_use]
pub fn normalize_charset(name: &str) -> &str {
    if is_known_charset(name) {
        name.trim()
    } else {
        DEFAULT_CHARSET
    }
}

/// Percent-encodes a substituted value.
///
/// Every space-separated word is encoded on its own and the words are joined
/// with `+`, so spaces in the value end up as `+` in the URL. Everything
/// outside the unreserved set is escaped, which turns a literal `+` into
/// `%2B`.
#[must_use]
pub fn encode_fragment(value: &str) -> String {
    value
        .split(' ')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("+")
}

/// Decodes the percent-encoded query handed over by the caller. A `+` is kept
/// as is; invalid UTF-8 is replaced rather than rejected.
#[must_use]
pub fn decode_query(raw: &str) -> Cow<'_, str> {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded,
        Err(_) => {
            let bytes = urlencoding::decode_binary(raw.as_bytes());
            Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_names_are_case_insensitive() {
        assert!(is_known_charset("UTF-8"));
        assert!(is_known_charset("Shift_JIS"));
        assert!(!is_known_charset("klingon-1"));
        assert!(!is_known_charset(""));
    }

    #[test]
    fn unknown_charset_falls_back() {
        assert_eq!(normalize_charset(""), DEFAULT_CHARSET);
        assert_eq!(normalize_charset("bogus"), DEFAULT_CHARSET);
        assert_eq!(normalize_charset("UTF-8"), "UTF-8");
    }

    #[test]
    fn charset_aliases_keep_their_spelling() {
        for alias in ["ISO8859-15", "l1", "cp819", "x-sjis", "windows-31j", "utf8", "Latin1"] {
            assert!(is_known_charset(alias), "{alias}");
            assert_eq!(normalize_charset(alias), alias);
        }
        assert_eq!(normalize_charset(" koi8-u "), "koi8-u");
    }

    #[test]
    fn spaces_become_plus_and_plus_is_escaped() {
        assert_eq!(encode_fragment("hello world"), "hello+world");
        assert_eq!(encode_fragment("c++"), "c%2B%2B");
        assert_eq!(encode_fragment("a/b?c"), "a%2Fb%3Fc");
        assert_eq!(encode_fragment("über"), "%C3%BCber");
        assert_eq!(encode_fragment(""), "");
    }

    #[test]
    fn decoding_keeps_plus() {
        assert_eq!(decode_query("a%20b+c"), "a b+c");
        assert_eq!(decode_query("%C3%BC"), "ü");
        assert_eq!(decode_query("%FF"), "\u{FFFD}");
    }
}
