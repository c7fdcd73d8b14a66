use ikws::{Error, Result, charset::DEFAULT_CHARSET, format_result, format_result_strict};

const GOOGLE: &str = "http://www.google.com/search?q=\\{@}&ie=UTF-8&oe=UTF-8";

#[test]
fn test_legacy_reference_matches_rest_group() {
    let legacy = format_result("http://x/?q=\\1", "", "", "abc", true);
    let modern = format_result("http://x/?q=\\{@}", "", "", "abc", true);
    assert_eq!(legacy, "http://x/?q=abc");
    assert_eq!(legacy, modern);
}

#[test]
fn test_empty_query_guard() {
    assert_eq!(format_result("\\{1}", "utf-8", "", "", true), "");
    assert_eq!(format_result("http://x/?q=\\{@}", "utf-8", "", "", true), "");
    assert_eq!(format_result("http://x/", "", "", "", true), "http://x/");
    assert_eq!(format_result("http://x/", "", "", "", false), "");
}

#[test]
fn test_charset_keys() {
    assert_eq!(
        format_result("\\{ikw_charset}|\\{wsc_charset}", "UTF-8", "", "q", true),
        format!("UTF-8|{DEFAULT_CHARSET}")
    );
    assert_eq!(
        format_result("\\{ikw_charset}|\\{wsc_charset}", "bogus", "koi8-r", "q", true),
        "iso-8859-1|koi8-r"
    );
}

#[test]
fn test_charset_aliases_are_kept() {
    assert_eq!(
        format_result("\\{ikw_charset}", "ISO8859-15", "", "a", true),
        "ISO8859-15"
    );
    assert_eq!(
        format_result("\\{wsc_charset}", "", "x-sjis", "a", true),
        "x-sjis"
    );
}

#[test]
fn test_user_query_overrides_charset() {
    assert_eq!(
        format_result("\\{ikw_charset}\\@", "utf-8", "", "ikw_charset=foo", true),
        "foo"
    );
}

#[test]
fn test_raw_query_is_decoded() {
    assert_eq!(format_result("\\{@}", "", "", "a%20b", true), "a+b");
    assert_eq!(
        format_result("\\{1}", "", "", "%22new%20york%22%20pizza", true),
        "%22new+york%22"
    );
    assert_eq!(format_result("\\{@}", "", "", "%C3%BC", true), "%C3%BC");
    assert_eq!(format_result("\\{@}", "", "", "a+b", true), "a%2Bb");
}

#[test]
fn test_search_url() {
    assert_eq!(
        format_result(GOOGLE, "utf-8", "", "gg:", true),
        "http://www.google.com/search?q=gg%3A&ie=UTF-8&oe=UTF-8"
    );
    assert_eq!(
        format_result(GOOGLE, "utf-8", "", "rust lang", true),
        "http://www.google.com/search?q=rust+lang&ie=UTF-8&oe=UTF-8"
    );
}

#[test]
fn test_repeated_calls_are_identical() {
    let template = "https://\\{lang,\"en\"}.example.org/?q=\\{@}&n=\\{1-2}";
    let first = format_result(template, "utf-8", "", "a b c lang=de", true);
    let second = format_result(template, "utf-8", "", "a b c lang=de", true);
    assert_eq!(first, "https://de.example.org/?q=c&n=a+b");
    assert_eq!(first, second);
}

#[test]
fn test_lenient_keeps_malformed_syntax() {
    assert_eq!(format_result("x\\{1", "", "", "a", true), "x\\{1");
    assert_eq!(format_result("x\\{}\\{1}", "", "", "a", true), "x\\{}a");
}

#[test]
fn test_strict_format() -> Result<()> {
    assert_eq!(
        format_result_strict(GOOGLE, "utf-8", "", "kde", true)?,
        "http://www.google.com/search?q=kde&ie=UTF-8&oe=UTF-8"
    );
    assert_eq!(format_result_strict("\\{1", "", "", "", true)?, "");

    assert!(matches!(
        format_result_strict("\\{nope}", "", "", "q", true),
        Err(Error::Unresolved { pos: 0, .. })
    ));
    assert!(matches!(
        format_result_strict("\\{1", "", "", "q", true),
        Err(Error::UnterminatedGroup { pos: 0 })
    ));
    Ok(())
}
