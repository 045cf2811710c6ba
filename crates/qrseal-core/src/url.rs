//! URL embedding and extraction for tokens.
//!
//! A token rides in a single query parameter (`data` by default). The
//! rest of the URL is never re-encoded: existing parameters, their
//! order, the path, and the fragment pass through byte for byte.

use crate::codec::Token;
use crate::error::EmbedError;

/// Default query parameter that carries the token.
pub const DEFAULT_PARAM: &str = "data";

/// Embed a token into a URL under the default parameter.
pub fn embed(url: &str, token: &Token) -> Result<String, EmbedError> {
    embed_with_param(url, token, DEFAULT_PARAM)
}

/// Embed a token under a custom parameter name.
///
/// Overwrite semantics: the first existing entry for `param` is replaced
/// in place and later duplicates are dropped. A URL without a
/// `scheme://` part is rejected; anything syntactically valid passes
/// through untouched apart from the one parameter.
pub fn embed_with_param(url: &str, token: &Token, param: &str) -> Result<String, EmbedError> {
    if !has_scheme(url) {
        return Err(EmbedError::MissingScheme(url.to_string()));
    }

    let (without_fragment, fragment) = match url.split_once('#') {
        Some((head, frag)) => (head, Some(frag)),
        None => (url, None),
    };

    let (base, query) = match without_fragment.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (without_fragment, None),
    };

    let entry = format!("{}={}", param, token.as_str());
    let new_query = match query {
        None | Some("") => entry,
        Some(query) => {
            let mut parts: Vec<String> = Vec::new();
            let mut replaced = false;
            for part in query.split('&') {
                let key = part.split_once('=').map_or(part, |(k, _)| k);
                if key == param {
                    if !replaced {
                        parts.push(entry.clone());
                        replaced = true;
                    }
                } else {
                    parts.push(part.to_string());
                }
            }
            if !replaced {
                parts.push(entry);
            }
            parts.join("&")
        }
    };

    let mut out = format!("{}?{}", base, new_query);
    if let Some(frag) = fragment {
        out.push('#');
        out.push_str(frag);
    }
    Ok(out)
}

/// Extract a token from a candidate string.
///
/// Returns the parameter value if `candidate` is an http or https URL
/// carrying a non-empty `param` entry, percent-decoded. Anything else is
/// `None`; callers decide whether to treat the candidate as a bare
/// token. An empty `param=` entry counts as absent.
pub fn extract(candidate: &str, param: &str) -> Option<Token> {
    if !is_http_url(candidate) {
        return None;
    }

    let without_fragment = candidate.split_once('#').map_or(candidate, |(head, _)| head);
    let (_, query) = without_fragment.split_once('?')?;

    for part in query.split('&') {
        if let Some((key, value)) = part.split_once('=') {
            if key == param && !value.is_empty() {
                return Some(Token::new(percent_decode(value)));
            }
        }
    }
    None
}

/// Check if a string looks like an http or https URL.
pub fn is_http_url(candidate: &str) -> bool {
    has_prefix_ignore_case(candidate, "http://") || has_prefix_ignore_case(candidate, "https://")
}

fn has_prefix_ignore_case(s: &str, prefix: &str) -> bool {
    s.as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}

fn has_scheme(url: &str) -> bool {
    match url.split_once("://") {
        Some((scheme, _)) => {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// Percent-decode a query value. `+` means space; malformed escapes pass
/// through literally.
fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => match hex_pair(bytes[i + 1], bytes[i + 2]) {
                Some(byte) => {
                    out.push(byte);
                    i += 3;
                }
                None => {
                    out.push(bytes[i]);
                    i += 1;
                }
            },
            other => {
                out.push(other);
                i += 1;
            }
        }
    }
    String::from_utf8(out).unwrap_or_else(|_| value.to_string())
}

fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = (hi as char).to_digit(16)? as u8;
    let lo = (lo as char).to_digit(16)? as u8;
    Some(hi * 16 + lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(s: &str) -> Token {
        Token::new(s)
    }

    #[test]
    fn test_embed_appends_param() {
        let out = embed("https://example.com/path", &tok("abc123")).unwrap();
        assert_eq!(out, "https://example.com/path?data=abc123");
    }

    #[test]
    fn test_embed_preserves_existing_params() {
        let out = embed("https://example.com/p?a=1&b=2", &tok("T")).unwrap();
        assert_eq!(out, "https://example.com/p?a=1&b=2&data=T");
    }

    #[test]
    fn test_embed_overwrites_in_place() {
        let out = embed("https://example.com/p?a=1&data=old&b=2", &tok("new")).unwrap();
        assert_eq!(out, "https://example.com/p?a=1&data=new&b=2");
    }

    #[test]
    fn test_embed_drops_duplicate_entries() {
        let out = embed("https://example.com/?data=one&x=9&data=two", &tok("T")).unwrap();
        assert_eq!(out, "https://example.com/?data=T&x=9");
    }

    #[test]
    fn test_embed_preserves_fragment() {
        let out = embed("https://example.com/p?a=1#section", &tok("T")).unwrap();
        assert_eq!(out, "https://example.com/p?a=1&data=T#section");
    }

    #[test]
    fn test_embed_keeps_flag_params() {
        let out = embed("https://example.com/?debug&a=1", &tok("T")).unwrap();
        assert_eq!(out, "https://example.com/?debug&a=1&data=T");
    }

    #[test]
    fn test_embed_handles_empty_query() {
        let out = embed("https://example.com/p?", &tok("T")).unwrap();
        assert_eq!(out, "https://example.com/p?data=T");
    }

    #[test]
    fn test_embed_requires_scheme() {
        assert_eq!(
            embed("example.com/path", &tok("T")),
            Err(EmbedError::MissingScheme("example.com/path".to_string()))
        );
        assert!(embed("://no-scheme", &tok("T")).is_err());
    }

    #[test]
    fn test_embed_accepts_non_http_schemes() {
        let out = embed("ftp://files.example.com/", &tok("T")).unwrap();
        assert_eq!(out, "ftp://files.example.com/?data=T");
    }

    #[test]
    fn test_embed_custom_param() {
        let out = embed_with_param("https://example.com/", &tok("T"), "payload").unwrap();
        assert_eq!(out, "https://example.com/?payload=T");
    }

    #[test]
    fn test_extract_roundtrip() {
        let urls = [
            "https://example.com",
            "https://example.com/deep/path",
            "http://example.com/?a=1&b=2",
            "https://example.com/p?a=1#frag",
        ];
        for url in urls {
            let embedded = embed(url, &tok("abc-_123=")).unwrap();
            assert_eq!(extract(&embedded, DEFAULT_PARAM), Some(tok("abc-_123=")));
        }
    }

    #[test]
    fn test_extract_non_url() {
        assert_eq!(extract("just a token", DEFAULT_PARAM), None);
        assert_eq!(extract("", DEFAULT_PARAM), None);
    }

    #[test]
    fn test_extract_rejects_other_schemes() {
        assert_eq!(extract("ftp://example.com/?data=T", DEFAULT_PARAM), None);
    }

    #[test]
    fn test_extract_without_param() {
        assert_eq!(extract("https://example.com/?x=1", DEFAULT_PARAM), None);
        assert_eq!(extract("https://example.com/", DEFAULT_PARAM), None);
    }

    #[test]
    fn test_extract_empty_value_counts_as_absent() {
        assert_eq!(extract("https://example.com/?data=", DEFAULT_PARAM), None);
        assert_eq!(extract("https://example.com/?data=&x=1", DEFAULT_PARAM), None);
    }

    #[test]
    fn test_extract_scheme_case_insensitive() {
        assert_eq!(
            extract("HTTPS://EXAMPLE.COM/?data=T", DEFAULT_PARAM),
            Some(tok("T"))
        );
    }

    #[test]
    fn test_extract_strips_fragment() {
        assert_eq!(
            extract("https://example.com/?data=T#frag", DEFAULT_PARAM),
            Some(tok("T"))
        );
    }

    #[test]
    fn test_extract_takes_first_entry() {
        assert_eq!(
            extract("https://example.com/?data=first&data=second", DEFAULT_PARAM),
            Some(tok("first"))
        );
    }

    #[test]
    fn test_extract_percent_decodes_value() {
        assert_eq!(
            extract("https://example.com/?data=a%3Db", DEFAULT_PARAM),
            Some(tok("a=b"))
        );
        assert_eq!(
            extract("https://example.com/?data=a+b", DEFAULT_PARAM),
            Some(tok("a b"))
        );
    }

    #[test]
    fn test_percent_decode_malformed_escape_passes_through() {
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
    }
}
