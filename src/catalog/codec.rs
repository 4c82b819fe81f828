//! Transport-safe text form of a [`CatalogEntry`].
//!
//! An entry travels between screens as JSON text with URL-component
//! escaping applied, so it fits in a single query parameter value. Output
//! never contains `&`, `=`, `?` or `#`. Decoding accepts both `%20` and `+`
//! for a space, which covers `encodeURIComponent` and form encoders alike.

use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use url::form_urlencoded;

use crate::catalog::entry::CatalogEntry;
use crate::catalog::error::{DecodeError, EncodeError};

pub fn encode(entry: &CatalogEntry) -> Result<String, EncodeError> {
    let json = serde_json::to_string(entry)?;
    Ok(form_urlencoded::byte_serialize(json.as_bytes()).collect())
}

/// Unescapes `raw`, parses it as JSON and validates the resulting entry.
pub fn decode(raw: &str) -> Result<CatalogEntry, DecodeError> {
    let json = unescape(raw)?;
    let entry: CatalogEntry = serde_json::from_str(&json)?;
    entry.validate().map_err(DecodeError::InvalidEntry)?;
    Ok(entry)
}

fn unescape(raw: &str) -> Result<String, DecodeError> {
    if let Some(c) = raw.chars().find(|c| matches!(c, '&' | '=')) {
        return Err(DecodeError::Unescaped(c));
    }

    let bytes = raw.as_bytes();
    for (idx, _) in raw.match_indices('%') {
        let well_formed = bytes
            .get(idx + 1..idx + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return Err(DecodeError::Escape(format!(
                "malformed percent escape at byte {idx}"
            )));
        }
    }

    // `+` is a space; an escaped plus arrives as `%2B` and survives this.
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|err| DecodeError::Escape(format!("escaped bytes are not UTF-8: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn encoded_form_is_query_safe() {
        for entry in &Catalog::builtin() {
            let encoded = encode(entry).unwrap();
            assert!(
                encoded
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || "%+-._*".contains(c)),
                "unsafe char in {encoded}"
            );
        }
    }

    #[test]
    fn decodes_encode_uri_component_output() {
        // encodeURIComponent('{"id":1,"name":"A b","desc":"d","image":"/i.png","detail":"x"}')
        let raw = "%7B%22id%22%3A1%2C%22name%22%3A%22A%20b%22%2C%22desc%22%3A%22d%22%2C\
                   %22image%22%3A%22%2Fi.png%22%2C%22detail%22%3A%22x%22%7D";
        let entry = decode(raw).unwrap();
        assert_eq!(entry.name, "A b");
        assert_eq!(entry.image, "/i.png");
    }

    #[test]
    fn raw_separator_is_rejected() {
        assert!(matches!(decode("%7B&%7D"), Err(DecodeError::Unescaped('&'))));
    }

    #[test]
    fn wrong_shape_is_a_json_error() {
        let raw: String = form_urlencoded::byte_serialize(br#"{"id":"one"}"#).collect();
        assert!(matches!(decode(&raw), Err(DecodeError::Json(_))));
    }

    #[test]
    fn blank_name_is_invalid() {
        let raw: String = form_urlencoded::byte_serialize(
            br#"{"id":1,"name":"","desc":"d","image":"/i.png","detail":"x"}"#,
        )
        .collect();
        assert!(matches!(decode(&raw), Err(DecodeError::InvalidEntry(_))));
    }

    #[test]
    fn plus_and_escaped_plus_decode_differently() {
        assert_eq!(unescape("a+b%2Bc").unwrap(), "a b+c");
    }

    #[test]
    fn dangling_percent_is_an_escape_error() {
        assert!(matches!(unescape("100%"), Err(DecodeError::Escape(_))));
        assert!(matches!(unescape("%4"), Err(DecodeError::Escape(_))));
    }

    #[test]
    fn empty_input_is_a_json_error() {
        assert!(matches!(decode(""), Err(DecodeError::Json(_))));
    }
}
