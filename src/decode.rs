use crate::error::DecodeError;

use std::borrow::Cow;

/// Percent-decodes a captured value.
///
/// Every escape is decoded, reserved characters included, so `%2Fetc`
/// becomes `/etc`. Values without a `%` are returned borrowed.
pub fn decode(value: &str) -> Result<Cow<'_, str>, DecodeError> {
    if !value.contains('%') {
        return Ok(Cow::Borrowed(value));
    }

    if !escapes_valid(value.as_bytes()) {
        return Err(DecodeError::InvalidEscape {
            value: value.to_owned(),
        });
    }

    urlencoding::decode(value).map_err(|_| DecodeError::InvalidUtf8 {
        value: value.to_owned(),
    })
}

/// Percent-decodes a query-string component, where `+` stands for a space.
pub(crate) fn decode_form(value: &str) -> Result<Cow<'_, str>, DecodeError> {
    if !value.contains('+') {
        return decode(value);
    }

    let spaced = value.replace('+', " ");
    decode(&spaced).map(|decoded| Cow::Owned(decoded.into_owned()))
}

// `urlencoding` passes malformed escapes through untouched, so they are
// rejected up front.
fn escapes_valid(bytes: &[u8]) -> bool {
    let mut i = 0;

    while let Some(&b) = bytes.get(i) {
        if b == b'%' {
            match (bytes.get(i + 1), bytes.get(i + 2)) {
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {
                    i += 3;
                    continue;
                }
                _ => return false,
            }
        }

        i += 1;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrowed_without_escapes() {
        assert!(matches!(decode("plain"), Ok(Cow::Borrowed("plain"))));
        assert!(matches!(decode(""), Ok(Cow::Borrowed(""))));
    }

    #[test]
    fn reserved_characters() {
        assert_eq!(decode("%2Fetc").unwrap(), "/etc");
        assert_eq!(decode("a%20b").unwrap(), "a b");
        assert_eq!(decode("%3f%3D").unwrap(), "?=");
    }

    #[test]
    fn multibyte() {
        assert_eq!(decode("%E4%B8%AD%E6%96%87").unwrap(), "中文");
        assert_eq!(decode("ʯ").unwrap(), "ʯ");
    }

    #[test]
    fn malformed_escapes() {
        for value in ["%", "%2", "a%zz", "%G0", "100%"] {
            assert_eq!(
                decode(value),
                Err(DecodeError::InvalidEscape {
                    value: value.to_owned()
                }),
                "{value}"
            );
        }
    }

    #[test]
    fn invalid_utf8() {
        assert_eq!(
            decode("%FF%FE"),
            Err(DecodeError::InvalidUtf8 {
                value: "%FF%FE".to_owned()
            })
        );
    }

    #[test]
    fn plus_is_literal_in_paths() {
        assert_eq!(decode("a+b").unwrap(), "a+b");
        assert_eq!(decode_form("a+b").unwrap(), "a b");
        assert_eq!(decode_form("a%2Bb+c").unwrap(), "a+b c");
    }
}
