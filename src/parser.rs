//! Permissive, zero-copy parser for HTTP authentication header values:
//! a scheme token followed by a comma-separated `key="value"` parameter
//! list, per the param form of RFC 7235 (`token68` credentials are not
//! supported).
//!
//! All values handed to the callbacks are subslices of the input. Quoted
//! strings are delivered without their outer quotes but with backslash
//! escapes preserved; [`unescape_value`] copies them out.

use crate::error::HawkError;

// RFC 7230 tchar.
fn is_tchar(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
        )
}

fn is_ows(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Parse a header value, pushing the scheme and each `key=value` pair to
/// the supplied callbacks in the order they appear. A callback error
/// aborts the parse and propagates to the caller.
pub fn parse_header_value<'a, S, P>(
    input: &'a str,
    mut on_scheme: S,
    mut on_param: P,
) -> Result<(), HawkError>
where
    S: FnMut(&'a str) -> Result<(), HawkError>,
    P: FnMut(&'a str, &'a str) -> Result<(), HawkError>,
{
    let bytes = input.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() && is_ows(bytes[pos]) {
        pos += 1;
    }

    let scheme_start = pos;
    while pos < bytes.len() && is_tchar(bytes[pos]) {
        pos += 1;
    }
    if pos == scheme_start {
        return Err(HawkError::Parse("expected scheme token"));
    }
    on_scheme(&input[scheme_start..pos])?;

    if pos >= bytes.len() || !is_ows(bytes[pos]) {
        return Err(HawkError::Parse("expected parameters after scheme"));
    }

    loop {
        while pos < bytes.len() && is_ows(bytes[pos]) {
            pos += 1;
        }

        let key_start = pos;
        while pos < bytes.len() && is_tchar(bytes[pos]) {
            pos += 1;
        }
        if pos == key_start {
            return Err(HawkError::Parse("expected parameter name"));
        }
        let key = &input[key_start..pos];

        while pos < bytes.len() && is_ows(bytes[pos]) {
            pos += 1;
        }
        if pos >= bytes.len() || bytes[pos] != b'=' {
            return Err(HawkError::Parse("expected '=' after parameter name"));
        }
        pos += 1;
        while pos < bytes.len() && is_ows(bytes[pos]) {
            pos += 1;
        }

        let value = if pos < bytes.len() && bytes[pos] == b'"' {
            pos += 1;
            let value_start = pos;
            loop {
                if pos >= bytes.len() {
                    return Err(HawkError::Parse("unclosed quoted string"));
                }
                match bytes[pos] {
                    b'"' => break,
                    b'\\' => {
                        if pos + 1 >= bytes.len() {
                            return Err(HawkError::Parse("unclosed quoted string"));
                        }
                        pos += 2;
                    }
                    _ => pos += 1,
                }
            }
            let value = &input[value_start..pos];
            pos += 1;
            value
        } else {
            let value_start = pos;
            while pos < bytes.len() && is_tchar(bytes[pos]) {
                pos += 1;
            }
            if pos == value_start {
                return Err(HawkError::Parse("expected parameter value"));
            }
            &input[value_start..pos]
        };

        on_param(key, value)?;

        while pos < bytes.len() && is_ows(bytes[pos]) {
            pos += 1;
        }
        if pos >= bytes.len() {
            return Ok(());
        }
        if bytes[pos] != b',' {
            return Err(HawkError::Parse("unexpected character after parameter value"));
        }
        pos += 1;
    }
}

/// Copy a parsed quoted-string value with its backslash escapes resolved.
pub fn unescape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Result<(String, Vec<(String, String)>), HawkError> {
        let mut scheme = String::new();
        let mut params = Vec::new();
        parse_header_value(
            input,
            |s| {
                scheme = s.to_owned();
                Ok(())
            },
            |key, value| {
                params.push((key.to_owned(), value.to_owned()));
                Ok(())
            },
        )?;
        Ok((scheme, params))
    }

    #[test]
    fn scheme_and_quoted_params() {
        let (scheme, params) =
            collect("Hawk id=\"dh37fgj492je\", ts=\"1353832234\", nonce=\"j4h3g2\"").unwrap();
        assert_eq!(scheme, "Hawk");
        assert_eq!(
            params,
            vec![
                ("id".to_owned(), "dh37fgj492je".to_owned()),
                ("ts".to_owned(), "1353832234".to_owned()),
                ("nonce".to_owned(), "j4h3g2".to_owned()),
            ]
        );
    }

    #[test]
    fn token_values_and_whitespace_tolerance() {
        let (scheme, params) = collect("  Hawk \t id = token-val ,\t ts=\"1\" ").unwrap();
        assert_eq!(scheme, "Hawk");
        assert_eq!(
            params,
            vec![
                ("id".to_owned(), "token-val".to_owned()),
                ("ts".to_owned(), "1".to_owned()),
            ]
        );
    }

    #[test]
    fn escapes_are_preserved() {
        let (_, params) = collect(r#"Hawk ext="a \"quoted\" word""#).unwrap();
        assert_eq!(params[0].1, r#"a \"quoted\" word"#);
        assert_eq!(unescape_value(&params[0].1), r#"a "quoted" word"#);
    }

    #[test]
    fn empty_quoted_value() {
        let (_, params) = collect("Hawk ext=\"\"").unwrap();
        assert_eq!(params[0].1, "");
    }

    #[test]
    fn callback_errors_propagate() {
        let result = parse_header_value(
            "Basic realm=\"x\"",
            |scheme| {
                if scheme == "Hawk" {
                    Ok(())
                } else {
                    Err(HawkError::BadScheme)
                }
            },
            |_, _| Ok(()),
        );
        assert_eq!(result, Err(HawkError::BadScheme));
    }

    #[test]
    fn missing_scheme() {
        assert!(matches!(collect("  "), Err(HawkError::Parse(_))));
        assert!(matches!(collect("=x"), Err(HawkError::Parse(_))));
    }

    #[test]
    fn scheme_without_parameters() {
        assert!(matches!(collect("Hawk"), Err(HawkError::Parse(_))));
    }

    #[test]
    fn missing_equals() {
        assert!(matches!(collect("Hawk id"), Err(HawkError::Parse(_))));
        assert!(matches!(collect("Hawk id nonce=\"1\""), Err(HawkError::Parse(_))));
    }

    #[test]
    fn unclosed_quote() {
        assert!(matches!(collect("Hawk id=\"abc"), Err(HawkError::Parse(_))));
        assert!(matches!(collect("Hawk id=\"abc\\"), Err(HawkError::Parse(_))));
    }

    #[test]
    fn trailing_comma() {
        assert!(matches!(collect("Hawk id=\"x\","), Err(HawkError::Parse(_))));
    }

    #[test]
    fn trailing_garbage() {
        assert!(matches!(collect("Hawk id=\"x\" ;"), Err(HawkError::Parse(_))));
        assert!(matches!(collect("Hawk id=\"x\" y"), Err(HawkError::Parse(_))));
    }

    #[test]
    fn empty_token_value() {
        assert!(matches!(collect("Hawk id=, ts=\"1\""), Err(HawkError::Parse(_))));
    }
}
