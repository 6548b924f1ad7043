//! Wire formats for the `Authorization`, `Server-Authorization` and
//! `WWW-Authenticate` headers.
//!
//! Parsed field structs borrow from the input buffer; see the caveats on
//! [`crate::parser`] about escape handling. Serialized values are emitted
//! verbatim inside their quotes, so callers must supply values free of
//! embedded `"` and `\`.

use std::num::IntErrorKind;

use crate::error::HawkError;
use crate::parser::parse_header_value;

/// The one scheme this crate speaks. Comparison is exact.
pub const HAWK_SCHEME: &str = "Hawk";

/// Parameters of a Hawk `Authorization` request header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthorizationFields<'a> {
    pub id: &'a str,
    pub ts: i64,
    pub nonce: &'a str,
    pub mac: &'a str,
    pub hash: Option<&'a str>,
    pub ext: Option<&'a str>,
    pub app: Option<&'a str>,
    pub dlg: Option<&'a str>,
}

/// Parameters of a Hawk `Server-Authorization` response header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ServerAuthorizationFields<'a> {
    pub mac: &'a str,
    pub hash: Option<&'a str>,
    pub ext: Option<&'a str>,
}

/// Parameters of a Hawk `WWW-Authenticate` timestamp challenge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WwwAuthenticateFields<'a> {
    pub ts: i64,
    pub tsm: &'a str,
}

/// Parse a Hawk `Authorization` header value. Required parameters are
/// `id`, `ts`, `nonce` and `mac`; unknown parameters are skipped so that
/// future extensions do not break older validators.
pub fn parse_authorization(input: &str) -> Result<AuthorizationFields<'_>, HawkError> {
    let mut id = None;
    let mut ts = None;
    let mut nonce = None;
    let mut mac = None;
    let mut hash = None;
    let mut ext = None;
    let mut app = None;
    let mut dlg = None;

    parse_header_value(input, expect_hawk_scheme, |key, value| {
        match key {
            "id" => id = Some(value),
            "ts" => ts = Some(parse_ts(value)?),
            "nonce" => nonce = Some(value),
            "mac" => mac = Some(value),
            "hash" => hash = Some(value),
            "ext" => ext = Some(value),
            "app" => app = Some(value),
            "dlg" => dlg = Some(value),
            _ => {}
        }
        Ok(())
    })?;

    Ok(AuthorizationFields {
        id: id.ok_or(HawkError::Parse("missing id parameter"))?,
        ts: ts.ok_or(HawkError::Parse("missing ts parameter"))?,
        nonce: nonce.ok_or(HawkError::Parse("missing nonce parameter"))?,
        mac: mac.ok_or(HawkError::Parse("missing mac parameter"))?,
        hash,
        ext,
        app,
        dlg,
    })
}

/// Parse a Hawk `Server-Authorization` header value. Only `mac` is
/// required.
pub fn parse_server_authorization(input: &str) -> Result<ServerAuthorizationFields<'_>, HawkError> {
    let mut mac = None;
    let mut hash = None;
    let mut ext = None;

    parse_header_value(input, expect_hawk_scheme, |key, value| {
        match key {
            "mac" => mac = Some(value),
            "hash" => hash = Some(value),
            "ext" => ext = Some(value),
            _ => {}
        }
        Ok(())
    })?;

    Ok(ServerAuthorizationFields {
        mac: mac.ok_or(HawkError::Parse("missing mac parameter"))?,
        hash,
        ext,
    })
}

/// Parse a Hawk `WWW-Authenticate` timestamp challenge. Both `ts` and
/// `tsm` are required.
pub fn parse_www_authenticate(input: &str) -> Result<WwwAuthenticateFields<'_>, HawkError> {
    let mut ts = None;
    let mut tsm = None;

    parse_header_value(input, expect_hawk_scheme, |key, value| {
        match key {
            "ts" => ts = Some(parse_ts(value)?),
            "tsm" => tsm = Some(value),
            _ => {}
        }
        Ok(())
    })?;

    Ok(WwwAuthenticateFields {
        ts: ts.ok_or(HawkError::Parse("missing ts parameter"))?,
        tsm: tsm.ok_or(HawkError::Parse("missing tsm parameter"))?,
    })
}

fn expect_hawk_scheme(scheme: &str) -> Result<(), HawkError> {
    if scheme == HAWK_SCHEME {
        Ok(())
    } else {
        Err(HawkError::BadScheme)
    }
}

/// Parse a signed decimal `ts` value. A single leading sign is accepted;
/// any other non-digit fails with [`HawkError::TimeValue`] and values
/// outside `i64` fail with [`HawkError::Overflow`].
pub(crate) fn parse_ts(value: &str) -> Result<i64, HawkError> {
    value.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => HawkError::Overflow,
        _ => HawkError::TimeValue,
    })
}

/// Serialize an `Authorization` header value. Parameter order on the
/// wire is fixed: `id, ts, nonce, [hash,] [ext,] [app,] [dlg,] mac`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn authorization_header(
    id: &str,
    ts: i64,
    nonce: &str,
    mac: &str,
    hash: Option<&str>,
    ext: Option<&str>,
    app: Option<&str>,
    dlg: Option<&str>,
) -> String {
    let ts = ts.to_string();
    let mut params = Vec::with_capacity(8);
    params.push(("id", id));
    params.push(("ts", ts.as_str()));
    params.push(("nonce", nonce));
    if let Some(hash) = hash {
        params.push(("hash", hash));
    }
    if let Some(ext) = ext {
        params.push(("ext", ext));
    }
    if let Some(app) = app {
        params.push(("app", app));
    }
    if let Some(dlg) = dlg {
        params.push(("dlg", dlg));
    }
    params.push(("mac", mac));
    serialize_header(&params)
}

/// Serialize a `Server-Authorization` header value: `mac, [hash,] [ext]`.
pub(crate) fn server_authorization_header(
    mac: &str,
    hash: Option<&str>,
    ext: Option<&str>,
) -> String {
    let mut params = Vec::with_capacity(3);
    params.push(("mac", mac));
    if let Some(hash) = hash {
        params.push(("hash", hash));
    }
    if let Some(ext) = ext {
        params.push(("ext", ext));
    }
    serialize_header(&params)
}

/// Serialize a `WWW-Authenticate` timestamp challenge.
pub(crate) fn www_authenticate_header(ts: i64, tsm: &str) -> String {
    let ts = ts.to_string();
    serialize_header(&[("ts", ts.as_str()), ("tsm", tsm)])
}

// Emits `Hawk key="value", ...` into a buffer sized up front; the final
// debug assertion keeps the size computation honest.
fn serialize_header(params: &[(&str, &str)]) -> String {
    let mut required = HAWK_SCHEME.len() + 1;
    for (key, value) in params {
        required += key.len() + value.len() + 3;
    }
    required += 2 * (params.len() - 1);

    let mut out = String::with_capacity(required);
    out.push_str(HAWK_SCHEME);
    out.push(' ');
    for (i, (key, value)) in params.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    debug_assert_eq!(out.len(), required);
    out
}
