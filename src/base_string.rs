//! Canonical base strings fed to the HMAC.
//!
//! Lines are LF-separated, never CRLF. The host is rendered lowercased;
//! the method is used as supplied. Missing optional fields contribute an
//! empty line rather than being omitted.

use crate::context::RequestContext;
use crate::error::HawkError;

/// Hard cap on a base string, guarding against oversized-URL requests.
pub(crate) const MAX_BASE_STRING_SIZE: usize = 2048;

const HEADER_LEADER: &str = "hawk.1.header";
const RESPONSE_LEADER: &str = "hawk.1.response";
const TS_LEADER: &str = "hawk.1.ts";

/// Decimal width of `value`, counting a leading `-`.
pub(crate) fn decimal_len(value: i64) -> usize {
    let mut n = value.unsigned_abs();
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    if value < 0 {
        digits + 1
    } else {
        digits
    }
}

/// Base string authenticating a request, leader `hawk.1.header`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn request_base_string(
    request: &RequestContext<'_>,
    ts: i64,
    nonce: &str,
    hash: Option<&str>,
    ext: Option<&str>,
    app: Option<&str>,
    dlg: Option<&str>,
) -> Result<String, HawkError> {
    header_base_string(HEADER_LEADER, request, ts, nonce, hash, ext, app, dlg)
}

/// Base string authenticating a response, leader `hawk.1.response`. The
/// `ts`, `nonce`, `app` and `dlg` fields are those of the request being
/// answered.
#[allow(clippy::too_many_arguments)]
pub(crate) fn response_base_string(
    request: &RequestContext<'_>,
    ts: i64,
    nonce: &str,
    hash: Option<&str>,
    ext: Option<&str>,
    app: Option<&str>,
    dlg: Option<&str>,
) -> Result<String, HawkError> {
    header_base_string(RESPONSE_LEADER, request, ts, nonce, hash, ext, app, dlg)
}

/// Base string for the `WWW-Authenticate` timestamp MAC.
pub(crate) fn ts_base_string(ts: i64) -> String {
    let mut out = String::with_capacity(TS_LEADER.len() + 1 + decimal_len(ts) + 1);
    out.push_str(TS_LEADER);
    out.push('\n');
    out.push_str(&ts.to_string());
    out.push('\n');
    out
}

#[allow(clippy::too_many_arguments)]
fn header_base_string(
    leader: &str,
    request: &RequestContext<'_>,
    ts: i64,
    nonce: &str,
    hash: Option<&str>,
    ext: Option<&str>,
    app: Option<&str>,
    dlg: Option<&str>,
) -> Result<String, HawkError> {
    let hash = hash.unwrap_or("");
    let ext = ext.unwrap_or("");
    // An app parameter that parsed as the empty string does not add the
    // trailing app/dlg lines.
    let app = app.filter(|value| !value.is_empty());
    let dlg = dlg.unwrap_or("");

    let mut required = [
        leader.len(),
        decimal_len(ts),
        nonce.len(),
        request.method.len(),
        request.path.len(),
        request.host.len(),
        decimal_len(i64::from(request.port)),
        hash.len(),
        ext.len(),
    ]
    .iter()
    .try_fold(0usize, |total, len| {
        total.checked_add(len.checked_add(1)?)
    })
    .ok_or(HawkError::Overflow)?;
    if let Some(app) = app {
        required = required
            .checked_add(app.len() + 1)
            .and_then(|total| total.checked_add(dlg.len() + 1))
            .ok_or(HawkError::Overflow)?;
    }

    if required > MAX_BASE_STRING_SIZE {
        return Err(HawkError::BufferTooLarge {
            required,
            cap: MAX_BASE_STRING_SIZE,
        });
    }

    let mut out = String::with_capacity(required);
    out.push_str(leader);
    out.push('\n');
    out.push_str(&ts.to_string());
    out.push('\n');
    out.push_str(nonce);
    out.push('\n');
    out.push_str(request.method);
    out.push('\n');
    out.push_str(request.path);
    out.push('\n');
    for c in request.host.chars() {
        out.push(c.to_ascii_lowercase());
    }
    out.push('\n');
    out.push_str(&request.port.to_string());
    out.push('\n');
    out.push_str(hash);
    out.push('\n');
    out.push_str(ext);
    out.push('\n');
    if let Some(app) = app {
        out.push_str(app);
        out.push('\n');
        out.push_str(dlg);
        out.push('\n');
    }
    debug_assert_eq!(out.len(), required);
    Ok(out)
}
