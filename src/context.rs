//! Signing contexts binding credentials to the request being
//! authenticated.

use chrono::offset::Utc;
use log::debug;

use crate::algorithm::Algorithm;
use crate::base_string;
use crate::crypto;
use crate::error::HawkError;
use crate::header::{
    self, AuthorizationFields, ServerAuthorizationFields, WwwAuthenticateFields,
};

/// A Hawk shared secret and the algorithm it signs with.
#[derive(Clone, Copy, Debug)]
pub struct Credentials<'a> {
    pub key: &'a [u8],
    pub algorithm: &'static Algorithm,
}

/// The request metadata entering the base string.
#[derive(Clone, Copy, Debug)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub host: &'a str,
    pub port: u16,
}

/// Per-exchange working set: credentials, request metadata and the
/// client-side clock offset in seconds.
#[derive(Clone, Copy, Debug)]
pub struct Context<'a> {
    pub credentials: Credentials<'a>,
    pub request: RequestContext<'a>,
    pub offset: i64,
}

impl<'a> Context<'a> {
    pub fn new(credentials: Credentials<'a>, request: RequestContext<'a>) -> Self {
        Context {
            credentials,
            request,
            offset: 0,
        }
    }

    /// Check a parsed `Authorization` header against this context.
    /// `Ok(false)` means the MAC did not match; errors are reserved for
    /// internal crypto or size-cap failures.
    pub fn validate_authorization(
        &self,
        fields: &AuthorizationFields<'_>,
    ) -> Result<bool, HawkError> {
        let base = base_string::request_base_string(
            &self.request,
            fields.ts,
            fields.nonce,
            fields.hash,
            fields.ext,
            fields.app,
            fields.dlg,
        )?;
        let mac = crypto::sign(self.credentials.algorithm, self.credentials.key, &base)?;
        let valid = crypto::fixed_time_eq(mac.as_bytes(), fields.mac.as_bytes());
        if !valid {
            debug!("authorization MAC mismatch for id={}", fields.id);
        }
        Ok(valid)
    }

    /// Build an `Authorization` header for this request, stamping the
    /// current wall clock plus the context offset and a fresh random
    /// nonce.
    ///
    /// Values are emitted verbatim inside their quotes; the caller must
    /// not pass `ext`, `app` or `dlg` values containing `"` or `\`.
    pub fn authorization_header(
        &self,
        id: &str,
        hash: Option<&str>,
        ext: Option<&str>,
        app: Option<&str>,
        dlg: Option<&str>,
    ) -> Result<String, HawkError> {
        let ts = Utc::now().timestamp() + self.offset;
        let nonce = crypto::generate_nonce()?;
        self.authorization_header_at(ts, &nonce, id, hash, ext, app, dlg)
    }

    /// [`authorization_header`](Self::authorization_header) with an
    /// explicit timestamp and nonce.
    #[allow(clippy::too_many_arguments)]
    pub fn authorization_header_at(
        &self,
        ts: i64,
        nonce: &str,
        id: &str,
        hash: Option<&str>,
        ext: Option<&str>,
        app: Option<&str>,
        dlg: Option<&str>,
    ) -> Result<String, HawkError> {
        let base =
            base_string::request_base_string(&self.request, ts, nonce, hash, ext, app, dlg)?;
        let mac = crypto::sign(self.credentials.algorithm, self.credentials.key, &base)?;
        Ok(header::authorization_header(
            id, ts, nonce, &mac, hash, ext, app, dlg,
        ))
    }

    /// Build a `Server-Authorization` header answering the given
    /// authenticated request. The response MAC binds the request's
    /// timestamp and nonce; `hash` and `ext` describe the response
    /// payload.
    pub fn server_authorization_header(
        &self,
        request_fields: &AuthorizationFields<'_>,
        hash: Option<&str>,
        ext: Option<&str>,
    ) -> Result<String, HawkError> {
        let base = base_string::response_base_string(
            &self.request,
            request_fields.ts,
            request_fields.nonce,
            hash,
            ext,
            request_fields.app,
            request_fields.dlg,
        )?;
        let mac = crypto::sign(self.credentials.algorithm, self.credentials.key, &base)?;
        Ok(header::server_authorization_header(&mac, hash, ext))
    }

    /// Check a parsed `Server-Authorization` header against the request
    /// it answers.
    pub fn validate_server_authorization(
        &self,
        request_fields: &AuthorizationFields<'_>,
        response: &ServerAuthorizationFields<'_>,
    ) -> Result<bool, HawkError> {
        let base = base_string::response_base_string(
            &self.request,
            request_fields.ts,
            request_fields.nonce,
            response.hash,
            response.ext,
            request_fields.app,
            request_fields.dlg,
        )?;
        let mac = crypto::sign(self.credentials.algorithm, self.credentials.key, &base)?;
        let valid = crypto::fixed_time_eq(mac.as_bytes(), response.mac.as_bytes());
        if !valid {
            debug!("server authorization MAC mismatch");
        }
        Ok(valid)
    }

    /// Build a `WWW-Authenticate` challenge carrying the server's
    /// timestamp and its MAC.
    pub fn www_authenticate_header(&self, ts: i64) -> Result<String, HawkError> {
        let base = base_string::ts_base_string(ts);
        let tsm = crypto::sign(self.credentials.algorithm, self.credentials.key, &base)?;
        Ok(header::www_authenticate_header(ts, &tsm))
    }

    /// Check a parsed `WWW-Authenticate` challenge, letting a client
    /// trust the server timestamp it carries.
    pub fn validate_www_authenticate(
        &self,
        fields: &WwwAuthenticateFields<'_>,
    ) -> Result<bool, HawkError> {
        let base = base_string::ts_base_string(fields.ts);
        let tsm = crypto::sign(self.credentials.algorithm, self.credentials.key, &base)?;
        Ok(crypto::fixed_time_eq(
            tsm.as_bytes(),
            fields.tsm.as_bytes(),
        ))
    }
}
