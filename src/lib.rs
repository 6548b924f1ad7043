//! Hawk HTTP authentication: MAC-based signing and validation of HTTP
//! requests and responses using a shared secret.
//!
//! Clients use a [`Context`] to generate `Authorization` request headers
//! and to validate `Server-Authorization` response headers and
//! `WWW-Authenticate` timestamp challenges; servers use the same context
//! to validate incoming `Authorization` headers and to issue signed
//! challenges. Parsing is zero-copy: field structs borrow from the header
//! buffer for as long as it is alive.
//!
//! ```
//! use hawkauth::{algorithm_by_name, parse_authorization, Context, Credentials, RequestContext};
//!
//! let credentials = Credentials {
//!     key: b"werxhqb98rpaxn39848xrunpaw3489ruxnpa98w4rxn",
//!     algorithm: algorithm_by_name("sha256").unwrap(),
//! };
//! let request = RequestContext {
//!     method: "GET",
//!     path: "/resource/1?b=1&a=2",
//!     host: "example.com",
//!     port: 8000,
//! };
//! let context = Context::new(credentials, request);
//!
//! // Client side: sign the request.
//! let header = context
//!     .authorization_header("dh37fgj492je", None, Some("some-app-ext-data"), None, None)
//!     .unwrap();
//!
//! // Server side: parse and validate it.
//! let fields = parse_authorization(&header).unwrap();
//! assert!(context.validate_authorization(&fields).unwrap());
//! ```

pub mod b64;

mod algorithm;
mod base_string;
mod context;
mod crypto;
mod error;
mod header;
mod parser;

pub use algorithm::{algorithm_by_name, Algorithm, SHA1, SHA256};
pub use context::{Context, Credentials, RequestContext};
pub use crypto::{fixed_time_eq, generate_nonce, sign, Crypto, CryptoImpl, NONCE_BYTES};
pub use error::HawkError;
pub use header::{
    parse_authorization, parse_server_authorization, parse_www_authenticate,
    AuthorizationFields, ServerAuthorizationFields, WwwAuthenticateFields, HAWK_SCHEME,
};
pub use parser::{parse_header_value, unescape_value};
