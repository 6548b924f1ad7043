//! Error types shared across the crate.

use thiserror::Error;

/// Everything that can go wrong while parsing, signing or validating a
/// Hawk header.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum HawkError {
    /// Malformed header syntax, or a required parameter was absent.
    #[error("malformed authentication header: {0}")]
    Parse(&'static str),

    /// The header carried a scheme other than `Hawk`.
    #[error("unsupported authentication scheme")]
    BadScheme,

    /// Reserved for higher-level token validators built on this crate.
    #[error("token validation failed")]
    TokenValidation,

    /// Algorithm name lookup missed. Names are matched case-sensitively.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// An HMAC or RNG primitive failed.
    #[error("cryptographic operation failed")]
    Crypto,

    /// The `ts` parameter was not a valid signed decimal integer.
    #[error("timestamp is not a valid signed decimal")]
    TimeValue,

    /// A base string would exceed the hard size cap.
    #[error("required buffer of {required} bytes exceeds the {cap} byte cap")]
    BufferTooLarge { required: usize, cap: usize },

    /// Malformed base64 input.
    #[error("malformed base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Integer overflow during parsing or size computation.
    #[error("integer overflow")]
    Overflow,

    /// Unclassified failure.
    #[error("{0}")]
    Generic(String),
}

impl HawkError {
    /// Stable label for wiring errors into a metrics pipeline.
    pub fn metric_label(&self) -> &'static str {
        match self {
            Self::Parse(_) => "hawk.error.parse",
            Self::BadScheme => "hawk.error.bad_scheme",
            Self::TokenValidation => "hawk.error.token_validation",
            Self::UnknownAlgorithm(_) => "hawk.error.unknown_algorithm",
            Self::Crypto => "hawk.error.crypto",
            Self::TimeValue => "hawk.error.time_value",
            Self::BufferTooLarge { .. } => "hawk.error.buffer_too_large",
            Self::Base64(_) => "hawk.error.base64",
            Self::Overflow => "hawk.error.overflow",
            Self::Generic(_) => "hawk.error.generic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            HawkError::Parse("missing id parameter").to_string(),
            "malformed authentication header: missing id parameter"
        );
        assert_eq!(
            HawkError::BufferTooLarge {
                required: 3000,
                cap: 2048
            }
            .to_string(),
            "required buffer of 3000 bytes exceeds the 2048 byte cap"
        );
    }

    #[test]
    fn metric_labels_are_distinct() {
        let labels = [
            HawkError::Parse("x").metric_label(),
            HawkError::BadScheme.metric_label(),
            HawkError::UnknownAlgorithm("md5".to_owned()).metric_label(),
            HawkError::Crypto.metric_label(),
            HawkError::TimeValue.metric_label(),
            HawkError::Overflow.metric_label(),
        ];
        for (i, a) in labels.iter().enumerate() {
            for b in &labels[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
