//! Error types for browserprint crate.

use std::fmt;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Which fingerprint table a failed lookup was run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// TLS ClientHello fragment.
    Ja3,
    /// HTTP/2 SETTINGS/PRIORITY fragment.
    Akamai,
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ja3 => f.write_str("ja3"),
            Self::Akamai => f.write_str("akamai"),
        }
    }
}

/// Errors that can occur while resolving or building fingerprints.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Device class not recognized, or not supported for the browser.
    #[error("{0}")]
    UnknownDevice(String),

    /// Browser name not present in the registry.
    #[error("unsupported browser '{0}' provided")]
    UnknownBrowser(String),

    /// iOS requested without an OS major version.
    #[error("ios_version not supplied even though device requested was iOS")]
    MissingIosVersion,

    /// Supplied iOS version is not a plain major version.
    #[error(
        "ios_version should be a valid integer denoting only the major (use 13 for iOS 13.5): {0}"
    )]
    InvalidIosVersion(String),

    /// Unrecognized matching-strictness mode.
    #[error("unknown tolerance mode '{0}'")]
    InvalidToleranceMode(String),

    /// No exact or within-tolerance fragment exists.
    #[error("no matching {kind} string found in database for {context}")]
    NoMatchingFingerprint { kind: FragmentKind, context: String },

    /// User agent could not be classified.
    #[error("user agent parse error: {0}")]
    UserAgentParse(String),

    /// TLS or Akamai fragment does not follow its grammar.
    #[error("invalid {kind} fragment: {message}")]
    InvalidFragment { kind: FragmentKind, message: String },

    /// Version-range key does not follow the `N` / `N-M` grammar.
    #[error("invalid version range key '{0}'")]
    InvalidRangeKey(String),

    /// Extension name not known to the builder.
    #[error("unknown TLS extension name '{0}'")]
    UnknownExtension(String),

    /// Configuration could not be deserialized.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Create a no-match error.
    pub fn no_match(kind: FragmentKind, context: impl Into<String>) -> Self {
        Self::NoMatchingFingerprint {
            kind,
            context: context.into(),
        }
    }

    /// Create a user agent parse error.
    pub fn user_agent(message: impl Into<String>) -> Self {
        Self::UserAgentParse(message.into())
    }

    /// Create an invalid JA3 fragment error.
    pub fn invalid_ja3(message: impl Into<String>) -> Self {
        Self::InvalidFragment {
            kind: FragmentKind::Ja3,
            message: message.into(),
        }
    }

    /// Create an invalid Akamai fragment error.
    pub fn invalid_akamai(message: impl Into<String>) -> Self {
        Self::InvalidFragment {
            kind: FragmentKind::Akamai,
            message: message.into(),
        }
    }
}
