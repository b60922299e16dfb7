//! # browserprint
//!
//! Resolves a browser identity (core, major version, device class, iOS
//! major) to the TLS (JA3) and HTTP/2 (Akamai) fingerprint that browser puts
//! on the wire, and builds TLS profiles with optionally randomized extension
//! order.
//!
//! ```rust
//! use browserprint::{resolve_by_user_agent, ProfileBuilder, ToleranceMode};
//!
//! let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
//!           (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
//! let descriptor = resolve_by_user_agent(ua, ToleranceMode::Reasonable)?;
//! let profile = ProfileBuilder::from_descriptor(&descriptor).build();
//! assert_eq!(profile.cipher_order(), descriptor.tls.ciphers.as_slice());
//! # Ok::<(), browserprint::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod identity;
pub mod resolver;
pub mod user_agent;

pub mod fingerprint;

// Re-exports
pub use config::ResolverConfig;
pub use error::{Error, FragmentKind, Result};
pub use fingerprint::{ProfileBuilder, RandomizationPolicy, TlsProfile};
pub use identity::{Browser, Device, Identity, ToleranceMode};
pub use resolver::{
    resolve_by_user_agent, resolve_by_version, FingerprintDescriptor, FingerprintResolver,
};
pub use user_agent::classify;
