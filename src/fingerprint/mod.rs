//! TLS and HTTP/2 fingerprint data, lookup, and profile construction.

pub mod database;
pub mod extensions;
pub mod http2;
pub mod matcher;
pub mod profiles;
pub mod range;
pub mod registry;
pub mod tls;

pub use extensions::{Anchor, PositionClass, RandomizationPolicy};
pub use http2::{Http2Settings, PriorityFrame, PseudoHeaderOrder};
pub use matcher::{lookup, RangeMatch};
pub use profiles::{ProfileBuilder, TlsProfile};
pub use range::{VersionRange, VersionRangeTable};
pub use registry::BrowserDefinition;
pub use tls::TlsFingerprint;
