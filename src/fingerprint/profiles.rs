//! Browser fingerprint profiles.
//!
//! [`ProfileBuilder`] turns a resolved descriptor, a JA3 string, or explicit
//! lists into a [`TlsProfile`]: the finalized hand-off to a TLS and HTTP/2
//! layer. Only the extension order is ever randomized; ciphers and groups
//! keep their canonical order.

use super::extensions::{extension_id, Anchor, RandomizationPolicy};
use super::http2::Http2Settings;
use super::registry;
use super::tls::{ja3_hash, TlsFingerprint};
use crate::error::{Error, Result};
use crate::identity::{Browser, Identity};
use crate::resolver::{FingerprintDescriptor, FingerprintResolver};

/// Builder for [`TlsProfile`].
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    tls: TlsFingerprint,
    http2: Option<Http2Settings>,
    identity: Option<Identity>,
    randomize_extensions: bool,
    anchors: Vec<Anchor>,
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self {
            tls: TlsFingerprint::default(),
            http2: None,
            identity: None,
            randomize_extensions: true,
            anchors: registry::STANDARD_ANCHORS.to_vec(),
        }
    }
}

impl ProfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a resolved descriptor, using its browser's anchors.
    pub fn from_descriptor(descriptor: &FingerprintDescriptor) -> Self {
        let browser = descriptor.identity.effective_browser();
        Self {
            tls: descriptor.tls.clone(),
            http2: Some(descriptor.http2.clone()),
            identity: Some(descriptor.identity),
            anchors: registry::definition(browser).anchors.to_vec(),
            ..Self::default()
        }
    }

    /// Start from a full JA3 string.
    pub fn from_ja3(ja3: &str) -> Result<Self> {
        Ok(Self {
            tls: TlsFingerprint::parse(ja3)?,
            ..Self::default()
        })
    }

    /// Version as `(major, minor)`; `(3, 4)` is TLS 1.3.
    pub fn tls_version(mut self, major: u8, minor: u8) -> Self {
        self.tls.record_version = u16::from_be_bytes([major, minor]);
        self
    }

    pub fn ciphers(mut self, ciphers: impl Into<Vec<u16>>) -> Self {
        self.tls.ciphers = ciphers.into();
        self
    }

    pub fn extensions(mut self, extensions: impl Into<Vec<u16>>) -> Self {
        self.tls.extensions = extensions.into();
        self
    }

    /// Set extensions by IANA name (`"server_name"`, `"key_share"`, ...).
    pub fn extension_names<I, S>(mut self, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tls.extensions = names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                extension_id(name).ok_or_else(|| Error::UnknownExtension(name.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    pub fn groups(mut self, groups: impl Into<Vec<u16>>) -> Self {
        self.tls.groups = groups.into();
        self
    }

    pub fn point_formats(mut self, formats: impl Into<Vec<u8>>) -> Self {
        self.tls.point_formats = formats.into();
        self
    }

    pub fn http2(mut self, settings: Http2Settings) -> Self {
        self.http2 = Some(settings);
        self
    }

    /// Randomize extension order (default `true`).
    pub fn randomize_extensions(mut self, enabled: bool) -> Self {
        self.randomize_extensions = enabled;
        self
    }

    /// Replace the position anchors used when randomizing.
    pub fn anchors(mut self, anchors: impl Into<Vec<Anchor>>) -> Self {
        self.anchors = anchors.into();
        self
    }

    pub fn policy(&self) -> RandomizationPolicy {
        RandomizationPolicy {
            enabled: self.randomize_extensions,
            anchors: self.anchors.clone(),
        }
    }

    /// Finalize, drawing a fresh extension order.
    pub fn build(self) -> TlsProfile {
        let policy = self.policy();
        let extension_order = policy.order(&self.tls.extensions);
        TlsProfile {
            canonical: self.tls,
            extension_order,
            http2: self.http2,
            identity: self.identity,
            policy,
        }
    }
}

/// Finalized profile handed to the TLS / HTTP/2 layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsProfile {
    canonical: TlsFingerprint,
    extension_order: Vec<u16>,
    http2: Option<Http2Settings>,
    identity: Option<Identity>,
    policy: RandomizationPolicy,
}

impl TlsProfile {
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder::new()
    }

    /// Profile from a JA3 string.
    pub fn from_ja3(ja3: &str, randomize_extensions: bool) -> Result<Self> {
        Ok(ProfileBuilder::from_ja3(ja3)?
            .randomize_extensions(randomize_extensions)
            .build())
    }

    /// Desktop profile for a browser version, randomized, tolerant lookup.
    pub fn from_version(browser: Browser, version: u32) -> Result<Self> {
        let resolver = FingerprintResolver::default();
        let descriptor = resolver.resolve_desktop(browser, version)?;
        Ok(resolver.profile(&descriptor))
    }

    pub fn record_version(&self) -> u16 {
        self.canonical.record_version
    }

    /// Extension ids in the order they go on the wire.
    pub fn extension_order(&self) -> &[u16] {
        &self.extension_order
    }

    /// Extension ids in canonical (database) order.
    pub fn canonical_extensions(&self) -> &[u16] {
        &self.canonical.extensions
    }

    pub fn cipher_order(&self) -> &[u16] {
        &self.canonical.ciphers
    }

    pub fn groups(&self) -> &[u16] {
        &self.canonical.groups
    }

    pub fn point_formats(&self) -> &[u8] {
        &self.canonical.point_formats
    }

    pub fn http2(&self) -> Option<&Http2Settings> {
        self.http2.as_ref()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn policy(&self) -> &RandomizationPolicy {
        &self.policy
    }

    pub fn is_randomized(&self) -> bool {
        self.policy.enabled
    }

    /// TLS fingerprint as it will appear on the wire.
    pub fn wire_fingerprint(&self) -> TlsFingerprint {
        TlsFingerprint {
            extensions: self.extension_order.clone(),
            ..self.canonical.clone()
        }
    }

    /// JA3 over the wire order. Differs from the canonical JA3 when randomized.
    pub fn ja3_string(&self) -> String {
        self.wire_fingerprint().ja3_string()
    }

    pub fn ja3_hash(&self) -> String {
        ja3_hash(&self.ja3_string())
    }

    /// JA3 over the canonical order.
    pub fn canonical_ja3_string(&self) -> String {
        self.canonical.ja3_string()
    }

    pub fn canonical_ja3_hash(&self) -> String {
        self.canonical.ja3_hash()
    }

    /// Cipher names for the TLS layer.
    pub fn cipher_names(&self) -> Vec<&'static str> {
        self.canonical.cipher_names()
    }

    /// Curve names for the TLS layer.
    pub fn group_names(&self) -> Vec<&'static str> {
        self.canonical.group_names()
    }
}
