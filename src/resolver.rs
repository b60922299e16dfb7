//! Fingerprint resolution.
//!
//! Turns an explicit `(browser, version, device, ios_major)` request, or a raw
//! user agent, into a [`FingerprintDescriptor`]. On iOS the TLS and HTTP/2
//! lookups always use WebKit data keyed by the iOS major, whatever browser
//! was asked for; the tolerance stays that browser's own.

use crate::config::ResolverConfig;
use crate::error::{Error, FragmentKind, Result};
use crate::fingerprint::http2::Http2Settings;
use crate::fingerprint::matcher::{self, RangeMatch};
use crate::fingerprint::profiles::{ProfileBuilder, TlsProfile};
use crate::fingerprint::range::VersionRangeTable;
use crate::fingerprint::registry::{self, BrowserDefinition};
use crate::fingerprint::tls::TlsFingerprint;
use crate::identity::{
    check_ios_major, parse_ios_major, Browser, Device, Identity, ToleranceMode,
};
use crate::user_agent;

/// Resolved fingerprint for one identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintDescriptor {
    pub identity: Identity,
    /// Raw TLS fragment (JA3 string).
    pub ja3: &'static str,
    /// Raw HTTP/2 fragment (Akamai string).
    pub akamai: &'static str,
    pub tls: TlsFingerprint,
    pub http2: Http2Settings,
    /// Distance from the requested version to the TLS range; 0 when exact.
    pub tls_distance: u32,
    /// Distance from the requested version to the HTTP/2 range; 0 when exact.
    pub http2_distance: u32,
}

impl FingerprintDescriptor {
    /// Both fragments came from ranges containing the requested version.
    pub fn is_exact(&self) -> bool {
        self.tls_distance == 0 && self.http2_distance == 0
    }
}

/// Resolves identities against the bundled registry.
#[derive(Debug, Clone, Default)]
pub struct FingerprintResolver {
    config: ResolverConfig,
}

impl FingerprintResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve an explicit request.
    pub fn resolve_by_version(
        &self,
        browser: Browser,
        version: u32,
        device: Device,
        ios_major: Option<u32>,
        mode: ToleranceMode,
    ) -> Result<FingerprintDescriptor> {
        let identity = Identity::new(device, browser, version, ios_major)?;
        self.resolve(identity, mode)
    }

    /// Resolve a request given as strings, validating each field.
    ///
    /// Checks run in order: mode, browser, device, iOS major. Nothing is
    /// looked up until all of them pass.
    pub fn resolve_by_names(
        &self,
        browser: &str,
        version: u32,
        device: &str,
        ios_major: Option<&str>,
        mode: &str,
    ) -> Result<FingerprintDescriptor> {
        let mode: ToleranceMode = mode.parse()?;
        let browser: Browser = browser.parse()?;
        let device: Device = device.parse()?;
        let ios_major = ios_major.map(parse_ios_major).transpose()?;
        self.resolve_by_version(browser, version, device, ios_major, mode)
    }

    /// Classify a user agent, then resolve it.
    pub fn resolve_by_user_agent(
        &self,
        user_agent: &str,
        mode: ToleranceMode,
    ) -> Result<FingerprintDescriptor> {
        let identity = user_agent::classify(user_agent)?;
        self.resolve(identity, mode)
    }

    /// Desktop request using the configured mode.
    pub fn resolve_desktop(
        &self,
        browser: Browser,
        version: u32,
    ) -> Result<FingerprintDescriptor> {
        self.resolve_by_version(
            browser,
            version,
            Device::Desktop,
            None,
            self.config.tolerance_mode,
        )
    }

    /// Build a profile from a descriptor, honoring the configured
    /// extension randomization.
    pub fn profile(&self, descriptor: &FingerprintDescriptor) -> TlsProfile {
        ProfileBuilder::from_descriptor(descriptor)
            .randomize_extensions(self.config.randomize_extensions)
            .build()
    }

    /// Resolve a validated identity.
    ///
    /// `Identity` fields are public, so the iOS-major invariant is checked
    /// again here before any table is scanned.
    pub fn resolve(
        &self,
        identity: Identity,
        mode: ToleranceMode,
    ) -> Result<FingerprintDescriptor> {
        check_ios_major(identity.device, identity.ios_major)?;
        // Unsupported devices fail before any table is scanned.
        registry::definition(identity.browser).http2_table(identity.device)?;

        let tls = self.ja3_match(
            identity.browser,
            identity.version,
            identity.ios_major,
            mode,
        )?;
        let http2 = self.akamai_match(
            identity.browser,
            identity.version,
            identity.device,
            identity.ios_major,
            mode,
        )?;

        let descriptor = FingerprintDescriptor {
            identity,
            ja3: tls.fragment,
            akamai: http2.fragment,
            tls: TlsFingerprint::parse(tls.fragment)?,
            http2: Http2Settings::parse(http2.fragment)?,
            tls_distance: tls.distance,
            http2_distance: http2.distance,
        };
        tracing::debug!(
            %identity,
            exact = descriptor.is_exact(),
            "resolved fingerprint"
        );
        Ok(descriptor)
    }

    /// TLS fragment for a browser version.
    ///
    /// The TLS table is device independent; an `ios_major` switches to the
    /// WebKit table keyed by it.
    pub fn ja3_for_version(
        &self,
        browser: Browser,
        version: u32,
        ios_major: Option<u32>,
        mode: ToleranceMode,
    ) -> Result<&'static str> {
        if ios_major.is_some() {
            check_ios_major(Device::Ios, ios_major)?;
        }
        Ok(self.ja3_match(browser, version, ios_major, mode)?.fragment)
    }

    /// HTTP/2 fragment for a browser version on a device.
    pub fn akamai_for_version(
        &self,
        browser: Browser,
        version: u32,
        device: Device,
        ios_major: Option<u32>,
        mode: ToleranceMode,
    ) -> Result<&'static str> {
        let ios_major = check_ios_major(device, ios_major)?;
        Ok(self
            .akamai_match(browser, version, device, ios_major, mode)?
            .fragment)
    }

    fn ja3_match(
        &self,
        browser: Browser,
        version: u32,
        ios_major: Option<u32>,
        mode: ToleranceMode,
    ) -> Result<RangeMatch<'static>> {
        let def = registry::definition(browser);
        // iOS swaps in the WebKit table but keeps the requested browser's tolerance.
        let (table, lookup_version) = match ios_major {
            Some(ios) => (registry::definition(Browser::Safari).tls, ios),
            None => (def.tls, version),
        };

        self.find(lookup_version, table, def, mode)
            .ok_or_else(|| {
                let context = match ios_major {
                    Some(ios) => format!("{} on iOS version {}", def.name, ios),
                    None if def.chromium => {
                        format!("{} based on chromium version {}", def.name, version)
                    }
                    None => format!("{} version {}", def.name, version),
                };
                no_match(FragmentKind::Ja3, context)
            })
    }

    fn akamai_match(
        &self,
        browser: Browser,
        version: u32,
        device: Device,
        ios_major: Option<u32>,
        mode: ToleranceMode,
    ) -> Result<RangeMatch<'static>> {
        let def = registry::definition(browser);
        let table = def.http2_table(device)?;
        let lookup_version = match (device, ios_major) {
            (Device::Ios, Some(ios)) => ios,
            _ => version,
        };

        self.find(lookup_version, table, def, mode)
            .ok_or_else(|| {
                let context = match (device, ios_major) {
                    (Device::Ios, Some(ios)) => format!("{} on iOS version {}", def.name, ios),
                    _ if def.chromium => format!(
                        "{} {} based on chromium version {}",
                        device, def.name, version
                    ),
                    _ => format!("{} {} version {}", device, def.name, version),
                };
                no_match(FragmentKind::Akamai, context)
            })
    }

    fn find(
        &self,
        version: u32,
        table: &'static VersionRangeTable,
        def: &BrowserDefinition,
        mode: ToleranceMode,
    ) -> Option<RangeMatch<'static>> {
        let tolerance = self.config.tolerance_override.unwrap_or(def.tolerance);
        matcher::lookup(version, table, tolerance, mode)
    }
}

fn no_match(kind: FragmentKind, context: String) -> Error {
    tracing::warn!(%kind, %context, "no matching fingerprint");
    Error::no_match(kind, context)
}

/// Resolve with the default resolver.
pub fn resolve_by_version(
    browser: Browser,
    version: u32,
    device: Device,
    ios_major: Option<u32>,
    mode: ToleranceMode,
) -> Result<FingerprintDescriptor> {
    FingerprintResolver::default().resolve_by_version(browser, version, device, ios_major, mode)
}

/// Classify and resolve with the default resolver.
pub fn resolve_by_user_agent(
    user_agent: &str,
    mode: ToleranceMode,
) -> Result<FingerprintDescriptor> {
    FingerprintResolver::default().resolve_by_user_agent(user_agent, mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ios_overrides_browser_tls() {
        let resolver = FingerprintResolver::default();
        let chrome_ios = resolver
            .ja3_for_version(Browser::Chrome, 120, Some(17), ToleranceMode::Strict)
            .unwrap();
        let safari_17 = resolver
            .ja3_for_version(Browser::Safari, 17, None, ToleranceMode::Strict)
            .unwrap();
        assert_eq!(chrome_ios, safari_17);
    }

    #[test]
    fn test_error_context_wording() {
        let resolver = FingerprintResolver::default();
        let err = resolver
            .ja3_for_version(Browser::Chrome, 20, None, ToleranceMode::Reasonable)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "no matching ja3 string found in database for Chrome based on chromium version 20"
        );

        let err = resolver
            .akamai_for_version(
                Browser::Firefox,
                20,
                Device::Android,
                None,
                ToleranceMode::Reasonable,
            )
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "no matching akamai string found in database for android Firefox version 20"
        );

        let err = resolver
            .akamai_for_version(
                Browser::Chrome,
                120,
                Device::Ios,
                Some(2),
                ToleranceMode::Reasonable,
            )
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "no matching akamai string found in database for Chrome on iOS version 2"
        );
    }

    #[test]
    fn test_tolerance_override() {
        let config = ResolverConfig::default().with_tolerance_override(0);
        let resolver = FingerprintResolver::new(config);
        assert!(resolver
            .ja3_for_version(Browser::Chrome, 72, None, ToleranceMode::Reasonable)
            .is_err());
        assert!(resolver
            .ja3_for_version(Browser::Chrome, 73, None, ToleranceMode::Reasonable)
            .is_ok());
    }
}
