//! Browser registry.
//!
//! One static [`BrowserDefinition`] per browser core. Device classes without
//! an HTTP/2 table are explicit `None` entries and reject with
//! [`Error::UnknownDevice`].

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

use super::database::*;
use super::extensions::{Anchor, PositionClass};
use super::range::VersionRangeTable;
use crate::error::{Error, Result};
use crate::identity::{Browser, Device};

/// Default tolerance for browsers whose fingerprints change rarely.
pub const DEFAULT_TOLERANCE: u32 = 10;

/// Safari changes fingerprint with nearly every major.
pub const SAFARI_TOLERANCE: u32 = 1;

/// `padding` then `pre_shared_key` stay last; RFC 8446 requires PSK last.
pub const STANDARD_ANCHORS: &[Anchor] = &[
    Anchor::new(21, PositionClass::Tail),
    Anchor::new(41, PositionClass::Tail),
];

/// HTTP/2 tables per device class.
#[derive(Debug)]
pub struct DeviceTables {
    pub desktop: Option<&'static VersionRangeTable>,
    pub android: Option<&'static VersionRangeTable>,
    pub ios: Option<&'static VersionRangeTable>,
}

impl DeviceTables {
    pub fn get(&self, device: Device) -> Option<&'static VersionRangeTable> {
        match device {
            Device::Desktop => self.desktop,
            Device::Android => self.android,
            Device::Ios => self.ios,
        }
    }
}

/// Static per-core fingerprint data.
#[derive(Debug)]
pub struct BrowserDefinition {
    pub browser: Browser,
    /// Display name used in error messages.
    pub name: &'static str,
    /// Chromium-derived; changes the wording of lookup errors.
    pub chromium: bool,
    /// Extracts the major version from a user agent.
    pub version_pattern: &'static str,
    pub tls: &'static VersionRangeTable,
    pub http2: DeviceTables,
    pub tolerance: u32,
    pub anchors: &'static [Anchor],
    version_regex: OnceLock<Regex>,
}

impl BrowserDefinition {
    /// HTTP/2 table for a device class.
    pub fn http2_table(&self, device: Device) -> Result<&'static VersionRangeTable> {
        self.http2.get(device).ok_or_else(|| {
            Error::UnknownDevice(format!(
                "unsupported device \"{}\" provided for browser \"{}\"",
                device, self.name
            ))
        })
    }

    /// Extract this core's major version from a user agent.
    pub fn version_from_user_agent(&self, user_agent: &str) -> Result<u32> {
        let regex = self.version_regex.get_or_init(|| {
            RegexBuilder::new(self.version_pattern)
                .case_insensitive(true)
                .build()
                .expect("bundled version pattern is valid")
        });

        regex
            .captures(user_agent)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .ok_or_else(|| {
                Error::user_agent(format!(
                    "cannot parse {} version from user agent (expected {})",
                    self.name, self.version_pattern
                ))
            })
    }
}

static CHROME: BrowserDefinition = BrowserDefinition {
    browser: Browser::Chrome,
    name: "Chrome",
    chromium: true,
    version_pattern: r"(?:Chrome|CriOS|EdgiOS|Edg|Chromium)/(\d+)",
    tls: &CHROME_TLS,
    http2: DeviceTables {
        desktop: Some(&CHROMIUM_DESKTOP_H2),
        android: Some(&CHROMIUM_ANDROID_H2),
        ios: Some(&SAFARI_MOBILE_H2),
    },
    tolerance: DEFAULT_TOLERANCE,
    anchors: STANDARD_ANCHORS,
    version_regex: OnceLock::new(),
};

static FIREFOX: BrowserDefinition = BrowserDefinition {
    browser: Browser::Firefox,
    name: "Firefox",
    chromium: false,
    version_pattern: r"Firefox/(\d+)",
    tls: &FIREFOX_TLS,
    http2: DeviceTables {
        desktop: Some(&FIREFOX_DESKTOP_H2),
        android: Some(&FIREFOX_ANDROID_H2),
        ios: Some(&SAFARI_MOBILE_H2),
    },
    tolerance: DEFAULT_TOLERANCE,
    anchors: STANDARD_ANCHORS,
    version_regex: OnceLock::new(),
};

static SAFARI: BrowserDefinition = BrowserDefinition {
    browser: Browser::Safari,
    name: "Safari",
    chromium: false,
    version_pattern: r"Version/(\d+)",
    tls: &SAFARI_TLS,
    http2: DeviceTables {
        desktop: Some(&SAFARI_DESKTOP_H2),
        android: Some(&SAFARI_MOBILE_H2),
        ios: Some(&SAFARI_MOBILE_H2),
    },
    tolerance: SAFARI_TOLERANCE,
    anchors: STANDARD_ANCHORS,
    version_regex: OnceLock::new(),
};

/// Definition for a browser core.
pub fn definition(browser: Browser) -> &'static BrowserDefinition {
    match browser {
        Browser::Chrome => &CHROME,
        Browser::Firefox => &FIREFOX,
        Browser::Safari => &SAFARI,
    }
}

/// Definition by name (`"chrome"`, `"firefox"`, `"safari"`).
pub fn lookup_name(name: &str) -> Result<&'static BrowserDefinition> {
    Ok(definition(name.parse()?))
}
