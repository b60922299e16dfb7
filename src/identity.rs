//! Browser identity: device class, browser core, version, iOS major.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Device class a fingerprint was captured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Device {
    #[default]
    Desktop,
    Android,
    Ios,
}

impl Device {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Android => "android",
            Self::Ios => "ios",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Device {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "android" => Ok(Self::Android),
            "ios" => Ok(Self::Ios),
            _ => Err(Error::UnknownDevice(format!(
                "unknown device identifier str '{}'",
                s
            ))),
        }
    }
}

/// Browser core with a bundled fingerprint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Browser {
    Chrome,
    Firefox,
    Safari,
}

impl Browser {
    pub const ALL: [Browser; 3] = [Browser::Chrome, Browser::Firefox, Browser::Safari];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::Firefox => "firefox",
            Self::Safari => "safari",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Browser {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "chrome" => Ok(Self::Chrome),
            "firefox" => Ok(Self::Firefox),
            "safari" => Ok(Self::Safari),
            _ => Err(Error::UnknownBrowser(s.to_string())),
        }
    }
}

/// How far a lookup may stray from the requested version.
///
/// Deserializes through [`FromStr`], so config files accept any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ToleranceMode {
    /// Exact range hits only.
    Strict,
    /// Exact hit, else the nearest range within the browser's tolerance.
    #[default]
    Reasonable,
}

impl ToleranceMode {
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl FromStr for ToleranceMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "reasonable" => Ok(Self::Reasonable),
            _ => Err(Error::InvalidToleranceMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for ToleranceMode {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Resolved identity tuple.
///
/// `ios_major` is present iff `device` is [`Device::Ios`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity {
    pub device: Device,
    pub browser: Browser,
    pub version: u32,
    pub ios_major: Option<u32>,
}

impl Identity {
    /// Build an identity, enforcing the iOS-major invariant.
    pub fn new(
        device: Device,
        browser: Browser,
        version: u32,
        ios_major: Option<u32>,
    ) -> Result<Self> {
        let ios_major = check_ios_major(device, ios_major)?;
        Ok(Self {
            device,
            browser,
            version,
            ios_major,
        })
    }

    /// Browser core whose TLS stack is actually on the wire.
    ///
    /// Every browser on iOS ships Apple's WebKit networking.
    pub fn effective_browser(&self) -> Browser {
        match self.device {
            Device::Ios => Browser::Safari,
            _ => self.browser,
        }
    }

    /// Version used to index the fingerprint tables.
    pub fn lookup_version(&self) -> u32 {
        self.ios_major.unwrap_or(self.version)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ios_major {
            Some(ios) => write!(f, "{} {} on iOS {}", self.browser, self.version, ios),
            None => write!(f, "{} {} {}", self.device, self.browser, self.version),
        }
    }
}

/// Validate the iOS major against the device class.
pub(crate) fn check_ios_major(device: Device, ios_major: Option<u32>) -> Result<Option<u32>> {
    match (device, ios_major) {
        (Device::Ios, None) | (Device::Ios, Some(0)) => Err(Error::MissingIosVersion),
        (Device::Ios, Some(major)) => Ok(Some(major)),
        (_, None) => Ok(None),
        (other, Some(major)) => Err(Error::InvalidIosVersion(format!(
            "{} supplied for non-iOS device '{}'",
            major, other
        ))),
    }
}

/// Parse a caller-supplied iOS version that must be a bare major (`"17"`).
///
/// Dotted versions such as `"17.4"` are rejected rather than truncated.
pub fn parse_ios_major(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingIosVersion);
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| Error::InvalidIosVersion(raw.to_string()))
}
