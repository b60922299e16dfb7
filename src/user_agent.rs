//! User-agent classification.
//!
//! Recovers `(device, browser core, version, iOS major)` from a raw
//! user-agent string. Detection is two-stage and never backtracks: the device
//! is fixed first, then the browser core is picked in a fixed precedence.
//!
//! Precedence matters. Chromium user agents also say "Safari", and Firefox on
//! iOS says both "FxiOS" and WebKit things, so Firefox is checked before
//! Chromium and both before the Safari fallback.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};
use crate::fingerprint::registry;
use crate::identity::{Browser, Device, Identity};

/// Classify a user agent.
pub fn classify(user_agent: &str) -> Result<Identity> {
    let lower = user_agent.to_ascii_lowercase();

    let (device, ios_major) = detect_device(user_agent, &lower)?;
    let (browser, version) = detect_browser(user_agent, &lower, device, ios_major)?;

    let version = version
        .filter(|&v| v != 0)
        .ok_or_else(|| Error::user_agent("cannot parse browser version from user agent"))?;

    let identity = Identity::new(device, browser, version, ios_major)?;
    tracing::debug!(%identity, "classified user agent");
    Ok(identity)
}

fn detect_device(user_agent: &str, lower: &str) -> Result<(Device, Option<u32>)> {
    let apple = lower.contains("iphone") || lower.contains("ipad");

    if lower.contains("android") {
        Ok((Device::Android, None))
    } else if apple {
        Ok((Device::Ios, Some(ios_major(user_agent)?)))
    } else if lower.contains("mobile") {
        // Unidentified mobile is treated as Android.
        Ok((Device::Android, None))
    } else {
        Ok((Device::Desktop, None))
    }
}

fn detect_browser(
    user_agent: &str,
    lower: &str,
    device: Device,
    ios_major: Option<u32>,
) -> Result<(Browser, Option<u32>)> {
    let is_firefox = lower.contains("firefox") || lower.contains("fxios");
    let is_chromium = ["chrome", "crios", "edg", "chromium"]
        .iter()
        .any(|token| lower.contains(token));
    let is_safari = device == Device::Ios
        || (lower.contains("safari") && !lower.contains("chrome") && !lower.contains("crios"));

    if is_firefox || is_chromium {
        if device == Device::Ios {
            return Ok((Browser::Safari, ios_major));
        }
        let browser = if is_firefox {
            Browser::Firefox
        } else {
            Browser::Chrome
        };
        let version = registry::definition(browser).version_from_user_agent(user_agent)?;
        return Ok((browser, Some(version)));
    }

    if is_safari {
        let safari = registry::definition(Browser::Safari);
        let version = match safari.version_from_user_agent(user_agent) {
            Ok(version) => Some(version),
            // Apps embedding WebKit (e.g. the Google app) omit Version/.
            Err(_) if device == Device::Ios => ios_major,
            Err(err) => return Err(err),
        };
        return Ok((Browser::Safari, version));
    }

    Err(Error::user_agent(format!(
        "cannot detect browser core from user agent: {}",
        user_agent
    )))
}

fn ios_major(user_agent: &str) -> Result<u32> {
    static IOS_VERSION: OnceLock<Regex> = OnceLock::new();
    let regex = IOS_VERSION.get_or_init(|| {
        RegexBuilder::new(r"OS (\d+)")
            .case_insensitive(true)
            .build()
            .expect("iOS version pattern is valid")
    });

    regex
        .captures(user_agent)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .ok_or_else(|| {
            Error::user_agent("cannot parse iOS version from user agent (expected 'OS <major>')")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_chrome() {
        let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                  (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
        let id = classify(ua).unwrap();
        assert_eq!(id.device, Device::Desktop);
        assert_eq!(id.browser, Browser::Chrome);
        assert_eq!(id.version, 120);
        assert_eq!(id.ios_major, None);
    }

    #[test]
    fn test_mobile_without_platform_is_android() {
        let id = classify("Mozilla/5.0 (Mobile; rv:125.0) Gecko/125.0 Firefox/125.0").unwrap();
        assert_eq!(id.device, Device::Android);
        assert_eq!(id.browser, Browser::Firefox);
        assert_eq!(id.version, 125);
    }

    #[test]
    fn test_iphone_without_os_version_fails() {
        let err =
            classify("Mozilla/5.0 (iPhone; like Mac OS X) Version/17.4 Safari/604.1").unwrap_err();
        assert!(matches!(err, Error::UserAgentParse(_)));
    }

    #[test]
    fn test_unknown_core_fails() {
        let err = classify("curl/8.4.0").unwrap_err();
        assert!(err.to_string().contains("curl/8.4.0"));
    }
}
