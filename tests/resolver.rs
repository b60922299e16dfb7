//! End-to-end resolution tests.
//!
//! Run with: cargo test --test resolver

use browserprint::fingerprint::database::{SAFARI_MOBILE_H2, SAFARI_TLS};
use browserprint::fingerprint::http2::PseudoHeaderOrder;
use browserprint::fingerprint::tls::TLS_1_3;
use browserprint::{
    resolve_by_user_agent, resolve_by_version, Browser, Device, Error, FingerprintResolver,
    FragmentKind, Identity, ResolverConfig, TlsProfile, ToleranceMode,
};

const FIREFOX_128_UA: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:128.0) Gecko/20100101 Firefox/128.0";
const IPHONE_CHROME_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) \
    AppleWebKit/605.1.15 (KHTML, like Gecko) CriOS/123.0.6312.52 Mobile/15E148 Safari/604.1";

#[test]
fn test_chrome_135_strict_is_exact() {
    let d = resolve_by_version(
        Browser::Chrome,
        135,
        Device::Desktop,
        None,
        ToleranceMode::Strict,
    )
    .unwrap();
    assert!(d.is_exact());
    assert_eq!(d.identity.version, 135);
    assert_eq!(d.tls.ja3_string(), d.ja3);
    assert_eq!(d.http2.pseudo_order.akamai_string(), "m,a,s,p");
}

#[test]
fn test_chrome_72_nearest_vs_strict() {
    let d = resolve_by_version(
        Browser::Chrome,
        72,
        Device::Desktop,
        None,
        ToleranceMode::Reasonable,
    )
    .unwrap();
    assert!(!d.is_exact());
    assert_eq!(d.http2_distance, 1);

    let err = resolve_by_version(
        Browser::Chrome,
        72,
        Device::Desktop,
        None,
        ToleranceMode::Strict,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::NoMatchingFingerprint {
            kind: FragmentKind::Ja3,
            ..
        }
    ));
}

#[test]
fn test_firefox_user_agent() {
    let d = resolve_by_user_agent(FIREFOX_128_UA, ToleranceMode::Reasonable).unwrap();
    assert_eq!(d.identity.browser, Browser::Firefox);
    assert_eq!(d.identity.device, Device::Desktop);
    assert_eq!(d.tls.record_version, TLS_1_3);
    assert_eq!(d.http2.priorities.len(), 6);
    assert_eq!(d.http2.pseudo_order, PseudoHeaderOrder::Firefox);
    assert_eq!(d.http2.initial_window_update, 12517377);
}

#[test]
fn test_ios_chrome_resolves_to_webkit() {
    let chrome = resolve_by_version(
        Browser::Chrome,
        123,
        Device::Ios,
        Some(17),
        ToleranceMode::Strict,
    )
    .unwrap();
    let safari = resolve_by_version(
        Browser::Safari,
        17,
        Device::Ios,
        Some(17),
        ToleranceMode::Strict,
    )
    .unwrap();
    assert_eq!(chrome.ja3, safari.ja3);
    assert_eq!(chrome.akamai, safari.akamai);
    assert_eq!(chrome.identity.effective_browser(), Browser::Safari);

    let from_ua = resolve_by_user_agent(IPHONE_CHROME_UA, ToleranceMode::Strict).unwrap();
    assert_eq!(from_ua.ja3, safari.ja3);
}

#[test]
fn test_ios_keeps_requested_browser_tolerance() {
    // iOS 5 is 8 away from Safari's oldest entry (13): inside Chrome's 10.
    let d = resolve_by_version(
        Browser::Chrome,
        120,
        Device::Ios,
        Some(5),
        ToleranceMode::Reasonable,
    )
    .unwrap();
    let safari_13 = SAFARI_TLS.iter().find(|r| r.key() == "13").unwrap();
    assert_eq!(d.ja3, safari_13.fragment);
    assert_eq!(d.akamai, "4:1048576,3:100|10485760|0|m,s,p,a");
    assert_eq!(d.tls_distance, 8);
    assert!(SAFARI_MOBILE_H2.iter().any(|r| r.fragment == d.akamai));

    // Safari itself keeps its tolerance of 1.
    let err = resolve_by_version(
        Browser::Safari,
        17,
        Device::Ios,
        Some(5),
        ToleranceMode::Reasonable,
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "no matching ja3 string found in database for Safari on iOS version 5"
    );
}

#[test]
fn test_resolve_rechecks_ios_invariant() {
    let resolver = FingerprintResolver::default();

    let desktop_with_ios = Identity {
        device: Device::Desktop,
        browser: Browser::Chrome,
        version: 120,
        ios_major: Some(17),
    };
    let err = resolver
        .resolve(desktop_with_ios, ToleranceMode::Strict)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidIosVersion(_)));

    let ios_without_major = Identity {
        device: Device::Ios,
        browser: Browser::Safari,
        version: 17,
        ios_major: None,
    };
    let err = resolver
        .resolve(ios_without_major, ToleranceMode::Strict)
        .unwrap_err();
    assert!(matches!(err, Error::MissingIosVersion));
}

#[test]
fn test_resolve_by_names_validation_order() {
    let resolver = FingerprintResolver::default();

    // Mode is checked before anything else.
    let err = resolver
        .resolve_by_names("netscape", 4, "toaster", None, "fuzzy")
        .unwrap_err();
    assert!(matches!(err, Error::InvalidToleranceMode(ref m) if m == "fuzzy"));

    let err = resolver
        .resolve_by_names("netscape", 4, "toaster", None, "strict")
        .unwrap_err();
    assert!(matches!(err, Error::UnknownBrowser(_)));

    let err = resolver
        .resolve_by_names("chrome", 120, "toaster", None, "strict")
        .unwrap_err();
    assert!(matches!(err, Error::UnknownDevice(_)));

    let err = resolver
        .resolve_by_names("safari", 17, "ios", None, "strict")
        .unwrap_err();
    assert!(matches!(err, Error::MissingIosVersion));

    let err = resolver
        .resolve_by_names("safari", 17, "ios", Some("13.5"), "strict")
        .unwrap_err();
    assert!(matches!(err, Error::InvalidIosVersion(ref v) if v == "13.5"));

    let d = resolver
        .resolve_by_names("Safari", 17, "iOS", Some("17"), "reasonable")
        .unwrap();
    assert_eq!(d.identity.ios_major, Some(17));
}

#[test]
fn test_ios_major_rejected_off_ios() {
    let err = resolve_by_version(
        Browser::Chrome,
        120,
        Device::Desktop,
        Some(17),
        ToleranceMode::Strict,
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidIosVersion(_)));
}

#[test]
fn test_no_match_far_from_tables() {
    let err = resolve_by_version(
        Browser::Firefox,
        1,
        Device::Desktop,
        None,
        ToleranceMode::Reasonable,
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "no matching ja3 string found in database for Firefox version 1"
    );
}

#[test]
fn test_config_from_json_drives_resolver() {
    let config = ResolverConfig::from_json(
        r#"{"tolerance_mode": "strict", "randomize_extensions": false}"#,
    )
    .unwrap();
    let resolver = FingerprintResolver::new(config);

    assert!(resolver.resolve_desktop(Browser::Chrome, 72).is_err());

    let d = resolver.resolve_desktop(Browser::Chrome, 120).unwrap();
    let profile = resolver.profile(&d);
    assert!(!profile.is_randomized());
    assert_eq!(profile.ja3_string(), d.ja3);
}

#[test]
fn test_profile_from_version() {
    let profile = TlsProfile::from_version(Browser::Firefox, 130).unwrap();
    let identity = profile.identity().unwrap();
    assert_eq!(identity.browser, Browser::Firefox);
    assert_eq!(identity.device, Device::Desktop);
    assert!(profile.http2().is_some());
    assert!(profile.cipher_names().contains(&"TLS_AES_128_GCM_SHA256"));
}
