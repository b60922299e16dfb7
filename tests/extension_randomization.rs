//! Extension order randomization over real browser profiles.
//!
//! Randomized ClientHellos must carry the same extensions as the canonical
//! fingerprint, keep padding and pre_shared_key last, and leave ciphers and
//! groups untouched.

use std::collections::HashSet;

use browserprint::fingerprint::extensions::{Anchor, RandomizationPolicy};
use browserprint::{resolve_by_version, Browser, Device, ProfileBuilder, TlsProfile, ToleranceMode};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sorted(ids: &[u16]) -> Vec<u16> {
    let mut v = ids.to_vec();
    v.sort_unstable();
    v
}

#[test]
fn test_chrome_profiles_vary() {
    let descriptor = resolve_by_version(
        Browser::Chrome,
        120,
        Device::Desktop,
        None,
        ToleranceMode::Strict,
    )
    .unwrap();

    let mut orders = HashSet::new();
    for _ in 0..100 {
        let profile = ProfileBuilder::from_descriptor(&descriptor).build();
        assert!(profile.is_randomized());
        assert_eq!(sorted(profile.extension_order()), sorted(&descriptor.tls.extensions));
        assert_eq!(profile.cipher_order(), descriptor.tls.ciphers.as_slice());
        assert_eq!(profile.groups(), descriptor.tls.groups.as_slice());
        assert_eq!(profile.canonical_ja3_string(), descriptor.ja3);
        // padding (21) is the last extension Chrome 120 sends
        assert_eq!(profile.extension_order().last(), Some(&21));
        orders.insert(profile.extension_order().to_vec());
    }
    assert!(orders.len() > 1, "100 randomized profiles were all identical");
}

#[test]
fn test_disabled_randomization_is_stable() {
    let descriptor = resolve_by_version(
        Browser::Firefox,
        128,
        Device::Desktop,
        None,
        ToleranceMode::Strict,
    )
    .unwrap();

    for _ in 0..20 {
        let profile = ProfileBuilder::from_descriptor(&descriptor)
            .randomize_extensions(false)
            .build();
        assert_eq!(profile.extension_order(), descriptor.tls.extensions.as_slice());
        assert_eq!(profile.ja3_string(), descriptor.ja3);
        assert_eq!(profile.ja3_hash(), profile.canonical_ja3_hash());
    }
}

#[test]
fn test_wire_ja3_keeps_other_fields() {
    let profile = TlsProfile::from_version(Browser::Chrome, 135).unwrap();
    let wire = profile.ja3_string();
    let canonical = profile.canonical_ja3_string();
    let wire_fields: Vec<&str> = wire.split(',').collect();
    let canonical_fields: Vec<&str> = canonical.split(',').collect();
    assert_eq!(wire_fields.len(), 5);
    assert_eq!(wire_fields[0], canonical_fields[0]);
    assert_eq!(wire_fields[1], canonical_fields[1]);
    assert_eq!(wire_fields[3], canonical_fields[3]);
    assert_eq!(wire_fields[4], canonical_fields[4]);
}

#[test]
fn test_custom_anchors_on_seeded_rng() {
    let descriptor = resolve_by_version(
        Browser::Chrome,
        120,
        Device::Desktop,
        None,
        ToleranceMode::Strict,
    )
    .unwrap();
    let canonical = &descriptor.tls.extensions;

    let policy = RandomizationPolicy::randomized(vec![
        Anchor::head(0),
        Anchor::tail(43),
        Anchor::tail(21),
    ]);
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..50 {
        let out = policy.order_with_rng(canonical, &mut rng);
        assert_eq!(out.first(), Some(&0));
        // 43 precedes 21 in Chrome 120's canonical list
        assert_eq!(&out[out.len() - 2..], &[43, 21]);
        assert_eq!(sorted(&out), sorted(canonical));
    }
}

#[test]
fn test_builder_anchors_override_defaults() {
    let profile = ProfileBuilder::new()
        .extensions([0, 10, 13, 16, 21])
        .anchors(vec![Anchor::head(21)])
        .build();
    assert_eq!(profile.extension_order().first(), Some(&21));
    assert_eq!(profile.policy().anchors, vec![Anchor::head(21)]);
}
